use super::*;

fn draft() -> ListingDraft {
    ListingDraft {
        name: "Desk Lamp".to_owned(),
        description: "A lamp for desks.".to_owned(),
        price: "24.99".to_owned(),
        category: "Furniture".to_owned(),
    }
}

// =============================================================
// Staged images
// =============================================================

#[test]
fn staged_images_cap_at_eight() {
    let mut staged = StagedImages::default();
    for i in 0..8 {
        assert!(staged.push(format!("img-{i}")));
    }
    assert!(!staged.push("img-9".to_owned()));
    assert_eq!(staged.len(), 8);
}

#[test]
fn can_accept_counts_incoming_batch() {
    let mut staged = StagedImages::default();
    for i in 0..6 {
        staged.push(format!("img-{i}"));
    }
    assert!(staged.can_accept(2));
    assert!(!staged.can_accept(3));
}

#[test]
fn remove_drops_by_index() {
    let mut staged = StagedImages::from(vec!["a".to_owned(), "b".to_owned(), "c".to_owned()]);
    staged.remove(1);
    assert_eq!(staged.as_slice(), ["a".to_owned(), "c".to_owned()]);
}

#[test]
fn remove_out_of_range_is_a_no_op() {
    let mut staged = StagedImages::from(vec!["a".to_owned()]);
    staged.remove(5);
    assert_eq!(staged.len(), 1);
}

#[test]
fn clear_empties_the_set() {
    let mut staged = StagedImages::from(vec!["a".to_owned(), "b".to_owned()]);
    staged.clear();
    assert!(staged.is_empty());
}

// =============================================================
// Draft validation
// =============================================================

#[test]
fn valid_draft_with_images_passes() {
    assert!(draft().validate(false).is_empty());
}

#[test]
fn blank_name_and_description_are_rejected() {
    let mut d = draft();
    d.name = "  ".to_owned();
    d.description = String::new();
    let errors = d.validate(false);
    assert!(errors.contains_key("name"));
    assert!(errors.contains_key("description"));
}

#[test]
fn price_must_parse_positive() {
    let mut d = draft();
    for bad in ["", "abc", "-3", "0"] {
        d.price = bad.to_owned();
        assert!(d.validate(false).contains_key("price"), "price {bad:?}");
    }
}

#[test]
fn all_pseudo_category_is_rejected() {
    let mut d = draft();
    d.category = "All".to_owned();
    assert!(d.validate(false).contains_key("category"));
}

#[test]
fn missing_images_are_rejected() {
    let errors = draft().validate(true);
    assert_eq!(
        errors.get("images").map(String::as_str),
        Some("At least one image is required.")
    );
}

#[test]
fn payload_trims_and_parses() {
    let mut d = draft();
    d.name = "  Desk Lamp  ".to_owned();
    let payload = d.to_payload(vec!["img".to_owned()]);
    assert_eq!(payload.name, "Desk Lamp");
    assert!((payload.price - 24.99).abs() < f64::EPSILON);
    assert_eq!(payload.images.len(), 1);
}

use super::*;

fn valid_form() -> RegisterForm {
    RegisterForm {
        first_name: "Ada".to_owned(),
        last_name: "Lovelace".to_owned(),
        email: "ada@example.com".to_owned(),
        password: "secret1".to_owned(),
        confirm_password: "secret1".to_owned(),
    }
}

// =============================================================
// Email shape
// =============================================================

#[test]
fn accepts_plain_addresses() {
    assert!(looks_like_email("a@b.com"));
    assert!(looks_like_email("first.last@sub.domain.org"));
}

#[test]
fn rejects_malformed_addresses() {
    for bad in ["", "plain", "@b.com", "a@", "a@b", "a@.com", "a@b."] {
        assert!(!looks_like_email(bad), "accepted {bad:?}");
    }
}

// =============================================================
// Registration
// =============================================================

#[test]
fn valid_registration_passes() {
    assert!(validate_register(&valid_form()).is_empty());
}

#[test]
fn missing_names_are_reported_per_field() {
    let mut form = valid_form();
    form.first_name = " ".to_owned();
    form.last_name = String::new();
    let errors = validate_register(&form);
    assert_eq!(errors.get("first_name").map(String::as_str), Some("First name is required."));
    assert_eq!(errors.get("last_name").map(String::as_str), Some("Last name is required."));
}

#[test]
fn short_password_is_rejected() {
    let mut form = valid_form();
    form.password = "five5".to_owned();
    form.confirm_password = "five5".to_owned();
    let errors = validate_register(&form);
    assert_eq!(
        errors.get("password").map(String::as_str),
        Some("Your password needs to be at least 6 characters long.")
    );
}

#[test]
fn mismatched_confirmation_lands_on_confirm_password() {
    let mut form = valid_form();
    form.confirm_password = "different".to_owned();
    let errors = validate_register(&form);
    assert_eq!(
        errors.get("confirm_password").map(String::as_str),
        Some("Passwords don't match")
    );
    // The password itself is fine; only the confirmation is flagged.
    assert!(!errors.contains_key("password"));
}

#[test]
fn empty_confirmation_asks_for_it() {
    let mut form = valid_form();
    form.confirm_password = String::new();
    let errors = validate_register(&form);
    assert_eq!(
        errors.get("confirm_password").map(String::as_str),
        Some("Please confirm your password.")
    );
}

// =============================================================
// Login
// =============================================================

#[test]
fn login_requires_email_and_password() {
    let errors = validate_login("nope", "");
    assert!(errors.contains_key("email"));
    assert!(errors.contains_key("password"));
    assert!(validate_login("a@b.com", "secret1").is_empty());
}

// =============================================================
// Profile changes
// =============================================================

#[test]
fn email_change_checks_shape() {
    assert!(validate_email_change("a@b.com").is_empty());
    assert!(validate_email_change("broken").contains_key("email"));
}

#[test]
fn password_change_checks_all_three_fields() {
    let errors = validate_password_change("", "short", "other");
    assert!(errors.contains_key("current_password"));
    assert!(errors.contains_key("password"));
    assert!(errors.contains_key("confirm_password"));
    assert!(validate_password_change("old-secret", "secret1", "secret1").is_empty());
}

use super::*;

fn product(name: &str, category: &str, price: f64, rating: f64, published: Option<&str>) -> Product {
    Product {
        id: 0,
        name: name.to_owned(),
        price,
        seller: "Ada".to_owned(),
        images: Vec::new(),
        category: category.to_owned(),
        rating,
        description: format!("{name} description"),
        owner_id: None,
        published_at: published.map(ToOwned::to_owned),
    }
}

// =============================================================
// Matching
// =============================================================

#[test]
fn empty_search_matches_everything_in_all() {
    let p = product("Lamp", "Furniture", 10.0, 4.0, None);
    assert!(matches(&p, "", "All"));
}

#[test]
fn search_is_case_insensitive_across_fields() {
    let p = product("Desk Lamp", "Furniture", 10.0, 4.0, None);
    assert!(matches(&p, "desk", "All"));
    assert!(matches(&p, "LAMP DESC", "All"));
    // Seller name matches too.
    assert!(matches(&p, "ada", "All"));
    assert!(!matches(&p, "bicycle", "All"));
}

#[test]
fn category_must_match_exactly() {
    let p = product("Lamp", "Furniture", 10.0, 4.0, None);
    assert!(matches(&p, "", "Furniture"));
    assert!(!matches(&p, "", "Electronics"));
}

// =============================================================
// Sorting
// =============================================================

#[test]
fn sorts_by_price_both_directions() {
    let products = vec![
        product("B", "Furniture", 30.0, 1.0, None),
        product("A", "Furniture", 10.0, 2.0, None),
        product("C", "Furniture", 20.0, 3.0, None),
    ];

    let state = CatalogState {
        sort: SortOrder::PriceLow,
        ..CatalogState::default()
    };
    let low: Vec<f64> = filter_and_sort(&products, &state).iter().map(|p| p.price).collect();
    assert_eq!(low, vec![10.0, 20.0, 30.0]);

    let state = CatalogState {
        sort: SortOrder::PriceHigh,
        ..CatalogState::default()
    };
    let high: Vec<f64> = filter_and_sort(&products, &state).iter().map(|p| p.price).collect();
    assert_eq!(high, vec![30.0, 20.0, 10.0]);
}

#[test]
fn sorts_by_rating_descending() {
    let products = vec![
        product("A", "Furniture", 1.0, 3.5, None),
        product("B", "Furniture", 1.0, 4.8, None),
    ];
    let state = CatalogState {
        sort: SortOrder::Rating,
        ..CatalogState::default()
    };
    let names: Vec<String> = filter_and_sort(&products, &state)
        .into_iter()
        .map(|p| p.name)
        .collect();
    assert_eq!(names, vec!["B", "A"]);
}

#[test]
fn sorts_by_date_with_missing_dates_oldest() {
    let products = vec![
        product("old", "Furniture", 1.0, 1.0, Some("2024-01-01T00:00:00Z")),
        product("new", "Furniture", 1.0, 1.0, Some("2025-06-01T00:00:00Z")),
        product("undated", "Furniture", 1.0, 1.0, None),
    ];
    let state = CatalogState::default(); // DateNewest
    let names: Vec<String> = filter_and_sort(&products, &state)
        .into_iter()
        .map(|p| p.name)
        .collect();
    assert_eq!(names, vec!["new", "old", "undated"]);

    let state = CatalogState {
        sort: SortOrder::DateOldest,
        ..CatalogState::default()
    };
    let names: Vec<String> = filter_and_sort(&products, &state)
        .into_iter()
        .map(|p| p.name)
        .collect();
    assert_eq!(names, vec!["undated", "old", "new"]);
}

#[test]
fn sorts_by_name_alphabetically() {
    let products = vec![
        product("Zebra print", "Furniture", 1.0, 1.0, None),
        product("Armchair", "Furniture", 1.0, 1.0, None),
    ];
    let state = CatalogState {
        sort: SortOrder::Name,
        ..CatalogState::default()
    };
    let names: Vec<String> = filter_and_sort(&products, &state)
        .into_iter()
        .map(|p| p.name)
        .collect();
    assert_eq!(names, vec!["Armchair", "Zebra print"]);
}

#[test]
fn filter_and_sort_combines_both() {
    let products = vec![
        product("Desk Lamp", "Furniture", 30.0, 1.0, None),
        product("Floor Lamp", "Furniture", 10.0, 2.0, None),
        product("Lamp Shade", "Home & Garden", 5.0, 3.0, None),
        product("Keyboard", "Electronics", 50.0, 4.0, None),
    ];
    let state = CatalogState {
        search: "lamp".to_owned(),
        category: "Furniture".to_owned(),
        sort: SortOrder::PriceLow,
    };
    let names: Vec<String> = filter_and_sort(&products, &state)
        .into_iter()
        .map(|p| p.name)
        .collect();
    assert_eq!(names, vec!["Floor Lamp", "Desk Lamp"]);
}

// =============================================================
// Sort keys
// =============================================================

#[test]
fn sort_keys_round_trip() {
    for order in SortOrder::ALL {
        assert_eq!(SortOrder::from_key(order.key()), order);
    }
}

#[test]
fn unknown_sort_key_falls_back_to_default() {
    assert_eq!(SortOrder::from_key("bogus"), SortOrder::DateNewest);
}

#[test]
fn all_is_the_first_category() {
    assert_eq!(CATEGORIES[0], "All");
    assert_eq!(CatalogState::default().category, "All");
}

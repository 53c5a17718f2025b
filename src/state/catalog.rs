//! Catalog browsing state: search text, category filter, sort order.
//!
//! Filtering and sorting are pure functions over the fetched product
//! list; the page re-derives the visible list from these on every
//! signal change.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use std::cmp::Ordering;

use crate::net::types::Product;

/// Fixed category list, "All" first.
pub const CATEGORIES: [&str; 15] = [
    "All",
    "Electronics",
    "Furniture",
    "Home & Garden",
    "Clothing",
    "Books & Media",
    "Sports & Outdoors",
    "Beauty & Health",
    "Toys & Games",
    "Automotive",
    "Art & Collectibles",
    "Food & Beverages",
    "Pet Supplies",
    "Tools & Hardware",
    "Jewelry & Accessories",
];

/// Available catalog sort orders.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    DateNewest,
    DateOldest,
    PriceLow,
    PriceHigh,
    Rating,
    Name,
}

impl SortOrder {
    pub const ALL: [SortOrder; 6] = [
        SortOrder::DateNewest,
        SortOrder::DateOldest,
        SortOrder::PriceLow,
        SortOrder::PriceHigh,
        SortOrder::Rating,
        SortOrder::Name,
    ];

    /// Stable key for `<option value>` round-tripping.
    pub fn key(self) -> &'static str {
        match self {
            SortOrder::DateNewest => "date-newest",
            SortOrder::DateOldest => "date-oldest",
            SortOrder::PriceLow => "price-low",
            SortOrder::PriceHigh => "price-high",
            SortOrder::Rating => "rating",
            SortOrder::Name => "name",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortOrder::DateNewest => "Newest first",
            SortOrder::DateOldest => "Oldest first",
            SortOrder::PriceLow => "Price: low to high",
            SortOrder::PriceHigh => "Price: high to low",
            SortOrder::Rating => "Highest rated",
            SortOrder::Name => "Name",
        }
    }

    /// Unknown keys fall back to the default order.
    pub fn from_key(key: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|order| order.key() == key)
            .unwrap_or_default()
    }
}

/// Current browse controls.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogState {
    pub search: String,
    pub category: String,
    pub sort: SortOrder,
}

impl Default for CatalogState {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: "All".to_owned(),
            sort: SortOrder::default(),
        }
    }
}

/// Case-insensitive match on name, description, or seller; category must
/// match exactly unless "All" is selected.
pub fn matches(product: &Product, search: &str, category: &str) -> bool {
    let needle = search.to_lowercase();
    let matches_search = needle.is_empty()
        || product.name.to_lowercase().contains(&needle)
        || product.description.to_lowercase().contains(&needle)
        || product.seller.to_lowercase().contains(&needle);
    let matches_category = category == "All" || product.category == category;
    matches_search && matches_category
}

fn compare(a: &Product, b: &Product, sort: SortOrder) -> Ordering {
    match sort {
        // ISO-8601 timestamps compare chronologically as strings; a
        // missing date sorts as oldest.
        SortOrder::DateNewest => b.published_at.cmp(&a.published_at),
        SortOrder::DateOldest => a.published_at.cmp(&b.published_at),
        SortOrder::PriceLow => a.price.total_cmp(&b.price),
        SortOrder::PriceHigh => b.price.total_cmp(&a.price),
        SortOrder::Rating => b.rating.total_cmp(&a.rating),
        SortOrder::Name => a.name.cmp(&b.name),
    }
}

/// Derive the visible product list from the fetched catalog.
pub fn filter_and_sort(products: &[Product], state: &CatalogState) -> Vec<Product> {
    let mut visible: Vec<Product> = products
        .iter()
        .filter(|p| matches(p, &state.search, &state.category))
        .cloned()
        .collect();
    visible.sort_by(|a, b| compare(a, b, state.sort));
    visible
}

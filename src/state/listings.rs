//! Listing management state: the staged image set for a new or edited
//! listing, and the draft form fields.

#[cfg(test)]
#[path = "listings_test.rs"]
mod listings_test;

use crate::net::types::ProductPayload;
use crate::util::images::MAX_IMAGES_PER_LISTING;
use crate::util::validate::FieldErrors;

/// Compressed images staged for upload, capped at eight per listing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StagedImages {
    images: Vec<String>,
}

impl StagedImages {
    /// Whether `incoming` more images still fit under the cap.
    pub fn can_accept(&self, incoming: usize) -> bool {
        self.images.len() + incoming <= MAX_IMAGES_PER_LISTING
    }

    /// Stage a compressed image. Returns `false` (and stages nothing)
    /// when the cap is reached.
    pub fn push(&mut self, data_url: String) -> bool {
        if self.images.len() >= MAX_IMAGES_PER_LISTING {
            return false;
        }
        self.images.push(data_url);
        true
    }

    /// Remove a staged image; out-of-range indices are a no-op.
    pub fn remove(&mut self, index: usize) {
        if index < self.images.len() {
            self.images.remove(index);
        }
    }

    pub fn clear(&mut self) {
        self.images.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.images
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.images.clone()
    }
}

impl From<Vec<String>> for StagedImages {
    fn from(images: Vec<String>) -> Self {
        Self { images }
    }
}

/// Draft form fields for a listing. Price stays a string until
/// validation so the input can hold whatever the user typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListingDraft {
    pub name: String,
    pub description: String,
    pub price: String,
    pub category: String,
}

impl ListingDraft {
    /// Validate the draft; `images_empty` covers the at-least-one-image
    /// rule for new listings.
    pub fn validate(&self, images_empty: bool) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if self.name.trim().is_empty() {
            errors.insert("name", "Product name is required.".to_owned());
        }
        if self.description.trim().is_empty() {
            errors.insert("description", "Description is required.".to_owned());
        }
        match self.price.trim().parse::<f64>() {
            Ok(price) if price > 0.0 => {}
            _ => {
                errors.insert("price", "Price must be a positive number.".to_owned());
            }
        }
        if self.category.trim().is_empty() || self.category == "All" {
            errors.insert("category", "Please pick a category.".to_owned());
        }
        if images_empty {
            errors.insert("images", "At least one image is required.".to_owned());
        }
        errors
    }

    /// Build the API payload. Call only after `validate` passed; an
    /// unparseable price falls back to zero rather than panicking.
    pub fn to_payload(&self, images: Vec<String>) -> ProductPayload {
        ProductPayload {
            name: self.name.trim().to_owned(),
            description: self.description.trim().to_owned(),
            price: self.price.trim().parse().unwrap_or(0.0),
            category: self.category.clone(),
            images,
        }
    }
}

//! Page components, one per route.

pub mod edit_product;
pub mod home;
pub mod login;
pub mod my_listings;
pub mod product_details;
pub mod profile;
pub mod register;

//! Reusable UI components.

pub mod footer;
pub mod nav_bar;
pub mod product_card;
pub mod require_auth;
pub mod toast_stack;

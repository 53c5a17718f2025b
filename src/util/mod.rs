//! Small shared utilities.

pub mod images;
pub mod validate;

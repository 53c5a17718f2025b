//! Form field validation.
//!
//! Pure checks run before any network call; pages render the returned
//! map inline next to the offending fields. Keys are the snake_case
//! field names of the owning form.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use std::collections::BTreeMap;

/// Field name to error message.
pub type FieldErrors = BTreeMap<&'static str, String>;

/// Minimal structural check: non-empty local part, an `@`, and a dot
/// somewhere in the domain. The API is the authority on deliverability.
pub fn looks_like_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && !tld.is_empty()
}

/// Fields of the registration form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Validate the registration form. A mismatched confirmation is reported
/// on `confirm_password`, matching where the user has to fix it.
pub fn validate_register(form: &RegisterForm) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if form.first_name.trim().is_empty() {
        errors.insert("first_name", "First name is required.".to_owned());
    }
    if form.last_name.trim().is_empty() {
        errors.insert("last_name", "Last name is required.".to_owned());
    }
    if !looks_like_email(&form.email) {
        errors.insert("email", "Please provide a valid email address.".to_owned());
    }
    if form.password.len() < 6 {
        errors.insert(
            "password",
            "Your password needs to be at least 6 characters long.".to_owned(),
        );
    }
    if form.confirm_password.is_empty() {
        errors.insert("confirm_password", "Please confirm your password.".to_owned());
    } else if form.confirm_password != form.password {
        errors.insert("confirm_password", "Passwords don't match".to_owned());
    }
    errors
}

/// Validate the login form.
pub fn validate_login(email: &str, password: &str) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if !looks_like_email(email) {
        errors.insert("email", "Please provide a valid email address.".to_owned());
    }
    if password.is_empty() {
        errors.insert("password", "Password is required.".to_owned());
    }
    errors
}

/// Validate a profile email change.
pub fn validate_email_change(email: &str) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if !looks_like_email(email) {
        errors.insert("email", "Please provide a valid email address.".to_owned());
    }
    errors
}

/// Validate a profile password change.
pub fn validate_password_change(current: &str, new: &str, confirm: &str) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if current.is_empty() {
        errors.insert("current_password", "Current password is required.".to_owned());
    }
    if new.len() < 6 {
        errors.insert(
            "password",
            "Your password needs to be at least 6 characters long.".to_owned(),
        );
    }
    if confirm.is_empty() {
        errors.insert("confirm_password", "Please confirm your password.".to_owned());
    } else if confirm != new {
        errors.insert("confirm_password", "Passwords don't match".to_owned());
    }
    errors
}

//! Wire types shared with the external REST API.
//!
//! Field names follow the API's camelCase JSON; structs stay `PartialEq`
//! so state diffs and tests can compare them directly.

use serde::{Deserialize, Serialize};

/// The authenticated user's profile as issued by the API.
///
/// Immutable once issued; profile edits replace the whole value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: String,
    pub email: String,
    #[serde(rename = "firstName", default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(rename = "lastName", default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

impl Identity {
    /// Display name: "First Last" when available, otherwise the email.
    pub fn display_name(&self) -> String {
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => format!("{first} {last}"),
            (Some(first), None) => first.clone(),
            (None, Some(last)) => last.clone(),
            (None, None) => self.email.clone(),
        }
    }
}

/// Response of the credential-exchange endpoints (`/login`, `/register`).
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CredentialResponse {
    pub user: Identity,
    #[serde(rename = "accessToken")]
    pub access_token: String,
}

/// A marketplace product as served by `/products`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub seller: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "ownerId", default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,
    #[serde(rename = "publishedAt", default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<String>,
}

impl Product {
    /// Whether `user_id` owns this product. UI convenience only; the API
    /// enforces the authoritative ownership check.
    pub fn is_owned_by(&self, user_id: &str) -> bool {
        self.owner_id.as_deref() == Some(user_id)
    }
}

/// Body for `POST /login`.
#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body for `POST /register`. The password confirmation never leaves the
/// client; it is checked before any network call.
#[derive(Clone, Debug, Serialize)]
pub struct RegisterRequest {
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    pub email: String,
    pub password: String,
}

/// Body for creating or replacing a product listing.
#[derive(Clone, Debug, Serialize)]
pub struct ProductPayload {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub images: Vec<String>,
}

/// Body for `PATCH /users/me` email updates.
#[derive(Clone, Debug, Serialize)]
pub struct UpdateEmailRequest {
    pub email: String,
}

/// Body for `PATCH /users/me` password updates.
#[derive(Clone, Debug, Serialize)]
pub struct UpdatePasswordRequest {
    #[serde(rename = "currentPassword")]
    pub current_password: String,
    pub password: String,
}

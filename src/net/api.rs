//! REST API helpers for communicating with the marketplace API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since these endpoints are
//! only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, String>` with a user-presentable
//! message. Failures never touch session state; the initiating view
//! decides whether to toast or render the message inline.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{CredentialResponse, Product, ProductPayload, RegisterRequest};
#[cfg(feature = "hydrate")]
use super::types::{LoginRequest, UpdateEmailRequest, UpdatePasswordRequest};

/// Value of the `Authorization` header for an authenticated request.
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Extract a user-presentable message from an error response body.
///
/// The API answers errors either as `{"message": "..."}`, as a bare JSON
/// string, or with an empty body; fall back to the status code.
pub fn error_message(status: u16, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(message) = value.get("message").and_then(|m| m.as_str()) {
            return message.to_owned();
        }
        if let Some(message) = value.as_str() {
            return message.to_owned();
        }
    }
    format!("Request failed with status {status}")
}

#[cfg(feature = "hydrate")]
async fn fail_from(resp: gloo_net::http::Response) -> String {
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    error_message(status, &body)
}

/// Exchange credentials for a session via `POST /api/login`.
pub async fn login(email: &str, password: &str) -> Result<CredentialResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let body = LoginRequest {
            email: email.to_owned(),
            password: password.to_owned(),
        };
        let resp = gloo_net::http::Request::post("/api/login")
            .json(&body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(fail_from(resp).await);
        }
        resp.json::<CredentialResponse>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err("not available on server".to_owned())
    }
}

/// Create an account via `POST /api/register`. Answers with the same
/// shape as `login`, so a fresh registration goes straight into a session.
pub async fn register(req: &RegisterRequest) -> Result<CredentialResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/register")
            .json(req)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(fail_from(resp).await);
        }
        resp.json::<CredentialResponse>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = req;
        Err("not available on server".to_owned())
    }
}

/// Fetch the full product catalog from `GET /api/products`.
pub async fn fetch_products(token: Option<&str>) -> Result<Vec<Product>, String> {
    #[cfg(feature = "hydrate")]
    {
        let mut req = gloo_net::http::Request::get("/api/products");
        if let Some(token) = token {
            req = req.header("Authorization", &bearer(token));
        }
        let resp = req.send().await.map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(fail_from(resp).await);
        }
        resp.json::<Vec<Product>>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err("not available on server".to_owned())
    }
}

/// Fetch one product from `GET /api/products/{id}`.
pub async fn fetch_product(id: u64, token: Option<&str>) -> Result<Product, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("/api/products/{id}");
        let mut req = gloo_net::http::Request::get(&url);
        if let Some(token) = token {
            req = req.header("Authorization", &bearer(token));
        }
        let resp = req.send().await.map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(fail_from(resp).await);
        }
        resp.json::<Product>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, token);
        Err("not available on server".to_owned())
    }
}

/// Create a listing via `POST /api/products`.
pub async fn create_product(payload: &ProductPayload, token: &str) -> Result<Product, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/products")
            .header("Authorization", &bearer(token))
            .json(payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(fail_from(resp).await);
        }
        resp.json::<Product>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (payload, token);
        Err("not available on server".to_owned())
    }
}

/// Replace a listing via `PUT /api/products/{id}`.
pub async fn update_product(
    id: u64,
    payload: &ProductPayload,
    token: &str,
) -> Result<Product, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("/api/products/{id}");
        let resp = gloo_net::http::Request::put(&url)
            .header("Authorization", &bearer(token))
            .json(payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(fail_from(resp).await);
        }
        resp.json::<Product>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, payload, token);
        Err("not available on server".to_owned())
    }
}

/// Delete a listing via `DELETE /api/products/{id}`.
pub async fn delete_product(id: u64, token: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("/api/products/{id}");
        let resp = gloo_net::http::Request::delete(&url)
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(fail_from(resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, token);
        Err("not available on server".to_owned())
    }
}

/// Update the account email via `PATCH /api/users/me`.
pub async fn update_email(email: &str, token: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let body = UpdateEmailRequest {
            email: email.to_owned(),
        };
        let resp = gloo_net::http::Request::patch("/api/users/me")
            .header("Authorization", &bearer(token))
            .json(&body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(fail_from(resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, token);
        Err("not available on server".to_owned())
    }
}

/// Update the account password via `PATCH /api/users/me`.
pub async fn update_password(current: &str, new: &str, token: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let body = UpdatePasswordRequest {
            current_password: current.to_owned(),
            password: new.to_owned(),
        };
        let resp = gloo_net::http::Request::patch("/api/users/me")
            .header("Authorization", &bearer(token))
            .json(&body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(fail_from(resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (current, new, token);
        Err("not available on server".to_owned())
    }
}

/// Delete the account via `DELETE /api/users/me`.
pub async fn delete_account(token: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::delete("/api/users/me")
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(fail_from(resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err("not available on server".to_owned())
    }
}

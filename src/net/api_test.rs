use super::*;

// =============================================================
// Bearer header
// =============================================================

#[test]
fn bearer_prefixes_token() {
    assert_eq!(bearer("tok"), "Bearer tok");
}

// =============================================================
// Error body extraction
// =============================================================

#[test]
fn error_message_prefers_message_field() {
    let msg = error_message(400, r#"{"message":"Email already taken"}"#);
    assert_eq!(msg, "Email already taken");
}

#[test]
fn error_message_accepts_bare_json_string() {
    let msg = error_message(400, r#""Invalid credentials""#);
    assert_eq!(msg, "Invalid credentials");
}

#[test]
fn error_message_falls_back_to_status() {
    assert_eq!(error_message(500, ""), "Request failed with status 500");
    assert_eq!(error_message(404, "not json"), "Request failed with status 404");
}

#[test]
fn error_message_ignores_non_string_message() {
    let msg = error_message(422, r#"{"message":42}"#);
    assert_eq!(msg, "Request failed with status 422");
}

// =============================================================
// Wire type shapes
// =============================================================

#[test]
fn credential_response_decodes_api_shape() {
    let raw = r#"{"user":{"id":"1","email":"a@b.com"},"accessToken":"tok"}"#;
    let resp: CredentialResponse = serde_json::from_str(raw).expect("credential response");
    assert_eq!(resp.user.id, "1");
    assert_eq!(resp.user.email, "a@b.com");
    assert!(resp.user.first_name.is_none());
    assert_eq!(resp.access_token, "tok");
}

#[test]
fn product_decodes_with_missing_optional_fields() {
    let raw = r#"{"id":7,"name":"Lamp","price":12.5}"#;
    let product: Product = serde_json::from_str(raw).expect("product");
    assert_eq!(product.id, 7);
    assert!(product.images.is_empty());
    assert!(product.owner_id.is_none());
    assert!(product.published_at.is_none());
}

#[test]
fn product_ownership_is_exact_match() {
    let raw = r#"{"id":7,"name":"Lamp","price":12.5,"ownerId":"u-1"}"#;
    let product: Product = serde_json::from_str(raw).expect("product");
    assert!(product.is_owned_by("u-1"));
    assert!(!product.is_owned_by("u-2"));
}

#[test]
fn register_request_serializes_camel_case() {
    let req = RegisterRequest {
        first_name: "Ada".to_owned(),
        last_name: "Lovelace".to_owned(),
        email: "ada@example.com".to_owned(),
        password: "secret1".to_owned(),
    };
    let json = serde_json::to_value(&req).expect("serialize");
    assert_eq!(json["firstName"], "Ada");
    assert_eq!(json["lastName"], "Lovelace");
    assert!(json.get("confirmPassword").is_none());
}

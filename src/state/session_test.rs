use std::cell::RefCell;

use proptest::prelude::*;

use super::*;
use crate::net::types::{CredentialResponse, Identity};

/// In-memory stand-in for localStorage.
#[derive(Default)]
struct MemoryStorage {
    cell: RefCell<Option<String>>,
}

impl SessionBackend for MemoryStorage {
    fn read(&self) -> Result<Option<String>, String> {
        Ok(self.cell.borrow().clone())
    }

    fn write(&self, raw: &str) -> Result<(), String> {
        *self.cell.borrow_mut() = Some(raw.to_owned());
        Ok(())
    }

    fn remove(&self) {
        *self.cell.borrow_mut() = None;
    }
}

/// Storage whose writes always fail.
struct FailingStorage;

impl SessionBackend for FailingStorage {
    fn read(&self) -> Result<Option<String>, String> {
        Err("storage unavailable".to_owned())
    }

    fn write(&self, _raw: &str) -> Result<(), String> {
        Err("storage unavailable".to_owned())
    }

    fn remove(&self) {}
}

fn identity() -> Identity {
    Identity {
        id: "1".to_owned(),
        email: "a@b.com".to_owned(),
        first_name: None,
        last_name: None,
    }
}

// =============================================================
// Session shape
// =============================================================

#[test]
fn empty_session_has_neither_half() {
    let session = Session::empty();
    assert!(!session.is_authenticated());
    assert!(session.identity().is_none());
    assert!(session.token().is_none());
}

#[test]
fn authenticated_session_has_both_halves() {
    let session = Session::authenticated(identity(), "tok");
    assert!(session.is_authenticated());
    assert_eq!(session.identity().map(|i| i.id.as_str()), Some("1"));
    assert_eq!(session.token(), Some("tok"));
}

// =============================================================
// Record decoding
// =============================================================

#[test]
fn decode_round_trips_encode() {
    let credentials = Credentials::new(identity(), "tok");
    let raw = encode_record(&credentials).expect("encode");
    assert_eq!(decode_record(&raw), Some(credentials));
}

#[test]
fn decode_rejects_corrupt_record() {
    assert_eq!(decode_record("not json at all"), None);
    assert_eq!(decode_record("{\"user\":"), None);
}

#[test]
fn decode_rejects_half_present_records() {
    assert_eq!(decode_record(r#"{"user":{"id":"1","email":"a@b.com"}}"#), None);
    assert_eq!(decode_record(r#"{"accessToken":"tok"}"#), None);
    assert_eq!(decode_record(r#"{"user":null,"accessToken":"tok"}"#), None);
    assert_eq!(decode_record("{}"), None);
}

proptest! {
    // A record holding exactly one of the two halves never decodes into
    // credentials, regardless of the half's contents.
    #[test]
    fn half_present_records_never_decode(id in ".*", email in ".*", token in ".*", keep_user in any::<bool>()) {
        let raw = if keep_user {
            serde_json::json!({"user": {"id": id, "email": email}}).to_string()
        } else {
            serde_json::json!({"accessToken": token}).to_string()
        };
        prop_assert_eq!(decode_record(&raw), None);
    }

    // Decoding arbitrary input must not panic.
    #[test]
    fn decode_never_panics(raw in ".*") {
        let _ = decode_record(&raw);
    }
}

// =============================================================
// Restore
// =============================================================

#[test]
fn restore_adopts_well_formed_record() {
    let storage = MemoryStorage::default();
    let credentials = Credentials::new(identity(), "tok");
    storage
        .write(&encode_record(&credentials).expect("encode"))
        .expect("write");

    let core = SessionCore::restore(&storage);
    assert_eq!(core.current(), &Session::from(credentials));
}

#[test]
fn restore_with_absent_record_is_empty() {
    let core = SessionCore::restore(&MemoryStorage::default());
    assert_eq!(core.current(), &Session::empty());
}

#[test]
fn restore_with_corrupt_record_is_empty() {
    let storage = MemoryStorage::default();
    storage.write("{{{definitely not json").expect("write");

    let core = SessionCore::restore(&storage);
    assert_eq!(core.current(), &Session::empty());
}

#[test]
fn restore_with_unavailable_storage_is_empty() {
    let core = SessionCore::restore(&FailingStorage);
    assert_eq!(core.current(), &Session::empty());
}

// =============================================================
// Login / logout
// =============================================================

#[test]
fn login_then_current_round_trips() {
    let storage = MemoryStorage::default();
    let mut core = SessionCore::default();
    let credentials = Credentials::new(identity(), "tok");

    core.login(&storage, credentials.clone()).expect("login");
    assert_eq!(core.current(), &Session::from(credentials));
}

#[test]
fn login_persists_record_before_adopting() {
    let storage = MemoryStorage::default();
    let mut core = SessionCore::default();
    let credentials = Credentials::new(identity(), "tok");

    core.login(&storage, credentials.clone()).expect("login");
    let raw = storage.read().expect("read").expect("record present");
    assert_eq!(decode_record(&raw), Some(credentials));
}

#[test]
fn failed_login_write_leaves_session_untouched() {
    let mut core = SessionCore::default();
    let err = core.login(&FailingStorage, Credentials::new(identity(), "tok"));

    assert!(err.is_err());
    assert_eq!(core.current(), &Session::empty());
}

#[test]
fn failed_login_write_does_not_clobber_previous_session() {
    let storage = MemoryStorage::default();
    let mut core = SessionCore::default();
    let first = Credentials::new(identity(), "tok-1");
    core.login(&storage, first.clone()).expect("login");

    let err = core.login(&FailingStorage, Credentials::new(identity(), "tok-2"));
    assert!(err.is_err());
    assert_eq!(core.current(), &Session::from(first));
}

#[test]
fn logout_clears_session_and_record() {
    let storage = MemoryStorage::default();
    let mut core = SessionCore::default();
    core.login(&storage, Credentials::new(identity(), "tok"))
        .expect("login");

    core.logout(&storage);
    assert_eq!(core.current(), &Session::empty());
    assert_eq!(storage.read().expect("read"), None);
}

#[test]
fn logout_is_idempotent() {
    let storage = MemoryStorage::default();
    let mut core = SessionCore::default();

    core.logout(&storage);
    let after_first = core.clone();
    core.logout(&storage);
    assert_eq!(core, after_first);
    assert_eq!(core.current(), &Session::empty());
}

// =============================================================
// End to end: credential exchange response into the store
// =============================================================

#[test]
fn exchange_response_becomes_current_session_and_record() {
    let raw = r#"{"user":{"id":"1","email":"a@b.com"},"accessToken":"tok"}"#;
    let resp: CredentialResponse = serde_json::from_str(raw).expect("response");

    let storage = MemoryStorage::default();
    let mut core = SessionCore::default();
    core.login(&storage, Credentials::new(resp.user, resp.access_token))
        .expect("login");

    let expected = Session::authenticated(
        Identity {
            id: "1".to_owned(),
            email: "a@b.com".to_owned(),
            first_name: None,
            last_name: None,
        },
        "tok",
    );
    assert_eq!(core.current(), &expected);

    let persisted = storage.read().expect("read").expect("record present");
    assert_eq!(
        decode_record(&persisted).map(Session::from),
        Some(expected)
    );
}

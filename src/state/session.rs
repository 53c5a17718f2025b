//! Session state: who is logged in, and with what credential.
//!
//! DESIGN
//! ======
//! `Session` wraps `Option<Credentials>`, so "identity without token"
//! (or the reverse) is unrepresentable. The persisted record under the
//! `bazaar_auth` localStorage key uses the same `{user, accessToken}`
//! shape the credential-exchange endpoints answer with.
//!
//! Mutation ordering on login is write-record-then-update-memory: if the
//! storage write fails, in-memory state is left untouched and the error
//! is surfaced to the credential-exchange path. Restore never fails; a
//! corrupt or half-present record degrades to the empty session with a
//! logged warning.
//!
//! Storage sits behind the `SessionBackend` trait so the logic is
//! host-testable; the browser implementation is `hydrate`-gated.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::net::types::Identity;

/// localStorage key holding the persisted session record.
pub const STORAGE_KEY: &str = "bazaar_auth";

/// An identity/token pair. Constructing one requires both halves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    pub identity: Identity,
    pub token: String,
}

impl Credentials {
    pub fn new(identity: Identity, token: impl Into<String>) -> Self {
        Self {
            identity,
            token: token.into(),
        }
    }
}

/// The current session: empty, or an identity with its token.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session(Option<Credentials>);

impl Session {
    pub fn empty() -> Self {
        Self(None)
    }

    pub fn authenticated(identity: Identity, token: impl Into<String>) -> Self {
        Self(Some(Credentials::new(identity, token)))
    }

    pub fn is_authenticated(&self) -> bool {
        self.0.is_some()
    }

    pub fn credentials(&self) -> Option<&Credentials> {
        self.0.as_ref()
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.0.as_ref().map(|c| &c.identity)
    }

    pub fn token(&self) -> Option<&str> {
        self.0.as_ref().map(|c| c.token.as_str())
    }
}

impl From<Credentials> for Session {
    fn from(credentials: Credentials) -> Self {
        Self(Some(credentials))
    }
}

/// Storage seam for the persisted session record.
pub trait SessionBackend {
    /// Read the raw record, `Ok(None)` when absent.
    fn read(&self) -> Result<Option<String>, String>;
    /// Write the raw record.
    fn write(&self, raw: &str) -> Result<(), String>;
    /// Remove the record. Removal failures are indistinguishable from an
    /// already-absent record, so this is infallible.
    fn remove(&self);
}

/// Serialized shape of the persisted record. Halves are optional here
/// only so decoding can reject half-present records explicitly.
#[derive(Debug, Serialize, Deserialize)]
struct SessionRecord {
    user: Option<Identity>,
    #[serde(rename = "accessToken")]
    access_token: Option<String>,
}

/// Decode a raw persisted record. Anything short of a well-formed record
/// with both halves present decodes to `None`.
pub fn decode_record(raw: &str) -> Option<Credentials> {
    let record: SessionRecord = serde_json::from_str(raw).ok()?;
    match (record.user, record.access_token) {
        (Some(identity), Some(token)) => Some(Credentials { identity, token }),
        _ => None,
    }
}

/// Encode credentials into the persisted record shape.
pub fn encode_record(credentials: &Credentials) -> Result<String, String> {
    let record = SessionRecord {
        user: Some(credentials.identity.clone()),
        access_token: Some(credentials.token.clone()),
    };
    serde_json::to_string(&record).map_err(|e| e.to_string())
}

/// Read and decode the persisted record. Never fails: storage errors and
/// unreadable records degrade to the empty session.
pub fn restore_session<B: SessionBackend>(backend: &B) -> Session {
    match backend.read() {
        Ok(Some(raw)) => match decode_record(&raw) {
            Some(credentials) => Session::from(credentials),
            None => {
                leptos::logging::warn!("discarding unreadable session record");
                Session::empty()
            }
        },
        Ok(None) => Session::empty(),
        Err(e) => {
            leptos::logging::warn!("session storage unavailable: {e}");
            Session::empty()
        }
    }
}

/// Signal-free session logic; `SessionStore` wraps this in a signal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionCore {
    session: Session,
}

impl SessionCore {
    pub fn restore<B: SessionBackend>(backend: &B) -> Self {
        Self {
            session: restore_session(backend),
        }
    }

    pub fn current(&self) -> &Session {
        &self.session
    }

    /// Persist then adopt the new session. On a storage failure the
    /// in-memory session is left untouched and the error is returned.
    pub fn login<B: SessionBackend>(
        &mut self,
        backend: &B,
        credentials: Credentials,
    ) -> Result<(), String> {
        let raw = encode_record(&credentials)?;
        backend.write(&raw)?;
        self.session = Session::from(credentials);
        Ok(())
    }

    /// Remove the record and reset to empty. Idempotent.
    pub fn logout<B: SessionBackend>(&mut self, backend: &B) {
        backend.remove();
        self.session = Session::empty();
    }
}

/// Browser localStorage backend.
#[cfg(feature = "hydrate")]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
impl SessionBackend for BrowserStorage {
    fn read(&self) -> Result<Option<String>, String> {
        let window = web_sys::window().ok_or_else(|| "no window".to_owned())?;
        let storage = window
            .local_storage()
            .map_err(|_| "localStorage unavailable".to_owned())?
            .ok_or_else(|| "localStorage unavailable".to_owned())?;
        storage
            .get_item(STORAGE_KEY)
            .map_err(|_| "localStorage read failed".to_owned())
    }

    fn write(&self, raw: &str) -> Result<(), String> {
        let window = web_sys::window().ok_or_else(|| "no window".to_owned())?;
        let storage = window
            .local_storage()
            .map_err(|_| "localStorage unavailable".to_owned())?
            .ok_or_else(|| "localStorage unavailable".to_owned())?;
        storage
            .set_item(STORAGE_KEY, raw)
            .map_err(|_| "localStorage write failed".to_owned())
    }

    fn remove(&self) {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.remove_item(STORAGE_KEY);
            }
        }
    }
}

/// Backend for environments without browser storage (SSR). Reads see
/// nothing and writes vanish; the in-memory session still behaves.
pub struct NullStorage;

impl SessionBackend for NullStorage {
    fn read(&self) -> Result<Option<String>, String> {
        Ok(None)
    }

    fn write(&self, _raw: &str) -> Result<(), String> {
        Ok(())
    }

    fn remove(&self) {}
}

#[cfg(feature = "hydrate")]
fn backend() -> BrowserStorage {
    BrowserStorage
}

#[cfg(not(feature = "hydrate"))]
fn backend() -> NullStorage {
    NullStorage
}

/// Copyable handle to the single process-wide session, provided via
/// context from `App` and read reactively by every consumer.
///
/// `ready` stays false until `restore` has run on the client, so guarded
/// views can hold back instead of flashing or redirecting prematurely.
#[derive(Clone, Copy)]
pub struct SessionStore {
    core: RwSignal<SessionCore>,
    ready: RwSignal<bool>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            core: RwSignal::new(SessionCore::default()),
            ready: RwSignal::new(false),
        }
    }

    /// Adopt the persisted record (if any) and mark the store ready.
    /// Runs once on the client after hydration; safe to re-run.
    pub fn restore(&self) {
        self.core.set(SessionCore::restore(&backend()));
        self.ready.set(true);
    }

    /// Reactive: whether restore has completed.
    pub fn ready(&self) -> bool {
        self.ready.get()
    }

    /// Reactive read of the live session.
    pub fn session(&self) -> Session {
        self.core.with(|c| c.current().clone())
    }

    /// Reactive: whether a user is logged in.
    pub fn is_authenticated(&self) -> bool {
        self.core.with(|c| c.current().is_authenticated())
    }

    /// Reactive read of the current identity.
    pub fn identity(&self) -> Option<Identity> {
        self.core.with(|c| c.current().identity().cloned())
    }

    /// Untracked read of the current token, for request construction
    /// inside event handlers.
    pub fn token(&self) -> Option<String> {
        self.core
            .with_untracked(|c| c.current().token().map(ToOwned::to_owned))
    }

    /// Persist and adopt a freshly exchanged session. Errors leave both
    /// the record and the in-memory session untouched.
    pub fn login(&self, credentials: Credentials) -> Result<(), String> {
        self.core
            .try_update(|c| c.login(&backend(), credentials))
            .unwrap_or_else(|| Err("session store is gone".to_owned()))
    }

    /// Clear the record and the in-memory session. Idempotent; the
    /// navigation back to `/` is the caller's responsibility since
    /// router handles only exist inside the `Router` scope.
    pub fn logout(&self) {
        self.core.update(|c| c.logout(&backend()));
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

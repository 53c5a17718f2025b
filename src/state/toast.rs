//! Transient notification state.
//!
//! Pages push success/error toasts after API calls; the stack component
//! renders them and schedules auto-dismissal. Ids are monotonic so a
//! late dismissal never removes a newer toast that reused a slot.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use leptos::prelude::*;

/// How long a toast stays on screen.
pub const TOAST_MILLIS: u64 = 4000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Queue of visible toasts.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Append a toast and return its id for later dismissal.
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            kind,
            message: message.into(),
        });
        id
    }

    /// Remove a toast by id; unknown ids are a no-op.
    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

/// Push a toast onto the shared signal and schedule its auto-dismissal.
pub fn push_toast(state: RwSignal<ToastState>, kind: ToastKind, message: impl Into<String>) {
    let Some(id) = state.try_update(|s| s.push(kind, message)) else {
        return;
    };

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_millis(TOAST_MILLIS)).await;
        let _ = state.try_update(|s| s.dismiss(id));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = id;
}

pub fn push_success(state: RwSignal<ToastState>, message: impl Into<String>) {
    push_toast(state, ToastKind::Success, message);
}

pub fn push_error(state: RwSignal<ToastState>, message: impl Into<String>) {
    push_toast(state, ToastKind::Error, message);
}

//! Route guard for views that require a non-empty session.
//!
//! DESIGN
//! ======
//! The guard is an explicit state machine rather than a bare
//! `if !logged_in { navigate(...) }` so the redirect fires exactly once
//! per transition into the unauthenticated state, not on every reactive
//! re-evaluation. Before the session store has restored, the guard
//! renders nothing at all, which keeps protected content from flashing
//! ahead of the restore.

#[cfg(test)]
#[path = "require_auth_test.rs"]
mod require_auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionStore;

/// What the guard currently knows about the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum GuardPhase {
    /// Restore has not completed yet.
    Unknown,
    Unauthenticated,
    Authenticated,
}

/// What the guarded view should do for this evaluation pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Render nothing and wait for the session to settle.
    Wait,
    /// Render nothing and navigate to the login view, once.
    Redirect,
    /// Render the guarded content.
    Render,
}

/// Per-view-instance guard state. Transitions are driven solely by
/// session store notifications.
#[derive(Clone, Copy, Debug)]
pub struct GuardState {
    phase: GuardPhase,
}

impl GuardState {
    pub fn new() -> Self {
        Self {
            phase: GuardPhase::Unknown,
        }
    }

    /// Feed the latest session observation; returns the action for this
    /// pass. `Redirect` is produced only on the edge into
    /// `Unauthenticated`, so staying unauthenticated across repeated
    /// evaluations does not re-fire the navigation.
    pub fn step(&mut self, ready: bool, authenticated: bool) -> GuardOutcome {
        let observed = if !ready {
            GuardPhase::Unknown
        } else if authenticated {
            GuardPhase::Authenticated
        } else {
            GuardPhase::Unauthenticated
        };

        let outcome = match observed {
            GuardPhase::Unknown => GuardOutcome::Wait,
            GuardPhase::Authenticated => GuardOutcome::Render,
            GuardPhase::Unauthenticated => {
                if self.phase == GuardPhase::Unauthenticated {
                    GuardOutcome::Wait
                } else {
                    GuardOutcome::Redirect
                }
            }
        };

        self.phase = observed;
        outcome
    }
}

impl Default for GuardState {
    fn default() -> Self {
        Self::new()
    }
}

/// Wrap a view that requires authentication. Renders the children only
/// while the session holds an identity; otherwise renders nothing and
/// (once settled) redirects to `/login`.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let guard = StoredValue::new(GuardState::new());

    let navigate = use_navigate();
    Effect::new(move || {
        let ready = session.ready();
        let authenticated = session.is_authenticated();
        let outcome = guard
            .try_update_value(|g| g.step(ready, authenticated))
            .unwrap_or(GuardOutcome::Wait);
        if outcome == GuardOutcome::Redirect {
            navigate("/login", NavigateOptions::default());
        }
    });

    view! {
        <Show when=move || session.ready() && session.is_authenticated() fallback=|| ()>
            {children()}
        </Show>
    }
}

//! On-screen toast notifications.

use leptos::prelude::*;

use crate::state::toast::{ToastKind, ToastState};

/// Renders the toast queue in a fixed corner stack. Clicking a toast
/// dismisses it ahead of its auto-dismiss timer.
#[component]
pub fn ToastStack() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-stack">
            {move || {
                toasts
                    .get()
                    .toasts()
                    .iter()
                    .map(|toast| {
                        let id = toast.id;
                        let class = match toast.kind {
                            ToastKind::Success => "toast toast--success",
                            ToastKind::Error => "toast toast--error",
                        };
                        let message = toast.message.clone();
                        view! {
                            <div
                                class=class
                                on:click=move |_| {
                                    toasts.update(|state| state.dismiss(id));
                                }
                            >
                                {message}
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}

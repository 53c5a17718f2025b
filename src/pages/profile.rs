//! Profile page: email and password updates, account deletion.
//!
//! A successful email change re-runs `login` with the rewritten
//! identity so the in-memory session and the persisted record both pick
//! up the new address. Account deletion ends the session the same way a
//! logout does.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api;
use crate::state::session::{Credentials, SessionStore};
use crate::state::toast::{self, ToastState};
use crate::util::validate::{FieldErrors, validate_email_change, validate_password_change};

/// Profile editor. Mounted behind `RequireAuth`.
#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let email = RwSignal::new(
        session
            .identity()
            .map(|identity| identity.email)
            .unwrap_or_default(),
    );
    let email_errors = RwSignal::new(FieldErrors::new());
    let email_pending = RwSignal::new(false);

    let current_password = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let password_errors = RwSignal::new(FieldErrors::new());
    let password_pending = RwSignal::new(false);

    let delete_pending = RwSignal::new(false);

    let on_update_email = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if email_pending.get_untracked() {
            return;
        }

        let new_email = email.get_untracked();
        let field_errors = validate_email_change(&new_email);
        if !field_errors.is_empty() {
            email_errors.set(field_errors);
            return;
        }
        email_errors.set(FieldErrors::new());

        let (Some(identity), Some(token)) = (session.identity(), session.token()) else {
            toast::push_error(toasts, "Your session has expired.");
            return;
        };
        email_pending.set(true);

        leptos::task::spawn_local(async move {
            match api::update_email(&new_email, &token).await {
                Ok(()) => {
                    // Replace the whole identity so storage stays in sync.
                    let mut updated = identity;
                    updated.email = new_email;
                    match session.login(Credentials::new(updated, token)) {
                        Ok(()) => toast::push_success(toasts, "Email updated successfully!"),
                        Err(e) => toast::push_error(toasts, e),
                    }
                }
                Err(e) => toast::push_error(toasts, e),
            }
            email_pending.set(false);
        });
    };

    let on_update_password = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if password_pending.get_untracked() {
            return;
        }

        let field_errors = validate_password_change(
            &current_password.get_untracked(),
            &new_password.get_untracked(),
            &confirm_password.get_untracked(),
        );
        if !field_errors.is_empty() {
            password_errors.set(field_errors);
            return;
        }
        password_errors.set(FieldErrors::new());

        let Some(token) = session.token() else {
            toast::push_error(toasts, "Your session has expired.");
            return;
        };
        password_pending.set(true);

        let current = current_password.get_untracked();
        let new = new_password.get_untracked();
        leptos::task::spawn_local(async move {
            match api::update_password(&current, &new, &token).await {
                Ok(()) => {
                    toast::push_success(toasts, "Password updated successfully!");
                    current_password.set(String::new());
                    new_password.set(String::new());
                    confirm_password.set(String::new());
                }
                Err(e) => toast::push_error(toasts, e),
            }
            password_pending.set(false);
        });
    };

    let navigate = use_navigate();
    let on_delete_account = move |_| {
        if delete_pending.get_untracked() {
            return;
        }
        let Some(token) = session.token() else {
            toast::push_error(toasts, "Your session has expired.");
            return;
        };
        delete_pending.set(true);

        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api::delete_account(&token).await {
                Ok(()) => {
                    toast::push_success(toasts, "Account deleted successfully");
                    session.logout();
                    navigate("/", NavigateOptions::default());
                }
                Err(e) => toast::push_error(toasts, e),
            }
            delete_pending.set(false);
        });
    };

    let email_error = move |field: &'static str| {
        email_errors
            .get()
            .get(field)
            .cloned()
            .map(|msg| view! { <p class="form__error">{msg}</p> })
    };
    let password_error = move |field: &'static str| {
        password_errors
            .get()
            .get(field)
            .cloned()
            .map(|msg| view! { <p class="form__error">{msg}</p> })
    };

    view! {
        <div class="profile-page">
            <h1>"Profile"</h1>

            <form class="profile-page__section form" on:submit=on_update_email>
                <h2>"Email address"</h2>
                <div class="form__field">
                    <label for="profile-email">"Email"</label>
                    <input
                        id="profile-email"
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    {move || email_error("email")}
                </div>
                <button class="btn btn--primary" type="submit" disabled=move || email_pending.get()>
                    {move || if email_pending.get() { "Saving..." } else { "Update email" }}
                </button>
            </form>

            <form class="profile-page__section form" on:submit=on_update_password>
                <h2>"Password"</h2>
                <div class="form__field">
                    <label for="profile-current-password">"Current password"</label>
                    <input
                        id="profile-current-password"
                        type="password"
                        prop:value=move || current_password.get()
                        on:input=move |ev| current_password.set(event_target_value(&ev))
                    />
                    {move || password_error("current_password")}
                </div>
                <div class="form__field">
                    <label for="profile-new-password">"New password"</label>
                    <input
                        id="profile-new-password"
                        type="password"
                        prop:value=move || new_password.get()
                        on:input=move |ev| new_password.set(event_target_value(&ev))
                    />
                    {move || password_error("password")}
                </div>
                <div class="form__field">
                    <label for="profile-confirm-password">"Confirm new password"</label>
                    <input
                        id="profile-confirm-password"
                        type="password"
                        prop:value=move || confirm_password.get()
                        on:input=move |ev| confirm_password.set(event_target_value(&ev))
                    />
                    {move || password_error("confirm_password")}
                </div>
                <button class="btn btn--primary" type="submit" disabled=move || password_pending.get()>
                    {move || if password_pending.get() { "Saving..." } else { "Update password" }}
                </button>
            </form>

            <section class="profile-page__section profile-page__danger">
                <h2>"Danger zone"</h2>
                <p>"Once you delete your account, there is no going back. Please be certain."</p>
                <button
                    class="btn btn--danger"
                    on:click=on_delete_account
                    disabled=move || delete_pending.get()
                >
                    {move || if delete_pending.get() { "Deleting..." } else { "Delete account" }}
                </button>
            </section>
        </div>
    }
}

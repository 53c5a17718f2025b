//! Registration page.
//!
//! All field validation happens before the network call; a mismatched
//! password confirmation never leaves the browser. A successful
//! registration answers with the same shape as login, so the response
//! goes straight into the session store.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api;
use crate::net::types::RegisterRequest;
use crate::state::session::{Credentials, SessionStore};
use crate::state::toast::{self, ToastState};
use crate::util::validate::{FieldErrors, RegisterForm, validate_register};

/// Account creation page.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    // Already signed in: go home instead of re-registering.
    let navigate = use_navigate();
    Effect::new(move || {
        if session.ready() && session.is_authenticated() {
            navigate("/", NavigateOptions::default());
        }
    });

    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);
    let errors = RwSignal::new(FieldErrors::new());
    let pending = RwSignal::new(false);

    let field_error = move |field: &'static str| {
        errors
            .get()
            .get(field)
            .cloned()
            .map(|msg| view! { <p class="form__error">{msg}</p> })
    };

    let navigate = use_navigate();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }

        let form = RegisterForm {
            first_name: first_name.get_untracked(),
            last_name: last_name.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
            confirm_password: confirm_password.get_untracked(),
        };
        let field_errors = validate_register(&form);
        if !field_errors.is_empty() {
            errors.set(field_errors);
            return;
        }
        errors.set(FieldErrors::new());
        pending.set(true);

        let request = RegisterRequest {
            first_name: form.first_name,
            last_name: form.last_name,
            email: form.email,
            password: form.password,
        };
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api::register(&request).await {
                Ok(resp) => match session.login(Credentials::new(resp.user, resp.access_token)) {
                    Ok(()) => {
                        toast::push_success(toasts, "Account created successfully!");
                        navigate("/", NavigateOptions::default());
                    }
                    Err(e) => toast::push_error(toasts, e),
                },
                Err(e) => toast::push_error(toasts, e),
            }
            pending.set(false);
        });
    };

    let password_type = move || if show_password.get() { "text" } else { "password" };

    view! {
        <div class="auth-page">
            <div class="auth-page__header">
                <h1>"Bazaar"</h1>
                <h2>"Create your account"</h2>
            </div>

            <form class="auth-page__form form" on:submit=on_submit>
                <div class="form__row">
                    <div class="form__field">
                        <label for="first-name">"First name"</label>
                        <input
                            id="first-name"
                            type="text"
                            placeholder="First name"
                            prop:value=move || first_name.get()
                            on:input=move |ev| first_name.set(event_target_value(&ev))
                        />
                        {move || field_error("first_name")}
                    </div>
                    <div class="form__field">
                        <label for="last-name">"Last name"</label>
                        <input
                            id="last-name"
                            type="text"
                            placeholder="Last name"
                            prop:value=move || last_name.get()
                            on:input=move |ev| last_name.set(event_target_value(&ev))
                        />
                        {move || field_error("last_name")}
                    </div>
                </div>

                <div class="form__field">
                    <label for="email">"Email address"</label>
                    <input
                        id="email"
                        type="email"
                        placeholder="Enter your email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    {move || field_error("email")}
                </div>

                <div class="form__field">
                    <label for="password">"Password"</label>
                    <div class="form__password-row">
                        <input
                            id="password"
                            type=password_type
                            placeholder="Create a password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        <button
                            type="button"
                            class="form__toggle"
                            on:click=move |_| show_password.update(|s| *s = !*s)
                        >
                            {move || if show_password.get() { "Hide" } else { "Show" }}
                        </button>
                    </div>
                    {move || field_error("password")}
                </div>

                <div class="form__field">
                    <label for="confirm-password">"Confirm password"</label>
                    <input
                        id="confirm-password"
                        type=password_type
                        placeholder="Confirm your password"
                        prop:value=move || confirm_password.get()
                        on:input=move |ev| confirm_password.set(event_target_value(&ev))
                    />
                    {move || field_error("confirm_password")}
                </div>

                <button class="btn btn--primary form__submit" type="submit" disabled=move || pending.get()>
                    {move || if pending.get() { "Creating account..." } else { "Create account" }}
                </button>
            </form>

            <p class="auth-page__switch">
                "Already have an account? "
                <a href="/login">"Sign in"</a>
            </p>
        </div>
    }
}

//! Login page with the credential exchange form.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api;
use crate::state::session::{Credentials, SessionStore};
use crate::state::toast::{self, ToastState};
use crate::util::validate::{FieldErrors, validate_login};

/// Login page. Validates locally, exchanges credentials against the API,
/// and hands the `{user, accessToken}` response to the session store.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    // Already signed in: this page has nothing to offer.
    let navigate = use_navigate();
    Effect::new(move || {
        if session.ready() && session.is_authenticated() {
            navigate("/", NavigateOptions::default());
        }
    });

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
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

        let field_errors = validate_login(&email.get_untracked(), &password.get_untracked());
        if !field_errors.is_empty() {
            errors.set(field_errors);
            return;
        }
        errors.set(FieldErrors::new());
        pending.set(true);

        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api::login(&email.get_untracked(), &password.get_untracked()).await {
                Ok(resp) => match session.login(Credentials::new(resp.user, resp.access_token)) {
                    Ok(()) => navigate("/", NavigateOptions::default()),
                    Err(e) => toast::push_error(toasts, e),
                },
                Err(e) => toast::push_error(toasts, e),
            }
            pending.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-page__header">
                <h1>"Bazaar"</h1>
                <h2>"Sign in to your account"</h2>
            </div>

            <form class="auth-page__form form" on:submit=on_submit>
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
                            type=move || if show_password.get() { "text" } else { "password" }
                            placeholder="Enter your password"
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

                <button class="btn btn--primary form__submit" type="submit" disabled=move || pending.get()>
                    {move || if pending.get() { "Signing in..." } else { "Sign in" }}
                </button>
            </form>

            <p class="auth-page__switch">
                "Don't have an account? "
                <a href="/register">"Sign up"</a>
            </p>
        </div>
    }
}

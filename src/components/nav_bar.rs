//! Top navigation bar with identity-dependent entries.
//!
//! Empty session: login/register links only. Authenticated: catalog,
//! listings, and profile links plus a logout button. Logout clears the
//! session with no confirmation step and returns to the root.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionStore;

/// Application navigation bar.
#[component]
pub fn NavBar() -> impl IntoView {
    let session = expect_context::<SessionStore>();

    let navigate = use_navigate();
    let on_logout = move |_| {
        session.logout();
        navigate("/", NavigateOptions::default());
    };

    let greeting = move || {
        session
            .identity()
            .map(|identity| identity.display_name())
            .unwrap_or_default()
    };

    view! {
        <nav class="nav-bar">
            <a class="nav-bar__brand" href="/">
                "Bazaar"
            </a>
            <Show
                when=move || session.is_authenticated()
                fallback=|| {
                    view! {
                        <div class="nav-bar__links">
                            <a class="nav-bar__link" href="/login">
                                "Login"
                            </a>
                            <a class="nav-bar__link" href="/register">
                                "Register"
                            </a>
                        </div>
                    }
                }
            >
                <div class="nav-bar__links">
                    <span class="nav-bar__greeting">{greeting}</span>
                    <a class="nav-bar__link" href="/my-listings">
                        "My Listings"
                    </a>
                    <a class="nav-bar__link" href="/profile">
                        "Profile"
                    </a>
                    <button class="btn btn--primary nav-bar__logout" on:click=on_logout.clone()>
                        "Logout"
                    </button>
                </div>
            </Show>
        </nav>
    }
}

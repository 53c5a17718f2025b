//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::footer::Footer;
use crate::components::nav_bar::NavBar;
use crate::components::require_auth::RequireAuth;
use crate::components::toast_stack::ToastStack;
use crate::pages::{
    edit_product::EditProductPage, home::HomePage, login::LoginPage, my_listings::MyListingsPage,
    product_details::ProductDetailsPage, profile::ProfilePage, register::RegisterPage,
};
use crate::state::session::SessionStore;
use crate::state::toast::ToastState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session store and toast queue to all child components,
/// restores any persisted session once on mount, and sets up routing.
/// Account-scoped routes are wrapped in [`RequireAuth`].
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = SessionStore::new();
    let toasts = RwSignal::new(ToastState::default());
    provide_context(session);
    provide_context(toasts);

    // Rehydrate the session from storage before guarded routes decide
    // anything; `ready` stays false until this has run.
    Effect::new(move || {
        session.restore();
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/bazaar-client.css"/>
        <Title text="Bazaar"/>

        <Router>
            <NavBar/>
            <main class="app__main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route
                        path=(StaticSegment("products"), ParamSegment("id"))
                        view=ProductDetailsPage
                    />
                    <Route
                        path=(StaticSegment("products"), ParamSegment("id"), StaticSegment("edit"))
                        view=|| {
                            view! {
                                <RequireAuth>
                                    <EditProductPage/>
                                </RequireAuth>
                            }
                        }
                    />
                    <Route
                        path=StaticSegment("my-listings")
                        view=|| {
                            view! {
                                <RequireAuth>
                                    <MyListingsPage/>
                                </RequireAuth>
                            }
                        }
                    />
                    <Route
                        path=StaticSegment("profile")
                        view=|| {
                            view! {
                                <RequireAuth>
                                    <ProfilePage/>
                                </RequireAuth>
                            }
                        }
                    />
                </Routes>
            </main>
            <Footer/>
            <ToastStack/>
        </Router>
    }
}

//! Page footer.

use leptos::prelude::*;

/// Static footer shown under every page.
#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <span class="footer__text">"Bazaar: discover unique products from independent sellers"</span>
        </footer>
    }
}

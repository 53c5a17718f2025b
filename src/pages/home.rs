//! Catalog page with search, category filter, and sort controls.

use leptos::prelude::*;

use crate::components::product_card::ProductCard;
use crate::net::api;
use crate::state::catalog::{CATEGORIES, CatalogState, SortOrder, filter_and_sort};
use crate::state::session::SessionStore;

/// Home page listing the whole catalog. Works logged out; an available
/// token is attached so the API can personalize results if it wants to.
#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<SessionStore>();

    let search = RwSignal::new(String::new());
    let category = RwSignal::new("All".to_owned());
    let sort = RwSignal::new(SortOrder::default());

    // Catalog fetch on mount.
    let products = LocalResource::new(move || {
        let token = session.token();
        async move { api::fetch_products(token.as_deref()).await }
    });

    view! {
        <div class="home-page">
            <header class="home-page__header">
                <h1>"Bazaar"</h1>
                <p>"Discover unique products from independent sellers"</p>

                <div class="home-page__controls">
                    <input
                        class="home-page__search"
                        type="search"
                        placeholder="Search products, descriptions, sellers..."
                        prop:value=move || search.get()
                        on:input=move |ev| search.set(event_target_value(&ev))
                    />
                    <select
                        class="home-page__category"
                        on:change=move |ev| category.set(event_target_value(&ev))
                    >
                        {CATEGORIES
                            .iter()
                            .map(|&name| {
                                view! {
                                    <option value=name selected=move || category.get() == name>
                                        {name}
                                    </option>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </select>
                    <select
                        class="home-page__sort"
                        on:change=move |ev| sort.set(SortOrder::from_key(&event_target_value(&ev)))
                    >
                        {SortOrder::ALL
                            .into_iter()
                            .map(|order| {
                                view! {
                                    <option value=order.key() selected=move || sort.get() == order>
                                        {order.label()}
                                    </option>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </select>
                </div>
            </header>

            <Suspense fallback=move || view! { <p class="home-page__loading">"Loading products..."</p> }>
                {move || {
                    products.get().map(|result| match result {
                        Err(e) => view! {
                            <p class="home-page__error">"Couldn't load products: " {e}</p>
                        }
                            .into_any(),
                        Ok(list) => {
                            let state = CatalogState {
                                search: search.get(),
                                category: category.get(),
                                sort: sort.get(),
                            };
                            let visible = filter_and_sort(&list, &state);
                            if visible.is_empty() {
                                view! { <p class="home-page__empty">"No products match."</p> }
                                    .into_any()
                            } else {
                                view! {
                                    <div class="home-page__grid">
                                        {visible
                                            .into_iter()
                                            .map(|product| view! { <ProductCard product=product/> })
                                            .collect::<Vec<_>>()}
                                    </div>
                                }
                                    .into_any()
                            }
                        }
                    })
                }}
            </Suspense>
        </div>
    }
}

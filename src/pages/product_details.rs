//! Product detail page.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::net::api;
use crate::state::session::SessionStore;

/// Detail view for one product, fetched by route id. The edit link is
/// shown only to the owner; that check is a UI convenience, the API
/// enforces the real one.
#[component]
pub fn ProductDetailsPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let params = use_params_map();

    let product_id = move || {
        params
            .read()
            .get("id")
            .and_then(|raw| raw.parse::<u64>().ok())
    };

    let product = LocalResource::new(move || {
        let id = product_id();
        let token = session.token();
        async move {
            match id {
                Some(id) => api::fetch_product(id, token.as_deref()).await,
                None => Err("invalid product id".to_owned()),
            }
        }
    });

    let viewer_id = move || session.identity().map(|identity| identity.id);

    view! {
        <div class="product-page">
            <Suspense fallback=move || view! { <p class="product-page__loading">"Loading product..."</p> }>
                {move || {
                    product.get().map(|result| match result {
                        Err(e) => view! {
                            <p class="product-page__error">"Couldn't load product: " {e}</p>
                        }
                            .into_any(),
                        Ok(product) => {
                            let owned = viewer_id()
                                .is_some_and(|id| product.is_owned_by(&id));
                            let edit_href = format!("/products/{}/edit", product.id);
                            let price = format!("${:.2}", product.price);
                            let rating = format!("{:.1} / 5", product.rating);
                            view! {
                                <article class="product-page__details">
                                    <div class="product-page__images">
                                        {product
                                            .images
                                            .iter()
                                            .map(|src| {
                                                view! {
                                                    <img
                                                        class="product-page__image"
                                                        src=src.clone()
                                                        alt=product.name.clone()
                                                    />
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </div>
                                    <div class="product-page__info">
                                        <h1>{product.name.clone()}</h1>
                                        <p class="product-page__seller">"Sold by " {product.seller.clone()}</p>
                                        <p class="product-page__price">{price}</p>
                                        <p class="product-page__rating">{rating}</p>
                                        <p class="product-page__category">{product.category.clone()}</p>
                                        <p class="product-page__description">{product.description.clone()}</p>
                                        <Show when=move || owned fallback=|| ()>
                                            <a class="btn btn--primary" href=edit_href.clone()>
                                                "Edit listing"
                                            </a>
                                        </Show>
                                    </div>
                                </article>
                            }
                                .into_any()
                        }
                    })
                }}
            </Suspense>
        </div>
    }
}

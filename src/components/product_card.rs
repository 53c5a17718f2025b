//! Catalog card for a single product.

use leptos::prelude::*;

use crate::net::types::Product;

/// A clickable card linking to the product's detail page.
#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let href = format!("/products/{}", product.id);
    let thumbnail = product.images.first().cloned();
    let price = format!("${:.2}", product.price);
    let rating = format!("{:.1}", product.rating);

    view! {
        <a class="product-card" href=href>
            {thumbnail
                .map(|src| {
                    view! { <img class="product-card__image" src=src alt=product.name.clone()/> }
                })}
            <div class="product-card__body">
                <span class="product-card__name">{product.name.clone()}</span>
                <span class="product-card__seller">{product.seller.clone()}</span>
                <div class="product-card__meta">
                    <span class="product-card__price">{price}</span>
                    <span class="product-card__rating">{"★ "}{rating}</span>
                </div>
            </div>
        </a>
    }
}

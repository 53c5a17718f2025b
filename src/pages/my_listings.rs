//! Listing management page: the signed-in user's products, a creation
//! form with staged image uploads, and per-listing deletion.
//!
//! Selected images are compressed in the browser before staging (max
//! width 800, JPEG at 0.7), capped at eight per listing.

use leptos::prelude::*;

use crate::net::api;
use crate::state::listings::{ListingDraft, StagedImages};
use crate::state::session::SessionStore;
use crate::state::toast::{self, ToastState};
use crate::util::images::MAX_IMAGES_PER_LISTING;
use crate::util::validate::FieldErrors;

/// "My listings" page. Mounted behind `RequireAuth`.
#[component]
pub fn MyListingsPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    // Bumped after create/delete to refetch the list.
    let version = RwSignal::new(0u32);

    // The API serves the whole catalog; own listings are selected by
    // owner id client-side.
    let mine = LocalResource::new(move || {
        version.track();
        let token = session.token();
        let owner = session.identity().map(|identity| identity.id);
        async move {
            let products = api::fetch_products(token.as_deref()).await?;
            let Some(owner) = owner else {
                return Ok(Vec::new());
            };
            Ok(products
                .into_iter()
                .filter(|p| p.is_owned_by(&owner))
                .collect::<Vec<_>>())
        }
    });

    let draft = RwSignal::new(ListingDraft::default());
    let staged = RwSignal::new(StagedImages::default());
    let errors = RwSignal::new(FieldErrors::new());
    let pending = RwSignal::new(false);

    let field_error = move |field: &'static str| {
        errors
            .get()
            .get(field)
            .cloned()
            .map(|msg| view! { <p class="form__error">{msg}</p> })
    };

    let on_files = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;

            let Some(input) = ev
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            else {
                return;
            };
            let Some(files) = input.files() else {
                return;
            };

            let count = files.length() as usize;
            if !staged.get_untracked().can_accept(count) {
                toast::push_error(
                    toasts,
                    format!("At most {MAX_IMAGES_PER_LISTING} images per listing."),
                );
                input.set_value("");
                return;
            }

            for index in 0..files.length() {
                let Some(file) = files.get(index) else {
                    continue;
                };
                leptos::task::spawn_local(async move {
                    match crate::util::images::compress_image(&file).await {
                        Ok(data_url) => {
                            staged.update(|s| {
                                let _ = s.push(data_url);
                            });
                        }
                        Err(e) => toast::push_error(toasts, e),
                    }
                });
            }
            input.set_value("");
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = ev;
    };

    let on_create = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }

        let current = draft.get_untracked();
        let field_errors = current.validate(staged.get_untracked().is_empty());
        if !field_errors.is_empty() {
            errors.set(field_errors);
            return;
        }
        errors.set(FieldErrors::new());

        let Some(token) = session.token() else {
            toast::push_error(toasts, "Your session has expired.");
            return;
        };
        pending.set(true);

        let payload = current.to_payload(staged.get_untracked().to_vec());
        leptos::task::spawn_local(async move {
            match api::create_product(&payload, &token).await {
                Ok(_) => {
                    toast::push_success(toasts, "Listing created!");
                    draft.set(ListingDraft::default());
                    staged.update(StagedImages::clear);
                    version.update(|v| *v += 1);
                }
                Err(e) => toast::push_error(toasts, e),
            }
            pending.set(false);
        });
    };

    let delete_listing = move |id: u64| {
        let Some(token) = session.token() else {
            toast::push_error(toasts, "Your session has expired.");
            return;
        };
        leptos::task::spawn_local(async move {
            match api::delete_product(id, &token).await {
                Ok(()) => {
                    toast::push_success(toasts, "Listing deleted.");
                    version.update(|v| *v += 1);
                }
                Err(e) => toast::push_error(toasts, e),
            }
        });
    };

    view! {
        <div class="listings-page">
            <h1>"My Listings"</h1>

            <form class="listings-page__form form" on:submit=on_create>
                <h2>"Create a listing"</h2>

                <div class="form__field">
                    <label for="listing-name">"Name"</label>
                    <input
                        id="listing-name"
                        type="text"
                        placeholder="Product name"
                        prop:value=move || draft.get().name
                        on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
                    />
                    {move || field_error("name")}
                </div>

                <div class="form__field">
                    <label for="listing-description">"Description"</label>
                    <textarea
                        id="listing-description"
                        placeholder="Describe your product"
                        prop:value=move || draft.get().description
                        on:input=move |ev| draft.update(|d| d.description = event_target_value(&ev))
                    ></textarea>
                    {move || field_error("description")}
                </div>

                <div class="form__row">
                    <div class="form__field">
                        <label for="listing-price">"Price"</label>
                        <input
                            id="listing-price"
                            type="text"
                            placeholder="0.00"
                            prop:value=move || draft.get().price
                            on:input=move |ev| draft.update(|d| d.price = event_target_value(&ev))
                        />
                        {move || field_error("price")}
                    </div>
                    <div class="form__field">
                        <label for="listing-category">"Category"</label>
                        <select
                            id="listing-category"
                            on:change=move |ev| draft.update(|d| d.category = event_target_value(&ev))
                        >
                            {crate::state::catalog::CATEGORIES
                                .iter()
                                .map(|&name| {
                                    view! {
                                        <option value=name selected=move || draft.get().category == name>
                                            {name}
                                        </option>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </select>
                        {move || field_error("category")}
                    </div>
                </div>

                <div class="form__field">
                    <label for="listing-images">
                        {move || format!("Images ({}/{MAX_IMAGES_PER_LISTING})", staged.get().len())}
                    </label>
                    <input id="listing-images" type="file" accept="image/*" multiple on:change=on_files/>
                    <p class="form__hint">"Images are resized and compressed before upload."</p>
                    {move || field_error("images")}
                    <div class="listings-page__previews">
                        {move || {
                            staged
                                .get()
                                .as_slice()
                                .iter()
                                .enumerate()
                                .map(|(index, src)| {
                                    view! {
                                        <div class="listings-page__preview">
                                            <img src=src.clone() alt="staged image"/>
                                            <button
                                                type="button"
                                                class="listings-page__remove"
                                                on:click=move |_| staged.update(|s| s.remove(index))
                                            >
                                                "Remove"
                                            </button>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </div>

                <button class="btn btn--primary form__submit" type="submit" disabled=move || pending.get()>
                    {move || if pending.get() { "Publishing..." } else { "Publish listing" }}
                </button>
            </form>

            <Suspense fallback=move || view! { <p class="listings-page__loading">"Loading your listings..."</p> }>
                {move || {
                    mine.get().map(|result: Result<_, String>| match result {
                        Err(e) => view! {
                            <p class="listings-page__error">"Couldn't load listings: " {e}</p>
                        }
                            .into_any(),
                        Ok(list) => {
                            if list.is_empty() {
                                return view! {
                                    <p class="listings-page__empty">"You have no listings yet."</p>
                                }
                                    .into_any();
                            }
                            view! {
                                <ul class="listings-page__list">
                                    {list
                                        .into_iter()
                                        .map(|product| {
                                            let id = product.id;
                                            let href = format!("/products/{id}/edit");
                                            let price = format!("${:.2}", product.price);
                                            view! {
                                                <li class="listings-page__item">
                                                    <span class="listings-page__name">{product.name.clone()}</span>
                                                    <span class="listings-page__price">{price}</span>
                                                    <a class="btn" href=href>
                                                        "Edit"
                                                    </a>
                                                    <button class="btn btn--danger" on:click=move |_| delete_listing(id)>
                                                        "Delete"
                                                    </button>
                                                </li>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </ul>
                            }
                                .into_any()
                        }
                    })
                }}
            </Suspense>
        </div>
    }
}

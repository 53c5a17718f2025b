//! Edit page for an existing listing.
//!
//! Loads the product, prefills the draft once, and replaces the listing
//! with `PUT` on save. Non-owners get a notice instead of the form; the
//! API still enforces ownership on its side.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::net::api;
use crate::net::types::Product;
use crate::state::listings::{ListingDraft, StagedImages};
use crate::state::session::SessionStore;
use crate::state::toast::{self, ToastState};
use crate::util::validate::FieldErrors;

/// Listing editor. Mounted behind `RequireAuth`.
#[component]
pub fn EditProductPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let toasts = expect_context::<RwSignal<ToastState>>();
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

    let draft = RwSignal::new(ListingDraft::default());
    let staged = RwSignal::new(StagedImages::default());
    let errors = RwSignal::new(FieldErrors::new());
    let pending = RwSignal::new(false);
    let prefilled = RwSignal::new(false);

    // Prefill the form once the product arrives.
    Effect::new(move || {
        if prefilled.get() {
            return;
        }
        let Some(Ok(loaded)) = product.get() else {
            return;
        };
        draft.set(ListingDraft {
            name: loaded.name.clone(),
            description: loaded.description.clone(),
            price: format!("{:.2}", loaded.price),
            category: loaded.category.clone(),
        });
        staged.set(StagedImages::from(loaded.images.clone()));
        prefilled.set(true);
    });

    let field_error = move |field: &'static str| {
        errors
            .get()
            .get(field)
            .cloned()
            .map(|msg| view! { <p class="form__error">{msg}</p> })
    };

    let navigate = use_navigate();
    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let Some(id) = product_id() else {
            return;
        };

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
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api::update_product(id, &payload, &token).await {
                Ok(_) => {
                    toast::push_success(toasts, "Listing updated!");
                    navigate("/my-listings", NavigateOptions::default());
                }
                Err(e) => toast::push_error(toasts, e),
            }
            pending.set(false);
        });
    };

    let owns = move |loaded: &Product| {
        session
            .identity()
            .is_some_and(|identity| loaded.is_owned_by(&identity.id))
    };

    view! {
        <div class="edit-page">
            <h1>"Edit listing"</h1>

            <Suspense fallback=move || view! { <p class="edit-page__loading">"Loading listing..."</p> }>
                {move || {
                    product.get().map(|result| match result {
                        Err(e) => view! {
                            <p class="edit-page__error">"Couldn't load listing: " {e}</p>
                        }
                            .into_any(),
                        Ok(loaded) => {
                            if !owns(&loaded) {
                                return view! {
                                    <p class="edit-page__forbidden">"You can only edit your own listings."</p>
                                }
                                    .into_any();
                            }
                            view! {
                                <form class="edit-page__form form" on:submit=on_save.clone()>
                                    <div class="form__field">
                                        <label for="edit-name">"Name"</label>
                                        <input
                                            id="edit-name"
                                            type="text"
                                            prop:value=move || draft.get().name
                                            on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
                                        />
                                        {move || field_error("name")}
                                    </div>

                                    <div class="form__field">
                                        <label for="edit-description">"Description"</label>
                                        <textarea
                                            id="edit-description"
                                            prop:value=move || draft.get().description
                                            on:input=move |ev| {
                                                draft.update(|d| d.description = event_target_value(&ev));
                                            }
                                        ></textarea>
                                        {move || field_error("description")}
                                    </div>

                                    <div class="form__row">
                                        <div class="form__field">
                                            <label for="edit-price">"Price"</label>
                                            <input
                                                id="edit-price"
                                                type="text"
                                                prop:value=move || draft.get().price
                                                on:input=move |ev| {
                                                    draft.update(|d| d.price = event_target_value(&ev));
                                                }
                                            />
                                            {move || field_error("price")}
                                        </div>
                                        <div class="form__field">
                                            <label for="edit-category">"Category"</label>
                                            <select
                                                id="edit-category"
                                                on:change=move |ev| {
                                                    draft.update(|d| d.category = event_target_value(&ev));
                                                }
                                            >
                                                {crate::state::catalog::CATEGORIES
                                                    .iter()
                                                    .map(|&name| {
                                                        view! {
                                                            <option
                                                                value=name
                                                                selected=move || draft.get().category == name
                                                            >
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
                                        <label>"Images"</label>
                                        {move || field_error("images")}
                                        <div class="edit-page__previews">
                                            {move || {
                                                staged
                                                    .get()
                                                    .as_slice()
                                                    .iter()
                                                    .enumerate()
                                                    .map(|(index, src)| {
                                                        view! {
                                                            <div class="edit-page__preview">
                                                                <img src=src.clone() alt="listing image"/>
                                                                <button
                                                                    type="button"
                                                                    class="edit-page__remove"
                                                                    on:click=move |_| {
                                                                        staged.update(|s| s.remove(index));
                                                                    }
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

                                    <button
                                        class="btn btn--primary form__submit"
                                        type="submit"
                                        disabled=move || pending.get()
                                    >
                                        {move || if pending.get() { "Saving..." } else { "Save changes" }}
                                    </button>
                                </form>
                            }
                                .into_any()
                        }
                    })
                }}
            </Suspense>
        </div>
    }
}

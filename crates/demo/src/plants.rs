//! Plant listing with add-to-cart buttons.

use std::sync::Arc;

use leptos::prelude::*;
use tracing::warn;

use nursery::{
    cart::Cart,
    catalog::{Catalog, Plant},
    store::CartStore,
};

use crate::{cart::SignalStore, navbar::Navbar};

pub(crate) fn add_button_label(in_cart: bool) -> &'static str {
    if in_cart { "Added to Cart" } else { "Add to Cart" }
}

#[component]
fn PlantCard(plant: Plant, price: String, cart: RwSignal<Cart>) -> impl IntoView {
    let store = SignalStore::new(cart);
    let intent = plant.add_to_cart_intent();
    let name_for_state = plant.name.clone();
    let name_for_label = plant.name.clone();

    let in_cart = move || cart.with(|cart| Catalog::is_in_cart(cart, &name_for_state));
    let in_cart_for_label = move || cart.with(|cart| Catalog::is_in_cart(cart, &name_for_label));

    view! {
        <li class="product-card">
            <img src=plant.image alt=plant.name.clone() class="product-image" />
            <h3 class="product-title">{plant.name}</h3>
            <p class="product-description">{plant.description}</p>
            <p class="product-price">{price}</p>
            <button
                type="button"
                class="product-button"
                disabled=in_cart
                on:click=move |_| {
                    if let Err(error) = store.dispatch(intent.clone()) {
                        warn!(%error, "add to cart ignored");
                    }
                }
            >
                {move || add_button_label(in_cart_for_label())}
            </button>
        </li>
    }
}

/// Catalog page component.
#[component]
pub(crate) fn PlantsPage(
    /// Plants on offer.
    catalog: Arc<Catalog>,
    /// Cart that "Add to Cart" dispatches to.
    cart: RwSignal<Cart>,
    /// Show the plants listing.
    on_plants_click: Callback<()>,
    /// Show the about page.
    on_about_us_click: Callback<()>,
    /// Open the cart.
    on_cart_click: Callback<()>,
) -> impl IntoView {
    let currency = catalog.currency();

    view! {
        <div>
            <Navbar
                cart=cart
                on_plants_click=on_plants_click
                on_about_us_click=on_about_us_click
                on_cart_click=on_cart_click
            />
            <div class="product-grid">
                {catalog
                    .categories()
                    .iter()
                    .map(|category| {
                        view! {
                            <section class="product-category">
                                <h2 class="product-category-title">{category.name.clone()}</h2>
                                <ul class="product-list">
                                    {category
                                        .plants
                                        .iter()
                                        .map(|plant| {
                                            view! {
                                                <PlantCard
                                                    plant=plant.clone()
                                                    price=plant.display_price(currency)
                                                    cart=cart
                                                />
                                            }
                                        })
                                        .collect_view()}
                                </ul>
                            </section>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

//! Navigation bar shared by every page.

use leptos::{ev::MouseEvent, prelude::*};

use nursery::{cart::Cart, totals::total_items};

const LOGO_URL: &str = "https://cdn.pixabay.com/photo/2020/08/05/13/12/eco-5465432_1280.png";

/// Text for the cart badge. Hidden while the cart is empty.
pub(crate) fn badge_text(total_items: u64) -> Option<String> {
    (total_items > 0).then(|| total_items.to_string())
}

fn follow(event: &MouseEvent, callback: Callback<()>) {
    event.prevent_default();
    callback.run(());
}

#[component]
fn CartIcon(cart: RwSignal<Cart>, on_cart_click: Option<Callback<()>>) -> impl IntoView {
    view! {
        <a
            href="#"
            class="navbar-cart"
            aria-label="Shopping cart"
            on:click=move |event| {
                event.prevent_default();

                if let Some(on_cart_click) = on_cart_click {
                    on_cart_click.run(());
                }
            }
        >
            <svg
                xmlns="http://www.w3.org/2000/svg"
                width="24"
                height="24"
                viewBox="0 0 24 24"
                fill="none"
                stroke="currentColor"
                stroke-width="2"
                stroke-linecap="round"
                stroke-linejoin="round"
                aria-hidden="true"
            >
                <circle cx="9" cy="21" r="1"></circle>
                <circle cx="20" cy="21" r="1"></circle>
                <path d="M1 1h4l2.68 13.39a2 2 0 0 0 2 1.61h9.72a2 2 0 0 0 2-1.61L23 6H6"></path>
            </svg>
            {move || {
                cart.with(|cart| badge_text(total_items(cart)))
                    .map(|count| view! { <span class="cart-count">{count}</span> })
            }}
        </a>
    }
}

/// Logo, title, page links and the live cart badge.
#[component]
pub(crate) fn Navbar(
    /// Cart whose item count drives the badge.
    cart: RwSignal<Cart>,
    /// Show the plants listing.
    on_plants_click: Callback<()>,
    /// Show the about page.
    on_about_us_click: Callback<()>,
    /// Open the cart. Absent while the cart is already shown.
    #[prop(optional)]
    on_cart_click: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <nav class="navbar">
            <div class="luxury-navbar">
                <div class="navbar-brand" on:click=move |_| on_plants_click.run(())>
                    <img src=LOGO_URL alt="Paradise Nursery Logo" class="navbar-logo" />
                    <span class="navbar-title">"Paradise Nursery"</span>
                </div>
                <div class="navbar-links">
                    <a href="#" on:click=move |event| follow(&event, on_plants_click)>
                        "Plants"
                    </a>
                    <a href="#" on:click=move |event| follow(&event, on_about_us_click)>
                        "About Us"
                    </a>
                </div>
                <CartIcon cart=cart on_cart_click=on_cart_click />
            </div>
        </nav>
    }
}

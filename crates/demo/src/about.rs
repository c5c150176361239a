use leptos::prelude::*;

use nursery::cart::Cart;

use crate::navbar::Navbar;

/// About page component.
#[component]
pub(crate) fn AboutPage(
    /// Cart shown in the navbar badge.
    cart: RwSignal<Cart>,
    /// Show the plants listing.
    on_plants_click: Callback<()>,
    /// Show the about page.
    on_about_us_click: Callback<()>,
    /// Open the cart.
    on_cart_click: Callback<()>,
) -> impl IntoView {
    view! {
        <div>
            <Navbar
                cart=cart
                on_plants_click=on_plants_click
                on_about_us_click=on_about_us_click
                on_cart_click=on_cart_click
            />
            <section class="about-us-container">
                <h1 class="about-us-heading">"Welcome to Paradise Nursery"</h1>
                <p class="about-us-description">
                    "At Paradise Nursery we believe in the power of plants to bring greenery and joy into everyday spaces."
                </p>
                <p class="about-us-content">
                    "Our collection ranges from air purifying favourites to fragrant herbs and plants that thrive on neglect, each grown with care and ready for a new home."
                </p>
                <button
                    type="button"
                    class="get-started-button"
                    on:click=move |_| on_plants_click.run(())
                >
                    "Browse Plants"
                </button>
            </section>
        </div>
    }
}

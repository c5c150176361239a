//! Cart page
//!
//! Renders the cart held in a `RwSignal<Cart>` and routes every button through
//! [`CartView`], which dispatches intents back to the signal.

use leptos::prelude::*;

use nursery::{
    cart::{Cart, CartError, actions::CartAction},
    store::CartStore,
    totals::{CartSummary, EMPTY_CART_MESSAGE},
    view::{CartView, Navigator},
};

use crate::navbar::Navbar;

pub(crate) mod line_item;
pub(crate) mod summary;

use line_item::CartLine;
use summary::CartSummaryPanel;

/// Store backed by a reactive signal.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SignalStore(RwSignal<Cart>);

impl SignalStore {
    pub(crate) fn new(cart: RwSignal<Cart>) -> Self {
        SignalStore(cart)
    }
}

impl CartStore for SignalStore {
    fn snapshot(&self) -> Cart {
        self.0.get_untracked()
    }

    fn dispatch(&self, action: CartAction) -> Result<(), CartError> {
        self.0
            .try_maybe_update(|cart| apply_and_report(cart, action))
            .unwrap_or(Err(CartError::StoreUnavailable))
    }
}

/// Apply `action`, pairing the result with whether readers need notifying.
fn apply_and_report(cart: &mut Cart, action: CartAction) -> (bool, Result<(), CartError>) {
    let result = cart.apply(action);

    (result.is_ok(), result)
}

/// Navigation callbacks supplied by the app shell.
#[derive(Clone, Copy)]
pub(crate) struct CallbackNavigator {
    continue_shopping: Callback<()>,
    plants: Callback<()>,
    about_us: Callback<()>,
}

impl Navigator for CallbackNavigator {
    fn continue_shopping(&self) {
        self.continue_shopping.run(());
    }

    fn plants(&self) {
        self.plants.run(());
    }

    fn about_us(&self) {
        self.about_us.run(());
    }
}

/// Controller used by every cart page button.
pub(crate) type PageCartView = CartView<SignalStore, CallbackNavigator>;

/// Show `message` if the intent went through, the error otherwise.
pub(crate) fn announce(
    notice: RwSignal<Option<String>>,
    result: Result<(), CartError>,
    message: String,
) {
    match result {
        Ok(()) => notice.set(Some(message)),
        Err(error) => notice.set(Some(error.to_string())),
    }
}

#[component]
fn EmptyCart(cart_view: PageCartView) -> impl IntoView {
    view! {
        <div class="empty-cart">
            <p>{EMPTY_CART_MESSAGE}</p>
            <button
                type="button"
                class="continue-shopping-button"
                on:click=move |event| {
                    event.prevent_default();
                    cart_view.continue_shopping();
                }
            >
                "Continue Shopping"
            </button>
        </div>
    }
}

fn render_cart_body(
    cart_view: PageCartView,
    cart: &Cart,
    notice: RwSignal<Option<String>>,
) -> AnyView {
    let summary = CartSummary::from_cart(cart);

    if summary.is_empty() {
        return view! { <EmptyCart cart_view=cart_view /> }.into_any();
    }

    let lines = cart
        .iter()
        .cloned()
        .zip(summary.lines)
        .map(|(entry, line)| {
            view! { <CartLine entry=entry line=line cart_view=cart_view notice=notice /> }
        })
        .collect_view();

    view! {
        <h2 class="cart-title">{format!("Total Cart Amount: {}", summary.total_amount)}</h2>
        <ul class="cart-items">{lines}</ul>
        <CartSummaryPanel
            total_items=summary.total_items
            total_amount=summary.total_amount
            cart_view=cart_view
            notice=notice
        />
    }
    .into_any()
}

/// Cart page component.
#[component]
pub(crate) fn CartPage(
    /// Authoritative cart state.
    cart: RwSignal<Cart>,
    /// Leave the cart and keep shopping.
    on_continue_shopping: Callback<()>,
    /// Show the plants listing.
    on_plants_click: Callback<()>,
    /// Show the about page.
    on_about_us_click: Callback<()>,
) -> impl IntoView {
    let notice = RwSignal::new(None::<String>);

    let cart_view = CartView::new(
        SignalStore::new(cart),
        CallbackNavigator {
            continue_shopping: on_continue_shopping,
            plants: on_plants_click,
            about_us: on_about_us_click,
        },
    );

    view! {
        <div>
            <Navbar cart=cart on_plants_click=on_plants_click on_about_us_click=on_about_us_click />
            <div class="cart-container">
                {move || cart.with(|cart| render_cart_body(cart_view, cart, notice))}
                <p class="cart-notice" role="status" aria-live="polite">
                    {move || notice.get().unwrap_or_default()}
                </p>
            </div>
        </div>
    }
}

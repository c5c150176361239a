use leptos::prelude::*;

use super::PageCartView;

pub(super) fn format_item_count(total_items: u64) -> String {
    let label = if total_items == 1 { "item" } else { "items" };

    format!("{total_items} {label}")
}

#[component]
pub(super) fn CartSummaryPanel(
    total_items: u64,
    total_amount: String,
    cart_view: PageCartView,
    notice: RwSignal<Option<String>>,
) -> impl IntoView {
    view! {
        <div class="cart-summary">
            <div class="cart-total">
                <h3>
                    "Total Items: " {total_items}
                    <span class="sr-only">{format!(" ({})", format_item_count(total_items))}</span>
                </h3>
                <h3>{format!("Total Cost: {total_amount}")}</h3>
            </div>
            <div class="cart-actions">
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
                <button
                    type="button"
                    class="checkout-button"
                    on:click=move |_| notice.set(Some(cart_view.checkout().to_string()))
                >
                    "Checkout"
                </button>
            </div>
        </div>
    }
}

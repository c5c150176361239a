use leptos::prelude::*;

use nursery::{cart::CartEntry, totals::LineSummary};

use super::{PageCartView, announce};

pub(super) fn decrement_message(line: &LineSummary) -> String {
    if line.quantity > 1 {
        format!("Removed one {} from cart.", line.name)
    } else {
        format!("Removed {} from cart.", line.name)
    }
}

#[component]
fn QuantityStepper(
    entry: CartEntry,
    line: LineSummary,
    cart_view: PageCartView,
    notice: RwSignal<Option<String>>,
) -> impl IntoView {
    let decrement_entry = entry.clone();
    let increment_entry = entry.clone();
    let remove_entry = entry;

    let decrement_text = decrement_message(&line);
    let increment_text = format!("Added another {} to cart.", line.name);
    let remove_text = format!("Removed {} from cart.", line.name);

    let decrement_label = format!("Remove one {} from cart", line.name);
    let increment_label = format!("Add another {} to cart", line.name);
    let remove_label = format!("Delete {} from cart", line.name);

    view! {
        <div class="quantity-controls">
            <button
                type="button"
                class="quantity-button"
                aria-label=decrement_label
                on:click=move |_| {
                    announce(notice, cart_view.decrement(&decrement_entry), decrement_text.clone());
                }
            >
                "-"
            </button>
            <span class="quantity-display">{line.quantity}</span>
            <button
                type="button"
                class="quantity-button"
                aria-label=increment_label
                on:click=move |_| {
                    announce(notice, cart_view.increment(&increment_entry), increment_text.clone());
                }
            >
                "+"
            </button>
            <button
                type="button"
                class="delete-button"
                aria-label=remove_label
                on:click=move |_| {
                    announce(notice, cart_view.remove(&remove_entry), remove_text.clone());
                }
            >
                "Delete"
            </button>
        </div>
    }
}

#[component]
pub(super) fn CartLine(
    entry: CartEntry,
    line: LineSummary,
    cart_view: PageCartView,
    notice: RwSignal<Option<String>>,
) -> impl IntoView {
    let stepper_line = line.clone();

    view! {
        <li class="cart-item">
            <img src=line.image alt=line.name.clone() class="cart-item-image" />
            <div class="cart-item-details">
                <h3 class="cart-item-name">{line.name}</h3>
                <p class="cart-item-cost">{format!("Unit Price: {}", line.unit_price)}</p>
                <p class="cart-item-subtotal">{format!("Subtotal: {}", line.subtotal)}</p>
                <QuantityStepper
                    entry=entry
                    line=stepper_line
                    cart_view=cart_view
                    notice=notice
                />
            </div>
        </li>
    }
}

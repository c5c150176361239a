//! Cart View
//!
//! [`CartView`] is the controller behind the cart page. It reads snapshots
//! from a [`CartStore`], derives totals, and turns user events into intents.
//! It never mutates a snapshot; every change goes through the store.

use std::fmt;

use tracing::{debug, warn};

use crate::{
    cart::{Cart, CartEntry, CartError, actions::CartAction},
    store::CartStore,
    totals::{CartSummary, CartTotals},
};

/// Message shown when checkout is requested.
pub const CHECKOUT_NOT_IMPLEMENTED: &str = "Functionality to be added for future reference";

/// View transitions supplied by the caller.
pub trait Navigator {
    /// Leave the cart and return to shopping.
    fn continue_shopping(&self);

    /// Show the plants listing.
    fn plants(&self);

    /// Show the about page.
    fn about_us(&self);
}

impl<N: Navigator + ?Sized> Navigator for &N {
    fn continue_shopping(&self) {
        (**self).continue_shopping();
    }

    fn plants(&self) {
        (**self).plants();
    }

    fn about_us(&self) {
        (**self).about_us();
    }
}

/// Notice surfaced to the user after a checkout request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckoutNotice {
    message: &'static str,
}

impl CheckoutNotice {
    /// The text to show the user.
    pub fn message(&self) -> &'static str {
        self.message
    }
}

impl fmt::Display for CheckoutNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message)
    }
}

/// Intent raising an entry's quantity by one.
///
/// # Errors
///
/// Returns [`CartError::QuantityOverflow`] if the entry is at `u32::MAX`.
pub fn increment_intent(entry: &CartEntry) -> Result<CartAction, CartError> {
    let quantity = entry
        .quantity()
        .checked_add(1)
        .ok_or_else(|| CartError::QuantityOverflow(entry.name().to_string()))?;

    Ok(CartAction::SetQuantity {
        name: entry.name().to_string(),
        quantity,
    })
}

/// Intent lowering an entry's quantity by one, or removing it at one.
pub fn decrement_intent(entry: &CartEntry) -> CartAction {
    if entry.quantity() > 1 {
        CartAction::SetQuantity {
            name: entry.name().to_string(),
            quantity: entry.quantity() - 1,
        }
    } else {
        remove_intent(entry)
    }
}

/// Intent removing an entry outright.
pub fn remove_intent(entry: &CartEntry) -> CartAction {
    CartAction::RemoveEntry {
        name: entry.name().to_string(),
    }
}

/// Cart page controller.
#[derive(Debug, Clone, Copy)]
pub struct CartView<S, N> {
    store: S,
    navigator: N,
}

impl<S: CartStore, N: Navigator> CartView<S, N> {
    /// Create a view over a store and a set of navigation callbacks.
    pub fn new(store: S, navigator: N) -> Self {
        CartView { store, navigator }
    }

    /// The store this view dispatches to.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Current cart snapshot.
    pub fn snapshot(&self) -> Cart {
        self.store.snapshot()
    }

    /// Totals for the current snapshot.
    pub fn totals(&self) -> CartTotals {
        CartTotals::from_cart(&self.snapshot())
    }

    /// Display model for the current snapshot.
    pub fn summary(&self) -> CartSummary {
        CartSummary::from_cart(&self.snapshot())
    }

    /// Request one more unit of `entry`.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::EntryNotFound`] if the entry has left the cart,
    /// or [`CartError::QuantityOverflow`] if it is already at `u32::MAX`.
    pub fn increment(&self, entry: &CartEntry) -> Result<(), CartError> {
        let action = increment_intent(entry).inspect_err(|error| {
            warn!(entry = entry.name(), %error, "cart intent ignored");
        })?;

        self.dispatch(action)
    }

    /// Request one fewer unit of `entry`, removing it when only one is left.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::EntryNotFound`] if the entry has left the cart.
    pub fn decrement(&self, entry: &CartEntry) -> Result<(), CartError> {
        self.dispatch(decrement_intent(entry))
    }

    /// Request removal of `entry`.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::EntryNotFound`] if the entry has left the cart.
    pub fn remove(&self, entry: &CartEntry) -> Result<(), CartError> {
        self.dispatch(remove_intent(entry))
    }

    /// Return to shopping. The cart is untouched.
    pub fn continue_shopping(&self) {
        self.navigator.continue_shopping();
    }

    /// Show the plants listing.
    pub fn plants(&self) {
        self.navigator.plants();
    }

    /// Show the about page.
    pub fn about_us(&self) {
        self.navigator.about_us();
    }

    /// Checkout placeholder. The cart is untouched.
    pub fn checkout(&self) -> CheckoutNotice {
        debug!(
            total_items = self.totals().total_items,
            "checkout requested"
        );

        CheckoutNotice {
            message: CHECKOUT_NOT_IMPLEMENTED,
        }
    }

    fn dispatch(&self, action: CartAction) -> Result<(), CartError> {
        let name = action.name().to_string();

        self.store.dispatch(action).inspect_err(|error| {
            warn!(entry = %name, %error, "cart intent ignored");
        })
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, num::NonZeroU32};

    use rust_decimal::Decimal;
    use rusty_money::iso::USD;
    use testresult::TestResult;

    use crate::{prices::Cost, store::MemoryStore};

    use super::*;

    #[derive(Debug, Default)]
    struct RecordingNavigator {
        visits: RefCell<Vec<&'static str>>,
    }

    impl Navigator for RecordingNavigator {
        fn continue_shopping(&self) {
            self.visits.borrow_mut().push("continue");
        }

        fn plants(&self) {
            self.visits.borrow_mut().push("plants");
        }

        fn about_us(&self) {
            self.visits.borrow_mut().push("about");
        }
    }

    fn entry(quantity: u32) -> Result<CartEntry, &'static str> {
        Ok(CartEntry::with_quantity(
            "Fern",
            "fern.png",
            Cost::Amount(Decimal::new(5, 0)),
            NonZeroU32::new(quantity).ok_or("quantity must be non-zero")?,
        ))
    }

    #[test]
    fn increment_intent_adds_one() -> TestResult {
        assert_eq!(
            increment_intent(&entry(2)?)?,
            CartAction::SetQuantity {
                name: "Fern".to_string(),
                quantity: 3
            }
        );

        Ok(())
    }

    #[test]
    fn increment_intent_at_max_overflows() -> TestResult {
        assert_eq!(
            increment_intent(&entry(u32::MAX)?),
            Err(CartError::QuantityOverflow("Fern".to_string()))
        );

        Ok(())
    }

    #[test]
    fn increment_at_max_leaves_cart_untouched() -> TestResult {
        let store = MemoryStore::new(Cart::with_entries([entry(u32::MAX)?], USD)?);
        let navigator = RecordingNavigator::default();
        let view = CartView::new(&store, &navigator);
        let before = view.snapshot();

        let result = view.increment(&entry(u32::MAX)?);

        assert_eq!(result, Err(CartError::QuantityOverflow("Fern".to_string())));
        assert_eq!(view.snapshot(), before);

        Ok(())
    }

    #[test]
    fn decrement_intent_above_one_subtracts() -> TestResult {
        assert_eq!(
            decrement_intent(&entry(2)?),
            CartAction::SetQuantity {
                name: "Fern".to_string(),
                quantity: 1
            }
        );

        Ok(())
    }

    #[test]
    fn decrement_intent_at_one_removes() -> TestResult {
        assert_eq!(
            decrement_intent(&entry(1)?),
            CartAction::RemoveEntry {
                name: "Fern".to_string()
            }
        );

        Ok(())
    }

    #[test]
    fn navigation_does_not_touch_cart() -> TestResult {
        let store = MemoryStore::new(Cart::with_entries([entry(2)?], USD)?);
        let navigator = RecordingNavigator::default();
        let view = CartView::new(&store, &navigator);

        view.continue_shopping();
        view.plants();
        view.about_us();

        assert_eq!(
            *navigator.visits.borrow(),
            vec!["continue", "plants", "about"]
        );
        assert_eq!(view.totals().total_items, 2);

        Ok(())
    }

    #[test]
    fn checkout_returns_notice_without_state_change() -> TestResult {
        let store = MemoryStore::new(Cart::with_entries([entry(2)?], USD)?);
        let navigator = RecordingNavigator::default();
        let view = CartView::new(&store, &navigator);
        let before = view.snapshot();

        let notice = view.checkout();

        assert_eq!(notice.message(), CHECKOUT_NOT_IMPLEMENTED);
        assert_eq!(notice.to_string(), CHECKOUT_NOT_IMPLEMENTED);
        assert_eq!(view.snapshot(), before);
        assert!(navigator.visits.borrow().is_empty());

        Ok(())
    }

    #[test]
    fn stale_entry_intent_reports_not_found() -> TestResult {
        let store = MemoryStore::new(Cart::new(USD));
        let navigator = RecordingNavigator::default();
        let view = CartView::new(&store, &navigator);

        let result = view.increment(&entry(1)?);

        assert_eq!(result, Err(CartError::EntryNotFound("Fern".to_string())));
        assert!(view.snapshot().is_empty());

        Ok(())
    }
}

//! Store
//!
//! The store owns the authoritative cart. Readers take snapshots; writers
//! dispatch [`CartAction`]s and never mutate a snapshot in place.

use std::{cell::RefCell, fmt, rc::Rc};

use slotmap::{SlotMap, new_key_type};

use crate::cart::{Cart, CartError, actions::CartAction};

new_key_type! {
    /// Subscription Key
    pub struct SubscriptionKey;
}

/// Holder of cart state that accepts dispatched intents.
pub trait CartStore {
    /// Returns the current cart.
    fn snapshot(&self) -> Cart;

    /// Requests a state transition.
    ///
    /// # Errors
    ///
    /// Returns a [`CartError`] if the store rejected the action. The cart is
    /// unchanged in that case.
    fn dispatch(&self, action: CartAction) -> Result<(), CartError>;
}

impl<S: CartStore + ?Sized> CartStore for &S {
    fn snapshot(&self) -> Cart {
        (**self).snapshot()
    }

    fn dispatch(&self, action: CartAction) -> Result<(), CartError> {
        (**self).dispatch(action)
    }
}

impl<S: CartStore + ?Sized> CartStore for Rc<S> {
    fn snapshot(&self) -> Cart {
        (**self).snapshot()
    }

    fn dispatch(&self, action: CartAction) -> Result<(), CartError> {
        (**self).dispatch(action)
    }
}

type Listener = Box<dyn Fn(&Cart)>;

/// Single-threaded in-memory store with change subscriptions.
///
/// Listeners run after every successful dispatch, in subscription order,
/// with the new snapshot. A listener may dispatch further actions but must
/// not subscribe or unsubscribe while it is running.
pub struct MemoryStore {
    cart: RefCell<Cart>,
    listeners: RefCell<SlotMap<SubscriptionKey, Listener>>,
}

impl MemoryStore {
    /// Create a store holding the given cart.
    #[must_use]
    pub fn new(cart: Cart) -> Self {
        MemoryStore {
            cart: RefCell::new(cart),
            listeners: RefCell::new(SlotMap::with_key()),
        }
    }

    /// Register a listener for cart changes.
    pub fn subscribe(&self, listener: impl Fn(&Cart) + 'static) -> SubscriptionKey {
        self.listeners.borrow_mut().insert(Box::new(listener))
    }

    /// Remove a listener. Returns `false` if it was already removed.
    pub fn unsubscribe(&self, key: SubscriptionKey) -> bool {
        self.listeners.borrow_mut().remove(key).is_some()
    }

    /// Get the number of registered listeners.
    pub fn subscriber_count(&self) -> usize {
        self.listeners.borrow().len()
    }
}

impl CartStore for MemoryStore {
    fn snapshot(&self) -> Cart {
        self.cart.borrow().clone()
    }

    fn dispatch(&self, action: CartAction) -> Result<(), CartError> {
        let snapshot = {
            let mut cart = self.cart.borrow_mut();

            cart.apply(action)?;
            cart.clone()
        };

        for listener in self.listeners.borrow().values() {
            listener(&snapshot);
        }

        Ok(())
    }
}

impl fmt::Debug for MemoryStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryStore")
            .field("cart", &self.cart)
            .field("listeners", &self.listeners.borrow().len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use rust_decimal::Decimal;
    use rusty_money::iso::USD;
    use testresult::TestResult;

    use crate::{cart::CartEntry, prices::Cost};

    use super::*;

    fn store_with_fern() -> Result<MemoryStore, CartError> {
        Ok(MemoryStore::new(Cart::with_entries(
            [CartEntry::new(
                "Fern",
                "fern.png",
                Cost::Amount(Decimal::new(5, 0)),
            )],
            USD,
        )?))
    }

    #[test]
    fn snapshot_is_detached_from_store() -> TestResult {
        let store = store_with_fern()?;
        let before = store.snapshot();

        store.dispatch(CartAction::SetQuantity {
            name: "Fern".to_string(),
            quantity: 3,
        })?;

        assert_eq!(before.get("Fern").map(CartEntry::quantity), Some(1));
        assert_eq!(
            store.snapshot().get("Fern").map(CartEntry::quantity),
            Some(3)
        );

        Ok(())
    }

    #[test]
    fn listeners_receive_new_snapshot() -> TestResult {
        let store = store_with_fern()?;
        let seen = Rc::new(Cell::new(0_u32));
        let seen_by_listener = Rc::clone(&seen);

        store.subscribe(move |cart| {
            seen_by_listener.set(cart.get("Fern").map_or(0, CartEntry::quantity));
        });

        store.dispatch(CartAction::SetQuantity {
            name: "Fern".to_string(),
            quantity: 4,
        })?;

        assert_eq!(seen.get(), 4);

        Ok(())
    }

    #[test]
    fn failed_dispatch_does_not_notify() -> TestResult {
        let store = store_with_fern()?;
        let calls = Rc::new(Cell::new(0_u32));
        let calls_by_listener = Rc::clone(&calls);

        store.subscribe(move |_cart| calls_by_listener.set(calls_by_listener.get() + 1));

        let result = store.dispatch(CartAction::RemoveEntry {
            name: "Orchid".to_string(),
        });

        assert_eq!(result, Err(CartError::EntryNotFound("Orchid".to_string())));
        assert_eq!(calls.get(), 0);

        Ok(())
    }

    #[test]
    fn unsubscribe_stops_notifications() -> TestResult {
        let store = store_with_fern()?;
        let calls = Rc::new(Cell::new(0_u32));
        let calls_by_listener = Rc::clone(&calls);

        let key = store.subscribe(move |_cart| calls_by_listener.set(calls_by_listener.get() + 1));

        assert_eq!(store.subscriber_count(), 1);
        assert!(store.unsubscribe(key));
        assert!(!store.unsubscribe(key));

        store.dispatch(CartAction::RemoveEntry {
            name: "Fern".to_string(),
        })?;

        assert_eq!(calls.get(), 0);
        assert!(store.snapshot().is_empty());

        Ok(())
    }

    #[test]
    fn shared_store_dispatches_through_rc() -> TestResult {
        let store = Rc::new(store_with_fern()?);
        let handle = Rc::clone(&store);

        handle.dispatch(CartAction::RemoveEntry {
            name: "Fern".to_string(),
        })?;

        assert!(store.snapshot().is_empty());

        Ok(())
    }
}

//! Cart actions
//!
//! Intents dispatched to a store, and the reducer that applies them.

use std::num::NonZeroU32;

use tracing::debug;

use crate::prices::Cost;

use super::{Cart, CartEntry, CartError};

/// A requested cart state transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartAction {
    /// Add one unit of a product, creating the entry if needed.
    AddItem {
        /// Entry name
        name: String,

        /// Image reference
        image: String,

        /// Unit cost
        unit_cost: Cost,
    },

    /// Set the quantity of an existing entry. Zero removes it.
    SetQuantity {
        /// Entry name
        name: String,

        /// New quantity
        quantity: u32,
    },

    /// Remove an entry regardless of its quantity.
    RemoveEntry {
        /// Entry name
        name: String,
    },
}

impl CartAction {
    /// The name of the entry this action targets.
    pub fn name(&self) -> &str {
        match self {
            CartAction::AddItem { name, .. }
            | CartAction::SetQuantity { name, .. }
            | CartAction::RemoveEntry { name } => name,
        }
    }
}

impl Cart {
    /// Apply an action to the cart.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::EntryNotFound`] when a `SetQuantity` or
    /// `RemoveEntry` names an entry that is not in the cart. The cart is left
    /// unchanged in that case.
    pub fn apply(&mut self, action: CartAction) -> Result<(), CartError> {
        debug!(?action, "applying cart action");

        match action {
            CartAction::AddItem {
                name,
                image,
                unit_cost,
            } => {
                if let Some(entry) = self.get_mut(&name) {
                    entry.set_quantity(entry.quantity.saturating_add(1));
                } else {
                    self.push(CartEntry::new(name, image, unit_cost));
                }

                Ok(())
            }
            CartAction::SetQuantity { name, quantity } => match NonZeroU32::new(quantity) {
                Some(quantity) => {
                    let entry = self
                        .get_mut(&name)
                        .ok_or_else(|| CartError::EntryNotFound(name.clone()))?;

                    entry.set_quantity(quantity);

                    Ok(())
                }
                None => self
                    .remove(&name)
                    .map(drop)
                    .ok_or(CartError::EntryNotFound(name)),
            },
            CartAction::RemoveEntry { name } => self
                .remove(&name)
                .map(drop)
                .ok_or(CartError::EntryNotFound(name)),
        }
    }
}

//! Cart

use std::num::NonZeroU32;

use rustc_hash::FxHashSet;
use rusty_money::iso::Currency;
use thiserror::Error;

use crate::prices::Cost;

pub mod actions;

/// Errors related to cart construction or intents.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartError {
    /// No entry with the given name is in the cart.
    #[error("Cart entry {0} not found")]
    EntryNotFound(String),

    /// More than one entry shares the given name.
    #[error("Cart entry {0} appears more than once")]
    DuplicateEntry(String),

    /// The entry is already at the largest representable quantity.
    #[error("Cart entry {0} cannot hold any more units")]
    QuantityOverflow(String),

    /// The store backing the cart is gone, so nothing was applied.
    #[error("Cart is no longer available")]
    StoreUnavailable,
}

/// One product line in the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartEntry {
    name: String,
    image: String,
    unit_cost: Cost,
    quantity: NonZeroU32,
}

impl CartEntry {
    /// Creates a new entry with a quantity of one.
    pub fn new(name: impl Into<String>, image: impl Into<String>, unit_cost: Cost) -> Self {
        Self::with_quantity(name, image, unit_cost, NonZeroU32::MIN)
    }

    /// Creates a new entry with the given quantity.
    pub fn with_quantity(
        name: impl Into<String>,
        image: impl Into<String>,
        unit_cost: Cost,
        quantity: NonZeroU32,
    ) -> Self {
        Self {
            name: name.into(),
            image: image.into(),
            unit_cost,
            quantity,
        }
    }

    /// Returns the name, which identifies the entry within its cart.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the image reference.
    pub fn image(&self) -> &str {
        &self.image
    }

    /// Returns the cost of a single unit.
    pub fn unit_cost(&self) -> Cost {
        self.unit_cost
    }

    /// Returns the quantity (always at least one).
    pub fn quantity(&self) -> u32 {
        self.quantity.get()
    }

    pub(crate) fn set_quantity(&mut self, quantity: NonZeroU32) {
        self.quantity = quantity;
    }
}

/// Ordered collection of cart entries, keyed by name.
#[derive(Debug, Clone, PartialEq)]
pub struct Cart {
    entries: Vec<CartEntry>,
    currency: &'static Currency,
}

impl Cart {
    /// Create an empty cart priced in the given currency.
    #[must_use]
    pub fn new(currency: &'static Currency) -> Self {
        Cart {
            entries: Vec::new(),
            currency,
        }
    }

    /// Create a cart holding the given entries, in order.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::DuplicateEntry`] if two entries share a name.
    pub fn with_entries(
        entries: impl Into<Vec<CartEntry>>,
        currency: &'static Currency,
    ) -> Result<Self, CartError> {
        let entries = entries.into();
        let mut seen = FxHashSet::default();

        for entry in &entries {
            if !seen.insert(entry.name()) {
                return Err(CartError::DuplicateEntry(entry.name.clone()));
            }
        }

        Ok(Cart { entries, currency })
    }

    /// Get an entry by name.
    pub fn get(&self, name: &str) -> Option<&CartEntry> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    /// Check whether an entry with the given name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub(crate) fn get_mut(&mut self, name: &str) -> Option<&mut CartEntry> {
        self.entries.iter_mut().find(|entry| entry.name == name)
    }

    pub(crate) fn push(&mut self, entry: CartEntry) {
        self.entries.push(entry);
    }

    pub(crate) fn remove(&mut self, name: &str) -> Option<CartEntry> {
        let position = self.entries.iter().position(|entry| entry.name == name)?;

        Some(self.entries.remove(position))
    }

    /// Iterate over the entries in display order.
    pub fn iter(&self) -> impl Iterator<Item = &CartEntry> {
        self.entries.iter()
    }

    /// The entries in display order.
    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    /// Get the number of entries (not units) in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the cart is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the currency used to display the cart.
    #[must_use]
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = &'a CartEntry;
    type IntoIter = std::slice::Iter<'a, CartEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

//! Totals
//!
//! Values derived from a cart snapshot. Nothing here mutates the cart.

use std::io;

use tabled::{
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};

use crate::{
    cart::{Cart, CartEntry},
    prices::{Cost, format_cost},
};

/// Text shown in place of lines and totals when the cart is empty.
pub const EMPTY_CART_MESSAGE: &str = "Your cart is empty";

/// Sum of quantities over all entries.
pub fn total_items(cart: &Cart) -> u64 {
    cart.iter().map(|entry| u64::from(entry.quantity())).sum()
}

/// Sum of `unit_cost × quantity` over all entries. Zero for an empty cart.
pub fn total_amount(cart: &Cart) -> Cost {
    cart.iter().map(line_subtotal).sum()
}

/// `unit_cost × quantity` for a single entry.
pub fn line_subtotal(entry: &CartEntry) -> Cost {
    entry.unit_cost().times(entry.quantity())
}

/// Numeric totals for a cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartTotals {
    /// Number of units across all entries.
    pub total_items: u64,

    /// Cost of all units.
    pub total_amount: Cost,
}

impl CartTotals {
    /// Derive totals from a cart snapshot.
    pub fn from_cart(cart: &Cart) -> Self {
        CartTotals {
            total_items: total_items(cart),
            total_amount: total_amount(cart),
        }
    }
}

/// Display model for a single cart line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineSummary {
    /// Entry name.
    pub name: String,

    /// Image reference.
    pub image: String,

    /// Formatted unit price.
    pub unit_price: String,

    /// Formatted `unit_cost × quantity`.
    pub subtotal: String,

    /// Units of this entry.
    pub quantity: u32,
}

impl LineSummary {
    fn from_entry(entry: &CartEntry, cart: &Cart) -> Self {
        LineSummary {
            name: entry.name().to_string(),
            image: entry.image().to_string(),
            unit_price: format_cost(entry.unit_cost(), cart.currency()),
            subtotal: format_cost(line_subtotal(entry), cart.currency()),
            quantity: entry.quantity(),
        }
    }
}

/// Display model for a whole cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartSummary {
    /// Lines in display order.
    pub lines: Vec<LineSummary>,

    /// Number of units across all lines.
    pub total_items: u64,

    /// Formatted total cost.
    pub total_amount: String,
}

impl CartSummary {
    /// Build the display model for a cart snapshot.
    pub fn from_cart(cart: &Cart) -> Self {
        let totals = CartTotals::from_cart(cart);

        CartSummary {
            lines: cart
                .iter()
                .map(|entry| LineSummary::from_entry(entry, cart))
                .collect(),
            total_items: totals.total_items,
            total_amount: format_cost(totals.total_amount, cart.currency()),
        }
    }

    /// Whether the empty state should be shown instead of lines and totals.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Write the summary as a text table.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the writer.
    pub fn write_table(&self, out: &mut impl io::Write) -> io::Result<()> {
        if self.is_empty() {
            return writeln!(out, "{EMPTY_CART_MESSAGE}");
        }

        let mut builder = Builder::default();

        builder.push_record(["Item", "Unit Price", "Qty", "Subtotal"]);

        for line in &self.lines {
            builder.push_record([
                line.name.clone(),
                line.unit_price.clone(),
                line.quantity.to_string(),
                line.subtotal.clone(),
            ]);
        }

        let mut table = builder.build();

        table.with(Style::modern_rounded());
        table.modify(Columns::new(1..), Alignment::right());

        writeln!(out, "{table}")?;
        writeln!(out, " Total Items: {}", self.total_items)?;
        writeln!(out, " Total Cost: {}", self.total_amount)
    }
}

//! Prices
//!
//! Amounts are stored as plain decimals. Display strings such as `"$15"` are
//! parsed once at the boundary and formatted back only for rendering.

use std::{
    fmt,
    iter::Sum,
    ops::{Add, AddAssign},
};

use rust_decimal::{Decimal, RoundingStrategy};
use rusty_money::iso::{Currency, EUR, GBP, USD};
use thiserror::Error;

/// Text rendered for a [`Cost::NotANumber`] amount.
pub const NOT_A_NUMBER: &str = "NaN";

/// Errors related to currencies and price strings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PriceError {
    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),
}

/// A monetary amount in major units, or the result of a malformed price.
///
/// `NotANumber` is sticky: any arithmetic involving it yields `NotANumber`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cost {
    /// A decimal amount of monetary units.
    Amount(Decimal),

    /// The amount could not be determined.
    NotANumber,
}

impl Cost {
    /// Zero monetary units.
    pub const ZERO: Cost = Cost::Amount(Decimal::ZERO);

    /// Returns the decimal amount, if known.
    pub fn amount(self) -> Option<Decimal> {
        match self {
            Cost::Amount(amount) => Some(amount),
            Cost::NotANumber => None,
        }
    }

    /// Returns `true` if this cost came from a malformed price or overflowed.
    pub fn is_nan(self) -> bool {
        matches!(self, Cost::NotANumber)
    }

    /// Multiplies the cost by a quantity.
    #[must_use]
    pub fn times(self, quantity: u32) -> Cost {
        match self {
            Cost::Amount(amount) => amount
                .checked_mul(Decimal::from(quantity))
                .map_or(Cost::NotANumber, Cost::Amount),
            Cost::NotANumber => Cost::NotANumber,
        }
    }
}

impl Default for Cost {
    fn default() -> Self {
        Cost::ZERO
    }
}

impl From<Decimal> for Cost {
    fn from(amount: Decimal) -> Self {
        Cost::Amount(amount)
    }
}

impl Add for Cost {
    type Output = Cost;

    fn add(self, rhs: Cost) -> Cost {
        match (self, rhs) {
            (Cost::Amount(left), Cost::Amount(right)) => left
                .checked_add(right)
                .map_or(Cost::NotANumber, Cost::Amount),
            _ => Cost::NotANumber,
        }
    }
}

impl AddAssign for Cost {
    fn add_assign(&mut self, rhs: Cost) {
        *self = *self + rhs;
    }
}

impl Sum for Cost {
    fn sum<I: Iterator<Item = Cost>>(iter: I) -> Self {
        iter.fold(Cost::ZERO, Add::add)
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_fixed(*self))
    }
}

/// Parse a display price with a single-character currency prefix (e.g. `"$15.99"`).
///
/// The first character is dropped whatever it is. The remainder must be a
/// plain decimal number; anything else yields [`Cost::NotANumber`]. A leading
/// number followed by other text is not salvaged: `"$12abc"` is NaN, not 12.
pub fn parse_prefixed_amount(display: &str) -> Cost {
    let mut chars = display.chars();

    if chars.next().is_none() {
        return Cost::NotANumber;
    }

    chars
        .as_str()
        .trim()
        .parse::<Decimal>()
        .map_or(Cost::NotANumber, Cost::Amount)
}

/// Format a cost to exactly two decimal places (e.g. `"13.50"`).
///
/// Midpoints round away from zero. `NotANumber` renders as `"NaN"`.
pub fn format_fixed(cost: Cost) -> String {
    match cost {
        Cost::Amount(amount) => {
            let mut rounded =
                amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
            rounded.rescale(2);

            rounded.to_string()
        }
        Cost::NotANumber => NOT_A_NUMBER.to_string(),
    }
}

/// Format a cost with the currency symbol prefix (e.g. `"$13.50"`).
pub fn format_cost(cost: Cost, currency: &Currency) -> String {
    format!("{}{}", currency.symbol, format_fixed(cost))
}

/// Look up a supported ISO currency by its alpha code.
///
/// # Errors
///
/// Returns [`PriceError::UnknownCurrency`] for anything other than GBP, USD or EUR.
pub fn currency_for_code(code: &str) -> Result<&'static Currency, PriceError> {
    match code.trim() {
        "GBP" => Ok(GBP),
        "USD" => Ok(USD),
        "EUR" => Ok(EUR),
        other => Err(PriceError::UnknownCurrency(other.to_string())),
    }
}

//! Prelude

pub use crate::{
    cart::{Cart, CartEntry, CartError, actions::CartAction},
    catalog::{Catalog, Category, Plant},
    prices::{Cost, format_cost, format_fixed, parse_prefixed_amount},
    store::{CartStore, MemoryStore, SubscriptionKey},
    totals::{CartSummary, CartTotals, LineSummary},
    view::{CartView, CheckoutNotice, Navigator},
};

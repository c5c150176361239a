//! Nursery
//!
//! Cart state, intents and totals for the Paradise Nursery storefront.
//!
//! The cart lives in a [`store::CartStore`]. The cart page reads snapshots
//! through [`view::CartView`] and dispatches [`cart::actions::CartAction`]s
//! back to the store instead of mutating anything locally.

pub mod cart;
pub mod catalog;
pub mod fixtures;
pub mod prices;
pub mod store;
pub mod totals;
pub mod view;

pub mod prelude;

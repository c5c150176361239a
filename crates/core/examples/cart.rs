//! Cart Summary Example
//!
//! Fills a cart from the nursery catalog and prints its summary table.
//!
//! Use `-a` (repeatable) to add a plant by name
//! Use `-d` (repeatable) to decrement a plant after adding

use std::io;

use anyhow::{Result, anyhow};
use clap::Parser;

use nursery::prelude::*;

const CATALOG_FIXTURE_YAML: &str = include_str!("../../../fixtures/plants/nursery.yml");

/// Arguments for the cart example
#[derive(Debug, Parser)]
struct ExampleCartArgs {
    /// Plant to add to the cart
    #[clap(short, long = "add", default_values_t = ["Snake Plant".to_string(), "Lavender".to_string(), "Lavender".to_string()])]
    add: Vec<String>,

    /// Plant to decrement once everything has been added
    #[clap(short, long = "decrement")]
    decrement: Vec<String>,
}

#[derive(Debug)]
struct StayOnCart;

impl Navigator for StayOnCart {
    fn continue_shopping(&self) {}

    fn plants(&self) {}

    fn about_us(&self) {}
}

/// Cart Summary Example
pub fn main() -> Result<()> {
    let args = ExampleCartArgs::parse();

    let catalog = Catalog::from_yaml(CATALOG_FIXTURE_YAML)?;
    let store = MemoryStore::new(catalog.empty_cart());

    for name in &args.add {
        let plant = catalog
            .find(name)
            .ok_or_else(|| anyhow!("Plant not found in catalog: {name}"))?;

        store.dispatch(plant.add_to_cart_intent())?;
    }

    let view = CartView::new(&store, StayOnCart);

    for name in &args.decrement {
        let snapshot = view.snapshot();
        let entry = snapshot
            .get(name)
            .ok_or_else(|| anyhow!("Plant not in cart: {name}"))?;

        view.decrement(entry)?;
    }

    view.summary().write_table(&mut io::stdout().lock())?;

    Ok(())
}

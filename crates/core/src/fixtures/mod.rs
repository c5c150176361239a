//! Fixtures
//!
//! YAML shapes for the storefront catalog. See [`crate::catalog::Catalog::from_yaml`].

use serde::Deserialize;
use thiserror::Error;

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// Plant name used more than once
    #[error("Plant {0} appears more than once")]
    DuplicatePlant(String),

    /// Catalog has no plants
    #[error("No plants found in fixture")]
    NoPlants,
}

/// Catalog Fixture
#[derive(Debug, Deserialize)]
pub struct CatalogFixture {
    /// ISO currency code (e.g., "USD")
    pub currency: String,

    /// Categories in display order
    pub categories: Vec<CategoryFixture>,
}

/// Category Fixture
#[derive(Debug, Deserialize)]
pub struct CategoryFixture {
    /// Category name
    pub name: String,

    /// Plants in display order
    pub plants: Vec<PlantFixture>,
}

/// Plant Fixture
#[derive(Debug, Deserialize)]
pub struct PlantFixture {
    /// Plant name
    pub name: String,

    /// Image URL
    pub image: String,

    /// Short description
    #[serde(default)]
    pub description: String,

    /// Price with a currency symbol prefix (e.g., "$15")
    pub cost: String,
}

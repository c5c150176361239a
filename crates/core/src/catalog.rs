//! Catalog
//!
//! Plants offered by the storefront, loaded from a YAML fixture.

use rustc_hash::FxHashSet;
use rusty_money::iso::Currency;
use tracing::info;

use crate::{
    cart::{Cart, actions::CartAction},
    fixtures::{CatalogFixture, CategoryFixture, FixtureError, PlantFixture},
    prices::{Cost, PriceError, currency_for_code, format_cost, parse_prefixed_amount},
};

/// A plant that can be added to the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plant {
    /// Plant name, unique within the catalog
    pub name: String,

    /// Image URL
    pub image: String,

    /// Short description
    pub description: String,

    /// Unit cost
    pub cost: Cost,
}

impl Plant {
    /// Intent adding one of this plant to the cart.
    pub fn add_to_cart_intent(&self) -> CartAction {
        CartAction::AddItem {
            name: self.name.clone(),
            image: self.image.clone(),
            unit_cost: self.cost,
        }
    }

    /// Formatted unit price.
    pub fn display_price(&self, currency: &Currency) -> String {
        format_cost(self.cost, currency)
    }
}

impl From<PlantFixture> for Plant {
    fn from(fixture: PlantFixture) -> Self {
        Plant {
            cost: parse_prefixed_amount(&fixture.cost),
            name: fixture.name,
            image: fixture.image,
            description: fixture.description,
        }
    }
}

/// A named group of plants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    /// Category name
    pub name: String,

    /// Plants in display order
    pub plants: Vec<Plant>,
}

impl From<CategoryFixture> for Category {
    fn from(fixture: CategoryFixture) -> Self {
        Category {
            name: fixture.name,
            plants: fixture.plants.into_iter().map(Plant::from).collect(),
        }
    }
}

/// The storefront catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    categories: Vec<Category>,
    currency: &'static Currency,
}

impl Catalog {
    /// Load a catalog from fixture YAML.
    ///
    /// # Errors
    ///
    /// Returns an error when the YAML is invalid, the currency is unknown, a
    /// plant name is repeated, or no plants are present.
    pub fn from_yaml(yaml: &str) -> Result<Self, FixtureError> {
        let fixture: CatalogFixture = serde_norway::from_str(yaml)?;

        let catalog = Catalog::try_from(fixture)?;

        info!(
            categories = catalog.categories.len(),
            plants = catalog.plants().count(),
            currency = catalog.currency.iso_alpha_code,
            "loaded plant catalog"
        );

        Ok(catalog)
    }

    /// Categories in display order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Iterate over every plant, category by category.
    pub fn plants(&self) -> impl Iterator<Item = &Plant> {
        self.categories
            .iter()
            .flat_map(|category| category.plants.iter())
    }

    /// Find a plant by name.
    pub fn find(&self, name: &str) -> Option<&Plant> {
        self.plants().find(|plant| plant.name == name)
    }

    /// Currency the catalog is priced in.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }

    /// An empty cart priced in the catalog's currency.
    pub fn empty_cart(&self) -> Cart {
        Cart::new(self.currency)
    }

    /// Whether the named plant already has an entry in the cart.
    pub fn is_in_cart(cart: &Cart, name: &str) -> bool {
        cart.contains(name)
    }
}

impl TryFrom<CatalogFixture> for Catalog {
    type Error = FixtureError;

    fn try_from(fixture: CatalogFixture) -> Result<Self, Self::Error> {
        let currency = currency_for_code(&fixture.currency)
            .map_err(|PriceError::UnknownCurrency(code)| FixtureError::UnknownCurrency(code))?;

        let categories: Vec<Category> = fixture.categories.into_iter().map(Category::from).collect();

        let mut seen = FxHashSet::default();

        for plant in categories.iter().flat_map(|category| category.plants.iter()) {
            if !seen.insert(plant.name.as_str()) {
                return Err(FixtureError::DuplicatePlant(plant.name.clone()));
            }
        }

        if seen.is_empty() {
            return Err(FixtureError::NoPlants);
        }

        Ok(Catalog {
            categories,
            currency,
        })
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use rusty_money::iso::USD;
    use testresult::TestResult;

    use super::*;

    const YAML: &str = r#"
currency: USD
categories:
  - name: Succulents
    plants:
      - name: Aloe Vera
        image: aloe.png
        description: Soothing gel.
        cost: "$14"
      - name: Echeveria
        image: echeveria.png
        cost: "$8.50"
  - name: Ferns
    plants:
      - name: Boston Fern
        image: fern.png
        cost: "ask"
"#;

    #[test]
    fn from_yaml_loads_categories_in_order() -> TestResult {
        let catalog = Catalog::from_yaml(YAML)?;

        let names: Vec<&str> = catalog
            .categories()
            .iter()
            .map(|category| category.name.as_str())
            .collect();

        assert_eq!(names, vec!["Succulents", "Ferns"]);
        assert_eq!(catalog.plants().count(), 3);
        assert_eq!(catalog.currency(), USD);

        Ok(())
    }

    #[test]
    fn plant_costs_are_parsed_at_the_boundary() -> TestResult {
        let catalog = Catalog::from_yaml(YAML)?;

        let echeveria = catalog.find("Echeveria").ok_or("missing Echeveria")?;
        let fern = catalog.find("Boston Fern").ok_or("missing Boston Fern")?;

        assert_eq!(echeveria.cost, Cost::Amount(Decimal::new(850, 2)));
        assert_eq!(echeveria.display_price(catalog.currency()), "$8.50");
        assert!(fern.cost.is_nan());

        Ok(())
    }

    #[test]
    fn add_to_cart_intent_carries_plant_details() -> TestResult {
        let catalog = Catalog::from_yaml(YAML)?;
        let aloe = catalog.find("Aloe Vera").ok_or("missing Aloe Vera")?;

        assert_eq!(
            aloe.add_to_cart_intent(),
            CartAction::AddItem {
                name: "Aloe Vera".to_string(),
                image: "aloe.png".to_string(),
                unit_cost: Cost::Amount(Decimal::new(14, 0)),
            }
        );

        Ok(())
    }

    #[test]
    fn is_in_cart_tracks_added_plants() -> TestResult {
        let catalog = Catalog::from_yaml(YAML)?;
        let aloe = catalog.find("Aloe Vera").ok_or("missing Aloe Vera")?;
        let mut cart = catalog.empty_cart();

        assert!(!Catalog::is_in_cart(&cart, "Aloe Vera"));

        cart.apply(aloe.add_to_cart_intent())?;

        assert!(Catalog::is_in_cart(&cart, "Aloe Vera"));
        assert_eq!(cart.currency(), USD);

        Ok(())
    }

    #[test]
    fn unknown_currency_is_rejected() {
        let result = Catalog::from_yaml("currency: XYZ\ncategories: []\n");

        assert!(matches!(result, Err(FixtureError::UnknownCurrency(code)) if code == "XYZ"));
    }

    #[test]
    fn duplicate_plant_is_rejected() {
        let yaml = r#"
currency: USD
categories:
  - name: A
    plants:
      - { name: Fern, image: a.png, cost: "$1" }
  - name: B
    plants:
      - { name: Fern, image: b.png, cost: "$2" }
"#;

        let result = Catalog::from_yaml(yaml);

        assert!(matches!(result, Err(FixtureError::DuplicatePlant(name)) if name == "Fern"));
    }

    #[test]
    fn empty_catalog_is_rejected() {
        let result = Catalog::from_yaml("currency: GBP\ncategories:\n  - name: Empty\n    plants: []\n");

        assert!(matches!(result, Err(FixtureError::NoPlants)));
    }

    #[test]
    fn invalid_yaml_is_rejected() {
        let result = Catalog::from_yaml("currency: [");

        assert!(matches!(result, Err(FixtureError::Yaml(_))));
    }
}

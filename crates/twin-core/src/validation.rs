//! Catalog validation rules.
//!
//! The wizard trusts the catalog: every step it derives must have options
//! to offer. These checks run whenever a catalog is parsed or built.

use std::collections::HashSet;

use crate::catalog::Catalog;
use crate::item::MenuItem;
use crate::profile::StepKind;

/// Error type for catalog parsing and validation.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to parse catalog YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("failed to parse catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("menu item id is required (item {index})")]
    EmptyId { index: usize },

    #[error("duplicate menu item id: {0}")]
    DuplicateId(String),

    #[error("menu item {id} has no name")]
    EmptyName { id: String },

    #[error("menu item {id} needs a meat list and a meat limit of at least 1")]
    MissingMeats { id: String },

    #[error("menu item {id} needs a non-empty sauce list")]
    MissingSauces { id: String },

    #[error("catalog has lunch menus but no pizzas to choose from")]
    NoPizzas,

    #[error("catalog has lunch menus but no drinks to choose from")]
    NoDrinks,
}

/// Validates a single item against the steps its profile requires.
pub fn validate_item(index: usize, item: &MenuItem) -> Result<(), CatalogError> {
    if item.id.trim().is_empty() {
        return Err(CatalogError::EmptyId { index });
    }
    if item.name.trim().is_empty() {
        return Err(CatalogError::EmptyName {
            id: item.id.clone(),
        });
    }

    let profile = item.profile();
    if profile.has_step(StepKind::Meat)
        && (item.meats.is_empty() || item.meats_limit.unwrap_or(0) == 0)
    {
        return Err(CatalogError::MissingMeats {
            id: item.id.clone(),
        });
    }
    if profile.has_step(StepKind::Sauce) && item.sauces.is_empty() {
        return Err(CatalogError::MissingSauces {
            id: item.id.clone(),
        });
    }
    Ok(())
}

/// Validates the whole catalog.
pub fn validate_catalog(catalog: &Catalog) -> Result<(), CatalogError> {
    let mut seen: HashSet<&str> = HashSet::new();
    for (index, item) in catalog.items().iter().enumerate() {
        validate_item(index, item)?;
        if !seen.insert(item.id.as_str()) {
            return Err(CatalogError::DuplicateId(item.id.clone()));
        }
    }

    let needs = |step: StepKind| catalog.items().iter().any(|i| i.profile().has_step(step));
    if needs(StepKind::PizzaChoice) && catalog.pizzas().is_empty() {
        return Err(CatalogError::NoPizzas);
    }
    if needs(StepKind::Drink) && catalog.drinks().is_empty() {
        return Err(CatalogError::NoDrinks);
    }
    Ok(())
}

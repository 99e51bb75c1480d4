//! The read-only menu catalog.
//!
//! A [`Catalog`] is either the built-in demo menu or parsed from YAML/JSON
//! text. Parsing always validates; a catalog value that exists is one the
//! wizard can run against.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::category::Category;
use crate::item::{MenuItem, MenuItemBuilder};
use crate::money::Money;
use crate::options::{Drink, Meat, Sauce, Size};
use crate::profile::GarnishSet;
use crate::validation::{self, CatalogError};

/// Result alias for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Menu items plus the global drink list used by lunch menus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    items: Vec<MenuItem>,
    #[serde(default)]
    drinks: Vec<Drink>,
}

impl Catalog {
    /// Builds and validates a catalog from parts.
    pub fn new(items: Vec<MenuItem>, drinks: Vec<Drink>) -> Result<Self> {
        let catalog = Self { items, drinks };
        validation::validate_catalog(&catalog)?;
        Ok(catalog)
    }

    pub fn from_yaml_str(s: &str) -> Result<Self> {
        let catalog: Catalog = serde_yaml::from_str(s)?;
        validation::validate_catalog(&catalog)?;
        info!(items = catalog.items.len(), "loaded catalog (yaml)");
        Ok(catalog)
    }

    pub fn from_json_str(s: &str) -> Result<Self> {
        let catalog: Catalog = serde_json::from_str(s)?;
        validation::validate_catalog(&catalog)?;
        info!(items = catalog.items.len(), "loaded catalog (json)");
        Ok(catalog)
    }

    /// The demo menu shipped with the front-end.
    pub fn builtin() -> Self {
        Self {
            items: builtin_items(),
            drinks: builtin_drinks(),
        }
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn drinks(&self) -> &[Drink] {
        &self.drinks
    }

    pub fn get(&self, id: &str) -> Option<&MenuItem> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Items of one category, in catalog order.
    pub fn items_in(&self, category: &Category) -> Vec<&MenuItem> {
        self.items.iter().filter(|i| &i.category == category).collect()
    }

    /// Pizzas offered by the pizza-choice step.
    pub fn pizzas(&self) -> Vec<&MenuItem> {
        self.items_in(&Category::Pizzas)
    }

    /// Items grouped per tab, in tab order. Items in categories outside the
    /// tab list are not shown.
    pub fn by_category(&self) -> Vec<(Category, Vec<&MenuItem>)> {
        Category::TABS
            .iter()
            .map(|c| (c.clone(), self.items_in(c)))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Built-in demo menu
// ---------------------------------------------------------------------------

fn meat_options() -> Vec<Meat> {
    [
        "Poulet",
        "Tenders",
        "Viande hachée",
        "Merguez",
        "Cordon bleu",
        "Nuggets",
        "Escalope marinée",
    ]
    .into_iter()
    .map(Meat::new)
    .collect()
}

fn sauce_options() -> Vec<Sauce> {
    [
        "Algerienne",
        "Ketchup",
        "Mayonnaise",
        "Barbecue",
        "Blanche",
        "Biggy",
        "Samouraï",
        "Andalouse",
    ]
    .into_iter()
    .map(Sauce::new)
    .collect()
}

fn builtin_drinks() -> Vec<Drink> {
    [
        "Coca 33cl",
        "Coca Zero 33cl",
        "Fanta 33cl",
        "Orangina 33cl",
        "Eau 50cl",
    ]
    .into_iter()
    .map(Drink::new)
    .collect()
}

fn pizza_sizes() -> Vec<Size> {
    vec![
        Size::new("Senior", Money::ZERO),
        Size::new("Mega", Money::from_units(7)),
    ]
}

fn picture(seed: &str) -> String {
    format!("https://picsum.photos/seed/{seed}/800/500")
}

fn builtin_items() -> Vec<MenuItem> {
    let pizza = |id: &str, name: &str| {
        MenuItemBuilder::new(id, name, Category::Pizzas, Money::from_units(18))
            .image_url(picture(id))
            .sizes(pizza_sizes())
            .build()
    };
    let meat_sauce = |id: &str, name: &str, category: Category, cents: u64, limit: u32| {
        MenuItemBuilder::new(id, name, category, Money::from_cents(cents))
            .image_url(picture(id))
            .meats(meat_options(), limit)
            .sauces(sauce_options(), false)
    };

    vec![
        pizza("pz-marg", "Margherita"),
        pizza("pz-veg", "Végétarienne"),
        pizza("pz-calz", "Calzone"),
        MenuItemBuilder::new(
            "midi-senior",
            "Menu Midi Senior (pizza + boisson)",
            Category::MenusMidi,
            Money::from_units(10),
        )
        .image_url(picture("midi-senior"))
        .build(),
        MenuItemBuilder::new(
            "midi-mega",
            "Menu Midi Mega (pizza + boisson)",
            Category::MenusMidi,
            Money::from_units(15),
        )
        .image_url(picture("midi-mega"))
        .build(),
        meat_sauce("tacos-solo", "Tacos Solo", Category::Tacos, 750, 1).build(),
        meat_sauce("tacos-double", "Tacos Double", Category::Tacos, 900, 2).build(),
        meat_sauce("tacos-triple", "Tacos Triple", Category::Tacos, 1050, 3).build(),
        MenuItemBuilder::new(
            "souffle-solo",
            "Soufflé Solo",
            Category::Souffles,
            Money::from_cents(750),
        )
        .image_url(picture("souffle-solo"))
        .meats(meat_options(), 1)
        .sauces(sauce_options(), true)
        .garnishes(GarnishSet::Souffle.options(), true)
        .build(),
        meat_sauce("makloub", "Makloub", Category::Makloub, 700, 1).build(),
        meat_sauce("mlawi", "Mlawi", Category::Mlawi, 700, 1)
            .garnishes(GarnishSet::Salad.options(), true)
            .build(),
        meat_sauce("panini", "Panini", Category::Panini, 550, 1).build(),
        MenuItemBuilder::new("fries", "Frites", Category::Fries, Money::from_units(3))
            .image_url(picture("fries"))
            .build(),
        MenuItemBuilder::new("drink-coca", "Boisson 33cl", Category::Drinks, Money::from_units(2))
            .image_url(picture("drink"))
            .build(),
    ]
}

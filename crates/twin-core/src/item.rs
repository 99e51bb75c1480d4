//! MenuItem -- one entry of the read-only catalog.

use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::money::Money;
use crate::options::{Combo, Garnish, Meat, Sauce, Size};
use crate::profile::{WizardProfile, derive_profile};

fn default_true() -> bool {
    true
}

fn is_true(b: &bool) -> bool {
    *b
}

fn is_false(b: &bool) -> bool {
    !b
}

/// A sellable item and the options it can be configured with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    #[serde(alias = "category_slug")]
    pub category: Category,
    pub base_price: Money,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    // ===== Options =====
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sizes: Vec<Size>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub meats: Vec<Meat>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meats_limit: Option<u32>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sauces: Vec<Sauce>,

    #[serde(default, skip_serializing_if = "is_false")]
    pub sauces_multi: bool,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub garnishes: Vec<Garnish>,

    #[serde(default, skip_serializing_if = "is_false")]
    pub garnishes_multi: bool,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub combos: Vec<Combo>,

    /// Item is only orderable through the wizard.
    #[serde(default = "default_true", skip_serializing_if = "is_true")]
    pub force_wizard: bool,
}

impl MenuItem {
    /// Wizard profile for this item's category.
    pub fn profile(&self) -> WizardProfile {
        derive_profile(&self.category)
    }

    pub fn has_options(&self) -> bool {
        !self.sizes.is_empty()
            || !self.meats.is_empty()
            || !self.sauces.is_empty()
            || !self.garnishes.is_empty()
            || !self.combos.is_empty()
    }
}

/// Builder for constructing a [`MenuItem`] with a fluent API.
pub struct MenuItemBuilder {
    item: MenuItem,
}

impl MenuItemBuilder {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: Category,
        base_price: Money,
    ) -> Self {
        Self {
            item: MenuItem {
                id: id.into(),
                name: name.into(),
                category,
                base_price,
                image_url: None,
                sizes: Vec::new(),
                meats: Vec::new(),
                meats_limit: None,
                sauces: Vec::new(),
                sauces_multi: false,
                garnishes: Vec::new(),
                garnishes_multi: false,
                combos: Vec::new(),
                force_wizard: true,
            },
        }
    }

    pub fn image_url(mut self, url: impl Into<String>) -> Self {
        self.item.image_url = Some(url.into());
        self
    }

    pub fn sizes(mut self, sizes: Vec<Size>) -> Self {
        self.item.sizes = sizes;
        self
    }

    pub fn meats(mut self, meats: Vec<Meat>, limit: u32) -> Self {
        self.item.meats = meats;
        self.item.meats_limit = Some(limit);
        self
    }

    pub fn sauces(mut self, sauces: Vec<Sauce>, multi: bool) -> Self {
        self.item.sauces = sauces;
        self.item.sauces_multi = multi;
        self
    }

    pub fn garnishes(mut self, garnishes: Vec<Garnish>, multi: bool) -> Self {
        self.item.garnishes = garnishes;
        self.item.garnishes_multi = multi;
        self
    }

    pub fn combos(mut self, combos: Vec<Combo>) -> Self {
        self.item.combos = combos;
        self
    }

    pub fn build(self) -> MenuItem {
        self.item
    }
}

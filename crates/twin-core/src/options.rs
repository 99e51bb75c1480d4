//! Configurable option values (sizes, meats, sauces, garnishes, combos,
//! drinks) and the label-keyed set used for multi-select steps.
//!
//! Two options are the same option when their labels match; prices and
//! other fields do not take part in equality.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

use crate::money::Money;

/// An option identified by its label.
pub trait Labelled {
    fn label(&self) -> &str;
}

// ---------------------------------------------------------------------------
// Macro: label accessor plus label-based equality and hashing.
// ---------------------------------------------------------------------------
macro_rules! label_identity {
    ($($name:ident),+ $(,)?) => {
        $(
            impl Labelled for $name {
                fn label(&self) -> &str {
                    &self.label
                }
            }

            impl PartialEq for $name {
                fn eq(&self, other: &Self) -> bool {
                    self.label == other.label
                }
            }

            impl Eq for $name {}

            impl Hash for $name {
                fn hash<H: Hasher>(&self, state: &mut H) {
                    self.label.hash(state);
                }
            }
        )+
    };
}

/// A size variant and what it adds to the base price.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Size {
    pub label: String,
    #[serde(default)]
    pub price_delta: Money,
    /// Size-specific meat allowance, carried as catalog data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meats_limit: Option<u32>,
}

/// A meat choice; unpriced meats are included in the base price.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meat {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Money>,
}

/// A sauce. Sauces never change the price.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sauce {
    pub label: String,
}

/// A garnish choice.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Garnish {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Money>,
}

/// A combo upgrade with a fixed price.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Combo {
    pub label: String,
    pub price: Money,
}

/// A drink offered with lunch menus.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Drink {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Money>,
}

label_identity!(Size, Meat, Sauce, Garnish, Combo, Drink);

impl Size {
    pub fn new(label: impl Into<String>, price_delta: Money) -> Self {
        Self {
            label: label.into(),
            price_delta,
            meats_limit: None,
        }
    }
}

impl Meat {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            price: None,
        }
    }

    pub fn priced(label: impl Into<String>, price: Money) -> Self {
        Self {
            label: label.into(),
            price: Some(price),
        }
    }
}

impl Sauce {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

impl Garnish {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            price: None,
        }
    }

    pub fn priced(label: impl Into<String>, price: Money) -> Self {
        Self {
            label: label.into(),
            price: Some(price),
        }
    }
}

impl Combo {
    pub fn new(label: impl Into<String>, price: Money) -> Self {
        Self {
            label: label.into(),
            price,
        }
    }
}

impl Drink {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            price: None,
        }
    }
}

/// Finds an option by label in a list.
pub fn find_by_label<'a, T: Labelled>(options: &'a [T], label: &str) -> Option<&'a T> {
    options.iter().find(|o| o.label() == label)
}

// ---------------------------------------------------------------------------
// LabelSet
// ---------------------------------------------------------------------------

/// An insertion-ordered set of options keyed by label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelSet<T> {
    entries: IndexMap<String, T>,
}

impl<T> Default for LabelSet<T> {
    fn default() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }
}

impl<T: Labelled + Clone> LabelSet<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the option if absent, removes it if present.
    ///
    /// Returns `true` when the option is a member afterwards.
    pub fn toggle(&mut self, option: T) -> bool {
        let key = option.label().to_owned();
        if self.entries.shift_remove(&key).is_some() {
            false
        } else {
            self.entries.insert(key, option);
            true
        }
    }

    /// Inserts without toggling. Returns `false` if the label was already present.
    pub fn insert(&mut self, option: T) -> bool {
        let key = option.label().to_owned();
        if self.entries.contains_key(&key) {
            return false;
        }
        self.entries.insert(key, option);
        true
    }

    pub fn remove(&mut self, label: &str) -> Option<T> {
        self.entries.shift_remove(label)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.entries.contains_key(label)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.values()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Members in selection order.
    pub fn to_vec(&self) -> Vec<T> {
        self.entries.values().cloned().collect()
    }
}

impl<T: Labelled + Clone> FromIterator<T> for LabelSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        for option in iter {
            set.insert(option);
        }
        set
    }
}

//! Menu categories.
//!
//! A category is serialized as its slug. Unknown slugs are kept in
//! [`Category::Other`] rather than rejected, so a catalog can carry
//! categories this crate has no wizard profile for.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// The category a menu item is listed under.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Category {
    MenusMidi,
    Pizzas,
    Tacos,
    Souffles,
    Makloub,
    Mlawi,
    Panini,
    Croques,
    TexMex,
    Fries,
    Drinks,
    /// Catch-all for slugs outside the fixed enumeration.
    Other(String),
}

impl Category {
    /// Category tabs in display order.
    pub const TABS: [Category; 11] = [
        Category::MenusMidi,
        Category::Pizzas,
        Category::Tacos,
        Category::Souffles,
        Category::Makloub,
        Category::Mlawi,
        Category::Panini,
        Category::Croques,
        Category::TexMex,
        Category::Fries,
        Category::Drinks,
    ];

    /// Returns the slug.
    pub fn as_str(&self) -> &str {
        match self {
            Self::MenusMidi => "menus-midi",
            Self::Pizzas => "pizzas",
            Self::Tacos => "tacos",
            Self::Souffles => "souffles",
            Self::Makloub => "makloub",
            Self::Mlawi => "mlawi",
            Self::Panini => "panini",
            Self::Croques => "croques",
            Self::TexMex => "tex-mex",
            Self::Fries => "fries",
            Self::Drinks => "drinks",
            Self::Other(s) => s.as_str(),
        }
    }

    /// Human-readable tab name.
    pub fn display_name(&self) -> &str {
        match self {
            Self::MenusMidi => "Menus midi",
            Self::Pizzas => "Pizzas",
            Self::Tacos => "Tacos",
            Self::Souffles => "Soufflés",
            Self::Makloub => "Makloub",
            Self::Mlawi => "Mlawi",
            Self::Panini => "Panini",
            Self::Croques => "Croques",
            Self::TexMex => "Tex-mex",
            Self::Fries => "Frites",
            Self::Drinks => "Boissons",
            Self::Other(s) => s.as_str(),
        }
    }

    /// Returns `true` for the fixed (non-catch-all) categories.
    pub fn is_builtin(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from(s))
    }
}

impl From<&str> for Category {
    fn from(s: &str) -> Self {
        match s {
            "menus-midi" => Self::MenusMidi,
            "pizzas" => Self::Pizzas,
            "tacos" => Self::Tacos,
            "souffles" => Self::Souffles,
            "makloub" => Self::Makloub,
            "mlawi" => Self::Mlawi,
            "panini" => Self::Panini,
            "croques" => Self::Croques,
            "tex-mex" => Self::TexMex,
            "fries" => Self::Fries,
            "drinks" => Self::Drinks,
            other => Self::Other(other.to_owned()),
        }
    }
}

impl From<String> for Category {
    fn from(s: String) -> Self {
        match Self::from(s.as_str()) {
            Self::Other(_) => Self::Other(s),
            known => known,
        }
    }
}

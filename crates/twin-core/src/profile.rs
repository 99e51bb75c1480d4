//! Wizard profiles: the fixed step sequence each category goes through.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::category::Category;
use crate::options::Garnish;

/// One configuration step of the order wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StepKind {
    PizzaChoice,
    Drink,
    Meat,
    Sauce,
    Garnish,
    Quantity,
}

impl StepKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PizzaChoice => "pizza-choice",
            Self::Drink => "drink",
            Self::Meat => "meat",
            Self::Sauce => "sauce",
            Self::Garnish => "garnish",
            Self::Quantity => "quantity",
        }
    }

    /// Heading shown above the step's options.
    pub fn title(&self) -> &'static str {
        match self {
            Self::PizzaChoice => "Choix de la pizza",
            Self::Drink => "Boisson",
            Self::Meat => "Viande(s)",
            Self::Sauce => "Sauce(s)",
            Self::Garnish => "Garnitures",
            Self::Quantity => "Quantité",
        }
    }
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category-specific garnish subsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GarnishSet {
    /// Pommes de terre, Oignons, Olives.
    Souffle,
    /// Salade, Tomate, Oignons, Olives.
    Salad,
}

impl GarnishSet {
    const SOUFFLE_LABELS: [&'static str; 3] = ["Pommes de terre", "Oignons", "Olives"];
    const SALAD_LABELS: [&'static str; 4] = ["Salade", "Tomate", "Oignons", "Olives"];

    pub fn labels(&self) -> &'static [&'static str] {
        match self {
            Self::Souffle => &Self::SOUFFLE_LABELS,
            Self::Salad => &Self::SALAD_LABELS,
        }
    }

    /// The garnishes offered by this set (all free).
    pub fn options(&self) -> Vec<Garnish> {
        self.labels().iter().map(|l| Garnish::new(*l)).collect()
    }
}

const STEPS_MENU: &[StepKind] = &[StepKind::PizzaChoice, StepKind::Drink, StepKind::Quantity];
const STEPS_MEAT_SAUCE: &[StepKind] = &[StepKind::Meat, StepKind::Sauce, StepKind::Quantity];
const STEPS_MEAT_SAUCE_GARNISH: &[StepKind] = &[
    StepKind::Meat,
    StepKind::Sauce,
    StepKind::Garnish,
    StepKind::Quantity,
];
const STEPS_QUANTITY: &[StepKind] = &[StepKind::Quantity];

/// Step sequence and option rules for one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WizardProfile {
    pub steps: &'static [StepKind],
    pub sauce_multi: bool,
    pub garnish_multi: bool,
    pub garnish_set: Option<GarnishSet>,
}

impl WizardProfile {
    const fn new(steps: &'static [StepKind]) -> Self {
        Self {
            steps,
            sauce_multi: false,
            garnish_multi: false,
            garnish_set: None,
        }
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn has_step(&self, step: StepKind) -> bool {
        self.steps.contains(&step)
    }

    pub fn step(&self, index: usize) -> Option<StepKind> {
        self.steps.get(index).copied()
    }
}

/// Derives the wizard profile for a category.
///
/// Total over all categories: anything without a dedicated flow gets a
/// single quantity step.
pub fn derive_profile(category: &Category) -> WizardProfile {
    match category {
        Category::MenusMidi => WizardProfile::new(STEPS_MENU),
        Category::Tacos | Category::Makloub | Category::Panini => {
            WizardProfile::new(STEPS_MEAT_SAUCE)
        }
        Category::Souffles => WizardProfile {
            sauce_multi: true,
            garnish_multi: true,
            garnish_set: Some(GarnishSet::Souffle),
            ..WizardProfile::new(STEPS_MEAT_SAUCE_GARNISH)
        },
        Category::Mlawi => WizardProfile {
            garnish_multi: true,
            garnish_set: Some(GarnishSet::Salad),
            ..WizardProfile::new(STEPS_MEAT_SAUCE_GARNISH)
        },
        _ => WizardProfile::new(STEPS_QUANTITY),
    }
}

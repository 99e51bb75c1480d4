//! The order wizard: a per-item session that collects selections step by
//! step and emits one priced [`CartLine`].
//!
//! Transitions consume the session. [`WizardSession::advance`] and
//! [`WizardSession::retreat`] hand back a [`Flow`]: either the session
//! (moved, or blocked in place) or its terminal outcome. A confirmed or
//! cancelled session no longer exists.

use tracing::debug;

use crate::cart::{CartLine, CartLineBuilder};
use crate::catalog::Catalog;
use crate::idgen::{LineIdGenerator, SequentialIds};
use crate::item::MenuItem;
use crate::money::Money;
use crate::options::{Drink, Garnish, LabelSet, Meat, Sauce, find_by_label};
use crate::profile::{StepKind, WizardProfile};

/// Sauce selection, fixed per item by its profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SauceSelection {
    /// Exactly one sauce is required; choosing another replaces it.
    Single(Option<Sauce>),
    /// At least one sauce is required; choices toggle.
    Multi(LabelSet<Sauce>),
}

impl SauceSelection {
    fn for_profile(profile: &WizardProfile) -> Self {
        if profile.sauce_multi {
            Self::Multi(LabelSet::new())
        } else {
            Self::Single(None)
        }
    }

    pub fn contains(&self, label: &str) -> bool {
        match self {
            Self::Single(current) => current.as_ref().is_some_and(|s| s.label == label),
            Self::Multi(set) => set.contains(label),
        }
    }

    pub fn is_satisfied(&self) -> bool {
        match self {
            Self::Single(current) => current.is_some(),
            Self::Multi(set) => !set.is_empty(),
        }
    }

    pub fn to_vec(&self) -> Vec<Sauce> {
        match self {
            Self::Single(current) => current.iter().cloned().collect(),
            Self::Multi(set) => set.to_vec(),
        }
    }
}

/// Result of a transition.
#[derive(Debug)]
pub enum Flow<'a> {
    /// The session is still open (it moved, or the move was blocked).
    Open(WizardSession<'a>),
    /// The last step was confirmed; the line is ready for the cart.
    Confirmed(CartLine),
    /// The session was abandoned; nothing goes to the cart.
    Cancelled,
}

impl<'a> Flow<'a> {
    pub fn into_session(self) -> Option<WizardSession<'a>> {
        match self {
            Self::Open(session) => Some(session),
            _ => None,
        }
    }

    pub fn into_line(self) -> Option<CartLine> {
        match self {
            Self::Confirmed(line) => Some(line),
            _ => None,
        }
    }
}

/// One open wizard for one menu item.
#[derive(Debug, Clone)]
pub struct WizardSession<'a> {
    catalog: &'a Catalog,
    item: &'a MenuItem,
    profile: WizardProfile,
    step: usize,
    pizza: Option<&'a MenuItem>,
    drink: Option<String>,
    meats: LabelSet<Meat>,
    sauces: SauceSelection,
    garnishes: LabelSet<Garnish>,
    quantity: u32,
}

impl<'a> WizardSession<'a> {
    /// Opens a wizard on the first step with nothing selected.
    pub fn open(catalog: &'a Catalog, item: &'a MenuItem) -> Self {
        let profile = item.profile();
        debug!(item = %item.id, steps = profile.len(), "wizard: open");
        Self {
            catalog,
            item,
            profile,
            step: 0,
            pizza: None,
            drink: None,
            meats: LabelSet::new(),
            sauces: SauceSelection::for_profile(&profile),
            garnishes: LabelSet::new(),
            quantity: 1,
        }
    }

    // ===== Position =====

    pub fn item(&self) -> &'a MenuItem {
        self.item
    }

    pub fn profile(&self) -> &WizardProfile {
        &self.profile
    }

    pub fn step_index(&self) -> usize {
        self.step
    }

    pub fn step_count(&self) -> usize {
        self.profile.len()
    }

    pub fn current_step(&self) -> StepKind {
        self.profile.step(self.step).unwrap_or(StepKind::Quantity)
    }

    pub fn is_first_step(&self) -> bool {
        self.step == 0
    }

    pub fn is_last_step(&self) -> bool {
        self.step + 1 >= self.profile.len()
    }

    /// Human progress, e.g. `2/4`.
    pub fn progress(&self) -> String {
        format!("{}/{}", self.step + 1, self.step_count())
    }

    // ===== Validation =====

    /// Whether `step` lets the user move forward.
    pub fn step_is_valid(&self, step: StepKind) -> bool {
        match step {
            StepKind::PizzaChoice => self.pizza.is_some(),
            StepKind::Drink => self.drink.is_some(),
            StepKind::Meat => match self.item.meats_limit {
                Some(limit) => (1..=limit as usize).contains(&self.meats.len()),
                None => false,
            },
            StepKind::Sauce => self.sauces.is_satisfied(),
            StepKind::Garnish | StepKind::Quantity => true,
        }
    }

    pub fn can_advance(&self) -> bool {
        self.step_is_valid(self.current_step())
    }

    // ===== Offered options =====

    pub fn pizza_options(&self) -> Vec<&'a MenuItem> {
        if self.profile.has_step(StepKind::PizzaChoice) {
            self.catalog.pizzas()
        } else {
            Vec::new()
        }
    }

    pub fn drink_options(&self) -> &'a [Drink] {
        if self.profile.has_step(StepKind::Drink) {
            self.catalog.drinks()
        } else {
            &[]
        }
    }

    pub fn meat_options(&self) -> &'a [Meat] {
        &self.item.meats
    }

    pub fn meat_limit(&self) -> Option<u32> {
        self.item.meats_limit
    }

    pub fn sauce_options(&self) -> &'a [Sauce] {
        &self.item.sauces
    }

    pub fn sauce_multi(&self) -> bool {
        self.profile.sauce_multi
    }

    /// Garnishes offered on the garnish step: the item's own list when the
    /// catalog declares one (its prices apply), otherwise the profile's set.
    pub fn garnish_options(&self) -> Vec<Garnish> {
        let Some(set) = self.profile.garnish_set else {
            return Vec::new();
        };
        if self.item.garnishes.is_empty() {
            set.options()
        } else {
            self.item.garnishes.clone()
        }
    }

    // ===== Current selections =====

    pub fn chosen_pizza(&self) -> Option<&'a MenuItem> {
        self.pizza
    }

    pub fn chosen_drink(&self) -> Option<&str> {
        self.drink.as_deref()
    }

    pub fn is_meat_selected(&self, label: &str) -> bool {
        self.meats.contains(label)
    }

    pub fn selected_meats(&self) -> Vec<&str> {
        self.meats.labels().collect()
    }

    pub fn is_sauce_selected(&self, label: &str) -> bool {
        self.sauces.contains(label)
    }

    pub fn sauce_selection(&self) -> &SauceSelection {
        &self.sauces
    }

    pub fn is_garnish_selected(&self, label: &str) -> bool {
        self.garnishes.contains(label)
    }

    pub fn selected_garnishes(&self) -> Vec<&str> {
        self.garnishes.labels().collect()
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    // ===== Selection =====
    //
    // Each returns `true` if the selection changed. Labels the item or
    // profile does not offer are ignored.

    pub fn choose_pizza(&mut self, pizza_id: &str) -> bool {
        let Some(pizza) = self.pizza_options().into_iter().find(|p| p.id == pizza_id) else {
            return false;
        };
        if self.pizza.is_some_and(|p| p.id == pizza.id) {
            return false;
        }
        self.pizza = Some(pizza);
        true
    }

    pub fn choose_drink(&mut self, label: &str) -> bool {
        let Some(drink) = find_by_label(self.drink_options(), label) else {
            return false;
        };
        if self.drink.as_deref() == Some(drink.label.as_str()) {
            return false;
        }
        self.drink = Some(drink.label.clone());
        true
    }

    /// Toggles a meat. Adding beyond the item's meat limit is ignored.
    pub fn toggle_meat(&mut self, label: &str) -> bool {
        let Some(meat) = find_by_label(&self.item.meats, label) else {
            return false;
        };
        if self.meats.contains(label) {
            self.meats.remove(label);
            return true;
        }
        let limit = self.item.meats_limit.unwrap_or(0) as usize;
        if self.meats.len() >= limit {
            debug!(item = %self.item.id, %label, limit, "wizard: meat limit reached");
            return false;
        }
        self.meats.insert(meat.clone())
    }

    /// Selects a sauce: replaces in single mode, toggles in multi mode.
    pub fn select_sauce(&mut self, label: &str) -> bool {
        let Some(sauce) = find_by_label(&self.item.sauces, label) else {
            return false;
        };
        match &mut self.sauces {
            SauceSelection::Single(current) => {
                if current.as_ref().is_some_and(|s| s.label == label) {
                    return false;
                }
                *current = Some(sauce.clone());
                true
            }
            SauceSelection::Multi(set) => {
                set.toggle(sauce.clone());
                true
            }
        }
    }

    /// Toggles an offered garnish. When the profile allows one garnish,
    /// picking another replaces it.
    pub fn toggle_garnish(&mut self, label: &str) -> bool {
        let options = self.garnish_options();
        let Some(garnish) = find_by_label(&options, label) else {
            return false;
        };
        if !self.profile.garnish_multi && !self.garnishes.contains(label) {
            self.garnishes.clear();
        }
        self.garnishes.toggle(garnish.clone());
        true
    }

    /// Sets the quantity, clamped to at least 1.
    pub fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity.max(1);
    }

    pub fn increment_quantity(&mut self) {
        self.quantity = self.quantity.saturating_add(1);
    }

    pub fn decrement_quantity(&mut self) {
        self.quantity = self.quantity.saturating_sub(1).max(1);
    }

    // ===== Pricing =====

    fn line_builder(&self) -> CartLineBuilder {
        CartLine::builder(self.item)
            .quantity(self.quantity)
            .meats(self.meats.to_vec())
            .sauces(self.sauces.to_vec())
            .garnishes(self.garnishes.to_vec())
            .drink(self.drink.clone())
            .pizza(self.pizza.map(|p| p.id.clone()))
    }

    /// Price of the line as currently configured.
    pub fn preview_price(&self) -> Money {
        self.line_builder()
            .build(&mut SequentialIds::new("preview"))
            .price()
    }

    // ===== Transitions =====

    /// Moves forward if the current step is valid. On the last step this
    /// confirms instead.
    pub fn advance(mut self, ids: &mut dyn LineIdGenerator) -> Flow<'a> {
        if !self.can_advance() {
            debug!(item = %self.item.id, step = %self.current_step(), "wizard: advance blocked");
            return Flow::Open(self);
        }
        if self.is_last_step() {
            return self.finish(ids);
        }
        self.step += 1;
        debug!(item = %self.item.id, step = %self.current_step(), "wizard: advance");
        Flow::Open(self)
    }

    /// Moves back one step; on the first step this cancels.
    pub fn retreat(mut self) -> Flow<'a> {
        if self.is_first_step() {
            self.cancel();
            return Flow::Cancelled;
        }
        self.step -= 1;
        debug!(item = %self.item.id, step = %self.current_step(), "wizard: retreat");
        Flow::Open(self)
    }

    /// Confirms the session. Only possible from a valid last step; anything
    /// else leaves the session open where it is.
    pub fn confirm(self, ids: &mut dyn LineIdGenerator) -> Flow<'a> {
        if !self.is_last_step() || !self.can_advance() {
            debug!(item = %self.item.id, step = %self.current_step(), "wizard: confirm blocked");
            return Flow::Open(self);
        }
        self.finish(ids)
    }

    /// Abandons the session.
    pub fn cancel(self) {
        debug!(item = %self.item.id, step = self.step, "wizard: cancel");
    }

    fn finish(self, ids: &mut dyn LineIdGenerator) -> Flow<'a> {
        let line = self.line_builder().build(ids);
        debug!(item = %self.item.id, line = %line.id(), price = %line.price(), "wizard: confirm");
        Flow::Confirmed(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::Cart;
    use crate::category::Category;
    use crate::item::MenuItemBuilder;
    use pretty_assertions::assert_eq;

    fn advance<'a>(session: WizardSession<'a>, ids: &mut SequentialIds) -> WizardSession<'a> {
        session
            .advance(ids)
            .into_session()
            .expect("session should stay open")
    }

    #[test]
    fn opens_on_first_step_with_defaults() {
        let catalog = Catalog::builtin();
        let item = catalog.get("mlawi").unwrap();
        let session = WizardSession::open(&catalog, item);

        assert_eq!(session.step_index(), 0);
        assert_eq!(session.current_step(), StepKind::Meat);
        assert_eq!(session.quantity(), 1);
        assert!(session.selected_meats().is_empty());
        assert_eq!(session.sauce_selection(), &SauceSelection::Single(None));
        assert_eq!(session.progress(), "1/4");
    }

    #[test]
    fn tacos_round_trip() {
        let catalog = Catalog::builtin();
        let item = catalog.get("tacos-solo").unwrap();
        let mut ids = SequentialIds::default();

        let mut session = WizardSession::open(&catalog, item);
        assert!(session.toggle_meat("Poulet"));
        let mut session = advance(session, &mut ids);
        assert_eq!(session.current_step(), StepKind::Sauce);
        assert!(session.select_sauce("Algerienne"));
        let mut session = advance(session, &mut ids);
        assert_eq!(session.current_step(), StepKind::Quantity);
        session.set_quantity(2);

        let line = session
            .advance(&mut ids)
            .into_line()
            .expect("last step confirms");

        assert_eq!(line.price(), item.base_price.times(2));
        assert_eq!(line.price(), Money::from_units(15));
        assert_eq!(line.quantity(), 2);
        assert!(line.size().is_none());
        assert!(line.garnishes().is_empty());
        assert!(line.drink().is_none());
        assert!(line.combo().is_none());
        assert_eq!(line.meats()[0].label, "Poulet");
        assert_eq!(line.sauces()[0].label, "Algerienne");
    }

    #[test]
    fn souffle_scenario() {
        let catalog = Catalog::builtin();
        let item = catalog.get("souffle-solo").unwrap();
        let mut ids = SequentialIds::default();

        let mut session = WizardSession::open(&catalog, item);
        assert!(session.sauce_multi());
        session.toggle_meat("Tenders");
        let mut session = advance(session, &mut ids);
        session.select_sauce("Mayonnaise");
        session.select_sauce("Ketchup");
        assert!(session.is_sauce_selected("Mayonnaise"));
        assert!(session.is_sauce_selected("Ketchup"));
        let mut session = advance(session, &mut ids);
        assert_eq!(session.current_step(), StepKind::Garnish);
        assert!(session.toggle_garnish("Oignons"));
        let session = advance(session, &mut ids);

        let line = session.confirm(&mut ids).into_line().unwrap();
        assert_eq!(line.price(), Money::from_cents(750));
        assert_eq!(line.sauces().len(), 2);
        assert_eq!(line.garnishes()[0].label, "Oignons");
    }

    #[test]
    fn menu_midi_requires_pizza_before_drink() {
        let catalog = Catalog::builtin();
        let item = catalog.get("midi-senior").unwrap();
        let mut ids = SequentialIds::default();

        let session = WizardSession::open(&catalog, item);
        assert!(!session.can_advance());
        let mut session = advance(session, &mut ids);
        assert_eq!(session.step_index(), 0);
        assert_eq!(session.current_step(), StepKind::PizzaChoice);

        assert!(session.choose_pizza("pz-calz"));
        let mut session = advance(session, &mut ids);
        assert_eq!(session.current_step(), StepKind::Drink);
        assert!(!session.can_advance());
        assert!(!session.choose_drink("Biere"));
        assert!(session.choose_drink("Eau 50cl"));
        let session = advance(session, &mut ids);

        let line = session.advance(&mut ids).into_line().unwrap();
        assert_eq!(line.pizza(), Some("pz-calz"));
        assert_eq!(line.drink(), Some("Eau 50cl"));
        assert_eq!(line.price(), Money::from_units(10));
    }

    #[test]
    fn pizza_choice_only_offers_pizzas() {
        let catalog = Catalog::builtin();
        let item = catalog.get("midi-mega").unwrap();
        let mut session = WizardSession::open(&catalog, item);
        assert!(!session.choose_pizza("tacos-solo"));
        assert!(session.chosen_pizza().is_none());
        assert_eq!(session.pizza_options().len(), 3);
    }

    #[test]
    fn cancel_from_first_step_leaves_cart_unchanged() {
        let catalog = Catalog::builtin();
        let mut ids = SequentialIds::default();
        let mut cart = Cart::new();
        cart.add_line(CartLine::builder(catalog.get("fries").unwrap()).build(&mut ids));
        let before = cart.lines().to_vec();

        for item in catalog.items() {
            let session = WizardSession::open(&catalog, item);
            match session.retreat() {
                Flow::Cancelled => {}
                other => panic!("expected Cancelled for {}, got {:?}", item.id, other),
            }
        }

        assert_eq!(cart.len(), before.len());
        assert_eq!(cart.lines(), before.as_slice());
    }

    #[test]
    fn retreat_moves_back_and_keeps_selections() {
        let catalog = Catalog::builtin();
        let item = catalog.get("panini").unwrap();
        let mut ids = SequentialIds::default();

        let mut session = WizardSession::open(&catalog, item);
        session.toggle_meat("Merguez");
        let session = advance(session, &mut ids);
        let session = session.retreat().into_session().unwrap();

        assert_eq!(session.step_index(), 0);
        assert!(session.is_meat_selected("Merguez"));
    }

    #[test]
    fn meat_limit_is_a_soft_cap() {
        let catalog = Catalog::builtin();
        let item = catalog.get("tacos-double").unwrap();
        let mut session = WizardSession::open(&catalog, item);

        assert!(session.toggle_meat("Poulet"));
        assert!(session.toggle_meat("Merguez"));
        assert!(!session.toggle_meat("Nuggets"));
        assert_eq!(session.selected_meats(), vec!["Poulet", "Merguez"]);
        assert!(session.can_advance());

        // Removing still works at the cap.
        assert!(session.toggle_meat("Poulet"));
        assert_eq!(session.selected_meats(), vec!["Merguez"]);
    }

    #[test]
    fn meat_selection_never_exceeds_limit() {
        let catalog = Catalog::builtin();
        for id in ["tacos-solo", "tacos-double", "tacos-triple", "mlawi"] {
            let item = catalog.get(id).unwrap();
            let limit = item.meats_limit.unwrap() as usize;
            let mut session = WizardSession::open(&catalog, item);
            // Every meat toggled on, then a sweep toggling every other one.
            for round in 0..3 {
                for (i, meat) in item.meats.iter().enumerate() {
                    if round != 1 || i % 2 == 0 {
                        session.toggle_meat(&meat.label);
                    }
                    assert!(session.selected_meats().len() <= limit, "{id}");
                }
            }
        }
    }

    #[test]
    fn toggling_meat_twice_restores_selection() {
        let catalog = Catalog::builtin();
        let item = catalog.get("tacos-triple").unwrap();
        let mut session = WizardSession::open(&catalog, item);
        session.toggle_meat("Poulet");
        let before = session.selected_meats().join(",");

        session.toggle_meat("Cordon bleu");
        session.toggle_meat("Cordon bleu");

        assert_eq!(session.selected_meats().join(","), before);
    }

    #[test]
    fn meat_step_blocked_without_selection() {
        let catalog = Catalog::builtin();
        let item = catalog.get("makloub").unwrap();
        let mut ids = SequentialIds::default();
        let session = WizardSession::open(&catalog, item);
        let session = advance(session, &mut ids);
        assert_eq!(session.step_index(), 0);
    }

    #[test]
    fn single_sauce_replaces_previous_choice() {
        let catalog = Catalog::builtin();
        let item = catalog.get("tacos-solo").unwrap();
        let mut session = WizardSession::open(&catalog, item);

        assert!(session.select_sauce("Blanche"));
        assert!(session.select_sauce("Biggy"));
        assert!(!session.select_sauce("Biggy"));
        assert!(!session.select_sauce("Moutarde"));
        assert_eq!(
            session.sauce_selection(),
            &SauceSelection::Single(Some(Sauce::new("Biggy")))
        );
    }

    #[test]
    fn multi_sauce_toggles_and_requires_one() {
        let catalog = Catalog::builtin();
        let item = catalog.get("souffle-solo").unwrap();
        let mut ids = SequentialIds::default();

        let mut session = WizardSession::open(&catalog, item);
        session.toggle_meat("Poulet");
        let mut session = advance(session, &mut ids);
        session.select_sauce("Biggy");
        session.select_sauce("Biggy");
        assert!(!session.can_advance());
        let session = advance(session, &mut ids);
        assert_eq!(session.current_step(), StepKind::Sauce);
    }

    #[test]
    fn garnish_step_is_optional_and_uses_profile_set() {
        let catalog = Catalog::builtin();
        let item = catalog.get("mlawi").unwrap();
        let mut session = WizardSession::open(&catalog, item);

        let labels: Vec<String> = session.garnish_options().into_iter().map(|g| g.label).collect();
        assert_eq!(labels, vec!["Salade", "Tomate", "Oignons", "Olives"]);
        assert!(!session.toggle_garnish("Pommes de terre"));
        assert!(session.toggle_garnish("Tomate"));
        assert!(session.toggle_garnish("Salade"));
        assert_eq!(session.selected_garnishes(), vec!["Tomate", "Salade"]);
        assert!(session.step_is_valid(StepKind::Garnish));
    }

    #[test]
    fn item_garnish_list_overrides_set_and_is_priced() {
        let mlawi = MenuItemBuilder::new("mlawi-royal", "Mlawi Royal", Category::Mlawi, Money::from_units(8))
            .meats(vec![Meat::new("Poulet")], 1)
            .sauces(vec![Sauce::new("Blanche")], false)
            .garnishes(
                vec![Garnish::new("Salade"), Garnish::priced("Fromage", Money::from_cents(100))],
                true,
            )
            .build();
        let catalog = Catalog::new(vec![mlawi], Vec::new()).unwrap();
        let item = catalog.get("mlawi-royal").unwrap();
        let mut ids = SequentialIds::default();

        let mut session = WizardSession::open(&catalog, item);
        session.toggle_meat("Poulet");
        let mut session = advance(session, &mut ids);
        session.select_sauce("Blanche");
        let mut session = advance(session, &mut ids);
        assert_eq!(session.current_step(), StepKind::Garnish);

        let labels: Vec<String> = session.garnish_options().into_iter().map(|g| g.label).collect();
        assert_eq!(labels, vec!["Salade", "Fromage"]);
        assert!(!session.toggle_garnish("Tomate"));
        assert!(session.toggle_garnish("Fromage"));
        assert_eq!(session.preview_price(), Money::from_units(9));

        let session = advance(session, &mut ids);
        let line = session.advance(&mut ids).into_line().unwrap();
        assert_eq!(line.garnishes()[0].label, "Fromage");
        assert_eq!(line.price(), Money::from_units(9));
    }

    #[test]
    fn garnish_without_list_offers_nothing_outside_garnish_profiles() {
        let catalog = Catalog::builtin();
        let session = WizardSession::open(&catalog, catalog.get("tacos-solo").unwrap());
        assert!(session.garnish_options().is_empty());
    }

    #[test]
    fn single_garnish_profile_replaces_choice() {
        let catalog = Catalog::builtin();
        let item = catalog.get("mlawi").unwrap();
        let mut session = WizardSession::open(&catalog, item);
        session.profile.garnish_multi = false;

        assert!(session.toggle_garnish("Tomate"));
        assert!(session.toggle_garnish("Salade"));
        assert_eq!(session.selected_garnishes(), vec!["Salade"]);

        // Picking the current garnish again deselects it.
        assert!(session.toggle_garnish("Salade"));
        assert!(session.selected_garnishes().is_empty());
    }

    #[test]
    fn quantity_is_clamped_to_one() {
        let catalog = Catalog::builtin();
        let item = catalog.get("fries").unwrap();
        let mut session = WizardSession::open(&catalog, item);

        session.decrement_quantity();
        assert_eq!(session.quantity(), 1);
        session.set_quantity(0);
        assert_eq!(session.quantity(), 1);
        session.increment_quantity();
        session.increment_quantity();
        assert_eq!(session.quantity(), 3);
        assert_eq!(session.preview_price(), Money::from_units(9));
    }

    #[test]
    fn quantity_only_item_confirms_on_first_advance() {
        let catalog = Catalog::builtin();
        let item = catalog.get("drink-coca").unwrap();
        let mut ids = SequentialIds::new("t");
        let session = WizardSession::open(&catalog, item);
        assert!(session.is_first_step() && session.is_last_step());

        let line = session.advance(&mut ids).into_line().unwrap();
        assert_eq!(line.id(), "t-1");
        assert_eq!(line.price(), Money::from_units(2));
    }

    #[test]
    fn confirm_before_last_step_stays_open() {
        let catalog = Catalog::builtin();
        let item = catalog.get("tacos-solo").unwrap();
        let mut ids = SequentialIds::default();
        let mut session = WizardSession::open(&catalog, item);
        session.toggle_meat("Poulet");

        let session = session.confirm(&mut ids).into_session().unwrap();
        assert_eq!(session.step_index(), 0);
    }

    #[test]
    fn unknown_category_gets_quantity_only() {
        let item = MenuItemBuilder::new(
            "tiramisu",
            "Tiramisu",
            Category::Other("desserts".into()),
            Money::from_cents(450),
        )
        .build();
        let catalog = Catalog::new(vec![item], vec![]).unwrap();
        let item = catalog.get("tiramisu").unwrap();
        let mut ids = SequentialIds::default();

        let mut session = WizardSession::open(&catalog, item);
        assert_eq!(session.current_step(), StepKind::Quantity);
        session.set_quantity(2);
        let line = session.advance(&mut ids).into_line().unwrap();
        assert_eq!(line.price(), Money::from_units(9));
    }
}

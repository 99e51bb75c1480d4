//! Cart lines, line pricing and the cart itself.

use serde::Serialize;
use tracing::debug;

use crate::idgen::LineIdGenerator;
use crate::item::MenuItem;
use crate::money::Money;
use crate::options::{Combo, Garnish, Meat, Sauce, Size};

/// One configured, priced item in the cart. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartLine {
    id: String,
    item: MenuItem,
    quantity: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    size: Option<Size>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    meats: Vec<Meat>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    sauces: Vec<Sauce>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    garnishes: Vec<Garnish>,
    #[serde(skip_serializing_if = "Option::is_none")]
    drink: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    combo: Option<Combo>,
    /// Pizza chosen for a lunch menu (item id).
    #[serde(skip_serializing_if = "Option::is_none")]
    pizza: Option<String>,
}

impl CartLine {
    pub fn builder(item: &MenuItem) -> CartLineBuilder {
        CartLineBuilder::new(item)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn item(&self) -> &MenuItem {
        &self.item
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn size(&self) -> Option<&Size> {
        self.size.as_ref()
    }

    pub fn meats(&self) -> &[Meat] {
        &self.meats
    }

    pub fn sauces(&self) -> &[Sauce] {
        &self.sauces
    }

    pub fn garnishes(&self) -> &[Garnish] {
        &self.garnishes
    }

    pub fn drink(&self) -> Option<&str> {
        self.drink.as_deref()
    }

    pub fn combo(&self) -> Option<&Combo> {
        self.combo.as_ref()
    }

    pub fn pizza(&self) -> Option<&str> {
        self.pizza.as_deref()
    }

    /// Price of a single unit (before quantity).
    pub fn unit_price(&self) -> Money {
        let size_delta = self.size.as_ref().map_or(Money::ZERO, |s| s.price_delta);
        let meats: Money = self.meats.iter().filter_map(|m| m.price).sum();
        let garnishes: Money = self.garnishes.iter().filter_map(|g| g.price).sum();
        let combo = self.combo.as_ref().map_or(Money::ZERO, |c| c.price);

        self.item.base_price + size_delta + meats + garnishes + combo
    }

    /// Line total: unit price times quantity.
    pub fn price(&self) -> Money {
        self.unit_price().times(self.quantity)
    }

    /// Short description of the chosen options, e.g. `Poulet · Algerienne`.
    pub fn summary(&self) -> String {
        let mut parts: Vec<&str> = Vec::new();
        if let Some(ref pizza) = self.pizza {
            parts.push(pizza);
        }
        if let Some(ref size) = self.size {
            parts.push(&size.label);
        }
        parts.extend(self.meats.iter().map(|m| m.label.as_str()));
        parts.extend(self.sauces.iter().map(|s| s.label.as_str()));
        parts.extend(self.garnishes.iter().map(|g| g.label.as_str()));
        if let Some(ref drink) = self.drink {
            parts.push(drink);
        }
        if let Some(ref combo) = self.combo {
            parts.push(&combo.label);
        }
        parts.join(" · ")
    }
}

/// Builder for [`CartLine`]. The id is assigned by the generator passed to
/// [`CartLineBuilder::build`].
pub struct CartLineBuilder {
    item: MenuItem,
    quantity: u32,
    size: Option<Size>,
    meats: Vec<Meat>,
    sauces: Vec<Sauce>,
    garnishes: Vec<Garnish>,
    drink: Option<String>,
    combo: Option<Combo>,
    pizza: Option<String>,
}

impl CartLineBuilder {
    pub fn new(item: &MenuItem) -> Self {
        Self {
            item: item.clone(),
            quantity: 1,
            size: None,
            meats: Vec::new(),
            sauces: Vec::new(),
            garnishes: Vec::new(),
            drink: None,
            combo: None,
            pizza: None,
        }
    }

    /// Sets the quantity, never below 1.
    pub fn quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity.max(1);
        self
    }

    pub fn size(mut self, size: Option<Size>) -> Self {
        self.size = size;
        self
    }

    pub fn meats(mut self, meats: Vec<Meat>) -> Self {
        self.meats = meats;
        self
    }

    pub fn sauces(mut self, sauces: Vec<Sauce>) -> Self {
        self.sauces = sauces;
        self
    }

    pub fn garnishes(mut self, garnishes: Vec<Garnish>) -> Self {
        self.garnishes = garnishes;
        self
    }

    pub fn drink(mut self, drink: Option<String>) -> Self {
        self.drink = drink;
        self
    }

    pub fn combo(mut self, combo: Option<Combo>) -> Self {
        self.combo = combo;
        self
    }

    pub fn pizza(mut self, pizza: Option<String>) -> Self {
        self.pizza = pizza;
        self
    }

    pub fn build(self, ids: &mut dyn LineIdGenerator) -> CartLine {
        CartLine {
            id: ids.next_id(&self.item.id),
            item: self.item,
            quantity: self.quantity,
            size: self.size,
            meats: self.meats,
            sauces: self.sauces,
            garnishes: self.garnishes,
            drink: self.drink,
            combo: self.combo,
            pizza: self.pizza,
        }
    }
}

/// Price of one line.
pub fn price(line: &CartLine) -> Money {
    line.price()
}

/// Sum of line prices.
pub fn cart_total(lines: &[CartLine]) -> Money {
    lines.iter().map(CartLine::price).sum()
}

/// The in-memory order: an ordered list of cart lines.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_line(&mut self, line: CartLine) {
        debug!(line = %line.id, item = %line.item.id, "cart: add line");
        self.lines.push(line);
    }

    /// Removes the line with the given id. Unknown ids are a no-op.
    pub fn remove_line(&mut self, id: &str) -> Option<CartLine> {
        let pos = self.lines.iter().position(|l| l.id == id)?;
        debug!(line = %id, "cart: remove line");
        Some(self.lines.remove(pos))
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn get(&self, id: &str) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.id == id)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total number of units across lines. Counted in `u64` so that any
    /// number of `u32` quantities fits.
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    pub fn total(&self) -> Money {
        cart_total(&self.lines)
    }
}

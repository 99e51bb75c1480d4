//! Output helpers for the `twin` CLI: JSON, aligned tables, and the JSON
//! views of cart lines and carts.

use std::io::{self, Write};

use serde::Serialize;
use twin_core::cart::{Cart, CartLine};
use twin_core::money::Money;

/// JSON view of one cart line.
#[derive(Debug, Serialize)]
pub struct LineView {
    pub id: String,
    pub item: String,
    pub name: String,
    pub category: String,
    pub quantity: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pizza: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub meats: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sauces: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub garnishes: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drink: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub combo: Option<String>,
    pub unit_price: Money,
    pub price: Money,
}

impl LineView {
    pub fn from_line(line: &CartLine) -> Self {
        Self {
            id: line.id().to_string(),
            item: line.item().id.clone(),
            name: line.item().name.clone(),
            category: line.item().category.to_string(),
            quantity: line.quantity(),
            pizza: line.pizza().map(str::to_string),
            size: line.size().map(|s| s.label.clone()),
            meats: line.meats().iter().map(|m| m.label.clone()).collect(),
            sauces: line.sauces().iter().map(|s| s.label.clone()).collect(),
            garnishes: line.garnishes().iter().map(|g| g.label.clone()).collect(),
            drink: line.drink().map(str::to_string),
            combo: line.combo().map(|c| c.label.clone()),
            unit_price: line.unit_price(),
            price: line.price(),
        }
    }
}

/// JSON view of a cart.
#[derive(Debug, Serialize)]
pub struct CartView {
    pub lines: Vec<LineView>,
    pub item_count: u64,
    pub total: Money,
}

impl CartView {
    pub fn from_cart(cart: &Cart) -> Self {
        Self {
            lines: cart.lines().iter().map(LineView::from_line).collect(),
            item_count: cart.item_count(),
            total: cart.total(),
        }
    }
}

/// Print a value as pretty-printed JSON to stdout.
///
/// Terminates the process with exit code 1 if serialization fails.
pub fn output_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            // Ignore broken pipes (piped to `head`).
            let _ = writeln!(handle, "{}", json);
        }
        Err(e) => {
            eprintln!("Error: failed to serialize JSON: {}", e);
            std::process::exit(1);
        }
    }
}

/// Renders a table with headers and left-aligned columns.
///
/// Widths count characters, not bytes, so accented labels line up.
pub fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    if rows.is_empty() {
        return String::new();
    }

    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if i < widths.len() {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }
    }

    let mut out = Vec::with_capacity(rows.len() + 2);
    out.push(pad_row(headers.iter().copied(), &widths));
    let rules: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push(pad_row(rules.iter().map(String::as_str), &widths));
    for row in rows {
        out.push(pad_row(row.iter().map(String::as_str), &widths));
    }
    out.join("\n")
}

fn pad_row<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    let mut line = String::new();
    for (i, cell) in cells.enumerate() {
        if i > 0 {
            line.push_str("  ");
        }
        line.push_str(cell);
        if let Some(width) = widths.get(i) {
            line.push_str(&" ".repeat(width.saturating_sub(cell.chars().count())));
        }
    }
    line.trim_end().to_string()
}

/// Print a table to stdout. Nothing is printed for empty rows.
pub fn output_table(headers: &[&str], rows: &[Vec<String>]) {
    if rows.is_empty() {
        return;
    }
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let _ = writeln!(handle, "{}", render_table(headers, rows));
}

/// One-line human description of a cart line:
/// `line-1  2 x Tacos Solo (Poulet · Algerienne)`.
pub fn format_line(line: &CartLine) -> String {
    let summary = line.summary();
    if summary.is_empty() {
        format!("{}  {} x {}", line.id(), line.quantity(), line.item().name)
    } else {
        format!(
            "{}  {} x {} ({})",
            line.id(),
            line.quantity(),
            line.item().name,
            summary
        )
    }
}

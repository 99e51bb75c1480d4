//! `twin categories` -- list the menu tabs.

use anyhow::Result;
use serde::Serialize;
use twin_core::catalog::Catalog;

use crate::context::RuntimeContext;
use crate::output::{output_json, output_table};

#[derive(Debug, Serialize)]
struct CategoryRow {
    slug: String,
    name: String,
    items: usize,
}

fn rows(catalog: &Catalog) -> Vec<CategoryRow> {
    catalog
        .by_category()
        .into_iter()
        .map(|(category, items)| CategoryRow {
            slug: category.as_str().to_string(),
            name: category.display_name().to_string(),
            items: items.len(),
        })
        .collect()
}

/// Execute the `twin categories` command.
pub fn run(ctx: &RuntimeContext) -> Result<()> {
    let catalog = ctx.load_catalog()?;
    let rows = rows(&catalog);

    if ctx.json {
        output_json(&rows);
        return Ok(());
    }

    let table: Vec<Vec<String>> = rows
        .iter()
        .map(|r| vec![r.slug.clone(), r.name.clone(), r.items.to_string()])
        .collect();
    output_table(&["SLUG", "NAME", "ITEMS"], &table);
    Ok(())
}

//! `twin menu` -- items grouped by category.

use anyhow::{Result, bail};
use serde::Serialize;
use twin_core::catalog::Catalog;
use twin_core::category::Category;
use twin_core::item::MenuItem;
use twin_core::money::Money;
use twin_core::profile::StepKind;
use twin_ui::styles::{render_banner, render_category, render_muted};

use crate::context::RuntimeContext;
use crate::output::{output_json, render_table};

#[derive(Debug, Serialize)]
struct ItemView<'a> {
    id: &'a str,
    name: &'a str,
    base_price: Money,
    steps: &'static [StepKind],
}

#[derive(Debug, Serialize)]
struct GroupView<'a> {
    category: &'a str,
    name: &'a str,
    items: Vec<ItemView<'a>>,
}

fn item_view(item: &MenuItem) -> ItemView<'_> {
    ItemView {
        id: &item.id,
        name: &item.name,
        base_price: item.base_price,
        steps: item.profile().steps,
    }
}

/// Groups to show: every tab, or only the requested category.
fn groups<'a>(catalog: &'a Catalog, filter: Option<&str>) -> Result<Vec<(Category, Vec<&'a MenuItem>)>> {
    let Some(slug) = filter else {
        return Ok(catalog.by_category());
    };
    let category = Category::from(slug);
    let items = catalog.items_in(&category);
    if items.is_empty() && !category.is_builtin() {
        bail!("unknown category '{}' (see 'twin categories')", slug);
    }
    Ok(vec![(category, items)])
}

fn steps_label(item: &MenuItem) -> String {
    item.profile()
        .steps
        .iter()
        .map(StepKind::as_str)
        .collect::<Vec<_>>()
        .join(" > ")
}

/// Execute the `twin menu` command.
pub fn run(ctx: &RuntimeContext, category: Option<&str>) -> Result<()> {
    let catalog = ctx.load_catalog()?;
    let groups = groups(&catalog, category)?;

    if ctx.json {
        let view: Vec<GroupView<'_>> = groups
            .iter()
            .map(|(category, items)| GroupView {
                category: category.as_str(),
                name: category.display_name(),
                items: items.iter().map(|i| item_view(i)).collect(),
            })
            .collect();
        output_json(&view);
        return Ok(());
    }

    if !ctx.quiet {
        println!(
            "{}\n",
            render_banner(&ctx.config.restaurant, &ctx.config.location)
        );
    }

    let mut shown = 0;
    for (category, items) in &groups {
        if items.is_empty() && category.is_builtin() && groups.len() > 1 {
            continue;
        }
        if shown > 0 {
            println!();
        }
        shown += 1;
        println!("{}", render_category(category));
        if items.is_empty() {
            println!("{}", render_muted("(no items)"));
            continue;
        }
        let rows: Vec<Vec<String>> = items
            .iter()
            .map(|item| {
                vec![
                    item.id.clone(),
                    item.name.clone(),
                    ctx.price(item.base_price),
                    steps_label(item),
                ]
            })
            .collect();
        println!("{}", render_table(&["ID", "NAME", "PRICE", "STEPS"], &rows));
    }
    Ok(())
}

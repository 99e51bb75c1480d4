//! `twin quote` -- configure and price one item without a prompt.
//!
//! Selections from the flags are applied to a wizard session, which is then
//! advanced step by step. The first step that does not validate is
//! reported as the error.

use anyhow::{Result, bail};
use twin_core::cart::CartLine;
use twin_core::catalog::Catalog;
use twin_core::idgen::LineIdGenerator;
use twin_core::options::find_by_label;
use twin_core::wizard::{Flow, WizardSession};
use twin_ui::styles::{render_muted, render_price};

use crate::cli::QuoteArgs;
use crate::context::RuntimeContext;
use crate::output::{LineView, output_json};

/// Execute the `twin quote` command.
pub fn run(ctx: &RuntimeContext, args: &QuoteArgs) -> Result<()> {
    let catalog = ctx.load_catalog()?;
    let mut ids = ctx.id_generator();
    let line = quote(&catalog, args, ids.as_mut())?;

    if ctx.json {
        output_json(&LineView::from_line(&line));
        return Ok(());
    }

    println!("{} x {}", line.quantity(), line.item().name);
    let summary = line.summary();
    if !summary.is_empty() {
        println!("  {}", render_muted(&summary));
    }
    println!("{}", render_price(&ctx.price(line.price())));
    Ok(())
}

/// Runs a wizard session to completion from the flag selections.
pub fn quote(catalog: &Catalog, args: &QuoteArgs, ids: &mut dyn LineIdGenerator) -> Result<CartLine> {
    let Some(item) = catalog.get(&args.item) else {
        bail!("unknown menu item '{}' (see 'twin menu')", args.item);
    };
    let mut session = WizardSession::open(catalog, item);
    apply(&mut session, args)?;

    loop {
        let step = session.current_step();
        let index = session.step_index();
        session = match session.advance(ids) {
            Flow::Confirmed(line) => return Ok(line),
            Flow::Open(next) if next.step_index() == index => {
                bail!(
                    "cannot price '{}': the {} step needs a selection",
                    item.id,
                    step
                );
            }
            Flow::Open(next) => next,
            Flow::Cancelled => bail!("order for '{}' was cancelled", item.id),
        };
    }
}

fn apply(session: &mut WizardSession<'_>, args: &QuoteArgs) -> Result<()> {
    let id = session.item().id.clone();

    if let Some(ref pizza) = args.pizza {
        if !session.choose_pizza(pizza) && session.chosen_pizza().is_none() {
            bail!("pizza '{}' is not offered for '{}'", pizza, id);
        }
    }
    if let Some(ref drink) = args.drink {
        if !session.choose_drink(drink) && session.chosen_drink().is_none() {
            bail!("drink '{}' is not offered for '{}'", drink, id);
        }
    }
    for meat in &args.meats {
        if session.is_meat_selected(meat) {
            continue;
        }
        if find_by_label(session.meat_options(), meat).is_none() {
            bail!("meat '{}' is not offered for '{}'", meat, id);
        }
        if !session.toggle_meat(meat) {
            bail!(
                "too many meats for '{}' (limit {})",
                id,
                session.meat_limit().unwrap_or(0)
            );
        }
    }
    for sauce in &args.sauces {
        if find_by_label(session.sauce_options(), sauce).is_none() {
            bail!("sauce '{}' is not offered for '{}'", sauce, id);
        }
        if !session.is_sauce_selected(sauce) {
            session.select_sauce(sauce);
        }
    }
    for garnish in &args.garnishes {
        if session.is_garnish_selected(garnish) {
            continue;
        }
        if !session.toggle_garnish(garnish) {
            bail!("garnish '{}' is not offered for '{}'", garnish, id);
        }
    }
    session.set_quantity(args.qty);
    Ok(())
}

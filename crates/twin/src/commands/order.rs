//! `twin order` -- build an order interactively.
//!
//! Reads one command per line. Outside a wizard: `menu`, `add <item-id>`,
//! `cart`, `remove <line-id>`, `total`, `help`, `done`/`quit`. Inside a
//! wizard: an option number or label selects, `+`/`-` change the quantity,
//! `n` moves on (confirming on the last step), `b` goes back (cancelling on
//! the first step), `x` cancels. End of input behaves like `done`.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use twin_core::cart::{Cart, CartLine};
use twin_core::catalog::Catalog;
use twin_core::idgen::LineIdGenerator;
use twin_core::profile::StepKind;
use twin_core::wizard::{Flow, WizardSession};
use twin_ui::PriceFormat;
use twin_ui::styles::{
    render_accent, render_banner, render_category, render_muted, render_option, render_pass,
    render_price, render_separator, render_step_header, render_warn,
};
use twin_ui::terminal::is_stdin_tty;

use crate::context::RuntimeContext;
use crate::output::{CartView, format_line, output_json};

/// Execute the `twin order` command.
pub fn run(ctx: &RuntimeContext) -> Result<()> {
    let catalog = ctx.load_catalog()?;
    let mut ids = ctx.id_generator();

    let cart = {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        if !ctx.quiet && !ctx.json {
            writeln!(
                out,
                "{}",
                render_banner(&ctx.config.restaurant, &ctx.config.location)
            )?;
            writeln!(out, "{}", render_muted("type 'help' for commands"))?;
        }
        OrderShell::new(&catalog, ids.as_mut(), ctx.price_format(), out)
            .with_prompt(!ctx.quiet && !ctx.json && is_stdin_tty())
            .quiet(ctx.json)
            .run(io::stdin().lock())?
    };

    if ctx.json {
        output_json(&CartView::from_cart(&cart));
    } else if !ctx.quiet {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        writeln!(out)?;
        write_cart(&mut out, &cart, ctx.price_format())?;
    }
    Ok(())
}

enum Control {
    Continue,
    Done,
}

/// One selectable row of the current wizard step.
struct Choice {
    /// Value passed to the session (pizza id or option label).
    key: String,
    label: String,
    extra: Option<String>,
    selected: bool,
}

/// What a selection did.
#[derive(Debug, PartialEq, Eq)]
enum Selection {
    Changed,
    Unchanged,
    Unknown,
}

/// The line-oriented order session.
pub struct OrderShell<'a, W: Write> {
    catalog: &'a Catalog,
    ids: &'a mut dyn LineIdGenerator,
    prices: &'a PriceFormat,
    out: W,
    cart: Cart,
    wizard: Option<WizardSession<'a>>,
    prompt: bool,
    quiet: bool,
}

impl<'a, W: Write> OrderShell<'a, W> {
    pub fn new(
        catalog: &'a Catalog,
        ids: &'a mut dyn LineIdGenerator,
        prices: &'a PriceFormat,
        out: W,
    ) -> Self {
        Self {
            catalog,
            ids,
            prices,
            out,
            cart: Cart::new(),
            wizard: None,
            prompt: false,
            quiet: false,
        }
    }

    /// Print a `> ` prompt before each command.
    pub fn with_prompt(mut self, prompt: bool) -> Self {
        self.prompt = prompt;
        self
    }

    /// Suppress all session output (the caller prints the final cart).
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Processes `input` until `done`/`quit` or end of input and returns
    /// the cart. A wizard still open at the end is cancelled.
    pub fn run<R: BufRead>(mut self, input: R) -> Result<Cart> {
        self.show_prompt()?;
        for line in input.lines() {
            let line = line?;
            if let Control::Done = self.handle(line.trim())? {
                break;
            }
            self.show_prompt()?;
        }
        if let Some(session) = self.wizard.take() {
            session.cancel();
        }
        Ok(self.cart)
    }

    fn say(&mut self, text: &str) -> Result<()> {
        if !self.quiet {
            writeln!(self.out, "{}", text)?;
        }
        Ok(())
    }

    fn show_prompt(&mut self) -> Result<()> {
        if !self.prompt || self.quiet {
            return Ok(());
        }
        match self.wizard {
            Some(ref session) => write!(self.out, "[{}] > ", session.progress())?,
            None => write!(self.out, "> ")?,
        }
        self.out.flush()?;
        Ok(())
    }

    fn handle(&mut self, input: &str) -> Result<Control> {
        if self.wizard.is_some() {
            self.handle_wizard(input)?;
            return Ok(Control::Continue);
        }

        let (command, rest) = input
            .split_once(char::is_whitespace)
            .map(|(c, r)| (c, r.trim()))
            .unwrap_or((input, ""));
        match command {
            "" => {}
            "menu" => self.show_menu()?,
            "add" => self.open(rest)?,
            "cart" => {
                if !self.quiet {
                    write_cart(&mut self.out, &self.cart, self.prices)?;
                }
            }
            "remove" | "rm" => self.remove(rest)?,
            "total" => {
                let total = self.prices.format(self.cart.total());
                self.say(&format!("Total: {}", render_price(&total)))?;
            }
            "help" | "?" => self.say(HELP)?,
            "done" | "quit" | "exit" => return Ok(Control::Done),
            other => self.say(&format!("unknown command '{}' (type 'help')", other))?,
        }
        Ok(Control::Continue)
    }

    fn show_menu(&mut self) -> Result<()> {
        let catalog = self.catalog;
        for (category, items) in catalog.by_category() {
            if items.is_empty() {
                continue;
            }
            self.say(&render_category(&category))?;
            for item in items {
                let price = self.prices.format(item.base_price);
                self.say(&format!("  {:<14} {}  {}", item.id, item.name, render_muted(&price)))?;
            }
        }
        Ok(())
    }

    fn open(&mut self, item_id: &str) -> Result<()> {
        if item_id.is_empty() {
            return self.say("usage: add <item-id>");
        }
        let catalog = self.catalog;
        let Some(item) = catalog.get(item_id) else {
            return self.say(&format!("unknown item '{}' (type 'menu')", item_id));
        };
        let session = WizardSession::open(catalog, item);
        self.say(&render_category(&item.category))?;
        self.say(&render_accent(&item.name))?;
        self.show_step(&session)?;
        self.wizard = Some(session);
        Ok(())
    }

    fn remove(&mut self, line_id: &str) -> Result<()> {
        match self.cart.remove_line(line_id) {
            Some(line) => self.say(&format!("removed {}", format_line(&line))),
            None => self.say(&format!("no line '{}' in the cart", line_id)),
        }
    }

    fn handle_wizard(&mut self, input: &str) -> Result<()> {
        let Some(mut session) = self.wizard.take() else {
            return Ok(());
        };

        match input {
            "n" | "next" => {
                let index = session.step_index();
                match session.advance(&mut *self.ids) {
                    Flow::Open(next) => {
                        if next.step_index() == index {
                            let warning = format!("{}: selection required", next.current_step().title());
                            self.say(&render_warn(&warning))?;
                        }
                        self.show_step(&next)?;
                        self.wizard = Some(next);
                    }
                    Flow::Confirmed(line) => self.add_line(line)?,
                    Flow::Cancelled => self.say(&render_muted("cancelled"))?,
                }
            }
            "b" | "back" => match session.retreat() {
                Flow::Open(previous) => {
                    self.show_step(&previous)?;
                    self.wizard = Some(previous);
                }
                _ => self.say(&render_muted("cancelled"))?,
            },
            "x" | "cancel" => {
                session.cancel();
                self.say(&render_muted("cancelled"))?;
            }
            "+" => {
                session.increment_quantity();
                self.show_step(&session)?;
                self.wizard = Some(session);
            }
            "-" => {
                session.decrement_quantity();
                self.show_step(&session)?;
                self.wizard = Some(session);
            }
            "" | "?" => {
                self.show_step(&session)?;
                self.wizard = Some(session);
            }
            other => {
                match select(&mut session, other) {
                    Selection::Unknown => self.say(&format!("no option '{}' here", other))?,
                    Selection::Unchanged if session.current_step() == StepKind::Meat => {
                        let limit = session.meat_limit().unwrap_or(0);
                        self.say(&render_warn(&format!("meat limit reached ({})", limit)))?;
                    }
                    Selection::Changed | Selection::Unchanged => {}
                }
                self.show_step(&session)?;
                self.wizard = Some(session);
            }
        }
        Ok(())
    }

    fn add_line(&mut self, line: CartLine) -> Result<()> {
        let price = self.prices.format(line.price());
        self.say(&format!(
            "{} {}  {}",
            render_pass("added"),
            format_line(&line),
            render_price(&price)
        ))?;
        self.cart.add_line(line);
        Ok(())
    }

    fn show_step(&mut self, session: &WizardSession<'_>) -> Result<()> {
        let step = session.current_step();
        self.say(&render_step_header(&session.progress(), step))?;

        match step {
            StepKind::Meat => {
                let limit = session.meat_limit().unwrap_or(0);
                self.say(&render_muted(&format!("up to {}", limit)))?;
            }
            StepKind::Sauce if session.sauce_multi() => {
                self.say(&render_muted("several allowed"))?;
            }
            _ => {}
        }
        for (i, choice) in choices(session, self.prices).iter().enumerate() {
            let row = render_option(i + 1, &choice.label, choice.selected, choice.extra.as_deref());
            self.say(&row)?;
        }

        let price = self.prices.format(session.preview_price());
        let hint = if session.is_last_step() {
            "n: add to cart  b: back  x: cancel  +/-: quantity"
        } else {
            "n: next  b: back  x: cancel  +/-: quantity"
        };
        self.say(&format!(
            "quantity {}  {}",
            session.quantity(),
            render_price(&price)
        ))?;
        self.say(&render_muted(hint))
    }
}

const HELP: &str = "\
commands:
  menu               show the menu
  add <item-id>      configure an item and add it to the cart
  cart               show the cart
  remove <line-id>   remove a line
  total              show the total
  done               finish the order
in the wizard:
  <number>|<label>   select an option (a number sets the quantity on the last step)
  + / -              change the quantity
  n                  next step (adds to the cart on the last step)
  b                  previous step (cancels on the first step)
  x                  cancel";

/// Rows for the current step; empty for the quantity step.
fn choices(session: &WizardSession<'_>, prices: &PriceFormat) -> Vec<Choice> {
    let extra = |price: Option<twin_core::money::Money>| {
        price.filter(|p| !p.is_zero()).map(|p| format!("+{}", prices.format(p)))
    };
    match session.current_step() {
        StepKind::PizzaChoice => {
            let chosen = session.chosen_pizza().map(|p| p.id.as_str());
            session
                .pizza_options()
                .into_iter()
                .map(|p| Choice {
                    key: p.id.clone(),
                    label: p.name.clone(),
                    extra: None,
                    selected: chosen == Some(p.id.as_str()),
                })
                .collect()
        }
        StepKind::Drink => session
            .drink_options()
            .iter()
            .map(|d| Choice {
                key: d.label.clone(),
                label: d.label.clone(),
                extra: extra(d.price),
                selected: session.chosen_drink() == Some(d.label.as_str()),
            })
            .collect(),
        StepKind::Meat => session
            .meat_options()
            .iter()
            .map(|m| Choice {
                key: m.label.clone(),
                label: m.label.clone(),
                extra: extra(m.price),
                selected: session.is_meat_selected(&m.label),
            })
            .collect(),
        StepKind::Sauce => session
            .sauce_options()
            .iter()
            .map(|s| Choice {
                key: s.label.clone(),
                label: s.label.clone(),
                extra: None,
                selected: session.is_sauce_selected(&s.label),
            })
            .collect(),
        StepKind::Garnish => session
            .garnish_options()
            .into_iter()
            .map(|g| Choice {
                selected: session.is_garnish_selected(&g.label),
                extra: extra(g.price),
                key: g.label.clone(),
                label: g.label,
            })
            .collect(),
        StepKind::Quantity => Vec::new(),
    }
}

/// Applies one wizard input naming an option by number or label.
fn select(session: &mut WizardSession<'_>, input: &str) -> Selection {
    let step = session.current_step();
    if step == StepKind::Quantity {
        return match input.parse::<u32>() {
            Ok(quantity) => {
                session.set_quantity(quantity);
                Selection::Changed
            }
            Err(_) => Selection::Unknown,
        };
    }

    // Prices do not affect matching; any format will do.
    let rows = choices(session, &PriceFormat::default());
    let by_number = input
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| rows.get(i));
    let chosen = by_number.or_else(|| {
        rows.iter().find(|c| {
            c.label.eq_ignore_ascii_case(input) || c.key.eq_ignore_ascii_case(input)
        })
    });
    let Some(choice) = chosen else {
        return Selection::Unknown;
    };

    let changed = match step {
        StepKind::PizzaChoice => session.choose_pizza(&choice.key),
        StepKind::Drink => session.choose_drink(&choice.key),
        StepKind::Meat => session.toggle_meat(&choice.key),
        StepKind::Sauce => session.select_sauce(&choice.key),
        StepKind::Garnish => session.toggle_garnish(&choice.key),
        StepKind::Quantity => false,
    };
    if changed {
        Selection::Changed
    } else {
        Selection::Unchanged
    }
}

/// Writes the cart lines, their prices and the total.
pub fn write_cart(out: &mut impl Write, cart: &Cart, prices: &PriceFormat) -> io::Result<()> {
    if cart.is_empty() {
        return writeln!(out, "{}", render_muted("cart is empty"));
    }
    for line in cart.lines() {
        writeln!(
            out,
            "{}  {}",
            format_line(line),
            render_price(&prices.format(line.price()))
        )?;
    }
    writeln!(out, "{}", render_separator())?;
    writeln!(
        out,
        "Total ({} items): {}",
        cart.item_count(),
        render_price(&prices.format(cart.total()))
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Cursor;
    use twin_core::idgen::SequentialIds;
    use twin_core::money::Money;

    fn run_script(script: &str) -> (Cart, String) {
        let catalog = Catalog::builtin();
        let mut ids = SequentialIds::default();
        let prices = PriceFormat::default();
        let mut out = Vec::new();
        let cart = OrderShell::new(&catalog, &mut ids, &prices, &mut out)
            .run(Cursor::new(script))
            .unwrap();
        (cart, String::from_utf8(out).unwrap())
    }

    #[test]
    fn tacos_order() {
        let (cart, out) = run_script("add tacos-solo\n1\nn\nAlgerienne\nn\n+\nn\ndone\n");

        assert_eq!(cart.len(), 1);
        let line = &cart.lines()[0];
        assert_eq!(line.id(), "line-1");
        assert_eq!(line.quantity(), 2);
        assert_eq!(line.meats()[0].label, "Poulet");
        assert_eq!(line.sauces()[0].label, "Algerienne");
        assert_eq!(cart.total(), Money::from_units(15));
        assert!(out.contains("line-1  2 x Tacos Solo (Poulet · Algerienne)"));
    }

    #[test]
    fn blocked_step_warns_and_stays() {
        let (cart, out) = run_script("add midi-senior\nn\nx\n");
        assert!(cart.is_empty());
        assert!(out.contains("selection required"));
        assert!(out.contains("cancelled"));
    }

    #[test]
    fn lunch_menu_by_labels() {
        let (cart, _) = run_script("add midi-mega\nCalzone\nn\neau 50cl\nn\nn\n");
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.lines()[0].pizza(), Some("pz-calz"));
        assert_eq!(cart.lines()[0].drink(), Some("Eau 50cl"));
    }

    #[test]
    fn back_on_first_step_cancels() {
        let (cart, out) = run_script("add panini\nb\ncart\n");
        assert!(cart.is_empty());
        assert!(out.contains("cancelled"));
        assert!(out.contains("cart is empty"));
    }

    #[test]
    fn meat_limit_message() {
        let (_, out) = run_script("add tacos-solo\n1\n2\nx\n");
        assert!(out.contains("meat limit reached (1)"));
    }

    #[test]
    fn quantity_step_takes_a_number() {
        let (cart, _) = run_script("add fries\n4\nn\n");
        assert_eq!(cart.lines()[0].quantity(), 4);
        assert_eq!(cart.total(), Money::from_units(12));
    }

    #[test]
    fn remove_known_and_unknown_lines() {
        let (cart, out) = run_script("add fries\nn\nadd drink-coca\nn\nremove line-1\nremove line-9\n");
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.lines()[0].id(), "line-2");
        assert!(out.contains("removed line-1"));
        assert!(out.contains("no line 'line-9'"));
    }

    #[test]
    fn end_of_input_drops_open_wizard() {
        let (cart, _) = run_script("add fries\nn\nadd mlawi\n1\n");
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn unknown_inputs_are_reported() {
        let (cart, out) = run_script("frobnicate\nadd kebab\nadd makloub\nSamurai\nx\n");
        assert!(cart.is_empty());
        assert!(out.contains("unknown command 'frobnicate'"));
        assert!(out.contains("unknown item 'kebab'"));
        assert!(out.contains("no option 'Samurai' here"));
    }

    #[test]
    fn commands_after_done_are_ignored() {
        let (cart, _) = run_script("done\nadd fries\nn\n");
        assert!(cart.is_empty());
    }

    #[test]
    fn cart_listing_shows_total() {
        let mut ids = SequentialIds::default();
        let catalog = Catalog::builtin();
        let mut cart = Cart::new();
        cart.add_line(
            CartLine::builder(catalog.get("fries").unwrap())
                .quantity(2)
                .build(&mut ids),
        );
        let mut out = Vec::new();
        write_cart(&mut out, &cart, &PriceFormat::default()).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("line-1  2 x Frites"));
        assert!(text.contains("Total (2 items):"));
        assert!(text.contains("6,00 €"));
    }
}

//! `twin profile` -- show the wizard steps of a category.

use anyhow::Result;
use serde::Serialize;
use twin_core::category::Category;
use twin_core::profile::{WizardProfile, derive_profile};
use twin_ui::styles::{render_bold, render_muted};

use crate::context::RuntimeContext;
use crate::output::output_json;

#[derive(Debug, Serialize)]
struct ProfileView<'a> {
    category: &'a Category,
    #[serde(flatten)]
    profile: WizardProfile,
}

/// Execute the `twin profile` command.
pub fn run(ctx: &RuntimeContext, slug: &str) -> Result<()> {
    let category = Category::from(slug);
    let profile = derive_profile(&category);

    if ctx.json {
        output_json(&ProfileView {
            category: &category,
            profile,
        });
        return Ok(());
    }

    println!("{} ({})", render_bold(category.display_name()), category);
    for (i, step) in profile.steps.iter().enumerate() {
        println!("  {}. {} {}", i + 1, step, render_muted(step.title()));
    }
    if profile.sauce_multi {
        println!("{}", render_muted("sauces: several allowed"));
    }
    if let Some(set) = profile.garnish_set {
        let mode = if profile.garnish_multi { "several" } else { "one" };
        println!(
            "{}",
            render_muted(&format!("garnishes ({}): {}", mode, set.labels().join(", ")))
        );
    }
    Ok(())
}

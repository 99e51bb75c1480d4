//! Clap CLI definitions for the `twin` command.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// twin -- order at Twin Pizza from the terminal.
#[derive(Parser, Debug)]
#[command(
    name = "twin",
    about = "Browse the menu and build an order",
    long_about = "Browse the Twin Pizza menu, configure items step by step and build an order.",
    version,
    propagate_version = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Global flags available to all subcommands.
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Catalog file (YAML or JSON), overriding the configured one.
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Output in JSON format.
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose/debug output.
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output.
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,
}

/// All available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the menu tabs with their item counts.
    Categories,

    /// Show menu items grouped by category.
    Menu(MenuArgs),

    /// Show the wizard steps for a category.
    Profile(ProfileArgs),

    /// Price one configured item without an interactive session.
    Quote(QuoteArgs),

    /// Build an order interactively (reads commands from stdin).
    Order,

    /// Generate shell completions.
    Completion(CompletionArgs),

    /// Print version information.
    Version,
}

/// Arguments for `twin menu`.
#[derive(Args, Debug)]
pub struct MenuArgs {
    /// Only show this category (slug, e.g. `tacos`).
    #[arg(short, long)]
    pub category: Option<String>,
}

/// Arguments for `twin profile`.
#[derive(Args, Debug)]
pub struct ProfileArgs {
    /// Category slug (e.g. `souffles`).
    pub category: String,
}

/// Arguments for `twin quote`.
#[derive(Args, Debug)]
pub struct QuoteArgs {
    /// Menu item id (see `twin menu`).
    pub item: String,

    /// Pizza for a lunch menu (item id).
    #[arg(long)]
    pub pizza: Option<String>,

    /// Drink for a lunch menu (label).
    #[arg(long)]
    pub drink: Option<String>,

    /// Meat to add (repeatable).
    #[arg(long = "meat", value_name = "LABEL")]
    pub meats: Vec<String>,

    /// Sauce to add (repeatable where the item allows several).
    #[arg(long = "sauce", value_name = "LABEL")]
    pub sauces: Vec<String>,

    /// Garnish to add (repeatable).
    #[arg(long = "garnish", value_name = "LABEL")]
    pub garnishes: Vec<String>,

    /// Quantity.
    #[arg(long, default_value_t = 1)]
    pub qty: u32,
}

/// Arguments for `twin completion`.
#[derive(Args, Debug)]
pub struct CompletionArgs {
    #[command(subcommand)]
    pub command: CompletionCommands,
}

/// Completion subcommands.
#[derive(Subcommand, Debug)]
pub enum CompletionCommands {
    /// Generate Bash completions.
    Bash,
    /// Generate Zsh completions.
    Zsh,
    /// Generate Fish completions.
    Fish,
    /// Generate PowerShell completions.
    Powershell,
}

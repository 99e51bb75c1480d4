//! `twin` -- terminal ordering front-end for Twin Pizza.
//!
//! Parses CLI arguments with clap, resolves the runtime context and
//! dispatches to command handlers.

mod cli;
mod commands;
mod context;
mod output;

use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};
use context::RuntimeContext;
use twin_ui::styles::render_fail;

/// Tracks whether a Ctrl+C has already been received.
static CTRLC_RECEIVED: AtomicBool = AtomicBool::new(false);

fn main() {
    // First Ctrl+C exits cleanly, a second one forces exit.
    let _ = ctrlc::set_handler(|| {
        if CTRLC_RECEIVED.swap(true, Ordering::SeqCst) {
            std::process::exit(1);
        }
        std::process::exit(0);
    });

    let cli = Cli::parse();

    if cli.global.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("twin=debug,twin_core=debug,twin_config=debug")
            .with_writer(std::io::stderr)
            .init();
    }

    let result = RuntimeContext::from_global_args(&cli.global)
        .and_then(|ctx| dispatch(&ctx, cli.command));

    if let Err(e) = result {
        if cli.global.json {
            let err_json = serde_json::json!({
                "error": format!("{:#}", e),
            });
            if let Ok(s) = serde_json::to_string_pretty(&err_json) {
                eprintln!("{}", s);
            }
        } else {
            eprintln!("{} {:#}", render_fail("Error:"), e);
        }
        std::process::exit(1);
    }
}

fn dispatch(ctx: &RuntimeContext, command: Option<Commands>) -> Result<()> {
    match command {
        Some(Commands::Categories) => commands::categories::run(ctx),
        Some(Commands::Menu(args)) => commands::menu::run(ctx, args.category.as_deref()),
        Some(Commands::Profile(args)) => commands::profile::run(ctx, &args.category),
        Some(Commands::Quote(args)) => commands::quote::run(ctx, &args),
        Some(Commands::Order) => commands::order::run(ctx),
        Some(Commands::Completion(args)) => commands::completion::run(&args),
        Some(Commands::Version) => commands::version::run(ctx),
        None => {
            use clap::CommandFactory;
            Cli::command().print_help().ok();
            println!();
            Ok(())
        }
    }
}

//! Runtime context for command execution.
//!
//! The [`RuntimeContext`] holds what every handler needs: global flags, the
//! resolved configuration and where it came from.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;
use tracing::debug;

use twin_config::{LineIdStrategy, TwinConfig, find_twin_dir, load_config};
use twin_core::catalog::Catalog;
use twin_core::idgen::{HashIds, LineIdGenerator, SequentialIds};
use twin_core::money::Money;
use twin_ui::PriceFormat;

use crate::cli::GlobalArgs;

/// Runtime context passed to every command handler.
#[derive(Debug)]
pub struct RuntimeContext {
    /// The `.twin/` directory the config was read from, if any.
    pub twin_dir: Option<PathBuf>,

    pub config: TwinConfig,

    /// `--catalog`, which wins over the configured catalog.
    pub catalog_override: Option<PathBuf>,

    pub json: bool,
    pub verbose: bool,
    pub quiet: bool,

    price_format: PriceFormat,
}

impl RuntimeContext {
    /// Builds the context: discovers `.twin/` from the working directory and
    /// loads the layered configuration.
    pub fn from_global_args(global: &GlobalArgs) -> Result<Self> {
        let cwd = std::env::current_dir().context("cannot determine the working directory")?;
        let twin_dir = find_twin_dir(&cwd);
        let config = load_config(twin_dir.as_deref()).context("failed to load configuration")?;
        debug!(twin_dir = ?twin_dir, locale = %config.locale, "configuration loaded");
        Ok(Self::new(global, twin_dir, config))
    }

    pub fn new(global: &GlobalArgs, twin_dir: Option<PathBuf>, config: TwinConfig) -> Self {
        let price_format = PriceFormat::for_locale(&config.locale, &config.currency);
        Self {
            twin_dir,
            config,
            catalog_override: global.catalog.clone(),
            json: global.json,
            verbose: global.verbose,
            quiet: global.quiet,
            price_format,
        }
    }

    /// The catalog file to read, if one is configured.
    pub fn catalog_path(&self) -> Option<PathBuf> {
        self.catalog_override
            .clone()
            .or_else(|| self.config.catalog_path(self.twin_dir.as_deref()))
    }

    /// Loads the configured catalog, or the built-in menu.
    pub fn load_catalog(&self) -> Result<Catalog> {
        match self.catalog_path() {
            Some(path) => read_catalog(&path),
            None => Ok(Catalog::builtin()),
        }
    }

    /// A fresh line id generator per the configured strategy.
    pub fn id_generator(&self) -> Box<dyn LineIdGenerator> {
        let prefix = self.config.line_id_prefix.clone();
        match self.config.line_ids {
            LineIdStrategy::Sequential => Box::new(SequentialIds::new(prefix)),
            LineIdStrategy::Hash => Box::new(HashIds::new(prefix, Utc::now())),
        }
    }

    pub fn price_format(&self) -> &PriceFormat {
        &self.price_format
    }

    /// Formats an amount for display.
    pub fn price(&self, amount: Money) -> String {
        self.price_format.format(amount)
    }
}

/// Reads a catalog file; `.json` files are parsed as JSON, anything else as
/// YAML.
pub fn read_catalog(path: &Path) -> Result<Catalog> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog {}", path.display()))?;
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let catalog = if is_json {
        Catalog::from_json_str(&text)
    } else {
        Catalog::from_yaml_str(&text)
    };
    catalog.with_context(|| format!("invalid catalog {}", path.display()))
}

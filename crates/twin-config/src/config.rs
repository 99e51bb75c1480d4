//! Configuration types and loading.
//!
//! [`TwinConfig`] mirrors `.twin/config.yaml`. [`load_config`] layers the
//! defaults, the file and `TWIN_*` environment variables (in that order of
//! precedence, last wins) with figment.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Name of the config file inside `.twin/`.
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Prefix of environment overrides (`TWIN_LOCALE`, `TWIN_LINE_IDS`, ...).
const ENV_PREFIX: &str = "TWIN_";

/// Errors that can occur during configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to write config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] serde_yaml::Error),

    #[error("invalid configuration: {0}")]
    Load(#[from] figment::Error),

    #[error("invalid configuration value for key '{key}': {reason}")]
    InvalidValue { key: String, reason: String },
}

/// A specialized `Result` type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// How new cart line ids are generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LineIdStrategy {
    /// `line-1`, `line-2`, ...
    #[default]
    Sequential,
    /// Short content hashes, `line-k3x9q2`.
    Hash,
}

/// The full twin configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct TwinConfig {
    /// Restaurant name shown in headers.
    #[serde(default = "default_restaurant")]
    pub restaurant: String,

    /// Restaurant location shown under the name.
    #[serde(default = "default_location")]
    pub location: String,

    /// Catalog file (YAML or JSON). The built-in menu is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<PathBuf>,

    /// ISO currency code for price display.
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Locale for price display, e.g. `fr-FR`.
    #[serde(default = "default_locale")]
    pub locale: String,

    #[serde(default)]
    pub line_ids: LineIdStrategy,

    #[serde(default = "default_line_id_prefix")]
    pub line_id_prefix: String,
}

impl Default for TwinConfig {
    fn default() -> Self {
        Self {
            restaurant: default_restaurant(),
            location: default_location(),
            catalog: None,
            currency: default_currency(),
            locale: default_locale(),
            line_ids: LineIdStrategy::default(),
            line_id_prefix: default_line_id_prefix(),
        }
    }
}

fn default_restaurant() -> String {
    "Twin Pizza".to_string()
}

fn default_location() -> String {
    "Grand-Couronne".to_string()
}

fn default_currency() -> String {
    "EUR".to_string()
}

fn default_locale() -> String {
    "fr-FR".to_string()
}

fn default_line_id_prefix() -> String {
    "line".to_string()
}

impl TwinConfig {
    /// Checks values that deserialize fine but are unusable.
    pub fn validate(&self) -> Result<()> {
        if self.line_id_prefix.trim().is_empty() {
            return Err(invalid("line-id-prefix", "must not be empty"));
        }
        if self.currency.len() != 3 || !self.currency.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(invalid("currency", "expected a three-letter ISO code"));
        }
        if self.locale.trim().is_empty() {
            return Err(invalid("locale", "must not be empty"));
        }
        Ok(())
    }

    /// Resolves a relative catalog path against the directory holding the
    /// config file.
    pub fn catalog_path(&self, twin_dir: Option<&Path>) -> Option<PathBuf> {
        let path = self.catalog.as_ref()?;
        match twin_dir.and_then(Path::parent) {
            Some(base) if path.is_relative() => Some(base.join(path)),
            _ => Some(path.clone()),
        }
    }
}

fn invalid(key: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        reason: reason.to_string(),
    }
}

/// The figment stack without environment overrides.
pub fn file_figment(twin_dir: Option<&Path>) -> Figment {
    let figment = Figment::from(Serialized::defaults(TwinConfig::default()));
    match twin_dir {
        Some(dir) => figment.merge(Yaml::file(dir.join(CONFIG_FILE_NAME))),
        None => figment,
    }
}

/// Loads configuration: defaults < `<twin_dir>/config.yaml` < `TWIN_*` env.
///
/// A missing or empty file yields the defaults.
pub fn load_config(twin_dir: Option<&Path>) -> Result<TwinConfig> {
    let env = Env::prefixed(ENV_PREFIX)
        .ignore(&["dir"])
        .map(|key| key.as_str().replace('_', "-").into());
    extract(file_figment(twin_dir).merge(env))
}

/// Extracts and validates a config from an assembled figment.
pub fn extract(figment: Figment) -> Result<TwinConfig> {
    let config: TwinConfig = figment.extract()?;
    config.validate()?;
    Ok(config)
}

/// Saves configuration to `<twin_dir>/config.yaml`, creating the directory.
pub fn save_config(twin_dir: &Path, config: &TwinConfig) -> Result<()> {
    std::fs::create_dir_all(twin_dir)?;
    let yaml = serde_yaml::to_string(config)?;
    std::fs::write(twin_dir.join(CONFIG_FILE_NAME), yaml)?;
    Ok(())
}

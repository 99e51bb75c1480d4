//! Configuration for the twin ordering front-end.
//!
//! Settings live in `.twin/config.yaml`, discovered by walking up from the
//! working directory, and can be overridden with `TWIN_*` environment
//! variables.

pub mod config;
pub mod twin_dir;

pub use config::{ConfigError, LineIdStrategy, TwinConfig, load_config, save_config};
pub use twin_dir::find_twin_dir;

//! Jeeves configuration system.
//!
//! Provides TOML-based configuration with environment overrides and
//! full validation. All config sections use sensible defaults so
//! partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use jeeves_config::load_config;
//!
//! let config = load_config().expect("failed to load config");
//! println!("talking to {}", config.provider.base_url);
//! ```

pub mod env;
pub mod schema;
pub mod toml_loader;
pub mod validation;

// Re-export core types for convenience
pub use schema::{ChatConfig, DefaultsConfig, JeevesConfig, ModelsConfig, ProviderConfig};

use jeeves_common::ConfigError;
use std::path::Path;

/// Convenience function to load config from the platform default path.
///
/// Loads `config.toml` from the OS config directory, creates a default
/// if none exists, applies `JEEVES_*` environment overrides, and
/// validates the result.
pub fn load_config() -> Result<JeevesConfig, ConfigError> {
    let mut config = toml_loader::load_default()?;
    env::apply_env_overrides(&mut config);
    validation::validate(&config)?;
    Ok(config)
}

/// Load config from an explicit file path, with the same environment
/// overrides and validation as [`load_config`].
pub fn load_config_from(path: &Path) -> Result<JeevesConfig, ConfigError> {
    let mut config = toml_loader::load_from_path(path)?;
    env::apply_env_overrides(&mut config);
    validation::validate(&config)?;
    Ok(config)
}

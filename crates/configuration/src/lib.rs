//! # Heroes Configuration
//!
//! Typed settings for the admin client and the reference backend, read from
//! a TOML file, plus the shared tracing setup both binaries use.

use crate::error::ConfigError;
use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;
pub mod telemetry;

// Re-export the core types to provide a clean public API.
pub use settings::{ApiConfig, Config, LogFormat, LoggingConfig, PaginationConfig, ServerConfig};
pub use telemetry::init_tracing;

/// The file looked up when no explicit path is given.
pub const DEFAULT_CONFIG_FILE: &str = "config.toml";

/// Loads the application configuration from the given TOML file.
///
/// A missing file is not an error: every section has defaults, so the
/// application still starts against `http://localhost:8080`. Values present
/// in the file override the defaults field by field.
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let builder = config::Config::builder()
        .add_source(config::File::from(path).format(config::FileFormat::Toml).required(false))
        .build()?;

    // Attempt to deserialize the entire configuration into our `Config` struct
    let config = builder.try_deserialize::<Config>()?;
    config.validate()?;

    Ok(config)
}

//! Error hierarchy for the bindle CLI.
//!
//! Top-level [`CliError`] wraps domain errors via `#[from]`; every
//! variant prints an actionable message and the binary exits non-zero
//! through `anyhow` at `main`.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("bundle error: {0}")]
    Bundle(#[from] bindle_bundler::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Config file loading and validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {}\n\nHint: create a bindle.config.json or pass a config path as the first argument", .0.display())]
    NotFound(PathBuf),

    #[error("invalid JSON in '{}': {source}\n\nHint: check the config file syntax", .path.display())]
    InvalidJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("missing required field '{field}'\n\nHint: {hint}")]
    MissingField { field: String, hint: String },

    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
}

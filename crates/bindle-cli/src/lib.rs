//! Library surface of the bindle CLI: argument parsing, config loading,
//! logging setup and the error hierarchy. The binary in `main.rs` is a
//! thin wrapper over these modules.

pub mod cli;
pub mod config;
pub mod error;
pub mod logger;

pub use error::{CliError, ConfigError, Result};

//! # bindle-bundler
//!
//! The bundling pipeline: given an ESM entry file, build the dependency
//! graph of its local imports, rewrite each module to a synchronous
//! `require`-style format with position-based edits, and emit a single
//! self-contained script around a caching module runtime.
//!
//! ## Quick start
//!
//! ```no_run
//! use bindle_bundler::BundleOptions;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let result = BundleOptions::new("src/main.js")
//!     .output("dist/bundle.js")
//!     .bundle()
//!     .await?;
//!
//! result.write()?;
//! # Ok(()) }
//! ```
//!
//! ## Pipeline
//!
//! ```text
//! entry path
//!    │
//!    ▼
//! GraphWalker ──► (read ──► parse ──► analyze) per module
//!    │
//!    ▼
//! ModuleGraph ──► transform (edits + export completion, plugin hooks)
//!    │
//!    ▼
//! emit (runtime prelude, module table, entry invocation)
//!    │
//!    ▼
//! bundle text ──► `bundle` plugin hook ──► single output write
//! ```
//!
//! Modules are immutable after analysis, so per-module transforms run
//! concurrently; the emitted table always follows discovery order.

pub mod analyzer;
pub mod emit;
pub mod options;
pub mod output;
pub mod parser;
pub mod plugin;
pub mod transform;
pub mod walker;

// Re-export the graph foundation so downstream users need one import.
pub use bindle_graph::{
    apply_edits, classify, edits_disjoint, resolve, Edit, ExportSet, Import, ImportSpecifier,
    ModuleGraph, ModuleKey, ModuleRecord, SourceSpan, SpecifierKind,
};

pub use analyzer::{analyze_module, ModuleAnalysis};
pub use options::{BundleOptions, BundleResult, ModuleMeta};
pub use plugin::{BannerPlugin, ModuleInfo, Plugin, PluginDriver, SharedPlugin};
pub use walker::GraphWalker;

use std::path::PathBuf;

/// Error type for bundling operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid bundle options.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Entry or transitively required local file cannot be read.
    #[error("failed to read module '{}': {source}", .path.display())]
    ModuleRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Source does not parse.
    #[error("failed to parse '{}': {message}", .path.display())]
    Parse { path: PathBuf, message: String },

    /// Plugin hook returned an error or rejected.
    #[error("plugin '{plugin}' failed in {phase} hook: {message}")]
    Plugin {
        plugin: String,
        phase: &'static str,
        message: String,
    },

    /// Graph bookkeeping violation (duplicate key, broken id order).
    #[error(transparent)]
    Graph(#[from] bindle_graph::GraphError),

    /// Module key construction failure.
    #[error(transparent)]
    Key(#[from] bindle_graph::ModuleKeyError),

    /// Output path escapes the target directory or is otherwise invalid.
    #[error("invalid output path: {0}")]
    InvalidOutputPath(String),

    /// Output file write failed.
    #[error("write failure: {0}")]
    WriteFailure(String),

    /// Other I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

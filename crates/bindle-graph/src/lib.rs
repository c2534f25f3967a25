//! # bindle-graph
//!
//! Pure data structures for bindle's module dependency graph.
//!
//! This crate holds the record shapes shared by the bundling pipeline
//! without any I/O or parser dependency:
//!
//! - [`ModuleKey`] - canonical module identity (absolute `.js` path)
//! - [`Edit`] - byte-range substitution over original source text
//! - [`Import`] / [`ImportSpecifier`] - import descriptors
//! - [`ExportSet`] - named exports plus the default-export marker
//! - [`ModuleRecord`] - the analyzed-but-not-transformed state of a file
//! - [`ModuleGraph`] - key-to-record mapping in discovery order
//! - [`resolver`] - pure specifier classification and path resolution
//!
//! Everything here is a pure function of source text and paths, so the
//! crate stays cheap to test and free of runtime concerns.

pub mod edit;
pub mod export;
pub mod graph;
pub mod import;
pub mod module;
pub mod module_key;
pub mod resolver;
pub mod span;

pub use edit::{apply_edits, edits_disjoint, Edit};
pub use export::ExportSet;
pub use graph::{GraphError, ModuleGraph};
pub use import::{Import, ImportSpecifier};
pub use module::ModuleRecord;
pub use module_key::{ModuleKey, ModuleKeyError};
pub use resolver::{classify, resolve, ResolveError, SpecifierKind};
pub use span::SourceSpan;

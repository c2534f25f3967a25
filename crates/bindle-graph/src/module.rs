use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::edit::Edit;
use crate::export::ExportSet;
use crate::import::Import;
use crate::module_key::ModuleKey;

/// The analyzed-but-not-transformed state of one source file.
///
/// A record is created the first time its canonical key is encountered,
/// is immutable after analysis, and lives for the duration of one bundle
/// call. The parsed AST is consumed during analysis; the record keeps only
/// the analysis products.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModuleRecord {
    /// Unique id assigned in discovery order, contiguous from 0.
    pub id: u32,
    pub key: ModuleKey,
    /// Original source text, untouched by the analyzer.
    pub source: String,
    /// Byte-range rewrites replacing module syntax, pairwise disjoint.
    pub edits: Vec<Edit>,
    pub imports: Vec<Import>,
    pub exports: ExportSet,
    /// Export assignments to append after the rewritten body.
    pub trailing_assignments: Vec<String>,
    /// Export names already covered by a scheduled assignment, so the
    /// transformer emits exactly one assignment per name.
    pub satisfied: FxHashSet<String>,
}

impl ModuleRecord {
    /// Local imports that resolved to a canonical key, i.e. the module's
    /// outgoing graph edges.
    pub fn local_dependencies(&self) -> impl Iterator<Item = &ModuleKey> {
        self.imports.iter().filter_map(|imp| imp.resolved.as_ref())
    }

    pub fn original_size(&self) -> usize {
        self.source.len()
    }
}

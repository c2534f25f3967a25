//! Graph walker: depth-first module discovery.
//!
//! Starting from the entry key, reads, parses and analyzes each module
//! the first time its canonical key is seen and records it under the
//! next discovery id. Local dependencies are followed; external
//! specifiers contribute no edge. The walk terminates because keys are
//! canonical paths and each key is processed at most once, so cycles and
//! shared dependencies are safe by construction.

use std::path::PathBuf;

use tokio::fs;
use tracing::debug;

use bindle_graph::{ModuleGraph, ModuleKey, ModuleRecord};

use crate::analyzer::analyze_module;
use crate::{Error, Result};

pub struct GraphWalker {
    cwd: PathBuf,
}

impl GraphWalker {
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        Self { cwd: cwd.into() }
    }

    /// Build the module graph reachable from `entry`.
    ///
    /// Read and parse failures are fatal for the entry and for every
    /// transitively required local file alike. The traversal is an
    /// explicit-stack depth-first preorder, so discovery order (and with
    /// it, id assignment and emitted table order) matches the recursive
    /// formulation.
    pub async fn walk(&self, entry: &ModuleKey) -> Result<ModuleGraph> {
        let mut graph = ModuleGraph::new();
        let mut stack = vec![entry.clone()];

        while let Some(key) = stack.pop() {
            if graph.contains(&key) {
                continue;
            }

            let source =
                fs::read_to_string(key.path())
                    .await
                    .map_err(|source| Error::ModuleRead {
                        path: key.path().to_path_buf(),
                        source,
                    })?;

            let analysis = analyze_module(&source, &key, &self.cwd)?;
            let record = ModuleRecord {
                id: graph.next_id(),
                key: key.clone(),
                source,
                edits: analysis.edits,
                imports: analysis.imports,
                exports: analysis.exports,
                trailing_assignments: analysis.trailing_assignments,
                satisfied: analysis.satisfied,
            };

            debug!(module = %key.relative_display(&self.cwd), id = record.id, "analyzed module");

            // Push unseen dependencies in reverse so the first import is
            // discovered next, preserving depth-first preorder.
            let mut pending: Vec<ModuleKey> = Vec::new();
            for dep in record.local_dependencies() {
                if !graph.contains(dep) && !pending.contains(dep) {
                    pending.push(dep.clone());
                }
            }
            graph.insert(record)?;
            for dep in pending.into_iter().rev() {
                stack.push(dep);
            }
        }

        Ok(graph)
    }
}

//! Bundle configuration and the top-level pipeline.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use bindle_graph::ModuleKey;

use crate::emit::emit_bundle;
use crate::output::write_atomic;
use crate::plugin::{PluginDriver, SharedPlugin};
use crate::transform::transform_graph;
use crate::walker::GraphWalker;
use crate::{Error, Result};

/// Configuration for one bundle call.
///
/// A bundle call is a unit of work with no partial output: if any stage
/// fails, nothing is written. Two calls over the same inputs produce
/// byte-identical bundles, including module-table ordering.
pub struct BundleOptions {
    entry: PathBuf,
    output: PathBuf,
    cwd: Option<PathBuf>,
    plugins: Vec<SharedPlugin>,
}

impl std::fmt::Debug for BundleOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BundleOptions")
            .field("entry", &self.entry)
            .field("output", &self.output)
            .field("cwd", &self.cwd)
            .field("plugins", &self.plugins.len())
            .finish()
    }
}

impl BundleOptions {
    /// Create options for an entry file, resolved relative to the
    /// working directory. Output defaults to `dist/bundle.js`.
    pub fn new(entry: impl Into<PathBuf>) -> Self {
        Self {
            entry: entry.into(),
            output: PathBuf::from("dist/bundle.js"),
            cwd: None,
            plugins: Vec::new(),
        }
    }

    /// Set the output bundle path.
    pub fn output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    /// Set the working directory used for entry resolution and for the
    /// relative keys in the emitted module table. Defaults to the
    /// process working directory.
    pub fn cwd(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = Some(cwd.into());
        self
    }

    /// Append a plugin. Plugins run in the order they were added.
    pub fn plugin(mut self, plugin: SharedPlugin) -> Self {
        self.plugins.push(plugin);
        self
    }

    /// Append several plugins, keeping their order.
    pub fn plugins(mut self, plugins: impl IntoIterator<Item = SharedPlugin>) -> Self {
        self.plugins.extend(plugins);
        self
    }

    /// Check the options for internal consistency.
    pub fn validate(&self) -> Result<()> {
        if self.entry.as_os_str().is_empty() {
            return Err(Error::InvalidConfig("entry path is empty".to_string()));
        }
        if self.output.as_os_str().is_empty() {
            return Err(Error::InvalidConfig("output path is empty".to_string()));
        }
        Ok(())
    }

    /// Run the full pipeline: discover the module graph, transform every
    /// module, assemble the bundle, and run `bundle` plugin hooks.
    ///
    /// Nothing is written to disk; call [`BundleResult::write`] for the
    /// single output write.
    pub async fn bundle(self) -> Result<BundleResult> {
        self.validate()?;

        let cwd = match &self.cwd {
            Some(cwd) => cwd.clone(),
            None => std::env::current_dir()?,
        };
        let entry = ModuleKey::for_entry(&cwd, &self.entry)?;
        debug!(entry = %entry, "starting bundle");

        let graph = GraphWalker::new(&cwd).walk(&entry).await?;
        let plugins = PluginDriver::new(self.plugins);
        let bodies = transform_graph(&graph, &plugins, &cwd).await?;

        let assembled = emit_bundle(&graph, &bodies, &entry, &cwd);
        let code = plugins.bundle(assembled).await?;

        let modules = graph
            .modules()
            .map(|record| ModuleMeta {
                key: record.key.relative_display(&cwd),
                id: record.id,
                exports: record.exports.named().to_vec(),
                has_default_export: record.exports.has_default(),
                original_size: record.original_size(),
            })
            .collect::<Vec<_>>();

        info!(
            modules = modules.len(),
            bytes = code.len(),
            "bundle assembled"
        );

        Ok(BundleResult {
            code,
            modules,
            output: self.output,
        })
    }
}

/// Per-module metadata surfaced to callers (CLI summary, plugins' host).
#[derive(Debug, Clone)]
pub struct ModuleMeta {
    /// Working-directory relative key, `./`-prefixed.
    pub key: String,
    pub id: u32,
    pub exports: Vec<String>,
    pub has_default_export: bool,
    pub original_size: usize,
}

/// The outcome of a successful bundle call.
#[derive(Debug)]
pub struct BundleResult {
    /// The final bundle text, after all plugin hooks.
    pub code: String,
    /// Module metadata in discovery order.
    pub modules: Vec<ModuleMeta>,
    output: PathBuf,
}

impl BundleResult {
    /// The configured output path.
    pub fn output_path(&self) -> &Path {
        &self.output
    }

    /// Write the bundle to the configured output path. Returns the
    /// normalized path actually written.
    pub fn write(&self) -> Result<PathBuf> {
        self.write_to(&self.output)
    }

    /// Write the bundle to an explicit path.
    pub fn write_to(&self, path: &Path) -> Result<PathBuf> {
        write_atomic(path, &self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_entry_is_rejected() {
        let err = BundleOptions::new("").validate().unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn default_output_path() {
        let options = BundleOptions::new("src/main.js");
        assert_eq!(options.output, PathBuf::from("dist/bundle.js"));
    }
}

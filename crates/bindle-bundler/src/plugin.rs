//! Plugin host.
//!
//! A plugin exposes any subset of three hook phases; each defaults to the
//! identity transform. Plugins run strictly in configured order with each
//! hook awaited before the next, so composition is deterministic. Hook
//! failures surface as [`Error::Plugin`] wrapping the plugin name and
//! phase.

use std::sync::Arc;

use async_trait::async_trait;

use bindle_graph::{ExportSet, ModuleRecord};

use crate::{Error, Result};

/// Shared handle to a plugin instance.
pub type SharedPlugin = Arc<dyn Plugin>;

/// Module metadata exposed to transform hooks.
#[derive(Debug, Clone)]
pub struct ModuleInfo {
    /// The module's key in its emitted form (working-directory relative,
    /// `./`-prefixed).
    pub key: String,
    pub id: u32,
    pub exports: ExportSet,
}

impl ModuleInfo {
    pub fn for_record(record: &ModuleRecord, cwd: &std::path::Path) -> Self {
        Self {
            key: record.key.relative_display(cwd),
            id: record.id,
            exports: record.exports.clone(),
        }
    }
}

/// A bundling plugin.
///
/// `pre_transform` sees a module's original source text before edits are
/// applied. Edit coordinates refer to that original text, so a
/// `pre_transform` hook must not shift bytes inside import/export
/// declaration spans; rewrites outside those spans are safe. This offset
/// contract is part of the public plugin interface.
#[async_trait]
pub trait Plugin: Send + Sync {
    /// Name reported in diagnostics and error messages.
    fn name(&self) -> &str;

    /// Runs over a module's source text before edits are applied.
    async fn pre_transform(&self, code: String, _module: &ModuleInfo) -> anyhow::Result<String> {
        Ok(code)
    }

    /// Runs over a module's rewritten body, after edits and trailing
    /// export assignments.
    async fn post_transform(&self, code: String, _module: &ModuleInfo) -> anyhow::Result<String> {
        Ok(code)
    }

    /// Runs once over the assembled bundle text.
    async fn bundle(&self, code: String) -> anyhow::Result<String> {
        Ok(code)
    }
}

/// Applies plugins in configured order, awaiting each hook.
#[derive(Default)]
pub struct PluginDriver {
    plugins: Vec<SharedPlugin>,
}

impl PluginDriver {
    pub fn new(plugins: Vec<SharedPlugin>) -> Self {
        Self { plugins }
    }

    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }

    pub async fn pre_transform(&self, mut code: String, module: &ModuleInfo) -> Result<String> {
        for plugin in &self.plugins {
            code = plugin
                .pre_transform(code, module)
                .await
                .map_err(|err| hook_error(plugin.as_ref(), "preTransform", err))?;
        }
        Ok(code)
    }

    pub async fn post_transform(&self, mut code: String, module: &ModuleInfo) -> Result<String> {
        for plugin in &self.plugins {
            code = plugin
                .post_transform(code, module)
                .await
                .map_err(|err| hook_error(plugin.as_ref(), "postTransform", err))?;
        }
        Ok(code)
    }

    pub async fn bundle(&self, mut code: String) -> Result<String> {
        for plugin in &self.plugins {
            code = plugin
                .bundle(code)
                .await
                .map_err(|err| hook_error(plugin.as_ref(), "bundle", err))?;
        }
        Ok(code)
    }
}

fn hook_error(plugin: &dyn Plugin, phase: &'static str, err: anyhow::Error) -> Error {
    Error::Plugin {
        plugin: plugin.name().to_string(),
        phase,
        message: err.to_string(),
    }
}

/// Built-in plugin that prepends a comment banner to the bundle.
pub struct BannerPlugin {
    banner: String,
}

impl BannerPlugin {
    pub fn new(banner: impl Into<String>) -> Self {
        Self {
            banner: banner.into(),
        }
    }
}

#[async_trait]
impl Plugin for BannerPlugin {
    fn name(&self) -> &str {
        "banner"
    }

    async fn bundle(&self, code: String) -> anyhow::Result<String> {
        Ok(format!("{}\n{}", self.banner, code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Tag(&'static str);

    #[async_trait]
    impl Plugin for Tag {
        fn name(&self) -> &str {
            self.0
        }

        async fn post_transform(
            &self,
            code: String,
            _module: &ModuleInfo,
        ) -> anyhow::Result<String> {
            Ok(format!("{code}[{}]", self.0))
        }

        async fn bundle(&self, code: String) -> anyhow::Result<String> {
            Ok(format!("{code}<{}>", self.0))
        }
    }

    struct Failing;

    #[async_trait]
    impl Plugin for Failing {
        fn name(&self) -> &str {
            "failing"
        }

        async fn bundle(&self, _code: String) -> anyhow::Result<String> {
            anyhow::bail!("boom")
        }
    }

    fn module_info() -> ModuleInfo {
        ModuleInfo {
            key: "./a.js".to_string(),
            id: 0,
            exports: ExportSet::new(),
        }
    }

    #[tokio::test]
    async fn hooks_compose_in_configured_order() {
        let driver = PluginDriver::new(vec![Arc::new(Tag("p1")), Arc::new(Tag("p2"))]);
        let out = driver
            .post_transform("x".to_string(), &module_info())
            .await
            .unwrap();
        assert_eq!(out, "x[p1][p2]");

        let out = driver.bundle("y".to_string()).await.unwrap();
        assert_eq!(out, "y<p1><p2>");
    }

    #[tokio::test]
    async fn hook_failure_carries_plugin_and_phase() {
        let driver = PluginDriver::new(vec![Arc::new(Failing)]);
        let err = driver.bundle(String::new()).await.unwrap_err();
        match err {
            Error::Plugin {
                plugin, phase, ..
            } => {
                assert_eq!(plugin, "failing");
                assert_eq!(phase, "bundle");
            }
            other => panic!("expected plugin error, got {other}"),
        }
    }

    #[tokio::test]
    async fn banner_plugin_prepends() {
        let plugin = BannerPlugin::new("/* hello */");
        let out = plugin.bundle("code".to_string()).await.unwrap();
        assert!(out.starts_with("/* hello */\n"));
    }
}

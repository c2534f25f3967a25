//! JSON configuration loading.
//!
//! The config file is plain JSON (`bindle.config.json` by default).
//! `entry` is required, `output` defaults to `dist/bundle.js`, and the
//! optional `banner` key wires up the built-in banner plugin. Unknown
//! keys are ignored.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Deserialize;

use bindle_bundler::{BannerPlugin, BundleOptions};

use crate::error::{ConfigError, Result};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BundlerConfig {
    /// Entry source file, resolved relative to the working directory.
    pub entry: Option<PathBuf>,
    /// Output bundle path.
    pub output: Option<PathBuf>,
    /// Comment banner prepended to the bundle.
    pub banner: Option<String>,
}

impl BundlerConfig {
    /// Load and parse the config file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()).into());
        }
        let text = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        let config = serde_json::from_str(&text).map_err(|source| ConfigError::InvalidJson {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(config)
    }

    /// Convert the config into bundle options, validating required
    /// fields.
    pub fn into_options(self) -> Result<BundleOptions> {
        let entry = self.entry.ok_or_else(|| ConfigError::MissingField {
            field: "entry".to_string(),
            hint: "set \"entry\" to the path of your entry source file".to_string(),
        })?;

        let mut options = BundleOptions::new(entry);
        if let Some(output) = self.output {
            options = options.output(output);
        }
        if let Some(banner) = self.banner {
            options = options.plugin(Arc::new(BannerPlugin::new(banner)));
        }
        Ok(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;

    fn write_config(content: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bindle.config.json");
        std::fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[test]
    fn loads_minimal_config() {
        let (_dir, path) = write_config(r#"{ "entry": "src/main.js" }"#);
        let config = BundlerConfig::load(&path).unwrap();
        assert_eq!(config.entry.as_deref(), Some(Path::new("src/main.js")));
        assert!(config.output.is_none());
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let (_dir, path) =
            write_config(r#"{ "entry": "main.js", "sourceMaps": true, "watch": false }"#);
        assert!(BundlerConfig::load(&path).is_ok());
    }

    #[test]
    fn missing_file_is_reported() {
        let err = BundlerConfig::load(Path::new("/nonexistent/bindle.config.json")).unwrap_err();
        assert!(matches!(
            err,
            CliError::Config(ConfigError::NotFound(_))
        ));
    }

    #[test]
    fn invalid_json_is_reported() {
        let (_dir, path) = write_config("{ entry: nope }");
        let err = BundlerConfig::load(&path).unwrap_err();
        assert!(matches!(
            err,
            CliError::Config(ConfigError::InvalidJson { .. })
        ));
    }

    #[test]
    fn missing_entry_is_reported() {
        let config = BundlerConfig::default();
        let err = config.into_options().unwrap_err();
        assert!(matches!(
            err,
            CliError::Config(ConfigError::MissingField { .. })
        ));
    }
}

//! Shared test utilities for bindle-bundler integration tests.

#![allow(dead_code)]

use std::path::Path;

use tempfile::TempDir;

use bindle_bundler::{BundleOptions, BundleResult};

/// A temporary project directory populated with source files.
pub struct Fixture {
    dir: TempDir,
}

impl Fixture {
    pub fn new(files: &[(&str, &str)]) -> Self {
        let dir = tempfile::tempdir().expect("create tempdir");
        for (name, content) in files {
            let path = dir.path().join(name);
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent).expect("create fixture dirs");
            }
            std::fs::write(path, content).expect("write fixture file");
        }
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Bundle options rooted at this fixture directory.
    pub fn options(&self, entry: &str) -> BundleOptions {
        BundleOptions::new(entry).cwd(self.path())
    }

    /// Bundle with default options and no plugins.
    pub async fn bundle(&self, entry: &str) -> bindle_bundler::Result<BundleResult> {
        self.options(entry).bundle().await
    }
}

/// Assert that the bundle text contains a substring, with a readable
/// preview on failure.
pub fn assert_bundle_contains(result: &BundleResult, substring: &str) {
    assert!(
        result.code.contains(substring),
        "expected bundle to contain '{}'.\nBundle preview (first 800 chars):\n{}",
        substring,
        &result.code[..result.code.len().min(800)]
    );
}

/// Assert that `earlier` occurs before `later` in the bundle text.
pub fn assert_bundle_order(result: &BundleResult, earlier: &str, later: &str) {
    let a = result
        .code
        .find(earlier)
        .unwrap_or_else(|| panic!("bundle does not contain '{earlier}'"));
    let b = result
        .code
        .find(later)
        .unwrap_or_else(|| panic!("bundle does not contain '{later}'"));
    assert!(a < b, "expected '{earlier}' before '{later}'");
}

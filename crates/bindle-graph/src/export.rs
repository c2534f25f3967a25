use serde::{Deserialize, Serialize};

/// The exports of one module as seen by its consumers: the named export
/// list in declaration order plus an optional default-export marker.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportSet {
    named: Vec<String>,
    has_default: bool,
}

impl ExportSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a named export. Names are kept in first-declaration order
    /// and recorded at most once.
    pub fn add_named(&mut self, name: impl Into<String>) {
        let name = name.into();
        if !self.named.iter().any(|n| *n == name) {
            self.named.push(name);
        }
    }

    pub fn mark_default(&mut self) {
        self.has_default = true;
    }

    pub fn has_default(&self) -> bool {
        self.has_default
    }

    pub fn named(&self) -> &[String] {
        &self.named
    }

    pub fn contains(&self, name: &str) -> bool {
        self.named.iter().any(|n| n == name)
    }

    pub fn is_empty(&self) -> bool {
        self.named.is_empty() && !self.has_default
    }
}

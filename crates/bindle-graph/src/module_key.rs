use std::fmt;
use std::path::{Path, PathBuf};

use path_clean::PathClean;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error constructing a [`ModuleKey`].
#[derive(Debug, Error)]
pub enum ModuleKeyError {
    #[error("module key must be an absolute path, got '{}'", .0.display())]
    NotAbsolute(PathBuf),
}

/// Canonical module identity: an absolute, `.js`-suffixed filesystem path.
///
/// Every graph lookup uses this key, so two specifiers that resolve to the
/// same path always denote the same module. The emitted bundle refers to
/// modules by [`ModuleKey::relative_display`], the working-directory
/// relative form prefixed with `./`; edits and the module table go through
/// the same function so lookups in the emitted table always agree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModuleKey(PathBuf);

impl ModuleKey {
    /// Create a key from an absolute path. The path is normalized
    /// (`.` and `..` components resolved) but not touched on disk.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self, ModuleKeyError> {
        let path = path.into().clean();
        if !path.is_absolute() {
            return Err(ModuleKeyError::NotAbsolute(path));
        }
        Ok(Self(path))
    }

    /// Create a key for an entry file given relative to a working directory,
    /// appending the `.js` suffix when missing so entry keys obey the same
    /// canonical form as resolved import keys.
    pub fn for_entry(cwd: &Path, entry: &Path) -> Result<Self, ModuleKeyError> {
        let absolute = if entry.is_absolute() {
            entry.to_path_buf()
        } else {
            cwd.join(entry)
        };
        Self::new(ensure_js_suffix(absolute))
    }

    /// The underlying absolute path.
    pub fn path(&self) -> &Path {
        &self.0
    }

    /// The form used in emitted code and logs: relative to `cwd` and
    /// prefixed with `./`, with `/` separators. Keys outside `cwd` fall
    /// back to the absolute path, still rendered with `/` separators so
    /// the emitted table stays consistent on every platform.
    pub fn relative_display(&self, cwd: &Path) -> String {
        match self.0.strip_prefix(cwd) {
            Ok(rel) => format!("./{}", slashed(rel)),
            Err(_) => format!("/{}", slashed(&self.0)),
        }
    }
}

impl fmt::Display for ModuleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

/// Append `.js` when the path does not already end with it.
pub(crate) fn ensure_js_suffix(path: PathBuf) -> PathBuf {
    if path.extension().is_some_and(|ext| ext == "js") {
        path
    } else {
        let mut s = path.into_os_string();
        s.push(".js");
        PathBuf::from(s)
    }
}

fn slashed(path: &Path) -> String {
    path.components()
        .filter_map(|c| match c {
            std::path::Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_relative_paths() {
        let err = ModuleKey::new("src/a.js").unwrap_err();
        assert!(matches!(err, ModuleKeyError::NotAbsolute(_)));
    }

    #[test]
    fn normalizes_dot_components() {
        let key = ModuleKey::new("/proj/src/../src/./a.js").unwrap();
        assert_eq!(key.path(), Path::new("/proj/src/a.js"));
    }

    #[test]
    fn relative_display_under_cwd() {
        let key = ModuleKey::new("/proj/src/a.js").unwrap();
        assert_eq!(key.relative_display(Path::new("/proj")), "./src/a.js");
    }

    #[test]
    fn relative_display_outside_cwd_is_absolute() {
        let key = ModuleKey::new("/elsewhere/a.js").unwrap();
        assert_eq!(key.relative_display(Path::new("/proj")), "/elsewhere/a.js");
    }

    #[test]
    fn entry_key_gets_js_suffix() {
        let key = ModuleKey::for_entry(Path::new("/proj"), Path::new("src/main")).unwrap();
        assert_eq!(key.path(), Path::new("/proj/src/main.js"));
    }

    #[test]
    fn entry_key_keeps_existing_suffix() {
        let key = ModuleKey::for_entry(Path::new("/proj"), Path::new("src/main.js")).unwrap();
        assert_eq!(key.path(), Path::new("/proj/src/main.js"));
    }
}

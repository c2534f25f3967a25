//! Pure specifier classification and path resolution.
//!
//! No directory lookup or `index.js` expansion is performed: a local
//! specifier maps to exactly one candidate file, with `.js` appended when
//! the specifier carries no such suffix.

use std::path::PathBuf;

use thiserror::Error;

use crate::module_key::{ensure_js_suffix, ModuleKey, ModuleKeyError};

/// Whether a specifier names a file in this project or a package left to
/// the host module system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecifierKind {
    Local,
    External,
}

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("cannot resolve '{specifier}': importer '{importer}' has no parent directory")]
    NoParentDirectory {
        specifier: String,
        importer: PathBuf,
    },

    #[error("cannot resolve '{specifier}': {source}")]
    InvalidKey {
        specifier: String,
        #[source]
        source: ModuleKeyError,
    },
}

/// Classify an import specifier. `./`, `../` and `/` prefixes mark local
/// files; everything else is external.
pub fn classify(specifier: &str) -> SpecifierKind {
    if specifier.starts_with("./") || specifier.starts_with("../") || specifier.starts_with('/') {
        SpecifierKind::Local
    } else {
        SpecifierKind::External
    }
}

/// Resolve a local specifier against the importing module's key.
///
/// Joins the importer's directory with the specifier, appends `.js` when
/// no such suffix is present, and canonicalizes the result. Absolute
/// specifiers replace the directory component entirely.
pub fn resolve(importer: &ModuleKey, specifier: &str) -> Result<ModuleKey, ResolveError> {
    let dir = importer
        .path()
        .parent()
        .ok_or_else(|| ResolveError::NoParentDirectory {
            specifier: specifier.to_string(),
            importer: importer.path().to_path_buf(),
        })?;

    let joined = ensure_js_suffix(dir.join(specifier));
    ModuleKey::new(joined).map_err(|source| ResolveError::InvalidKey {
        specifier: specifier.to_string(),
        source,
    })
}

/// Convenience wrapper: `None` for external specifiers, `Some(resolve(..))`
/// for local ones.
pub fn resolve_local(
    importer: &ModuleKey,
    specifier: &str,
) -> Option<Result<ModuleKey, ResolveError>> {
    match classify(specifier) {
        SpecifierKind::Local => Some(resolve(importer, specifier)),
        SpecifierKind::External => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(path: &str) -> ModuleKey {
        ModuleKey::new(path).unwrap()
    }

    #[test]
    fn classify_local_prefixes() {
        assert_eq!(classify("./a.js"), SpecifierKind::Local);
        assert_eq!(classify("../up/a.js"), SpecifierKind::Local);
        assert_eq!(classify("/abs/a.js"), SpecifierKind::Local);
    }

    #[test]
    fn classify_external() {
        assert_eq!(classify("react"), SpecifierKind::External);
        assert_eq!(classify("@scope/pkg"), SpecifierKind::External);
        assert_eq!(classify(".hidden"), SpecifierKind::External);
    }

    #[test]
    fn resolve_sibling() {
        let resolved = resolve(&key("/proj/src/main.js"), "./util.js").unwrap();
        assert_eq!(resolved, key("/proj/src/util.js"));
    }

    #[test]
    fn resolve_appends_js_suffix() {
        let resolved = resolve(&key("/proj/src/main.js"), "./util").unwrap();
        assert_eq!(resolved, key("/proj/src/util.js"));
    }

    #[test]
    fn resolve_parent_traversal() {
        let resolved = resolve(&key("/proj/src/deep/main.js"), "../util.js").unwrap();
        assert_eq!(resolved, key("/proj/src/util.js"));
    }

    #[test]
    fn resolve_absolute_specifier() {
        let resolved = resolve(&key("/proj/src/main.js"), "/proj/lib/x.js").unwrap();
        assert_eq!(resolved, key("/proj/lib/x.js"));
    }

    #[test]
    fn two_specifiers_one_key() {
        let a = resolve(&key("/proj/src/main.js"), "./util.js").unwrap();
        let b = resolve(&key("/proj/src/deep/other.js"), "../util").unwrap();
        assert_eq!(a, b);
    }
}

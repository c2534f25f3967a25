use serde::{Deserialize, Serialize};

use crate::module_key::ModuleKey;
use crate::span::SourceSpan;

/// One binding introduced by an import declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImportSpecifier {
    /// `import { imported } from …` / `import { imported as local } from …`
    Named { imported: String, local: String },
    /// `import local from …`
    Default { local: String },
    /// `import * as local from …`
    Namespace { local: String },
}

impl ImportSpecifier {
    /// The name bound in the importing module.
    pub fn local(&self) -> &str {
        match self {
            Self::Named { local, .. } | Self::Default { local } | Self::Namespace { local } => {
                local
            }
        }
    }
}

/// An import dependency as recorded by the analyzer.
///
/// `resolved` is populated for local specifiers only; external specifiers
/// are left to the host module system and contribute no graph edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Import {
    /// Specifier string exactly as written in the source.
    pub source: String,
    /// Canonical key of the target module, when the specifier is local
    /// and resolution succeeded.
    pub resolved: Option<ModuleKey>,
    pub specifiers: Vec<ImportSpecifier>,
    /// Span of the originating declaration in the importing module.
    pub span: SourceSpan,
}

impl Import {
    /// True when this import has no bindings (`import './x.js'` or a
    /// re-export dependency), evaluated purely for its side effects.
    pub fn is_side_effect_only(&self) -> bool {
        self.specifiers.is_empty()
    }
}

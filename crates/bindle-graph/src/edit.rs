use serde::{Deserialize, Serialize};

/// A byte-range substitution over a module's original source text.
///
/// `start` and `end` are offsets into the original text (`start <= end`);
/// `replacement` is substituted for the covered range. Edits within one
/// module never overlap and are applied in descending start order so that
/// earlier offsets stay valid while later ranges are rewritten.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edit {
    pub start: u32,
    pub end: u32,
    pub replacement: String,
}

impl Edit {
    pub fn new(start: u32, end: u32, replacement: impl Into<String>) -> Self {
        debug_assert!(start <= end);
        Self {
            start,
            end,
            replacement: replacement.into(),
        }
    }

    /// True when the two edits cover intersecting byte ranges.
    pub fn overlaps(&self, other: &Edit) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// Apply edits to `source` in descending start order.
///
/// The caller guarantees the edits are pairwise disjoint; use
/// [`edits_disjoint`] to validate a freshly built list.
pub fn apply_edits(source: &str, edits: &[Edit]) -> String {
    let mut ordered: Vec<&Edit> = edits.iter().collect();
    ordered.sort_by(|a, b| b.start.cmp(&a.start));

    let mut out = source.to_string();
    for edit in ordered {
        out.replace_range(edit.start as usize..edit.end as usize, &edit.replacement);
    }
    out
}

/// Check that no two edits cover intersecting ranges.
pub fn edits_disjoint(edits: &[Edit]) -> bool {
    let mut ordered: Vec<&Edit> = edits.iter().collect();
    ordered.sort_by_key(|e| e.start);
    ordered.windows(2).all(|w| !w[0].overlaps(w[1]))
}

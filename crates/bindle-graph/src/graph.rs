use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::module::ModuleRecord;
use crate::module_key::ModuleKey;

#[derive(Debug, Error)]
pub enum GraphError {
    #[error("module '{0}' is already present in the graph")]
    DuplicateKey(ModuleKey),

    #[error("module '{key}' has id {actual}, expected next id {expected}")]
    NonContiguousId {
        key: ModuleKey,
        actual: u32,
        expected: u32,
    },
}

/// The module graph: a mapping from canonical key to module record.
///
/// Records are stored in discovery order and ids are contiguous from 0,
/// so iteration order and id order coincide. Cycles are allowed; each key
/// is recorded at most once.
#[derive(Debug, Default)]
pub struct ModuleGraph {
    records: Vec<ModuleRecord>,
    index: FxHashMap<ModuleKey, usize>,
}

impl ModuleGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// The id the next inserted record must carry.
    pub fn next_id(&self) -> u32 {
        self.records.len() as u32
    }

    /// Insert a record under its canonical key. Fails on duplicate keys
    /// and on ids that break the contiguous discovery order.
    pub fn insert(&mut self, record: ModuleRecord) -> Result<(), GraphError> {
        if self.index.contains_key(&record.key) {
            return Err(GraphError::DuplicateKey(record.key.clone()));
        }
        let expected = self.next_id();
        if record.id != expected {
            return Err(GraphError::NonContiguousId {
                key: record.key.clone(),
                actual: record.id,
                expected,
            });
        }
        self.index.insert(record.key.clone(), self.records.len());
        self.records.push(record);
        Ok(())
    }

    pub fn contains(&self, key: &ModuleKey) -> bool {
        self.index.contains_key(key)
    }

    pub fn get(&self, key: &ModuleKey) -> Option<&ModuleRecord> {
        self.index.get(key).map(|&i| &self.records[i])
    }

    /// Records in discovery order.
    pub fn modules(&self) -> impl Iterator<Item = &ModuleRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

//! Dataset model and seed-file format.

use crate::LoadError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A single flat document: field name to scalar value.
///
/// The seed datasets contain only strings, numbers, and booleans; nested
/// values are carried through as-is but are never usable as identifiers.
pub type Record = serde_json::Map<String, serde_json::Value>;

/// A named target collection plus the field used as each record's document
/// key and the ordered records to write.
///
/// Records are written in sequence order. Identifier values are expected to
/// be unique within a dataset; duplicates are not an error, the later record
/// simply replaces the earlier one (upsert semantics).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    /// Target collection (SurrealDB table) name.
    pub collection: String,
    /// Name of the field holding each record's unique identifier.
    pub id_field: String,
    /// Records to write, in order.
    pub records: Vec<Record>,
}

impl Dataset {
    /// Total number of records in this dataset.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether this dataset has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// The seed-file format: an ordered list of datasets.
///
/// ```json
/// {
///   "datasets": [
///     {"collection": "users", "id_field": "user_id", "records": [...]}
///   ]
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedData {
    /// Datasets in the order they are to be loaded.
    pub datasets: Vec<Dataset>,
}

impl SeedData {
    /// Parse seed data from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, LoadError> {
        serde_json::from_str(json).map_err(|e| LoadError::SeedFile(e.to_string()))
    }

    /// Load seed data from a JSON file on disk.
    pub fn from_file(path: &Path) -> Result<Self, LoadError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| LoadError::SeedFile(format!("failed to read {}: {e}", path.display())))?;
        Self::from_json_str(&contents)
    }

    /// Total record count across all datasets.
    pub fn record_count(&self) -> usize {
        self.datasets.iter().map(Dataset::len).sum()
    }
}

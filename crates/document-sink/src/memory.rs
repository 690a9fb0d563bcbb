//! In-memory `DocumentSink` for tests.

use crate::DocumentSink;
use seed_core::{LoadError, Record};
use std::collections::HashMap;
use std::sync::Mutex;

/// A `DocumentSink` holding documents in a process-local map, keyed by
/// `(collection, document id)`.
///
/// Used by tests to observe exactly what the loader wrote without a running
/// SurrealDB server.
#[derive(Debug, Default)]
pub struct MemorySink {
    documents: Mutex<HashMap<(String, String), Record>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// The stored document at `collection/id`, if any.
    pub fn get(&self, collection: &str, id: &str) -> Option<Record> {
        self.documents
            .lock()
            .unwrap()
            .get(&(collection.to_string(), id.to_string()))
            .cloned()
    }

    /// Total number of stored documents across all collections.
    pub fn len(&self) -> usize {
        self.documents.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of stored documents in one collection.
    pub fn collection_len(&self, collection: &str) -> usize {
        self.documents
            .lock()
            .unwrap()
            .keys()
            .filter(|(c, _)| c == collection)
            .count()
    }
}

#[async_trait::async_trait]
impl DocumentSink for MemorySink {
    async fn put(&self, collection: &str, id: &str, record: &Record) -> Result<(), LoadError> {
        self.documents
            .lock()
            .unwrap()
            .insert((collection.to_string(), id.to_string()), record.clone());
        Ok(())
    }
}

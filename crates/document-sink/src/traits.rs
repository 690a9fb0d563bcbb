//! The `DocumentSink` trait.

use seed_core::{LoadError, Record};

/// Trait for writing documents to a keyed store.
///
/// This is the loader's only dependency on the backing store: one put
/// operation with full-replace semantics. The loader is generic over this
/// trait so tests can substitute [`crate::MemorySink`] for the real
/// SurrealDB sink.
#[async_trait::async_trait]
pub trait DocumentSink: Send + Sync {
    /// Create the document at `collection/id`, or fully replace it if one
    /// already exists. Fields present in an earlier version of the document
    /// and absent from `record` are dropped, not merged.
    async fn put(&self, collection: &str, id: &str, record: &Record) -> Result<(), LoadError>;
}

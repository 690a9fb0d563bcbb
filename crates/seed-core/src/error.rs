//! Error types shared across the surreal-seed workspace.

use thiserror::Error;

/// Errors that can occur while loading seed data into the store.
///
/// None of these are retried internally. The first occurrence aborts the
/// remainder of the load and surfaces unchanged at the process boundary.
#[derive(Error, Debug)]
pub enum LoadError {
    /// Could not obtain an authenticated store handle.
    #[error("credential error: {0}")]
    Credential(String),

    /// A record lacks the identifier field its dataset declares.
    #[error("record {index} in dataset '{collection}' is missing identifier field '{id_field}'")]
    MissingIdentifier {
        /// Target collection of the offending dataset.
        collection: String,
        /// The identifier field the dataset declares.
        id_field: String,
        /// Zero-based position of the offending record in the dataset.
        index: usize,
    },

    /// The store rejected a write, or the document key was malformed.
    #[error("failed to write '{collection}/{id}': {message}")]
    Write {
        /// Target collection of the failed write.
        collection: String,
        /// Document id of the failed write.
        id: String,
        /// Store-reported reason.
        message: String,
    },

    /// The seed file could not be read or parsed.
    #[error("invalid seed file: {0}")]
    SeedFile(String),
}

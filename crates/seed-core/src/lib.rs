//! Core types for the surreal-seed bulk loader.
//!
//! Defines the dataset model (a named collection plus the field used as each
//! record's document key), the seed-file format, the error taxonomy shared by
//! every crate in the workspace, and document-key canonicalization.

mod error;
mod key;
mod types;

pub use error::LoadError;
pub use key::document_key;
pub use types::{Dataset, Record, SeedData};

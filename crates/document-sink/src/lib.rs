//! Document store sink abstraction for surreal-seed.
//!
//! Provides the `DocumentSink` trait the loader writes through, the SurrealDB
//! implementation of it, the credentialed connection helper, and an in-memory
//! sink for tests.

mod connect;
mod memory;
mod surreal;
mod traits;

pub use connect::{connect, SurrealOpts};
pub use memory::MemorySink;
pub use surreal::SurrealSink;
pub use traits::DocumentSink;

//! SurrealSeed Library
//!
//! A library for bulk-upserting named datasets of flat records into SurrealDB,
//! one document per record, keyed by a per-dataset identifier field.
//!
//! # Features
//!
//! - Idempotent loads: every write is a full-document replace, so re-running
//!   a load leaves the store in the same state
//! - Abort-on-first-error: a failed write stops the remaining records and
//!   datasets, and the error surfaces unchanged at the process boundary
//! - Injectable datasets: the embedded online-store sample data is the
//!   default payload; any seed file of the same shape can be supplied
//! - Injectable sink: the loader is generic over [`document_sink::DocumentSink`],
//!   so tests run against an in-memory sink
//!
//! # CLI Usage
//!
//! ```bash
//! # Seed the embedded sample data into a local SurrealDB
//! surreal-seed
//!
//! # Seed a custom file into a specific namespace/database
//! surreal-seed --seed-file my_seed.json --to-namespace shop --to-database prod
//! ```

use clap::Parser;
use seed_core::{LoadError, SeedData};
use std::path::PathBuf;

pub mod loader;

pub use document_sink::{connect, DocumentSink, MemorySink, SurrealOpts, SurrealSink};
pub use seed_core::{document_key, Dataset, Record};

/// The embedded online-store sample data: users, categories, products, carts,
/// cart_items, orders, order_items, reviews, and refunds.
const EMBEDDED_SEED: &str = include_str!("../data/store_seed.json");

/// Command-line and environment configuration.
///
/// Every option has a default, so the binary runs with no arguments.
#[derive(Parser, Clone, Debug)]
#[command(name = "surreal-seed")]
#[command(about = "Seed sample online-store data into SurrealDB")]
pub struct SeedOpts {
    /// SurrealDB endpoint URL
    #[arg(
        long,
        default_value = "ws://localhost:8000",
        env = "SURREAL_ENDPOINT"
    )]
    pub surreal_endpoint: String,

    /// SurrealDB username
    #[arg(long, default_value = "root", env = "SURREAL_USERNAME")]
    pub surreal_username: String,

    /// SurrealDB password
    #[arg(long, default_value = "root", env = "SURREAL_PASSWORD")]
    pub surreal_password: String,

    /// Target SurrealDB namespace
    #[arg(long, default_value = "store", env = "SURREAL_NAMESPACE")]
    pub to_namespace: String,

    /// Target SurrealDB database
    #[arg(long, default_value = "store", env = "SURREAL_DATABASE")]
    pub to_database: String,

    /// Path to a seed file (defaults to the embedded sample data)
    #[arg(long, env = "SEED_FILE")]
    pub seed_file: Option<PathBuf>,

    /// Parse and report the seed data without writing to the store
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,
}

impl SeedOpts {
    /// Connection options for [`document_sink::connect`].
    pub fn surreal_opts(&self) -> SurrealOpts {
        SurrealOpts {
            endpoint: self.surreal_endpoint.clone(),
            username: self.surreal_username.clone(),
            password: self.surreal_password.clone(),
        }
    }
}

/// The embedded sample datasets, in their declared load order.
pub fn embedded_seed() -> Result<SeedData, LoadError> {
    SeedData::from_json_str(EMBEDDED_SEED)
}

/// Resolve the seed data for a run: the file named by `--seed-file` /
/// `SEED_FILE` when given, otherwise the embedded sample data.
pub fn load_seed_data(opts: &SeedOpts) -> Result<SeedData, LoadError> {
    match &opts.seed_file {
        Some(path) => SeedData::from_file(path),
        None => embedded_seed(),
    }
}

//! Command-line interface for surreal-seed
//!
//! # Usage Examples
//!
//! ```bash
//! # Seed the embedded sample data into a local SurrealDB
//! surreal-seed
//!
//! # Point at a different server and namespace
//! surreal-seed \
//!   --surreal-endpoint ws://db.internal:8000 \
//!   --to-namespace shop --to-database prod
//!
//! # Seed a custom file, or validate it without writing
//! surreal-seed --seed-file my_seed.json
//! surreal-seed --seed-file my_seed.json --dry-run
//! ```
//!
//! All options can also be supplied via environment variables
//! (`SURREAL_ENDPOINT`, `SURREAL_USERNAME`, `SURREAL_PASSWORD`,
//! `SURREAL_NAMESPACE`, `SURREAL_DATABASE`, `SEED_FILE`).

use clap::Parser;
use surreal_seed::SeedOpts;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = run().await {
        eprintln!("Failed to load data: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

async fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let opts = SeedOpts::parse();

    let seed = surreal_seed::load_seed_data(&opts)?;
    tracing::info!(
        "Loaded {} datasets ({} records)",
        seed.datasets.len(),
        seed.record_count()
    );

    if opts.dry_run {
        for dataset in &seed.datasets {
            println!(
                "Would upload {} documents to collection '{}'.",
                dataset.len(),
                dataset.collection
            );
        }
        return Ok(());
    }

    let sink = surreal_seed::connect(
        &opts.surreal_opts(),
        &opts.to_namespace,
        &opts.to_database,
    )
    .await?;

    let total = surreal_seed::loader::load_all(&sink, &seed.datasets).await?;
    tracing::info!("Seed complete: {total} records written");

    Ok(())
}

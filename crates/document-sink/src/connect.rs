//! SurrealDB connection and authentication.

use crate::SurrealSink;
use seed_core::LoadError;

/// SurrealDB connection options.
#[derive(Clone, Debug)]
pub struct SurrealOpts {
    /// Endpoint URL. `http(s)://` schemes are rewritten to `ws(s)://`.
    pub endpoint: String,
    /// Root username.
    pub username: String,
    /// Root password.
    pub password: String,
}

/// Connect to SurrealDB, authenticate, and select the target namespace and
/// database.
///
/// Any failure here is a [`LoadError::Credential`]: it is fatal and never
/// retried. Local engines (`memory`, `mem://`) have no authentication step
/// and skip the signin.
pub async fn connect(
    opts: &SurrealOpts,
    ns: &str,
    db: &str,
) -> Result<SurrealSink, LoadError> {
    // Convert http:// to ws:// for WebSocket connection
    let endpoint = opts
        .endpoint
        .replace("http://", "ws://")
        .replace("https://", "wss://");

    tracing::debug!(
        "Connecting to SurrealDB at {} (namespace: {}, database: {})",
        endpoint,
        ns,
        db
    );

    let surreal = surrealdb::engine::any::connect(&endpoint)
        .await
        .map_err(|e| LoadError::Credential(format!("connection to '{endpoint}' failed: {e}")))?;

    if !is_local_engine(&endpoint) {
        let username = &opts.username;
        surreal
            .signin(surrealdb::opt::auth::Root {
                username,
                password: &opts.password,
            })
            .await
            .map_err(|e| {
                LoadError::Credential(format!("authentication failed (user: '{username}'): {e}"))
            })?;
    }

    surreal.use_ns(ns).use_db(db).await.map_err(|e| {
        LoadError::Credential(format!(
            "failed to select namespace '{ns}' / database '{db}': {e}"
        ))
    })?;

    Ok(SurrealSink::new(surreal))
}

fn is_local_engine(endpoint: &str) -> bool {
    endpoint == "memory" || endpoint.starts_with("mem://")
}

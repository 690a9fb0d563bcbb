//! SurrealDB implementation of `DocumentSink`.

use crate::DocumentSink;
use seed_core::{LoadError, Record};
use surrealdb::engine::any::Any;
use surrealdb::Surreal;

/// A `DocumentSink` backed by a SurrealDB connection.
///
/// Writes use `UPSERT ... CONTENT` with bound parameters, so each put is a
/// full-document replace at the given record id.
#[derive(Debug)]
pub struct SurrealSink {
    surreal: Surreal<Any>,
}

impl SurrealSink {
    /// Wrap an already-connected (and authenticated) SurrealDB handle.
    pub fn new(surreal: Surreal<Any>) -> Self {
        Self { surreal }
    }

    /// Access the underlying SurrealDB handle.
    pub fn inner(&self) -> &Surreal<Any> {
        &self.surreal
    }
}

#[async_trait::async_trait]
impl DocumentSink for SurrealSink {
    async fn put(&self, collection: &str, id: &str, record: &Record) -> Result<(), LoadError> {
        let record_id = surrealdb::sql::Thing::from((collection.to_string(), id.to_string()));
        let content = record_content(record);

        let write_error = |message: String| LoadError::Write {
            collection: collection.to_string(),
            id: id.to_string(),
            message,
        };

        // Parameterized query with proper variable binding to prevent injection
        let mut response = self
            .surreal
            .query("UPSERT $record_id CONTENT $content")
            .bind(("record_id", record_id.clone()))
            .bind(("content", content))
            .await
            .map_err(|e| write_error(e.to_string()))?;

        let written: Result<Vec<surrealdb::sql::Thing>, surrealdb::Error> = response.take("id");
        match written {
            Ok(ids) if ids.is_empty() => Err(write_error("store returned no record id".to_string())),
            Ok(_) => {
                tracing::trace!("Upserted record {record_id}");
                Ok(())
            }
            Err(e) => Err(write_error(e.to_string())),
        }
    }
}

/// Build the `CONTENT` value for a record.
fn record_content(record: &Record) -> surrealdb::sql::Value {
    let mut m = std::collections::BTreeMap::new();
    for (k, v) in record {
        m.insert(k.clone(), to_sql_value(v));
    }
    surrealdb::sql::Value::Object(surrealdb::sql::Object::from(m))
}

/// Convert a JSON value to its SurrealQL equivalent.
///
/// Seed records are flat scalar maps, but nested arrays and objects convert
/// structurally so unexpected input still round-trips.
fn to_sql_value(value: &serde_json::Value) -> surrealdb::sql::Value {
    match value {
        serde_json::Value::Null => surrealdb::sql::Value::Null,
        serde_json::Value::Bool(b) => (*b).into(),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i.into()
            } else {
                n.as_f64().unwrap_or_default().into()
            }
        }
        serde_json::Value::String(s) => s.clone().into(),
        serde_json::Value::Array(items) => {
            items.iter().map(to_sql_value).collect::<Vec<_>>().into()
        }
        serde_json::Value::Object(fields) => {
            let mut m = std::collections::BTreeMap::new();
            for (k, v) in fields {
                m.insert(k.clone(), to_sql_value(v));
            }
            surrealdb::sql::Value::Object(surrealdb::sql::Object::from(m))
        }
    }
}

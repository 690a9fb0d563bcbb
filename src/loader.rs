//! Bulk upsert loop and dataset driver.

use document_sink::DocumentSink;
use seed_core::{document_key, Dataset, LoadError};

/// Write every record of `dataset` to the store, in sequence order, as a
/// full-document replace under `collection/<stringified id>`.
///
/// Aborts on the first failed record and returns the error; records already
/// written stay written (there is no rollback). A record missing the
/// dataset's identifier field fails before any write is attempted for it.
/// Returns the number of records written.
pub async fn upsert_dataset<S: DocumentSink>(
    sink: &S,
    dataset: &Dataset,
) -> Result<u64, LoadError> {
    let mut written = 0u64;

    for (index, record) in dataset.records.iter().enumerate() {
        let id_value =
            record
                .get(&dataset.id_field)
                .ok_or_else(|| LoadError::MissingIdentifier {
                    collection: dataset.collection.clone(),
                    id_field: dataset.id_field.clone(),
                    index,
                })?;

        // Non-scalar identifiers cannot form a document key; treat as a
        // malformed-key write failure before touching the store.
        let id = document_key(id_value).ok_or_else(|| LoadError::Write {
            collection: dataset.collection.clone(),
            id: id_value.to_string(),
            message: format!(
                "identifier field '{}' is not a scalar value",
                dataset.id_field
            ),
        })?;

        sink.put(&dataset.collection, &id, record).await?;
        written += 1;

        tracing::debug!("Upserted {}/{}", dataset.collection, id);
    }

    Ok(written)
}

/// Load datasets in their declared order, stopping at the first failure.
///
/// Prints one progress line per completed dataset; a dataset with no printed
/// line did not complete. Returns the total number of records written.
pub async fn load_all<S: DocumentSink>(sink: &S, datasets: &[Dataset]) -> Result<u64, LoadError> {
    let mut total = 0u64;

    for dataset in datasets {
        let count = upsert_dataset(sink, dataset).await?;
        println!(
            "Uploaded {count} documents to collection '{}'.",
            dataset.collection
        );
        total += count;
    }

    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use document_sink::MemorySink;
    use serde_json::json;

    fn dataset(collection: &str, id_field: &str, records: serde_json::Value) -> Dataset {
        Dataset {
            collection: collection.to_string(),
            id_field: id_field.to_string(),
            records: records
                .as_array()
                .unwrap()
                .iter()
                .map(|r| r.as_object().unwrap().clone())
                .collect(),
        }
    }

    #[tokio::test]
    async fn test_upsert_writes_all_records() {
        let sink = MemorySink::new();
        let d = dataset(
            "users",
            "user_id",
            json!([
                {"user_id": 1, "name": "Ali"},
                {"user_id": 2, "name": "Ayşe"},
                {"user_id": 3, "name": "Mehmet"}
            ]),
        );

        let count = upsert_dataset(&sink, &d).await.unwrap();
        assert_eq!(count, 3);
        assert_eq!(sink.collection_len("users"), 3);
        assert_eq!(sink.get("users", "2").unwrap()["name"], json!("Ayşe"));
    }

    #[tokio::test]
    async fn test_duplicate_identifiers_last_write_wins() {
        let sink = MemorySink::new();
        let d = dataset(
            "items",
            "id",
            json!([
                {"id": 1, "v": "a"},
                {"id": 1, "v": "b"}
            ]),
        );

        let count = upsert_dataset(&sink, &d).await.unwrap();
        assert_eq!(count, 2);
        assert_eq!(sink.collection_len("items"), 1);
        assert_eq!(sink.get("items", "1").unwrap()["v"], json!("b"));
    }

    #[tokio::test]
    async fn test_missing_identifier_fails_before_write() {
        let sink = MemorySink::new();
        let d = dataset("users", "id", json!([{"name": "x"}]));

        let err = upsert_dataset(&sink, &d).await.unwrap_err();
        assert!(matches!(
            err,
            LoadError::MissingIdentifier { ref id_field, index: 0, .. } if id_field == "id"
        ));
        assert!(sink.is_empty());
    }

    #[tokio::test]
    async fn test_non_scalar_identifier_is_write_error() {
        let sink = MemorySink::new();
        let d = dataset("users", "id", json!([{"id": [1, 2], "name": "x"}]));

        let err = upsert_dataset(&sink, &d).await.unwrap_err();
        assert!(matches!(err, LoadError::Write { .. }));
        assert!(sink.is_empty());
    }
}

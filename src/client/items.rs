// file: src/client/items.rs
// description: per-item metadata retrieval and flattening
// reference: GET /server/api/core/items/{uuid}

use crate::client::http::DspaceClient;
use crate::client::types::{ItemResponse, MetadataEntry};
use crate::error::{HarvestError, Result};
use crate::models::{FieldValue, FlatRecord};
use reqwest::header::ACCEPT;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, warn};

pub const API_UNAVAILABLE: &str = "No se pudo acceder a la API";

/// Item as returned by the API, with metadata keyed by display label.
#[derive(Debug, Clone, Serialize)]
pub struct ItemDocument {
    pub uuid: String,
    pub api_url: String,
    pub raw: Value,
    pub translated: Vec<(String, Vec<MetadataEntry>)>,
}

impl DspaceClient {
    /// Fetches one item and flattens its metadata. An item without a
    /// `metadata` object yields a record holding only its UUID.
    pub async fn fetch_metadata(&self, uuid: &str) -> Result<FlatRecord> {
        let body = self.get_item_json(uuid).await?;
        let item: ItemResponse = serde_json::from_value(body)?;

        let mut record = FlatRecord::new(uuid);
        let Some(metadata) = item.metadata else {
            debug!("Item {} has no metadata object", uuid);
            return Ok(record);
        };

        for (key, entries) in metadata {
            let values: Vec<String> = parse_entries(uuid, &key, &entries)
                .into_iter()
                .filter_map(|entry| entry.value)
                .collect();
            record.insert(self.labels.translate(&key), FieldValue::List(values));
        }

        debug!("Item {} flattened into {} fields", uuid, record.field_count());
        Ok(record)
    }

    /// Fetches one item keeping full value entries, for inspection.
    pub async fn fetch_item(&self, uuid: &str) -> Result<ItemDocument> {
        let raw = self.get_item_json(uuid).await?;

        let translated = match raw.get("metadata").and_then(Value::as_object) {
            Some(metadata) => translate_entries(self, uuid, metadata),
            None => Vec::new(),
        };

        Ok(ItemDocument {
            uuid: uuid.to_string(),
            api_url: self.item_api_url(uuid),
            raw,
            translated,
        })
    }

    async fn get_item_json(&self, uuid: &str) -> Result<Value> {
        let url = self.item_api_url(uuid);
        debug!("GET {}", url);

        let response = self
            .http
            .get(&url)
            .header(ACCEPT, "application/json")
            .timeout(self.item_timeout)
            .send()
            .await
            .map_err(|e| HarvestError::ApiUnavailable {
                uuid: uuid.to_string(),
                message: e.to_string(),
            })?;

        if !response.status().is_success() {
            warn!("Item {} answered with status {}", uuid, response.status());
            return Err(HarvestError::ApiUnavailable {
                uuid: uuid.to_string(),
                message: API_UNAVAILABLE.to_string(),
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| HarvestError::ApiUnavailable {
                uuid: uuid.to_string(),
                message: e.to_string(),
            })
    }
}

/// Parses a field's value list entry by entry; an unreadable entry is
/// skipped without dropping its neighbours.
fn parse_entries(uuid: &str, key: &str, entries: &Value) -> Vec<MetadataEntry> {
    let Some(list) = entries.as_array() else {
        warn!("Item {}: values for {} are not a list", uuid, key);
        return Vec::new();
    };

    list.iter()
        .enumerate()
        .filter_map(|(idx, entry)| match MetadataEntry::deserialize(entry) {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                warn!("Item {}: skipping value {} of {}: {}", uuid, idx, key, e);
                None
            }
        })
        .collect()
}

fn translate_entries(
    client: &DspaceClient,
    uuid: &str,
    metadata: &Map<String, Value>,
) -> Vec<(String, Vec<MetadataEntry>)> {
    metadata
        .iter()
        .map(|(key, entries)| {
            (
                client.labels.translate(key).to_string(),
                parse_entries(uuid, key, entries),
            )
        })
        .collect()
}

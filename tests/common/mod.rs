//! Shared helpers for the integration tests: mock DSpace responses and
//! clients pointed at an `httpmock` server.

// Not every test file uses every helper.
#![allow(unused)]

use dspace_harvest::{DspaceClient, ExtractionConfig, Harvester, RepositoryConfig, TranslationTable};
use httpmock::MockServer;
use serde_json::{Value, json};
use std::sync::Arc;

pub const SEARCH_PATH: &str = "/server/api/discover/search/objects";

pub fn item_path(uuid: &str) -> String {
    format!("/server/api/core/items/{}", uuid)
}

pub fn repository_config(server: &MockServer) -> RepositoryConfig {
    let mut config = RepositoryConfig::new(server.base_url());
    config.search_timeout_secs = 1;
    config.item_timeout_secs = 1;
    config
}

pub fn client(server: &MockServer) -> DspaceClient {
    DspaceClient::new(
        &repository_config(server),
        Arc::new(TranslationTable::builtin()),
    )
    .expect("client builds against mock server")
}

pub fn harvester(server: &MockServer, workers: usize) -> Harvester {
    Harvester::new(
        client(server),
        &ExtractionConfig {
            parallel_workers: workers,
            show_progress: false,
        },
    )
}

pub fn new_uuids(count: usize) -> Vec<String> {
    (0..count).map(|_| uuid::Uuid::new_v4().to_string()).collect()
}

/// One discovery page whose objects carry the given UUIDs, titled `Item <n>`.
pub fn search_page(uuids: &[String]) -> Value {
    let objects: Vec<Value> = uuids
        .iter()
        .enumerate()
        .map(|(idx, uuid)| {
            json!({
                "_embedded": {
                    "indexableObject": {
                        "uuid": uuid,
                        "name": format!("Item {}", idx),
                        "type": "item"
                    }
                }
            })
        })
        .collect();

    search_page_with_objects(objects)
}

pub fn search_page_with_objects(objects: Vec<Value>) -> Value {
    json!({
        "query": "",
        "_embedded": {
            "searchResult": {
                "_embedded": { "objects": objects },
                "page": { "size": 20 }
            }
        }
    })
}

pub fn item_body(uuid: &str, metadata: Value) -> Value {
    json!({
        "id": uuid,
        "uuid": uuid,
        "name": "Item",
        "metadata": metadata,
        "type": "item"
    })
}

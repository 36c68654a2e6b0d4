//! Item metadata retrieval and flattening against a mock DSpace server.

mod common;

use common::{client, item_body, item_path, new_uuids};
use dspace_harvest::client::API_UNAVAILABLE;
use dspace_harvest::{FieldValue, HarvestError};
use httpmock::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::json;

#[tokio::test]
async fn test_fetch_metadata_flattens_and_translates() {
    let server = MockServer::start_async().await;
    let uuid = new_uuids(1).remove(0);

    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path(item_path(&uuid))
                .header("Accept", "application/json");
            then.status(200).json_body(item_body(
                &uuid,
                json!({"dc.title": [{"value": "A"}, {"value": "B"}]}),
            ));
        })
        .await;

    let record = client(&server).fetch_metadata(&uuid).await.unwrap();

    mock.assert_hits_async(1).await;
    assert_eq!(record.uuid(), uuid);
    assert_eq!(
        record.get("Título"),
        Some(&FieldValue::List(vec!["A".to_string(), "B".to_string()]))
    );
    assert_eq!(
        serde_json::to_value(&record).unwrap(),
        json!({"UUID": uuid, "Título": ["A", "B"]})
    );
}

#[tokio::test]
async fn test_fetch_metadata_without_metadata_is_empty_record() {
    let server = MockServer::start_async().await;
    let uuid = new_uuids(1).remove(0);

    server
        .mock_async(|when, then| {
            when.method(GET).path(item_path(&uuid));
            then.status(200)
                .json_body(json!({"id": uuid, "uuid": uuid, "type": "item"}));
        })
        .await;

    let record = client(&server).fetch_metadata(&uuid).await.unwrap();

    assert!(record.is_empty());
    assert!(!record.is_error());
    assert_eq!(record.uuid(), uuid);
}

#[tokio::test]
async fn test_unknown_keys_surface_verbatim_in_source_order() {
    let server = MockServer::start_async().await;
    let uuid = new_uuids(1).remove(0);

    server
        .mock_async(|when, then| {
            when.method(GET).path(item_path(&uuid));
            then.status(200).json_body(item_body(
                &uuid,
                json!({
                    "local.campus": [{"value": "Sede Claustro", "language": null}],
                    "dc.title": [{"value": "Hidrología", "language": "es", "place": 0}],
                    "dc.contributor.author": [
                        {"value": "Peña, José", "place": 0},
                        {"value": "Ruiz, Ana", "place": 1}
                    ]
                }),
            ));
        })
        .await;

    let record = client(&server).fetch_metadata(&uuid).await.unwrap();

    let labels: Vec<&str> = record.labels().collect();
    assert_eq!(labels, vec!["UUID", "local.campus", "Título", "Autor(es)"]);
    assert_eq!(record.cell("Autor(es)").unwrap(), "Peña, José, Ruiz, Ana");
}

#[tokio::test]
async fn test_malformed_value_entry_keeps_its_neighbours() {
    let server = MockServer::start_async().await;
    let uuid = new_uuids(1).remove(0);

    server
        .mock_async(|when, then| {
            when.method(GET).path(item_path(&uuid));
            then.status(200).json_body(item_body(
                &uuid,
                json!({
                    "dc.title": [
                        {"value": "Bueno"},
                        {"value": 2021},
                        "suelto",
                        {"language": "es"},
                        {"value": "Último", "place": "x"}
                    ],
                    "dc.subject": "no es una lista"
                }),
            ));
        })
        .await;

    let record = client(&server).fetch_metadata(&uuid).await.unwrap();

    assert_eq!(
        record.get("Título"),
        Some(&FieldValue::List(vec![
            "Bueno".to_string(),
            "2021".to_string(),
            "Último".to_string()
        ]))
    );
    assert_eq!(record.get("Palabras Clave"), Some(&FieldValue::List(vec![])));
}

#[tokio::test]
async fn test_non_success_status_is_api_unavailable() {
    let server = MockServer::start_async().await;
    let uuid = new_uuids(1).remove(0);

    server
        .mock_async(|when, then| {
            when.method(GET).path(item_path(&uuid));
            then.status(404).json_body(json!({"status": 404}));
        })
        .await;

    let err = client(&server).fetch_metadata(&uuid).await.unwrap_err();

    match err {
        HarvestError::ApiUnavailable {
            uuid: failed,
            message,
        } => {
            assert_eq!(failed, uuid);
            assert_eq!(message, API_UNAVAILABLE);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_fetch_item_keeps_value_entries() {
    let server = MockServer::start_async().await;
    let uuid = new_uuids(1).remove(0);

    server
        .mock_async(|when, then| {
            when.method(GET).path(item_path(&uuid));
            then.status(200).json_body(item_body(
                &uuid,
                json!({
                    "dc.subject": [
                        {"value": "Agua", "language": "es", "authority": null, "confidence": -1, "place": 0},
                        {"value": "Water", "language": "en", "authority": null, "confidence": -1, "place": 1}
                    ]
                }),
            ));
        })
        .await;

    let document = client(&server).fetch_item(&uuid).await.unwrap();

    assert_eq!(document.uuid, uuid);
    assert_eq!(
        document.api_url,
        format!("{}{}", server.base_url(), item_path(&uuid))
    );
    assert_eq!(document.translated.len(), 1);

    let (label, entries) = &document.translated[0];
    assert_eq!(label, "Palabras Clave");
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[1].value.as_deref(), Some("Water"));
    assert_eq!(entries[1].language.as_deref(), Some("en"));
    assert_eq!(document.raw["uuid"], json!(uuid));
}

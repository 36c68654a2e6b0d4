// file: src/client/types.rs
// description: DSpace REST response shapes, every level optional for presence checks
// reference: /server/api/discover/search/objects and /server/api/core/items/{uuid}

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Deserialize)]
pub(crate) struct SearchEnvelope {
    #[serde(rename = "_embedded")]
    pub embedded: Option<SearchEnvelopeEmbedded>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchEnvelopeEmbedded {
    #[serde(rename = "searchResult")]
    pub search_result: Option<SearchResultPage>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchResultPage {
    #[serde(rename = "_embedded")]
    pub embedded: Option<SearchObjects>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchObjects {
    pub objects: Option<Vec<SearchObject>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchObject {
    #[serde(rename = "_embedded")]
    pub embedded: Option<SearchObjectEmbedded>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchObjectEmbedded {
    #[serde(rename = "indexableObject")]
    pub indexable_object: Option<IndexableObject>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct IndexableObject {
    pub uuid: Option<String>,
    pub name: Option<String>,
}

impl SearchEnvelope {
    /// Result objects of the page, or `None` when the envelope keys are absent.
    pub fn into_objects(self) -> Option<Vec<SearchObject>> {
        self.embedded?.search_result?.embedded?.objects
    }
}

impl SearchObject {
    pub fn into_indexable(self) -> Option<IndexableObject> {
        self.embedded?.indexable_object
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ItemResponse {
    #[serde(default)]
    pub metadata: Option<Map<String, Value>>,
}

/// One entry of a metadata field's value list.
///
/// Scalar `value`s that are not strings are kept in their textual form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetadataEntry {
    #[serde(default, deserialize_with = "scalar_text")]
    pub value: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub language: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub authority: Option<String>,
    #[serde(default, deserialize_with = "integer")]
    pub confidence: Option<i64>,
    #[serde(default, deserialize_with = "integer")]
    pub place: Option<i64>,
}

fn scalar_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(text)) => Some(text),
        Some(Value::Number(number)) => Some(number.to_string()),
        Some(Value::Bool(flag)) => Some(flag.to_string()),
        _ => None,
    })
}

fn integer<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Value>::deserialize(deserializer)?.and_then(|v| v.as_i64()))
}

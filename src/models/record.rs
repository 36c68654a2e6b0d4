// file: src/models/record.rs
// description: flattened per-item metadata record keyed by display label
// reference: serializes as a json object with UUID first, fields in insertion order

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use tracing::warn;

pub const UUID_KEY: &str = "UUID";
pub const ERROR_KEY: &str = "Error";

/// Value of one field: the flattened value list, or a single text such as an error message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    List(Vec<String>),
    Text(String),
}

impl FieldValue {
    /// Single-cell rendering: list values are joined with `", "`.
    pub fn joined(&self) -> String {
        match self {
            FieldValue::List(values) => values.join(", "),
            FieldValue::Text(text) => text.clone(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            FieldValue::List(values) => values.len(),
            FieldValue::Text(_) => 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatRecord {
    uuid: String,
    fields: Vec<(String, FieldValue)>,
}

impl FlatRecord {
    pub fn new(uuid: impl Into<String>) -> Self {
        Self {
            uuid: uuid.into(),
            fields: Vec::new(),
        }
    }

    /// Record standing in for an item that could not be fetched.
    pub fn error(uuid: impl Into<String>, message: impl Into<String>) -> Self {
        let mut record = Self::new(uuid);
        record.insert(ERROR_KEY, FieldValue::Text(message.into()));
        record
    }

    /// Inserts or replaces a field. A replaced field keeps its original position.
    pub fn insert(&mut self, label: impl Into<String>, value: FieldValue) {
        let label = label.into();
        if label == UUID_KEY {
            warn!("Ignoring metadata field labelled {} for {}", UUID_KEY, self.uuid);
            return;
        }

        match self.fields.iter_mut().find(|(existing, _)| *existing == label) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((label, value)),
        }
    }

    pub fn uuid(&self) -> &str {
        &self.uuid
    }

    pub fn get(&self, label: &str) -> Option<&FieldValue> {
        if label == UUID_KEY {
            return None;
        }
        self.fields
            .iter()
            .find(|(existing, _)| existing == label)
            .map(|(_, value)| value)
    }

    pub fn error_message(&self) -> Option<&str> {
        match self.get(ERROR_KEY) {
            Some(FieldValue::Text(message)) => Some(message.as_str()),
            _ => None,
        }
    }

    pub fn is_error(&self) -> bool {
        self.error_message().is_some()
    }

    /// True when the item has no metadata fields; the UUID entry is always present.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Fields in insertion order, excluding the UUID entry.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(label, value)| (label.as_str(), value))
    }

    /// All labels in output order, starting with `UUID`.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        std::iter::once(UUID_KEY).chain(self.fields.iter().map(|(label, _)| label.as_str()))
    }

    /// Single-cell rendering for a label, including `UUID`.
    pub fn cell(&self, label: &str) -> Option<String> {
        if label == UUID_KEY {
            return Some(self.uuid.clone());
        }
        self.get(label).map(FieldValue::joined)
    }
}

impl Serialize for FlatRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len() + 1))?;
        map.serialize_entry(UUID_KEY, &self.uuid)?;
        for (label, value) in &self.fields {
            map.serialize_entry(label, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for FlatRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(FlatRecordVisitor)
    }
}

struct FlatRecordVisitor;

impl<'de> Visitor<'de> for FlatRecordVisitor {
    type Value = FlatRecord;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a metadata record object with a UUID entry")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut uuid: Option<String> = None;
        let mut fields: Vec<(String, FieldValue)> = Vec::new();

        while let Some(label) = access.next_key::<String>()? {
            if label == UUID_KEY {
                if uuid.is_some() {
                    return Err(de::Error::duplicate_field(UUID_KEY));
                }
                uuid = Some(access.next_value()?);
            } else {
                let value: FieldValue = access.next_value()?;
                fields.push((label, value));
            }
        }

        let uuid = uuid.ok_or_else(|| de::Error::missing_field(UUID_KEY))?;
        Ok(FlatRecord { uuid, fields })
    }
}

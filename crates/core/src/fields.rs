//! Field sets and the Record trait
//!
//! Every screen's form works on a flat bag of string values keyed by the
//! camelCase field name. Concrete record kinds are plain serde structs;
//! the conversion between the two goes through `serde_json`.

use crate::error::{ConsoleError, Result};
use crate::key::{RecordKey, RecordKind};
use crate::schema::Schema;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;

/// Name of the key field in serialized records
pub const KEY_FIELD: &str = "key";

/// Form values: field name -> string value
///
/// Used as the add payload, the update patch and the filter form.
/// An empty value means "not provided".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldSet(BTreeMap<String, String>);

impl FieldSet {
    /// Create an empty field set
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    /// Set a field, replacing any previous value
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    /// Get a field value
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Remove a field, returning its value
    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.0.remove(name)
    }

    /// True if `name` is present with a non-blank value
    pub fn is_filled(&self, name: &str) -> bool {
        self.get(name).is_some_and(|v| !v.trim().is_empty())
    }

    /// Copy every field of `patch` over this set
    pub fn merge(&mut self, patch: &FieldSet) {
        for (name, value) in patch.iter() {
            self.set(name, value);
        }
    }

    /// Iterate over (name, value) pairs in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if no fields are set
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FieldSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        FieldSet(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// A row of one screen's table
///
/// Implementors serialize to a flat JSON object of scalar fields with a
/// `key` entry, and deserialize with `#[serde(default)]` so that a partial
/// field set produces a record with defaults for the rest.
pub trait Record: Clone + fmt::Debug + Serialize + DeserializeOwned {
    /// Which screen this record belongs to
    const KIND: RecordKind;

    /// The record's key
    fn key(&self) -> &RecordKey;

    /// Field rules for this record kind
    fn schema() -> &'static Schema;

    /// Editable fields as a form value bag (the key is not included)
    ///
    /// Fails if the record does not serialize to a flat JSON object.
    fn to_fields(&self) -> Result<FieldSet> {
        let value = serde_json::to_value(self)
            .map_err(|e| ConsoleError::invalid(Self::KIND.name(), e.to_string()))?;
        match value {
            Value::Object(map) => Ok(map
                .into_iter()
                .filter(|(name, _)| name != KEY_FIELD)
                .map(|(name, value)| (name, stringify(&value)))
                .collect()),
            _ => Err(ConsoleError::invalid(
                Self::KIND.name(),
                "record does not serialize to an object",
            )),
        }
    }

    /// Build a record from a key and a field bag
    ///
    /// Values are trimmed; blank values are left out so the record's
    /// default applies. A value the record type rejects is reported
    /// against its own field.
    fn from_fields(key: RecordKey, fields: &FieldSet) -> Result<Self> {
        let mut map = Map::new();
        map.insert(KEY_FIELD.to_string(), Value::String(key.to_string()));
        for (name, value) in fields.iter() {
            let value = value.trim();
            if name == KEY_FIELD || value.is_empty() {
                continue;
            }
            map.insert(name.to_string(), Value::String(value.to_string()));
        }
        let value = Value::Object(map);
        Self::deserialize(&value).map_err(|e| {
            let field = rejected_field::<Self>(&value)
                .unwrap_or_else(|| Self::KIND.name().to_string());
            ConsoleError::invalid(field, e.to_string())
        })
    }

    /// Value of one field, stringified (`key` included)
    fn field_value(&self, name: &str) -> Option<String> {
        if name == KEY_FIELD {
            return Some(self.key().to_string());
        }
        self.to_fields().ok()?.remove(name)
    }

    /// Every value of the record, key first, as the free-text search sees it
    fn search_values(&self) -> Vec<String> {
        let mut values = vec![self.key().to_string()];
        if let Ok(fields) = self.to_fields() {
            values.extend(fields.iter().map(|(_, v)| v.to_string()));
        }
        values
    }
}

/// First field of `record` that fails to deserialize on its own
fn rejected_field<T: DeserializeOwned>(record: &Value) -> Option<String> {
    let map = record.as_object()?;
    let key = map.get(KEY_FIELD)?;
    map.iter()
        .filter(|(name, _)| name.as_str() != KEY_FIELD)
        .find(|(name, value)| {
            let mut single = Map::new();
            single.insert(KEY_FIELD.to_string(), key.clone());
            single.insert(name.to_string(), (*value).clone());
            T::deserialize(&Value::Object(single)).is_err()
        })
        .map(|(name, _)| name.clone())
}

fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

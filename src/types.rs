//! Data model shared by the client methods.
//!
//! Keys and query parameters are opaque to this layer: they are validated
//! for presence and shape, then forwarded to the transport unchanged.

use crate::error::ClientError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// A primary key identifying one record within a collection.
///
/// The remote API accepts both numeric and textual keys, so both are
/// carried losslessly. Revision identifiers use the same type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PrimaryKey {
    /// Numeric key.
    Integer(i64),
    /// Textual key (slug, UUID, ...).
    Text(String),
}

impl PrimaryKey {
    /// Returns true for a textual key with no content.
    /// Integer keys are always present.
    pub fn is_empty(&self) -> bool {
        match self {
            PrimaryKey::Integer(_) => false,
            PrimaryKey::Text(s) => s.is_empty(),
        }
    }
}

impl fmt::Display for PrimaryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrimaryKey::Integer(n) => write!(f, "{n}"),
            PrimaryKey::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<i64> for PrimaryKey {
    fn from(n: i64) -> Self {
        PrimaryKey::Integer(n)
    }
}

impl From<&str> for PrimaryKey {
    fn from(s: &str) -> Self {
        PrimaryKey::Text(s.to_string())
    }
}

impl From<String> for PrimaryKey {
    fn from(s: String) -> Self {
        PrimaryKey::Text(s)
    }
}

/// Query parameters forwarded verbatim to the transport.
///
/// Must be a plain string-keyed mapping; `TryFrom<Value>` rejects any
/// other JSON shape with a validation error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QueryParams(Map<String, Value>);

impl QueryParams {
    /// Creates an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insertion.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Inserts a parameter, replacing any previous value for the key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    /// Returns the value for a key, if set.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Whether no parameters are set.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the key/value pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }
}

impl TryFrom<Value> for QueryParams {
    type Error = ClientError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(ClientError::validation(format!(
                "query parameters must be a plain key-value mapping, got {}",
                json_kind(&other)
            ))),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// A historical snapshot of one record's state.
///
/// Every field is optional so that responses with a `fields` projection
/// still deserialize.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Revision {
    /// Revision identifier.
    pub id: Option<i64>,
    /// Identifier of the activity entry that produced this revision.
    pub activity: Option<i64>,
    /// Collection the revised record belongs to.
    pub collection: Option<String>,
    /// Primary key of the revised record.
    pub item: Option<PrimaryKey>,
    /// Full record state at this revision.
    #[serde(default)]
    pub data: Value,
    /// Changes relative to the previous revision.
    #[serde(default)]
    pub delta: Value,
    /// Parent collection, when the revision was caused through a relation.
    pub parent_collection: Option<String>,
    /// Parent record key, when the revision was caused through a relation.
    pub parent_item: Option<PrimaryKey>,
    /// Whether the parent record changed alongside this one.
    pub parent_changed: Option<bool>,
}

/// The `{ "data": ... }` wrapper every endpoint returns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseEnvelope<T> {
    /// The payload.
    pub data: T,
}

//! Document types
//!
//! A [`Document`] is a JSON object that always carries a `docType`
//! discriminator once stored. A [`Record`] is what a range scan yields for a
//! stored value: either a decoded document or, when the value is not a JSON
//! object, the raw payload as an opaque string.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// Name of the discriminator field carried by every stored document
pub const DOC_TYPE_FIELD: &str = "docType";

/// A JSON object document
///
/// Fields keep the order they were inserted or parsed in.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document(Map<String, Value>);

impl Document {
    /// Create an empty document
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Wrap an existing JSON object
    pub fn from_map(map: Map<String, Value>) -> Self {
        Self(map)
    }

    /// Convert a JSON value into a document
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the value is not a JSON object.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(Error::invalid_input(format!(
                "expected a JSON object, got {}",
                json_kind(&other)
            ))),
        }
    }

    /// Parse a document from a JSON string
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the text is not a JSON object.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)
            .map_err(|e| Error::invalid_input(format!("malformed JSON arguments: {}", e)))?;
        Self::from_value(value)
    }

    /// Decode a stored value
    ///
    /// # Errors
    ///
    /// Returns `Serialization` if the bytes are not a JSON object.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Encode for storage
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(&self.0)?)
    }

    /// The `docType` discriminator, if present and a string
    pub fn doc_type(&self) -> Option<&str> {
        self.0.get(DOC_TYPE_FIELD).and_then(Value::as_str)
    }

    /// Inject or overwrite the `docType` discriminator
    pub fn set_doc_type(&mut self, doc_type: &str) {
        self.0
            .insert(DOC_TYPE_FIELD.to_string(), Value::String(doc_type.to_string()));
    }

    /// Field lookup
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Set a field, returning the previous value
    pub fn insert(&mut self, field: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(field.into(), value)
    }

    /// All fields
    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Unwrap into the underlying JSON object
    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for Document {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// A value produced by a range scan
///
/// Malformed stored values do not abort a scan; they surface as
/// [`Record::Opaque`] instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Record {
    /// Value decoded as a JSON object
    Document(Document),
    /// Value that is not a JSON object, kept verbatim
    Opaque(String),
}

impl Record {
    /// Tolerant decode: never fails
    pub fn decode(raw: &[u8]) -> Self {
        match Document::from_bytes(raw) {
            Ok(doc) => Record::Document(doc),
            Err(_) => Record::Opaque(String::from_utf8_lossy(raw).into_owned()),
        }
    }

    /// The decoded document, if any
    pub fn as_document(&self) -> Option<&Document> {
        match self {
            Record::Document(doc) => Some(doc),
            Record::Opaque(_) => None,
        }
    }

    /// Whether this record failed to decode
    pub fn is_opaque(&self) -> bool {
        matches!(self, Record::Opaque(_))
    }
}

/// One `{Key, Record}` pair of a list response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// Composite store key
    #[serde(rename = "Key")]
    pub key: String,
    /// Decoded value
    #[serde(rename = "Record")]
    pub record: Record,
}

impl Entry {
    /// Create an entry
    pub fn new(key: impl Into<String>, record: Record) -> Self {
        Self {
            key: key.into(),
            record,
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

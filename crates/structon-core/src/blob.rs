//! Opaque blob payloads and their codec.

use serde_json::{json, Map, Value};

use crate::codec::Codec;
use crate::error::CodecError;
use crate::record::FieldValue;

/// An opaque free-form payload whose shape is not known at
/// schema-definition time.
///
/// A blob round-trips its data verbatim: every public entry is carried
/// into the encoded mapping and back, with no per-field typing. The
/// explicit [`entries`](Blob::entries) accessor is the only enumeration
/// of the blob's observable data.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Blob {
    entries: Map<String, Value>,
}

impl Blob {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: Map<String, Value>) -> Self {
        Self { entries }
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> &mut Self {
        self.entries.insert(key.into(), value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Enumerates the blob's public data entries.
    pub fn entries(&self) -> &Map<String, Value> {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Codec for [`Blob`]-typed fields.
///
/// Encode copies every public entry verbatim into a mapping; decode
/// constructs a blob whose entries are exactly the supplied keys and
/// values. Explicit `null` is tolerated in both directions so optional
/// blob fields can be carried without omission.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlobCodec;

impl Codec for BlobCodec {
    fn encode(&self, value: &FieldValue) -> Result<Value, CodecError> {
        match value {
            FieldValue::Blob(blob) => Ok(Value::Object(blob.entries().clone())),
            FieldValue::Null => Ok(Value::Null),
            other => Err(CodecError::new(format!(
                "blob codec cannot encode {} value",
                other.kind()
            ))),
        }
    }

    fn decode(&self, value: &Value) -> Result<FieldValue, CodecError> {
        match value {
            Value::Object(entries) => Ok(FieldValue::Blob(Blob::from_entries(entries.clone()))),
            Value::Null => Ok(FieldValue::Null),
            other => Err(CodecError::new(format!(
                "blob codec expects an object, found {}",
                crate::serializer::value_kind(other)
            ))),
        }
    }

    fn schema_fragment(&self) -> Value {
        json!({"type": "object"})
    }
}

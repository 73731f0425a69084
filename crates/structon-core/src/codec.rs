//! Custom type codec trait and registry.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::{json, Value};

use crate::error::CodecError;
use crate::record::FieldValue;

/// Pluggable encode/decode override for one declared type.
///
/// A codec is fully responsible for the wire shape of its values; the
/// serializer inserts codec output as-is and hands codec input over
/// untouched.
pub trait Codec: Send + Sync {
    fn encode(&self, value: &FieldValue) -> Result<Value, CodecError>;
    fn decode(&self, value: &Value) -> Result<FieldValue, CodecError>;
    /// Generic type descriptor for the codec's wire shape.
    fn schema_fragment(&self) -> Value;
}

/// Mapping from declared type identity to codec.
///
/// Populated at startup, read-only during operation. Registration must
/// happen-before any lookup; the registry itself takes no locks.
#[derive(Default)]
pub struct CodecRegistry {
    codecs: HashMap<String, Arc<dyn Codec>>,
}

impl CodecRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Associates a codec with a type identity. Last registration wins.
    pub fn register(&mut self, identity: impl Into<String>, codec: Arc<dyn Codec>) {
        self.codecs.insert(identity.into(), codec);
    }

    /// Pure lookup of the codec for a type identity.
    pub fn resolve(&self, identity: &str) -> Option<Arc<dyn Codec>> {
        self.codecs.get(identity).cloned()
    }
}

impl std::fmt::Debug for CodecRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut identities: Vec<&str> = self.codecs.keys().map(String::as_str).collect();
        identities.sort_unstable();
        f.debug_struct("CodecRegistry")
            .field("identities", &identities)
            .finish()
    }
}

/// The built-in pass-through codec: applies the default structural rules
/// with no schema, so values round-trip as generic JSON shapes.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughCodec;

impl Codec for PassthroughCodec {
    fn encode(&self, value: &FieldValue) -> Result<Value, CodecError> {
        Ok(value.to_json())
    }

    fn decode(&self, value: &Value) -> Result<FieldValue, CodecError> {
        Ok(FieldValue::from_json(value))
    }

    fn schema_fragment(&self) -> Value {
        json!({})
    }
}

//! The structural serializer.
//!
//! A [`Serializer`] binds one record schema, the omit-none flag and a
//! codec registry. Building it validates the schema and resolves every
//! custom type identity reachable in the type tree; codecs for directly
//! custom-typed fields are cached in the field plan so encode/decode do
//! no repeated lookups on the hot path.

pub(crate) mod decode;
pub(crate) mod encode;

use std::sync::Arc;

use serde_json::Value;
use structon_schema::{
    record_descriptor_with, validate_schema, FieldSchema, FieldType, RecordSchema, SchemaError,
};

use crate::codec::{Codec, CodecRegistry};
use crate::error::{DecodeError, EncodeError};
use crate::record::Record;

/// One compiled field: its schema plus the codec resolved at build time.
pub(crate) struct FieldPlan {
    pub(crate) schema: FieldSchema,
    pub(crate) codec: Option<Arc<dyn Codec>>,
}

/// Schema-driven converter between [`Record`] values and generic JSON
/// values. Stateless across calls; safe to share once built.
pub struct Serializer {
    schema: RecordSchema,
    plan: Vec<FieldPlan>,
    omit_none: bool,
    registry: Arc<CodecRegistry>,
}

impl Serializer {
    /// Compiles a serializer for `schema`.
    ///
    /// Fails with [`SchemaError`] if the schema is structurally invalid
    /// or any custom type identity (at any nesting depth) has no codec
    /// registered; no serializer is returned in that case.
    pub fn build(
        schema: RecordSchema,
        omit_none: bool,
        registry: Arc<CodecRegistry>,
    ) -> Result<Self, SchemaError> {
        validate_schema(&schema)?;
        resolve_custom_types(&schema, &registry)?;
        let plan = schema
            .fields
            .iter()
            .map(|field| FieldPlan {
                codec: match &field.type_ {
                    FieldType::Custom(identity) => registry.resolve(identity),
                    _ => None,
                },
                schema: field.clone(),
            })
            .collect();
        Ok(Self {
            schema,
            plan,
            omit_none,
            registry,
        })
    }

    pub fn schema(&self) -> &RecordSchema {
        &self.schema
    }

    pub fn omit_none(&self) -> bool {
        self.omit_none
    }

    /// Encodes a record into a generic value.
    ///
    /// Output key order follows schema declaration order. With
    /// `omit_none`, absent optional fields are skipped entirely.
    pub fn encode(&self, record: &Record) -> Result<Value, EncodeError> {
        encode::encode_with_plan(&self.plan, record, self.omit_none, &self.registry)
    }

    /// Decodes a generic value into a fully constructed record.
    pub fn decode(&self, value: &Value) -> Result<Record, DecodeError> {
        decode::decode_with_plan(&self.plan, value, &self.registry)
    }

    /// JSON Schema-like descriptor of the bound record type, with
    /// custom-typed fields described by their codec's fragment.
    pub fn descriptor(&self) -> Value {
        record_descriptor_with(&self.schema, &|identity| {
            self.registry
                .resolve(identity)
                .map(|codec| codec.schema_fragment())
        })
    }
}

fn resolve_custom_types(
    schema: &RecordSchema,
    registry: &CodecRegistry,
) -> Result<(), SchemaError> {
    for field in &schema.fields {
        resolve_type(&field.type_, registry)?;
    }
    Ok(())
}

fn resolve_type(type_: &FieldType, registry: &CodecRegistry) -> Result<(), SchemaError> {
    match type_ {
        FieldType::List(of) | FieldType::Map(of) => resolve_type(of, registry),
        FieldType::Record(inner) => resolve_custom_types(inner, registry),
        FieldType::Custom(identity) => match registry.resolve(identity) {
            Some(_) => Ok(()),
            None => Err(SchemaError::UnresolvedType(identity.clone())),
        },
        _ => Ok(()),
    }
}

pub(crate) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

pub(crate) fn join_path(path: &str, segment: &str) -> String {
    if path.is_empty() {
        segment.to_string()
    } else {
        format!("{path}.{segment}")
    }
}

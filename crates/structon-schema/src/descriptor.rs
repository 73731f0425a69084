//! Converts field types to a JSON Schema-like generic descriptor.

use serde_json::{json, Map, Value};

use super::schema::{FieldType, RecordSchema};

/// Resolver callback supplying descriptor fragments for custom type
/// identities. Returning `None` falls back to an unconstrained fragment.
pub type FragmentResolver<'a> = &'a dyn Fn(&str) -> Option<Value>;

/// Descriptor for a field type, with no custom-type resolution.
pub fn descriptor(type_: &FieldType) -> Value {
    descriptor_with(type_, &|_| None)
}

/// Descriptor for a field type, consulting `resolve` for custom types.
pub fn descriptor_with(type_: &FieldType, resolve: FragmentResolver<'_>) -> Value {
    match type_ {
        FieldType::Bool => json!({"type": "boolean"}),
        FieldType::Int => json!({"type": "integer"}),
        FieldType::Float => json!({"type": "number"}),
        FieldType::Str => json!({"type": "string"}),
        FieldType::Any => json!({}),
        FieldType::List(of) => json!({
            "type": "array",
            "items": descriptor_with(of, resolve),
        }),
        FieldType::Map(of) => json!({
            "type": "object",
            "additionalProperties": descriptor_with(of, resolve),
        }),
        FieldType::Record(inner) => record_descriptor_with(inner, resolve),
        FieldType::Custom(identity) => resolve(identity).unwrap_or_else(|| json!({})),
    }
}

/// Descriptor for a whole record schema.
pub fn record_descriptor(schema: &RecordSchema) -> Value {
    record_descriptor_with(schema, &|_| None)
}

pub fn record_descriptor_with(schema: &RecordSchema, resolve: FragmentResolver<'_>) -> Value {
    let mut properties = Map::new();
    let mut required: Vec<Value> = Vec::new();
    for field in &schema.fields {
        properties.insert(field.name.clone(), descriptor_with(&field.type_, resolve));
        if !field.optional {
            required.push(Value::String(field.name.clone()));
        }
    }
    let mut out = Map::new();
    out.insert("type".into(), json!("object"));
    out.insert("properties".into(), Value::Object(properties));
    if !required.is_empty() {
        out.insert("required".into(), Value::Array(required));
    }
    Value::Object(out)
}

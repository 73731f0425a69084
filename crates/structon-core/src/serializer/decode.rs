//! Record decoding: schema-driven conversion back into records.
//!
//! Missing-field handling short-circuits before any codec: codecs are
//! only invoked on values actually present in the input. A missing
//! optional field decodes to `Null`; a missing required field fails the
//! whole call.

use std::collections::BTreeMap;

use serde_json::{Map, Value};
use structon_schema::{FieldSchema, FieldType, RecordSchema};

use super::{join_path, value_kind, FieldPlan};
use crate::codec::{Codec, CodecRegistry};
use crate::error::{CodecError, DecodeError};
use crate::record::{FieldValue, Record};

pub(crate) fn decode_with_plan(
    plan: &[FieldPlan],
    value: &Value,
    registry: &CodecRegistry,
) -> Result<Record, DecodeError> {
    let Some(obj) = value.as_object() else {
        return Err(DecodeError::TypeMismatch {
            field: "$".into(),
            expected: "record",
            actual: value_kind(value),
        });
    };
    let mut record = Record::new();
    for entry in plan {
        decode_field(
            &entry.schema,
            entry.codec.as_deref(),
            obj,
            "",
            registry,
            &mut record,
        )?;
    }
    Ok(record)
}

fn decode_record_value(
    schema: &RecordSchema,
    obj: &Map<String, Value>,
    path: &str,
    registry: &CodecRegistry,
) -> Result<Record, DecodeError> {
    let mut record = Record::new();
    for field in &schema.fields {
        let codec = match &field.type_ {
            FieldType::Custom(identity) => registry.resolve(identity),
            _ => None,
        };
        decode_field(field, codec.as_deref(), obj, path, registry, &mut record)?;
    }
    Ok(record)
}

fn decode_field(
    field: &FieldSchema,
    codec: Option<&dyn Codec>,
    obj: &Map<String, Value>,
    path: &str,
    registry: &CodecRegistry,
    record: &mut Record,
) -> Result<(), DecodeError> {
    let field_path = join_path(path, &field.name);
    let Some(value) = obj.get(&field.name) else {
        if field.optional {
            record.set(field.name.clone(), FieldValue::Null);
            return Ok(());
        }
        return Err(DecodeError::MissingField(field_path));
    };
    if let Some(codec) = codec {
        record.set(field.name.clone(), codec.decode(value)?);
        return Ok(());
    }
    if value.is_null() && field.optional {
        record.set(field.name.clone(), FieldValue::Null);
        return Ok(());
    }
    let decoded = decode_value(&field.type_, value, &field_path, registry)?;
    record.set(field.name.clone(), decoded);
    Ok(())
}

fn decode_value(
    type_: &FieldType,
    value: &Value,
    path: &str,
    registry: &CodecRegistry,
) -> Result<FieldValue, DecodeError> {
    let mismatch = |expected: &'static str| DecodeError::TypeMismatch {
        field: path.to_string(),
        expected,
        actual: value_kind(value),
    };
    match type_ {
        FieldType::Any => Ok(FieldValue::from_json(value)),
        FieldType::Bool => value
            .as_bool()
            .map(FieldValue::Bool)
            .ok_or_else(|| mismatch("bool")),
        FieldType::Int => value
            .as_i64()
            .map(FieldValue::Int)
            .ok_or_else(|| mismatch("int")),
        FieldType::Float => value
            .as_f64()
            .map(FieldValue::Float)
            .ok_or_else(|| mismatch("float")),
        FieldType::Str => value
            .as_str()
            .map(|s| FieldValue::Str(s.to_string()))
            .ok_or_else(|| mismatch("str")),
        FieldType::List(of) => {
            let items = value.as_array().ok_or_else(|| mismatch("list"))?;
            let mut out = Vec::with_capacity(items.len());
            for (i, item) in items.iter().enumerate() {
                let item_path = join_path(path, &i.to_string());
                out.push(decode_value(of, item, &item_path, registry)?);
            }
            Ok(FieldValue::List(out))
        }
        FieldType::Map(of) => {
            let entries = value.as_object().ok_or_else(|| mismatch("map"))?;
            let mut out = BTreeMap::new();
            for (key, item) in entries {
                let item_path = join_path(path, key);
                out.insert(key.clone(), decode_value(of, item, &item_path, registry)?);
            }
            Ok(FieldValue::Map(out))
        }
        FieldType::Record(inner) => {
            let obj = value.as_object().ok_or_else(|| mismatch("record"))?;
            Ok(FieldValue::Record(decode_record_value(
                inner, obj, path, registry,
            )?))
        }
        FieldType::Custom(identity) => match registry.resolve(identity) {
            Some(codec) => Ok(codec.decode(value)?),
            // Unreachable after a successful build; kept as an error, not a panic.
            None => Err(DecodeError::Codec(CodecError::new(format!(
                "no codec registered for {identity}"
            )))),
        },
    }
}

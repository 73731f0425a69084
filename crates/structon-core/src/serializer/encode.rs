//! Record encoding: schema-ordered depth-first walk.

use serde_json::{Map, Number, Value};
use structon_schema::{FieldSchema, FieldType, RecordSchema};

use super::{join_path, FieldPlan};
use crate::codec::{Codec, CodecRegistry};
use crate::error::{CodecError, EncodeError};
use crate::record::{FieldValue, Record};

pub(crate) fn encode_with_plan(
    plan: &[FieldPlan],
    record: &Record,
    omit_none: bool,
    registry: &CodecRegistry,
) -> Result<Value, EncodeError> {
    let mut out = Map::new();
    for entry in plan {
        encode_field(
            &entry.schema,
            entry.codec.as_deref(),
            record,
            "",
            omit_none,
            registry,
            &mut out,
        )?;
    }
    Ok(Value::Object(out))
}

fn encode_record_value(
    schema: &RecordSchema,
    record: &Record,
    path: &str,
    omit_none: bool,
    registry: &CodecRegistry,
) -> Result<Value, EncodeError> {
    let mut out = Map::new();
    for field in &schema.fields {
        let codec = match &field.type_ {
            FieldType::Custom(identity) => registry.resolve(identity),
            _ => None,
        };
        encode_field(
            field,
            codec.as_deref(),
            record,
            path,
            omit_none,
            registry,
            &mut out,
        )?;
    }
    Ok(Value::Object(out))
}

fn encode_field(
    field: &FieldSchema,
    codec: Option<&dyn Codec>,
    record: &Record,
    path: &str,
    omit_none: bool,
    registry: &CodecRegistry,
    out: &mut Map<String, Value>,
) -> Result<(), EncodeError> {
    let value = record.get(&field.name).unwrap_or(&FieldValue::Null);
    if value.is_null() && field.optional {
        if omit_none {
            // Key is skipped entirely, not emitted as null.
            return Ok(());
        }
        let encoded = match codec {
            Some(codec) => codec.encode(value)?,
            None => Value::Null,
        };
        out.insert(field.name.clone(), encoded);
        return Ok(());
    }
    if let Some(codec) = codec {
        // Codec output is inserted as-is; the codec owns the shape.
        out.insert(field.name.clone(), codec.encode(value)?);
        return Ok(());
    }
    let field_path = join_path(path, &field.name);
    let encoded = encode_value(&field.type_, value, &field_path, omit_none, registry)?;
    out.insert(field.name.clone(), encoded);
    Ok(())
}

fn encode_value(
    type_: &FieldType,
    value: &FieldValue,
    path: &str,
    omit_none: bool,
    registry: &CodecRegistry,
) -> Result<Value, EncodeError> {
    match (type_, value) {
        (FieldType::Any, value) => Ok(value.to_json()),
        (FieldType::Bool, FieldValue::Bool(b)) => Ok(Value::Bool(*b)),
        (FieldType::Int, FieldValue::Int(i)) => Ok(Value::Number(Number::from(*i))),
        (FieldType::Float, FieldValue::Float(f)) => Ok(Number::from_f64(*f)
            .map(Value::Number)
            .unwrap_or(Value::Null)),
        (FieldType::Float, FieldValue::Int(i)) => Ok(Number::from_f64(*i as f64)
            .map(Value::Number)
            .unwrap_or(Value::Null)),
        (FieldType::Str, FieldValue::Str(s)) => Ok(Value::String(s.clone())),
        (FieldType::List(of), FieldValue::List(items)) => {
            let mut out = Vec::with_capacity(items.len());
            for (i, item) in items.iter().enumerate() {
                let item_path = join_path(path, &i.to_string());
                out.push(encode_value(of, item, &item_path, omit_none, registry)?);
            }
            Ok(Value::Array(out))
        }
        (FieldType::Map(of), FieldValue::Map(entries)) => {
            let mut out = Map::new();
            for (key, item) in entries {
                let item_path = join_path(path, key);
                out.insert(key.clone(), encode_value(of, item, &item_path, omit_none, registry)?);
            }
            Ok(Value::Object(out))
        }
        (FieldType::Record(inner), FieldValue::Record(record)) => {
            encode_record_value(inner, record, path, omit_none, registry)
        }
        (FieldType::Custom(identity), value) => match registry.resolve(identity) {
            Some(codec) => Ok(codec.encode(value)?),
            // Unreachable after a successful build; kept as an error, not a panic.
            None => Err(EncodeError::Codec(CodecError::new(format!(
                "no codec registered for {identity}"
            )))),
        },
        (type_, value) => Err(EncodeError::TypeMismatch {
            field: path.to_string(),
            expected: type_.kind(),
            actual: value.kind(),
        }),
    }
}

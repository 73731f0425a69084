//! Schema integrity validator.

use std::collections::HashSet;

use super::error::SchemaError;
use super::schema::{FieldType, RecordSchema};

/// Validate a record schema for structural integrity.
///
/// Checks field names (non-empty, unique per record) and recurses into
/// nested list, map and record types. Custom type identities must be
/// non-empty; whether they resolve to a codec is checked later, at
/// serializer build time.
pub fn validate_schema(schema: &RecordSchema) -> Result<(), SchemaError> {
    let mut seen: HashSet<&str> = HashSet::new();
    for field in &schema.fields {
        if field.name.is_empty() {
            return Err(SchemaError::EmptyFieldName);
        }
        if !seen.insert(field.name.as_str()) {
            return Err(SchemaError::DuplicateField(field.name.clone()));
        }
        validate_type(&field.type_)?;
    }
    Ok(())
}

fn validate_type(type_: &FieldType) -> Result<(), SchemaError> {
    match type_ {
        FieldType::Bool | FieldType::Int | FieldType::Float | FieldType::Str | FieldType::Any => {
            Ok(())
        }
        FieldType::List(of) | FieldType::Map(of) => validate_type(of),
        FieldType::Record(inner) => validate_schema(inner),
        FieldType::Custom(identity) => {
            if identity.is_empty() {
                return Err(SchemaError::EmptyCustomIdentity);
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::SchemaBuilder;

    fn s() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    #[test]
    fn validate_empty_record_ok() {
        assert!(validate_schema(&s().record("empty", vec![])).is_ok());
    }

    #[test]
    fn validate_primitive_fields_ok() {
        let schema = s().record(
            "msg",
            vec![
                s().field("id", s().str()),
                s().field("count", s().int()),
                s().optional("ratio", s().float()),
            ],
        );
        assert!(validate_schema(&schema).is_ok());
    }

    #[test]
    fn validate_empty_field_name_err() {
        let schema = s().record("msg", vec![s().field("", s().str())]);
        assert_eq!(validate_schema(&schema), Err(SchemaError::EmptyFieldName));
    }

    #[test]
    fn validate_duplicate_field_err() {
        let schema = s().record(
            "msg",
            vec![s().field("id", s().str()), s().field("id", s().int())],
        );
        assert_eq!(
            validate_schema(&schema),
            Err(SchemaError::DuplicateField("id".into()))
        );
    }

    #[test]
    fn validate_empty_custom_identity_err() {
        let schema = s().record("msg", vec![s().field("payload", s().custom(""))]);
        assert_eq!(
            validate_schema(&schema),
            Err(SchemaError::EmptyCustomIdentity)
        );
    }

    #[test]
    fn validate_recurses_into_list_and_map() {
        let schema = s().record("msg", vec![s().field("items", s().list(s().custom("")))]);
        assert_eq!(
            validate_schema(&schema),
            Err(SchemaError::EmptyCustomIdentity)
        );

        let schema = s().record("msg", vec![s().field("index", s().map(s().custom("")))]);
        assert_eq!(
            validate_schema(&schema),
            Err(SchemaError::EmptyCustomIdentity)
        );
    }

    #[test]
    fn validate_recurses_into_nested_record() {
        let inner = s().record("inner", vec![s().field("", s().str())]);
        let schema = s().record("outer", vec![s().field("inner", s().nested(inner))]);
        assert_eq!(validate_schema(&schema), Err(SchemaError::EmptyFieldName));
    }

    #[test]
    fn validate_same_name_in_different_records_ok() {
        let inner = s().record("inner", vec![s().field("id", s().str())]);
        let schema = s().record(
            "outer",
            vec![s().field("id", s().str()), s().field("inner", s().nested(inner))],
        );
        assert!(validate_schema(&schema).is_ok());
    }
}

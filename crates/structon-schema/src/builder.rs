//! Schema builder.
//!
//! Provides a fluent API for constructing record schemas.

use super::schema::*;

/// Builder for constructing field types and record schemas.
#[derive(Debug, Clone, Default)]
pub struct SchemaBuilder;

impl SchemaBuilder {
    pub fn new() -> Self {
        Self
    }

    // ------------------------------------------------------------------
    // Shorthand type constructors

    pub fn bool(&self) -> FieldType {
        FieldType::Bool
    }

    pub fn int(&self) -> FieldType {
        FieldType::Int
    }

    pub fn float(&self) -> FieldType {
        FieldType::Float
    }

    pub fn str(&self) -> FieldType {
        FieldType::Str
    }

    pub fn any(&self) -> FieldType {
        FieldType::Any
    }

    pub fn list(&self, of: FieldType) -> FieldType {
        FieldType::List(Box::new(of))
    }

    pub fn map(&self, of: FieldType) -> FieldType {
        FieldType::Map(Box::new(of))
    }

    pub fn custom(&self, identity: impl Into<String>) -> FieldType {
        FieldType::Custom(identity.into())
    }

    // ------------------------------------------------------------------
    // Records and fields

    pub fn record(&self, name: impl Into<String>, fields: Vec<FieldSchema>) -> RecordSchema {
        RecordSchema::new(name, fields)
    }

    /// A nested record used as a field type.
    pub fn nested(&self, schema: RecordSchema) -> FieldType {
        FieldType::Record(schema)
    }

    pub fn field(&self, name: impl Into<String>, type_: FieldType) -> FieldSchema {
        FieldSchema::new(name, type_)
    }

    pub fn optional(&self, name: impl Into<String>, type_: FieldType) -> FieldSchema {
        FieldSchema::optional(name, type_)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    #[test]
    fn builder_primitive_shorthands() {
        assert_eq!(s().bool(), FieldType::Bool);
        assert_eq!(s().int(), FieldType::Int);
        assert_eq!(s().float(), FieldType::Float);
        assert_eq!(s().str(), FieldType::Str);
        assert_eq!(s().any(), FieldType::Any);
    }

    #[test]
    fn builder_composite_types() {
        assert_eq!(s().list(s().str()), FieldType::List(Box::new(FieldType::Str)));
        assert_eq!(s().map(s().int()), FieldType::Map(Box::new(FieldType::Int)));
        assert_eq!(s().custom("blob"), FieldType::Custom("blob".into()));
    }

    #[test]
    fn builder_record_with_fields() {
        let schema = s().record(
            "user",
            vec![
                s().field("id", s().str()),
                s().optional("nickname", s().str()),
                s().field("scores", s().list(s().int())),
            ],
        );
        assert_eq!(schema.name, "user");
        assert_eq!(schema.fields.len(), 3);
        assert!(!schema.fields[0].optional);
        assert!(schema.fields[1].optional);
    }

    #[test]
    fn builder_nested_record_type() {
        let inner = s().record("inner", vec![s().field("v", s().int())]);
        let ty = s().nested(inner.clone());
        assert_eq!(ty, FieldType::Record(inner));
    }
}

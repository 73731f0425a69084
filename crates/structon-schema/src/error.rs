use thiserror::Error;

/// Errors raised while constructing or validating a schema.
///
/// A schema that fails validation must never become the basis of a
/// usable serializer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error("field name must not be empty")]
    EmptyFieldName,
    #[error("duplicate field: {0}")]
    DuplicateField(String),
    #[error("custom type identity must not be empty")]
    EmptyCustomIdentity,
    #[error("unresolved custom type: {0}")]
    UnresolvedType(String),
}

use thiserror::Error;

/// Error raised by a codec's own encode or decode.
///
/// Propagated unchanged (transparent) through serializer calls.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct CodecError(pub String);

impl CodecError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Errors while encoding a record to a generic value.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EncodeError {
    #[error("type mismatch at {field}: expected {expected}, found {actual}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
        actual: &'static str,
    },
    #[error(transparent)]
    Codec(#[from] CodecError),
}

/// Errors while decoding a generic value into a record.
///
/// Decode never yields a partially-populated record; the first error
/// aborts the whole call.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DecodeError {
    #[error("missing required field: {0}")]
    MissingField(String),
    #[error("type mismatch at {field}: expected {expected}, found {actual}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
        actual: &'static str,
    },
    #[error(transparent)]
    Codec(#[from] CodecError),
}

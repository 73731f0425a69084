//! Record schema definitions for structon.
//!
//! A [`RecordSchema`] is an immutable, ordered description of a record
//! type's fields. Schemas are built once (usually via [`SchemaBuilder`]),
//! validated, and then drive structural encode/decode in `structon-core`.

pub mod builder;
pub mod descriptor;
pub mod error;
pub mod schema;
pub mod validate;

pub use builder::SchemaBuilder;
pub use descriptor::{descriptor, descriptor_with, record_descriptor, record_descriptor_with};
pub use error::SchemaError;
pub use schema::{FieldSchema, FieldType, RecordSchema};
pub use validate::validate_schema;

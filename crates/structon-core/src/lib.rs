//! Schema-driven structural serializer.
//!
//! Converts between dynamic [`Record`] values and a generic JSON-like
//! representation (`serde_json::Value`), driven by a
//! [`structon_schema::RecordSchema`]. Custom-typed fields are dispatched
//! through a [`CodecRegistry`] of pluggable [`Codec`] implementations.
//!
//! All operations are pure and synchronous; a built [`Serializer`] and a
//! populated registry are safe to share read-only across threads.

pub mod blob;
pub mod codec;
pub mod error;
pub mod record;
pub mod serializer;

pub use blob::{Blob, BlobCodec};
pub use codec::{Codec, CodecRegistry, PassthroughCodec};
pub use error::{CodecError, DecodeError, EncodeError};
pub use record::{FieldValue, Record};
pub use serializer::Serializer;

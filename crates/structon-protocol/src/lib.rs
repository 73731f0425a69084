//! Sync-protocol message layer.
//!
//! Declares the record schemas for the messages exchanged between a
//! connector and its host, and builds one [`structon_core::Serializer`]
//! per message type at startup. Stream state payloads are opaque blobs:
//! their shape is connector-defined and must round-trip verbatim, so
//! they are declared as the custom `blob` type and handled by
//! [`structon_core::BlobCodec`].

pub mod messages;
pub mod serializers;

pub use messages::BLOB_TYPE;
pub use serializers::ProtocolSerializers;

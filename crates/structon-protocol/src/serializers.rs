//! Ready-built serializers, one per message type.

use std::sync::Arc;

use structon_core::{BlobCodec, CodecRegistry, Serializer};
use structon_schema::SchemaError;

use crate::messages;

/// One serializer per protocol message type, sharing a single codec
/// registry with [`BlobCodec`] registered under
/// [`messages::BLOB_TYPE`]. All serializers omit absent optional
/// fields, so checkpoints without state payloads stay compact on the
/// wire.
///
/// Built once at startup and reused for every message.
pub struct ProtocolSerializers {
    pub stream_state: Serializer,
    pub state_message: Serializer,
    pub record_message: Serializer,
    pub log_message: Serializer,
    pub trace_message: Serializer,
    pub envelope: Serializer,
}

impl ProtocolSerializers {
    pub fn new() -> Result<Self, SchemaError> {
        let mut registry = CodecRegistry::new();
        registry.register(messages::BLOB_TYPE, Arc::new(BlobCodec));
        let registry = Arc::new(registry);
        Ok(Self {
            stream_state: Serializer::build(messages::stream_state(), true, Arc::clone(&registry))?,
            state_message: Serializer::build(
                messages::state_message(),
                true,
                Arc::clone(&registry),
            )?,
            record_message: Serializer::build(
                messages::record_message(),
                true,
                Arc::clone(&registry),
            )?,
            log_message: Serializer::build(messages::log_message(), true, Arc::clone(&registry))?,
            trace_message: Serializer::build(
                messages::trace_message(),
                true,
                Arc::clone(&registry),
            )?,
            envelope: Serializer::build(messages::envelope(), true, registry)?,
        })
    }
}

//! Message record schemas.
//!
//! Field order here is wire order: encoded output emits keys in the
//! order declared below.

use structon_schema::{RecordSchema, SchemaBuilder};

/// Custom type identity for opaque connector-defined payloads.
pub const BLOB_TYPE: &str = "blob";

/// Identifies one stream of records.
pub fn stream_descriptor() -> RecordSchema {
    let s = SchemaBuilder::new();
    s.record(
        "stream_descriptor",
        vec![
            s.field("name", s.str()),
            s.optional("namespace", s.str()),
        ],
    )
}

/// Per-stream checkpoint: descriptor plus an opaque state payload.
pub fn stream_state() -> RecordSchema {
    let s = SchemaBuilder::new();
    s.record(
        "stream_state",
        vec![
            s.field("stream_descriptor", s.nested(stream_descriptor())),
            s.optional("stream_state", s.custom(BLOB_TYPE)),
        ],
    )
}

/// Checkpoint message: stream-scoped state plus legacy whole-source data.
pub fn state_message() -> RecordSchema {
    let s = SchemaBuilder::new();
    s.record(
        "state_message",
        vec![
            s.optional("type", s.str()),
            s.optional("stream", s.nested(stream_state())),
            s.optional("data", s.custom(BLOB_TYPE)),
            s.optional("source_stats", s.nested(source_stats())),
        ],
    )
}

fn source_stats() -> RecordSchema {
    let s = SchemaBuilder::new();
    s.record(
        "source_stats",
        vec![s.optional("record_count", s.float())],
    )
}

/// One emitted data record.
pub fn record_message() -> RecordSchema {
    let s = SchemaBuilder::new();
    s.record(
        "record_message",
        vec![
            s.field("stream", s.str()),
            s.optional("namespace", s.str()),
            s.field("data", s.custom(BLOB_TYPE)),
            s.field("emitted_at", s.int()),
        ],
    )
}

/// Operator-facing log line.
pub fn log_message() -> RecordSchema {
    let s = SchemaBuilder::new();
    s.record(
        "log_message",
        vec![
            s.field("level", s.str()),
            s.field("message", s.str()),
            s.optional("stack_trace", s.str()),
        ],
    )
}

/// Out-of-band diagnostic event: errors and progress estimates.
pub fn trace_message() -> RecordSchema {
    let s = SchemaBuilder::new();
    s.record(
        "trace_message",
        vec![
            s.field("type", s.str()),
            s.field("emitted_at", s.float()),
            s.optional("error", s.nested(trace_error())),
            s.optional("estimate", s.nested(trace_estimate())),
        ],
    )
}

fn trace_error() -> RecordSchema {
    let s = SchemaBuilder::new();
    s.record(
        "trace_error",
        vec![
            s.optional("message", s.str()),
            s.optional("internal_message", s.str()),
            s.optional("stack_trace", s.str()),
            s.optional("failure_type", s.str()),
        ],
    )
}

fn trace_estimate() -> RecordSchema {
    let s = SchemaBuilder::new();
    s.record(
        "trace_estimate",
        vec![
            s.field("name", s.str()),
            s.optional("namespace", s.str()),
            s.optional("row_estimate", s.int()),
            s.optional("byte_estimate", s.int()),
        ],
    )
}

/// The envelope: a kind tag plus one optional slot per message family.
pub fn envelope() -> RecordSchema {
    let s = SchemaBuilder::new();
    s.record(
        "envelope",
        vec![
            s.field("type", s.str()),
            s.optional("record", s.nested(record_message())),
            s.optional("state", s.nested(state_message())),
            s.optional("log", s.nested(log_message())),
            s.optional("trace", s.nested(trace_message())),
        ],
    )
}

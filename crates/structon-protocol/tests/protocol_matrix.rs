use serde_json::json;
use structon_core::{Blob, FieldValue, Record};
use structon_protocol::ProtocolSerializers;

fn serializers() -> ProtocolSerializers {
    ProtocolSerializers::new().unwrap()
}

#[test]
fn state_message_with_opaque_payload_round_trips() {
    let p = serializers();

    let mut state = Blob::new();
    state.insert("cursor", json!("2024-06-01T00:00:00Z"));
    state.insert("partitions", json!({"a": 3, "b": 0}));

    let mut descriptor = Record::new();
    descriptor.set("name", "users");
    let mut stream = Record::new();
    stream.set("stream_descriptor", descriptor);
    stream.set("stream_state", state.clone());
    let mut message = Record::new();
    message.set("type", "STREAM");
    message.set("stream", stream);

    let encoded = p.state_message.encode(&message).unwrap();
    assert_eq!(
        encoded,
        json!({
            "type": "STREAM",
            "stream": {
                "stream_descriptor": {"name": "users"},
                "stream_state": {
                    "cursor": "2024-06-01T00:00:00Z",
                    "partitions": {"a": 3, "b": 0},
                },
            },
        })
    );

    let decoded = p.state_message.decode(&encoded).unwrap();
    let Some(FieldValue::Record(stream)) = decoded.get("stream") else {
        panic!("expected stream record");
    };
    assert_eq!(stream.get("stream_state"), Some(&FieldValue::Blob(state)));
}

#[test]
fn omit_none_drops_absent_message_slots() {
    let p = serializers();
    let mut message = Record::new();
    message.set("type", "LOG");
    let mut log = Record::new();
    log.set("level", "INFO");
    log.set("message", "sync started");
    message.set("log", log);

    let encoded = p.envelope.encode(&message).unwrap();
    // No "record" or "state" keys at all, not nulls.
    assert_eq!(
        encoded,
        json!({
            "type": "LOG",
            "log": {"level": "INFO", "message": "sync started"},
        })
    );
}

#[test]
fn record_message_requires_stream_and_data() {
    let p = serializers();
    let err = p
        .record_message
        .decode(&json!({"data": {}, "emitted_at": 1}))
        .unwrap_err();
    assert_eq!(err.to_string(), "missing required field: stream");
}

#[test]
fn trace_message_error_round_trips_and_omits_empty_slots() {
    let p = serializers();

    let mut error = Record::new();
    error.set("message", "connection reset");
    error.set("failure_type", "transient_error");
    let mut trace = Record::new();
    trace.set("type", "ERROR");
    trace.set("emitted_at", 1717200000.5f64);
    trace.set("error", error);

    let encoded = p.trace_message.encode(&trace).unwrap();
    // No "estimate" key, and no empty error sub-fields.
    assert_eq!(
        encoded,
        json!({
            "type": "ERROR",
            "emitted_at": 1717200000.5,
            "error": {
                "message": "connection reset",
                "failure_type": "transient_error",
            },
        })
    );

    let decoded = p.trace_message.decode(&encoded).unwrap();
    assert_eq!(decoded.get("estimate"), Some(&FieldValue::Null));
    let Some(FieldValue::Record(error)) = decoded.get("error") else {
        panic!("expected error record");
    };
    assert_eq!(
        error.get("message"),
        Some(&FieldValue::Str("connection reset".into()))
    );
}

#[test]
fn envelope_carries_trace_slot() {
    let p = serializers();
    let mut trace = Record::new();
    trace.set("type", "ESTIMATE");
    trace.set("emitted_at", 1.0f64);
    let mut estimate = Record::new();
    estimate.set("name", "users");
    estimate.set("row_estimate", 1000i64);
    trace.set("estimate", estimate);
    let mut message = Record::new();
    message.set("type", "TRACE");
    message.set("trace", trace);

    let encoded = p.envelope.encode(&message).unwrap();
    assert_eq!(
        encoded,
        json!({
            "type": "TRACE",
            "trace": {
                "type": "ESTIMATE",
                "emitted_at": 1.0,
                "estimate": {"name": "users", "row_estimate": 1000},
            },
        })
    );
    let decoded = p.envelope.decode(&encoded).unwrap();
    assert_eq!(p.envelope.encode(&decoded).unwrap(), encoded);
}

#[test]
fn state_payload_survives_unknown_nested_shapes() {
    let p = serializers();
    let input = json!({
        "stream_descriptor": {"name": "orders", "namespace": "sales"},
        "stream_state": {
            "__internal_marker": true,
            "offsets": [[0, "a"], [1, "b"]],
        },
    });
    let decoded = p.stream_state.decode(&input).unwrap();
    assert_eq!(p.stream_state.encode(&decoded).unwrap(), input);
}

#[test]
fn envelope_descriptor_marks_payloads_as_objects() {
    let p = serializers();
    let descriptor = p.record_message.descriptor();
    assert_eq!(descriptor["properties"]["data"], json!({"type": "object"}));
    assert_eq!(descriptor["required"], json!(["stream", "data", "emitted_at"]));
}

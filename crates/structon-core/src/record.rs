//! Dynamic record value model.

use std::collections::BTreeMap;

use serde_json::{Map, Number, Value};

use crate::blob::Blob;

/// Runtime value of one record field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Absent value. Optional fields default to `Null`.
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<FieldValue>),
    Map(BTreeMap<String, FieldValue>),
    Record(Record),
    Blob(Blob),
}

impl FieldValue {
    /// Returns the "kind" string identifier for this value.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Str(_) => "str",
            Self::List(_) => "list",
            Self::Map(_) => "map",
            Self::Record(_) => "record",
            Self::Blob(_) => "blob",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Structural conversion to a generic value, with no schema.
    ///
    /// Records and blobs become plain objects; a non-finite float becomes
    /// `null`, matching JSON number semantics.
    pub fn to_json(&self) -> Value {
        match self {
            Self::Null => Value::Null,
            Self::Bool(b) => Value::Bool(*b),
            Self::Int(i) => Value::Number(Number::from(*i)),
            Self::Float(f) => Number::from_f64(*f).map(Value::Number).unwrap_or(Value::Null),
            Self::Str(s) => Value::String(s.clone()),
            Self::List(items) => Value::Array(items.iter().map(FieldValue::to_json).collect()),
            Self::Map(entries) => {
                let mut out = Map::new();
                for (key, value) in entries {
                    out.insert(key.clone(), value.to_json());
                }
                Value::Object(out)
            }
            Self::Record(record) => {
                let mut out = Map::new();
                for (name, value) in record.fields() {
                    out.insert(name.clone(), value.to_json());
                }
                Value::Object(out)
            }
            Self::Blob(blob) => Value::Object(blob.entries().clone()),
        }
    }

    /// Structural conversion from a generic value, with no schema.
    ///
    /// Objects become maps; integral numbers become `Int`, other numbers
    /// `Float`. Integers outside the `i64` range (large `u64` input) fall
    /// back to `Float` and may lose precision.
    pub fn from_json(value: &Value) -> FieldValue {
        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(*b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => Self::Int(i),
                None => Self::Float(n.as_f64().unwrap_or(0.0)),
            },
            Value::String(s) => Self::Str(s.clone()),
            Value::Array(items) => Self::List(items.iter().map(FieldValue::from_json).collect()),
            Value::Object(entries) => Self::Map(
                entries
                    .iter()
                    .map(|(k, v)| (k.clone(), FieldValue::from_json(v)))
                    .collect(),
            ),
        }
    }
}

impl From<bool> for FieldValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for FieldValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for FieldValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for FieldValue {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<Blob> for FieldValue {
    fn from(v: Blob) -> Self {
        Self::Blob(v)
    }
}

impl From<Record> for FieldValue {
    fn from(v: Record) -> Self {
        Self::Record(v)
    }
}

/// A dynamic record: ordered `(name, value)` pairs.
///
/// Insertion order is irrelevant for encoding (output key order follows
/// the schema), but is preserved for iteration.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    fields: Vec<(String, FieldValue)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fields(fields: Vec<(String, FieldValue)>) -> Self {
        Self { fields }
    }

    /// Sets a field value, replacing any existing value for the name.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> &mut Self {
        let name = name.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((name, value)),
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    pub fn fields(&self) -> &[(String, FieldValue)] {
        &self.fields
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn record_set_and_get() {
        let mut record = Record::new();
        record.set("id", "x").set("count", 3i64);
        assert_eq!(record.get("id"), Some(&FieldValue::Str("x".into())));
        assert_eq!(record.get("count"), Some(&FieldValue::Int(3)));
        assert!(record.get("missing").is_none());
    }

    #[test]
    fn record_is_empty_until_first_set() {
        let mut record = Record::new();
        assert!(record.is_empty());
        record.set("id", "x");
        assert!(!record.is_empty());
    }

    #[test]
    fn record_set_replaces_existing() {
        let mut record = Record::new();
        record.set("id", "x");
        record.set("id", "y");
        assert_eq!(record.get("id"), Some(&FieldValue::Str("y".into())));
        assert_eq!(record.fields().len(), 1);
    }

    #[test]
    fn field_value_kind_strings() {
        assert_eq!(FieldValue::Null.kind(), "null");
        assert_eq!(FieldValue::Bool(true).kind(), "bool");
        assert_eq!(FieldValue::Int(1).kind(), "int");
        assert_eq!(FieldValue::Float(1.5).kind(), "float");
        assert_eq!(FieldValue::Str("s".into()).kind(), "str");
        assert_eq!(FieldValue::List(vec![]).kind(), "list");
        assert_eq!(FieldValue::Map(BTreeMap::new()).kind(), "map");
        assert_eq!(FieldValue::Record(Record::new()).kind(), "record");
        assert_eq!(FieldValue::Blob(Blob::new()).kind(), "blob");
    }

    #[test]
    fn to_json_structural() {
        let mut record = Record::new();
        record.set("flag", true);
        record.set(
            "items",
            FieldValue::List(vec![FieldValue::Int(1), FieldValue::Str("two".into())]),
        );
        let value = FieldValue::Record(record).to_json();
        assert_eq!(value, json!({"flag": true, "items": [1, "two"]}));
    }

    #[test]
    fn from_json_splits_int_and_float() {
        assert_eq!(FieldValue::from_json(&json!(7)), FieldValue::Int(7));
        assert_eq!(FieldValue::from_json(&json!(7.5)), FieldValue::Float(7.5));
    }

    #[test]
    fn from_json_number_beyond_i64_range_widens_to_float() {
        assert_eq!(
            FieldValue::from_json(&json!(i64::MAX)),
            FieldValue::Int(i64::MAX)
        );
        assert_eq!(
            FieldValue::from_json(&json!(u64::MAX)),
            FieldValue::Float(u64::MAX as f64)
        );
    }

    #[test]
    fn from_json_object_becomes_map() {
        let value = FieldValue::from_json(&json!({"b": 2, "a": 1}));
        let FieldValue::Map(entries) = value else {
            panic!("expected map");
        };
        assert_eq!(entries.get("a"), Some(&FieldValue::Int(1)));
        assert_eq!(entries.get("b"), Some(&FieldValue::Int(2)));
    }

    #[test]
    fn to_json_non_finite_float_is_null() {
        assert_eq!(FieldValue::Float(f64::NAN).to_json(), Value::Null);
    }

    #[test]
    fn json_round_trip_preserves_structure() {
        let original = json!({
            "name": "x",
            "nested": {"deep": [null, true, 1, 1.25, "s"]},
        });
        let value = FieldValue::from_json(&original);
        assert_eq!(value.to_json(), original);
    }
}

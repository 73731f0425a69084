/// Declared type of a record field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldType {
    Bool,
    Int,
    Float,
    Str,
    /// Any JSON-shaped value, converted structurally with no schema.
    Any,
    /// Homogeneous sequence of the element type.
    List(Box<FieldType>),
    /// String-keyed mapping with homogeneous value type.
    Map(Box<FieldType>),
    /// Nested record with its own field schema.
    Record(RecordSchema),
    /// A declared type handled by a registered codec, keyed by identity.
    Custom(String),
}

impl FieldType {
    /// Returns the "kind" string identifier for this type.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Float => "float",
            Self::Str => "str",
            Self::Any => "any",
            Self::List(_) => "list",
            Self::Map(_) => "map",
            Self::Record(_) => "record",
            Self::Custom(_) => "custom",
        }
    }
}

/// One field of a record: name, declared type, optionality.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSchema {
    pub name: String,
    pub type_: FieldType,
    pub optional: bool,
}

impl FieldSchema {
    pub fn new(name: impl Into<String>, type_: FieldType) -> Self {
        Self {
            name: name.into(),
            type_,
            optional: false,
        }
    }

    pub fn optional(name: impl Into<String>, type_: FieldType) -> Self {
        Self {
            name: name.into(),
            type_,
            optional: true,
        }
    }
}

/// Immutable, ordered description of a record type.
///
/// Field order is declaration order and drives the key order of encoded
/// output.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordSchema {
    pub name: String,
    pub fields: Vec<FieldSchema>,
}

impl RecordSchema {
    pub fn new(name: impl Into<String>, fields: Vec<FieldSchema>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }

    /// Looks up a field by name.
    pub fn field(&self, name: &str) -> Option<&FieldSchema> {
        self.fields.iter().find(|f| f.name == name)
    }
}

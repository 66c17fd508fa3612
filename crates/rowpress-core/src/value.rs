use chrono::{NaiveDate, NaiveDateTime};
use serde::ser::{Serialize, Serializer};
use uuid::Uuid;

/// An enumeration-typed field value: the symbolic member name together with
/// the value actually stored in the database.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumValue {
    pub name: &'static str,
    pub stored: Box<Value>,
}

impl EnumValue {
    pub fn new(name: &'static str, stored: Value) -> Self {
        Self {
            name,
            stored: Box::new(stored),
        }
    }
}

/// A scalar field value as supplied by an entity, before normalization.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Uuid(Uuid),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
    Enum(EnumValue),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Stable stringified form used by the revisit guard and row
    /// fingerprints. Enum values key on their stored value.
    pub fn to_key(&self) -> String {
        match self {
            Self::Null => "<null>".to_string(),
            Self::Bool(value) => value.to_string(),
            Self::Int(value) => value.to_string(),
            Self::Float(value) => value.to_string(),
            Self::Text(value) => value.clone(),
            Self::Uuid(value) => value.to_string(),
            Self::Date(value) => value.format("%Y-%m-%d").to_string(),
            Self::DateTime(value) => value.format("%Y-%m-%d %H:%M:%S").to_string(),
            Self::Enum(value) => value.stored.to_key(),
        }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Bool(value) => serializer.serialize_bool(*value),
            Self::Int(value) => serializer.serialize_i64(*value),
            Self::Float(value) => serializer.serialize_f64(*value),
            Self::Text(value) => serializer.serialize_str(value),
            Self::Uuid(value) => serializer.collect_str(value),
            Self::Date(value) => serializer.collect_str(&value.format("%Y-%m-%d")),
            Self::DateTime(value) => {
                serializer.collect_str(&value.format("%Y-%m-%d %H:%M:%S"))
            }
            Self::Enum(value) => value.stored.serialize(serializer),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Uuid> for Value {
    fn from(value: Uuid) -> Self {
        Self::Uuid(value)
    }
}

impl From<NaiveDate> for Value {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(value: NaiveDateTime) -> Self {
        Self::DateTime(value)
    }
}

impl<T> From<Option<T>> for Value
where
    Value: From<T>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Value::from)
    }
}

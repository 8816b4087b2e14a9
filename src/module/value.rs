/// The tagged value model every loaded module is normalized into.
///
/// A module's exported value is one of a closed set of shapes: primitives,
/// sequences, insertion-ordered mappings, named callables (built-in modules
/// only), and opaque leaves. File modules arrive here through the
/// `serde_json` / `toml` conversions below.
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

/// A loaded module value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Absent value (JSON `null`).
    Null,
    /// Boolean.
    Bool(bool),
    /// Integer.
    Int(i64),
    /// Floating-point number.
    Float(f64),
    /// String.
    Str(String),
    /// Ordered sequence of values.
    Seq(Vec<Value>),
    /// Mapping from keys to values, in insertion order.
    Map(Vec<(String, Value)>),
    /// A named callable exported by a built-in module.
    Callable(String),
    /// A value with no structural rendering; carries a type name.
    Opaque(String),
}

impl Value {
    /// Short lowercase name of the value's shape, for table output.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Str(_) => "string",
            Self::Seq(_) => "sequence",
            Self::Map(_) => "mapping",
            Self::Callable(_) => "function",
            Self::Opaque(_) => "opaque",
        }
    }

    /// Number of direct children (sequence items or mapping entries).
    #[must_use]
    pub fn children_count(&self) -> usize {
        match self {
            Self::Seq(items) => items.len(),
            Self::Map(entries) => entries.len(),
            _ => 0,
        }
    }

    /// Look up a direct mapping entry by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Self::Map(entries) => entries.iter().find(|(k, _)| k == key).map(|(_, v)| v),
            _ => None,
        }
    }
}

/// Serializes to natural JSON: mappings as objects, sequences as arrays,
/// callables and opaques as their bracketed display form.
impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Int(n) => serializer.serialize_i64(*n),
            Self::Float(n) => serializer.serialize_f64(*n),
            Self::Str(s) => serializer.serialize_str(s),
            Self::Seq(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Self::Map(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
            Self::Callable(name) => serializer.serialize_str(&format!("[Function: {name}]")),
            Self::Opaque(type_name) => serializer.serialize_str(&format!("[{type_name}]")),
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Number(n) => n.as_i64().map_or_else(
                || Self::Float(n.as_f64().unwrap_or(f64::NAN)),
                Self::Int,
            ),
            serde_json::Value::String(s) => Self::Str(s),
            serde_json::Value::Array(items) => {
                Self::Seq(items.into_iter().map(Self::from).collect())
            }
            serde_json::Value::Object(entries) => Self::Map(
                entries
                    .into_iter()
                    .map(|(k, v)| (k, Self::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<toml::Value> for Value {
    fn from(v: toml::Value) -> Self {
        match v {
            toml::Value::Boolean(b) => Self::Bool(b),
            toml::Value::Integer(n) => Self::Int(n),
            toml::Value::Float(n) => Self::Float(n),
            toml::Value::String(s) => Self::Str(s),
            // TOML datetimes have no structural shape; keep their text form.
            toml::Value::Datetime(dt) => Self::Str(dt.to_string()),
            toml::Value::Array(items) => Self::Seq(items.into_iter().map(Self::from).collect()),
            toml::Value::Table(entries) => Self::Map(
                entries
                    .into_iter()
                    .map(|(k, v)| (k, Self::from(v)))
                    .collect(),
            ),
        }
    }
}

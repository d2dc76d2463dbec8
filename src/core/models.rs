//! Core data models for API requests

use serde_json::{Map, Value};

/// Request payload accepted by every endpoint
///
/// Endpoints take `impl Into<Payload>`, so callers can pass nothing (`()`),
/// a bare id (`42` or `"42"`), or a structured map built with
/// `serde_json::json!`. A bare id becomes `{"id": <value>}`, mirroring what
/// the service expects.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// No parameters
    Empty,
    /// Structured key/value parameters
    Data(Map<String, Value>),
}

impl Payload {
    /// Build a payload carrying only an id field
    pub fn id(id: impl Into<Value>) -> Self {
        let mut map = Map::new();
        map.insert("id".to_string(), id.into());
        Payload::Data(map)
    }

    /// Whether the payload carries any parameters
    pub fn is_empty(&self) -> bool {
        match self {
            Payload::Empty => true,
            Payload::Data(map) => map.is_empty(),
        }
    }

    /// Look up a field, rendering scalar values to their string form
    pub fn field(&self, key: &str) -> Option<String> {
        let Payload::Data(map) = self else {
            return None;
        };
        match map.get(key)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    /// Convert into the JSON tree sent over the wire
    pub(crate) fn into_value(self) -> Value {
        match self {
            Payload::Empty => Value::Object(Map::new()),
            Payload::Data(map) => Value::Object(map),
        }
    }
}

impl From<()> for Payload {
    fn from(_: ()) -> Self {
        Payload::Empty
    }
}

impl From<u64> for Payload {
    fn from(id: u64) -> Self {
        Payload::id(id)
    }
}

impl From<i64> for Payload {
    fn from(id: i64) -> Self {
        Payload::id(id)
    }
}

impl From<&str> for Payload {
    fn from(id: &str) -> Self {
        Payload::id(id)
    }
}

impl From<String> for Payload {
    fn from(id: String) -> Self {
        Payload::id(id)
    }
}

impl From<Map<String, Value>> for Payload {
    fn from(map: Map<String, Value>) -> Self {
        Payload::Data(map)
    }
}

impl From<Value> for Payload {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => Payload::Data(map),
            Value::Null => Payload::Empty,
            scalar => Payload::id(scalar),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scalar_id_equivalence() {
        assert_eq!(Payload::from(42u64), Payload::from(json!({ "id": 42 })));
        assert_eq!(Payload::from("42"), Payload::from(json!({ "id": "42" })));
    }

    #[test]
    fn test_unit_is_empty() {
        assert!(Payload::from(()).is_empty());
        assert!(Payload::from(json!(null)).is_empty());
        assert!(!Payload::from(42u64).is_empty());
    }

    #[test]
    fn test_field_renders_scalars() {
        let payload = Payload::from(json!({ "id": 42, "comment": "hi" }));
        assert_eq!(payload.field("id").as_deref(), Some("42"));
        assert_eq!(payload.field("comment").as_deref(), Some("hi"));
        assert_eq!(payload.field("missing"), None);
    }

    #[test]
    fn test_into_value_always_object() {
        assert_eq!(Payload::Empty.into_value(), json!({}));
        assert_eq!(Payload::from(7u64).into_value(), json!({ "id": 7 }));
    }
}

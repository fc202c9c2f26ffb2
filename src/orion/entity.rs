use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Rendered in place of any attribute that cannot be read
pub const NOT_AVAILABLE: &str = "N/A";

/// One fetched NGSI-LD entity body, keyed by attribute name
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntitySnapshot {
    attributes: Map<String, Value>,
}

impl EntitySnapshot {
    pub fn new(attributes: Map<String, Value>) -> Self {
        Self { attributes }
    }

    /// Build a snapshot from a decoded body. Only JSON objects are entities.
    pub fn from_json(json: Value) -> Option<Self> {
        match json {
            Value::Object(attributes) => Some(Self { attributes }),
            _ => None,
        }
    }

    /// Look up an attribute, classifying how it is represented
    pub fn attribute(&self, name: &str) -> Attribute<'_> {
        match self.attributes.get(name) {
            None => Attribute::Missing,
            Some(Value::Object(envelope)) => Attribute::Enveloped(envelope.get("value")),
            Some(value) => Attribute::Scalar(value),
        }
    }

    /// Display text for an attribute; never fails
    pub fn display(&self, name: &str) -> String {
        self.attribute(name).to_string()
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

/// How an attribute appears in the entity body
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Attribute<'a> {
    /// Key not present
    Missing,
    /// Bare value, e.g. `"temperature": 21`
    Scalar(&'a Value),
    /// Property object, e.g. `"battery": {"type": "Property", "value": 55}`.
    /// Holds `None` when the object has no `value` member.
    Enveloped(Option<&'a Value>),
}

impl<'a> Attribute<'a> {
    /// The underlying value, if one can be read
    pub fn value(&self) -> Option<&'a Value> {
        match *self {
            Attribute::Missing | Attribute::Enveloped(None) => None,
            Attribute::Scalar(v) | Attribute::Enveloped(Some(v)) => Some(v),
        }
    }
}

impl fmt::Display for Attribute<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value() {
            None | Some(Value::Null) => f.write_str(NOT_AVAILABLE),
            Some(Value::String(s)) => f.write_str(s),
            Some(other) => write!(f, "{}", other),
        }
    }
}

use serde::{Deserialize, Serialize};

/// One dynamically named attribute as it arrives off the wire.
///
/// Values are raw text regardless of the declared type. Coercion belongs to
/// the output boundary so that a bad value is attributable there, not to the
/// fetch path.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AttributeValue {
    pub attr_type: String,
    pub value: String,
}

impl AttributeValue {
    pub fn new(attr_type: &str, value: &str) -> Self {
        AttributeValue {
            attr_type: attr_type.to_string(),
            value: value.to_string(),
        }
    }
}

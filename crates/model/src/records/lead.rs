use crate::core::value::AttributeValue;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Key under which the fixed lead id is stored, as the wire cases it.
pub const CORE_ID: &str = "id";
/// Key under which the fixed lead email is stored.
pub const CORE_EMAIL: &str = "email";

/// One lead as a flat attribute map.
///
/// Keys keep the wire's casing and are unique per record; merging a
/// duplicate name overwrites the earlier entry (last write wins). That
/// includes the core `id`/`email` entries, which a dynamic attribute of the
/// same name replaces.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LeadRecord {
    values: HashMap<String, AttributeValue>,
}

impl LeadRecord {
    /// Starts a record with its two fixed core fields, tagged with their
    /// inferred wire types.
    pub fn new(id: &str, email: &str) -> Self {
        let mut values = HashMap::new();
        values.insert(CORE_ID.to_string(), AttributeValue::new("integer", id));
        values.insert(CORE_EMAIL.to_string(), AttributeValue::new("string", email));
        LeadRecord { values }
    }

    /// Inserts one attribute, replacing any earlier entry with the same name.
    pub fn merge(&mut self, name: &str, attribute: AttributeValue) {
        self.values.insert(name.to_string(), attribute);
    }

    /// Case-sensitive lookup by attribute name.
    pub fn get(&self, name: &str) -> Option<&AttributeValue> {
        self.values.get(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One lead-change event with its fixed fields and flattened attributes.
///
/// Activity attributes arrive as bare name/value pairs with no type tag;
/// they merge into the record with the same overwrite-on-duplicate rule as
/// lead attributes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActivityRecord {
    pub id: String,
    pub activity_date_time: String,
    pub activity_type: String,
    pub mktg_asset_name: String,
    pub mkt_person_id: String,
    pub attributes: HashMap<String, String>,
}

impl ActivityRecord {
    pub fn new(
        id: &str,
        activity_date_time: &str,
        activity_type: &str,
        mktg_asset_name: &str,
        mkt_person_id: &str,
    ) -> Self {
        ActivityRecord {
            id: id.to_string(),
            activity_date_time: activity_date_time.to_string(),
            activity_type: activity_type.to_string(),
            mktg_asset_name: mktg_asset_name.to_string(),
            mkt_person_id: mkt_person_id.to_string(),
            attributes: HashMap::new(),
        }
    }

    /// Inserts one attribute, replacing any earlier entry with the same name.
    pub fn merge_attribute(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_string(), value.to_string());
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merges_attributes_with_last_write_wins() {
        let mut record = ActivityRecord::new("9", "2015-07-06T19:00:02+09:00", "Visit Webpage", "", "78");
        record.merge_attribute("Webpage URL", "/old");
        record.merge_attribute("Webpage URL", "/new");

        assert_eq!(record.attribute("Webpage URL"), Some("/new"));
        assert_eq!(record.attributes.len(), 1);
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of column types the sync target understands.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    Long,
    Double,
    String,
    Timestamp,
    Boolean,
}

impl DataType {
    /// Maps a remote field type onto the target type system.
    ///
    /// The service reports a handful of vendor-specific names beyond the
    /// listed ones; all of them carry textual payloads, so anything
    /// unrecognized falls back to `String`.
    pub fn from_remote_type(remote_type: &str) -> Self {
        match remote_type {
            "integer" => DataType::Long,
            "dateTime" | "date" => DataType::Timestamp,
            "string" | "text" | "phone" | "currency" => DataType::String,
            "boolean" => DataType::Boolean,
            "float" => DataType::Double,
            _ => DataType::String,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            DataType::Long => "long",
            DataType::Double => "double",
            DataType::String => "string",
            DataType::Timestamp => "timestamp",
            DataType::Boolean => "boolean",
        }
    }
}

impl TryFrom<&str> for DataType {
    type Error = String;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "long" => Ok(DataType::Long),
            "double" => Ok(DataType::Double),
            "string" => Ok(DataType::String),
            "timestamp" => Ok(DataType::Timestamp),
            "boolean" => Ok(DataType::Boolean),
            other => Err(format!("Unknown column type: {other}")),
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_every_documented_remote_type() {
        let table = [
            ("integer", DataType::Long),
            ("dateTime", DataType::Timestamp),
            ("date", DataType::Timestamp),
            ("string", DataType::String),
            ("text", DataType::String),
            ("phone", DataType::String),
            ("currency", DataType::String),
            ("boolean", DataType::Boolean),
            ("float", DataType::Double),
        ];

        for (remote, expected) in table {
            assert_eq!(DataType::from_remote_type(remote), expected, "{remote}");
        }
    }

    #[test]
    fn unlisted_remote_types_fall_back_to_string() {
        assert_eq!(DataType::from_remote_type("url"), DataType::String);
        assert_eq!(DataType::from_remote_type("reference"), DataType::String);
        assert_eq!(DataType::from_remote_type(""), DataType::String);
    }

    #[test]
    fn parses_target_type_names() {
        assert_eq!(DataType::try_from("long"), Ok(DataType::Long));
        assert_eq!(DataType::try_from("timestamp"), Ok(DataType::Timestamp));
        assert!(DataType::try_from("varchar").is_err());
    }

    #[test]
    fn display_matches_config_vocabulary() {
        assert_eq!(DataType::Double.to_string(), "double");
    }
}

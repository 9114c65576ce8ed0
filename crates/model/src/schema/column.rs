use crate::core::data_type::DataType;
use serde::{Deserialize, Serialize};

/// A named, typed output field, fixed for the duration of a sync session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ColumnSpec {
    pub name: String,
    #[serde(rename = "type")]
    pub data_type: DataType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

impl ColumnSpec {
    pub fn new(name: &str, data_type: DataType) -> Self {
        ColumnSpec {
            name: name.to_string(),
            data_type,
            format: None,
        }
    }
}

/// Field descriptor returned by the remote describe call. Produced once
/// during schema discovery, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldMetadata {
    pub name: String,
    pub data_type: String,
}

/// Derives the session column list from remote field metadata.
///
/// The fixed `Id` and `Email` columns always come first; metadata order is
/// preserved and duplicate names are kept as-is.
pub fn build_columns(metadata: &[FieldMetadata]) -> Vec<ColumnSpec> {
    let mut columns = vec![
        ColumnSpec::new("Id", DataType::Long),
        ColumnSpec::new("Email", DataType::String),
    ];

    for field in metadata {
        columns.push(ColumnSpec::new(
            &field.name,
            DataType::from_remote_type(&field.data_type),
        ));
    }

    columns
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(name: &str, data_type: &str) -> FieldMetadata {
        FieldMetadata {
            name: name.to_string(),
            data_type: data_type.to_string(),
        }
    }

    #[test]
    fn prepends_fixed_columns_in_order() {
        let columns = build_columns(&[field("Score", "integer")]);

        assert_eq!(
            columns,
            vec![
                ColumnSpec::new("Id", DataType::Long),
                ColumnSpec::new("Email", DataType::String),
                ColumnSpec::new("Score", DataType::Long),
            ]
        );
    }

    #[test]
    fn keeps_metadata_order_and_duplicates() {
        let columns = build_columns(&[
            field("UpdatedAt", "dateTime"),
            field("Score", "float"),
            field("Score", "integer"),
        ]);

        let names: Vec<&str> = columns.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Id", "Email", "UpdatedAt", "Score", "Score"]);
        assert_eq!(columns[3].data_type, DataType::Double);
        assert_eq!(columns[4].data_type, DataType::Long);
    }

    #[test]
    fn empty_metadata_yields_only_fixed_columns() {
        assert_eq!(build_columns(&[]).len(), 2);
    }

    #[test]
    fn serializes_with_config_field_names() {
        let json = serde_json::to_string(&ColumnSpec::new("Score", DataType::Long)).unwrap();
        assert_eq!(json, r#"{"name":"Score","type":"long"}"#);
    }
}

use model::{
    core::value::AttributeValue,
    records::lead::{self, LeadRecord},
    schema::column::ColumnSpec,
};

/// Orders one record's raw values by the session column list.
///
/// Lookup is by exact attribute name; a column with no matching attribute
/// yields `None`. Values stay uncoerced text so that a conversion failure is
/// attributable to the output stage, not the fetch.
pub fn project(record: &LeadRecord, columns: &[ColumnSpec]) -> Vec<Option<String>> {
    columns
        .iter()
        .map(|column| lookup(record, &column.name).map(|attribute| attribute.value.clone()))
        .collect()
}

/// The derived schema names the core fields `Id`/`Email` while the wire keys
/// them lowercase; the alias keeps the fixed columns populated without
/// weakening case-sensitive attribute lookup.
fn lookup<'a>(record: &'a LeadRecord, name: &str) -> Option<&'a AttributeValue> {
    if let Some(attribute) = record.get(name) {
        return Some(attribute);
    }
    match name {
        "Id" => record.get(lead::CORE_ID),
        "Email" => record.get(lead::CORE_EMAIL),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::core::data_type::DataType;

    fn columns(names: &[(&str, DataType)]) -> Vec<ColumnSpec> {
        names
            .iter()
            .map(|(name, data_type)| ColumnSpec::new(name, *data_type))
            .collect()
    }

    #[test]
    fn rows_follow_column_order() {
        let mut record = LeadRecord::new("7", "lead@example.com");
        record.merge("Score", AttributeValue::new("integer", "42"));

        let row = project(
            &record,
            &columns(&[
                ("Id", DataType::Long),
                ("Email", DataType::String),
                ("Score", DataType::Long),
            ]),
        );

        assert_eq!(
            row,
            vec![
                Some("7".to_string()),
                Some("lead@example.com".to_string()),
                Some("42".to_string()),
            ]
        );
    }

    #[test]
    fn unmatched_columns_yield_none() {
        let record = LeadRecord::new("7", "lead@example.com");
        let row = project(&record, &columns(&[("Company", DataType::String)]));

        assert_eq!(row, vec![None]);
    }

    #[test]
    fn wire_attribute_shadows_the_core_alias() {
        let mut record = LeadRecord::new("7", "lead@example.com");
        record.merge("Id", AttributeValue::new("string", "wire-id"));

        let row = project(&record, &columns(&[("Id", DataType::Long)]));
        assert_eq!(row, vec![Some("wire-id".to_string())]);
    }

    #[test]
    fn attribute_lookup_stays_case_sensitive() {
        let mut record = LeadRecord::new("7", "lead@example.com");
        record.merge("score", AttributeValue::new("integer", "42"));

        let row = project(&record, &columns(&[("Score", DataType::Long)]));
        assert_eq!(row, vec![None]);
    }
}

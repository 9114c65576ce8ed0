use crate::{error::ConnectorError, soap::response};
use model::{core::value::AttributeValue, records::lead::LeadRecord};
use roxmltree::Node;

/// Builds one flat record from a `leadRecord` element.
///
/// The fixed core fields seed the record, then the dynamic attribute list is
/// merged in document order. A duplicate name, including `id` or `email`,
/// replaces the earlier value rather than accumulating.
pub fn assemble_lead(lead: Node) -> Result<LeadRecord, ConnectorError> {
    let id = response::require_child_text(lead, "leadRecord", "Id")?;
    let email = response::require_child_text(lead, "leadRecord", "Email")?;

    let mut record = LeadRecord::new(&id, &email);

    if let Some(attributes) = response::child(lead, "leadAttributeList") {
        for attribute in response::children_named(attributes, "attribute") {
            let name = response::require_child_text(
                attribute,
                "leadAttributeList/attribute",
                "attrName",
            )?;
            let attr_type = response::child_text(attribute, "attrType").unwrap_or_default();
            let value = response::child_text(attribute, "attrValue").unwrap_or_default();

            record.merge(&name, AttributeValue::new(&attr_type, &value));
        }
    }

    Ok(record)
}

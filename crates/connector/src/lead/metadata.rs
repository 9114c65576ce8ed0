use crate::{
    error::ConnectorError,
    soap::{client::SoapClient, envelope, response, response::ResponseDocument},
};
use model::schema::column::FieldMetadata;

const OPERATION: &str = "paramsDescribeMObject";
/// Object whose field catalog drives schema derivation.
const LEAD_OBJECT: &str = "LeadRecord";

/// Fetches the describable lead fields.
///
/// Called once before streaming begins; the resulting metadata feeds column
/// derivation and is never persisted.
pub async fn describe_lead_fields(client: &SoapClient) -> Result<Vec<FieldMetadata>, ConnectorError> {
    let body = envelope::element("objectName", LEAD_OBJECT);
    let raw = client.call(OPERATION, &body).await?;
    let doc = ResponseDocument::parse(&raw)?;
    extract_fields(&doc)
}

fn extract_fields(doc: &ResponseDocument) -> Result<Vec<FieldMetadata>, ConnectorError> {
    let list = doc.require("fieldList")?;

    let mut fields = Vec::new();
    for field in response::children_named(list, "field") {
        let name = response::require_child_text(field, "fieldList/field", "name")?;
        let data_type = response::child_text(field, "dataType").unwrap_or_default();
        fields.push(FieldMetadata { name, data_type });
    }

    Ok(fields)
}

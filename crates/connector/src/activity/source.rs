use crate::{
    error::ConnectorError,
    soap::{client::SoapClient, envelope, response, response::ResponseDocument},
};
use model::records::activity::ActivityRecord;
use roxmltree::Node;
use tracing::info;

const OPERATION: &str = "paramsGetLeadChanges";
const BATCH_SIZE: usize = 1000;

/// Fetches lead-change activity for one incremental window.
pub struct ActivitySource<'a> {
    client: &'a SoapClient,
}

impl<'a> ActivitySource<'a> {
    pub fn new(client: &'a SoapClient) -> Self {
        ActivitySource { client }
    }

    /// One `getLeadChanges` batch of activity since `oldest_created_at`.
    pub async fn fetch_since(
        &self,
        oldest_created_at: &str,
    ) -> Result<Vec<ActivityRecord>, ConnectorError> {
        let body = format!(
            "<startPosition>{}</startPosition>{}",
            envelope::element("oldestCreatedAt", oldest_created_at),
            envelope::element("batchSize", &BATCH_SIZE.to_string()),
        );
        let raw = self.client.call(OPERATION, &body).await?;
        let doc = ResponseDocument::parse(&raw)?;
        extract_activities(&doc)
    }
}

fn extract_activities(doc: &ResponseDocument) -> Result<Vec<ActivityRecord>, ConnectorError> {
    let list = doc.require("leadChangeRecordList")?;

    let mut records = Vec::new();
    for change in response::children_named(list, "leadChangeRecord") {
        records.push(assemble_activity(change)?);
    }

    info!("Fetched {} lead change record(s)", records.len());
    Ok(records)
}

/// Builds one activity record: fixed fields first, then the attribute pairs
/// merged with the same overwrite-on-duplicate rule as lead attributes.
fn assemble_activity(change: Node) -> Result<ActivityRecord, ConnectorError> {
    let id = response::require_child_text(change, "leadChangeRecord", "id")?;
    let activity_date_time =
        response::require_child_text(change, "leadChangeRecord", "activityDateTime")?;
    let activity_type = response::require_child_text(change, "leadChangeRecord", "activityType")?;
    // Asset name and person id are absent for several activity types.
    let mktg_asset_name = response::child_text(change, "mktgAssetName").unwrap_or_default();
    let mkt_person_id = response::child_text(change, "mktPersonId").unwrap_or_default();

    let mut record = ActivityRecord::new(
        &id,
        &activity_date_time,
        &activity_type,
        &mktg_asset_name,
        &mkt_person_id,
    );

    if let Some(attributes) = response::child(change, "activityAttributes") {
        for attribute in response::children_named(attributes, "attribute") {
            let name = response::require_child_text(
                attribute,
                "activityAttributes/attribute",
                "attrName",
            )?;
            let value = response::child_text(attribute, "attrValue").unwrap_or_default();
            record.merge_attribute(&name, &value);
        }
    }

    Ok(record)
}

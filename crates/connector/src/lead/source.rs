use crate::{
    error::ConnectorError,
    lead::assembler,
    soap::{client::SoapClient, envelope, response, response::ResponseDocument},
};
use model::{
    pagination::{cursor::StreamPosition, page::PageSummary},
    records::lead::LeadRecord,
};
use tracing::info;

/// Fixed page size for `getMultipleLeads`.
pub const BATCH_SIZE: usize = 1000;

const OPERATION: &str = "paramsGetMultipleLeads";

/// Pages through `getMultipleLeads` for one incremental window.
///
/// Strictly sequential: each continuation token is only valid against the
/// page that produced it, so a page is never requested before the previous
/// one has been fully delivered.
pub struct LeadSource<'a> {
    client: &'a SoapClient,
}

impl<'a> LeadSource<'a> {
    pub fn new(client: &'a SoapClient) -> Self {
        LeadSource { client }
    }

    /// Fetches one page and streams every assembled record through
    /// `on_record` before returning.
    ///
    /// The summary carries a continuation token only when the service
    /// reported records still outstanding; remaining ≤ 0 terminates the
    /// stream even if the payload contained a token.
    pub async fn fetch_page(
        &self,
        oldest_updated_at: &str,
        position: Option<&StreamPosition>,
        on_record: &mut dyn FnMut(LeadRecord),
    ) -> Result<PageSummary, ConnectorError> {
        let body = request_body(oldest_updated_at, position);
        let raw = self.client.call(OPERATION, &body).await?;
        let doc = ResponseDocument::parse(&raw)?;
        extract_page(&doc, on_record)
    }
}

fn request_body(oldest_updated_at: &str, position: Option<&StreamPosition>) -> String {
    let mut body = format!(
        "<leadSelector xsi:type=\"ns1:LastUpdateAtSelector\">{}</leadSelector>{}",
        envelope::element("oldestUpdatedAt", oldest_updated_at),
        envelope::element("batchSize", &BATCH_SIZE.to_string()),
    );
    if let Some(position) = position {
        body.push_str(&envelope::element("streamPosition", position.as_str()));
    }
    body
}

fn extract_page(
    doc: &ResponseDocument,
    on_record: &mut dyn FnMut(LeadRecord),
) -> Result<PageSummary, ConnectorError> {
    let remaining_text = doc.require_text("remainingCount")?;
    let remaining: i64 = remaining_text.parse().map_err(|_| {
        ConnectorError::InvalidDocument(format!("remainingCount is not a number: {remaining_text}"))
    })?;
    info!("Remaining records: {remaining}");

    let mut record_count = 0;
    // An absent record list is a legitimate empty page.
    if let Some(list) = doc.find("leadRecordList") {
        for lead in response::children_named(list, "leadRecord") {
            on_record(assembler::assemble_lead(lead)?);
            record_count += 1;
        }
    }

    let next_position = if remaining > 0 {
        let token = doc
            .text("newStreamPosition")
            .filter(|token| !token.is_empty())
            .ok_or_else(|| ConnectorError::missing("newStreamPosition"))?;
        Some(StreamPosition::new(token))
    } else {
        None
    };

    Ok(PageSummary {
        record_count,
        remaining,
        next_position,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(remaining: i64, position: Option<&str>, leads: &str) -> String {
        let position = position
            .map(|p| format!("<newStreamPosition>{p}</newStreamPosition>"))
            .unwrap_or_default();
        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<SOAP-ENV:Envelope xmlns:SOAP-ENV="http://schemas.xmlsoap.org/soap/envelope/" xmlns:ns1="http://www.marketo.com/mktows/">
  <SOAP-ENV:Body>
    <ns1:successGetMultipleLeads>
      <result>
        <remainingCount>{remaining}</remainingCount>
        {position}
        <leadRecordList>{leads}</leadRecordList>
      </result>
    </ns1:successGetMultipleLeads>
  </SOAP-ENV:Body>
</SOAP-ENV:Envelope>"#
        )
    }

    const LEAD: &str = "<leadRecord><Id>1</Id><Email>a@example.com</Email></leadRecord>";

    fn drain(xml: &str) -> Result<(PageSummary, Vec<LeadRecord>), ConnectorError> {
        let doc = ResponseDocument::parse(xml)?;
        let mut records = Vec::new();
        let summary = extract_page(&doc, &mut |record| records.push(record))?;
        Ok((summary, records))
    }

    #[test]
    fn surfaces_the_cursor_while_records_remain() {
        let (summary, records) = drain(&page(250, Some("opaque-token"), LEAD)).unwrap();

        assert_eq!(summary.remaining, 250);
        assert_eq!(summary.record_count, 1);
        assert_eq!(records.len(), 1);
        assert_eq!(
            summary.next_position,
            Some(StreamPosition::new("opaque-token"))
        );
    }

    #[test]
    fn zero_remaining_drops_the_cursor_even_when_present() {
        let (summary, _) = drain(&page(0, Some("stale-token"), LEAD)).unwrap();

        assert_eq!(summary.next_position, None);
        assert!(!summary.has_more());
    }

    #[test]
    fn negative_remaining_also_terminates() {
        let (summary, _) = drain(&page(-1, Some("stale-token"), "")).unwrap();

        assert_eq!(summary.next_position, None);
    }

    #[test]
    fn remaining_without_a_cursor_is_malformed() {
        match drain(&page(10, None, LEAD)) {
            Err(ConnectorError::MalformedResponse { path }) => {
                assert_eq!(path, "newStreamPosition");
            }
            other => panic!("expected MalformedResponse, got {other:?}"),
        }
    }

    #[test]
    fn empty_page_with_zero_remaining_is_a_complete_result() {
        let xml = r#"<?xml version="1.0"?>
<SOAP-ENV:Envelope xmlns:SOAP-ENV="http://schemas.xmlsoap.org/soap/envelope/">
  <SOAP-ENV:Body><result><remainingCount>0</remainingCount></result></SOAP-ENV:Body>
</SOAP-ENV:Envelope>"#;
        let (summary, records) = drain(xml).unwrap();

        assert_eq!(summary.record_count, 0);
        assert!(records.is_empty());
        assert_eq!(summary.next_position, None);
    }

    #[test]
    fn missing_remaining_count_is_malformed() {
        let xml = "<result><leadRecordList/></result>";
        assert!(matches!(
            drain(xml),
            Err(ConnectorError::MalformedResponse { .. })
        ));
    }

    #[test]
    fn continuation_request_carries_the_stream_position() {
        let position = StreamPosition::new("token-1");
        let body = request_body("2015-07-06T19:00:02+00:00", Some(&position));

        assert!(body.contains("<oldestUpdatedAt>2015-07-06T19:00:02+00:00</oldestUpdatedAt>"));
        assert!(body.contains("<batchSize>1000</batchSize>"));
        assert!(body.contains("<streamPosition>token-1</streamPosition>"));
    }

    #[test]
    fn first_request_has_no_stream_position() {
        let body = request_body("2015-07-06T19:00:02+00:00", None);
        assert!(!body.contains("streamPosition"));
    }
}

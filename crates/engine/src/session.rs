use crate::{config::SyncConfig, error::EngineError, projection, watermark};
use connector::{
    activity::source::ActivitySource,
    lead::{metadata, source::LeadSource},
    soap::client::SoapClient,
};
use model::{
    records::{activity::ActivityRecord, lead::LeadRecord},
    schema::column::{self, ColumnSpec},
};
use tracing::{debug, info};

/// Sink verdict after each delivered row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncControl {
    Continue,
    /// Finish delivering the page in flight, then stop issuing requests.
    Stop,
}

/// Totals for one completed sync run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncStats {
    pub pages: usize,
    pub records: usize,
}

/// One sync invocation: owns the client and the cursor state.
///
/// Sessions are single-use and strictly sequential. Each continuation token
/// is only valid against the page that produced it, so there is nothing to
/// parallelize without redesigning the cursor contract.
pub struct SyncSession {
    client: SoapClient,
    config: SyncConfig,
}

impl SyncSession {
    pub fn new(config: SyncConfig) -> Result<Self, EngineError> {
        let client = SoapClient::new(&config.endpoint, &config.user_id, &config.encryption_key)?;
        Ok(SyncSession::with_client(config, client))
    }

    /// Session over an already-built client; the seam scripted tests use.
    pub fn with_client(config: SyncConfig, client: SoapClient) -> Self {
        debug!(wsdl = %config.wsdl_url(), "session configured");
        SyncSession { client, config }
    }

    /// The fixed output columns for this session, validated from config.
    /// Discovery runs (`guess_schema`) don't need any to be configured.
    pub fn sync_columns(&self) -> Result<Vec<ColumnSpec>, EngineError> {
        Ok(self.config.build_columns()?)
    }

    /// Drains every lead page since the configured watermark, handing each
    /// projected row to `on_row` in column order.
    ///
    /// Terminates normally only when a page reports a non-positive remaining
    /// count; an empty first page is a valid zero-record sync. Any fetch
    /// error aborts the run untouched.
    pub async fn sync_leads<F>(&self, mut on_row: F) -> Result<SyncStats, EngineError>
    where
        F: FnMut(Vec<Option<String>>) -> SyncControl,
    {
        // Column and watermark problems surface before the first call.
        let columns = self.config.build_columns()?;
        let oldest_updated_at = watermark::normalize(&self.config.last_updated_at)?;
        let source = LeadSource::new(&self.client);

        let mut stats = SyncStats::default();
        let mut position = None;
        let mut stopped = false;

        loop {
            let mut delivered = 0usize;
            let mut deliver = |record: LeadRecord| {
                delivered += 1;
                if on_row(projection::project(&record, &columns)) == SyncControl::Stop {
                    stopped = true;
                }
            };
            let summary = source
                .fetch_page(&oldest_updated_at, position.as_ref(), &mut deliver)
                .await?;

            stats.pages += 1;
            stats.records += delivered;
            position = summary.next_position;

            if position.is_none() {
                break;
            }
            if stopped {
                info!("Sink requested stop after {} page(s)", stats.pages);
                break;
            }
        }

        info!(
            pages = stats.pages,
            records = stats.records,
            "lead sync complete"
        );
        Ok(stats)
    }

    /// Derives a column list from the remote field catalog.
    pub async fn guess_schema(&self) -> Result<Vec<ColumnSpec>, EngineError> {
        let fields = metadata::describe_lead_fields(&self.client).await?;
        Ok(column::build_columns(&fields))
    }

    /// Lead-change activity since the configured watermark.
    pub async fn fetch_activities(&self) -> Result<Vec<ActivityRecord>, EngineError> {
        let oldest_created_at = watermark::normalize(&self.config.last_updated_at)?;
        let source = ActivitySource::new(&self.client);
        Ok(source.fetch_since(&oldest_created_at).await?)
    }
}

use crate::pagination::cursor::StreamPosition;
use serde::{Deserialize, Serialize};

/// Bookkeeping for one drained page.
///
/// Records themselves are streamed to the caller's callback while the page
/// is parsed; only the pagination state comes back in the summary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageSummary {
    /// Number of records delivered from this page.
    pub record_count: usize,

    /// Server-reported count of records not yet returned for the selector.
    /// This is the authoritative termination signal.
    pub remaining: i64,

    /// Token for the next page. `None` means the result set is drained.
    pub next_position: Option<StreamPosition>,
}

impl PageSummary {
    pub fn has_more(&self) -> bool {
        self.next_position.is_some()
    }
}

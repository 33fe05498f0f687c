//! History record types.

use lp_engine::{ComparisonResult, winners};
use serde::{Deserialize, Serialize};

pub type RecordId = String;

/// One timestamped comparison batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    /// Creation time in epoch milliseconds, as text.
    pub id: RecordId,
    /// Human-readable creation time.
    pub date: String,
    pub results: Vec<ComparisonResult>,
}

impl HistoryRecord {
    /// Creation time recovered from the id, when it is numeric.
    pub fn created_millis(&self) -> Option<i64> {
        self.id.parse().ok()
    }

    pub fn winners(&self) -> impl Iterator<Item = &ComparisonResult> {
        winners(&self.results)
    }
}

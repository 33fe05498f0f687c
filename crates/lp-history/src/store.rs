//! History store API.

use std::fmt::{self, Write as _};

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local, TimeZone};
use lp_engine::ComparisonResult;
use tracing::{debug, info, warn};

use crate::storage::Storage;
use crate::types::HistoryRecord;
use crate::{HistoryError, HistoryResult};

/// Storage key holding the serialized record list.
pub const HISTORY_KEY: &str = "comparisonHistory";

/// Records kept; older ones are evicted.
pub const MAX_HISTORY: usize = 10;

/// Day-first local timestamp, e.g. `18/10/2026, 14:03:05`.
pub const DEFAULT_DATE_FORMAT: &str = "%d/%m/%Y, %H:%M:%S";

#[derive(Debug, Clone)]
pub struct HistoryOptions {
    pub max_records: usize,
    pub date_format: String,
}

impl Default for HistoryOptions {
    fn default() -> Self {
        Self {
            max_records: MAX_HISTORY,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

impl HistoryOptions {
    /// Returns a description of the first problem found, if any.
    pub fn problem(&self) -> Option<String> {
        if self.max_records == 0 {
            return Some("history must keep at least one record".to_string());
        }
        if StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error)) {
            return Some(format!("invalid date format {:?}", self.date_format));
        }
        None
    }
}

fn format_date<Tz>(now: &DateTime<Tz>, pattern: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let mut out = String::new();
    if write!(out, "{}", now.format(pattern)).is_err() {
        out.clear();
        let _ = write!(out, "{}", now.format(DEFAULT_DATE_FORMAT));
    }
    out
}

/// Newest-first list of past comparisons mirrored to durable storage.
///
/// Every mutation rewrites the stored list in one overwrite before the
/// in-memory list changes, so the two never diverge after a failed write.
#[derive(Debug)]
pub struct HistoryStore<S> {
    storage: S,
    records: Vec<HistoryRecord>,
    options: HistoryOptions,
}

impl<S: Storage> HistoryStore<S> {
    /// Load with default options.
    pub fn load(storage: S) -> Self {
        Self::load_with(storage, HistoryOptions::default())
    }

    /// Read the persisted list. Missing, unreadable or malformed data yields
    /// an empty history.
    pub fn load_with(storage: S, options: HistoryOptions) -> Self {
        let mut store = Self {
            storage,
            records: Vec::new(),
            options,
        };
        store.reload();
        store
    }

    /// Re-read the persisted list, discarding in-memory state.
    pub fn reload(&mut self) {
        self.records = match self.storage.get(HISTORY_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<HistoryRecord>>(&raw) {
                Ok(mut records) => {
                    records.truncate(self.options.max_records.max(1));
                    records
                }
                Err(err) => {
                    warn!(%err, "discarding unreadable comparison history");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(err) => {
                warn!(%err, "comparison history could not be read");
                Vec::new()
            }
        };
        debug!(records = self.records.len(), "history loaded");
    }

    pub fn records(&self) -> &[HistoryRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn options(&self) -> &HistoryOptions {
        &self.options
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Record a batch stamped with the current local time.
    pub fn record(&mut self, results: Vec<ComparisonResult>) -> HistoryResult<&HistoryRecord> {
        self.record_at(results, Local::now())
    }

    /// Record a batch stamped with `now`.
    ///
    /// Ids are epoch milliseconds, bumped past the newest record when two
    /// batches land in the same millisecond. A stored newest id at `i64::MAX`
    /// leaves no room and is reported as [`HistoryError::IdOverflow`].
    pub fn record_at<Tz>(
        &mut self,
        results: Vec<ComparisonResult>,
        now: DateTime<Tz>,
    ) -> HistoryResult<&HistoryRecord>
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        if results.is_empty() {
            return Err(HistoryError::EmptyBatch);
        }

        let mut millis = now.timestamp_millis();
        if let Some(newest) = self.records.first().and_then(HistoryRecord::created_millis)
            && millis <= newest
        {
            millis = newest
                .checked_add(1)
                .ok_or(HistoryError::IdOverflow { newest })?;
        }

        let record = HistoryRecord {
            id: millis.to_string(),
            date: format_date(&now, &self.options.date_format),
            results,
        };

        let mut updated = Vec::with_capacity(self.records.len() + 1);
        updated.push(record);
        updated.extend(self.records.iter().cloned());
        updated.truncate(self.options.max_records.max(1));

        let json = serde_json::to_string(&updated)?;
        self.storage.set(HISTORY_KEY, &json)?;
        self.records = updated;

        info!(
            id = %self.records[0].id,
            records = self.records.len(),
            "comparison recorded"
        );
        Ok(&self.records[0])
    }

    /// Empty the history and delete the stored key.
    pub fn clear(&mut self) -> HistoryResult<()> {
        self.storage.remove(HISTORY_KEY)?;
        self.records.clear();
        info!("comparison history cleared");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use chrono::FixedOffset;

    fn batch(tag: &str) -> Vec<ComparisonResult> {
        vec![ComparisonResult {
            id: "1".to_string(),
            volume: "1000".to_string(),
            price: tag.to_string(),
            price_per_liter: 12.0,
            is_lowest_price: true,
        }]
    }

    fn at(secs: i64) -> DateTime<FixedOffset> {
        FixedOffset::west_opt(3 * 3600)
            .unwrap()
            .timestamp_opt(secs, 0)
            .unwrap()
    }

    #[test]
    fn date_uses_configured_format() {
        let mut store = HistoryStore::load(MemoryStorage::new());
        // 2026-10-18T12:00:00Z is 09:00 at UTC-3
        let record = store.record_at(batch("a"), at(1_792_324_800)).unwrap();
        assert_eq!(record.date, "18/10/2026, 09:00:00");
        assert_eq!(record.id, "1792324800000");
    }

    #[test]
    fn same_millisecond_ids_stay_increasing() {
        let mut store = HistoryStore::load(MemoryStorage::new());
        store.record_at(batch("a"), at(100)).unwrap();
        store.record_at(batch("b"), at(100)).unwrap();
        store.record_at(batch("c"), at(50)).unwrap();

        let ids: Vec<i64> = store
            .records()
            .iter()
            .filter_map(HistoryRecord::created_millis)
            .collect();
        assert_eq!(ids, vec![100_002, 100_001, 100_000]);
    }

    #[test]
    fn maximal_stored_id_is_an_error_not_a_panic() {
        let mut storage = MemoryStorage::new();
        let stored = vec![HistoryRecord {
            id: i64::MAX.to_string(),
            date: String::new(),
            results: batch("old"),
        }];
        storage
            .set(HISTORY_KEY, &serde_json::to_string(&stored).unwrap())
            .unwrap();

        let mut store = HistoryStore::load(storage);
        assert!(matches!(
            store.record_at(batch("new"), at(100)),
            Err(HistoryError::IdOverflow { newest: i64::MAX })
        ));
        assert_eq!(store.records(), stored.as_slice());
        let raw = store.storage().get(HISTORY_KEY).unwrap().unwrap();
        let persisted: Vec<HistoryRecord> = serde_json::from_str(&raw).unwrap();
        assert_eq!(persisted, stored);
    }

    #[test]
    fn empty_batch_is_refused() {
        let mut store = HistoryStore::load(MemoryStorage::new());
        assert!(matches!(
            store.record_at(Vec::new(), at(1)),
            Err(HistoryError::EmptyBatch)
        ));
        assert!(!store.storage().contains(HISTORY_KEY));
    }

    #[test]
    fn options_problems() {
        assert!(HistoryOptions::default().problem().is_none());
        let zero = HistoryOptions {
            max_records: 0,
            ..Default::default()
        };
        assert!(zero.problem().is_some());
        let bad_format = HistoryOptions {
            date_format: "%Q%".to_string(),
            ..Default::default()
        };
        assert!(bad_format.problem().is_some());
    }

    #[test]
    fn corrupt_storage_loads_empty() {
        let mut storage = MemoryStorage::new();
        storage.set(HISTORY_KEY, "{not json").unwrap();
        let store = HistoryStore::load(storage);
        assert!(store.is_empty());
    }
}

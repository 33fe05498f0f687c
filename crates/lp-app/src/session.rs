//! One comparison form plus its history.

use lp_core::EntryId;
use lp_engine::{ComparisonResult, compute};
use lp_entries::{Entry, EntryStore, Volume};
use lp_history::{FileStorage, HistoryRecord, HistoryStore, Storage};
use tracing::debug;

use crate::config::ComparatorConfig;
use crate::error::AppResult;

/// Entry store, engine and history wired together the way a front end
/// drives them: edit rows, calculate, show current results and history.
#[derive(Debug)]
pub struct ComparisonSession<S> {
    entries: EntryStore,
    history: HistoryStore<S>,
    current: Vec<ComparisonResult>,
    currency_symbol: String,
}

impl ComparisonSession<FileStorage> {
    /// Session backed by the configured storage directory.
    pub fn open(config: &ComparatorConfig) -> AppResult<Self> {
        let storage = FileStorage::new(config.resolved_storage_dir())?;
        Self::new(config, storage)
    }
}

impl<S: Storage> ComparisonSession<S> {
    pub fn new(config: &ComparatorConfig, storage: S) -> AppResult<Self> {
        config.validate()?;
        let entries = EntryStore::new(config.initial_entries, config.min_entries)?;
        let history = HistoryStore::load_with(storage, config.history_options());
        debug!(
            rows = entries.len(),
            history = history.len(),
            "comparison session opened"
        );
        Ok(Self {
            entries,
            history,
            current: Vec::new(),
            currency_symbol: config.currency_symbol.clone(),
        })
    }

    pub fn entries(&self) -> &[Entry] {
        self.entries.entries()
    }

    pub fn can_remove(&self) -> bool {
        self.entries.can_remove()
    }

    pub fn add_entry(&mut self) -> AppResult<EntryId> {
        Ok(self.entries.add_entry()?)
    }

    pub fn remove_entry(&mut self, id: EntryId) -> AppResult<()> {
        self.entries.remove_entry(id)?;
        Ok(())
    }

    pub fn set_volume(&mut self, id: EntryId, volume: Volume) -> AppResult<()> {
        Ok(self.entries.set_volume(id, volume)?)
    }

    pub fn set_custom_volume(&mut self, id: EntryId, value: impl Into<String>) -> AppResult<()> {
        Ok(self.entries.set_custom_volume(id, value)?)
    }

    pub fn set_price(&mut self, id: EntryId, value: impl Into<String>) -> AppResult<()> {
        Ok(self.entries.set_price(id, value)?)
    }

    /// Compare the current rows and record the batch.
    ///
    /// When nothing usable was entered the error is returned and neither the
    /// current results nor the history change. A storage failure is returned
    /// after the current results were updated.
    pub fn calculate(&mut self) -> AppResult<&[ComparisonResult]> {
        let snapshot = self.entries.snapshot();
        let results = compute(&snapshot)?;
        self.current = results.clone();
        self.history.record(results)?;
        Ok(&self.current)
    }

    /// Results of the last successful calculation.
    pub fn current_results(&self) -> &[ComparisonResult] {
        &self.current
    }

    pub fn history(&self) -> &[HistoryRecord] {
        self.history.records()
    }

    pub fn clear_history(&mut self) -> AppResult<()> {
        Ok(self.history.clear()?)
    }

    pub fn currency_symbol(&self) -> &str {
        &self.currency_symbol
    }

    /// Hand back the storage, e.g. to simulate a restart.
    pub fn into_storage(self) -> S {
        self.history.into_storage()
    }
}

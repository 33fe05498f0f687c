//! Entry store API.

use lp_core::{EntryId, Id};
use tracing::debug;

use crate::entry::{Entry, Volume};
use crate::{EntryError, EntryResult};

/// Rows a fresh comparison form starts with.
pub const DEFAULT_INITIAL_ENTRIES: usize = 3;

/// Rows that can never be removed.
pub const DEFAULT_MIN_ENTRIES: usize = 1;

/// Ordered list of draft rows plus the id allocator.
///
/// Ids come from a monotonic counter seeded with max-existing-plus-one, so a
/// removed row's id is never handed out again within the store's lifetime.
#[derive(Debug, Clone)]
pub struct EntryStore {
    entries: Vec<Entry>,
    min_entries: usize,
    next_id: EntryId,
}

impl EntryStore {
    /// Store with [`DEFAULT_INITIAL_ENTRIES`] blank rows and
    /// [`DEFAULT_MIN_ENTRIES`] as the floor.
    pub fn with_defaults() -> EntryResult<Self> {
        Self::new(DEFAULT_INITIAL_ENTRIES, DEFAULT_MIN_ENTRIES)
    }

    /// Store with `initial` blank rows (ids `1..=initial`).
    pub fn new(initial: usize, min_entries: usize) -> EntryResult<Self> {
        if min_entries == 0 {
            return Err(EntryError::InvalidConfig {
                message: "minimum row count must be at least 1".to_string(),
            });
        }
        if initial < min_entries {
            return Err(EntryError::InvalidConfig {
                message: format!(
                    "initial row count {initial} is below the minimum {min_entries}"
                ),
            });
        }

        let mut store = Self {
            entries: Vec::with_capacity(initial),
            min_entries,
            next_id: Id::FIRST,
        };
        for _ in 0..initial {
            store.push_blank()?;
        }
        Ok(store)
    }

    /// Rebuild a store around existing rows (e.g. restored by a front end).
    pub fn from_entries(entries: Vec<Entry>, min_entries: usize) -> EntryResult<Self> {
        if min_entries == 0 || entries.len() < min_entries {
            return Err(EntryError::InvalidConfig {
                message: format!(
                    "{} row(s) supplied, at least {} required",
                    entries.len(),
                    min_entries.max(1)
                ),
            });
        }
        for (i, entry) in entries.iter().enumerate() {
            if entries[..i].iter().any(|other| other.id == entry.id) {
                return Err(EntryError::InvalidConfig {
                    message: format!("duplicate entry id {}", entry.id),
                });
            }
        }

        let next_id = Id::after_max(entries.iter().map(|e| e.id))?;
        Ok(Self {
            entries,
            min_entries,
            next_id,
        })
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Owned copy handed to the comparison engine.
    pub fn snapshot(&self) -> Vec<Entry> {
        self.entries.clone()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn min_entries(&self) -> usize {
        self.min_entries
    }

    /// Whether remove buttons should be offered at all.
    pub fn can_remove(&self) -> bool {
        self.entries.len() > self.min_entries
    }

    pub fn get(&self, id: EntryId) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id == id)
    }

    fn get_mut(&mut self, id: EntryId) -> EntryResult<&mut Entry> {
        self.entries
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(EntryError::NotFound { id })
    }

    fn push_blank(&mut self) -> EntryResult<EntryId> {
        let id = self.next_id;
        self.next_id = id.next()?;
        self.entries.push(Entry::blank(id));
        Ok(id)
    }

    /// Append a blank row and return its id.
    pub fn add_entry(&mut self) -> EntryResult<EntryId> {
        let id = self.push_blank()?;
        debug!(%id, rows = self.entries.len(), "entry added");
        Ok(id)
    }

    /// Remove a row, refusing to go below the minimum row count.
    pub fn remove_entry(&mut self, id: EntryId) -> EntryResult<Entry> {
        let index = self
            .entries
            .iter()
            .position(|e| e.id == id)
            .ok_or(EntryError::NotFound { id })?;

        if !self.can_remove() {
            debug!(%id, min = self.min_entries, "entry removal refused");
            return Err(EntryError::MinimumEntries {
                min: self.min_entries,
            });
        }

        let removed = self.entries.remove(index);
        debug!(%id, rows = self.entries.len(), "entry removed");
        Ok(removed)
    }

    pub fn set_volume(&mut self, id: EntryId, volume: Volume) -> EntryResult<()> {
        let entry = self.get_mut(id)?;
        entry.select_volume(volume);
        debug!(%id, volume = %volume, "volume selected");
        Ok(())
    }

    /// Accepted regardless of the current selection; the engine ignores it
    /// unless the row is custom.
    pub fn set_custom_volume(&mut self, id: EntryId, value: impl Into<String>) -> EntryResult<()> {
        self.get_mut(id)?.custom_volume = Some(value.into());
        Ok(())
    }

    pub fn set_price(&mut self, id: EntryId, value: impl Into<String>) -> EntryResult<()> {
        self.get_mut(id)?.price = value.into();
        Ok(())
    }
}

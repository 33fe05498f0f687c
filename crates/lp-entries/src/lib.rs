//! lp-entries: the mutable list of draft comparison rows.
//!
//! The store performs no numeric validation; whatever the user typed is kept
//! verbatim and judged later by the comparison engine.

pub mod entry;
pub mod error;
pub mod store;

pub use entry::{CUSTOM_SENTINEL, Entry, STANDARD_VOLUMES_ML, Volume};
pub use error::{EntryError, EntryResult};
pub use store::{DEFAULT_INITIAL_ENTRIES, DEFAULT_MIN_ENTRIES, EntryStore};

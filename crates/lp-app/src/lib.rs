//! Shared application service layer for literprice.
//!
//! This crate provides a single interface for front ends, wiring the entry
//! store, the comparison engine and the history store together, plus the
//! configuration and display helpers they share.

pub mod config;
pub mod error;
pub mod format;
pub mod session;

// Re-export key types for convenience
pub use config::{ComparatorConfig, default_storage_dir};
pub use error::{AppError, AppResult};
pub use format::{ResultRow, format_price_per_liter, history_summary, result_rows};
pub use session::ComparisonSession;

pub use lp_core::EntryId;
pub use lp_engine::ComparisonResult;
pub use lp_entries::{Entry, STANDARD_VOLUMES_ML, Volume};
pub use lp_history::{FileStorage, HistoryRecord, MemoryStorage, Storage};

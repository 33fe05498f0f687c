//! lp-history: capped, persisted log of past comparisons.

pub mod storage;
pub mod store;
pub mod types;

pub use storage::{FileStorage, MemoryStorage, Storage};
pub use store::{DEFAULT_DATE_FORMAT, HISTORY_KEY, HistoryOptions, HistoryStore, MAX_HISTORY};
pub use types::*;

pub type HistoryResult<T> = Result<T, HistoryError>;

#[derive(thiserror::Error, Debug)]
pub enum HistoryError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid storage key: {key:?}")]
    InvalidKey { key: String },

    #[error("Refusing to record an empty comparison")]
    EmptyBatch,

    #[error("No record id left after {newest}")]
    IdOverflow { newest: i64 },
}

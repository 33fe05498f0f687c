//! Error types for the lp-app service layer.

use std::path::PathBuf;

/// Application error type that wraps errors from the backend crates and
/// provides a single error interface for every front end.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    Entry(#[from] lp_entries::EntryError),

    #[error("{0}")]
    Comparison(#[from] lp_engine::EngineError),

    #[error("History error: {0}")]
    History(String),

    #[error("Failed to read config file: {path}")]
    ConfigFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Result type for lp-app operations.
pub type AppResult<T> = Result<T, AppError>;

impl From<lp_history::HistoryError> for AppError {
    fn from(err: lp_history::HistoryError) -> Self {
        AppError::History(err.to_string())
    }
}

impl AppError {
    /// Failures the user caused and can fix from the form, as opposed to
    /// environment problems.
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            AppError::Comparison(_)
                | AppError::Entry(lp_entries::EntryError::MinimumEntries { .. })
        )
    }
}

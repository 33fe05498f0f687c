use lp_core::{CoreError, EntryId};
use thiserror::Error;

pub type EntryResult<T> = Result<T, EntryError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EntryError {
    #[error("Entry not found: {id}")]
    NotFound { id: EntryId },

    #[error("At least {min} entry row(s) must remain")]
    MinimumEntries { min: usize },

    #[error("Invalid volume selection: {text:?}")]
    InvalidVolume { text: String },

    #[error("Invalid entry store configuration: {message}")]
    InvalidConfig { message: String },

    #[error(transparent)]
    Core(#[from] CoreError),
}

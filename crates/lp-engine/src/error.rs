use thiserror::Error;

pub type EngineResult<T> = Result<T, EngineError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Every submitted row was incomplete, non-numeric or non-positive.
    #[error(
        "No usable entries among {submitted} row(s): fill in a volume and a price for at least one item"
    )]
    NoUsableEntries { submitted: usize },
}

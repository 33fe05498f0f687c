use thiserror::Error;

pub type CoreResult<T> = Result<T, CoreError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    #[error("Invalid identifier: {text:?}")]
    InvalidId { text: String },

    #[error("Identifier space exhausted after {last}")]
    IdOverflow { last: u32 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },
}

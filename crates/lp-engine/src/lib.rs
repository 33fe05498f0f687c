//! lp-engine: stateless price-per-liter comparison.
//!
//! Turns a snapshot of draft entries into an ordered, annotated result batch.

pub mod compute;
pub mod error;
pub mod types;

pub use compute::{Candidate, compute, resolve};
pub use error::{EngineError, EngineResult};
pub use types::*;

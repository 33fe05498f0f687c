//! lp-core: stable foundation for literprice.
//!
//! Contains:
//! - numeric (Real + lenient number parsing + price-per-liter)
//! - ids (compact, stable row identifiers)
//! - error (shared error types)

pub mod error;
pub mod ids;
pub mod numeric;

// Re-exports: nice ergonomics for downstream crates
pub use error::{CoreError, CoreResult};
pub use ids::*;
pub use numeric::*;

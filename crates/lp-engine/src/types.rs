//! Comparison result types.

use lp_core::Real;
use serde::{Deserialize, Serialize};

/// One validated, computed row of a comparison batch.
///
/// Field names follow the persisted layout (`pricePerLiter`, `isLowestPrice`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    /// Source entry id, as text.
    pub id: String,
    /// Resolved volume in millilitres, as text.
    pub volume: String,
    /// Raw price text as it was typed.
    pub price: String,
    pub price_per_liter: Real,
    pub is_lowest_price: bool,
}

/// Smallest price-per-liter in a batch.
pub fn lowest_price(results: &[ComparisonResult]) -> Option<Real> {
    results
        .iter()
        .map(|r| r.price_per_liter)
        .min_by(|a, b| a.total_cmp(b))
}

/// Rows flagged as cheapest, in batch order.
pub fn winners(results: &[ComparisonResult]) -> impl Iterator<Item = &ComparisonResult> {
    results.iter().filter(|r| r.is_lowest_price)
}

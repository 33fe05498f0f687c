//! Display helpers. Rounding happens here only, never in the comparison.

use lp_core::Real;
use lp_engine::ComparisonResult;
use lp_history::HistoryRecord;

/// Price-per-liter as shown to the user, e.g. `R$ 15.15`.
pub fn format_price_per_liter(value: Real, currency: &str) -> String {
    format!("{} {:.2}", currency, value)
}

/// One rendered results-table row.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultRow {
    /// Position in the batch, `Item 1`, `Item 2`, ...
    pub label: String,
    pub volume: String,
    pub price: String,
    pub price_per_liter: String,
    pub is_lowest_price: bool,
}

pub fn result_rows(results: &[ComparisonResult], currency: &str) -> Vec<ResultRow> {
    results
        .iter()
        .enumerate()
        .map(|(i, r)| ResultRow {
            label: format!("Item {}", i + 1),
            volume: format!("{} ml", r.volume),
            price: format!("{} {}", currency, r.price.trim()),
            price_per_liter: format_price_per_liter(r.price_per_liter, currency),
            is_lowest_price: r.is_lowest_price,
        })
        .collect()
}

/// One-line description of a past comparison.
pub fn history_summary(record: &HistoryRecord, currency: &str) -> String {
    let best: Vec<String> = record
        .results
        .iter()
        .enumerate()
        .filter(|(_, r)| r.is_lowest_price)
        .map(|(i, r)| {
            format!(
                "Item {} ({})",
                i + 1,
                format_price_per_liter(r.price_per_liter, currency)
            )
        })
        .collect();

    if best.is_empty() {
        format!("{}: {} item(s)", record.date, record.results.len())
    } else {
        format!(
            "{}: {} item(s), best {}",
            record.date,
            record.results.len(),
            best.join(", ")
        )
    }
}

//! Validation, normalisation and ranking.

use lp_core::{Real, parse_positive, price_per_liter};
use lp_entries::{Entry, Volume};
use tracing::debug;

use crate::types::{ComparisonResult, lowest_price};
use crate::{EngineError, EngineResult};

/// An entry whose volume and price both parsed to finite positive numbers.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate<'a> {
    pub entry: &'a Entry,
    pub volume_ml: Real,
    pub price: Real,
}

/// Resolve an entry's effective volume and price.
///
/// Returns `None` for rows that must be left out of the comparison: nothing
/// selected, custom with no usable typed value, or a non-positive, non-finite
/// or non-numeric volume or price.
pub fn resolve(entry: &Entry) -> Option<Candidate<'_>> {
    let volume_ml = match entry.volume {
        Volume::Unset => return None,
        Volume::Standard(ml) => Some(Real::from(ml)).filter(|v| *v > 0.0)?,
        Volume::Custom => parse_positive(entry.custom_volume.as_deref()?)?,
    };
    let price = parse_positive(&entry.price)?;
    Some(Candidate {
        entry,
        volume_ml,
        price,
    })
}

/// Volume text recorded in the result: the preset, or the typed value.
fn volume_label(entry: &Entry) -> String {
    match entry.volume {
        Volume::Custom => entry
            .custom_volume
            .as_deref()
            .map(str::trim)
            .unwrap_or_default()
            .to_string(),
        other => other.to_string(),
    }
}

/// Compare a snapshot of entries.
///
/// Unusable rows are dropped without complaint; the batch only fails when
/// nothing usable is left. Results keep input order. Every row whose
/// price-per-liter is exactly equal to the minimum is flagged, so ties all win.
pub fn compute(entries: &[Entry]) -> EngineResult<Vec<ComparisonResult>> {
    let mut results: Vec<ComparisonResult> = entries
        .iter()
        .filter_map(resolve)
        .map(|c| ComparisonResult {
            id: c.entry.id.to_string(),
            volume: volume_label(c.entry),
            price: c.entry.price.clone(),
            price_per_liter: price_per_liter(c.price, c.volume_ml),
            is_lowest_price: false,
        })
        .collect();

    let Some(lowest) = lowest_price(&results) else {
        debug!(submitted = entries.len(), "no usable entries");
        return Err(EngineError::NoUsableEntries {
            submitted: entries.len(),
        });
    };

    // Exact comparison on purpose: identical inputs divide to identical bits.
    for result in &mut results {
        result.is_lowest_price = result.price_per_liter == lowest;
    }

    debug!(
        submitted = entries.len(),
        usable = results.len(),
        lowest,
        "comparison computed"
    );
    Ok(results)
}

/// Floating point type used throughout the system
pub type Real = f64;

/// Millilitres per litre.
pub const ML_PER_LITER: Real = 1000.0;

/// Parse raw user input as a number. Surrounding whitespace is ignored.
///
/// Returns `None` for empty or malformed text. Non-finite spellings such as
/// `"inf"` or `"NaN"` parse, so callers still need [`is_usable`].
pub fn parse_number(raw: &str) -> Option<Real> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<Real>().ok()
}

/// A quantity takes part in a comparison only when finite and strictly positive.
pub fn is_usable(v: Real) -> bool {
    v.is_finite() && v > 0.0
}

/// [`parse_number`] followed by [`is_usable`].
pub fn parse_positive(raw: &str) -> Option<Real> {
    parse_number(raw).filter(|v| is_usable(*v))
}

/// Price normalised to one litre: `price / (volume_ml / 1000)`.
///
/// No rounding is applied; identical inputs give bit-identical outputs.
pub fn price_per_liter(price: Real, volume_ml: Real) -> Real {
    price / (volume_ml / ML_PER_LITER)
}

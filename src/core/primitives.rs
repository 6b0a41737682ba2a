/// Division that maps a zero (or non-finite) result to `0.0`.
///
/// Layout math regularly divides by tick or category counts that are
/// legitimately zero for empty datasets.
#[must_use]
pub fn safe_div(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 || !denominator.is_finite() {
        return 0.0;
    }
    let value = numerator / denominator;
    if value.is_finite() { value } else { 0.0 }
}

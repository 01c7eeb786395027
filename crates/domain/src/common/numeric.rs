//! Numeric rounding utilities.

/// Rounds a value to two decimal places.
///
/// Weight and cost aggregation rounds at every step, so deep trees never
/// accumulate floating-point drift beyond a cent / hundredth of a pound.
///
/// # Examples
///
/// ```
/// use sheetforge_domain::common::round2;
///
/// assert_eq!(round2(2.336), 2.34);
/// assert_eq!(round2(2.0), 2.0);
/// ```
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

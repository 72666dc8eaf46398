/// Converts an `f64` to `i64` if the value is finite, within range, and not
/// fractional.
///
/// This is the "to exact integer" coercion used by bitwise operators and
/// array indices: a float counts as an integer exactly when its fractional
/// part is zero.
///
/// # Parameters
/// - `value`: The floating-point value to convert.
///
/// # Returns
/// - `Some(i64)`: The converted value.
/// - `None`: If the value is non-finite, fractional, or out of range.
///
/// # Example
/// ```
/// use borno::util::num::f64_to_i64_exact;
///
/// assert_eq!(f64_to_i64_exact(1000.0), Some(1000));
/// assert_eq!(f64_to_i64_exact(-3.0), Some(-3));
/// assert_eq!(f64_to_i64_exact(1.5), None);
/// assert_eq!(f64_to_i64_exact(f64::NAN), None);
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn f64_to_i64_exact(value: f64) -> Option<i64> {
    if !value.is_finite() || value.fract() != 0.0 {
        return None;
    }
    if value < i64::MIN as f64 || value > i64::MAX as f64 {
        return None;
    }
    Some(value as i64)
}

/// Converts an `i64` to a `usize` if and only if it can be represented
/// exactly. Negative values are rejected.
///
/// # Parameters
/// - `value`: The integer value to convert.
///
/// # Returns
/// - `Some(usize)`: The converted value.
/// - `None`: If the value is negative or too large for this platform.
///
/// # Example
/// ```
/// use borno::util::num::i64_to_usize;
///
/// assert_eq!(i64_to_usize(42), Some(42));
/// assert_eq!(i64_to_usize(-1), None);
/// ```
#[must_use]
pub fn i64_to_usize(value: i64) -> Option<usize> {
    usize::try_from(value).ok()
}

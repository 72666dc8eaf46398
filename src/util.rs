/// Numeric conversion helpers.
///
/// This module provides safe functions for converting between integer and
/// floating-point types without silent data loss. The interpreter's bitwise
/// operators and array indices accept floats whose fractional part is zero,
/// and these helpers implement that "exact integer" test in one place.
pub mod num;

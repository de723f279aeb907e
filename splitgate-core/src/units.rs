//! Native/base-unit conversion and share arithmetic.
//!
//! Transfer instructions carry integer base units (10^9 per native unit).
//! A channel's share is multiplied out in floating point and then floored,
//! never rounded: the floor guarantees the sum of constructed transfers
//! cannot exceed the source amount, even when weights carry rounding noise.

/// Base units per native currency unit.
pub const BASE_UNITS_PER_NATIVE: u64 = 1_000_000_000;

/// Convert a native-unit amount to (fractional) base units.
pub fn to_base_units(native: f64) -> f64 {
    native * BASE_UNITS_PER_NATIVE as f64
}

/// Convert integer base units back to native units for reporting.
pub fn to_native(base_units: u64) -> f64 {
    base_units as f64 / BASE_UNITS_PER_NATIVE as f64
}

/// Compute a channel's share: floor(base_units * weight / 100).
///
/// Truncates toward zero. Callers must reject negative inputs first.
pub fn floor_share(base_units: f64, weight_pct: f64) -> u64 {
    (base_units * weight_pct / 100.0).floor() as u64
}

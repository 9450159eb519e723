//! Fixed-decimal rounding.
//!
//! Every displayed quantity is rounded half away from zero at a fixed number
//! of decimals. `f64::round` already rounds half away from zero, so the
//! helpers only scale around it.

/// Round to one decimal place.
#[must_use]
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Round to two decimal places.
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

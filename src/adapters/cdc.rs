//! Built-in CDC 2000 BMI-for-age reference.
//!
//! Yearly calibration points from 24 to 240 months for each gender. The
//! 24-month rows are the CDC `bmiagerev` rows. Later rows take M from the
//! published CDC 50th percentile, with L and S fitted so the curve
//! reproduces the published 5th and 95th percentiles to within 0.15 BMI.
//! Values between the yearly points are linearly interpolated by the
//! engine; load the full monthly table through [`super::json`] when exact
//! CDC values are needed.

use std::sync::OnceLock;

use crate::domain::{GrowthCurve, GrowthReference, LmsPoint};

/// Identifier reported for the built-in reference.
pub const CDC_REFERENCE_NAME: &str = "cdc-2000-yearly-fit";

/// Boys, 2-20 years: (age in months, L, M, S).
const BOYS: [LmsPoint; 19] = [
    LmsPoint::new(24.0, -2.011_181_07, 16.575_027_68, 0.080_592_465),
    LmsPoint::new(36.0, -1.3908, 16.0, 0.07104),
    LmsPoint::new(48.0, -1.4906, 15.7, 0.07110),
    LmsPoint::new(60.0, -1.9138, 15.5, 0.07697),
    LmsPoint::new(72.0, -2.4759, 15.4, 0.08695),
    LmsPoint::new(84.0, -2.9118, 15.5, 0.09481),
    LmsPoint::new(96.0, -3.0206, 15.8, 0.10248),
    LmsPoint::new(108.0, -2.8935, 16.2, 0.11093),
    LmsPoint::new(120.0, -2.6910, 16.6, 0.11997),
    LmsPoint::new(132.0, -2.4685, 17.2, 0.12621),
    LmsPoint::new(144.0, -2.2812, 17.8, 0.13301),
    LmsPoint::new(156.0, -2.1511, 18.5, 0.13604),
    LmsPoint::new(168.0, -2.0861, 19.2, 0.13678),
    LmsPoint::new(180.0, -2.0715, 19.8, 0.13662),
    LmsPoint::new(192.0, -2.0736, 20.5, 0.13375),
    LmsPoint::new(204.0, -2.0936, 21.1, 0.13227),
    LmsPoint::new(216.0, -2.1669, 21.7, 0.12979),
    LmsPoint::new(228.0, -2.2490, 22.2, 0.12995),
    LmsPoint::new(240.0, -2.3681, 22.6, 0.13125),
];

/// Girls, 2-20 years: (age in months, L, M, S).
const GIRLS: [LmsPoint; 19] = [
    LmsPoint::new(24.0, -0.986_608_53, 16.423_396_64, 0.085_451_785),
    LmsPoint::new(36.0, -2.1816, 15.8, 0.07762),
    LmsPoint::new(48.0, -2.5815, 15.3, 0.08033),
    LmsPoint::new(60.0, -2.7920, 15.2, 0.08783),
    LmsPoint::new(72.0, -2.8698, 15.2, 0.09645),
    LmsPoint::new(84.0, -2.6592, 15.5, 0.10780),
    LmsPoint::new(96.0, -2.3996, 15.9, 0.11751),
    LmsPoint::new(108.0, -2.1953, 16.3, 0.13056),
    LmsPoint::new(120.0, -2.0502, 16.9, 0.13758),
    LmsPoint::new(132.0, -1.9777, 17.5, 0.14289),
    LmsPoint::new(144.0, -1.9312, 18.1, 0.14870),
    LmsPoint::new(156.0, -1.9417, 18.7, 0.15038),
    LmsPoint::new(168.0, -1.9801, 19.4, 0.14995),
    LmsPoint::new(180.0, -2.0604, 19.9, 0.15014),
    LmsPoint::new(192.0, -2.1376, 20.4, 0.14924),
    LmsPoint::new(204.0, -2.2164, 20.9, 0.14749),
    LmsPoint::new(216.0, -2.2758, 21.3, 0.14744),
    LmsPoint::new(228.0, -2.3373, 21.5, 0.14940),
    LmsPoint::new(240.0, -2.3639, 21.7, 0.15299),
];

static CDC_REFERENCE: OnceLock<GrowthReference> = OnceLock::new();

/// The shared built-in reference, built on first use.
#[must_use]
pub fn reference() -> &'static GrowthReference {
    CDC_REFERENCE.get_or_init(|| {
        tracing::debug!("Building built-in growth reference {}", CDC_REFERENCE_NAME);
        GrowthReference::new(CDC_REFERENCE_NAME, curve(&BOYS), curve(&GIRLS))
    })
}

/// A table that fails validation is dropped, so lookups for that gender
/// reject instead of panicking.
fn curve(points: &[LmsPoint]) -> Option<GrowthCurve> {
    match GrowthCurve::new(points.to_vec()) {
        Ok(curve) => Some(curve),
        Err(e) => {
            tracing::error!("Built-in growth curve rejected: {}", e);
            None
        }
    }
}

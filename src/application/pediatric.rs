//! Pediatric BMI-for-age evaluation (CDC LMS method).
//!
//! Pipeline: age check -> LMS interpolation -> Z-score -> percentile ->
//! category. Any failed step rejects the whole calculation with `None`;
//! a partially filled result is never produced.
//!
//! The percentile uses the Abramowitz-Stegun 26.2.17 rational
//! approximation of the standard normal CDF (absolute error below 7.5e-8),
//! evaluated on `|z|` and mirrored for negative scores.

use serde::{Deserialize, Serialize};

use crate::domain::rounding::{round1, round2};
use crate::domain::tables::{
    CHILD_MAX_MONTHS, CHILD_MIN_MONTHS, CHILD_OBESE_FROM, CHILD_OVERWEIGHT_FROM,
    CHILD_UNDERWEIGHT_BELOW,
};
use crate::domain::{total_age_months, ChildCategory, Gender, LmsParams, LmsPoint};
use crate::ports::GrowthReferenceSource;

use super::calculator::compute_bmi;

/// Z-scores beyond this magnitude map straight to 0 or 100.
const Z_LIMIT: f64 = 6.0;

const CDF_P: f64 = 0.231_641_9;
const CDF_B1: f64 = 0.319_381_5;
const CDF_B2: f64 = -0.356_563_8;
const CDF_B3: f64 = 1.781_478;
const CDF_B4: f64 = -1.821_256_0;
const CDF_B5: f64 = 1.330_274_4;

/// 1 / sqrt(2 * pi)
const INV_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// BMI-for-age evaluation of one child.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PediatricResult {
    /// BMI rounded to one decimal
    pub bmi: f64,

    /// Z-score rounded to two decimals
    pub z_score: f64,

    /// Percentile on a 0-100 scale, one decimal
    pub percentile: f64,

    pub category: ChildCategory,

    /// Reference median BMI at this age, one decimal
    pub median_bmi: f64,

    /// Weight that would put the child on the median, one decimal
    pub ideal_weight: f64,
}

/// Interpolate LMS parameters at `age_months`.
///
/// Ages outside the curve are clamped to its first or last point.
/// Returns `None` only for an empty curve. `curve` must be ascending by age.
#[must_use]
pub fn interpolate_lms(curve: &[LmsPoint], age_months: f64) -> Option<LmsParams> {
    let first = curve.first()?;
    let last = curve.last()?;

    if age_months <= first.age_months {
        return Some(first.params());
    }
    if age_months >= last.age_months {
        return Some(last.params());
    }

    curve.windows(2).find_map(|pair| {
        let (a, b) = (&pair[0], &pair[1]);
        if age_months >= a.age_months && age_months < b.age_months {
            let t = (age_months - a.age_months) / (b.age_months - a.age_months);
            Some(LmsParams {
                l: a.l + t * (b.l - a.l),
                m: a.m + t * (b.m - a.m),
                s: a.s + t * (b.s - a.s),
            })
        } else {
            None
        }
    })
}

/// Box-Cox Z-score of `bmi` against `lms`.
///
/// Caller guarantees `bmi > 0` and `lms.m > 0`.
#[must_use]
pub fn z_score(bmi: f64, lms: &LmsParams) -> f64 {
    if lms.l == 0.0 {
        (bmi / lms.m).ln() / lms.s
    } else {
        ((bmi / lms.m).powf(lms.l) - 1.0) / (lms.l * lms.s)
    }
}

/// Standard normal CDF of `z` as a percentile rounded to one decimal.
#[must_use]
pub fn percentile(z: f64) -> f64 {
    if z < -Z_LIMIT {
        return 0.0;
    }
    if z > Z_LIMIT {
        return 100.0;
    }

    let x = z.abs();
    let t = 1.0 / (1.0 + CDF_P * x);
    let poly = t * (CDF_B1 + t * (CDF_B2 + t * (CDF_B3 + t * (CDF_B4 + t * CDF_B5))));
    let tail = INV_SQRT_2PI * (-x * x / 2.0).exp() * poly;

    let cdf = if z >= 0.0 { 1.0 - tail } else { tail };
    (cdf * 1000.0).round() / 10.0
}

/// CDC category for a BMI-for-age percentile.
#[must_use]
pub fn classify_child(percentile: f64) -> ChildCategory {
    if percentile < CHILD_UNDERWEIGHT_BELOW {
        ChildCategory::Underweight
    } else if percentile < CHILD_OVERWEIGHT_FROM {
        ChildCategory::Normal
    } else if percentile < CHILD_OBESE_FROM {
        ChildCategory::Overweight
    } else {
        ChildCategory::Obese
    }
}

/// Full BMI-for-age evaluation.
///
/// Returns `None` when the age falls outside 24..=240 months or the
/// reference has no usable curve for `gender`.
#[must_use]
pub fn calculate_child_bmi<R>(
    reference: &R,
    weight_kg: f64,
    height_cm: f64,
    gender: Gender,
    age_years: u32,
    age_months: u32,
) -> Option<PediatricResult>
where
    R: GrowthReferenceSource + ?Sized,
{
    let total_months = total_age_months(age_years, age_months);
    if !(CHILD_MIN_MONTHS..=CHILD_MAX_MONTHS).contains(&total_months) {
        tracing::debug!("Age outside pediatric reference domain");
        return None;
    }

    let Some(curve) = reference.curve(gender) else {
        tracing::warn!("Growth reference '{}' has no {} curve", reference.name(), gender);
        return None;
    };
    let lms = interpolate_lms(curve, f64::from(total_months))?;

    let bmi = compute_bmi(weight_kg, height_cm);
    let z = z_score(bmi, &lms);
    let pct = percentile(z);
    let height_m = height_cm / 100.0;

    tracing::debug!(
        "BMI-for-age evaluated against '{}' ({} curve)",
        reference.name(),
        gender
    );

    Some(PediatricResult {
        bmi,
        z_score: round2(z),
        percentile: pct,
        category: classify_child(pct),
        median_bmi: round1(lms.m),
        ideal_weight: round1(lms.m * height_m * height_m),
    })
}

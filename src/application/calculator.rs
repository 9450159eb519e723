//! Adult BMI calculator.
//!
//! Pure functions over the static tables in [`crate::domain::tables`].
//! Inputs are expected to be range-checked by the caller; the only
//! precondition enforced by the formulas themselves is a positive height.

use serde::{Deserialize, Serialize};

use crate::domain::rounding::round1;
use crate::domain::tables::{
    AgeRange, WaistCutoffs, AGE_RANGES, CATEGORY_BANDS, GAUGE_MAX_BMI, GAUGE_MIN_BMI,
    IDEAL_BMI_HIGH, IDEAL_BMI_LOW,
};
use crate::domain::{BmiCategory, Gender, WaistRiskLevel, WaistRiskResult};

/// Weight bounds for a height, in kilograms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IdealWeightRange {
    pub min: f64,
    pub max: f64,
}

/// BMI rounded to one decimal.
///
/// `height_cm` must be positive; zero or negative heights give a
/// meaningless (infinite or NaN) result.
#[must_use]
pub fn compute_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    round1(weight_kg / (height_m * height_m))
}

/// Adult category for a BMI.
///
/// Returns the first band whose upper bound exceeds `bmi`, falling back to
/// the last band, so every input maps to exactly one category.
#[must_use]
pub fn classify(bmi: f64) -> BmiCategory {
    CATEGORY_BANDS
        .iter()
        .find(|band| bmi < band.max)
        .unwrap_or(&CATEGORY_BANDS[CATEGORY_BANDS.len() - 1])
        .category
}

/// Recommended BMI range for an age, `None` outside 18..=999.
#[must_use]
pub fn age_adjusted_range(age_years: u32) -> Option<AgeRange> {
    AGE_RANGES
        .iter()
        .find(|r| (r.min_age..=r.max_age).contains(&age_years))
        .copied()
}

/// Compare a BMI with the age-adjusted recommendation.
#[must_use]
pub fn age_interpretation(bmi: f64, age_years: u32) -> Option<String> {
    let range = age_adjusted_range(age_years)?;
    let (low, high) = (range.low, range.high);

    let text = if bmi >= low && bmi <= high {
        format!("For your age ({age_years} years) your BMI is within the recommended range {low}-{high}.")
    } else if bmi < low {
        format!("For your age ({age_years} years) the recommended BMI is {low}-{high}. Your value is below this range.")
    } else {
        format!("For your age ({age_years} years) the recommended BMI is {low}-{high}. Your value is above this range.")
    };
    Some(text)
}

/// Comment on a BMI close to the gender-specific optimum.
///
/// Only the bands near the optimum produce a message; other values
/// (including most of the overweight range) return `None`.
#[must_use]
pub fn gender_context(bmi: f64, gender: Gender) -> Option<String> {
    let text = match gender {
        Gender::Female => {
            if (20.0..=22.0).contains(&bmi) {
                "Your BMI is within the optimal range for women (20-22)."
            } else if (18.5..20.0).contains(&bmi) {
                "Your BMI is normal; the optimum for women is around 20-22."
            } else if bmi > 22.0 && bmi < 25.0 {
                "Your BMI is normal. The optimal value for women is usually given as around 20-22."
            } else {
                return None;
            }
        }
        Gender::Male => {
            if (22.0..=25.0).contains(&bmi) {
                "Your BMI is within the optimal range for men (22-25)."
            } else if (18.5..22.0).contains(&bmi) {
                "Your BMI is normal; the optimum for men is around 22-25."
            } else if bmi > 25.0 && bmi < 27.0 {
                "Your BMI slightly exceeds the optimum for men (22-25)."
            } else {
                return None;
            }
        }
    };
    Some(text.to_string())
}

/// Waist-circumference risk using the gender's cutoffs.
#[must_use]
pub fn evaluate_waist(waist_cm: f64, gender: Gender) -> WaistRiskResult {
    let cutoffs = WaistCutoffs::for_gender(gender);
    let lo = cutoffs.elevated_from;
    let hi = cutoffs.high_above;

    let (level, description) = if waist_cm < lo {
        (
            WaistRiskLevel::Low,
            format!("Waist circumference is within the normal range (below {lo} cm)."),
        )
    } else if waist_cm <= hi {
        (
            WaistRiskLevel::Elevated,
            format!("A waist circumference of {lo}-{hi} cm indicates an elevated health risk."),
        )
    } else {
        (
            WaistRiskLevel::High,
            format!("A waist circumference above {hi} cm indicates a substantially elevated health risk."),
        )
    };

    WaistRiskResult {
        level,
        label: level.label().to_string(),
        description,
    }
}

/// Position of a BMI on the 12-45 gauge, as a percentage in `[0, 100]`.
#[must_use]
pub fn gauge_position(bmi: f64) -> f64 {
    let pos = (bmi - GAUGE_MIN_BMI) / (GAUGE_MAX_BMI - GAUGE_MIN_BMI) * 100.0;
    pos.clamp(0.0, 100.0)
}

/// Weights corresponding to BMI 18.5 and 24.9 at this height.
#[must_use]
pub fn ideal_weight_range(height_cm: f64) -> IdealWeightRange {
    let height_m = height_cm / 100.0;
    let h_sq = height_m * height_m;
    IdealWeightRange {
        min: round1(IDEAL_BMI_LOW * h_sq),
        max: round1(IDEAL_BMI_HIGH * h_sq),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_bmi() {
        assert_eq!(compute_bmi(70.0, 175.0), 22.9);
        assert_eq!(compute_bmi(100.0, 200.0), 25.0);
        assert_eq!(compute_bmi(50.0, 160.0), 19.5);
    }

    #[test]
    fn test_classify_boundaries() {
        let expected = [
            (15.99, BmiCategory::SevereUnderweight),
            (16.0, BmiCategory::Underweight),
            (17.0, BmiCategory::MildUnderweight),
            (18.5, BmiCategory::Normal),
            (24.99, BmiCategory::Normal),
            (25.0, BmiCategory::Overweight),
            (30.0, BmiCategory::Obese1),
            (35.0, BmiCategory::Obese2),
            (40.0, BmiCategory::Obese3),
            (80.0, BmiCategory::Obese3),
        ];
        for (bmi, category) in expected {
            assert_eq!(classify(bmi), category, "bmi {bmi}");
        }
    }

    #[test]
    fn test_classify_totality() {
        // Dense sample over [0, 60]: exactly one band contains each value.
        for step in 0..=6000 {
            let bmi = f64::from(step) / 100.0;
            let matching = CATEGORY_BANDS
                .iter()
                .filter(|b| bmi >= b.min && bmi < b.max)
                .count();
            assert_eq!(matching, 1, "bmi {bmi}");

            let category = classify(bmi);
            let band = CATEGORY_BANDS
                .iter()
                .find(|b| b.category == category)
                .expect("Should find band");
            assert!(bmi >= band.min && bmi < band.max, "bmi {bmi}");
        }
    }

    #[test]
    fn test_age_adjusted_range() {
        assert_eq!(age_adjusted_range(17), None);
        assert_eq!(age_adjusted_range(18).map(|r| r.low), Some(19.0));
        assert_eq!(age_adjusted_range(24).map(|r| r.high), Some(24.0));
        assert_eq!(age_adjusted_range(25).map(|r| r.low), Some(20.0));
        assert_eq!(age_adjusted_range(120).map(|r| r.high), Some(29.0));
        assert_eq!(age_adjusted_range(999).map(|r| r.min_age), Some(65));
        assert_eq!(age_adjusted_range(1000), None);
    }

    #[test]
    fn test_age_interpretation() {
        assert_eq!(age_interpretation(22.0, 16), None);

        let within = age_interpretation(22.0, 30).expect("Should interpret");
        assert!(within.contains("within the recommended range 20-25"));

        let below = age_interpretation(19.9, 30).expect("Should interpret");
        assert!(below.contains("below this range"));

        let above = age_interpretation(25.1, 30).expect("Should interpret");
        assert!(above.contains("above this range"));

        // Both ends of the range are inclusive.
        assert!(age_interpretation(20.0, 30)
            .expect("Should interpret")
            .contains("within"));
        assert!(age_interpretation(25.0, 30)
            .expect("Should interpret")
            .contains("within"));
    }

    #[test]
    fn test_gender_context_bands() {
        assert!(gender_context(20.0, Gender::Female)
            .expect("Should comment")
            .contains("optimal range for women"));
        assert!(gender_context(19.0, Gender::Female)
            .expect("Should comment")
            .contains("around 20-22"));
        assert!(gender_context(24.9, Gender::Female)
            .expect("Should comment")
            .contains("usually given"));

        assert!(gender_context(25.0, Gender::Male)
            .expect("Should comment")
            .contains("optimal range for men"));
        assert!(gender_context(18.5, Gender::Male)
            .expect("Should comment")
            .contains("around 22-25"));
        assert!(gender_context(26.9, Gender::Male)
            .expect("Should comment")
            .contains("slightly exceeds"));
    }

    #[test]
    fn test_gender_context_gaps() {
        assert_eq!(gender_context(25.0, Gender::Female), None);
        assert_eq!(gender_context(31.0, Gender::Female), None);
        assert_eq!(gender_context(18.4, Gender::Female), None);
        assert_eq!(gender_context(27.0, Gender::Male), None);
        assert_eq!(gender_context(17.0, Gender::Male), None);
    }

    #[test]
    fn test_evaluate_waist_male_boundaries() {
        assert_eq!(evaluate_waist(93.9, Gender::Male).level, WaistRiskLevel::Low);
        assert_eq!(evaluate_waist(94.0, Gender::Male).level, WaistRiskLevel::Elevated);
        assert_eq!(evaluate_waist(102.0, Gender::Male).level, WaistRiskLevel::Elevated);
        assert_eq!(evaluate_waist(102.1, Gender::Male).level, WaistRiskLevel::High);
    }

    #[test]
    fn test_evaluate_waist_female_boundaries() {
        assert_eq!(evaluate_waist(79.9, Gender::Female).level, WaistRiskLevel::Low);
        assert_eq!(evaluate_waist(80.0, Gender::Female).level, WaistRiskLevel::Elevated);
        assert_eq!(evaluate_waist(88.0, Gender::Female).level, WaistRiskLevel::Elevated);
        assert_eq!(evaluate_waist(88.1, Gender::Female).level, WaistRiskLevel::High);

        let high = evaluate_waist(95.0, Gender::Female);
        assert_eq!(high.level, WaistRiskLevel::High);
        assert_eq!(high.label, "High risk");
        assert!(high.description.contains("above 88 cm"));
    }

    #[test]
    fn test_gauge_position() {
        assert_eq!(gauge_position(12.0), 0.0);
        assert_eq!(gauge_position(45.0), 100.0);
        assert_eq!(gauge_position(5.0), 0.0);
        assert_eq!(gauge_position(60.0), 100.0);
        assert!((gauge_position(28.5) - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_ideal_weight_range() {
        let range = ideal_weight_range(175.0);
        assert_eq!(range.min, 56.7);
        assert_eq!(range.max, 76.3);
    }

    #[test]
    fn test_idempotent() {
        assert_eq!(
            compute_bmi(83.3, 181.0).to_bits(),
            compute_bmi(83.3, 181.0).to_bits()
        );
        assert_eq!(ideal_weight_range(162.0), ideal_weight_range(162.0));
    }
}

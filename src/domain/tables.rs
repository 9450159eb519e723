//! Static classification tables.
//!
//! The tables are scanned front to back and the first matching entry wins,
//! so every table below must stay sorted ascending by its bound.

use serde::Serialize;

use super::category::BmiCategory;
use super::measurement::Gender;

/// One adult BMI band: `min <= bmi < max`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryBand {
    pub category: BmiCategory,
    pub min: f64,
    pub max: f64,
}

/// WHO adult bands. Contiguous from 0; the last band is unbounded above.
pub const CATEGORY_BANDS: [CategoryBand; 8] = [
    CategoryBand { category: BmiCategory::SevereUnderweight, min: 0.0, max: 16.0 },
    CategoryBand { category: BmiCategory::Underweight, min: 16.0, max: 17.0 },
    CategoryBand { category: BmiCategory::MildUnderweight, min: 17.0, max: 18.5 },
    CategoryBand { category: BmiCategory::Normal, min: 18.5, max: 25.0 },
    CategoryBand { category: BmiCategory::Overweight, min: 25.0, max: 30.0 },
    CategoryBand { category: BmiCategory::Obese1, min: 30.0, max: 35.0 },
    CategoryBand { category: BmiCategory::Obese2, min: 35.0, max: 40.0 },
    CategoryBand { category: BmiCategory::Obese3, min: 40.0, max: f64::INFINITY },
];

/// Recommended BMI for an inclusive age interval in years.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AgeRange {
    pub min_age: u32,
    pub max_age: u32,
    pub low: f64,
    pub high: f64,
}

/// Age-adjusted recommendations, contiguous from 18 to 999.
pub const AGE_RANGES: [AgeRange; 6] = [
    AgeRange { min_age: 18, max_age: 24, low: 19.0, high: 24.0 },
    AgeRange { min_age: 25, max_age: 34, low: 20.0, high: 25.0 },
    AgeRange { min_age: 35, max_age: 44, low: 21.0, high: 26.0 },
    AgeRange { min_age: 45, max_age: 54, low: 22.0, high: 27.0 },
    AgeRange { min_age: 55, max_age: 64, low: 23.0, high: 28.0 },
    AgeRange { min_age: 65, max_age: 999, low: 24.0, high: 29.0 },
];

/// Waist cutoffs (WHO European thresholds) in centimeters.
///
/// `waist < elevated_from` is low risk, `waist <= high_above` is elevated,
/// anything larger is high.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaistCutoffs {
    pub elevated_from: f64,
    pub high_above: f64,
}

pub const MALE_WAIST: WaistCutoffs = WaistCutoffs {
    elevated_from: 94.0,
    high_above: 102.0,
};

pub const FEMALE_WAIST: WaistCutoffs = WaistCutoffs {
    elevated_from: 80.0,
    high_above: 88.0,
};

impl WaistCutoffs {
    #[must_use]
    pub fn for_gender(gender: Gender) -> Self {
        match gender {
            Gender::Male => MALE_WAIST,
            Gender::Female => FEMALE_WAIST,
        }
    }
}

/// BMI domain drawn on the gauge.
pub const GAUGE_MIN_BMI: f64 = 12.0;
pub const GAUGE_MAX_BMI: f64 = 45.0;

/// Adult-normal bounds used for the ideal weight range.
pub const IDEAL_BMI_LOW: f64 = 18.5;
pub const IDEAL_BMI_HIGH: f64 = 24.9;

/// Age from which the senior note is added to adult reports.
pub const SENIOR_AGE: u32 = 65;

/// Pediatric domain of the growth reference, in months (2-20 years).
pub const CHILD_MIN_MONTHS: u32 = 24;
pub const CHILD_MAX_MONTHS: u32 = 240;

/// CDC percentile cutoffs for children.
pub const CHILD_UNDERWEIGHT_BELOW: f64 = 5.0;
pub const CHILD_OVERWEIGHT_FROM: f64 = 85.0;
pub const CHILD_OBESE_FROM: f64 = 95.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_bands_partition() {
        assert_eq!(CATEGORY_BANDS[0].min, 0.0);
        for pair in CATEGORY_BANDS.windows(2) {
            assert_eq!(pair[0].max, pair[1].min);
            assert!(pair[0].min < pair[0].max);
        }
        assert!(CATEGORY_BANDS[7].max.is_infinite());
    }

    #[test]
    fn test_age_ranges_contiguous() {
        assert_eq!(AGE_RANGES[0].min_age, 18);
        for pair in AGE_RANGES.windows(2) {
            assert_eq!(pair[0].max_age + 1, pair[1].min_age);
        }
        assert_eq!(AGE_RANGES[5].max_age, 999);
        assert!(AGE_RANGES.iter().all(|r| r.low < r.high));
    }

    #[test]
    fn test_waist_cutoffs_per_gender() {
        assert_eq!(WaistCutoffs::for_gender(Gender::Male), MALE_WAIST);
        assert_eq!(WaistCutoffs::for_gender(Gender::Female).elevated_from, 80.0);
    }
}

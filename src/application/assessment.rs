//! Assessment service: Validated, report-ready evaluations.
//!
//! This service coordinates:
//! - Input range validation
//! - Adult BMI classification and interpretation texts
//! - Pediatric BMI-for-age evaluation against a growth reference
//!
//! and packages the results with the explanatory details a presentation
//! layer shows next to the number.

use serde::{Deserialize, Serialize};

use crate::domain::tables::SENIOR_AGE;
use crate::domain::{AdultProfile, BmiCategory, ChildProfile, Detail, Measurement};
use crate::ports::GrowthReferenceSource;
use crate::BmiError;

use super::calculator::{
    age_interpretation, classify, compute_bmi, evaluate_waist, gauge_position, gender_context,
    ideal_weight_range, IdealWeightRange,
};
use super::pediatric::{calculate_child_bmi, PediatricResult};

const SENIOR_NOTE: &str = "For people over 65 a slightly higher BMI (23-30) is considered optimal \
     and is associated with lower mortality.";

const PEDIATRIC_ADVISORY: &str =
    "BMI results for children are indicative only. Please discuss them with a pediatrician.";

/// Adult evaluation (basic or extended).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdultReport {
    pub bmi: f64,
    pub category: BmiCategory,
    pub category_label: &'static str,
    /// Marker position on the 12-45 gauge, percent
    pub gauge_position: f64,
    pub ideal_weight: IdealWeightRange,
    pub details: Vec<Detail>,
}

/// Pediatric evaluation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChildReport {
    #[serde(flatten)]
    pub result: PediatricResult,
    pub category_label: &'static str,
    pub gauge_position: f64,
    /// Growth reference the percentile was computed against
    pub reference: String,
    pub details: Vec<Detail>,
}

/// One evaluation request, tagged by `mode`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum Request {
    Basic(Measurement),
    Adult(AdultProfile),
    Child(ChildProfile),
}

/// Report for any [`Request`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum Report {
    Basic(AdultReport),
    Adult(AdultReport),
    Child(ChildReport),
}

/// Service producing validated reports.
pub struct AssessmentService<R>
where
    R: GrowthReferenceSource,
{
    reference: R,
}

impl<R> AssessmentService<R>
where
    R: GrowthReferenceSource,
{
    /// Create a new assessment service over a growth reference.
    pub fn new(reference: R) -> Self {
        Self { reference }
    }

    /// The growth reference in use.
    #[must_use]
    pub fn reference(&self) -> &R {
        &self.reference
    }

    /// Dispatch a request to the matching assessment.
    ///
    /// # Errors
    /// Propagates the errors of the individual assessments.
    pub fn handle(&self, request: &Request) -> Result<Report, BmiError> {
        match request {
            Request::Basic(m) => self.assess_basic(m).map(Report::Basic),
            Request::Adult(p) => self.assess_adult(p).map(Report::Adult),
            Request::Child(p) => self.assess_child(p).map(Report::Child),
        }
    }

    /// BMI, category, gauge and ideal weight range for weight and height.
    ///
    /// # Errors
    /// Returns `BmiError::Validation` if the measurement is out of range.
    pub fn assess_basic(&self, measurement: &Measurement) -> Result<AdultReport, BmiError> {
        measurement.validate().map_err(BmiError::Validation)?;
        Ok(adult_report(measurement, Vec::new()))
    }

    /// Extended adult evaluation with age, gender and waist context.
    ///
    /// # Errors
    /// Returns `BmiError::Validation` if any input is out of range.
    pub fn assess_adult(&self, profile: &AdultProfile) -> Result<AdultReport, BmiError> {
        profile.validate().map_err(BmiError::Validation)?;

        let bmi = compute_bmi(profile.measurement.weight_kg, profile.measurement.height_cm);
        let mut details = Vec::new();

        if let Some(text) = age_interpretation(bmi, profile.age_years) {
            details.push(Detail::info(text));
        }
        if let Some(text) = gender_context(bmi, profile.gender) {
            details.push(Detail::info(text));
        }
        if let Some(waist) = profile.waist_cm {
            let risk = evaluate_waist(waist, profile.gender);
            details.push(Detail {
                text: format!("Waist circumference ({waist} cm): {}", risk.description),
                kind: risk.level.detail_kind(),
            });
        }
        if profile.age_years >= SENIOR_AGE {
            details.push(Detail::info(SENIOR_NOTE));
        }

        let report = adult_report(&profile.measurement, details);
        tracing::debug!(
            "Adult assessment: category={} details={}",
            report.category.key(),
            report.details.len()
        );
        Ok(report)
    }

    /// BMI-for-age evaluation for a child or teen.
    ///
    /// # Errors
    /// Returns `BmiError::Validation` if any input is out of range and
    /// `BmiError::NotComputable` if the growth reference cannot serve the
    /// request (age outside its domain, missing curve).
    pub fn assess_child(&self, profile: &ChildProfile) -> Result<ChildReport, BmiError> {
        profile.validate().map_err(BmiError::Validation)?;

        let result = calculate_child_bmi(
            &self.reference,
            profile.measurement.weight_kg,
            profile.measurement.height_cm,
            profile.gender,
            profile.age_years,
            profile.age_months,
        )
        .ok_or_else(|| {
            tracing::warn!(
                "Pediatric evaluation rejected by reference '{}'",
                self.reference.name()
            );
            BmiError::NotComputable
        })?;

        let pct = result.percentile;
        let details = vec![
            Detail::info(format!("Percentile: {pct}")),
            Detail::info(format!("Z-score: {}", result.z_score)),
            Detail::info(format!(
                "Percentile {pct}: {pct} % of children of the same age and sex have a lower BMI."
            )),
            Detail::warning(PEDIATRIC_ADVISORY),
        ];

        tracing::debug!("Child assessment: category={}", result.category.key());

        Ok(ChildReport {
            category_label: result.category.label(),
            gauge_position: gauge_position(result.bmi),
            reference: self.reference.name().to_string(),
            result,
            details,
        })
    }
}

fn adult_report(measurement: &Measurement, details: Vec<Detail>) -> AdultReport {
    let bmi = compute_bmi(measurement.weight_kg, measurement.height_cm);
    let category = classify(bmi);
    AdultReport {
        bmi,
        category,
        category_label: category.label(),
        gauge_position: gauge_position(bmi),
        ideal_weight: ideal_weight_range(measurement.height_cm),
        details,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::cdc;
    use crate::domain::{ChildCategory, DetailKind, Gender, GrowthReference};

    fn service() -> AssessmentService<&'static GrowthReference> {
        AssessmentService::new(cdc::reference())
    }

    fn adult(age_years: u32, waist_cm: Option<f64>) -> AdultProfile {
        AdultProfile {
            measurement: Measurement::new(70.0, 175.0),
            gender: Gender::Male,
            age_years,
            waist_cm,
        }
    }

    #[test]
    fn test_basic_report() {
        let report = service()
            .assess_basic(&Measurement::new(70.0, 175.0))
            .expect("Should assess");
        assert_eq!(report.bmi, 22.9);
        assert_eq!(report.category, BmiCategory::Normal);
        assert_eq!(report.category_label, "Normal weight");
        // (22.9 - 12) / 33 * 100, unrounded
        assert!((report.gauge_position - 33.030_303).abs() < 1e-6);
        assert_eq!(report.ideal_weight.min, 56.7);
        assert!(report.details.is_empty());
    }

    #[test]
    fn test_basic_rejects_out_of_range() {
        let err = service()
            .assess_basic(&Measurement::new(70.0, 90.0))
            .expect_err("Should reject height");
        match err {
            BmiError::Validation(errors) => assert_eq!(errors.len(), 1),
            other => panic!("Unexpected error: {other}"),
        }
    }

    #[test]
    fn test_adult_details_order() {
        let report = service()
            .assess_adult(&adult(40, Some(98.0)))
            .expect("Should assess");

        assert_eq!(report.details.len(), 3);
        assert!(report.details[0].text.contains("recommended range 21-26"));
        assert!(report.details[1].text.contains("optimal range for men"));
        assert!(report.details[2].text.starts_with("Waist circumference (98 cm)"));
        assert_eq!(report.details[2].kind, DetailKind::Warning);
    }

    #[test]
    fn test_adult_senior_note() {
        let report = service()
            .assess_adult(&adult(70, None))
            .expect("Should assess");
        let last = report.details.last().expect("Should have details");
        assert_eq!(last.text, SENIOR_NOTE);
        assert_eq!(last.kind, DetailKind::Info);
        // 22.9 is below the 65+ range 24-29.
        assert!(report.details[0].text.contains("below this range"));
    }

    #[test]
    fn test_adult_high_waist_is_danger() {
        let report = service()
            .assess_adult(&adult(30, Some(110.0)))
            .expect("Should assess");
        let waist = report
            .details
            .iter()
            .find(|d| d.text.starts_with("Waist"))
            .expect("Should have waist detail");
        assert_eq!(waist.kind, DetailKind::Danger);
    }

    #[test]
    fn test_child_report() {
        let profile = ChildProfile {
            measurement: Measurement::new(32.4, 140.0),
            gender: Gender::Male,
            age_years: 10,
            age_months: 0,
        };
        let report = service().assess_child(&profile).expect("Should assess");

        assert_eq!(report.result.category, ChildCategory::Normal);
        assert_eq!(report.category_label, "Healthy weight");
        assert_eq!(report.reference, cdc::CDC_REFERENCE_NAME);
        assert_eq!(report.details.len(), 4);
        assert_eq!(report.details[3].kind, DetailKind::Warning);
        assert!(report.details[0].text.starts_with("Percentile: "));
        assert!(report.details[2].text.starts_with("Percentile "));
        assert!(!report.details[2].text.contains("th percentile"));
        assert_eq!(report.gauge_position, gauge_position(report.result.bmi));
    }

    #[test]
    fn test_child_validation_and_rejection() {
        let profile = ChildProfile {
            measurement: Measurement::new(14.0, 90.0),
            gender: Gender::Female,
            age_years: 1,
            age_months: 6,
        };
        assert!(matches!(
            service().assess_child(&profile),
            Err(BmiError::Validation(_))
        ));

        let empty = AssessmentService::new(GrowthReference::new("empty", None, None));
        let valid = ChildProfile {
            age_years: 5,
            ..profile
        };
        assert!(matches!(
            empty.assess_child(&valid),
            Err(BmiError::NotComputable)
        ));
    }

    #[test]
    fn test_handle_dispatches_on_mode() {
        let request: Request = serde_json::from_str(
            r#"{"mode": "adult", "weight_kg": 70, "height_cm": 175, "gender": "female", "age_years": 30, "waist_cm": 79}"#,
        )
        .expect("Should parse request");
        assert!(matches!(request, Request::Adult(_)));

        let report = service().handle(&request).expect("Should assess");
        let json = serde_json::to_value(&report).expect("Should serialize");
        assert_eq!(json["mode"], "adult");
        assert_eq!(json["category"], "normal");

        let child: Request = serde_json::from_str(
            r#"{"mode": "child", "weight_kg": 20, "height_cm": 115, "gender": "male", "age_years": 6, "age_months": 3}"#,
        )
        .expect("Should parse request");
        let json = serde_json::to_value(service().handle(&child).expect("Should assess"))
            .expect("Should serialize");
        assert_eq!(json["mode"], "child");
        assert!(json["percentile"].is_number());
        assert!(json["category"].as_str().is_some_and(|k| k.starts_with("child-")));
    }

    #[test]
    fn test_zero_waist_adds_no_waist_detail() {
        let request: Request = serde_json::from_str(
            r#"{"mode": "adult", "weight_kg": 70, "height_cm": 175, "gender": "male", "age_years": 40, "waist_cm": 0}"#,
        )
        .expect("Should parse request");
        let Report::Adult(report) = service().handle(&request).expect("Should assess") else {
            panic!("Should be an adult report");
        };
        assert_eq!(report.details.len(), 2);
        assert!(report.details.iter().all(|d| !d.text.starts_with("Waist")));
    }

    #[test]
    fn test_report_serializes_keys() {
        let report = service()
            .assess_basic(&Measurement::new(95.0, 170.0))
            .expect("Should assess");
        let json = serde_json::to_value(&report).expect("Should serialize");
        assert_eq!(json["category"], "obese1");
        assert_eq!(json["details"], serde_json::json!([]));
    }
}

//! Growth reference curves for the LMS method.
//!
//! A curve is a per-gender series of calibration points `(age, L, M, S)`
//! ordered ascending by age. Curves are validated once on construction and
//! are read-only afterwards, so the interpolation hot path never re-checks
//! ordering.

use serde::{Deserialize, Serialize};

use super::measurement::Gender;

/// Errors raised while building or loading a growth reference.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ReferenceError {
    #[error("Growth curve is empty")]
    EmptyCurve,

    #[error("Growth curve ages must be strictly ascending (point {index}: {age} months)")]
    Unordered { index: usize, age: f64 },

    #[error("Invalid LMS point at {age} months: {reason}")]
    InvalidPoint { age: f64, reason: String },

    #[error("Growth reference '{0}' has no curves")]
    NoCurves(String),
}

/// A single calibration point on a reference curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LmsPoint {
    pub age_months: f64,
    #[serde(rename = "L")]
    pub l: f64,
    #[serde(rename = "M")]
    pub m: f64,
    #[serde(rename = "S")]
    pub s: f64,
}

impl LmsPoint {
    #[must_use]
    pub const fn new(age_months: f64, l: f64, m: f64, s: f64) -> Self {
        Self { age_months, l, m, s }
    }

    /// The distribution parameters without the age.
    #[must_use]
    pub fn params(&self) -> LmsParams {
        LmsParams {
            l: self.l,
            m: self.m,
            s: self.s,
        }
    }
}

/// Box-Cox power (L), median (M) and coefficient of variation (S) at one age.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LmsParams {
    #[serde(rename = "L")]
    pub l: f64,
    #[serde(rename = "M")]
    pub m: f64,
    #[serde(rename = "S")]
    pub s: f64,
}

/// A validated, non-empty, age-ascending series of LMS points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<LmsPoint>", into = "Vec<LmsPoint>")]
pub struct GrowthCurve {
    points: Vec<LmsPoint>,
}

impl GrowthCurve {
    /// Build a curve from calibration points.
    ///
    /// # Errors
    /// Rejects empty series, non-finite values, non-positive `M` or `S`,
    /// and ages that are not strictly ascending.
    pub fn new(points: Vec<LmsPoint>) -> Result<Self, ReferenceError> {
        if points.is_empty() {
            return Err(ReferenceError::EmptyCurve);
        }

        for (index, point) in points.iter().enumerate() {
            let finite = [point.age_months, point.l, point.m, point.s]
                .iter()
                .all(|v| v.is_finite());
            if !finite {
                return Err(ReferenceError::InvalidPoint {
                    age: point.age_months,
                    reason: "non-finite value".to_string(),
                });
            }
            if point.m <= 0.0 || point.s <= 0.0 {
                return Err(ReferenceError::InvalidPoint {
                    age: point.age_months,
                    reason: format!("M ({}) and S ({}) must be positive", point.m, point.s),
                });
            }
            if index > 0 && point.age_months <= points[index - 1].age_months {
                return Err(ReferenceError::Unordered {
                    index,
                    age: point.age_months,
                });
            }
        }

        Ok(Self { points })
    }

    #[must_use]
    pub fn points(&self) -> &[LmsPoint] {
        &self.points
    }

    /// Age span covered by the calibration points, in months.
    #[must_use]
    pub fn age_span(&self) -> (f64, f64) {
        let first = self.points.first().map_or(0.0, |p| p.age_months);
        let last = self.points.last().map_or(0.0, |p| p.age_months);
        (first, last)
    }
}

impl TryFrom<Vec<LmsPoint>> for GrowthCurve {
    type Error = ReferenceError;

    fn try_from(points: Vec<LmsPoint>) -> Result<Self, Self::Error> {
        Self::new(points)
    }
}

impl From<GrowthCurve> for Vec<LmsPoint> {
    fn from(curve: GrowthCurve) -> Self {
        curve.points
    }
}

/// A named pair of per-gender curves.
///
/// Either curve may be absent; lookups for a missing gender return `None`
/// and pediatric calculations for it are rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthReference {
    pub name: String,
    #[serde(default)]
    pub male: Option<GrowthCurve>,
    #[serde(default)]
    pub female: Option<GrowthCurve>,
}

impl GrowthReference {
    #[must_use]
    pub fn new(name: impl Into<String>, male: Option<GrowthCurve>, female: Option<GrowthCurve>) -> Self {
        Self {
            name: name.into(),
            male,
            female,
        }
    }

    /// Curve for `gender`, if supplied.
    #[must_use]
    pub fn curve_for(&self, gender: Gender) -> Option<&GrowthCurve> {
        match gender {
            Gender::Male => self.male.as_ref(),
            Gender::Female => self.female.as_ref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(age: f64) -> LmsPoint {
        LmsPoint::new(age, -1.5, 16.0, 0.1)
    }

    #[test]
    fn test_curve_rejects_empty() {
        assert_eq!(GrowthCurve::new(Vec::new()), Err(ReferenceError::EmptyCurve));
    }

    #[test]
    fn test_curve_rejects_unordered() {
        let err = GrowthCurve::new(vec![point(24.0), point(36.0), point(36.0)])
            .expect_err("Should reject duplicate age");
        assert_eq!(err, ReferenceError::Unordered { index: 2, age: 36.0 });
    }

    #[test]
    fn test_curve_rejects_bad_median() {
        let mut bad = point(24.0);
        bad.m = 0.0;
        assert!(matches!(
            GrowthCurve::new(vec![bad]),
            Err(ReferenceError::InvalidPoint { .. })
        ));
    }

    #[test]
    fn test_curve_span() {
        let curve = GrowthCurve::new(vec![point(24.0), point(120.0), point(240.0)])
            .expect("Should build curve");
        assert_eq!(curve.points().len(), 3);
        assert_eq!(curve.age_span(), (24.0, 240.0));
    }

    #[test]
    fn test_reference_json_validates_curves() {
        let json = r#"{"name": "test", "male": [{"age_months": 24, "L": -2.0, "M": 16.5, "S": 0.08}]}"#;
        let reference: GrowthReference = serde_json::from_str(json).expect("Should parse");
        assert!(reference.curve_for(Gender::Male).is_some());
        assert!(reference.curve_for(Gender::Female).is_none());

        let empty = r#"{"name": "test", "male": []}"#;
        assert!(serde_json::from_str::<GrowthReference>(empty).is_err());
    }
}

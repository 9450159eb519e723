//! JSON adapter: Growth reference loaded from a file.
//!
//! The file holds a serialized [`GrowthReference`]:
//!
//! ```json
//! {
//!   "name": "cdc-2000-monthly",
//!   "male":   [{"age_months": 24.0, "L": -2.011, "M": 16.575, "S": 0.0806}, ...],
//!   "female": [{"age_months": 24.0, "L": -0.987, "M": 16.423, "S": 0.0855}, ...]
//! }
//! ```
//!
//! Curves are validated while deserializing, so a loaded reference always
//! satisfies the ordering invariant the interpolation relies on.

use std::path::Path;

use crate::domain::{GrowthReference, ReferenceError};
use crate::BmiError;

/// Load a growth reference from a JSON file.
///
/// # Errors
/// Returns `BmiError::Io` if the file cannot be read and
/// `BmiError::Serialization` if it is malformed or a curve is invalid.
pub fn load_reference(path: impl AsRef<Path>) -> Result<GrowthReference, BmiError> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path)?;
    let reference = parse_reference(&raw)?;

    for (gender, curve) in [("male", &reference.male), ("female", &reference.female)] {
        if let Some(curve) = curve {
            let (first, last) = curve.age_span();
            tracing::info!(
                "Growth reference '{}' from {}: {} curve, {} points, age span {}-{} (months)",
                reference.name,
                path.display(),
                gender,
                curve.points().len(),
                first,
                last
            );
        }
    }
    Ok(reference)
}

/// Parse a growth reference from a JSON string.
///
/// # Errors
/// Returns `BmiError::Serialization` on malformed JSON or invalid curves,
/// and `BmiError::Reference` when neither gender has a curve.
pub fn parse_reference(raw: &str) -> Result<GrowthReference, BmiError> {
    let reference: GrowthReference = serde_json::from_str(raw)?;
    if reference.male.is_none() && reference.female.is_none() {
        return Err(ReferenceError::NoCurves(reference.name).into());
    }
    Ok(reference)
}

/// Serialize a growth reference as pretty JSON.
///
/// # Errors
/// Returns `BmiError::Serialization` if serialization fails.
pub fn to_json(reference: &GrowthReference) -> Result<String, BmiError> {
    Ok(serde_json::to_string_pretty(reference)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::cdc;
    use crate::domain::Gender;

    #[test]
    fn test_builtin_survives_json() {
        let json = to_json(cdc::reference()).expect("Should serialize");
        let parsed = parse_reference(&json).expect("Should parse");
        assert_eq!(parsed.name, cdc::reference().name);

        for gender in [Gender::Male, Gender::Female] {
            let original = cdc::reference().curve_for(gender).expect("Should have curve");
            let loaded = parsed.curve_for(gender).expect("Should have curve");
            assert_eq!(original.points().len(), loaded.points().len());
            for (a, b) in original.points().iter().zip(loaded.points()) {
                assert_eq!(a.age_months, b.age_months);
                assert!((a.m - b.m).abs() < 1e-12);
                assert!((a.l - b.l).abs() < 1e-12);
                assert!((a.s - b.s).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_parse_rejects_unordered_curve() {
        let raw = r#"{
            "name": "broken",
            "female": [
                {"age_months": 36, "L": -1.2, "M": 15.9, "S": 0.08},
                {"age_months": 24, "L": -1.0, "M": 16.4, "S": 0.09}
            ]
        }"#;
        let err = parse_reference(raw).expect_err("Should reject");
        assert!(matches!(err, BmiError::Serialization(_)));
        assert!(err.to_string().contains("ascending"));
    }

    #[test]
    fn test_parse_partial_reference() {
        let raw = r#"{"name": "girls", "female": [{"age_months": 24, "L": -1.0, "M": 16.4, "S": 0.09}]}"#;
        let reference = parse_reference(raw).expect("Should parse");
        assert!(reference.curve_for(Gender::Male).is_none());
        assert_eq!(
            reference.curve_for(Gender::Female).map(|c| c.age_span()),
            Some((24.0, 24.0))
        );
    }

    #[test]
    fn test_parse_rejects_reference_without_curves() {
        let err = parse_reference(r#"{"name": "nothing"}"#).expect_err("Should reject");
        assert!(matches!(err, BmiError::Reference(ReferenceError::NoCurves(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_reference("/nonexistent/growth.json").expect_err("Should fail");
        assert!(matches!(err, BmiError::Io(_)));
    }
}

//! Anthropometric inputs for adult and pediatric evaluation.
//!
//! All values are metric: kilograms, centimeters, whole years and months.
//! Nothing here is retained after a calculation returns.

use serde::{Deserialize, Serialize};

/// Biological sex used to select cutoffs and growth curves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Stable lowercase key.
    #[must_use]
    pub fn key(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Weight and height of one person.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    /// Body weight in kilograms
    pub weight_kg: f64,

    /// Standing height in centimeters
    pub height_cm: f64,
}

impl Measurement {
    #[must_use]
    pub fn new(weight_kg: f64, height_cm: f64) -> Self {
        Self {
            weight_kg,
            height_cm,
        }
    }

    /// Validate against the adult input ranges.
    ///
    /// # Errors
    /// Returns one message per failed rule.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();
        self.check_ranges(&mut errors, (100.0, 250.0), (20.0, 300.0));
        finish(errors)
    }

    fn check_ranges(&self, errors: &mut Vec<String>, height: (f64, f64), weight: (f64, f64)) {
        check_range(errors, "Height", "cm", self.height_cm, height);
        check_range(errors, "Weight", "kg", self.weight_kg, weight);
    }
}

/// Inputs for the extended adult evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AdultProfile {
    #[serde(flatten)]
    pub measurement: Measurement,

    pub gender: Gender,

    /// Age in whole years (18-120)
    pub age_years: u32,

    /// Waist circumference in centimeters, if measured. A JSON `0` counts
    /// as not measured.
    #[serde(default, deserialize_with = "zero_as_none")]
    pub waist_cm: Option<f64>,
}

impl AdultProfile {
    /// Validate against the adult input ranges.
    ///
    /// # Errors
    /// Returns one message per failed rule.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();
        self.measurement
            .check_ranges(&mut errors, (100.0, 250.0), (20.0, 300.0));

        if !(18..=120).contains(&self.age_years) {
            errors.push(format!("Age {} out of range [18, 120]", self.age_years));
        }
        if let Some(waist) = self.waist_cm {
            check_range(&mut errors, "Waist circumference", "cm", waist, (40.0, 200.0));
        }

        finish(errors)
    }
}

/// Inputs for the pediatric (2-20 years) evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChildProfile {
    #[serde(flatten)]
    pub measurement: Measurement,

    pub gender: Gender,

    /// Completed years (2-19)
    pub age_years: u32,

    /// Months past the last birthday (0-11)
    #[serde(default)]
    pub age_months: u32,
}

impl ChildProfile {
    /// Validate against the pediatric input ranges.
    ///
    /// # Errors
    /// Returns one message per failed rule.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if !(2..=19).contains(&self.age_years) {
            errors.push(format!("Age {} years out of range [2, 19]", self.age_years));
        }
        if self.age_months > 11 {
            errors.push(format!("Months {} out of range [0, 11]", self.age_months));
        }
        self.measurement
            .check_ranges(&mut errors, (50.0, 200.0), (5.0, 150.0));

        finish(errors)
    }
}

fn zero_as_none<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<f64>::deserialize(deserializer)?;
    Ok(value.filter(|&v| v != 0.0))
}

/// `years * 12 + months`, saturating instead of overflowing.
#[must_use]
pub fn total_age_months(age_years: u32, age_months: u32) -> u32 {
    age_years.saturating_mul(12).saturating_add(age_months)
}

fn check_range(errors: &mut Vec<String>, name: &str, unit: &str, value: f64, (lo, hi): (f64, f64)) {
    if !value.is_finite() || !(lo..=hi).contains(&value) {
        errors.push(format!("{name} {value} {unit} out of range [{lo}, {hi}]"));
    }
}

fn finish(errors: Vec<String>) -> Result<(), Vec<String>> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

//! Classification outcomes.
//!
//! Every variant carries a stable kebab-case key for presentation layers
//! and a fixed English label.

use serde::{Deserialize, Serialize};

/// WHO adult BMI category (8 levels).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BmiCategory {
    SevereUnderweight,
    Underweight,
    MildUnderweight,
    Normal,
    Overweight,
    #[serde(rename = "obese1")]
    Obese1,
    #[serde(rename = "obese2")]
    Obese2,
    #[serde(rename = "obese3")]
    Obese3,
}

impl BmiCategory {
    #[must_use]
    pub fn key(&self) -> &'static str {
        match self {
            Self::SevereUnderweight => "severe-underweight",
            Self::Underweight => "underweight",
            Self::MildUnderweight => "mild-underweight",
            Self::Normal => "normal",
            Self::Overweight => "overweight",
            Self::Obese1 => "obese1",
            Self::Obese2 => "obese2",
            Self::Obese3 => "obese3",
        }
    }

    /// Get a human-readable label.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::SevereUnderweight => "Severe underweight",
            Self::Underweight => "Underweight",
            Self::MildUnderweight => "Mild underweight",
            Self::Normal => "Normal weight",
            Self::Overweight => "Overweight",
            Self::Obese1 => "Obesity class I",
            Self::Obese2 => "Obesity class II",
            Self::Obese3 => "Obesity class III",
        }
    }
}

impl std::fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// CDC percentile category for children and teens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChildCategory {
    #[serde(rename = "child-underweight")]
    Underweight,
    #[serde(rename = "child-normal")]
    Normal,
    #[serde(rename = "child-overweight")]
    Overweight,
    #[serde(rename = "child-obese")]
    Obese,
}

impl ChildCategory {
    #[must_use]
    pub fn key(&self) -> &'static str {
        match self {
            Self::Underweight => "child-underweight",
            Self::Normal => "child-normal",
            Self::Overweight => "child-overweight",
            Self::Obese => "child-obese",
        }
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Underweight => "Underweight",
            Self::Normal => "Healthy weight",
            Self::Overweight => "Overweight",
            Self::Obese => "Obesity",
        }
    }
}

impl std::fmt::Display for ChildCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Waist-circumference risk level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WaistRiskLevel {
    /// Below the elevated cutoff
    Low,
    /// Between the cutoffs, upper edge inclusive
    Elevated,
    /// Above the high cutoff
    High,
}

impl WaistRiskLevel {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low risk",
            Self::Elevated => "Elevated risk",
            Self::High => "High risk",
        }
    }

    /// Severity used when the level is shown as a report detail.
    #[must_use]
    pub fn detail_kind(&self) -> DetailKind {
        match self {
            Self::Low => DetailKind::Info,
            Self::Elevated => DetailKind::Warning,
            Self::High => DetailKind::Danger,
        }
    }
}

impl std::fmt::Display for WaistRiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "LOW"),
            Self::Elevated => write!(f, "ELEVATED"),
            Self::High => write!(f, "HIGH"),
        }
    }
}

/// Outcome of a waist-circumference evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaistRiskResult {
    pub level: WaistRiskLevel,

    /// Short label, e.g. "Elevated risk"
    pub label: String,

    /// Sentence naming the cutoffs that applied
    pub description: String,
}

/// Severity of an informational line in a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DetailKind {
    Info,
    Warning,
    Danger,
}

/// One line of explanatory text attached to a report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detail {
    pub text: String,
    pub kind: DetailKind,
}

impl Detail {
    #[must_use]
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: DetailKind::Info,
        }
    }

    #[must_use]
    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: DetailKind::Warning,
        }
    }
}

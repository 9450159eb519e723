//! # BMI Engine
//!
//! Body Mass Index evaluation for adults and children.
//!
//! This crate provides:
//! - Adult BMI with the 8 WHO categories, age- and gender-aware
//!   interpretation, waist-circumference risk and ideal weight range
//! - Pediatric BMI-for-age via the CDC LMS method (interpolation,
//!   Z-score, percentile, category)
//! - Validated, serializable reports for presentation layers
//!
//! ## Architecture
//!
//! The crate follows Hexagonal Architecture:
//! - `domain`: Core types and static threshold tables
//! - `ports`: Trait definitions for external reference data
//! - `adapters`: Built-in CDC tables, JSON loading, log sanitization
//! - `application`: The calculation engine and the assessment service
//! - `config`: Environment-driven runtime settings
//!
//! Every calculation is a pure function of its inputs and the immutable
//! tables; results can be computed concurrently without coordination.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

pub use application::{AdultReport, AssessmentService, ChildReport, PediatricResult, Report, Request};
pub use domain::{BmiCategory, ChildCategory, Gender, WaistRiskLevel};

/// Result type for BMI engine operations
pub type Result<T> = std::result::Result<T, BmiError>;

/// Main error type for the BMI engine
#[derive(Debug, thiserror::Error)]
pub enum BmiError {
    #[error("Invalid input: {}", .0.join("; "))]
    Validation(Vec<String>),

    #[error("Could not compute BMI for the given inputs")]
    NotComputable,

    #[error("Growth reference error: {0}")]
    Reference(#[from] domain::ReferenceError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

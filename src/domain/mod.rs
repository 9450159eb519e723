//! Domain layer: Core types, threshold tables and reference data shapes.
//!
//! This module contains pure Rust types with no I/O.
//! All types are serializable and implement strict validation.

mod category;
mod growth;
mod measurement;
pub mod rounding;
pub mod tables;

pub use category::{BmiCategory, ChildCategory, Detail, DetailKind, WaistRiskLevel, WaistRiskResult};
pub use growth::{GrowthCurve, GrowthReference, LmsParams, LmsPoint, ReferenceError};
pub use measurement::{total_age_months, AdultProfile, ChildProfile, Gender, Measurement};
pub use tables::{AgeRange, CategoryBand, WaistCutoffs};

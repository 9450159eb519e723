//! Application layer: Calculations and use cases.
//!
//! `calculator` and `pediatric` are the pure evaluation engine;
//! `assessment` validates inputs and assembles reports on top of it.

mod assessment;
pub mod calculator;
pub mod pediatric;

pub use assessment::{AdultReport, AssessmentService, ChildReport, Report, Request};
pub use calculator::{
    age_adjusted_range, age_interpretation, classify, compute_bmi, evaluate_waist,
    gauge_position, gender_context, ideal_weight_range, IdealWeightRange,
};
pub use pediatric::{
    calculate_child_bmi, classify_child, interpolate_lms, percentile, z_score, PediatricResult,
};

//! Adapters layer: Concrete data sources and log plumbing.
//!
//! - `cdc`: built-in CDC 2000 BMI-for-age reference
//! - `json`: growth reference loaded from a JSON file
//! - `sanitize`: health-data filtering for logs

pub mod cdc;
pub mod json;
pub mod sanitize;

use std::path::Path;

use crate::domain::GrowthReference;
use crate::BmiError;

/// The growth reference to run with: the JSON file at `path` when given,
/// otherwise a copy of the built-in CDC reference.
///
/// # Errors
/// Propagates load errors from [`json::load_reference`].
pub fn growth_reference(path: Option<&Path>) -> Result<GrowthReference, BmiError> {
    match path {
        Some(path) => json::load_reference(path),
        None => {
            tracing::info!(
                "Using built-in yearly growth reference '{}'; set BMI_GROWTH_REFERENCE to load the monthly CDC table",
                cdc::CDC_REFERENCE_NAME
            );
            Ok(cdc::reference().clone())
        }
    }
}

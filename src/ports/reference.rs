//! Growth reference port: Read-only access to per-gender LMS curves.
//!
//! The engine reads reference curves but does not own them. Implementations
//! decide where the data comes from (compiled-in tables, a JSON file).

use crate::domain::{Gender, GrowthReference, LmsPoint};

/// Trait for growth reference providers.
///
/// Curves must be ordered ascending by age. A provider that has no data for
/// a gender returns `None` (or an empty slice), and pediatric calculations
/// for that gender are rejected rather than failing.
pub trait GrowthReferenceSource: Send + Sync {
    /// Calibration points for `gender`.
    fn curve(&self, gender: Gender) -> Option<&[LmsPoint]>;

    /// Short identifier used in logs and reports.
    fn name(&self) -> &str;
}

impl GrowthReferenceSource for GrowthReference {
    fn curve(&self, gender: Gender) -> Option<&[LmsPoint]> {
        self.curve_for(gender).map(|c| c.points())
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl<T: GrowthReferenceSource + ?Sized> GrowthReferenceSource for &T {
    fn curve(&self, gender: Gender) -> Option<&[LmsPoint]> {
        (**self).curve(gender)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<T: GrowthReferenceSource + ?Sized> GrowthReferenceSource for std::sync::Arc<T> {
    fn curve(&self, gender: Gender) -> Option<&[LmsPoint]> {
        (**self).curve(gender)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

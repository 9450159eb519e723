//! Ports layer: Trait definitions for external data.
//!
//! Following Hexagonal Architecture, these traits define the boundary
//! between the calculation engine and the reference data it consumes.

mod reference;

pub use reference::GrowthReferenceSource;

//! hf-core: stable foundation for hydraflow.
//!
//! Contains:
//! - units (uom SI types + constructors, bar/PSI/LPM conversions)
//! - numeric (Real + tolerances + float helpers)
//! - ids (compact interned ids for graph nodes)
//! - error (shared error types)

pub mod error;
pub mod ids;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{HfError, HfResult};
pub use ids::*;
pub use numeric::*;
pub use units::*;

//! hf-components: hydraulic component models.
//!
//! Provides:
//! - Size notation parsing (fractional/decimal inch, mm, DN)
//! - Fluid properties and the K-factor resistance table
//! - Restriction kinds, severities and thresholds
//! - `PressureDropEngine`, the per-component pressure-drop model
//!
//! Every physical constant is injected into the engine; `PressureDropEngine::default()`
//! uses ISO VG46 oil and the standard K table.
//!
//! # Example
//!
//! ```
//! use hf_components::PressureDropEngine;
//! use hf_core::units::{bar, lpm};
//! use hf_graph::{ComponentKind, Specifications};
//!
//! let engine = PressureDropEngine::default();
//! let specs = Specifications { size: Some("3/4\"".into()), ..Default::default() };
//! let drop = engine.component_drop(&ComponentKind::ValveCheck, &specs, lpm(60.0), bar(200.0));
//! assert!(drop.pressure_drop.value > 0.0);
//! ```

pub mod common;
pub mod engine;
pub mod error;
pub mod fluid;
pub mod resistance;
pub mod restriction;
pub mod size;

pub use engine::{ComponentDrop, PressureDropEngine};
pub use error::{ComponentError, ComponentResult};
pub use fluid::FluidProperties;
pub use resistance::{DEFAULT_K, ResistanceTable};
pub use restriction::{Restriction, RestrictionKind, RestrictionLimits, Severity};
pub use size::{DEFAULT_DIAMETER_M, DEFAULT_SIZE, SizeParse, parse_size};

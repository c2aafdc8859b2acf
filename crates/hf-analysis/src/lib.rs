//! hf-analysis: path and circuit analysis over a schematic graph.
//!
//! Provides:
//! - `analyze_path`: per-component drops, totals, efficiency and bottleneck
//! - `find_restrictions`: whole-circuit undersized-port and branching scan
//! - `compare_paths` / `compare_circuits`
//! - Narrative text for reports
//!
//! All functions are pure: they read the graph and engine they are given and
//! return fresh result records.

pub mod circuit;
pub mod compare;
pub mod narrative;
pub mod path;
pub mod report;

pub use circuit::find_restrictions;
pub use compare::{
    CircuitComparison, CountComparison, MetricComparison, PathComparison, compare_circuits,
    compare_paths,
};
pub use path::{analyze_path, efficiency};
pub use report::{CircuitRestriction, ComponentPressureDrop, FlowAnalysisResult, PathRestriction};

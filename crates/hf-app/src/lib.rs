//! Shared application service layer for hydraflow.
//!
//! Wraps schematic loading, path finding, analysis and comparison behind
//! one error type for the command line frontend. Input validation for caller
//! supplied numbers happens here; the analysis crates below assume clean input.

pub mod analysis_service;
pub mod error;
pub mod schematic_service;

pub use analysis_service::{
    AnalysisContext, DesignPoint, PathAnalysis, analyze_declared_path, analyze_flow_path,
    compare_circuits, compare_flow_paths, find_flow_path, find_restrictions,
};
pub use error::{AppError, AppResult};
pub use schematic_service::{build_graph, impact, load_schematic, load_settings, summarize};

//! Result records produced by path and circuit analysis.

use hf_components::{RestrictionKind, Severity};
use hf_graph::ComponentKind;
use serde::Serialize;

/// One component's share of a path's pressure drop.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentPressureDrop {
    pub component_id: String,
    #[serde(rename = "type")]
    pub component_type: ComponentKind,
    pub description: Option<String>,
    pub pressure_drop_bar: f64,
    pub pressure_drop_psi: f64,
    /// Zero for every component when the path has no drop at all.
    pub percent_of_total: f64,
}

/// A restriction found on a component along an analyzed path.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathRestriction {
    pub component_id: String,
    pub restriction_type: RestrictionKind,
    pub severity: Severity,
    pub details: String,
}

/// Pressure-drop analysis of an ordered path.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlowAnalysisResult {
    pub flow_rate_lpm: f64,
    pub system_pressure_bar: f64,
    pub total_pressure_drop_bar: f64,
    pub total_pressure_drop_psi: f64,
    pub efficiency_percent: f64,
    pub component_pressure_drops: Vec<ComponentPressureDrop>,
    /// Largest single drop; the earliest component wins ties.
    pub bottleneck: Option<ComponentPressureDrop>,
    pub restrictions: Vec<PathRestriction>,
    /// Human-readable summary of the numbers above.
    pub analysis: String,
}

impl FlowAnalysisResult {
    pub fn restriction_count(&self) -> usize {
        self.restrictions.len()
    }
}

/// A restriction found by scanning a whole circuit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CircuitRestriction {
    pub component_id: String,
    #[serde(rename = "type")]
    pub restriction_type: RestrictionKind,
    pub severity: Severity,
    pub details: String,
    pub recommendation: String,
}

//! Path finding, path and circuit analysis, and comparisons over loaded schematics.

use hf_analysis::{
    CircuitComparison, CircuitRestriction, FlowAnalysisResult, PathComparison, analyze_path,
};
use hf_components::PressureDropEngine;
use hf_core::numeric::ensure_non_negative;
use hf_graph::{PathResult, SchematicGraph, find_path};
use hf_project::{AnalysisSettings, Schematic};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::schematic_service::build_graph;

/// Flow rate and system pressure an analysis is run at.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DesignPoint {
    pub flow_rate_lpm: f64,
    pub pressure_bar: f64,
}

impl DesignPoint {
    /// Validated design point: both values finite and `>= 0`.
    pub fn new(flow_rate_lpm: f64, pressure_bar: f64) -> AppResult<Self> {
        Ok(Self {
            flow_rate_lpm: ensure_non_negative(flow_rate_lpm, "flow_rate_lpm")?,
            pressure_bar: ensure_non_negative(pressure_bar, "pressure_bar")?,
        })
    }
}

/// Settings plus the engine built from them.
#[derive(Debug, Clone)]
pub struct AnalysisContext {
    settings: AnalysisSettings,
    engine: PressureDropEngine,
}

impl AnalysisContext {
    pub fn new(settings: AnalysisSettings) -> AppResult<Self> {
        hf_project::validate_settings(&settings).map_err(|e| AppError::InvalidInput(e.to_string()))?;
        let engine = settings.engine()?;
        Ok(Self { settings, engine })
    }

    pub fn settings(&self) -> &AnalysisSettings {
        &self.settings
    }

    pub fn engine(&self) -> &PressureDropEngine {
        &self.engine
    }

    /// Design point from the settings file.
    pub fn default_design(&self) -> AppResult<DesignPoint> {
        DesignPoint::new(self.settings.flow_rate_lpm, self.settings.pressure_bar)
    }

    pub fn max_depth(&self) -> usize {
        self.settings.max_depth
    }
}

/// A path together with its analysis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathAnalysis {
    pub path_name: String,
    pub start_component: String,
    pub end_component: String,
    pub path: Vec<String>,
    #[serde(flatten)]
    pub analysis: FlowAnalysisResult,
}

fn check_depth(max_depth: usize) -> AppResult<usize> {
    if max_depth == 0 {
        return Err(AppError::InvalidInput("max_depth must be at least 1".into()));
    }
    Ok(max_depth)
}

/// Find a path between two components. A missing path is a result, not an error.
pub fn find_flow_path(
    schematic: &Schematic,
    start: &str,
    end: &str,
    max_depth: usize,
) -> AppResult<PathResult> {
    let graph = build_graph(schematic)?;
    Ok(find_path(&graph, start, end, check_depth(max_depth)?))
}

fn analyze_on_graph(
    ctx: &AnalysisContext,
    graph: &SchematicGraph,
    start: &str,
    end: &str,
    design: DesignPoint,
) -> AppResult<PathAnalysis> {
    let found = match find_path(graph, start, end, check_depth(ctx.max_depth())?) {
        PathResult::Found(path) => path,
        PathResult::NotFound(failure) => return Err(AppError::NoPath(failure.to_string())),
    };
    let analysis = analyze_path(
        ctx.engine(),
        &found.path_details,
        design.flow_rate_lpm,
        design.pressure_bar,
    );
    Ok(PathAnalysis {
        path_name: format!("{start} to {end}"),
        start_component: start.to_string(),
        end_component: end.to_string(),
        path: found.path,
        analysis,
    })
}

/// Find the path from `start` to `end` and analyze it.
pub fn analyze_flow_path(
    ctx: &AnalysisContext,
    schematic: &Schematic,
    start: &str,
    end: &str,
    design: DesignPoint,
) -> AppResult<PathAnalysis> {
    let graph = build_graph(schematic)?;
    analyze_on_graph(ctx, &graph, start, end, design)
}

/// Analyze a flow path declared in the schematic document, without searching.
pub fn analyze_declared_path(
    ctx: &AnalysisContext,
    schematic: &Schematic,
    name: &str,
    design: DesignPoint,
) -> AppResult<PathAnalysis> {
    let declared = schematic
        .flow_path(name)
        .ok_or_else(|| AppError::FlowPathNotFound(name.to_string()))?;
    let (Some(start), Some(end)) = (declared.components.first(), declared.components.last())
    else {
        return Err(AppError::InvalidInput(format!("flow path '{name}' is empty")));
    };

    let graph = build_graph(schematic)?;
    let details = graph.path_details(&declared.components);
    let analysis = analyze_path(
        ctx.engine(),
        &details,
        design.flow_rate_lpm,
        design.pressure_bar,
    );
    Ok(PathAnalysis {
        path_name: declared.name.clone(),
        start_component: start.clone(),
        end_component: end.clone(),
        path: declared.components.clone(),
        analysis,
    })
}

/// Whole-circuit restriction scan.
pub fn find_restrictions(
    ctx: &AnalysisContext,
    schematic: &Schematic,
    flow_rate_lpm: f64,
) -> AppResult<Vec<CircuitRestriction>> {
    let flow_rate_lpm = ensure_non_negative(flow_rate_lpm, "flow_rate_lpm")?;
    let graph = build_graph(schematic)?;
    Ok(hf_analysis::find_restrictions(ctx.engine(), &graph, flow_rate_lpm))
}

/// Find, analyze and compare two paths of one schematic.
pub fn compare_flow_paths(
    ctx: &AnalysisContext,
    schematic: &Schematic,
    first: (&str, &str),
    second: (&str, &str),
    design: DesignPoint,
) -> AppResult<PathComparison> {
    let graph = build_graph(schematic)?;
    let a = analyze_on_graph(ctx, &graph, first.0, first.1, design)?;
    let b = analyze_on_graph(ctx, &graph, second.0, second.1, design)?;
    Ok(hf_analysis::compare_paths(
        &a.analysis,
        &b.analysis,
        &a.path_name,
        &b.path_name,
    ))
}

/// Compare two schematics' component sets and restriction counts.
pub fn compare_circuits(
    ctx: &AnalysisContext,
    first: (&str, &Schematic),
    second: (&str, &Schematic),
    flow_rate_lpm: f64,
) -> AppResult<CircuitComparison> {
    let flow_rate_lpm = ensure_non_negative(flow_rate_lpm, "flow_rate_lpm")?;
    let graph_a = build_graph(first.1)?;
    let graph_b = build_graph(second.1)?;
    Ok(hf_analysis::compare_circuits(
        ctx.engine(),
        &graph_a,
        &graph_b,
        first.0,
        second.0,
        flow_rate_lpm,
    ))
}

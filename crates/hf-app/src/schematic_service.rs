//! Schematic loading, validation, and introspection.

use std::path::Path;

use hf_graph::{ComponentImpact, SchematicGraph, component_impact};
use hf_project::{AnalysisSettings, LoadedSchematic, Schematic, SchematicSummary};

use crate::error::{AppError, AppResult};

/// Load and validate a schematic document (YAML by extension, JSON otherwise).
pub fn load_schematic(path: &Path) -> AppResult<LoadedSchematic> {
    let loaded = hf_project::load_schematic(path).map_err(|e| AppError::SchematicLoad {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    tracing::info!(
        path = %path.display(),
        components = loaded.schematic.components.len(),
        connections = loaded.schematic.connections.len(),
        warnings = loaded.warnings.len(),
        "schematic loaded"
    );
    Ok(loaded)
}

/// Load settings from `path`, or defaults when no file is given.
pub fn load_settings(path: Option<&Path>) -> AppResult<AnalysisSettings> {
    match path {
        Some(path) => hf_project::load_settings(path).map_err(|e| AppError::SettingsLoad {
            path: path.to_path_buf(),
            message: e.to_string(),
        }),
        None => Ok(AnalysisSettings::default()),
    }
}

pub fn build_graph(schematic: &Schematic) -> AppResult<SchematicGraph> {
    Ok(schematic.graph()?)
}

pub fn summarize(schematic: &Schematic) -> SchematicSummary {
    hf_project::summarize(schematic)
}

/// Upstream and downstream neighbours of one component.
pub fn impact(schematic: &Schematic, component_id: &str) -> AppResult<ComponentImpact> {
    let graph = build_graph(schematic)?;
    Ok(component_impact(&graph, component_id)?)
}

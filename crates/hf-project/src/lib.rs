//! hf-project: schematic and settings documents, validation and fingerprinting.

pub mod fingerprint;
pub mod schema;
pub mod settings;
pub mod summary;
pub mod validate;

use std::path::Path;

use hf_components::ComponentError;

pub use fingerprint::fingerprint;
pub use schema::*;
pub use settings::{AnalysisSettings, FluidDef};
pub use summary::{FlowPathSummary, SchematicSummary, summarize};
pub use validate::{ValidationError, ValidationWarning, validate_schematic, validate_settings};

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Model configuration error: {0}")]
    Component(#[from] ComponentError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A loaded schematic together with the warnings validation produced.
#[derive(Debug, Clone)]
pub struct LoadedSchematic {
    pub schematic: Schematic,
    pub warnings: Vec<ValidationWarning>,
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml" | "yml")
    )
}

pub fn load_json(path: &Path) -> ProjectResult<LoadedSchematic> {
    let content = std::fs::read_to_string(path)?;
    let schematic: Schematic = serde_json::from_str(&content)?;
    let warnings = validate_schematic(&schematic)?;
    Ok(LoadedSchematic {
        schematic,
        warnings,
    })
}

pub fn save_json(path: &Path, schematic: &Schematic) -> ProjectResult<()> {
    validate_schematic(schematic)?;
    let content = serde_json::to_string_pretty(schematic)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_yaml(path: &Path) -> ProjectResult<LoadedSchematic> {
    let content = std::fs::read_to_string(path)?;
    let schematic: Schematic = serde_yaml::from_str(&content)?;
    let warnings = validate_schematic(&schematic)?;
    Ok(LoadedSchematic {
        schematic,
        warnings,
    })
}

pub fn save_yaml(path: &Path, schematic: &Schematic) -> ProjectResult<()> {
    validate_schematic(schematic)?;
    let content = serde_yaml::to_string(schematic)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Load a schematic, choosing YAML for `.yaml`/`.yml` and JSON otherwise.
pub fn load_schematic(path: &Path) -> ProjectResult<LoadedSchematic> {
    tracing::debug!(path = %path.display(), "loading schematic");
    if is_yaml(path) {
        load_yaml(path)
    } else {
        load_json(path)
    }
}

/// Load analysis settings (YAML for `.yaml`/`.yml`, JSON otherwise) and validate them.
pub fn load_settings(path: &Path) -> ProjectResult<AnalysisSettings> {
    let content = std::fs::read_to_string(path)?;
    let settings: AnalysisSettings = if is_yaml(path) {
        serde_yaml::from_str(&content)?
    } else {
        serde_json::from_str(&content)?
    };
    validate_settings(&settings)?;
    Ok(settings)
}

pub fn save_settings(path: &Path, settings: &AnalysisSettings) -> ProjectResult<()> {
    validate_settings(settings)?;
    let content = if is_yaml(path) {
        serde_yaml::to_string(settings)?
    } else {
        serde_json::to_string_pretty(settings)?
    };
    std::fs::write(path, content)?;
    Ok(())
}

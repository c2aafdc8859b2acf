//! Error types for the hf-app service layer.

use std::path::PathBuf;

/// Application error type that wraps errors from the backend crates
/// and gives the CLI a single error to report.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Failed to load schematic {path}: {message}")]
    SchematicLoad { path: PathBuf, message: String },

    #[error("Failed to load settings {path}: {message}")]
    SettingsLoad { path: PathBuf, message: String },

    #[error("Project error: {0}")]
    Project(String),

    #[error("Graph error: {0}")]
    Graph(String),

    #[error("Model configuration error: {0}")]
    Model(String),

    #[error("Flow path not declared: {0}")]
    FlowPathNotFound(String),

    #[error("Cannot analyze: {0}")]
    NoPath(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Output error: {0}")]
    Output(String),
}

/// Result type for hf-app operations.
pub type AppResult<T> = Result<T, AppError>;

impl From<hf_project::ProjectError> for AppError {
    fn from(err: hf_project::ProjectError) -> Self {
        AppError::Project(err.to_string())
    }
}

impl From<hf_graph::GraphError> for AppError {
    fn from(err: hf_graph::GraphError) -> Self {
        AppError::Graph(err.to_string())
    }
}

impl From<hf_components::ComponentError> for AppError {
    fn from(err: hf_components::ComponentError) -> Self {
        AppError::Model(err.to_string())
    }
}

impl From<hf_core::HfError> for AppError {
    fn from(err: hf_core::HfError) -> Self {
        AppError::InvalidInput(err.to_string())
    }
}

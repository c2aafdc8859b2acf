//! Schematic and settings validation.
//!
//! Structural defects that make a graph unusable are errors. Extraction noise
//! that analysis tolerates (duplicate ids, connections to undeclared ids,
//! flow paths naming unknown components) is reported as warnings.

use std::collections::HashSet;
use std::fmt;

use hf_components::ComponentError;
use serde::Serialize;

use crate::schema::Schematic;
use crate::settings::AnalysisSettings;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Empty id in {context} at position {position}")]
    EmptyId {
        context: &'static str,
        position: usize,
    },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

/// A tolerated defect in a schematic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationWarning {
    DuplicateComponent { id: String },
    DanglingEndpoint { id: String },
    UnknownFlowPathComponent { flow_path: String, id: String },
    EmptyFlowPath { flow_path: String },
}

impl fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateComponent { id } => {
                write!(f, "Component {id} is declared more than once; the last declaration is used")
            }
            Self::DanglingEndpoint { id } => {
                write!(f, "Connection endpoint {id} is not a declared component")
            }
            Self::UnknownFlowPathComponent { flow_path, id } => {
                write!(f, "Flow path '{flow_path}' names undeclared component {id}")
            }
            Self::EmptyFlowPath { flow_path } => write!(f, "Flow path '{flow_path}' is empty"),
        }
    }
}

pub fn validate_schematic(schematic: &Schematic) -> Result<Vec<ValidationWarning>, ValidationError> {
    let mut warnings = Vec::new();

    let mut declared = HashSet::new();
    for (position, component) in schematic.components.iter().enumerate() {
        if component.id.is_empty() {
            return Err(ValidationError::EmptyId {
                context: "components",
                position,
            });
        }
        if !declared.insert(component.id.as_str()) {
            warnings.push(ValidationWarning::DuplicateComponent {
                id: component.id.clone(),
            });
        }
    }

    let mut dangling = HashSet::new();
    for (position, connection) in schematic.connections.iter().enumerate() {
        for endpoint in [&connection.from, &connection.to] {
            if endpoint.is_empty() {
                return Err(ValidationError::EmptyId {
                    context: "connections",
                    position,
                });
            }
            if !declared.contains(endpoint.as_str()) && dangling.insert(endpoint.as_str()) {
                warnings.push(ValidationWarning::DanglingEndpoint {
                    id: endpoint.clone(),
                });
            }
        }
    }

    for path in &schematic.flow_paths {
        if path.components.is_empty() {
            warnings.push(ValidationWarning::EmptyFlowPath {
                flow_path: path.name.clone(),
            });
        }
        for id in &path.components {
            if !declared.contains(id.as_str()) {
                warnings.push(ValidationWarning::UnknownFlowPathComponent {
                    flow_path: path.name.clone(),
                    id: id.clone(),
                });
            }
        }
    }

    for warning in &warnings {
        tracing::warn!(%warning, "schematic validation");
    }
    Ok(warnings)
}

pub fn validate_settings(settings: &AnalysisSettings) -> Result<(), ValidationError> {
    non_negative("flow_rate_lpm", settings.flow_rate_lpm)?;
    non_negative("pressure_bar", settings.pressure_bar)?;
    positive("fluid.density_kg_m3", settings.fluid.density_kg_m3)?;
    positive("fluid.viscosity_pa_s", settings.fluid.viscosity_pa_s)?;
    if settings.max_depth == 0 {
        return Err(invalid("max_depth", 0.0, "must be at least 1"));
    }
    for (tag, &k) in &settings.k_factors {
        non_negative(&format!("k_factors.{tag}"), k)?;
    }
    settings.limits.validate().map_err(|e| match e {
        ComponentError::NonPhysical { what, value } => {
            invalid(&format!("limits.{what}"), value, "must be finite and >= 0")
        }
        other => ValidationError::InvalidValue {
            field: "limits".to_string(),
            value: format!("{:?}", settings.limits),
            reason: other.to_string(),
        },
    })?;
    Ok(())
}

fn invalid(field: &str, value: f64, reason: &str) -> ValidationError {
    ValidationError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

fn non_negative(field: &str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(invalid(field, value, "must be finite"));
    }
    if value < 0.0 {
        return Err(invalid(field, value, "must be >= 0"));
    }
    Ok(())
}

fn positive(field: &str, value: f64) -> Result<(), ValidationError> {
    non_negative(field, value)?;
    if value == 0.0 {
        return Err(invalid(field, value, "must be > 0"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::FlowPathDef;
    use hf_graph::{Component, ComponentKind, Connection};

    fn schematic() -> Schematic {
        Schematic {
            components: vec![
                Component::new("P1", ComponentKind::Pump),
                Component::new("V1", ComponentKind::ValveCheck),
                Component::new("V1", ComponentKind::ValveBall),
            ],
            connections: vec![
                Connection::new("P1", "V1"),
                Connection::new("V1", "T1"),
                Connection::new("T1", "F9"),
            ],
            flow_paths: vec![
                FlowPathDef {
                    name: "Main".into(),
                    components: vec!["P1".into(), "V1".into(), "T1".into()],
                    description: String::new(),
                },
                FlowPathDef {
                    name: "Spare".into(),
                    components: vec![],
                    description: String::new(),
                },
            ],
            ..Default::default()
        }
    }

    #[test]
    fn warnings_in_document_order() {
        let warnings = validate_schematic(&schematic()).unwrap();
        assert_eq!(
            warnings,
            vec![
                ValidationWarning::DuplicateComponent { id: "V1".into() },
                ValidationWarning::DanglingEndpoint { id: "T1".into() },
                ValidationWarning::DanglingEndpoint { id: "F9".into() },
                ValidationWarning::UnknownFlowPathComponent {
                    flow_path: "Main".into(),
                    id: "T1".into()
                },
                ValidationWarning::EmptyFlowPath {
                    flow_path: "Spare".into()
                },
            ]
        );
        assert_eq!(
            warnings[1].to_string(),
            "Connection endpoint T1 is not a declared component"
        );
    }

    #[test]
    fn empty_ids_are_errors() {
        let mut s = schematic();
        s.connections.push(Connection::new("", "P1"));
        assert_eq!(
            validate_schematic(&s).unwrap_err(),
            ValidationError::EmptyId {
                context: "connections",
                position: 3
            }
        );
    }

    #[test]
    fn settings_ranges() {
        assert!(validate_settings(&AnalysisSettings::default()).is_ok());

        let bad = AnalysisSettings {
            flow_rate_lpm: f64::NAN,
            ..Default::default()
        };
        assert!(matches!(
            validate_settings(&bad),
            Err(ValidationError::InvalidValue { ref field, .. }) if field == "flow_rate_lpm"
        ));

        let zero_depth = AnalysisSettings {
            max_depth: 0,
            ..Default::default()
        };
        assert!(validate_settings(&zero_depth).is_err());

        let mut negative_k = AnalysisSettings::default();
        negative_k.k_factors.insert("FILTER".into(), -2.0);
        let err = validate_settings(&negative_k).unwrap_err();
        assert!(err.to_string().contains("k_factors.FILTER"));
    }

    #[test]
    fn limits_are_checked_by_the_model() {
        let mut settings = AnalysisSettings::default();
        settings.limits.turbulent_reynolds = -1.0;
        assert!(matches!(
            validate_settings(&settings),
            Err(ValidationError::InvalidValue { ref field, .. }) if field == "limits.turbulent_reynolds"
        ));

        let mut inverted = AnalysisSettings::default();
        inverted.limits.velocity_high_mps = 3.0;
        let err = validate_settings(&inverted).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidValue { ref field, .. } if field == "limits"));
        assert!(err.to_string().contains("velocity_high_mps must not be below velocity_warn_mps"));
        assert_eq!(
            settings.limits.validate().is_err(),
            validate_settings(&settings).is_err()
        );
    }
}

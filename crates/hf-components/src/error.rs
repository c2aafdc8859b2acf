//! Error types for component model construction.

use hf_core::HfError;
use thiserror::Error;

/// Errors raised while configuring the pressure-drop model.
///
/// Evaluating a component never fails; only building tables and fluid
/// properties from caller input does.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ComponentError {
    #[error("Non-physical value for {what}: {value}")]
    NonPhysical { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Invalid resistance factor for {tag}: {value}")]
    InvalidK { tag: String, value: f64 },
}

pub type ComponentResult<T> = Result<T, ComponentError>;

impl From<HfError> for ComponentError {
    fn from(e: HfError) -> Self {
        match e {
            HfError::NonFinite { what, value } | HfError::Negative { what, value } => {
                ComponentError::NonPhysical { what, value }
            }
            HfError::InvalidArg { what } => ComponentError::InvalidArg { what },
            HfError::Invariant { .. } => ComponentError::InvalidArg { what: "invariant" },
        }
    }
}

//! Restriction classification: thresholds, kinds and severities.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::common::check_non_negative;
use crate::error::{ComponentError, ComponentResult};

/// What kind of flow impediment was flagged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RestrictionKind {
    HighVelocity,
    TurbulentFlow,
    HighPressureDrop,
    UndersizedPort,
    SeriesRestriction,
}

impl RestrictionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::HighVelocity => "HIGH_VELOCITY",
            Self::TurbulentFlow => "TURBULENT_FLOW",
            Self::HighPressureDrop => "HIGH_PRESSURE_DROP",
            Self::UndersizedPort => "UNDERSIZED_PORT",
            Self::SeriesRestriction => "SERIES_RESTRICTION",
        }
    }
}

impl fmt::Display for RestrictionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Severity rating. Declaration order is report order: `High` sorts first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::High => "HIGH",
            Self::Medium => "MEDIUM",
            Self::Low => "LOW",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A flagged condition on a single component.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Restriction {
    #[serde(rename = "type")]
    pub kind: RestrictionKind,
    pub severity: Severity,
    pub details: String,
}

/// Thresholds for restriction checks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RestrictionLimits {
    /// Above this velocity (m/s) a component is flagged.
    pub velocity_warn_mps: f64,
    /// Above this velocity (m/s) the flag is HIGH instead of MEDIUM.
    pub velocity_high_mps: f64,
    pub turbulent_reynolds: f64,
    /// Fraction of system pressure a single component may consume.
    pub pressure_drop_fraction: f64,
}

impl Default for RestrictionLimits {
    fn default() -> Self {
        Self {
            velocity_warn_mps: 5.0,
            velocity_high_mps: 7.0,
            turbulent_reynolds: 4000.0,
            pressure_drop_fraction: 0.10,
        }
    }
}

impl RestrictionLimits {
    pub fn validate(&self) -> ComponentResult<()> {
        check_non_negative(self.velocity_warn_mps, "velocity_warn_mps")?;
        check_non_negative(self.velocity_high_mps, "velocity_high_mps")?;
        check_non_negative(self.turbulent_reynolds, "turbulent_reynolds")?;
        check_non_negative(self.pressure_drop_fraction, "pressure_drop_fraction")?;
        if self.velocity_high_mps < self.velocity_warn_mps {
            return Err(ComponentError::InvalidArg {
                what: "velocity_high_mps must not be below velocity_warn_mps",
            });
        }
        Ok(())
    }

    /// Severity of a velocity, or `None` when it is within limits.
    pub fn velocity_severity(&self, velocity_mps: f64) -> Option<Severity> {
        (velocity_mps > self.velocity_warn_mps).then(|| {
            if velocity_mps > self.velocity_high_mps {
                Severity::High
            } else {
                Severity::Medium
            }
        })
    }
}

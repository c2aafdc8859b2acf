//! K-factor pressure-drop model for individual components.
//!
//! Each component is treated as a single minor loss:
//!
//! ```text
//! v  = Q / (π (d/2)²)
//! ΔP = K · ρ · v² / 2
//! Re = ρ · v · d / μ
//! ```
//!
//! Three checks then classify the component. They run in a fixed order
//! (velocity, Reynolds number, share of system pressure) and each match
//! replaces the previous one, so a component reports at most one restriction:
//! the last that applied.

use hf_core::numeric::ratio_or_zero;
use hf_core::units::{Length, Pressure, Velocity, VolumeRate, mps, pa, to_bar};
use hf_graph::{ComponentKind, Specifications};

use crate::common::bore_area;
use crate::fluid::FluidProperties;
use crate::resistance::ResistanceTable;
use crate::restriction::{Restriction, RestrictionKind, RestrictionLimits, Severity};
use crate::size::{DEFAULT_SIZE, SizeParse, parse_size};

/// Evaluation of one component at a given flow.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentDrop {
    pub k_factor: f64,
    pub bore: SizeParse,
    pub velocity: Velocity,
    pub reynolds: f64,
    pub pressure_drop: Pressure,
    pub restriction: Option<Restriction>,
}

/// Pressure-drop and restriction model with injected fluid, resistance and limits.
#[derive(Debug, Clone, Default)]
pub struct PressureDropEngine {
    fluid: FluidProperties,
    resistance: ResistanceTable,
    limits: RestrictionLimits,
}

impl PressureDropEngine {
    pub fn new(
        fluid: FluidProperties,
        resistance: ResistanceTable,
        limits: RestrictionLimits,
    ) -> Self {
        Self {
            fluid,
            resistance,
            limits,
        }
    }

    pub fn fluid(&self) -> &FluidProperties {
        &self.fluid
    }

    pub fn resistance(&self) -> &ResistanceTable {
        &self.resistance
    }

    pub fn limits(&self) -> &RestrictionLimits {
        &self.limits
    }

    /// Parse a size token, logging when the default diameter is substituted.
    pub fn parse_bore(&self, text: &str) -> SizeParse {
        let parsed = parse_size(text);
        if parsed.used_default {
            tracing::warn!(size = text, "could not parse size, using default 1/2 inch");
        }
        parsed
    }

    /// Bore of a component: `size`, else `port_size`, else half an inch.
    pub fn bore(&self, specs: &Specifications) -> SizeParse {
        self.parse_bore(specs.nominal_size().unwrap_or(DEFAULT_SIZE))
    }

    /// Mean velocity through a circular bore; zero when the bore has no area.
    pub fn velocity(&self, flow: VolumeRate, diameter: Length) -> Velocity {
        mps(ratio_or_zero(flow.value, bore_area(diameter.value)))
    }

    pub fn reynolds(&self, velocity: Velocity, diameter: Length) -> f64 {
        self.fluid.density.value * velocity.value * diameter.value / self.fluid.viscosity.value
    }

    /// ΔP = K·ρ·v²/2.
    pub fn minor_loss(&self, k_factor: f64, velocity: Velocity) -> Pressure {
        pa(k_factor * self.fluid.density.value * velocity.value.powi(2) / 2.0)
    }

    /// Evaluate one component at `flow` against a reference `system_pressure`.
    pub fn component_drop(
        &self,
        kind: &ComponentKind,
        specs: &Specifications,
        flow: VolumeRate,
        system_pressure: Pressure,
    ) -> ComponentDrop {
        let k_factor = self.resistance.k_factor(kind);
        let bore = self.bore(specs);
        let velocity = self.velocity(flow, bore.diameter);
        let pressure_drop = self.minor_loss(k_factor, velocity);
        let reynolds = self.reynolds(velocity, bore.diameter);
        let restriction = self.classify(velocity, reynolds, pressure_drop, system_pressure);

        tracing::debug!(
            kind = %kind,
            k_factor,
            diameter_m = bore.diameter.value,
            velocity_mps = velocity.value,
            reynolds,
            drop_pa = pressure_drop.value,
            "component drop"
        );

        ComponentDrop {
            k_factor,
            bore,
            velocity,
            reynolds,
            pressure_drop,
            restriction,
        }
    }

    fn classify(
        &self,
        velocity: Velocity,
        reynolds: f64,
        drop: Pressure,
        system_pressure: Pressure,
    ) -> Option<Restriction> {
        let mut found = None;

        if let Some(severity) = self.limits.velocity_severity(velocity.value) {
            found = Some(Restriction {
                kind: RestrictionKind::HighVelocity,
                severity,
                details: format!(
                    "Flow velocity {:.2} m/s exceeds recommended {:.1} m/s",
                    velocity.value, self.limits.velocity_warn_mps
                ),
            });
        }

        if reynolds > self.limits.turbulent_reynolds {
            found = Some(Restriction {
                kind: RestrictionKind::TurbulentFlow,
                severity: Severity::Medium,
                details: format!("Reynolds number {reynolds:.0} indicates turbulent flow"),
            });
        }

        if drop.value > system_pressure.value * self.limits.pressure_drop_fraction {
            let details = if system_pressure.value > 0.0 {
                format!(
                    "Component causes {:.1}% pressure drop",
                    drop.value / system_pressure.value * 100.0
                )
            } else {
                format!("Component causes {:.2} bar pressure drop", to_bar(drop))
            };
            found = Some(Restriction {
                kind: RestrictionKind::HighPressureDrop,
                severity: Severity::High,
                details,
            });
        }

        found
    }
}

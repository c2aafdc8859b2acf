//! Analysis settings file: design point, search depth and model overrides.

use std::collections::BTreeMap;

use hf_components::{FluidProperties, PressureDropEngine, ResistanceTable, RestrictionLimits};
use hf_graph::DEFAULT_MAX_DEPTH;
use serde::{Deserialize, Serialize};

use crate::ProjectResult;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisSettings {
    pub flow_rate_lpm: f64,
    pub pressure_bar: f64,
    pub max_depth: usize,
    pub fluid: FluidDef,
    /// K-factor overrides keyed by component tag.
    pub k_factors: BTreeMap<String, f64>,
    pub limits: RestrictionLimits,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            flow_rate_lpm: 100.0,
            pressure_bar: 200.0,
            max_depth: DEFAULT_MAX_DEPTH,
            fluid: FluidDef::default(),
            k_factors: BTreeMap::new(),
            limits: RestrictionLimits::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FluidDef {
    pub density_kg_m3: f64,
    pub viscosity_pa_s: f64,
}

impl Default for FluidDef {
    fn default() -> Self {
        Self {
            density_kg_m3: FluidProperties::VG46_DENSITY_KG_M3,
            viscosity_pa_s: FluidProperties::VG46_VISCOSITY_PA_S,
        }
    }
}

impl AnalysisSettings {
    /// Pressure-drop engine configured from these settings.
    pub fn engine(&self) -> ProjectResult<PressureDropEngine> {
        let fluid = FluidProperties::new(self.fluid.density_kg_m3, self.fluid.viscosity_pa_s)?;
        let resistance = ResistanceTable::standard().with_overrides(&self.k_factors)?;
        self.limits.validate()?;
        Ok(PressureDropEngine::new(fluid, resistance, self.limits))
    }
}

//! Working fluid properties.

use hf_core::units::{Density, DynVisc, kgpm3, pas};

use crate::common::check_positive;
use crate::error::ComponentResult;

/// Density and dynamic viscosity of the hydraulic oil, held constant over an analysis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FluidProperties {
    pub density: Density,
    pub viscosity: DynVisc,
}

impl FluidProperties {
    /// ISO VG46 mineral oil at 40 °C.
    pub const VG46_DENSITY_KG_M3: f64 = 870.0;
    pub const VG46_VISCOSITY_PA_S: f64 = 0.046;

    pub fn new(density_kg_m3: f64, viscosity_pa_s: f64) -> ComponentResult<Self> {
        Ok(Self {
            density: kgpm3(check_positive(density_kg_m3, "density")?),
            viscosity: pas(check_positive(viscosity_pa_s, "viscosity")?),
        })
    }

    pub fn iso_vg46() -> Self {
        Self {
            density: kgpm3(Self::VG46_DENSITY_KG_M3),
            viscosity: pas(Self::VG46_VISCOSITY_PA_S),
        }
    }
}

impl Default for FluidProperties {
    fn default() -> Self {
        Self::iso_vg46()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ComponentError;

    #[test]
    fn default_is_vg46() {
        let fluid = FluidProperties::default();
        assert_eq!(fluid.density.value, 870.0);
        assert_eq!(fluid.viscosity.value, 0.046);
    }

    #[test]
    fn rejects_non_physical() {
        assert!(FluidProperties::new(850.0, 0.032).is_ok());
        assert!(matches!(
            FluidProperties::new(0.0, 0.032),
            Err(ComponentError::NonPhysical { what: "density", .. })
        ));
        assert!(FluidProperties::new(850.0, f64::NAN).is_err());
    }
}

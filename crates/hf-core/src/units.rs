// hf-core/src/units.rs

use uom::si::f64::{
    DynamicViscosity as UomDynamicViscosity, Length as UomLength, MassDensity as UomMassDensity,
    Pressure as UomPressure, Velocity as UomVelocity, VolumeRate as UomVolumeRate,
};

// Public canonical unit types (SI, f64)
pub type DynVisc = UomDynamicViscosity;
pub type Length = UomLength;
pub type Density = UomMassDensity;
pub type Pressure = UomPressure;
pub type Velocity = UomVelocity;
pub type VolumeRate = UomVolumeRate;

#[inline]
pub fn pa(v: f64) -> Pressure {
    use uom::si::pressure::pascal;
    Pressure::new::<pascal>(v)
}

/// Pressure from bar (1 bar = 1e5 Pa).
#[inline]
pub fn bar(v: f64) -> Pressure {
    pa(v * constants::PA_PER_BAR)
}

#[inline]
pub fn m(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v)
}

#[inline]
pub fn mm(v: f64) -> Length {
    m(v / 1000.0)
}

#[inline]
pub fn inch(v: f64) -> Length {
    m(v * constants::M_PER_INCH)
}

#[inline]
pub fn m3ps(v: f64) -> VolumeRate {
    use uom::si::volume_rate::cubic_meter_per_second;
    VolumeRate::new::<cubic_meter_per_second>(v)
}

/// Volume flow from liters per minute.
#[inline]
pub fn lpm(v: f64) -> VolumeRate {
    m3ps(v / constants::LPM_PER_M3PS)
}

#[inline]
pub fn mps(v: f64) -> Velocity {
    use uom::si::velocity::meter_per_second;
    Velocity::new::<meter_per_second>(v)
}

#[inline]
pub fn kgpm3(v: f64) -> Density {
    use uom::si::mass_density::kilogram_per_cubic_meter;
    Density::new::<kilogram_per_cubic_meter>(v)
}

#[inline]
pub fn pas(v: f64) -> DynVisc {
    use uom::si::dynamic_viscosity::pascal_second;
    DynVisc::new::<pascal_second>(v)
}

/// Pressure expressed in bar.
#[inline]
pub fn to_bar(p: Pressure) -> f64 {
    p.value / constants::PA_PER_BAR
}

/// Pressure expressed in PSI (hydraulics convention, 6894.76 Pa/psi).
#[inline]
pub fn to_psi(p: Pressure) -> f64 {
    p.value / constants::PA_PER_PSI
}

pub mod constants {
    use super::*;

    pub const PA_PER_BAR: f64 = 1e5;
    pub const PA_PER_PSI: f64 = 6894.76;
    /// Rounded factor used in human-readable summaries.
    pub const PSI_PER_BAR: f64 = 14.5;
    pub const M_PER_INCH: f64 = 0.0254;
    pub const LPM_PER_M3PS: f64 = 60_000.0;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_smoke() {
        let _p = pa(101_325.0);
        let _b = bar(200.0);
        let _l = m(2.0);
        let _q = lpm(100.0);
        let _v = mps(5.0);
        let _rho = kgpm3(870.0);
        let _mu = pas(0.046);
    }

    #[test]
    fn conversions() {
        assert_eq!(bar(2.0).value, 200_000.0);
        assert_eq!(to_bar(pa(150_000.0)), 1.5);
        assert!((to_psi(bar(1.0)) - 14.503_78).abs() < 1e-4);
        assert!((inch(0.5).value - 0.0127).abs() < 1e-15);
        assert_eq!(mm(25.0).value, 0.025);
        assert!((lpm(60_000.0).value - 1.0).abs() < 1e-12);
    }

    proptest::proptest! {
        #[test]
        fn bar_and_psi_agree(b in 0.0f64..1_000.0) {
            let p = bar(b);
            proptest::prop_assert!((to_bar(p) - b).abs() <= 1e-9 * b.max(1.0));
            let psi_per_bar = constants::PA_PER_BAR / constants::PA_PER_PSI;
            proptest::prop_assert!((to_psi(p) - b * psi_per_bar).abs() <= 1e-9 * b.max(1.0) * psi_per_bar);
        }

        #[test]
        fn lpm_scales_linearly(q in 0.0f64..10_000.0) {
            let si = lpm(q).value;
            proptest::prop_assert!((si * constants::LPM_PER_M3PS - q).abs() <= 1e-9 * q.max(1.0));
        }
    }
}

//! Common utilities for component calculations.

use hf_core::numeric::{ensure_finite, ensure_non_negative};

use crate::error::{ComponentError, ComponentResult};

/// Ensure a value is finite and strictly positive.
pub fn check_positive(value: f64, what: &'static str) -> ComponentResult<f64> {
    let value = ensure_finite(value, what)?;
    if value <= 0.0 {
        return Err(ComponentError::NonPhysical { what, value });
    }
    Ok(value)
}

/// Ensure a value is finite and `>= 0`.
pub fn check_non_negative(value: f64, what: &'static str) -> ComponentResult<f64> {
    Ok(ensure_non_negative(value, what)?)
}

/// Circular flow area for a bore diameter (m²).
pub fn bore_area(diameter_m: f64) -> f64 {
    std::f64::consts::PI * (diameter_m / 2.0).powi(2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_positive() {
        assert_eq!(check_positive(870.0, "density").unwrap(), 870.0);
        assert!(check_positive(0.0, "density").is_err());
        assert!(check_positive(f64::NAN, "density").is_err());
    }

    #[test]
    fn test_check_non_negative() {
        assert!(check_non_negative(0.0, "k").is_ok());
        assert!(check_non_negative(-0.1, "k").is_err());
    }

    #[test]
    fn test_bore_area() {
        assert_eq!(bore_area(0.0), 0.0);
        let a = bore_area(0.02);
        assert!((a - 3.141_592_653_589_793e-4).abs() < 1e-15);
    }
}

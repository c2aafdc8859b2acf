use crate::HfError;

/// Floating point type used throughout system
pub type Real = f64;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, HfError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(HfError::NonFinite { what, value: v })
    }
}

/// Finite and `>= 0`. Flow rates, pressures and lengths at the API boundary go through this.
pub fn ensure_non_negative(v: Real, what: &'static str) -> Result<Real, HfError> {
    let v = ensure_finite(v, what)?;
    if v < 0.0 {
        Err(HfError::Negative { what, value: v })
    } else {
        Ok(v)
    }
}

/// `numerator / denominator`, or `0.0` when the denominator is exactly zero.
///
/// Used wherever a reference quantity (area, total drop, system pressure) may be
/// degenerate and the result should read as "no contribution" instead of inf/NaN.
#[inline]
pub fn ratio_or_zero(numerator: Real, denominator: Real) -> Real {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearly_equal_basic() {
        let tol = Tolerances {
            abs: 1e-12,
            rel: 1e-9,
        };
        assert!(nearly_equal(1.0, 1.0 + 1e-12, tol));
        assert!(nearly_equal(0.0, 1e-13, tol));
        assert!(!nearly_equal(1.0, 1.0 + 1e-6, tol));
    }

    #[test]
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(Real::NAN, "test").unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("Non-finite"));
    }

    #[test]
    fn ensure_non_negative_rejects_negative() {
        assert_eq!(ensure_non_negative(0.0, "flow").unwrap(), 0.0);
        assert!(matches!(
            ensure_non_negative(-1.0, "flow"),
            Err(HfError::Negative { what: "flow", .. })
        ));
        assert!(matches!(
            ensure_non_negative(Real::INFINITY, "flow"),
            Err(HfError::NonFinite { .. })
        ));
    }

    #[test]
    fn ratio_or_zero_guards_zero_denominator() {
        assert_eq!(ratio_or_zero(5.0, 0.0), 0.0);
        assert_eq!(ratio_or_zero(5.0, 2.0), 2.5);
    }
}

//! Port and line size notation.
//!
//! Schematics label bores in whatever notation the drafter used: fractional
//! inch (`1/2"`), decimal inch (`0.5"`), millimetres (`20mm`) or nominal
//! diameter (`DN25`). [`parse_size`] maps all of them onto a diameter in
//! metres and never fails; unparsable text yields the half-inch default with
//! [`SizeParse::used_default`] set so callers can log it.

use hf_core::units::{Length, constants::M_PER_INCH, m};

/// Diameter substituted for unparsable size text (½ inch).
pub const DEFAULT_DIAMETER_M: f64 = 0.0127;

/// Size text assumed when a component carries no size at all.
pub const DEFAULT_SIZE: &str = "1/2\"";

/// Outcome of parsing a size token.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeParse {
    pub diameter: Length,
    pub used_default: bool,
}

impl SizeParse {
    fn parsed(meters: f64) -> Self {
        Self {
            diameter: m(meters),
            used_default: false,
        }
    }

    fn fallback() -> Self {
        Self {
            diameter: m(DEFAULT_DIAMETER_M),
            used_default: true,
        }
    }

    pub fn meters(&self) -> f64 {
        self.diameter.value
    }
}

/// Parse a free-form size token to a diameter.
///
/// Forms are tried in a fixed order: fraction (any `/`), decimal inch (any
/// `"`), millimetres (any `MM`), nominal diameter (any `DN`). The text is
/// trimmed and upper-cased first. A form that matches but fails to parse
/// hands over to the next form rather than straight to the default.
pub fn parse_size(text: &str) -> SizeParse {
    let token = text.trim().to_uppercase();

    if token.contains('/') {
        let unquoted = token.replace('"', "");
        let mut parts = unquoted.split('/');
        if let (Some(num), Some(den)) = (parts.next(), parts.next()) {
            if let (Some(num), Some(den)) = (number(num), number(den)) {
                if let Some(meters) = finite(num / den * M_PER_INCH) {
                    return SizeParse::parsed(meters);
                }
            }
        }
    }

    if token.contains('"') {
        if let Some(inches) = number(&token.replace('"', "")) {
            return SizeParse::parsed(inches * M_PER_INCH);
        }
    }

    if token.contains("MM") {
        if let Some(mm) = number(&token.replace("MM", "")) {
            return SizeParse::parsed(mm / 1000.0);
        }
    }

    if token.contains("DN") {
        if let Some(dn) = number(&token.replace("DN", "")) {
            return SizeParse::parsed(dn / 1000.0);
        }
    }

    SizeParse::fallback()
}

fn number(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().and_then(finite)
}

fn finite(v: f64) -> Option<f64> {
    v.is_finite().then_some(v)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn recognised_forms() {
        assert!(close(parse_size("1/2\"").meters(), 0.0127));
        assert!(close(parse_size("3/4\"").meters(), 0.01905));
        assert!(close(parse_size("0.5\"").meters(), 0.0127));
        assert!(close(parse_size("20mm").meters(), 0.020));
        assert!(close(parse_size("20 MM").meters(), 0.020));
        assert!(close(parse_size("DN25").meters(), 0.025));
        assert!(close(parse_size("dn 40").meters(), 0.040));
        assert!(!parse_size("DN25").used_default);
    }

    #[test]
    fn garbage_falls_back_to_half_inch() {
        for text in ["garbage", "", "  ", "1/0\"", "nan\"", "G1/2"] {
            let parsed = parse_size(text);
            assert!(parsed.used_default, "{text:?}");
            assert_eq!(parsed.meters(), DEFAULT_DIAMETER_M);
        }
    }

    #[test]
    fn fraction_wins_over_decimal_inch() {
        let parsed = parse_size(" 3/8\" ");
        assert!(!parsed.used_default);
        assert!(close(parsed.meters(), 0.009525));
    }

    #[test]
    fn mixed_notation_ends_in_default() {
        for text in ["1/2MM", "25MM/", "20MM\"", "DN25MM"] {
            assert!(parse_size(text).used_default, "{text:?}");
        }
    }

    #[test]
    fn zero_size_is_not_a_fallback() {
        let parsed = parse_size("0mm");
        assert!(!parsed.used_default);
        assert_eq!(parsed.meters(), 0.0);
    }
}

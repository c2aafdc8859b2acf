//! K-factor table keyed by component type tag.

use std::collections::BTreeMap;

use hf_graph::ComponentKind;

use crate::common::check_non_negative;
use crate::error::{ComponentError, ComponentResult};

/// Resistance used when neither the tag nor `VALVE_<tag>` is in the table.
/// Matches a directional valve.
pub const DEFAULT_K: f64 = 3.0;

const STANDARD: [(&str, f64); 10] = [
    ("VALVE_BALL", 0.1),
    ("VALVE_CHECK", 2.0),
    ("VALVE_PROPORTIONAL", 1.5),
    ("VALVE_DIRECTIONAL", 3.0),
    ("VALVE_RELIEF", 0.5),
    ("FILTER", 5.0),
    ("ELBOW_90", 0.9),
    ("TEE_BRANCH", 1.8),
    ("CYLINDER", 0.5),
    ("MANIFOLD", 2.0),
];

/// Dimensionless loss coefficients per component tag.
#[derive(Debug, Clone, PartialEq)]
pub struct ResistanceTable {
    factors: BTreeMap<String, f64>,
    fallback: f64,
}

impl ResistanceTable {
    /// The standard hydraulic table.
    pub fn standard() -> Self {
        Self {
            factors: STANDARD
                .iter()
                .map(|&(tag, k)| (tag.to_string(), k))
                .collect(),
            fallback: DEFAULT_K,
        }
    }

    /// Set or replace the K factor for a tag.
    pub fn set(&mut self, tag: impl Into<String>, k: f64) -> ComponentResult<()> {
        let tag = tag.into();
        if tag.is_empty() {
            return Err(ComponentError::InvalidArg {
                what: "resistance tag",
            });
        }
        let k = check_non_negative(k, "K factor")
            .map_err(|_| ComponentError::InvalidK { tag: tag.clone(), value: k })?;
        self.factors.insert(tag, k);
        Ok(())
    }

    pub fn with_factor(mut self, tag: impl Into<String>, k: f64) -> ComponentResult<Self> {
        self.set(tag, k)?;
        Ok(self)
    }

    /// Apply a batch of overrides on top of this table.
    pub fn with_overrides<'a>(
        mut self,
        overrides: impl IntoIterator<Item = (&'a String, &'a f64)>,
    ) -> ComponentResult<Self> {
        for (tag, &k) in overrides {
            self.set(tag.as_str(), k)?;
        }
        Ok(self)
    }

    /// K factor for a tag: exact tag, then `VALVE_<tag>`, then the default.
    pub fn k_for_tag(&self, tag: &str) -> f64 {
        self.factors
            .get(tag)
            .or_else(|| self.factors.get(&format!("VALVE_{tag}")))
            .copied()
            .unwrap_or(self.fallback)
    }

    pub fn k_factor(&self, kind: &ComponentKind) -> f64 {
        self.k_for_tag(kind.as_str())
    }

    pub fn fallback(&self) -> f64 {
        self.fallback
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.factors.iter().map(|(tag, &k)| (tag.as_str(), k))
    }
}

impl Default for ResistanceTable {
    fn default() -> Self {
        Self::standard()
    }
}

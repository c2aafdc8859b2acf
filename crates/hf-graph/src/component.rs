//! Schematic records: components, their specifications, and directed connections.
//!
//! These are the records handed over by schematic extraction. They are loosely
//! typed at the source (vision output), so the serde impls here are lenient:
//! unknown type tags are kept verbatim and numeric specs may arrive as strings.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Categorical component tag (`VALVE_DIRECTIONAL`, `PUMP`, ...).
///
/// Tags are matched case-sensitively; anything unrecognised is preserved in
/// [`ComponentKind::Other`] so it round-trips and still participates in
/// resistance lookups by its raw tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ComponentKind {
    ValveBall,
    ValveCheck,
    ValveProportional,
    ValveDirectional,
    ValveRelief,
    Valve,
    Cylinder,
    Pump,
    Motor,
    Filter,
    Transducer,
    Manifold,
    Elbow90,
    TeeBranch,
    #[default]
    Unknown,
    Other(String),
}

impl ComponentKind {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "VALVE_BALL" => Self::ValveBall,
            "VALVE_CHECK" => Self::ValveCheck,
            "VALVE_PROPORTIONAL" => Self::ValveProportional,
            "VALVE_DIRECTIONAL" => Self::ValveDirectional,
            "VALVE_RELIEF" => Self::ValveRelief,
            "VALVE" => Self::Valve,
            "CYLINDER" => Self::Cylinder,
            "PUMP" => Self::Pump,
            "MOTOR" => Self::Motor,
            "FILTER" => Self::Filter,
            "TRANSDUCER" => Self::Transducer,
            "MANIFOLD" => Self::Manifold,
            "ELBOW_90" => Self::Elbow90,
            "TEE_BRANCH" => Self::TeeBranch,
            "UNKNOWN" => Self::Unknown,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::ValveBall => "VALVE_BALL",
            Self::ValveCheck => "VALVE_CHECK",
            Self::ValveProportional => "VALVE_PROPORTIONAL",
            Self::ValveDirectional => "VALVE_DIRECTIONAL",
            Self::ValveRelief => "VALVE_RELIEF",
            Self::Valve => "VALVE",
            Self::Cylinder => "CYLINDER",
            Self::Pump => "PUMP",
            Self::Motor => "MOTOR",
            Self::Filter => "FILTER",
            Self::Transducer => "TRANSDUCER",
            Self::Manifold => "MANIFOLD",
            Self::Elbow90 => "ELBOW_90",
            Self::TeeBranch => "TEE_BRANCH",
            Self::Unknown => "UNKNOWN",
            Self::Other(tag) => tag,
        }
    }

    /// True for every tag beginning with `VALVE`, including application-defined ones.
    pub fn is_valve(&self) -> bool {
        self.as_str().starts_with("VALVE")
    }
}

impl From<String> for ComponentKind {
    fn from(tag: String) -> Self {
        Self::from_tag(&tag)
    }
}

impl From<&str> for ComponentKind {
    fn from(tag: &str) -> Self {
        Self::from_tag(tag)
    }
}

impl From<ComponentKind> for String {
    fn from(kind: ComponentKind) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Line type of a connection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ConnectionKind {
    Pressure,
    Tank,
    Signal,
    Drain,
    #[default]
    ConnectsTo,
    Other(String),
}

impl ConnectionKind {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "PRESSURE" => Self::Pressure,
            "TANK" => Self::Tank,
            "SIGNAL" => Self::Signal,
            "DRAIN" => Self::Drain,
            "CONNECTS_TO" => Self::ConnectsTo,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Pressure => "PRESSURE",
            Self::Tank => "TANK",
            Self::Signal => "SIGNAL",
            Self::Drain => "DRAIN",
            Self::ConnectsTo => "CONNECTS_TO",
            Self::Other(tag) => tag,
        }
    }
}

impl From<String> for ConnectionKind {
    fn from(tag: String) -> Self {
        Self::from_tag(&tag)
    }
}

impl From<ConnectionKind> for String {
    fn from(kind: ConnectionKind) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for ConnectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Known specification fields of a component. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Specifications {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::opt_text"
    )]
    pub size: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::opt_text"
    )]
    pub port_size: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::opt_number"
    )]
    pub pressure_bar: Option<f64>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::opt_number"
    )]
    pub flow_lpm: Option<f64>,
}

impl Specifications {
    /// `size`, falling back to `port_size`.
    pub fn nominal_size(&self) -> Option<&str> {
        self.size.as_deref().or(self.port_size.as_deref())
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// A schematic component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    pub id: String,
    #[serde(rename = "type", default)]
    pub kind: ComponentKind,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Specifications::is_empty")]
    pub specifications: Specifications,
}

impl Component {
    pub fn new(id: impl Into<String>, kind: impl Into<ComponentKind>) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            description: String::new(),
            specifications: Specifications::default(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.specifications.size = Some(size.into());
        self
    }

    pub fn with_specifications(mut self, specifications: Specifications) -> Self {
        self.specifications = specifications;
        self
    }
}

/// Directed connection `from -> to`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    pub from: String,
    pub to: String,
    #[serde(rename = "type", default)]
    pub kind: ConnectionKind,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::opt_text"
    )]
    pub line_size: Option<String>,
}

impl Connection {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            kind: ConnectionKind::default(),
            line_size: None,
        }
    }

    pub fn with_kind(mut self, kind: ConnectionKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_line_size(mut self, line_size: impl Into<String>) -> Self {
        self.line_size = Some(line_size.into());
        self
    }
}

mod lenient {
    use super::*;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum TextOrNumber {
        Text(String),
        Number(f64),
    }

    pub(super) fn opt_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(
            Option::<TextOrNumber>::deserialize(deserializer)?.map(|v| match v {
                TextOrNumber::Text(s) => s,
                TextOrNumber::Number(n) => n.to_string(),
            }),
        )
    }

    pub(super) fn opt_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(
            Option::<TextOrNumber>::deserialize(deserializer)?.and_then(|v| match v {
                TextOrNumber::Text(s) => s.trim().parse().ok(),
                TextOrNumber::Number(n) => Some(n),
            }),
        )
    }
}

//! Schematic document schema.

use hf_graph::{Component, Connection, GraphError, SchematicGraph};
use serde::{Deserialize, Serialize};

/// A schematic as produced by extraction: components, connections and annotations.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Schematic {
    #[serde(default)]
    pub metadata: SchematicMetadata,
    #[serde(default)]
    pub components: Vec<Component>,
    #[serde(default)]
    pub connections: Vec<Connection>,
    #[serde(default)]
    pub flow_paths: Vec<FlowPathDef>,
    #[serde(default)]
    pub notes: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SchematicMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub machine_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schematic_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sheet_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revision: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
}

/// A named flow path declared on the drawing, as an ordered list of component ids.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FlowPathDef {
    pub name: String,
    #[serde(default)]
    pub components: Vec<String>,
    #[serde(default)]
    pub description: String,
}

impl Schematic {
    /// Build the connectivity graph for this schematic.
    pub fn graph(&self) -> Result<SchematicGraph, GraphError> {
        SchematicGraph::from_parts(&self.components, &self.connections)
    }

    pub fn flow_path(&self, name: &str) -> Option<&FlowPathDef> {
        self.flow_paths.iter().find(|p| p.name == name)
    }

    /// Display name: machine name, else title, else `fallback`.
    pub fn display_name<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.metadata
            .machine_name
            .as_deref()
            .or(self.metadata.schematic_title.as_deref())
            .unwrap_or(fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hf_graph::{ComponentKind, ConnectionKind};

    const EXTRACTED: &str = r#"{
        "metadata": {"machine_name": "PX-400", "revision": "C"},
        "components": [
            {"id": "P1", "type": "PUMP", "description": "Main pump",
             "grid_location": "A-1", "specifications": {"flow_lpm": "120", "size": 1}},
            {"id": "V12", "type": "VALVE_RELIEF", "specifications": {"pressure_bar": 210}}
        ],
        "connections": [
            {"from": "P1", "to": "V12", "type": "PRESSURE", "flow_direction": "FORWARD"}
        ],
        "flow_paths": [{"name": "Main", "components": ["P1", "V12"]}],
        "notes": ["Set relief at 210 bar"]
    }"#;

    #[test]
    fn parses_extraction_output() {
        let s: Schematic = serde_json::from_str(EXTRACTED).unwrap();
        assert_eq!(s.metadata.machine_name.as_deref(), Some("PX-400"));
        assert_eq!(s.components[0].kind, ComponentKind::Pump);
        assert_eq!(s.components[0].specifications.flow_lpm, Some(120.0));
        assert_eq!(s.components[0].specifications.size.as_deref(), Some("1"));
        assert_eq!(s.components[1].specifications.pressure_bar, Some(210.0));
        assert_eq!(s.connections[0].kind, ConnectionKind::Pressure);
        assert_eq!(s.flow_path("Main").unwrap().components.len(), 2);
        assert_eq!(s.display_name("fallback"), "PX-400");
    }

    #[test]
    fn empty_document() {
        let s: Schematic = serde_json::from_str("{}").unwrap();
        assert_eq!(s, Schematic::default());
        assert_eq!(s.graph().unwrap().node_count(), 0);
        assert_eq!(s.display_name("a.json"), "a.json");
    }
}

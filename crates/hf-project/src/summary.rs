//! Overview of a schematic's contents.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::fingerprint::fingerprint;
use crate::schema::{Schematic, SchematicMetadata};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlowPathSummary {
    pub name: String,
    pub component_count: usize,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchematicSummary {
    pub metadata: SchematicMetadata,
    pub fingerprint: String,
    pub component_count: usize,
    pub connection_count: usize,
    pub flow_path_count: usize,
    /// Component counts keyed by type tag, in tag order.
    pub components_by_type: BTreeMap<String, usize>,
    pub flow_paths: Vec<FlowPathSummary>,
    pub notes: Vec<String>,
}

pub fn summarize(schematic: &Schematic) -> SchematicSummary {
    let mut components_by_type = BTreeMap::new();
    for component in &schematic.components {
        *components_by_type
            .entry(component.kind.as_str().to_string())
            .or_insert(0) += 1;
    }

    SchematicSummary {
        metadata: schematic.metadata.clone(),
        fingerprint: fingerprint(schematic),
        component_count: schematic.components.len(),
        connection_count: schematic.connections.len(),
        flow_path_count: schematic.flow_paths.len(),
        components_by_type,
        flow_paths: schematic
            .flow_paths
            .iter()
            .map(|p| FlowPathSummary {
                name: p.name.clone(),
                component_count: p.components.len(),
                description: p.description.clone(),
            })
            .collect(),
        notes: schematic.notes.clone(),
    }
}

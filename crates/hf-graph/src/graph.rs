//! Immutable schematic graph.

use std::collections::HashMap;

use hf_core::NodeId;
use serde::Serialize;

use crate::component::{Component, ComponentKind, ConnectionKind, Specifications};

/// A directed edge between two interned nodes, in connection input order.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
    pub kind: ConnectionKind,
    pub line_size: Option<String>,
}

/// Per-position snapshot of a component along a path.
///
/// `component_type` and `description` are `None` when the position is a
/// connection endpoint that was never declared as a component.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathDetail {
    pub position: usize,
    pub component_id: String,
    #[serde(rename = "type")]
    pub component_type: Option<ComponentKind>,
    pub description: Option<String>,
    pub specifications: Specifications,
}

/// The graph: interned ids, declared components and CSR adjacency in both directions.
///
/// Node ids are assigned in first-seen order: declared components first, then
/// connection endpoints that name no component. Edge lists per node keep the
/// input order of the connections, which fixes BFS tie-breaking.
#[derive(Debug, Clone, Default)]
pub struct SchematicGraph {
    pub(crate) names: Vec<String>,
    pub(crate) lookup: HashMap<String, NodeId>,
    /// Indexed by node; `None` for dangling endpoints.
    pub(crate) components: Vec<Option<Component>>,
    pub(crate) edges: Vec<Edge>,

    /// Node i's outgoing edges are `out_edges[out_offsets[i]..out_offsets[i+1]]` (indices into `edges`).
    pub(crate) out_offsets: Vec<usize>,
    pub(crate) out_edges: Vec<usize>,
    pub(crate) in_offsets: Vec<usize>,
    pub(crate) in_edges: Vec<usize>,
}

impl SchematicGraph {
    /// Number of interned nodes (declared components plus dangling endpoints).
    pub fn node_count(&self) -> usize {
        self.names.len()
    }

    /// Number of declared components.
    pub fn component_count(&self) -> usize {
        self.components.iter().filter(|c| c.is_some()).count()
    }

    /// All edges in connection input order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Look up the interned node for an id.
    pub fn node(&self, id: &str) -> Option<NodeId> {
        self.lookup.get(id).copied()
    }

    /// The id a node was interned from.
    pub fn name(&self, node: NodeId) -> &str {
        self.names
            .get(node.slot())
            .map(String::as_str)
            .unwrap_or_default()
    }

    /// Node of a declared component (dangling endpoints yield `None`).
    pub fn component_node(&self, id: &str) -> Option<NodeId> {
        self.node(id)
            .filter(|n| matches!(self.components.get(n.slot()), Some(Some(_))))
    }

    /// Get a declared component by id.
    pub fn component(&self, id: &str) -> Option<&Component> {
        self.node(id).and_then(|n| self.component_at(n))
    }

    /// Get the component interned at a node.
    pub fn component_at(&self, node: NodeId) -> Option<&Component> {
        self.components.get(node.slot()).and_then(Option::as_ref)
    }

    /// Declared components, in first-declaration order.
    pub fn components(&self) -> impl Iterator<Item = &Component> {
        self.components.iter().flatten()
    }

    /// Ids that appear only as connection endpoints.
    pub fn dangling_ids(&self) -> impl Iterator<Item = &str> {
        self.names
            .iter()
            .zip(&self.components)
            .filter(|(_, c)| c.is_none())
            .map(|(name, _)| name.as_str())
    }

    /// Outgoing edges of a node, in input order.
    pub fn outgoing(&self, node: NodeId) -> impl Iterator<Item = &Edge> {
        Self::slice(&self.out_offsets, &self.out_edges, node)
            .iter()
            .map(|&e| &self.edges[e])
    }

    /// Incoming edges of a node, in input order.
    pub fn incoming(&self, node: NodeId) -> impl Iterator<Item = &Edge> {
        Self::slice(&self.in_offsets, &self.in_edges, node)
            .iter()
            .map(|&e| &self.edges[e])
    }

    /// Number of connections leaving `id` (0 for unknown ids).
    pub fn out_degree(&self, id: &str) -> usize {
        self.node(id)
            .map_or(0, |n| Self::slice(&self.out_offsets, &self.out_edges, n).len())
    }

    /// Build path details for an ordered list of ids, pulled from the component map now.
    pub fn path_details<S: AsRef<str>>(&self, ids: &[S]) -> Vec<PathDetail> {
        ids.iter()
            .enumerate()
            .map(|(position, id)| {
                let id = id.as_ref();
                let component = self.component(id);
                PathDetail {
                    position,
                    component_id: id.to_string(),
                    component_type: component.map(|c| c.kind.clone()),
                    description: component.map(|c| c.description.clone()),
                    specifications: component
                        .map(|c| c.specifications.clone())
                        .unwrap_or_default(),
                }
            })
            .collect()
    }

    fn slice<'a>(offsets: &[usize], flat: &'a [usize], node: NodeId) -> &'a [usize] {
        let idx = node.slot();
        if idx + 1 >= offsets.len() {
            return &[];
        }
        &flat[offsets[idx]..offsets[idx + 1]]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::GraphBuilder;
    use crate::component::Connection;

    fn sample() -> SchematicGraph {
        let mut b = GraphBuilder::new();
        b.add_component(Component::new("P1", ComponentKind::Pump));
        b.add_component(Component::new("V1", ComponentKind::ValveDirectional).with_size("1/2\""));
        b.add_connection(Connection::new("P1", "V1"));
        b.add_connection(Connection::new("V1", "T1").with_kind(ConnectionKind::Tank));
        b.build().unwrap()
    }

    #[test]
    fn dangling_endpoints_are_interned() {
        let g = sample();
        assert_eq!(g.node_count(), 3);
        assert_eq!(g.component_count(), 2);
        assert!(g.node("T1").is_some());
        assert!(g.component_node("T1").is_none());
        assert_eq!(g.dangling_ids().collect::<Vec<_>>(), vec!["T1"]);
    }

    #[test]
    fn adjacency_both_directions() {
        let g = sample();
        let v1 = g.node("V1").unwrap();
        let out: Vec<&str> = g.outgoing(v1).map(|e| g.name(e.to)).collect();
        let inc: Vec<&str> = g.incoming(v1).map(|e| g.name(e.from)).collect();
        assert_eq!(out, vec!["T1"]);
        assert_eq!(inc, vec!["P1"]);
        assert_eq!(g.out_degree("V1"), 1);
        assert_eq!(g.out_degree("nope"), 0);
    }

    #[test]
    fn path_details_snapshot() {
        let g = sample();
        let details = g.path_details(&["P1", "V1", "T1"]);
        assert_eq!(details.len(), 3);
        assert_eq!(details[1].position, 1);
        assert_eq!(details[1].component_type, Some(ComponentKind::ValveDirectional));
        assert_eq!(details[1].specifications.size.as_deref(), Some("1/2\""));
        assert_eq!(details[2].component_type, None);
        assert!(details[2].specifications.is_empty());
    }
}

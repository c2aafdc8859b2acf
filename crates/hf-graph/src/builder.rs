//! Incremental graph builder.

use std::collections::HashMap;

use hf_core::NodeId;

use crate::component::{Component, Connection};
use crate::error::GraphError;
use crate::graph::{Edge, SchematicGraph};

/// Builder for constructing a schematic graph.
///
/// Use `add_component` and `add_connection` to build up the graph,
/// then call `build()` to validate and freeze it into an immutable `SchematicGraph`.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    names: Vec<String>,
    lookup: HashMap<String, NodeId>,
    components: Vec<Option<Component>>,
    edges: Vec<Edge>,
    /// Number of `add_component` calls so far, duplicates included.
    declared: usize,
    /// First empty id seen, by input list and position in that list.
    empty_id: Option<(&'static str, usize)>,
}

impl GraphBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder pre-loaded from flat component and connection lists.
    pub fn from_parts<'a>(
        components: impl IntoIterator<Item = &'a Component>,
        connections: impl IntoIterator<Item = &'a Connection>,
    ) -> Self {
        let mut builder = Self::new();
        for component in components {
            builder.add_component(component.clone());
        }
        for connection in connections {
            builder.add_connection(connection.clone());
        }
        builder
    }

    /// Add a component and return its node.
    ///
    /// A repeated id replaces the earlier record in place (last write wins)
    /// and keeps the node id of the first declaration.
    pub fn add_component(&mut self, component: Component) -> NodeId {
        if component.id.is_empty() {
            self.note_empty("components", self.declared);
        }
        self.declared += 1;
        let node = self.intern(&component.id);
        self.components[node.slot()] = Some(component);
        node
    }

    /// Add a directed connection. Endpoints that name no component are interned as bare nodes.
    pub fn add_connection(&mut self, connection: Connection) {
        if connection.from.is_empty() || connection.to.is_empty() {
            self.note_empty("connections", self.edges.len());
        }
        let from = self.intern(&connection.from);
        let to = self.intern(&connection.to);
        self.edges.push(Edge {
            from,
            to,
            kind: connection.kind,
            line_size: connection.line_size,
        });
    }

    fn note_empty(&mut self, context: &'static str, position: usize) {
        self.empty_id.get_or_insert((context, position));
    }

    fn intern(&mut self, id: &str) -> NodeId {
        if let Some(&node) = self.lookup.get(id) {
            return node;
        }
        let node = NodeId::from_index(self.names.len() as u32);
        self.names.push(id.to_string());
        self.lookup.insert(id.to_string(), node);
        self.components.push(None);
        node
    }

    /// Validate and build the graph, returning an immutable `SchematicGraph`.
    pub fn build(self) -> Result<SchematicGraph, GraphError> {
        if let Some((context, position)) = self.empty_id {
            return Err(GraphError::EmptyId { context, position });
        }

        let node_count = self.names.len();
        let (out_offsets, out_edges) = build_csr(node_count, &self.edges, |e| e.from);
        let (in_offsets, in_edges) = build_csr(node_count, &self.edges, |e| e.to);

        Ok(SchematicGraph {
            names: self.names,
            lookup: self.lookup,
            components: self.components,
            edges: self.edges,
            out_offsets,
            out_edges,
            in_offsets,
            in_edges,
        })
    }
}

impl SchematicGraph {
    /// Build a graph fresh from a `(components, connections)` pair.
    pub fn from_parts<'a>(
        components: impl IntoIterator<Item = &'a Component>,
        connections: impl IntoIterator<Item = &'a Connection>,
    ) -> Result<Self, GraphError> {
        GraphBuilder::from_parts(components, connections).build()
    }
}

/// Build compact adjacency: for each node, the indices of its edges keyed by `key`.
///
/// Counting sort keeps edges of the same node in input order.
fn build_csr(
    node_count: usize,
    edges: &[Edge],
    key: impl Fn(&Edge) -> NodeId,
) -> (Vec<usize>, Vec<usize>) {
    let mut offsets = vec![0usize; node_count + 1];
    for edge in edges {
        offsets[key(edge).slot() + 1] += 1;
    }
    for i in 0..node_count {
        offsets[i + 1] += offsets[i];
    }

    let mut cursor = offsets.clone();
    let mut flat = vec![0usize; edges.len()];
    for (i, edge) in edges.iter().enumerate() {
        let slot = key(edge).slot();
        flat[cursor[slot]] = i;
        cursor[slot] += 1;
    }

    (offsets, flat)
}

//! Direct neighbours of a component: what feeds it and what it feeds.

use serde::Serialize;

use crate::component::{Component, ConnectionKind};
use crate::error::GraphError;
use crate::graph::SchematicGraph;

/// One side of a connection touching the inspected component.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImpactLink {
    pub component_id: String,
    /// `None` when the neighbour is a dangling connection endpoint.
    pub component: Option<Component>,
    pub connection_type: ConnectionKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_size: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentImpact {
    pub component: Component,
    pub upstream_components: Vec<ImpactLink>,
    pub downstream_components: Vec<ImpactLink>,
    pub total_upstream: usize,
    pub total_downstream: usize,
}

impl ComponentImpact {
    pub fn total_connections(&self) -> usize {
        self.total_upstream + self.total_downstream
    }
}

/// Collect the upstream and downstream neighbours of a declared component.
///
/// Parallel connections show up once per connection.
pub fn component_impact(graph: &SchematicGraph, id: &str) -> Result<ComponentImpact, GraphError> {
    let (node, component) = graph
        .component_node(id)
        .and_then(|n| graph.component_at(n).map(|c| (n, c)))
        .ok_or_else(|| GraphError::UnknownComponent { id: id.to_string() })?;

    let link = |other, kind: &ConnectionKind, line_size: &Option<String>| ImpactLink {
        component_id: graph.name(other).to_string(),
        component: graph.component_at(other).cloned(),
        connection_type: kind.clone(),
        line_size: line_size.clone(),
    };

    let upstream_components: Vec<ImpactLink> = graph
        .incoming(node)
        .map(|e| link(e.from, &e.kind, &e.line_size))
        .collect();
    let downstream_components: Vec<ImpactLink> = graph
        .outgoing(node)
        .map(|e| link(e.to, &e.kind, &e.line_size))
        .collect();

    Ok(ComponentImpact {
        component: component.clone(),
        total_upstream: upstream_components.len(),
        total_downstream: downstream_components.len(),
        upstream_components,
        downstream_components,
    })
}

//! Depth-bounded breadth-first path discovery.
//!
//! Visited marking happens on enqueue, so every node gets exactly one parent
//! and its path is fixed the first time it is reached. A node whose path is
//! longer than `max_depth` is dropped without expanding its neighbours but
//! stays visited: no other branch will reach the target through it later.
//! This bounds the search on large or cyclic schematics at the cost of
//! occasionally missing a route that exists.

use std::collections::VecDeque;

use hf_core::NodeId;
use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::graph::{PathDetail, SchematicGraph};

/// Default bound on the number of components in a returned path.
pub const DEFAULT_MAX_DEPTH: usize = 20;

/// A discovered path and the component snapshot along it.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowPath {
    pub path: Vec<String>,
    pub path_details: Vec<PathDetail>,
}

impl FlowPath {
    pub fn path_length(&self) -> usize {
        self.path.len()
    }
}

/// Why no path was returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathFailure {
    #[error("Start or end component not found: {}", .missing.join(", "))]
    MissingComponent { missing: Vec<String> },

    #[error("No path found between {start} and {end}")]
    NoPath {
        start: String,
        end: String,
        max_depth: usize,
    },
}

/// Outcome of [`find_path`]. Failure is a value, never a panic or error return.
#[derive(Debug, Clone, PartialEq)]
pub enum PathResult {
    Found(FlowPath),
    NotFound(PathFailure),
}

impl PathResult {
    pub fn is_found(&self) -> bool {
        matches!(self, PathResult::Found(_))
    }

    pub fn path(&self) -> Option<&FlowPath> {
        match self {
            PathResult::Found(p) => Some(p),
            PathResult::NotFound(_) => None,
        }
    }

    pub fn failure(&self) -> Option<&PathFailure> {
        match self {
            PathResult::Found(_) => None,
            PathResult::NotFound(f) => Some(f),
        }
    }
}

impl Serialize for PathResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PathResult::Found(p) => {
                let mut s = serializer.serialize_struct("PathResult", 4)?;
                s.serialize_field("path_found", &true)?;
                s.serialize_field("path", &p.path)?;
                s.serialize_field("path_length", &p.path_length())?;
                s.serialize_field("path_details", &p.path_details)?;
                s.end()
            }
            PathResult::NotFound(f) => {
                let mut s = serializer.serialize_struct("PathResult", 2)?;
                s.serialize_field("path_found", &false)?;
                s.serialize_field("error", &f.to_string())?;
                s.end()
            }
        }
    }
}

/// Find the first path from `start` to `end` by BFS, bounded to `max_depth` components.
///
/// Both ends must be declared components; intermediate hops may pass through
/// dangling connection endpoints.
pub fn find_path(graph: &SchematicGraph, start: &str, end: &str, max_depth: usize) -> PathResult {
    let (start_node, end_node) = match (graph.component_node(start), graph.component_node(end)) {
        (Some(s), Some(e)) => (s, e),
        (s, e) => {
            let missing = [(s, start), (e, end)]
                .into_iter()
                .filter(|(node, _)| node.is_none())
                .map(|(_, id)| id.to_string())
                .collect();
            tracing::debug!(start, end, "path endpoints missing");
            return PathResult::NotFound(PathFailure::MissingComponent { missing });
        }
    };

    let node_count = graph.node_count();
    let mut parent: Vec<Option<NodeId>> = vec![None; node_count];
    let mut depth = vec![0usize; node_count];
    let mut visited = vec![false; node_count];

    let mut queue = VecDeque::from([start_node]);
    visited[start_node.slot()] = true;
    depth[start_node.slot()] = 1;

    while let Some(current) = queue.pop_front() {
        if depth[current.slot()] > max_depth {
            continue;
        }

        if current == end_node {
            let nodes = unwind(&parent, current);
            let path: Vec<String> = nodes.iter().map(|&n| graph.name(n).to_string()).collect();
            tracing::debug!(start, end, length = path.len(), "path found");
            return PathResult::Found(FlowPath {
                path_details: graph.path_details(&path),
                path,
            });
        }

        for edge in graph.outgoing(current) {
            let next = edge.to.slot();
            if !visited[next] {
                visited[next] = true;
                parent[next] = Some(current);
                depth[next] = depth[current.slot()] + 1;
                queue.push_back(edge.to);
            }
        }
    }

    tracing::debug!(start, end, max_depth, "no path");
    PathResult::NotFound(PathFailure::NoPath {
        start: start.to_string(),
        end: end.to_string(),
        max_depth,
    })
}

fn unwind(parent: &[Option<NodeId>], last: NodeId) -> Vec<NodeId> {
    let mut nodes = vec![last];
    let mut cursor = last;
    while let Some(p) = parent[cursor.slot()] {
        nodes.push(p);
        cursor = p;
    }
    nodes.reverse();
    nodes
}

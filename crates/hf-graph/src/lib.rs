//! hf-graph: schematic model and connectivity for hydraulic circuits.
//!
//! Provides:
//! - Component and connection records as extracted from a schematic
//! - Incremental graph builder producing an immutable, indexed graph
//! - Depth-bounded BFS path discovery
//! - Upstream/downstream impact of a single component
//!
//! # Example
//!
//! ```
//! use hf_graph::{find_path, Component, ComponentKind, Connection, GraphBuilder};
//!
//! let mut builder = GraphBuilder::new();
//! builder.add_component(Component::new("P1", ComponentKind::Pump));
//! builder.add_component(Component::new("V1", ComponentKind::ValveCheck));
//! builder.add_connection(Connection::new("P1", "V1"));
//! let graph = builder.build().unwrap();
//!
//! let result = find_path(&graph, "P1", "V1", 20);
//! assert_eq!(result.path().unwrap().path, vec!["P1", "V1"]);
//! ```

pub mod builder;
pub mod component;
pub mod error;
pub mod graph;
pub mod impact;
pub mod path;

pub use builder::GraphBuilder;
pub use component::{Component, ComponentKind, Connection, ConnectionKind, Specifications};
pub use error::GraphError;
pub use graph::{Edge, PathDetail, SchematicGraph};
pub use impact::{ComponentImpact, ImpactLink, component_impact};
pub use path::{DEFAULT_MAX_DEPTH, FlowPath, PathFailure, PathResult, find_path};

//! Content fingerprint of a schematic graph.

use hf_graph::{Component, Connection};
use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::schema::Schematic;

#[derive(Serialize)]
struct GraphContent<'a> {
    components: &'a [Component],
    connections: &'a [Connection],
}

/// Lowercase hex SHA-256 over the JSON form of components and connections.
///
/// Metadata, flow paths and notes are not part of the fingerprint.
pub fn fingerprint(schematic: &Schematic) -> String {
    let content = GraphContent {
        components: &schematic.components,
        connections: &schematic.connections,
    };
    let json = serde_json::to_string(&content).unwrap_or_default();

    let mut hasher = Sha256::new();
    hasher.update(json.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hf_graph::ComponentKind;

    fn schematic() -> Schematic {
        Schematic {
            components: vec![Component::new("P1", ComponentKind::Pump)],
            connections: vec![Connection::new("P1", "V1")],
            ..Default::default()
        }
    }

    #[test]
    fn hash_stability() {
        let a = fingerprint(&schematic());
        assert_eq!(a, fingerprint(&schematic()));
        assert_eq!(a.len(), 64);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn annotations_do_not_change_hash() {
        let mut annotated = schematic();
        annotated.notes.push("Check relief setting".into());
        annotated.metadata.revision = Some("D".into());
        assert_eq!(fingerprint(&annotated), fingerprint(&schematic()));
    }

    #[test]
    fn graph_changes_change_hash() {
        let mut changed = schematic();
        changed.connections.push(Connection::new("V1", "C1"));
        assert_ne!(fingerprint(&changed), fingerprint(&schematic()));
    }
}

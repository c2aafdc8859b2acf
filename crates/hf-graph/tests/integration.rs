//! Integration tests for hf-graph.

use std::collections::{HashSet, VecDeque};

use hf_graph::{
    Component, ComponentKind, Connection, ConnectionKind, GraphBuilder, PathFailure, PathResult,
    SchematicGraph, component_impact, find_path,
};
use proptest::prelude::*;

fn excavator_boom() -> SchematicGraph {
    let mut b = GraphBuilder::new();
    b.add_component(Component::new("P1", ComponentKind::Pump).with_description("Main pump"));
    b.add_component(Component::new("V1", ComponentKind::ValveCheck).with_size("1/2\""));
    b.add_component(Component::new("V2", ComponentKind::ValveDirectional).with_size("3/4\""));
    b.add_component(Component::new("H203", ComponentKind::Cylinder).with_description("Boom"));
    b.add_component(Component::new("F1", ComponentKind::Filter));
    b.add_connection(Connection::new("P1", "V1").with_kind(ConnectionKind::Pressure));
    b.add_connection(Connection::new("V1", "H203"));
    b.add_connection(Connection::new("P1", "V2"));
    b.add_connection(Connection::new("V2", "H203"));
    b.add_connection(Connection::new("H203", "F1").with_kind(ConnectionKind::Tank));
    b.build().unwrap()
}

#[test]
fn pump_to_cylinder_takes_first_branch() {
    let g = excavator_boom();
    let found = find_path(&g, "P1", "H203", 20);
    let path = found.path().unwrap();
    assert_eq!(path.path, vec!["P1", "V1", "H203"]);
    assert_eq!(path.path_length(), 3);
    assert_eq!(path.path_details[0].description.as_deref(), Some("Main pump"));
    assert_eq!(path.path_details[1].component_type, Some(ComponentKind::ValveCheck));
}

#[test]
fn direction_matters() {
    let g = excavator_boom();
    assert!(matches!(
        find_path(&g, "H203", "P1", 20),
        PathResult::NotFound(PathFailure::NoPath { .. })
    ));
}

#[test]
fn depth_bound_cuts_long_paths() {
    let g = excavator_boom();
    assert!(find_path(&g, "P1", "F1", 4).is_found());
    assert!(!find_path(&g, "P1", "F1", 3).is_found());
}

#[test]
fn dangling_endpoints_are_traversable() {
    let mut b = GraphBuilder::new();
    b.add_component(Component::new("P1", ComponentKind::Pump));
    b.add_component(Component::new("C1", ComponentKind::Cylinder));
    b.add_connection(Connection::new("P1", "M7"));
    b.add_connection(Connection::new("M7", "C1"));
    let g = b.build().unwrap();

    let path = find_path(&g, "P1", "C1", 20);
    let path = path.path().unwrap();
    assert_eq!(path.path, vec!["P1", "M7", "C1"]);
    assert_eq!(path.path_details[1].component_type, None);

    let missing = find_path(&g, "P1", "M7", 20);
    assert_eq!(
        missing.failure(),
        Some(&PathFailure::MissingComponent {
            missing: vec!["M7".into()]
        })
    );
}

#[test]
fn impact_of_directional_valve() {
    let g = excavator_boom();
    let impact = component_impact(&g, "H203").unwrap();
    let up: Vec<&str> = impact
        .upstream_components
        .iter()
        .map(|l| l.component_id.as_str())
        .collect();
    assert_eq!(up, vec!["V1", "V2"]);
    assert_eq!(impact.total_downstream, 1);
    assert_eq!(impact.total_connections(), 3);
}

fn reference_distance(n: usize, edges: &[(usize, usize)], start: usize, end: usize) -> Option<usize> {
    let mut dist = vec![None; n];
    dist[start] = Some(0);
    let mut queue = VecDeque::from([start]);
    while let Some(u) = queue.pop_front() {
        for &(a, b) in edges {
            if a == u && dist[b].is_none() {
                dist[b] = dist[u].map(|d| d + 1);
                queue.push_back(b);
            }
        }
    }
    dist[end]
}

fn random_graph() -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
    (2usize..10).prop_flat_map(|n| {
        (
            Just(n),
            prop::collection::vec((0..n, 0..n), 0..(n * 3)),
        )
    })
}

fn build(n: usize, edges: &[(usize, usize)]) -> SchematicGraph {
    let mut b = GraphBuilder::new();
    for i in 0..n {
        b.add_component(Component::new(format!("N{i}"), ComponentKind::Manifold));
    }
    for &(a, c) in edges {
        b.add_connection(Connection::new(format!("N{a}"), format!("N{c}")));
    }
    b.build().unwrap()
}

proptest! {
    #[test]
    fn bfs_returns_a_shortest_valid_path(
        (n, edges) in random_graph(),
        s in 0usize..10,
        t in 0usize..10,
        max_depth in 0usize..12,
    ) {
        let (s, t) = (s % n, t % n);
        let g = build(n, &edges);
        let result = find_path(&g, &format!("N{s}"), &format!("N{t}"), max_depth);
        let expected = reference_distance(n, &edges, s, t).map(|d| d + 1);

        match (result, expected) {
            (PathResult::Found(p), Some(len)) => {
                prop_assert_eq!(p.path_length(), len);
                prop_assert!(p.path_length() <= max_depth);
                prop_assert_eq!(p.path.first().cloned(), Some(format!("N{s}")));
                prop_assert_eq!(p.path.last().cloned(), Some(format!("N{t}")));

                let unique: HashSet<&String> = p.path.iter().collect();
                prop_assert_eq!(unique.len(), p.path.len());

                let edge_set: HashSet<(String, String)> = edges
                    .iter()
                    .map(|&(a, b)| (format!("N{a}"), format!("N{b}")))
                    .collect();
                for w in p.path.windows(2) {
                    prop_assert!(edge_set.contains(&(w[0].clone(), w[1].clone())));
                }
            }
            (PathResult::NotFound(PathFailure::NoPath { .. }), expected) => {
                prop_assert!(expected.is_none_or(|len| len > max_depth));
            }
            (other, expected) => {
                prop_assert!(false, "unexpected {:?} for expected {:?}", other, expected);
            }
        }
    }
}

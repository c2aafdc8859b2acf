//! Whole-circuit restriction scan.

use hf_components::{PressureDropEngine, RestrictionKind, Severity};
use hf_core::units::lpm;
use hf_graph::SchematicGraph;

use crate::report::CircuitRestriction;

/// A valve with more outgoing connections than this is flagged.
pub const SERIES_OUTLET_LIMIT: usize = 2;

/// Flag undersized ports and heavily branched valves across every declared component.
///
/// Only components with a non-empty size are checked for port velocity. The
/// result is ordered HIGH, MEDIUM, LOW and otherwise keeps declaration order.
pub fn find_restrictions(
    engine: &PressureDropEngine,
    graph: &SchematicGraph,
    flow_rate_lpm: f64,
) -> Vec<CircuitRestriction> {
    tracing::info!(
        components = graph.component_count(),
        flow_rate_lpm,
        "scanning circuit for restrictions"
    );

    let flow = lpm(flow_rate_lpm);
    let mut found = Vec::new();

    for component in graph.components() {
        let size = component
            .specifications
            .nominal_size()
            .filter(|s| !s.is_empty());
        if let Some(size) = size {
            let bore = engine.parse_bore(size);
            let velocity = engine.velocity(flow, bore.diameter).value;
            if let Some(severity) = engine.limits().velocity_severity(velocity) {
                found.push(CircuitRestriction {
                    component_id: component.id.clone(),
                    restriction_type: RestrictionKind::UndersizedPort,
                    severity,
                    details: format!(
                        "Port size {size} creates velocity of {velocity:.2} m/s at {flow_rate_lpm} LPM"
                    ),
                    recommendation: format!(
                        "Consider increasing to next size up for flow rates above {:.0} LPM",
                        flow_rate_lpm * 0.7
                    ),
                });
            }
        }

        let outlets = graph.out_degree(&component.id);
        if component.kind.is_valve() && outlets > SERIES_OUTLET_LIMIT {
            found.push(CircuitRestriction {
                component_id: component.id.clone(),
                restriction_type: RestrictionKind::SeriesRestriction,
                severity: Severity::Medium,
                details: format!(
                    "Valve has {outlets} downstream connections, may create restrictions"
                ),
                recommendation: "Review circuit design for parallel paths".to_string(),
            });
        }
    }

    found.sort_by_key(|r| r.severity);
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use hf_graph::{Component, ComponentKind, Connection, Specifications};

    #[test]
    fn branched_valve_is_flagged() {
        let components = [Component::new("V1", ComponentKind::ValveDirectional)];
        let connections: Vec<Connection> = ["A", "B", "T"]
            .iter()
            .map(|to| Connection::new("V1", *to))
            .collect();
        let g = SchematicGraph::from_parts(&components, &connections).unwrap();
        let found = find_restrictions(&PressureDropEngine::default(), &g, 100.0);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].restriction_type, RestrictionKind::SeriesRestriction);
        assert_eq!(
            found[0].details,
            "Valve has 3 downstream connections, may create restrictions"
        );
    }

    #[test]
    fn unsized_components_skip_port_check() {
        let components = [
            Component::new("P1", ComponentKind::Pump),
            Component::new("F1", ComponentKind::Filter).with_specifications(Specifications {
                size: Some(String::new()),
                port_size: Some("1/8\"".into()),
                ..Default::default()
            }),
        ];
        let g = SchematicGraph::from_parts(&components, &Vec::<Connection>::new()).unwrap();
        assert!(find_restrictions(&PressureDropEngine::default(), &g, 100.0).is_empty());
    }

    #[test]
    fn high_severity_sorts_first() {
        let components = [
            Component::new("V1", ComponentKind::ValveCheck),
            Component::new("F1", ComponentKind::Filter).with_size("1/4\""),
        ];
        let connections: Vec<Connection> = ["A", "B", "C"]
            .iter()
            .map(|to| Connection::new("V1", *to))
            .collect();
        let g = SchematicGraph::from_parts(&components, &connections).unwrap();
        let found = find_restrictions(&PressureDropEngine::default(), &g, 100.0);
        let order: Vec<(&str, Severity)> = found
            .iter()
            .map(|r| (r.component_id.as_str(), r.severity))
            .collect();
        assert_eq!(order, vec![("F1", Severity::High), ("V1", Severity::Medium)]);
        assert_eq!(
            found[0].recommendation,
            "Consider increasing to next size up for flow rates above 70 LPM"
        );
        assert!(found[0].details.ends_with("m/s at 100 LPM"));
    }
}

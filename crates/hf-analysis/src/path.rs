//! Pressure-drop analysis along an ordered path.

use hf_components::PressureDropEngine;
use hf_core::numeric::ratio_or_zero;
use hf_core::units::{bar, lpm, pa, to_bar, to_psi};
use hf_graph::{ComponentKind, PathDetail};

use crate::narrative::path_narrative;
use crate::report::{ComponentPressureDrop, FlowAnalysisResult, PathRestriction};

/// Efficiency below this percentage earns a sizing warning in the narrative.
pub const EFFICIENCY_WARNING_PERCENT: f64 = 70.0;

/// Analyze every component of a path at a design flow and system pressure.
///
/// Components are evaluated in path order. Positions that name no declared
/// component are evaluated with the `UNKNOWN` tag and default bore.
pub fn analyze_path(
    engine: &PressureDropEngine,
    path: &[PathDetail],
    flow_rate_lpm: f64,
    pressure_bar: f64,
) -> FlowAnalysisResult {
    tracing::info!(
        components = path.len(),
        flow_rate_lpm,
        pressure_bar,
        "analyzing flow path"
    );

    let flow = lpm(flow_rate_lpm);
    let system_pressure = bar(pressure_bar);
    let unknown = ComponentKind::Unknown;

    let mut total_pa = 0.0;
    let mut drops = Vec::with_capacity(path.len());
    let mut restrictions = Vec::new();

    for detail in path {
        let kind = detail.component_type.as_ref().unwrap_or(&unknown);
        let evaluated =
            engine.component_drop(kind, &detail.specifications, flow, system_pressure);
        total_pa += evaluated.pressure_drop.value;

        drops.push(ComponentPressureDrop {
            component_id: detail.component_id.clone(),
            component_type: kind.clone(),
            description: detail.description.clone(),
            pressure_drop_bar: to_bar(evaluated.pressure_drop),
            pressure_drop_psi: to_psi(evaluated.pressure_drop),
            percent_of_total: 0.0,
        });

        if let Some(r) = evaluated.restriction {
            restrictions.push(PathRestriction {
                component_id: detail.component_id.clone(),
                restriction_type: r.kind,
                severity: r.severity,
                details: r.details,
            });
        }
    }

    for drop in &mut drops {
        drop.percent_of_total = ratio_or_zero(bar(drop.pressure_drop_bar).value, total_pa) * 100.0;
    }

    let bottleneck = bottleneck(&drops).cloned();
    let total = pa(total_pa);
    let total_pressure_drop_bar = to_bar(total);

    let mut result = FlowAnalysisResult {
        flow_rate_lpm,
        system_pressure_bar: pressure_bar,
        total_pressure_drop_bar,
        total_pressure_drop_psi: to_psi(total),
        efficiency_percent: efficiency(total_pressure_drop_bar, pressure_bar),
        component_pressure_drops: drops,
        bottleneck,
        restrictions,
        analysis: String::new(),
    };
    result.analysis = path_narrative(&result);
    result
}

/// `max(0, 100 - loss%)`, or 0 when there is no reference pressure.
pub fn efficiency(total_drop_bar: f64, system_pressure_bar: f64) -> f64 {
    if system_pressure_bar == 0.0 {
        return 0.0;
    }
    (100.0 - total_drop_bar / system_pressure_bar * 100.0).max(0.0)
}

fn bottleneck(drops: &[ComponentPressureDrop]) -> Option<&ComponentPressureDrop> {
    drops.iter().fold(None, |best, d| match best {
        Some(b) if b.pressure_drop_bar >= d.pressure_drop_bar => Some(b),
        _ => Some(d),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use hf_graph::Specifications;

    fn detail(id: &str, kind: ComponentKind, size: Option<&str>) -> PathDetail {
        PathDetail {
            position: 0,
            component_id: id.into(),
            component_type: Some(kind),
            description: Some(format!("{id} description")),
            specifications: Specifications {
                size: size.map(Into::into),
                ..Default::default()
            },
        }
    }

    #[test]
    fn efficiency_edges() {
        assert_eq!(efficiency(1.0, 0.0), 0.0);
        assert_eq!(efficiency(0.0, 200.0), 100.0);
        assert_eq!(efficiency(50.0, 200.0), 75.0);
        assert_eq!(efficiency(500.0, 200.0), 0.0);
    }

    #[test]
    fn empty_path() {
        let result = analyze_path(&PressureDropEngine::default(), &[], 100.0, 200.0);
        assert_eq!(result.total_pressure_drop_bar, 0.0);
        assert_eq!(result.efficiency_percent, 100.0);
        assert!(result.bottleneck.is_none());
        assert!(result.component_pressure_drops.is_empty());
    }

    #[test]
    fn bottleneck_prefers_first_of_equals() {
        let path = [
            detail("V1", ComponentKind::ValveCheck, Some("1/2\"")),
            detail("V2", ComponentKind::ValveCheck, Some("1/2\"")),
        ];
        let result = analyze_path(&PressureDropEngine::default(), &path, 100.0, 200.0);
        assert_eq!(result.bottleneck.unwrap().component_id, "V1");
        assert!((result.component_pressure_drops[0].percent_of_total - 50.0).abs() < 1e-9);
    }

    #[test]
    fn zero_flow_has_zero_percentages() {
        let path = [
            detail("P1", ComponentKind::Pump, None),
            detail("F1", ComponentKind::Filter, Some("DN20")),
        ];
        let result = analyze_path(&PressureDropEngine::default(), &path, 0.0, 200.0);
        assert_eq!(result.total_pressure_drop_bar, 0.0);
        assert!(
            result
                .component_pressure_drops
                .iter()
                .all(|d| d.percent_of_total == 0.0)
        );
        assert!(result.restrictions.is_empty());
    }

    #[test]
    fn undeclared_position_uses_unknown_tag() {
        let path = [PathDetail {
            position: 0,
            component_id: "M7".into(),
            component_type: None,
            description: None,
            specifications: Specifications::default(),
        }];
        let result = analyze_path(&PressureDropEngine::default(), &path, 10.0, 200.0);
        assert_eq!(
            result.component_pressure_drops[0].component_type,
            ComponentKind::Unknown
        );
        assert!(result.total_pressure_drop_bar > 0.0);
    }
}

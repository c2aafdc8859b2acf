//! Human-readable summaries of analysis results.

use hf_core::units::constants::PSI_PER_BAR;

use crate::compare::PathComparison;
use crate::path::EFFICIENCY_WARNING_PERCENT;
use crate::report::FlowAnalysisResult;

/// Summary text for a path analysis.
pub fn path_narrative(result: &FlowAnalysisResult) -> String {
    let total = result.total_pressure_drop_bar;
    let mut lines = vec![
        "Flow Path Analysis Summary:".to_string(),
        format!(
            "  Total pressure drop: {total:.2} bar ({:.1} PSI)",
            total * PSI_PER_BAR
        ),
        format!("  System pressure: {:.2} bar", result.system_pressure_bar),
        format!("  Path efficiency: {:.1}%", result.efficiency_percent),
    ];

    if let Some(b) = &result.bottleneck {
        let mut heading = format!("\n  Bottleneck: {}", b.component_id);
        if let Some(description) = b.description.as_deref().filter(|d| !d.is_empty()) {
            heading.push_str(&format!(" - {description}"));
        }
        lines.push(heading);
        lines.push(format!(
            "    Pressure drop: {:.2} bar ({:.1}% of total)",
            b.pressure_drop_bar, b.percent_of_total
        ));
    }

    if !result.restrictions.is_empty() {
        lines.push("\n  Identified restrictions:".to_string());
        for r in &result.restrictions {
            lines.push(format!(
                "    - {}: {} (Severity: {})",
                r.component_id, r.restriction_type, r.severity
            ));
            lines.push(format!("      {}", r.details));
        }
    }

    if result.efficiency_percent < EFFICIENCY_WARNING_PERCENT {
        lines.push(format!(
            "\n  ⚠ WARNING: Path efficiency is below {EFFICIENCY_WARNING_PERCENT:.0}%. Consider:"
        ));
        lines.push("    - Increasing line sizes".to_string());
        lines.push("    - Reducing number of restrictions".to_string());
        lines.push("    - Using lower-restriction valves".to_string());
    }

    lines.join("\n")
}

/// Summary text for a side-by-side path comparison.
pub fn comparison_narrative(c: &PathComparison) -> String {
    let (a, b) = (&c.path1_name, &c.path2_name);
    let lines = [
        format!("Flow Path Comparison: {a} vs {b}"),
        "\nPressure Drop:".to_string(),
        format!("  {a}: {:.2} bar", c.pressure_drop.path1),
        format!("  {b}: {:.2} bar", c.pressure_drop.path2),
        format!("  Winner: {}", c.pressure_drop.better_path),
        "\nEfficiency:".to_string(),
        format!("  {a}: {:.1}%", c.efficiency.path1),
        format!("  {b}: {:.1}%", c.efficiency.path2),
        format!("  Winner: {}", c.efficiency.better_path),
        "\nRestrictions:".to_string(),
        format!("  {a}: {} restrictions", c.restrictions.path1),
        format!("  {b}: {} restrictions", c.restrictions.path2),
        format!("  Winner: {}", c.restrictions.better_path),
    ];
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{ComponentPressureDrop, PathRestriction};
    use hf_components::{RestrictionKind, Severity};
    use hf_graph::ComponentKind;

    fn result(efficiency: f64) -> FlowAnalysisResult {
        let drop = ComponentPressureDrop {
            component_id: "V1".into(),
            component_type: ComponentKind::ValveDirectional,
            description: Some("Boom valve".into()),
            pressure_drop_bar: 2.0,
            pressure_drop_psi: 29.0,
            percent_of_total: 100.0,
        };
        FlowAnalysisResult {
            flow_rate_lpm: 100.0,
            system_pressure_bar: 200.0,
            total_pressure_drop_bar: 2.0,
            total_pressure_drop_psi: 29.0,
            efficiency_percent: efficiency,
            component_pressure_drops: vec![drop.clone()],
            bottleneck: Some(drop),
            restrictions: vec![PathRestriction {
                component_id: "V1".into(),
                restriction_type: RestrictionKind::HighVelocity,
                severity: Severity::High,
                details: "Flow velocity 13.16 m/s exceeds recommended 5.0 m/s".into(),
            }],
            analysis: String::new(),
        }
    }

    #[test]
    fn summary_lines() {
        let text = path_narrative(&result(99.0));
        assert!(text.starts_with("Flow Path Analysis Summary:\n"));
        assert!(text.contains("  Total pressure drop: 2.00 bar (29.0 PSI)"));
        assert!(text.contains("  Path efficiency: 99.0%"));
        assert!(text.contains("\n\n  Bottleneck: V1 - Boom valve\n"));
        assert!(text.contains("    Pressure drop: 2.00 bar (100.0% of total)"));
        assert!(text.contains("    - V1: HIGH_VELOCITY (Severity: HIGH)\n      Flow velocity"));
        assert!(!text.contains("WARNING"));
    }

    #[test]
    fn bottleneck_without_description() {
        let mut r = result(99.0);
        if let Some(b) = r.bottleneck.as_mut() {
            b.description = None;
        }
        let text = path_narrative(&r);
        assert!(text.contains("\n\n  Bottleneck: V1\n"));

        if let Some(b) = r.bottleneck.as_mut() {
            b.description = Some(String::new());
        }
        assert!(path_narrative(&r).contains("  Bottleneck: V1\n"));
    }

    #[test]
    fn low_efficiency_adds_advice() {
        let text = path_narrative(&result(42.0));
        assert!(text.contains("WARNING: Path efficiency is below 70%"));
        assert!(text.ends_with("    - Using lower-restriction valves"));
    }
}

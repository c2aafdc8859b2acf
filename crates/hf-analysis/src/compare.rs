//! Side-by-side comparison of two paths or two circuits.
//!
//! Every metric picks the first item only when it is strictly better; on a tie
//! the second item is named.

use std::collections::BTreeSet;

use hf_components::PressureDropEngine;
use hf_graph::SchematicGraph;
use serde::Serialize;

use crate::circuit::find_restrictions;
use crate::narrative::comparison_narrative;
use crate::report::FlowAnalysisResult;

/// A continuous metric of two paths.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricComparison {
    pub path1: f64,
    pub path2: f64,
    pub difference: f64,
    pub better_path: String,
}

/// A count metric of two paths.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountComparison {
    pub path1: usize,
    pub path2: usize,
    pub better_path: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathComparison {
    pub path1_name: String,
    pub path2_name: String,
    /// Lower total drop wins.
    #[serde(rename = "pressure_drop_comparison")]
    pub pressure_drop: MetricComparison,
    /// Higher efficiency wins.
    #[serde(rename = "efficiency_comparison")]
    pub efficiency: MetricComparison,
    /// Fewer restrictions win.
    #[serde(rename = "restriction_comparison")]
    pub restrictions: CountComparison,
    pub summary: String,
}

/// Compare two analyzed paths on drop, efficiency and restriction count.
pub fn compare_paths(
    a: &FlowAnalysisResult,
    b: &FlowAnalysisResult,
    name_a: &str,
    name_b: &str,
) -> PathComparison {
    let pick = |first_wins: bool| (if first_wins { name_a } else { name_b }).to_string();

    let (drop_a, drop_b) = (a.total_pressure_drop_bar, b.total_pressure_drop_bar);
    let (eff_a, eff_b) = (a.efficiency_percent, b.efficiency_percent);
    let (count_a, count_b) = (a.restriction_count(), b.restriction_count());

    let mut comparison = PathComparison {
        path1_name: name_a.to_string(),
        path2_name: name_b.to_string(),
        pressure_drop: MetricComparison {
            path1: drop_a,
            path2: drop_b,
            difference: (drop_a - drop_b).abs(),
            better_path: pick(drop_a < drop_b),
        },
        efficiency: MetricComparison {
            path1: eff_a,
            path2: eff_b,
            difference: (eff_a - eff_b).abs(),
            better_path: pick(eff_a > eff_b),
        },
        restrictions: CountComparison {
            path1: count_a,
            path2: count_b,
            better_path: pick(count_a < count_b),
        },
        summary: String::new(),
    };
    comparison.summary = comparison_narrative(&comparison);
    comparison
}

/// Membership and restriction diff of two whole circuits.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CircuitComparison {
    pub circuit1_name: String,
    pub circuit2_name: String,
    pub flow_rate_lpm: f64,
    pub component_count_1: usize,
    pub component_count_2: usize,
    /// Sorted ids declared only in the first circuit.
    pub only_in_1: Vec<String>,
    pub only_in_2: Vec<String>,
    pub in_both: Vec<String>,
    pub restriction_count_1: usize,
    pub restriction_count_2: usize,
    /// Fewer restrictions win.
    pub better_circuit: String,
    pub summary: String,
}

/// Compare the component sets of two circuits and their restriction counts at one flow rate.
pub fn compare_circuits(
    engine: &PressureDropEngine,
    a: &SchematicGraph,
    b: &SchematicGraph,
    name_a: &str,
    name_b: &str,
    flow_rate_lpm: f64,
) -> CircuitComparison {
    let ids_a: BTreeSet<&str> = a.components().map(|c| c.id.as_str()).collect();
    let ids_b: BTreeSet<&str> = b.components().map(|c| c.id.as_str()).collect();
    let owned = |ids: Vec<&&str>| -> Vec<String> { ids.into_iter().map(|s| s.to_string()).collect() };

    let only_in_1 = owned(ids_a.difference(&ids_b).collect());
    let only_in_2 = owned(ids_b.difference(&ids_a).collect());
    let in_both = owned(ids_a.intersection(&ids_b).collect());

    let restriction_count_1 = find_restrictions(engine, a, flow_rate_lpm).len();
    let restriction_count_2 = find_restrictions(engine, b, flow_rate_lpm).len();

    let better_circuit = if restriction_count_1 < restriction_count_2 {
        name_a
    } else {
        name_b
    }
    .to_string();

    let mut lines = vec![
        format!("Circuit Comparison: {name_a} vs {name_b}"),
        "\nComponents:".to_string(),
        format!("  {name_a}: {} components", ids_a.len()),
        format!("  {name_b}: {} components", ids_b.len()),
        format!("  In both: {} components", in_both.len()),
        format!("  Only in {name_a}: {} components", only_in_1.len()),
        format!("  Only in {name_b}: {} components", only_in_2.len()),
    ];
    for (name, graph, ids) in [(name_a, a, &only_in_1), (name_b, b, &only_in_2)] {
        if ids.is_empty() {
            continue;
        }
        lines.push(format!("\n  Only in {name}:"));
        for id in ids {
            if let Some(c) = graph.component(id) {
                lines.push(format!("    - {id}: {} ({})", c.description, c.kind));
            }
        }
    }
    lines.push(format!("\nRestrictions at {flow_rate_lpm} LPM:"));
    lines.push(format!("  {name_a}: {restriction_count_1} restrictions"));
    lines.push(format!("  {name_b}: {restriction_count_2} restrictions"));
    lines.push(format!("  Winner: {better_circuit}"));

    CircuitComparison {
        circuit1_name: name_a.to_string(),
        circuit2_name: name_b.to_string(),
        flow_rate_lpm,
        component_count_1: ids_a.len(),
        component_count_2: ids_b.len(),
        only_in_1,
        only_in_2,
        in_both,
        restriction_count_1,
        restriction_count_2,
        better_circuit,
        summary: lines.join("\n"),
    }
}

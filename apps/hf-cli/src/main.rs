use clap::{Args, Parser, Subcommand};
use hf_analysis::{CircuitComparison, CircuitRestriction, PathComparison};
use hf_app::{
    AnalysisContext, AppError, AppResult, DesignPoint, PathAnalysis, analysis_service,
    schematic_service,
};
use hf_graph::{ComponentImpact, ImpactLink, PathResult};
use hf_project::{AnalysisSettings, Schematic, SchematicSummary};
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "hf-cli")]
#[command(about = "HydraFlow CLI - Hydraulic circuit path and pressure-drop analysis", long_about = None)]
struct Cli {
    /// Analysis settings file (YAML or JSON); defaults apply when omitted
    #[arg(long, global = true)]
    settings: Option<PathBuf>,
    /// Print the result record as JSON instead of a text report
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

/// Design point overrides shared by the analysis commands.
#[derive(Args, Debug, Clone, Copy, Default)]
struct DesignArgs {
    /// Flow rate in L/min (overrides the settings file)
    #[arg(long)]
    flow_rate: Option<f64>,
    /// System pressure in bar (overrides the settings file)
    #[arg(long)]
    pressure: Option<f64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a schematic and report validation warnings
    Validate {
        /// Path to the schematic file (JSON or YAML)
        schematic: PathBuf,
    },
    /// Summarize a schematic's contents
    Summary {
        /// Path to the schematic file (JSON or YAML)
        schematic: PathBuf,
    },
    /// Find a flow path between two components
    Path {
        /// Path to the schematic file (JSON or YAML)
        schematic: PathBuf,
        /// Start component ID
        start: String,
        /// End component ID
        end: String,
        /// Maximum number of components in the path
        #[arg(long)]
        max_depth: Option<usize>,
    },
    /// Find a flow path and analyze its pressure drop
    Analyze {
        /// Path to the schematic file (JSON or YAML)
        schematic: PathBuf,
        /// Start component ID
        start: String,
        /// End component ID
        end: String,
        #[command(flatten)]
        design: DesignArgs,
        /// Maximum number of components in the path
        #[arg(long)]
        max_depth: Option<usize>,
    },
    /// Analyze a flow path declared in the schematic
    AnalyzeDeclared {
        /// Path to the schematic file (JSON or YAML)
        schematic: PathBuf,
        /// Name of the declared flow path
        flow_path: String,
        #[command(flatten)]
        design: DesignArgs,
    },
    /// Scan the whole circuit for restrictions
    Restrictions {
        /// Path to the schematic file (JSON or YAML)
        schematic: PathBuf,
        /// Flow rate in L/min (overrides the settings file)
        #[arg(long)]
        flow_rate: Option<f64>,
    },
    /// Show what feeds a component and what it feeds
    Impact {
        /// Path to the schematic file (JSON or YAML)
        schematic: PathBuf,
        /// Component ID
        component: String,
    },
    /// Compare two flow paths of one schematic
    ComparePaths {
        /// Path to the schematic file (JSON or YAML)
        schematic: PathBuf,
        /// Start of the first path
        start_a: String,
        /// End of the first path
        end_a: String,
        /// Start of the second path
        start_b: String,
        /// End of the second path
        end_b: String,
        #[command(flatten)]
        design: DesignArgs,
    },
    /// Compare two schematics
    CompareCircuits {
        /// First schematic file
        schematic_a: PathBuf,
        /// Second schematic file
        schematic_b: PathBuf,
        /// Flow rate in L/min (overrides the settings file)
        #[arg(long)]
        flow_rate: Option<f64>,
    },
}

struct Output {
    json: bool,
}

impl Output {
    /// Print `value` as pretty JSON, or run `text` to print the report.
    fn emit<T: Serialize>(&self, value: &T, text: impl FnOnce(&T)) -> AppResult<()> {
        if self.json {
            let rendered =
                serde_json::to_string_pretty(value).map_err(|e| AppError::Output(e.to_string()))?;
            println!("{}", rendered);
        } else {
            text(value);
        }
        Ok(())
    }
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let out = Output { json: cli.json };
    let settings = schematic_service::load_settings(cli.settings.as_deref())?;
    tracing::debug!(
        flow_rate_lpm = settings.flow_rate_lpm,
        pressure_bar = settings.pressure_bar,
        max_depth = settings.max_depth,
        "settings loaded"
    );

    match cli.command {
        Commands::Validate { schematic } => cmd_validate(&out, &schematic),
        Commands::Summary { schematic } => cmd_summary(&out, &schematic),
        Commands::Path {
            schematic,
            start,
            end,
            max_depth,
        } => cmd_path(
            &out,
            &schematic,
            &start,
            &end,
            max_depth.unwrap_or(settings.max_depth),
        ),
        Commands::Analyze {
            schematic,
            start,
            end,
            design,
            max_depth,
        } => {
            let mut settings = settings;
            if let Some(depth) = max_depth {
                settings.max_depth = depth;
            }
            cmd_analyze(&out, settings, design, &schematic, &start, &end)
        }
        Commands::AnalyzeDeclared {
            schematic,
            flow_path,
            design,
        } => cmd_analyze_declared(&out, settings, design, &schematic, &flow_path),
        Commands::Restrictions {
            schematic,
            flow_rate,
        } => cmd_restrictions(&out, settings, flow_rate, &schematic),
        Commands::Impact {
            schematic,
            component,
        } => cmd_impact(&out, &schematic, &component),
        Commands::ComparePaths {
            schematic,
            start_a,
            end_a,
            start_b,
            end_b,
            design,
        } => cmd_compare_paths(
            &out,
            settings,
            design,
            &schematic,
            (start_a.as_str(), end_a.as_str()),
            (start_b.as_str(), end_b.as_str()),
        ),
        Commands::CompareCircuits {
            schematic_a,
            schematic_b,
            flow_rate,
        } => cmd_compare_circuits(&out, settings, flow_rate, &schematic_a, &schematic_b),
    }
}

fn load(path: &Path) -> AppResult<Schematic> {
    Ok(schematic_service::load_schematic(path)?.schematic)
}

fn design_point(ctx: &AnalysisContext, args: DesignArgs) -> AppResult<DesignPoint> {
    let defaults = ctx.default_design()?;
    DesignPoint::new(
        args.flow_rate.unwrap_or(defaults.flow_rate_lpm),
        args.pressure.unwrap_or(defaults.pressure_bar),
    )
}

fn cmd_validate(out: &Output, path: &Path) -> AppResult<()> {
    let loaded = schematic_service::load_schematic(path)?;
    out.emit(&loaded.warnings, |warnings| {
        println!("Validating schematic: {}", path.display());
        if warnings.is_empty() {
            println!("✓ Schematic is valid");
        } else {
            println!("✓ Schematic loaded with {} warning(s):", warnings.len());
            for warning in warnings {
                println!("  - {}", warning);
            }
        }
    })
}

fn cmd_summary(out: &Output, path: &Path) -> AppResult<()> {
    let schematic = load(path)?;
    let summary = schematic_service::summarize(&schematic);
    let fallback = path.display().to_string();
    let name = schematic.display_name(&fallback).to_string();
    out.emit(&summary, |s| print_summary(&name, s))
}

fn print_summary(name: &str, summary: &SchematicSummary) {
    println!("Schematic: {}", name);
    if let Some(revision) = &summary.metadata.revision {
        println!("  Revision: {}", revision);
    }
    println!("  Fingerprint: {}", summary.fingerprint);
    println!("  Components: {}", summary.component_count);
    println!("  Connections: {}", summary.connection_count);
    if !summary.components_by_type.is_empty() {
        println!("\nComponents by type:");
        for (tag, count) in &summary.components_by_type {
            println!("  {:<24} {}", tag, count);
        }
    }
    if !summary.flow_paths.is_empty() {
        println!("\nFlow paths ({}):", summary.flow_path_count);
        for p in &summary.flow_paths {
            println!(
                "  {} ({} components) {}",
                p.name, p.component_count, p.description
            );
        }
    }
    for note in &summary.notes {
        println!("Note: {}", note);
    }
}

fn cmd_path(out: &Output, path: &Path, start: &str, end: &str, max_depth: usize) -> AppResult<()> {
    let schematic = load(path)?;
    let result = analysis_service::find_flow_path(&schematic, start, end, max_depth)?;
    out.emit(&result, |result| match result {
        PathResult::Found(found) => {
            println!(
                "Path from {} to {} ({} components):",
                start,
                end,
                found.path_length()
            );
            println!("  {}", found.path.join(" → "));
            for detail in &found.path_details {
                let kind = detail
                    .component_type
                    .as_ref()
                    .map_or("(undeclared)", |k| k.as_str());
                println!("  {:>3}. {:<12} {}", detail.position, detail.component_id, kind);
            }
        }
        PathResult::NotFound(failure) => println!("✗ {}", failure),
    })
}

fn cmd_analyze(
    out: &Output,
    settings: AnalysisSettings,
    design: DesignArgs,
    path: &Path,
    start: &str,
    end: &str,
) -> AppResult<()> {
    let ctx = AnalysisContext::new(settings)?;
    let design = design_point(&ctx, design)?;
    let schematic = load(path)?;
    let analysis = analysis_service::analyze_flow_path(&ctx, &schematic, start, end, design)?;
    out.emit(&analysis, print_analysis)
}

fn cmd_analyze_declared(
    out: &Output,
    settings: AnalysisSettings,
    design: DesignArgs,
    path: &Path,
    flow_path: &str,
) -> AppResult<()> {
    let ctx = AnalysisContext::new(settings)?;
    let design = design_point(&ctx, design)?;
    let schematic = load(path)?;
    let analysis = analysis_service::analyze_declared_path(&ctx, &schematic, flow_path, design)?;
    out.emit(&analysis, print_analysis)
}

fn print_analysis(analysis: &PathAnalysis) {
    let result = &analysis.analysis;
    println!("Flow path: {}", analysis.path_name);
    println!("  {}", analysis.path.join(" → "));
    println!();
    println!("{}", result.analysis);

    if !result.component_pressure_drops.is_empty() {
        println!("\nPressure drop by component:");
        for drop in &result.component_pressure_drops {
            println!(
                "  {:<12} {:<22} {:>8.2} bar {:>9.1} psi {:>6.1}%",
                drop.component_id,
                drop.component_type.as_str(),
                drop.pressure_drop_bar,
                drop.pressure_drop_psi,
                drop.percent_of_total
            );
        }
    }

    if !result.restrictions.is_empty() {
        println!("\nRestrictions:");
        for r in &result.restrictions {
            println!(
                "  [{}] {} {}: {}",
                r.severity, r.component_id, r.restriction_type, r.details
            );
        }
    }
}

fn cmd_restrictions(
    out: &Output,
    settings: AnalysisSettings,
    flow_rate: Option<f64>,
    path: &Path,
) -> AppResult<()> {
    let flow_rate = flow_rate.unwrap_or(settings.flow_rate_lpm);
    let ctx = AnalysisContext::new(settings)?;
    let schematic = load(path)?;
    let restrictions = analysis_service::find_restrictions(&ctx, &schematic, flow_rate)?;
    out.emit(&restrictions, |r| print_restrictions(flow_rate, r))
}

fn print_restrictions(flow_rate: f64, restrictions: &[CircuitRestriction]) {
    if restrictions.is_empty() {
        println!("No restrictions found at {:.1} LPM", flow_rate);
        return;
    }
    println!(
        "Restrictions at {:.1} LPM ({} found):",
        flow_rate,
        restrictions.len()
    );
    for r in restrictions {
        println!("  [{}] {} {}", r.severity, r.component_id, r.restriction_type);
        println!("      {}", r.details);
        println!("      → {}", r.recommendation);
    }
}

fn cmd_impact(out: &Output, path: &Path, component: &str) -> AppResult<()> {
    let schematic = load(path)?;
    let impact = schematic_service::impact(&schematic, component)?;
    out.emit(&impact, print_impact)
}

fn print_impact(impact: &ComponentImpact) {
    let c = &impact.component;
    println!("Component {} ({})", c.id, c.kind);
    if !c.description.is_empty() {
        println!("  {}", c.description);
    }
    println!("\nUpstream ({}):", impact.total_upstream);
    for link in &impact.upstream_components {
        print_link(link);
    }
    println!("\nDownstream ({}):", impact.total_downstream);
    for link in &impact.downstream_components {
        print_link(link);
    }
}

fn print_link(link: &ImpactLink) {
    let kind = link
        .component
        .as_ref()
        .map_or("(undeclared)", |c| c.kind.as_str());
    let mut line = format!(
        "  {:<12} {:<22} {}",
        link.component_id, kind, link.connection_type
    );
    if let Some(size) = &link.line_size {
        line.push_str(&format!("  {}", size));
    }
    println!("{}", line);
}

fn cmd_compare_paths(
    out: &Output,
    settings: AnalysisSettings,
    design: DesignArgs,
    path: &Path,
    first: (&str, &str),
    second: (&str, &str),
) -> AppResult<()> {
    let ctx = AnalysisContext::new(settings)?;
    let design = design_point(&ctx, design)?;
    let schematic = load(path)?;
    let comparison =
        analysis_service::compare_flow_paths(&ctx, &schematic, first, second, design)?;
    out.emit(&comparison, print_path_comparison)
}

fn print_path_comparison(c: &PathComparison) {
    println!("Comparing {} vs {}", c.path1_name, c.path2_name);
    println!(
        "  Pressure drop: {:.2} bar vs {:.2} bar (better: {})",
        c.pressure_drop.path1, c.pressure_drop.path2, c.pressure_drop.better_path
    );
    println!(
        "  Efficiency:    {:.1}% vs {:.1}% (better: {})",
        c.efficiency.path1, c.efficiency.path2, c.efficiency.better_path
    );
    println!(
        "  Restrictions:  {} vs {} (better: {})",
        c.restrictions.path1, c.restrictions.path2, c.restrictions.better_path
    );
    println!();
    println!("{}", c.summary);
}

fn cmd_compare_circuits(
    out: &Output,
    settings: AnalysisSettings,
    flow_rate: Option<f64>,
    first: &Path,
    second: &Path,
) -> AppResult<()> {
    let flow_rate = flow_rate.unwrap_or(settings.flow_rate_lpm);
    let ctx = AnalysisContext::new(settings)?;
    let a = load(first)?;
    let b = load(second)?;
    let name_a = first.display().to_string();
    let name_b = second.display().to_string();
    let comparison = analysis_service::compare_circuits(
        &ctx,
        (a.display_name(&name_a), &a),
        (b.display_name(&name_b), &b),
        flow_rate,
    )?;
    out.emit(&comparison, print_circuit_comparison)
}

fn print_circuit_comparison(c: &CircuitComparison) {
    println!(
        "Comparing {} vs {} at {:.1} LPM",
        c.circuit1_name, c.circuit2_name, c.flow_rate_lpm
    );
    println!(
        "  Components:   {} vs {} ({} shared)",
        c.component_count_1,
        c.component_count_2,
        c.in_both.len()
    );
    if !c.only_in_1.is_empty() {
        println!("  Only in {}: {}", c.circuit1_name, c.only_in_1.join(", "));
    }
    if !c.only_in_2.is_empty() {
        println!("  Only in {}: {}", c.circuit2_name, c.only_in_2.join(", "));
    }
    println!(
        "  Restrictions: {} vs {}",
        c.restriction_count_1, c.restriction_count_2
    );
    println!();
    println!("{}", c.summary);
}

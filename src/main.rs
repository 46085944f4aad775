//! CabinetKit command line tool
//!
//! Generates a kitchen layout from a project file and writes the cutting
//! list and hardware tables.

use anyhow::{Context, Result};
use cabinetkit::{
    format_length, hardware_csv, init_logging, part_rows, parts_csv, BillOfMaterials,
    CabinetProjectConfig, GenerationReport, LayoutEngine,
};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser)]
#[command(name = "cabinetkit")]
#[command(about = "Kitchen cabinet layout and cutting list generator")]
#[command(version)]
struct Cli {
    /// Emit log events as JSON
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a layout and print a summary
    Generate {
        /// Project file (.toml or .json)
        config: PathBuf,

        /// Write the cutting list as CSV
        #[arg(long, value_name = "CSV")]
        parts: Option<PathBuf>,

        /// Write the hardware and cost table as CSV
        #[arg(long, value_name = "CSV")]
        bom: Option<PathBuf>,
    },

    /// Write a project file with every default filled in
    Init {
        /// Destination (.toml or .json)
        path: PathBuf,
    },

    /// Load a project file and report values that would be replaced
    Check {
        /// Project file (.toml or .json)
        config: PathBuf,
    },
}

fn load(path: &Path) -> Result<CabinetProjectConfig> {
    CabinetProjectConfig::load_from_file(path)
        .with_context(|| format!("Failed to load project file {}", path.display()))
}

fn print_summary(report: &GenerationReport) {
    for (subsystem, cabinets) in report.output.groups() {
        let total: f64 = cabinets.iter().map(|c| c.width).sum();
        println!("{} row ({})", subsystem, format_length(total));
        for cabinet in cabinets {
            println!(
                "  {:<44} x={:>8}  panels={:>3}",
                cabinet.name,
                format_length(cabinet.origin.x),
                cabinet.panel_count()
            );
        }
    }
    for warning in &report.warnings {
        println!("warning: {}", warning);
    }
    for failure in &report.failures {
        println!("error: {}", failure);
        if let Some(cause) = std::error::Error::source(failure) {
            println!("  caused by: {}", cause);
        }
    }
}

fn generate(config: &Path, parts: Option<&Path>, bom: Option<&Path>) -> Result<()> {
    let engine = LayoutEngine::new(load(config)?);
    let report = engine.generate();
    print_summary(&report);

    let materials = BillOfMaterials::from_output(
        &report.output,
        engine.door_system(),
        &engine.config().pricing,
    );
    println!(
        "{} cabinets, {} board types, {:.1} m edge banding, total {:.2}",
        materials.cabinet_count,
        materials.panels.len(),
        materials.edge_banding_m,
        materials.cost.total
    );

    if let Some(path) = parts {
        let csv = parts_csv(&part_rows(&report.output)).context("Failed to format cutting list")?;
        std::fs::write(path, csv)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!(path = %path.display(), "wrote cutting list");
    }
    if let Some(path) = bom {
        let csv = hardware_csv(&materials.lines(&engine.config().pricing))
            .context("Failed to format hardware table")?;
        std::fs::write(path, csv)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!(path = %path.display(), "wrote hardware table");
    }

    if !report.is_complete() {
        let failed = report.failed_subsystems();
        anyhow::bail!(
            "generation incomplete: {} failure(s), affected subsystems {:?}",
            report.failures.len(),
            failed
        );
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_json)?;

    match cli.command {
        Commands::Generate { config, parts, bom } => {
            generate(&config, parts.as_deref(), bom.as_deref())?
        }
        Commands::Init { path } => {
            CabinetProjectConfig::default()
                .save_to_file(&path)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("Wrote default project to {}", path.display());
        }
        Commands::Check { config } => {
            let mut project = load(&config)?;
            let issues = project.sanitize();
            if issues.is_empty() {
                println!("{}: ok", config.display());
            }
            for issue in &issues {
                println!("{}: {}", config.display(), issue);
            }
        }
    }

    Ok(())
}

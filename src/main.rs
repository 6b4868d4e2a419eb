//! woodcut-planner - CLI tool to plan cutting stock lengths of wood.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use woodcut_planner::config::DIAGRAM_WIDTH;
use woodcut_planner::generator::{create_arrangement_diagram, export_all, generate_summary};
use woodcut_planner::{calculate, load_pieces, load_settings, Strategy};

/// Calculate how to cut stock wood into the requested pieces with minimal waste.
#[derive(Parser, Debug)]
#[command(name = "woodcut-planner")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON file containing the list of required pieces
    pieces: PathBuf,

    /// JSON file containing wood types and settings
    settings: PathBuf,

    /// Placement strategy (longest-first, best-of-orderings)
    #[arg(short, long)]
    strategy: Option<String>,

    /// Override the saw blade width from the settings file
    #[arg(short, long)]
    kerf: Option<f64>,

    /// Print ASCII cutting diagrams
    #[arg(long)]
    diagram: bool,

    /// Print the result as JSON instead of a text report
    #[arg(long)]
    json: bool,

    /// Write CSV reports into this directory
    #[arg(short, long)]
    export_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let pieces = load_pieces(&args.pieces)
        .with_context(|| format!("Failed to load pieces from {}", args.pieces.display()))?;
    let mut settings = load_settings(&args.settings)
        .with_context(|| format!("Failed to load settings from {}", args.settings.display()))?;

    info!(
        "Loaded {} piece request(s) for {} material(s)",
        pieces.len(),
        settings.materials.len()
    );

    if let Some(name) = &args.strategy {
        settings.strategy = Strategy::from_name(name)
            .with_context(|| format!("Unknown strategy '{}'", name))?;
    }

    if let Some(kerf) = args.kerf {
        if kerf > 1.0 {
            warn!("Kerf width {} is unusually wide for a saw blade", kerf);
        }
        settings.kerf_width = kerf;
    }

    let result = calculate(&pieces, &settings).context("Calculation failed")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", generate_summary(&result, &settings));
    }

    if args.diagram {
        for arrangement in &result.arrangements {
            let Some(spec) = settings.material(&arrangement.material_type) else {
                continue;
            };
            println!(
                "{}",
                create_arrangement_diagram(
                    &arrangement.material_type,
                    &arrangement.units,
                    spec.unit_length,
                    DIAGRAM_WIDTH,
                )
            );
        }
    }

    if let Some(dir) = &args.export_dir {
        let written = export_all(&result, &pieces, &settings, dir)
            .with_context(|| format!("Failed to export reports to {}", dir.display()))?;
        info!("Exported {} report(s) to {}", written.len(), dir.display());
    }

    Ok(())
}

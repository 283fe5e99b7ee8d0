//! L-System Walker - CLI
//!
//! CLI commands:
//! - list: List presets and configured systems
//! - expand: Print the rewritten string
//! - generate: Traverse and export geometry as JSON

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use lsystem_walker::config::{Config, Settings};
use lsystem_walker::export::{write_json, GeometryDocument, TraceDocument};
use lsystem_walker::{logging, LSystem, Simulation, PRESETS};

#[derive(Parser)]
#[command(name = "lsystem_walker")]
#[command(about = "L-system fractal generation and turtle traversal")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to systems.yaml config
    #[arg(short, long, default_value = "systems.yaml")]
    config: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// List built-in presets and configured systems
    List,

    /// Print the string after rewriting
    Expand {
        /// Preset or configured system name
        #[arg(short, long)]
        system: String,

        /// Number of generations
        #[arg(short, long, default_value = "4")]
        iterations: usize,

        /// Refuse generations longer than this (defaults to LSYSTEM_MAX_SYMBOLS)
        #[arg(long)]
        max_symbols: Option<usize>,
    },

    /// Traverse the rewritten string and write its geometry as JSON
    Generate {
        /// Preset or configured system name
        #[arg(short, long)]
        system: String,

        /// Number of generations
        #[arg(short, long, default_value = "8")]
        iterations: usize,

        /// Output file (defaults to <LSYSTEM_OUTPUT_DIR>/<system>.json)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Export every generation from 0 to --iterations
        #[arg(long)]
        all_generations: bool,

        /// Refuse generations longer than this (defaults to LSYSTEM_MAX_SYMBOLS)
        #[arg(long)]
        max_symbols: Option<usize>,
    },
}

fn main() -> anyhow::Result<()> {
    let settings = Settings::load();

    // Initialize logging first
    let _guard = logging::init_logging(&settings.log_dir)?;
    tracing::info!("L-System Walker starting up");

    let cli = Cli::parse();
    tracing::debug!("CLI args parsed: config={:?}", cli.config);

    // Load config
    let config = if cli.config.exists() {
        tracing::info!("Loading config from {:?}", cli.config);
        Config::load(&cli.config)?
    } else {
        tracing::warn!("Config file not found: {:?}, using presets only", cli.config);
        Config::default()
    };
    tracing::info!("Config loaded: {} systems", config.systems.len());

    match cli.command {
        Commands::List => {
            list_systems(&config);
        }

        Commands::Expand {
            system,
            iterations,
            max_symbols,
        } => {
            let lsystem = config.resolve(&system)?;
            let mut sim = Simulation::new(lsystem);
            sim.iterate_capped(iterations, max_symbols.unwrap_or(settings.max_symbols))?;
            println!("{}", sim.current());
        }

        Commands::Generate {
            system,
            iterations,
            output,
            all_generations,
            max_symbols,
        } => {
            let lsystem = config.resolve(&system)?;
            let output = output.unwrap_or_else(|| {
                PathBuf::from(&settings.output_dir).join(format!("{}.json", system))
            });
            let limit = max_symbols.unwrap_or(settings.max_symbols);

            generate(&system, lsystem, iterations, limit, all_generations, &output)?;
        }
    }

    Ok(())
}

/// Rewrite, traverse and export one system
fn generate(
    name: &str,
    lsystem: LSystem,
    iterations: usize,
    max_symbols: usize,
    all_generations: bool,
    output: &Path,
) -> anyhow::Result<()> {
    let theta = lsystem.theta;
    let mut sim = Simulation::new(lsystem);

    if all_generations {
        // Check growth up front so tracing never builds an oversized string
        let mut probe = sim.clone();
        probe.iterate_capped(iterations, max_symbols)?;

        let frames = sim.trace(iterations)?;
        write_json(output, &TraceDocument::new(name, theta, &frames))?;
        println!("{} -> {:?} ({} generations)", name, output, frames.len());
    } else {
        sim.iterate_capped(iterations, max_symbols)?;
        let geometry = sim.traverse_axiom()?;
        let (segments, bounds) = (geometry.segment_count(), geometry.bounds);

        write_json(output, &GeometryDocument::new(name, &sim))?;
        println!(
            "{} -> {:?} ({} segments, bounds [{:.3}, {:.3}] - [{:.3}, {:.3}])",
            name, output, segments, bounds.min.x, bounds.min.y, bounds.max.x, bounds.max.y
        );
    }

    Ok(())
}

/// List presets, then configured systems
fn list_systems(config: &Config) {
    println!("Presets ({}):", PRESETS.len());
    for preset in PRESETS {
        println!(
            "  - {} [axiom {}] ({} rules, {:.1} deg)",
            preset.name,
            preset.axiom,
            preset.rules.len(),
            preset.theta.to_degrees()
        );
    }

    if config.systems.is_empty() {
        return;
    }

    println!();
    println!("Configured ({}):", config.systems.len());
    for system in &config.systems {
        println!(
            "  - {} [axiom {}] ({} rules, {:.1} deg)",
            system.name,
            system.axiom,
            system.rules.len(),
            system.angle_degrees
        );
    }
}

//! CLI entry point for the `gwalk` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use graphwalk::cli::commands;
use graphwalk::types::{
    GraphConfig, WalkError, DEFAULT_DENSITY_A, DEFAULT_DENSITY_B, DEFAULT_SEED,
};

#[derive(Parser)]
#[command(
    name = "gwalk",
    about = "graphwalk CLI — deterministic weighted graph with a step-by-step greedy walk"
)]
struct Cli {
    /// RNG seed
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Offset added to the base vertex count of 10
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    vertex_offset: i64,

    /// Density parameter a (each unit removes 0.01 from the factor)
    #[arg(long, default_value_t = DEFAULT_DENSITY_A)]
    density_a: u32,

    /// Density parameter b (each unit removes 0.005 from the factor)
    #[arg(long, default_value_t = DEFAULT_DENSITY_B)]
    density_b: u32,

    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Derived parameters and edge counts for the configuration
    Info,
    /// Print the adjacency and weight matrices
    Generate,
    /// Run the greedy walk step by step
    Walk {
        /// Stop after this many steps
        #[arg(long)]
        steps: Option<usize>,
        /// Wait for Enter between steps
        #[arg(long)]
        interactive: bool,
    },
    /// Write the graph as an SVG document
    Render {
        /// Output path
        #[arg(long)]
        out: PathBuf,
        /// Overlay the completed walk
        #[arg(long)]
        walk: bool,
        /// Only draw edges whose start index is at most this bound
        #[arg(long)]
        edge_start_limit: Option<usize>,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    if cli.verbose {
        // env_logger is only available in dev/test builds
        eprintln!("Verbose mode enabled");
    }

    let config = GraphConfig {
        seed: cli.seed,
        vertex_offset: cli.vertex_offset,
        density_a: cli.density_a,
        density_b: cli.density_b,
    };

    let result = match cli.command {
        Commands::Info => commands::cmd_info(config, json),
        Commands::Generate => commands::cmd_generate(config, json),
        Commands::Walk { steps, interactive } => {
            commands::cmd_walk(config, steps, interactive, json)
        }
        Commands::Render {
            out,
            walk,
            edge_start_limit,
        } => commands::cmd_render(config, &out, walk, edge_start_limit, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            WalkError::Io(_) => 1,
            WalkError::InvalidConfig(_) => 2,
            WalkError::NotSquare { .. }
            | WalkError::AsymmetricMatrix { .. }
            | WalkError::WeightWithoutEdge { .. } => 3,
            _ => 4,
        };
        process::exit(code);
    }
}

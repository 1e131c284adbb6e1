//! Random city generator
//!
//! Writes a shuffled city grid in the format the simulator reads.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use schelling::world::{generate_city, CityGenConfig};

/// Generate a random city grid
#[derive(Parser, Debug)]
#[command(name = "generate_city")]
#[command(about = "Generate a random city grid for the Schelling simulator")]
struct Args {
    /// Grid is size x size homes
    #[arg(long, default_value_t = 20)]
    size: usize,

    /// Percentage of homes left open
    #[arg(long, default_value_t = 10)]
    empty_percent: u32,

    /// Percentage of residents in the first group
    #[arg(long, default_value_t = 50)]
    group_a_percent: u32,

    /// Random seed for reproducible cities
    #[arg(long)]
    seed: Option<u64>,

    /// Output file (stdout when omitted)
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(rand::random);
    let config = CityGenConfig {
        size: args.size,
        empty_percent: args.empty_percent,
        group_a_percent: args.group_a_percent,
    };

    let grid = match generate_city(&config, seed) {
        Ok(grid) => grid,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    match &args.output {
        Some(path) => {
            if let Err(e) = std::fs::write(path, grid.to_string()) {
                eprintln!("Failed to write {}: {}", path.display(), e);
                return ExitCode::FAILURE;
            }
            tracing::info!("Wrote {}x{} city (seed {}) to {}", config.size, config.size, seed, path.display());
        }
        None => print!("{}", grid),
    }

    ExitCode::SUCCESS
}

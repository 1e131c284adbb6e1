//! Schelling - command line entry point
//!
//! Loads a city grid, runs the relocation simulation and prints the final
//! city with the number of relocations.
//!
//! ```text
//! schelling --grid-file tests/data/sample-writeup.txt --r 1 \
//!           --simil-threshold 0.44 --occup-threshold 0.5 --max-steps 1
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use schelling::core::error::Result;
use schelling::core::types::Alphabet;
use schelling::core::SimulationParams;
use schelling::simulation::Simulation;
use schelling::world::GridLoader;

/// Simulate Schelling's model of housing segregation
#[derive(Parser, Debug)]
#[command(name = "schelling")]
#[command(about = "Run a Schelling housing segregation simulation on a city grid")]
struct Args {
    /// City grid file
    #[arg(long)]
    grid_file: PathBuf,

    /// Neighborhood radius
    #[arg(long = "r")]
    radius: Option<usize>,

    /// Minimum ratio of similar neighbors to occupied homes
    #[arg(long)]
    simil_threshold: Option<f64>,

    /// Minimum ratio of occupied homes to all homes in a neighborhood
    #[arg(long)]
    occup_threshold: Option<f64>,

    /// Maximum number of passes over the city
    #[arg(long)]
    max_steps: Option<u64>,

    /// TOML file with default parameters; flags override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the final grid to this file
    #[arg(long)]
    output: Option<PathBuf>,

    /// Print the run report as JSON instead of a summary
    #[arg(long)]
    json: bool,

    /// Enable debug logging (every relocation)
    #[arg(long, short = 'v')]
    verbose: bool,
}

impl Args {
    fn params(&self) -> Result<SimulationParams> {
        let mut params = match &self.config {
            Some(path) => SimulationParams::load(path)?,
            None => SimulationParams::default(),
        };
        if let Some(radius) = self.radius {
            params.radius = radius;
        }
        if let Some(threshold) = self.simil_threshold {
            params.similarity_threshold = threshold;
        }
        if let Some(threshold) = self.occup_threshold {
            params.occupancy_threshold = threshold;
        }
        if let Some(max_steps) = self.max_steps {
            params.max_steps = max_steps;
        }
        params.validate()?;
        Ok(params)
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let params = args.params()?;
    let alphabet = Alphabet::default();
    let loader = GridLoader::new(alphabet);

    let mut grid = loader.load_from_file(&args.grid_file)?;
    let mut opens = grid.find_opens();
    tracing::info!(
        "Loaded {}x{} city from {} ({} open homes)",
        grid.size(),
        grid.size(),
        args.grid_file.display(),
        opens.len()
    );

    let report = Simulation::new(&mut grid, &mut opens, params).run();

    if args.json {
        println!("{}", report.to_json());
    } else {
        println!("{}", grid.size());
        print!("{}", grid.display(&alphabet));
        println!();
        println!("Number of relocations done: {}", report.total_relocations);
        println!("{}", report.summary());
    }

    if let Some(path) = &args.output {
        std::fs::write(path, grid.display(&alphabet).to_string())?;
        tracing::info!("Final grid written to {}", path.display());
    }

    Ok(())
}

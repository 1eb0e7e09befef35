// src/main.rs

use auraeon::utils::{logger, report};
use auraeon::{GenerationConfig, LatticeFamily, Result, Session};
use clap::Parser;
use log::{error, LevelFilter};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "auraeon")]
#[command(about = "Crystal lattice generation with vacancies, doping and bonds")]
#[command(version)]
struct Cli {
    /// Settings file (defaults to the saved user settings)
    config: Option<PathBuf>,

    /// Lattice family, e.g. simple_cubic_3d, bcc, hexagonal_2d
    #[arg(short, long)]
    family: Option<LatticeFamily>,

    /// Seed for vacancy and doping selection
    #[arg(short, long)]
    seed: Option<u64>,

    /// Write the effective settings back to the user config file
    #[arg(long)]
    save: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn run(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => GenerationConfig::load_from(path)?,
        None => GenerationConfig::load(),
    };
    if let Some(family) = cli.family {
        config.family = family;
    }
    if let Some(seed) = cli.seed {
        config.rng_seed = seed;
    }

    let session = Session::new(config)?;
    let snapshot = session.regenerate()?;
    print!("{}", report::structure_summary(&snapshot, &session.config));

    if cli.save {
        session.config.save()?;
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    logger::init(if cli.verbose { LevelFilter::Debug } else { LevelFilter::Info });

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

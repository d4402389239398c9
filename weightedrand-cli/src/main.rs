//! weightedrand CLI — pick and frequency commands over a weighted choice set.
//!
//! Commands:
//! - `pick` — print weighted random picks, one per line
//! - `frequency` — draw many times in parallel and report observed vs expected shares
//!
//! Choices come from a TOML file (`--config`) or a named preset (`--preset`).
//! Set `RUST_LOG=info` to see what was loaded and how draws were split.

mod config;
mod report;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use weightedrand_core::RngHierarchy;

use config::ChoiceFile;

#[derive(Parser)]
#[command(
    name = "weightedrand",
    about = "weightedrand CLI — fast weighted random selection"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args)]
struct Source {
    /// Path to a TOML choice file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Named preset: fruit.
    #[arg(long)]
    preset: Option<String>,

    /// Master seed. Overrides the file's seed; random when neither is given.
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print weighted random picks, one per line.
    Pick {
        #[command(flatten)]
        source: Source,

        /// Number of picks.
        #[arg(long, short = 'n', default_value_t = 1)]
        count: usize,
    },
    /// Draw many times and compare observed frequencies with the weights.
    Frequency {
        #[command(flatten)]
        source: Source,

        /// Total number of draws.
        #[arg(long, default_value_t = 1_000_000)]
        draws: u64,

        /// Parallel workers, each with its own generator. Defaults to the rayon pool size.
        #[arg(long)]
        workers: Option<u64>,

        /// Emit the report as JSON instead of a table.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Pick { source, count } => run_pick(source, count),
        Commands::Frequency {
            source,
            draws,
            workers,
            json,
        } => run_frequency_cmd(source, draws, workers, json),
    }
}

/// Resolve `--config` / `--preset` into a choice file and a seeded hierarchy.
fn load_source(source: Source) -> Result<(ChoiceFile, RngHierarchy)> {
    let file = match (source.config, source.preset) {
        (Some(_), Some(_)) => bail!("--config and --preset are mutually exclusive"),
        (None, None) => bail!("one of --config or --preset is required"),
        (Some(path), None) => ChoiceFile::load(&path)?,
        (None, Some(name)) => ChoiceFile::preset(&name)?,
    };

    let hierarchy = match source.seed.or(file.seed) {
        Some(seed) => RngHierarchy::new(seed),
        None => RngHierarchy::from_entropy(),
    };
    log::info!("master seed {}", hierarchy.master_seed());

    Ok((file, hierarchy))
}

/// Explicit `--workers`, or the rayon pool size when omitted.
fn resolve_workers(workers: Option<u64>) -> Result<u64> {
    match workers {
        Some(0) => bail!("--workers must be at least 1"),
        Some(n) => Ok(n),
        None => Ok(rayon::current_num_threads() as u64),
    }
}

fn run_pick(source: Source, count: usize) -> Result<()> {
    let (file, hierarchy) = load_source(source)?;
    let chooser = file.into_chooser().context("invalid choice set")?;

    let mut rng = hierarchy.rng_for("pick", 0);
    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for item in chooser.picks(&mut rng).take(count) {
        writeln!(out, "{item}")?;
    }
    out.flush()?;
    Ok(())
}

fn run_frequency_cmd(source: Source, draws: u64, workers: Option<u64>, json: bool) -> Result<()> {
    let (file, hierarchy) = load_source(source)?;
    let chooser = file.into_chooser().context("invalid choice set")?;

    let workers = resolve_workers(workers)?;
    let report = report::run_frequency(&chooser, draws, workers, hierarchy);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report.render_table());
    }
    Ok(())
}

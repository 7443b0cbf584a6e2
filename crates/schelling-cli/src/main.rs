//! `schelling`: run the segregation model from the command line.
//!
//! ```text
//! schelling --random --max-iterations 100 --seed 7 --render
//! schelling --params city.txt --output-dir out --snapshot-interval 5
//! schelling                      # prompts like the classic script
//! ```

mod prompt;

#[cfg(test)]
mod tests;

use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;

use schelling_core::{CityConfig, SimConfig, SimRng};
use schelling_output::{AsciiRenderer, CsvWriter, OutputWriter, SimOutputObserver, write_report};
use schelling_params::{load_params_file, random_params, write_params};
use schelling_sim::SimBuilder;

use prompt::{ParamSource, Prompter};

// ── Constants ─────────────────────────────────────────────────────────────────

const DEFAULT_MAX_ITERATIONS: u64 = 100;
/// Child stream for parameter generation, independent of the sim's own draws.
const PARAMS_STREAM:          u64 = 1;

// ── Arguments ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "schelling")]
#[command(about = "Schelling segregation model on a bounded grid")]
struct Args {
    /// Load the five parameters from a `key: value` file
    #[arg(long, value_name = "FILE", conflicts_with = "random")]
    params: Option<PathBuf>,

    /// Draw the parameters at random
    #[arg(long)]
    random: bool,

    /// Sweep budget (prompted for in interactive mode, else 100)
    #[arg(long)]
    max_iterations: Option<u64>,

    /// RNG seed (drawn from entropy and logged if absent)
    #[arg(long)]
    seed: Option<u64>,

    /// Write iteration summaries and grid snapshots here
    #[arg(long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Write `output.db` instead of CSV files
    #[arg(long, requires = "output_dir")]
    sqlite: bool,

    /// Snapshot the grid every K sweeps (0 disables)
    #[arg(long, value_name = "K", default_value_t = 1)]
    snapshot_interval: u64,

    /// Draw the grid after every sweep
    #[arg(long)]
    render: bool,

    /// Delay between rendered frames
    #[arg(long, value_name = "MS", default_value_t = 500)]
    pace_ms: u64,

    /// Print the summary as JSON instead of the text report
    #[arg(long)]
    json: bool,

    /// Save the parameters actually used, in parameter-file format
    #[arg(long, value_name = "FILE")]
    save_params: Option<PathBuf>,
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(SimRng::entropy_seed);
    tracing::info!(seed, "starting schelling");

    let mut prompter = Prompter::new(io::stdin().lock(), io::stdout());

    // 1. Parameters.
    let (source, interactive) = match (&args.params, args.random) {
        (Some(path), _) => (ParamSource::File(path.clone()), false),
        (None, true)    => (ParamSource::Random, false),
        (None, false)   => (prompter.param_source()?, true),
    };
    let city = acquire_params(&source, seed)?;
    if let Some(path) = &args.save_params {
        let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
        write_params(&city, file)?;
        tracing::info!(path = %path.display(), "parameters saved");
    }

    let max_iterations = match args.max_iterations {
        Some(n)             => n,
        None if interactive => prompter.max_iterations()?,
        None                => DEFAULT_MAX_ITERATIONS,
    };

    // 2. Build.
    let population = city.population();
    tracing::info!(
        width    = city.width,
        height   = city.height,
        agents   = population.occupied,
        vacant   = population.vacant,
        max_iterations,
        "building city"
    );
    let mut sim = SimBuilder::new(city, SimConfig { max_iterations, seed }).build()?;

    // 3. Observers.
    let renderer = args
        .render
        .then(|| AsciiRenderer::new(io::stdout()).with_pace(Duration::from_millis(args.pace_ms)));
    let output = match &args.output_dir {
        Some(dir) => Some(SimOutputObserver::new(open_writer(dir, args.sqlite)?, args.snapshot_interval)),
        None => None,
    };
    let mut observer = (renderer, output);

    // 4. Run.
    let t0 = Instant::now();
    let summary = sim.run(&mut observer)?;
    tracing::info!(elapsed_ms = t0.elapsed().as_millis() as u64, "run complete");

    let (renderer, output) = &mut observer;
    if let Some(e) = renderer.as_mut().and_then(AsciiRenderer::take_error) {
        tracing::error!(error = %e, "rendering failed");
    }
    if let Some(e) = output.as_mut().and_then(SimOutputObserver::take_error) {
        return Err(e).context("writing simulation output");
    }

    // 5. Report.
    let mut stdout = io::stdout().lock();
    if args.json {
        serde_json::to_writer_pretty(&mut stdout, &summary)?;
        writeln!(stdout)?;
    } else {
        write_report(&summary, &mut stdout)?;
    }
    Ok(())
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn acquire_params(source: &ParamSource, seed: u64) -> Result<CityConfig> {
    match source {
        ParamSource::File(path) => load_params_file(path)
            .with_context(|| format!("loading parameters from {}", path.display())),
        ParamSource::Random => {
            let city = random_params(&mut SimRng::new(seed).child(PARAMS_STREAM));
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "Randomly generated parameters:")?;
            write_params(&city, &mut stdout)?;
            Ok(city)
        }
    }
}

fn open_writer(dir: &Path, sqlite: bool) -> Result<Box<dyn OutputWriter>> {
    if sqlite {
        #[cfg(feature = "sqlite")]
        return Ok(Box::new(schelling_output::SqliteWriter::new(dir)?));

        #[cfg(not(feature = "sqlite"))]
        anyhow::bail!("--sqlite needs a build with the `sqlite` feature");
    }
    Ok(Box::new(CsvWriter::new(dir)?))
}

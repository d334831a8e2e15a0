//! tspgen library crate
//!
//! Core of the `tspgen` CLI, which writes randomized 3-D point sets for
//! exercising travelling-salesman solvers. A run is a straight pipeline:
//!
//! 1. `config` resolves the command-line flags into a `RunConfig`.
//! 2. `size` picks how many points to draw.
//! 3. `sample` draws them into a duplicate-free set.
//! 4. `emit` writes the set to `input.txt`.
//! 5. `runlog` appends a marker line to `log.txt`.
//!
//! The binary `src/main.rs` calls `tspgen_lib::run()`.

pub mod config;
pub mod emit;
pub mod error;
pub mod runlog;
pub mod sample;
pub mod size;

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::{
    DEFAULT_FIXED_SIZE, DEFAULT_MAX_COORD, DEFAULT_MAX_SIZE, RunConfig, default_out_dir,
};
use crate::error::GenError;

/// Command-line flags. Keep `main.rs` thin.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Write a random 3-D point set to input.txt for TSP solver testing.",
    long_about = None
)]
struct Cli {
    /// Maximum coordinate value. Default: 10000
    #[arg(long = "max_coord", default_value_t = DEFAULT_MAX_COORD, allow_negative_numbers = true)]
    max_coord: i64,

    /// Maximum number of points. Default: 5000
    #[arg(long = "max_size", default_value_t = DEFAULT_MAX_SIZE, allow_negative_numbers = true)]
    max_size: i64,

    /// Fixed number of points. Default: 0 (disabled)
    #[arg(long = "fixed_size", default_value_t = DEFAULT_FIXED_SIZE, allow_negative_numbers = true)]
    fixed_size: i64,

    /// Directory for input.txt and log.txt (default: next to the executable)
    #[arg(long = "out-dir")]
    out_dir: Option<PathBuf>,

    /// Seed the random source for a reproducible point set
    #[arg(long = "seed")]
    seed: Option<u64>,

    /// Do not print the summary line to stderr
    #[arg(short = 'q', long = "quiet", action = ArgAction::SetTrue)]
    quiet: bool,
}

impl Cli {
    fn into_config(self) -> Result<RunConfig, GenError> {
        let mut cfg = RunConfig::resolve(self.max_coord, self.max_size, self.fixed_size)?;
        cfg.out_dir = self.out_dir.unwrap_or_else(default_out_dir);
        cfg.seed = self.seed;
        Ok(cfg)
    }
}

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Number of draws made.
    pub requested: u64,
    /// Points written after deduplication; `<= requested`.
    pub emitted: usize,
    pub input_path: PathBuf,
    pub log_path: PathBuf,
}

/// Build the shared random source for `cfg`.
pub fn rng_for(cfg: &RunConfig) -> StdRng {
    match cfg.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Run the pipeline once: pick a size, sample, write `input.txt`, then log.
///
/// `rng` is shared by the size picker and the sampler, in that order.
///
/// # Errors
/// `GenError::Io` if either output file cannot be written. The log is only
/// touched after `input.txt` has been written successfully.
pub fn generate<R: Rng + ?Sized>(cfg: &RunConfig, rng: &mut R) -> Result<Report, GenError> {
    let requested = size::pick_size(cfg, rng);
    let (low, high) = cfg.coord_bounds();
    let set = sample::sample_coordinates(requested, low, high, rng);
    let input_path = emit::write_input(&cfg.out_dir, &set)?;
    let log_path = runlog::append_run_marker(&cfg.out_dir)?;
    Ok(Report {
        requested,
        emitted: set.len(),
        input_path,
        log_path,
    })
}

/// Run the tspgen CLI.
///
/// Malformed flags are reported by clap, which exits with status 2. Any
/// other failure prints `error: ...` to stderr and exits with status 1.
///
/// ```no_run
/// tspgen_lib::run(); // called from src/main.rs
/// ```
pub fn run() {
    let cli = Cli::parse();
    let quiet = cli.quiet;
    let result = cli.into_config().and_then(|cfg| {
        let mut rng = rng_for(&cfg);
        generate(&cfg, &mut rng)
    });

    match result {
        Ok(report) => {
            if !quiet {
                eprintln!(
                    "info: wrote {} of {} requested points to {}",
                    report.emitted,
                    report.requested,
                    report.input_path.display()
                );
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}

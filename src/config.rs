//! Resolution of raw command-line values into a validated run configuration.
//!
//! Signs carry no meaning for any flag: every value is replaced by its
//! absolute value before use. The coordinate ceiling is then clamped so the
//! sampling range always holds at least two values.

use std::env;
use std::path::PathBuf;

use crate::error::GenError;

/// Lowest value any coordinate axis can take.
pub const MIN_COORD: u64 = 1000;
/// Lower bound of the random point-count range.
pub const MIN_INPUTS: u64 = 10;

pub const DEFAULT_MAX_COORD: i64 = 10_000;
pub const DEFAULT_MAX_SIZE: i64 = 5000;
pub const DEFAULT_FIXED_SIZE: i64 = 0;

/// Immutable configuration for a single run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Inclusive coordinate ceiling, always `>= MIN_COORD + 1`.
    pub max_coord: u64,
    /// Inclusive ceiling of the random point count.
    pub max_size: u64,
    /// Exact draw count; `0` selects a random count.
    pub fixed_size: u64,
    /// Directory receiving `input.txt` and `log.txt`.
    pub out_dir: PathBuf,
    /// Seed for the shared random source; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl RunConfig {
    /// Build a configuration from the three numeric flags.
    ///
    /// The output directory defaults to `.` and no seed is set; callers
    /// override both through the public fields.
    ///
    /// # Errors
    /// `InvalidArgument` when random sizing is selected (`fixed_size == 0`)
    /// but `|max_size|` is below `MIN_INPUTS`, which leaves no count to pick.
    pub fn resolve(max_coord: i64, max_size: i64, fixed_size: i64) -> Result<Self, GenError> {
        let max_coord = max_coord.unsigned_abs().max(MIN_COORD + 1);
        let max_size = max_size.unsigned_abs();
        let fixed_size = fixed_size.unsigned_abs();

        if fixed_size == 0 && max_size < MIN_INPUTS {
            return Err(GenError::InvalidArgument {
                flag: "max_size",
                reason: format!(
                    "random sizing needs at least {MIN_INPUTS} points, got {max_size}"
                ),
            });
        }

        Ok(Self {
            max_coord,
            max_size,
            fixed_size,
            out_dir: PathBuf::from("."),
            seed: None,
        })
    }

    /// Inclusive `(low, high)` bounds of every coordinate axis.
    pub fn coord_bounds(&self) -> (u64, u64) {
        (MIN_COORD, self.max_coord)
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            max_coord: DEFAULT_MAX_COORD.unsigned_abs(),
            max_size: DEFAULT_MAX_SIZE.unsigned_abs(),
            fixed_size: DEFAULT_FIXED_SIZE.unsigned_abs(),
            out_dir: PathBuf::from("."),
            seed: None,
        }
    }
}

/// Directory containing the running executable.
///
/// Falls back to the working directory when the executable path cannot be
/// determined.
pub fn default_out_dir() -> PathBuf {
    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|p| p.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."))
}

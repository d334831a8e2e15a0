//! Append-only audit log of generator runs.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::GenError;

pub const LOG_FILE_NAME: &str = "log.txt";

/// Line appended once per successful run. The trailing space is part of the
/// format existing logs already contain.
pub const LOG_LINE: &str = "New Set Generated \n";

/// Append `LOG_LINE` to `dir/log.txt`, creating the file if needed.
///
/// Existing content is never truncated or rewritten.
pub fn append_run_marker(dir: &Path) -> Result<PathBuf, GenError> {
    let path = dir.join(LOG_FILE_NAME);
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(|e| GenError::io(&path, e))?;
    file.write_all(LOG_LINE.as_bytes())
        .map_err(|e| GenError::io(&path, e))?;
    Ok(path)
}

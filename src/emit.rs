//! Serialization of a coordinate set to `input.txt`.
//!
//! Format: the first line is the number of points, followed by one
//! `x y z` line per point. Every line ends with `\n`. Point order follows the
//! set's iteration order and is not stable between runs.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::GenError;
use crate::sample::CoordinateSet;

/// File name of the generated point set.
pub const INPUT_FILE_NAME: &str = "input.txt";

/// Render `set` in the `input.txt` format.
pub fn render(set: &CoordinateSet) -> String {
    let mut out = format!("{}\n", set.len());
    for c in set {
        out.push_str(&c.to_string());
        out.push('\n');
    }
    out
}

/// Write `set` to `dir/input.txt`, replacing any previous file.
///
/// Returns the path written.
///
/// # Errors
/// `GenError::Io` when the file cannot be created, written or flushed.
pub fn write_input(dir: &Path, set: &CoordinateSet) -> Result<PathBuf, GenError> {
    let path = dir.join(INPUT_FILE_NAME);
    let file = File::create(&path).map_err(|e| GenError::io(&path, e))?;
    let mut w = BufWriter::new(file);
    write_set(&mut w, set).map_err(|e| GenError::io(&path, e))?;
    w.flush().map_err(|e| GenError::io(&path, e))?;
    Ok(path)
}

fn write_set<W: Write>(w: &mut W, set: &CoordinateSet) -> std::io::Result<()> {
    writeln!(w, "{}", set.len())?;
    for c in set {
        writeln!(w, "{c}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::Coordinate;
    use std::fs;

    fn two_points() -> CoordinateSet {
        [Coordinate::new(1000, 1001, 1002), Coordinate::new(5, 6, 7)]
            .into_iter()
            .collect()
    }

    #[test]
    fn render_counts_then_points() {
        let text = render(&two_points());
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("2"));
        let mut rest: Vec<&str> = lines.collect();
        rest.sort_unstable();
        assert_eq!(rest, vec!["1000 1001 1002", "5 6 7"]);
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn render_empty_set() {
        assert_eq!(render(&CoordinateSet::new()), "0\n");
    }

    #[test]
    fn write_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(INPUT_FILE_NAME), "stale\nstale\nstale\nstale\n").unwrap();

        let set = two_points();
        let path = write_input(dir.path(), &set).unwrap();
        assert_eq!(path, dir.path().join(INPUT_FILE_NAME));

        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 3);
        assert!(!text.contains("stale"));
        assert_eq!(text.len(), render(&set).len());
    }

    #[test]
    fn missing_dir_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        let err = write_input(&missing, &two_points()).unwrap_err();
        assert!(matches!(err, GenError::Io { .. }));
    }
}

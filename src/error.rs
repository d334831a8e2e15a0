//! Error taxonomy for a generator run.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Everything that can stop a run.
///
/// Malformed flag text never reaches this type: clap rejects it while parsing
/// and exits on its own. `InvalidArgument` covers flags that parse but cannot
/// be honoured.
#[derive(Debug)]
pub enum GenError {
    /// A flag parsed as an integer but describes an unusable configuration.
    InvalidArgument { flag: &'static str, reason: String },
    /// Opening, writing or flushing one of the output files failed.
    Io { path: PathBuf, source: io::Error },
}

impl GenError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl fmt::Display for GenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument { flag, reason } => {
                write!(f, "invalid value for --{flag}: {reason}")
            }
            Self::Io { path, source } => write!(f, "{}: {source}", path.display()),
        }
    }
}

impl std::error::Error for GenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidArgument { .. } => None,
            Self::Io { source, .. } => Some(source),
        }
    }
}

//! Error types for annotation scanning.

use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::path::PathBuf;

/// Result alias for scanner operations.
pub type Result<T> = std::result::Result<T, ScanError>;

/// Errors raised while building the service index.
#[derive(Debug)]
pub enum ScanError {
    /// The implementation root does not exist on disk.
    RootMissing {
        /// Missing root path.
        path: PathBuf,
    },
    /// Failed to read a candidate source file.
    ReadSource {
        /// Source file path.
        path: PathBuf,
        /// IO error.
        source: std::io::Error,
    },
    /// The annotation pattern failed to compile.
    PatternInvalid {
        /// Offending pattern.
        pattern: String,
        /// Underlying regex error.
        source: regex::Error,
    },
}

impl Display for ScanError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::RootMissing { .. } => formatter.write_str("implementation root missing"),
            Self::ReadSource { .. } => formatter.write_str("failed to read source file"),
            Self::PatternInvalid { .. } => {
                formatter.write_str("annotation pattern failed to compile")
            }
        }
    }
}

impl Error for ScanError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::RootMissing { .. } => None,
            Self::ReadSource { source, .. } => Some(source),
            Self::PatternInvalid { source, .. } => Some(source),
        }
    }
}

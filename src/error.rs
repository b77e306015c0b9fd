//! extract FASTA ranges and find NGG guides with pCas9 cloning oligos
//!
//! Error types shared by the range extractor and the guide scanner.

use thiserror::Error;

use std::path::PathBuf;

/// Every failure the library can report.
///
/// Usage errors never reach this type: `clap` prints the usage message and
/// exits before any of the library code runs.
#[derive(Debug, Error)]
pub enum GuidexError {
    /// Opening, reading or writing a file failed.
    #[error("ERROR: I/O failure on {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// I/O failure on a stream with no path attached (stdout, in-memory readers).
    #[error("ERROR: I/O failure: {0}")]
    Stream(#[from] std::io::Error),

    /// Malformed input: FASTA/2bit structure or region text.
    #[error("ERROR: parse error: {0}")]
    Parse(String),

    /// Coordinates outside `1 <= start <= end <= len`.
    #[error("ERROR: invalid range {start}-{end} for sequence of length {len}")]
    InvalidRange { start: usize, end: usize, len: usize },
}

impl GuidexError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GuidexError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, GuidexError>;

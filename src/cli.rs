//! extract FASTA ranges and find NGG guides with pCas9 cloning oligos
//!
//! Command-line arguments for the `extract-range` and `find-guides` binaries.

use crate::{consts::DEFAULT_SEQUENCE, range::CoordinateRange};

use clap::{Parser, ValueEnum};
use log::Level;

use std::{fmt, path::PathBuf, str::FromStr};

/// Slice a 1-based inclusive range out of a single-record FASTA file
#[derive(Parser, Debug)]
#[command(
    name = "extract-range",
    version = env!("CARGO_PKG_VERSION"),
    long_about = None
)]
pub struct ExtractArgs {
    /// Path to a single-record sequence file (.fa, .fa.gz, or .2bit)
    pub fasta: PathBuf,

    /// First base to keep (1-based, inclusive)
    pub start: usize,

    /// Last base to keep (1-based, inclusive)
    pub end: usize,

    /// Output FASTA file (gzipped if it ends in .gz); stdout when omitted
    pub output: Option<PathBuf>,

    /// How to treat ranges falling outside the sequence
    #[arg(short = 'P', long, value_enum, default_value = "strict")]
    pub policy: RangePolicy,

    /// Logging verbosity level
    #[arg(short = 'L', long, default_value = "info")]
    pub level: Level,
}

/// Formats the ExtractArgs struct as a comma-separated string of key=value pairs.
impl fmt::Display for ExtractArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "fasta={}, start={}, end={}, output={}, policy={:?}, level={}",
            self.fasta.display(),
            self.start,
            self.end,
            self.output
                .as_ref()
                .map_or_else(|| "stdout".to_string(), |p| p.display().to_string()),
            self.policy,
            self.level,
        )
    }
}

/// Find NGG-adjacent guides in sequence regions and print pCas9 cloning oligos
#[derive(Parser, Debug)]
#[command(
    name = "find-guides",
    version = env!("CARGO_PKG_VERSION"),
    long_about = None
)]
pub struct GuideArgs {
    /// Path to the sequence file; header lines are skipped and the rest joined
    #[arg(short = 's', long, default_value = DEFAULT_SEQUENCE)]
    pub sequence: PathBuf,

    /// Region to scan as START-END (1-based, inclusive); repeat for several.
    /// Defaults to the lacZα regions 238-395, 396-452 and 455-682
    #[arg(short = 'r', long = "region", value_name = "START-END")]
    pub regions: Vec<CoordinateRange>,

    /// Write the report to this file instead of stdout
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// How to treat regions falling outside the sequence
    #[arg(short = 'P', long, value_enum, default_value = "strict")]
    pub policy: RangePolicy,

    /// Logging verbosity level
    #[arg(short = 'L', long, default_value = "info")]
    pub level: Level,
}

/// Formats the GuideArgs struct as a comma-separated string of key=value pairs.
impl fmt::Display for GuideArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let regions = self
            .regions
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",");

        write!(
            f,
            "sequence={}, regions=[{}], output={}, policy={:?}, level={}",
            self.sequence.display(),
            regions,
            self.output
                .as_ref()
                .map_or_else(|| "stdout".to_string(), |p| p.display().to_string()),
            self.policy,
            self.level,
        )
    }
}

/// What to do with coordinates outside `1 <= start <= end <= len`.
///
/// # Variants
///
/// - `Strict`: reject the range with an error
/// - `Clamp`: pull both bounds into the sequence; an inverted range is empty
///
/// # Example
///
/// ```rust,ignore
/// use guidex::RangePolicy;
/// use std::str::FromStr;
///
/// assert_eq!(RangePolicy::from_str("clamp"), Ok(RangePolicy::Clamp));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum RangePolicy {
    #[default]
    Strict,
    Clamp,
}

impl FromStr for RangePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "strict" => Ok(RangePolicy::Strict),
            "clamp" => Ok(RangePolicy::Clamp),
            _ => Err(format!("ERROR: Invalid range policy: {}", s)),
        }
    }
}

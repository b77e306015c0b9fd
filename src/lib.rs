//! extract FASTA ranges and find NGG guides with pCas9 cloning oligos
//!
//! Two small tools for preparing CRISPR guide cloning constructs:
//! `extract-range` slices a 1-based inclusive range out of a single-record
//! sequence file (.fa, .fa.gz, .2bit) into a renamed FASTA record, and
//! `find-guides` scans sequence regions for 20-nt guides followed by an NGG
//! PAM, printing the pCas9 forward/reverse cloning oligos of every hit.
//!
//! # Usage
//!
//! ```bash
//! Usage: extract-range [OPTIONS] <FASTA> <START> <END> [OUTPUT]
//!
//! Arguments:
//!   <FASTA>   Path to a single-record sequence file (.fa, .fa.gz, or .2bit)
//!   <START>   First base to keep (1-based, inclusive)
//!   <END>     Last base to keep (1-based, inclusive)
//!   [OUTPUT]  Output FASTA file (gzipped if it ends in .gz); stdout when omitted
//!
//! Options:
//!   -P, --policy <POLICY>  How to treat ranges falling outside the sequence [default: strict] [possible values: strict, clamp]
//!   -L, --level <LEVEL>    Logging verbosity level [default: info]
//!   -h, --help             Print help
//!   -V, --version          Print version
//!
//! Usage: find-guides [OPTIONS]
//!
//! Options:
//!   -s, --sequence <SEQUENCE>    Path to the sequence file; header lines are skipped and the rest joined [default: sequence.fasta]
//!   -r, --region <START-END>     Region to scan as START-END (1-based, inclusive); repeat for several
//!   -o, --output <OUTPUT>        Write the report to this file instead of stdout
//!   -P, --policy <POLICY>        How to treat regions falling outside the sequence [default: strict] [possible values: strict, clamp]
//!   -L, --level <LEVEL>          Logging verbosity level [default: info]
//!   -h, --help                   Print help
//!   -V, --version                Print version
//! ```

pub mod cli;
pub mod consts;
pub mod core;
pub mod error;
pub mod guides;
pub mod io;
pub mod range;

pub use cli::{ExtractArgs, GuideArgs, RangePolicy};
pub use crate::core::{ScanConfig, extract_range, run_scan, scan_guides};
pub use error::{GuidexError, Result};
pub use guides::{
    GuideMatch, OligoPair, find_guides, find_guides_in_regions, forward_oligo, reverse_complement,
    reverse_oligo, scan_region,
};
pub use range::{CoordinateRange, SequenceRecord, extract};

//! extract FASTA ranges and find NGG guides with pCas9 cloning oligos
//!
//! Fixed motif lengths, oligo adapters and scanner defaults.

/// Protospacer length preceding the PAM.
pub const GUIDE_LEN: usize = 20;

/// PAM length ("NGG").
pub const PAM_LEN: usize = 3;

/// Full window examined at every offset: guide + PAM.
pub const WINDOW_LEN: usize = GUIDE_LEN + PAM_LEN;

/// The last two PAM bases; the first one is unconstrained.
pub const PAM_SUFFIX: &[u8] = b"GG";

// pCas9 cloning overhangs
pub const FORWARD_PREFIX: &[u8] = b"AAAC";
pub const FORWARD_SUFFIX: &[u8] = b"G";
pub const REVERSE_SUFFIX: &[u8] = b"CAAA";

/// Sequence file read by `find-guides` when `--sequence` is omitted.
pub const DEFAULT_SEQUENCE: &str = "sequence.fasta";

/// lacZα regions (MCS included) scanned when no `--region` is given.
pub const DEFAULT_REGIONS: [(usize, usize); 3] = [(238, 395), (396, 452), (455, 682)];

pub const REPORT_BANNER: &str = "All NGG sites in specified regions with pCas9-compatible oligos:";

//! extract FASTA ranges and find NGG guides with pCas9 cloning oligos
//!
//! NGG guide scanning and pCas9 oligo assembly.

use crate::{
    cli::RangePolicy,
    consts::{
        FORWARD_PREFIX, FORWARD_SUFFIX, GUIDE_LEN, PAM_SUFFIX, REVERSE_SUFFIX, WINDOW_LEN,
    },
    error::Result,
    range::CoordinateRange,
};

use log::{debug, warn};

use std::fmt;

/// A 20-nt protospacer followed by an NGG PAM.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuideMatch {
    pub guide: Vec<u8>,
    pub pam: Vec<u8>,
    /// 1-based coordinate of the first guide base in the scanned sequence.
    pub position: usize,
}

impl GuideMatch {
    /// 1-based coordinate of the last guide base.
    pub fn end(&self) -> usize {
        self.position + self.guide.len() - 1
    }

    pub fn oligos(&self) -> OligoPair {
        OligoPair::from_guide(&self.guide)
    }
}

/// Formats the match as `Position {start}-{end}: {guide} PAM={pam}`.
impl fmt::Display for GuideMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Position {}-{}: {} PAM={}",
            self.position,
            self.end(),
            String::from_utf8_lossy(&self.guide),
            String::from_utf8_lossy(&self.pam)
        )
    }
}

/// Forward and reverse cloning oligos for a single guide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OligoPair {
    pub forward: Vec<u8>,
    pub reverse: Vec<u8>,
}

impl OligoPair {
    pub fn from_guide(guide: &[u8]) -> Self {
        Self {
            forward: forward_oligo(guide),
            reverse: reverse_oligo(guide),
        }
    }
}

/// Scans `range` of `sequence` for NGG guides.
///
/// # Example
///
/// ```rust,ignore
/// use guidex::{CoordinateRange, RangePolicy, find_guides};
///
/// let seq = b"AAAAAAAAAAAAAAAAAAAATGG";
/// let hits = find_guides(seq, CoordinateRange::new(1, 23), RangePolicy::Strict).unwrap();
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].position, 1);
/// ```
pub fn find_guides(
    sequence: &[u8],
    range: CoordinateRange,
    policy: RangePolicy,
) -> Result<Vec<GuideMatch>> {
    let slice = range.resolve(sequence.len(), policy)?;
    let first = slice.start + 1;
    let hits = scan_region(&sequence[slice], first);

    debug!("Found {} guides in region {}", hits.len(), range);

    Ok(hits)
}

/// Scans every range independently and concatenates the hits in range order.
///
/// Overlapping ranges report the shared guides once per range.
pub fn find_guides_in_regions(
    sequence: &[u8],
    ranges: &[CoordinateRange],
    policy: RangePolicy,
) -> Result<Vec<GuideMatch>> {
    let mut acc = Vec::new();

    for range in ranges {
        acc.extend(find_guides(sequence, *range, policy)?);
    }

    Ok(acc)
}

/// Examines every full guide+PAM window of `region`, left to right.
///
/// `first_position` is the 1-based coordinate of `region[0]` in the original
/// sequence. The final full window (offset `len - 23`) is included, so a
/// region of exactly 23 bases is checked once. Regions shorter than one window
/// produce nothing.
pub fn scan_region(region: &[u8], first_position: usize) -> Vec<GuideMatch> {
    region
        .windows(WINDOW_LEN)
        .enumerate()
        .filter(|(_, window)| window[GUIDE_LEN + 1..] == *PAM_SUFFIX)
        .map(|(offset, window)| GuideMatch {
            guide: window[..GUIDE_LEN].to_vec(),
            pam: window[GUIDE_LEN..].to_vec(),
            position: first_position + offset,
        })
        .collect()
}

/// `AAAC` + guide + `G`. The guide is not validated.
pub fn forward_oligo(guide: &[u8]) -> Vec<u8> {
    let mut oligo = Vec::with_capacity(FORWARD_PREFIX.len() + guide.len() + FORWARD_SUFFIX.len());
    oligo.extend_from_slice(FORWARD_PREFIX);
    oligo.extend_from_slice(guide);
    oligo.extend_from_slice(FORWARD_SUFFIX);
    oligo
}

/// Reverse complement of the guide + `CAAA`.
pub fn reverse_oligo(guide: &[u8]) -> Vec<u8> {
    if guide.iter().any(|&b| !is_unambiguous_dna_base(b)) {
        warn!(
            "WARN: guide {} has non-ACGT bases, passing them through uncomplemented",
            String::from_utf8_lossy(guide)
        );
    }

    let mut oligo = reverse_complement(guide);
    oligo.extend_from_slice(REVERSE_SUFFIX);
    oligo
}

/// Complements A/T and C/G and reverses the order.
///
/// Anything outside `ACGT` is copied through unchanged, so the transform is its
/// own inverse for every input.
pub fn reverse_complement(seq: &[u8]) -> Vec<u8> {
    seq.iter().rev().map(|&b| complement(b)).collect()
}

fn complement(base: u8) -> u8 {
    match base {
        b'A' => b'T',
        b'C' => b'G',
        b'G' => b'C',
        b'T' => b'A',
        other => other,
    }
}

fn is_unambiguous_dna_base(b: u8) -> bool {
    matches!(b, b'A' | b'C' | b'G' | b'T')
}

//! extract FASTA ranges and find NGG guides with pCas9 cloning oligos
//!
//! Sequence records, 1-based coordinate ranges and range extraction.

use crate::{
    cli::RangePolicy,
    error::{GuidexError, Result},
};

use std::{fmt, ops::Range, str::FromStr};

/// A single named nucleotide sequence.
///
/// # Example
///
/// ```rust,ignore
/// use guidex::SequenceRecord;
///
/// let record = SequenceRecord::new("seq1", b"ACGTACGTAC".to_vec());
/// assert_eq!(record.len(), 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceRecord {
    pub id: String,
    pub sequence: Vec<u8>,
}

impl SequenceRecord {
    pub fn new(id: impl Into<String>, sequence: Vec<u8>) -> Self {
        Self {
            id: id.into(),
            sequence,
        }
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}

/// Formats the record as a two-line FASTA entry without the trailing newline.
impl fmt::Display for SequenceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            ">{}\n{}",
            self.id,
            String::from_utf8_lossy(&self.sequence)
        )
    }
}

/// A 1-based, inclusive coordinate pair.
///
/// Values are stored as supplied; nothing is checked until the range is
/// resolved against a concrete sequence with [`CoordinateRange::resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoordinateRange {
    pub start: usize,
    pub end: usize,
}

impl CoordinateRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Number of bases covered when the range is well-formed.
    pub fn span(&self) -> usize {
        if self.start == 0 || self.start > self.end {
            0
        } else {
            self.end - self.start + 1
        }
    }

    /// True when `1 <= start <= end <= len`, i.e. no clamping is needed.
    pub fn fits(&self, len: usize) -> bool {
        self.start >= 1 && self.start <= self.end && self.end <= len
    }

    /// Maps the range onto a 0-based half-open slice range for a sequence of
    /// length `len`.
    ///
    /// Under [`RangePolicy::Strict`] any violation of `1 <= start <= end <= len`
    /// is an [`GuidexError::InvalidRange`]. Under [`RangePolicy::Clamp`] both
    /// bounds are pulled into the sequence and an inverted range collapses to
    /// an empty slice.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use guidex::{CoordinateRange, RangePolicy};
    ///
    /// let range = CoordinateRange::new(2, 5);
    /// assert_eq!(range.resolve(10, RangePolicy::Strict).unwrap(), 1..5);
    ///
    /// let wide = CoordinateRange::new(8, 40);
    /// assert_eq!(wide.resolve(10, RangePolicy::Clamp).unwrap(), 7..10);
    /// ```
    pub fn resolve(&self, len: usize, policy: RangePolicy) -> Result<Range<usize>> {
        match policy {
            RangePolicy::Strict => {
                if !self.fits(len) {
                    return Err(GuidexError::InvalidRange {
                        start: self.start,
                        end: self.end,
                        len,
                    });
                }

                Ok(self.start - 1..self.end)
            }
            RangePolicy::Clamp => {
                let lo = self.start.saturating_sub(1).min(len);
                let hi = self.end.min(len);

                if lo > hi { Ok(lo..lo) } else { Ok(lo..hi) }
            }
        }
    }
}

/// Formats the range as `START-END`, the same shape [`FromStr`] accepts.
impl fmt::Display for CoordinateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

impl From<(usize, usize)> for CoordinateRange {
    fn from((start, end): (usize, usize)) -> Self {
        Self::new(start, end)
    }
}

/// Parses `START-END` (e.g. `238-395`).
impl FromStr for CoordinateRange {
    type Err = GuidexError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let (start, end) = s
            .trim()
            .split_once('-')
            .ok_or_else(|| GuidexError::Parse(format!("expected START-END, got {:?}", s)))?;

        let parse = |value: &str| {
            value.trim().parse::<usize>().map_err(|e| {
                GuidexError::Parse(format!("invalid coordinate {:?} in {:?}: {}", value, s, e))
            })
        };

        Ok(Self::new(parse(start)?, parse(end)?))
    }
}

/// Slices `range` out of `source` into a new record named `{id}_{start}_{end}`.
///
/// The name always carries the coordinates as supplied, even when the clamp
/// policy shortened the slice.
///
/// # Example
///
/// ```rust,ignore
/// use guidex::{CoordinateRange, RangePolicy, SequenceRecord, extract};
///
/// let source = SequenceRecord::new("seq1", b"ACGTACGTAC".to_vec());
/// let sub = extract(&source, CoordinateRange::new(2, 5), RangePolicy::Strict).unwrap();
/// assert_eq!(sub.id, "seq1_2_5");
/// assert_eq!(sub.sequence, b"CGTA");
/// ```
pub fn extract(
    source: &SequenceRecord,
    range: CoordinateRange,
    policy: RangePolicy,
) -> Result<SequenceRecord> {
    let slice = range.resolve(source.len(), policy)?;

    Ok(SequenceRecord::new(
        format!("{}_{}_{}", source.id, range.start, range.end),
        source.sequence[slice].to_vec(),
    ))
}

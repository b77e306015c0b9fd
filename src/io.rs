//! extract FASTA ranges and find NGG guides with pCas9 cloning oligos
//!
//! Reading sequences from FASTA (plain or gzipped) and 2bit files, and writing
//! FASTA records and guide reports.

use crate::{
    consts::REPORT_BANNER,
    error::{GuidexError, Result},
    guides::GuideMatch,
    range::SequenceRecord,
};

use flate2::{Compression, read::MultiGzDecoder, write::GzEncoder};
use log::info;
use twobit::TwoBitFile;

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

/// Loads the single record held in a FASTA, gzipped FASTA or 2bit file.
///
/// Files with zero or several records are rejected.
pub fn read_single_record<P: AsRef<Path>>(path: P) -> Result<SequenceRecord> {
    let path = path.as_ref();
    info!("Reading sequence from file {}", path.display());

    let mut records = match path.extension().and_then(|ext| ext.to_str()) {
        Some("2bit") => from_2bit(path)?,
        _ => from_fa(open_reader(path)?).map_err(|e| match e {
            GuidexError::Stream(source) => GuidexError::io(path, source),
            other => other,
        })?,
    };

    match records.len() {
        0 => Err(GuidexError::Parse(format!(
            "no records found in {}",
            path.display()
        ))),
        1 => Ok(records.remove(0)),
        n => Err(GuidexError::Parse(format!(
            "expected a single record in {}, found {}",
            path.display(),
            n
        ))),
    }
}

/// Parses every record of a FASTA stream.
///
/// The record id is the first whitespace-delimited token of the header.
/// Sequence lines are trimmed and concatenated as-is; blank lines are skipped.
pub fn from_fa<R: BufRead>(mut reader: R) -> Result<Vec<SequenceRecord>> {
    let mut acc = Vec::new();
    let mut line = Vec::new();
    let mut header: Option<String> = None;
    let mut seq = Vec::new();

    loop {
        line.clear();
        let bytes_read = reader.read_until(b'\n', &mut line)?;

        if bytes_read == 0 {
            break;
        }

        let trimmed = line.trim_ascii();
        if trimmed.is_empty() {
            continue;
        }

        if let Some(rest) = trimmed.strip_prefix(b">") {
            let id = String::from_utf8_lossy(rest)
                .split_whitespace()
                .next()
                .unwrap_or_default()
                .to_string();

            if let Some(prev) = header.replace(id) {
                acc.push(SequenceRecord::new(prev, std::mem::take(&mut seq)));
            }
        } else if header.is_some() {
            seq.extend_from_slice(trimmed);
        } else {
            return Err(GuidexError::Parse(
                "sequence data found before the first '>' header".to_string(),
            ));
        }
    }

    if let Some(last) = header {
        acc.push(SequenceRecord::new(last, seq));
    }

    Ok(acc)
}

/// Loads every chromosome of a 2bit file as a record.
fn from_2bit(path: &Path) -> Result<Vec<SequenceRecord>> {
    let mut genome = TwoBitFile::open_and_read(path).map_err(|e| {
        GuidexError::Parse(format!("cannot open 2bit {}: {}", path.display(), e))
    })?;

    let mut records = Vec::new();
    for chr in genome.chrom_names() {
        let seq = genome.read_sequence(&chr, ..).map_err(|e| {
            GuidexError::Parse(format!(
                "cannot read {} from 2bit {}: {}",
                chr,
                path.display(),
                e
            ))
        })?;

        records.push(SequenceRecord::new(chr, seq.into_bytes()));
    }

    Ok(records)
}

/// Reads the raw sequence of a FASTA file, ignoring header structure.
///
/// Every line starting with `>` is dropped and all other lines are trimmed and
/// joined, so a multi-record file yields one concatenated sequence.
pub fn fetch_sequence<P: AsRef<Path>>(path: P) -> Result<Vec<u8>> {
    let path = path.as_ref();
    info!("Reading sequence from file {}", path.display());

    let reader = open_reader(path)?;
    let seq = concat_sequence_lines(reader).map_err(|e| GuidexError::io(path, e))?;

    info!("Read {} bases from file {}", seq.len(), path.display());

    Ok(seq)
}

pub fn concat_sequence_lines<R: BufRead>(reader: R) -> std::io::Result<Vec<u8>> {
    let mut seq = Vec::new();

    for line in reader.split(b'\n') {
        let line = line?;
        if line.starts_with(b">") {
            continue;
        }

        seq.extend_from_slice(line.trim_ascii());
    }

    Ok(seq)
}

/// Opens `path` for buffered reading, decompressing `.gz` files on the fly.
fn open_reader(path: &Path) -> Result<Box<dyn BufRead>> {
    let file = File::open(path).map_err(|e| GuidexError::io(path, e))?;

    let reader: Box<dyn BufRead> = match path.extension().and_then(|ext| ext.to_str()) {
        Some("gz") => Box::new(BufReader::new(MultiGzDecoder::new(file))),
        _ => Box::new(BufReader::new(file)),
    };

    Ok(reader)
}

/// Writes `>{id}\n{sequence}\n`, never wrapping the sequence line.
pub fn write_record<W: Write>(writer: &mut W, record: &SequenceRecord) -> std::io::Result<()> {
    writer.write_all(b">")?;
    writer.write_all(record.id.as_bytes())?;
    writer.write_all(b"\n")?;
    writer.write_all(&record.sequence)?;
    writer.write_all(b"\n")
}

/// Writes a single record to `path`, gzip-compressed when it ends in `.gz`.
pub fn write_record_to_path(path: &Path, record: &SequenceRecord) -> Result<()> {
    let file = File::create(path).map_err(|e| GuidexError::io(path, e))?;

    if path.extension().and_then(|ext| ext.to_str()) == Some("gz") {
        let mut writer = GzEncoder::new(BufWriter::new(file), Compression::default());
        write_record(&mut writer, record).map_err(|e| GuidexError::io(path, e))?;
        writer
            .finish()
            .and_then(|mut inner| inner.flush())
            .map_err(|e| GuidexError::io(path, e))?;
    } else {
        let mut writer = BufWriter::new(file);
        write_record(&mut writer, record).map_err(|e| GuidexError::io(path, e))?;
        writer.flush().map_err(|e| GuidexError::io(path, e))?;
    }

    info!("Wrote {} to {}", record.id, path.display());

    Ok(())
}

/// Writes the banner followed by one block per guide:
///
/// ```text
/// Position 1-20: AAAAAAAAAAAAAAAAAAAA PAM=TGG
///   Forward (pCas9): AAACAAAAAAAAAAAAAAAAAAAAG
///   Reverse (pCas9): TTTTTTTTTTTTTTTTTTTTCAAA
///
/// ```
pub fn write_report<W: Write>(writer: &mut W, matches: &[GuideMatch]) -> std::io::Result<()> {
    writeln!(writer, "{}\n", REPORT_BANNER)?;

    for hit in matches {
        let oligos = hit.oligos();

        writeln!(writer, "{}", hit)?;
        writeln!(
            writer,
            "  Forward (pCas9): {}",
            String::from_utf8_lossy(&oligos.forward)
        )?;
        writeln!(
            writer,
            "  Reverse (pCas9): {}\n",
            String::from_utf8_lossy(&oligos.reverse)
        )?;
    }

    Ok(())
}

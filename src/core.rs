use crate::{
    cli::{ExtractArgs, GuideArgs, RangePolicy},
    consts::{DEFAULT_REGIONS, DEFAULT_SEQUENCE},
    error::{GuidexError, Result},
    guides::{GuideMatch, find_guides_in_regions},
    io::{fetch_sequence, read_single_record, write_record, write_record_to_path, write_report},
    range::{CoordinateRange, extract},
};

use log::{info, warn};

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::PathBuf,
};

/// Which sequence file to scan and which regions of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    pub input_path: PathBuf,
    pub regions: Vec<CoordinateRange>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_SEQUENCE),
            regions: DEFAULT_REGIONS.iter().copied().map(Into::into).collect(),
        }
    }
}

impl From<&GuideArgs> for ScanConfig {
    fn from(args: &GuideArgs) -> Self {
        let regions = if args.regions.is_empty() {
            ScanConfig::default().regions
        } else {
            args.regions.clone()
        };

        Self {
            input_path: args.sequence.clone(),
            regions,
        }
    }
}

/// Entry point of `extract-range`: slice one record and write it out.
pub fn extract_range(args: ExtractArgs) -> Result<()> {
    let ExtractArgs {
        fasta,
        start,
        end,
        output,
        policy,
        ..
    } = args;

    let source = read_single_record(&fasta)?;
    info!(
        "Read record {} ({} bases) from {}",
        source.id,
        source.len(),
        fasta.display()
    );

    let range = CoordinateRange::new(start, end);
    let target = extract(&source, range, policy)?;

    if !range.fits(source.len()) {
        warn!(
            "WARN: range {} falls outside {} ({} bases), clamped to {} bases",
            range,
            source.id,
            source.len(),
            target.len()
        );
    }

    match output {
        Some(path) => write_record_to_path(&path, &target),
        None => {
            let stdout = std::io::stdout();
            let mut writer = BufWriter::new(stdout.lock());
            write_record(&mut writer, &target)?;
            writer.flush()?;
            Ok(())
        }
    }
}

/// Entry point of `find-guides`: scan the configured regions and print the report.
pub fn scan_guides(args: GuideArgs) -> Result<()> {
    let config = ScanConfig::from(&args);
    let hits = run_scan(&config, args.policy)?;

    match args.output {
        Some(path) => {
            let file = File::create(&path).map_err(|e| GuidexError::io(&path, e))?;
            let mut writer = BufWriter::new(file);
            write_report(&mut writer, &hits).map_err(|e| GuidexError::io(&path, e))?;
            writer.flush().map_err(|e| GuidexError::io(&path, e))?;
            info!("Wrote {} guides to {}", hits.len(), path.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut writer = BufWriter::new(stdout.lock());
            write_report(&mut writer, &hits)?;
            writer.flush()?;
        }
    }

    Ok(())
}

/// Loads the configured sequence and collects guides across all regions.
pub fn run_scan(config: &ScanConfig, policy: RangePolicy) -> Result<Vec<GuideMatch>> {
    let seq = fetch_sequence(&config.input_path)?;
    let hits = find_guides_in_regions(&seq, &config.regions, policy)?;

    info!(
        "Found {} guides across {} regions",
        hits.len(),
        config.regions.len()
    );

    Ok(hits)
}

use guidex::{
    CoordinateRange, GuideMatch, GuidexError, OligoPair, RangePolicy, ScanConfig, find_guides,
    find_guides_in_regions, forward_oligo, io::write_report, reverse_complement, reverse_oligo,
    run_scan, scan_region,
};
use std::path::PathBuf;
use tempfile::TempDir;

fn poly_a_tgg() -> Vec<u8> {
    let mut seq = vec![b'A'; 20];
    seq.extend_from_slice(b"TGG");
    seq
}

// hits at 1 (ACGTx5 + AGG) and 29 (CATGx5 + CGG), nothing else
fn two_site_sequence() -> Vec<u8> {
    let mut seq = b"ACGT".repeat(5);
    seq.extend_from_slice(b"AGG");
    seq.extend_from_slice(b"TTTTT");
    seq.extend_from_slice(&b"CATG".repeat(5));
    seq.extend_from_slice(b"CGG");
    seq
}

#[test]
fn test_single_window_match() {
    let seq = poly_a_tgg();
    let hits = find_guides(&seq, CoordinateRange::new(1, 23), RangePolicy::Strict).unwrap();

    assert_eq!(
        hits,
        vec![GuideMatch {
            guide: vec![b'A'; 20],
            pam: b"TGG".to_vec(),
            position: 1,
        }]
    );
    assert_eq!(hits[0].end(), 20);
}

#[test]
fn test_region_shorter_than_window_has_no_matches() {
    let seq = poly_a_tgg();

    let hits = find_guides(&seq, CoordinateRange::new(2, 23), RangePolicy::Strict).unwrap();
    assert!(hits.is_empty());

    assert!(scan_region(b"", 1).is_empty());
    assert!(scan_region(&seq[..22], 1).is_empty());
}

#[test]
fn test_last_full_window_is_scanned() {
    let mut seq = vec![b'C'];
    seq.extend_from_slice(&poly_a_tgg());

    let hits = scan_region(&seq, 1);

    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].position, 2);
    assert_eq!(hits[0].pam, b"TGG");
}

#[test]
fn test_overlapping_windows_are_all_reported() {
    let mut seq = vec![b'A'; 20];
    seq.extend_from_slice(b"AGGG");

    let hits = scan_region(&seq, 1);
    let positions: Vec<usize> = hits.iter().map(|h| h.position).collect();

    assert_eq!(positions, vec![1, 2]);
    assert_eq!(hits[0].pam, b"AGG");
    assert_eq!(hits[1].pam, b"GGG");
    assert_eq!(hits[1].guide, vec![b'A'; 20]);
}

#[test]
fn test_positions_are_relative_to_the_full_sequence() {
    let mut seq = vec![b'C'; 10];
    seq.extend_from_slice(&poly_a_tgg());

    let hits = find_guides(&seq, CoordinateRange::new(11, 33), RangePolicy::Strict).unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].position, 11);

    let hits = find_guides(&seq, CoordinateRange::new(1, 33), RangePolicy::Strict).unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].position, 11);
}

#[test]
fn test_pam_match_is_case_sensitive() {
    let mut seq = vec![b'A'; 20];
    seq.extend_from_slice(b"tgg");

    assert!(scan_region(&seq, 1).is_empty());
}

#[test]
fn test_multi_region_results_keep_region_order() {
    let seq = two_site_sequence();
    let ranges = [CoordinateRange::new(28, 51), CoordinateRange::new(1, 23)];

    let hits = find_guides_in_regions(&seq, &ranges, RangePolicy::Strict).unwrap();
    let positions: Vec<usize> = hits.iter().map(|h| h.position).collect();

    assert_eq!(positions, vec![29, 1]);
    assert_eq!(hits[0].guide, b"CATG".repeat(5));
    assert_eq!(hits[0].pam, b"CGG");
}

#[test]
fn test_overlapping_regions_duplicate_matches() {
    let seq = two_site_sequence();
    let ranges = [CoordinateRange::new(1, 51), CoordinateRange::new(1, 23)];

    let hits = find_guides_in_regions(&seq, &ranges, RangePolicy::Strict).unwrap();
    let positions: Vec<usize> = hits.iter().map(|h| h.position).collect();

    assert_eq!(positions, vec![1, 29, 1]);
}

#[test]
fn test_strict_policy_rejects_regions_past_the_end() {
    let seq = poly_a_tgg();

    let err = find_guides(&seq, CoordinateRange::new(1, 30), RangePolicy::Strict).unwrap_err();
    assert!(matches!(
        err,
        GuidexError::InvalidRange {
            start: 1,
            end: 30,
            len: 23
        }
    ));

    let err = find_guides(&seq, CoordinateRange::new(0, 5), RangePolicy::Strict).unwrap_err();
    assert!(matches!(err, GuidexError::InvalidRange { .. }));
}

#[test]
fn test_clamp_policy_scans_what_is_left() {
    let seq = poly_a_tgg();

    let hits = find_guides(&seq, CoordinateRange::new(1, 30), RangePolicy::Clamp).unwrap();
    assert_eq!(hits.len(), 1);

    let hits = find_guides(&seq, CoordinateRange::new(20, 5), RangePolicy::Clamp).unwrap();
    assert!(hits.is_empty());
}

#[test]
fn test_forward_oligo() {
    let guide = vec![b'A'; 20];
    let oligo = forward_oligo(&guide);

    assert_eq!(oligo.len(), 25);
    assert_eq!(oligo, b"AAACAAAAAAAAAAAAAAAAAAAAG");
}

#[test]
fn test_reverse_oligo() {
    assert_eq!(reverse_oligo(&[b'A'; 20]), b"TTTTTTTTTTTTTTTTTTTTCAAA");
    assert_eq!(reverse_oligo(b"AACCG"), b"CGGTTCAAA");
}

#[test]
fn test_reverse_complement_passes_unknown_bases_through() {
    assert_eq!(reverse_complement(b"ACGT"), b"ACGT");
    assert_eq!(reverse_complement(b"AAN"), b"NTT");
    assert_eq!(reverse_complement(b"acgt"), b"tgca");
    assert_eq!(reverse_complement(b""), b"");
}

#[test]
fn test_oligo_pair_from_match() {
    let hit = &scan_region(&two_site_sequence(), 1)[0];

    assert_eq!(
        hit.oligos(),
        OligoPair {
            forward: [b"AAAC".as_slice(), b"ACGT".repeat(5).as_slice(), b"G".as_slice()].concat(),
            reverse: [b"ACGT".repeat(5).as_slice(), b"CAAA".as_slice()].concat(),
        }
    );
}

#[test]
fn test_report_layout() {
    let hits = scan_region(&poly_a_tgg(), 1);
    let mut out = Vec::new();
    write_report(&mut out, &hits).unwrap();

    let expected = "All NGG sites in specified regions with pCas9-compatible oligos:\n\n\
                    Position 1-20: AAAAAAAAAAAAAAAAAAAA PAM=TGG\n  \
                    Forward (pCas9): AAACAAAAAAAAAAAAAAAAAAAAG\n  \
                    Reverse (pCas9): TTTTTTTTTTTTTTTTTTTTCAAA\n\n";

    assert_eq!(String::from_utf8(out).unwrap(), expected);
}

#[test]
fn test_report_without_matches_is_just_the_banner() {
    let mut out = Vec::new();
    write_report(&mut out, &[]).unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "All NGG sites in specified regions with pCas9-compatible oligos:\n\n"
    );
}

#[test]
fn test_default_scan_config() {
    let config = ScanConfig::default();

    assert_eq!(config.input_path, PathBuf::from("sequence.fasta"));
    assert_eq!(
        config.regions,
        vec![
            CoordinateRange::new(238, 395),
            CoordinateRange::new(396, 452),
            CoordinateRange::new(455, 682),
        ]
    );
}

#[test]
fn test_run_scan_joins_multi_line_fasta() {
    let temp = TempDir::new().expect("failed to create temporary directory");
    let path = temp.path().join("sequence.fasta");

    // guide split across lines, header and blank line skipped
    std::fs::write(&path, ">lacZ partial\nCCCCCAAAAAAAAAA  \n\nAAAAAAAAAATGG\n").unwrap();

    let config = ScanConfig {
        input_path: path,
        regions: vec![CoordinateRange::new(1, 28), CoordinateRange::new(6, 28)],
    };
    let hits = run_scan(&config, RangePolicy::Strict).unwrap();

    assert_eq!(hits.len(), 2);
    assert!(hits.iter().all(|h| h.position == 6 && h.pam == b"TGG"));
}

//! End-to-end export tests: file on disk → Analyzer → CSV beside it.

use std::fs;
use std::path::Path;

use pretty_assertions::assert_eq;
use tempfile::TempDir;
use voronoi_rs::export::{self, ExportPaths};
use voronoi_rs::{AnalysisConfig, Analyzer, Error};

/// Helper: write `contents` as `name` inside a fresh temp dir.
fn source_file(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn analyze_and_export(path: &Path) -> voronoi_rs::Result<export::Exported> {
    let report = Analyzer::new(AnalysisConfig::default())?.run_path(path)?;
    export::export_csv(&report, &ExportPaths::beside(path))
}

#[test]
fn test_csv_files_written_beside_source() {
    let dir = TempDir::new().unwrap();
    let path = source_file(
        &dir,
        "cu64zr36.txt",
        "0 0 0 0 12 0\n0 0 0 2 8 2\n0 0 0 0 12 0\n1 0 0 2 8 2\n",
    );

    let exported = analyze_and_export(&path).unwrap();
    assert_eq!(exported.full_report, dir.path().join("cu64zr36_Full_Report.csv"));
    assert_eq!(exported.stats, Some(dir.path().join("cu64zr36_VP_Stats.csv")));

    let full = fs::read_to_string(&exported.full_report).unwrap();
    let lines: Vec<&str> = full.lines().collect();
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], "Atom_ID,n1,n2,n3,n4,n5,n6,W_Value,VP_Label");
    assert_eq!(lines[1], "0,0,0,0,0,12,0,1.0,\"<0,0,12,0>\"");
    assert_eq!(lines[4], "3,1,0,0,2,8,2,0.6153846153846154,Discarded");

    let stats = fs::read_to_string(exported.stats.unwrap()).unwrap();
    assert_eq!(
        stats,
        "VP_Index,Count,Fraction\n\"<0,0,12,0>\",2,66.66666666666667\n\"<0,2,8,2>\",1,33.333333333333336\n"
    );
}

#[test]
fn test_empty_distribution_writes_full_report_only() {
    let dir = TempDir::new().unwrap();
    let path = source_file(&dir, "dirty.txt", "1 0 2 10 3 1 0\n0 0 2 10 3 1 5\n");

    let exported = analyze_and_export(&path).unwrap();
    assert!(exported.stats.is_none());
    assert!(exported.full_report.exists());
    assert!(!dir.path().join("dirty_VP_Stats.csv").exists());

    let full = fs::read_to_string(&exported.full_report).unwrap();
    assert_eq!(full.lines().filter(|l| l.ends_with(",Discarded")).count(), 2);
}

#[test]
fn test_wide_table_has_elision_column() {
    let dir = TempDir::new().unwrap();
    let path = source_file(&dir, "wide.txt", "0 0 0 2 8 2 0 0 0 0 0 0\n");
    let exported = analyze_and_export(&path).unwrap();

    let full = fs::read_to_string(&exported.full_report).unwrap();
    let mut lines = full.lines();
    assert_eq!(
        lines.next().unwrap(),
        "Atom_ID,n1,n2,n3,n4,n5,n6,n7,n8,n9,n10,...,W_Value,VP_Label"
    );
    assert_eq!(
        lines.next().unwrap(),
        "0,0,0,0,2,8,2,0,0,0,0,...,0.6666666666666666,\"<0,2,8,2>\""
    );
}

#[test]
fn test_fatal_error_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let path = source_file(&dir, "short.txt", "0 0 2 10 3\n");

    let err = analyze_and_export(&path).unwrap_err();
    assert!(matches!(err, Error::Parse(_)));
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[test]
fn test_missing_source_is_resource_error() {
    let dir = TempDir::new().unwrap();
    let err = analyze_and_export(&dir.path().join("absent.txt")).unwrap_err();
    assert!(matches!(err, Error::Resource { .. }));
}

#[test]
fn test_whole_fractions_keep_decimal_point() {
    let dir = TempDir::new().unwrap();
    let path = source_file(&dir, "ico.txt", "0 0 0 0 12 0\n0 1 0 0 12 0\n");
    let exported = analyze_and_export(&path).unwrap();

    let stats = fs::read_to_string(exported.stats.unwrap()).unwrap();
    assert_eq!(stats, "VP_Index,Count,Fraction\n\"<0,0,12,0>\",1,100.0\n");
}

#[test]
fn test_blocked_stats_path_leaves_no_full_report() {
    let dir = TempDir::new().unwrap();
    let path = source_file(&dir, "ico.txt", "0 0 0 0 12 0\n");
    fs::create_dir(dir.path().join("ico_VP_Stats.csv")).unwrap();

    assert!(analyze_and_export(&path).is_err());
    assert!(!dir.path().join("ico_Full_Report.csv").exists());
    // Source file plus the blocking directory.
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 2);
}

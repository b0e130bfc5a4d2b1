//! CSV export of analysis reports.
//!
//! Writes the two tables next to the source file:
//!
//! ```text
//! dump.txt → dump_Full_Report.csv   Atom_ID, n1..n10[, ...], W_Value, VP_Label
//!          → dump_VP_Stats.csv      VP_Index, Count, Fraction
//! ```
//!
//! The stats file is only written when the run has a summary. Fractions
//! and W values are written in `{:?}` form, so whole numbers keep their
//! `.0` (`75.0`, `1.0`).

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::report::{AnalysisReport, FullReport, SummaryReport, SUMMARY_HEADER};
use crate::Result;

/// Output locations derived from a source path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPaths {
    pub full_report: PathBuf,
    pub stats: PathBuf,
}

impl ExportPaths {
    /// `<dir>/<stem>_Full_Report.csv` and `<dir>/<stem>_VP_Stats.csv`.
    pub fn beside(source: &Path) -> Self {
        let dir = source.parent().unwrap_or_else(|| Path::new(""));
        let stem = source
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            full_report: dir.join(format!("{stem}_Full_Report.csv")),
            stats: dir.join(format!("{stem}_VP_Stats.csv")),
        }
    }
}

/// Which files [`export_csv`] wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exported {
    pub full_report: PathBuf,
    pub stats: Option<PathBuf>,
}

/// Write the report's CSV files.
///
/// Both tables are rendered in memory and staged in temp files beside their
/// destinations. The files only appear once every stage succeeded; if moving
/// one into place fails, the ones already moved are removed again.
pub fn export_csv(report: &AnalysisReport, paths: &ExportPaths) -> Result<Exported> {
    let mut full = Vec::new();
    write_full_report(&report.full, &mut full)?;

    let stats = match &report.summary {
        Some(summary) => {
            let mut buf = Vec::new();
            write_summary_report(summary, &mut buf)?;
            Some(buf)
        }
        None => None,
    };

    let mut staged = vec![Staged::new(&paths.full_report, &full)?];
    if let Some(buf) = &stats {
        staged.push(Staged::new(&paths.stats, buf)?);
    }
    commit(staged)?;

    Ok(Exported {
        full_report: paths.full_report.clone(),
        stats: stats.map(|_| paths.stats.clone()),
    })
}

/// Rendered contents waiting in a temp file in the destination directory.
struct Staged {
    file: NamedTempFile,
    dest: PathBuf,
}

impl Staged {
    fn new(dest: &Path, contents: &[u8]) -> Result<Self> {
        let dir = match dest.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        let mut file = NamedTempFile::new_in(dir)?;
        file.write_all(contents)?;
        file.flush()?;
        Ok(Self { file, dest: dest.to_path_buf() })
    }
}

/// Move every staged file into place, all or nothing.
fn commit(staged: Vec<Staged>) -> Result<()> {
    let mut placed: Vec<PathBuf> = Vec::with_capacity(staged.len());
    for Staged { file, dest } in staged {
        if let Err(e) = file.persist(&dest) {
            for path in &placed {
                if let Err(cleanup) = std::fs::remove_file(path) {
                    tracing::warn!("could not remove {}: {cleanup}", path.display());
                }
            }
            return Err(e.error.into());
        }
        tracing::info!("wrote {}", dest.display());
        placed.push(dest);
    }
    Ok(())
}

/// Write the per-atom table as CSV.
pub fn write_full_report<W: Write>(report: &FullReport, writer: W) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(&report.header)?;
    for row in &report.rows {
        csv.write_record(row.record())?;
    }
    csv.flush()?;
    Ok(())
}

/// Write the ranked index table as CSV.
pub fn write_summary_report<W: Write>(summary: &SummaryReport, writer: W) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(SUMMARY_HEADER)?;
    for entry in &summary.entries {
        csv.write_record([
            entry.label.to_string(),
            entry.count.to_string(),
            format!("{:?}", entry.fraction),
        ])?;
    }
    csv.flush()?;
    Ok(())
}

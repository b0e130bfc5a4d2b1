//! Report assembly: joins per-row results into exportable tables.
//!
//! Nothing is computed here beyond formatting; every vector is joined to
//! the table by row position, and any length disagreement is an error.

use crate::analysis::{AdmissibilityMask, FrequencyDistribution, FrequencyEntry, PurityStats, WValues};
use crate::config::AnalysisConfig;
use crate::model::{NeighborTable, RowIndex, StructuralLabel};
use crate::{Error, Result};

/// Marker column/cell for face-count columns left out of the full report.
pub const ELIDED_MARKER: &str = "...";

/// Column headers of the summary report.
pub const SUMMARY_HEADER: [&str; 3] = ["VP_Index", "Count", "Fraction"];

// ============================================================================
// Report types
// ============================================================================

/// Everything one run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisReport {
    pub rows: usize,
    pub columns: usize,
    pub five_fold_column: usize,
    pub mean_w_value: f64,
    pub purity: PurityStats,
    pub full: FullReport,
    /// `None` when no row passed the purity rule.
    pub summary: Option<SummaryReport>,
}

/// One row per atom: id, leading face counts, W value, label.
#[derive(Debug, Clone, PartialEq)]
pub struct FullReport {
    pub header: Vec<String>,
    pub rows: Vec<FullReportRow>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FullReportRow {
    pub atom_id: RowIndex,
    pub counts: Vec<u32>,
    /// Source row had more columns than `counts` holds.
    pub elided: bool,
    pub w_value: f64,
    pub label: StructuralLabel,
}

/// Ranked index statistics over admissible rows.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryReport {
    pub admissible: usize,
    pub entries: Vec<FrequencyEntry>,
}

/// One bar of the ranking chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartBar {
    pub rank: usize,
    pub label: String,
    pub fraction: f64,
    /// Only the top-ranked bar is highlighted.
    pub highlighted: bool,
}

// ============================================================================
// Assembly
// ============================================================================

/// Join the per-row vectors of one run into an [`AnalysisReport`].
pub fn assemble(
    table: &NeighborTable,
    w_values: &WValues,
    mask: &AdmissibilityMask,
    labels: &[StructuralLabel],
    distribution: Option<FrequencyDistribution>,
    config: &AnalysisConfig,
) -> Result<AnalysisReport> {
    check_len("W values", table.len(), w_values.len())?;
    check_len("admissibility mask", table.len(), mask.len())?;
    check_len("labels", table.len(), labels.len())?;

    let kept = table.columns().min(config.full_report_max_columns);
    let elided = table.columns() > kept;

    let mut header = Vec::with_capacity(kept + 4);
    header.push("Atom_ID".to_string());
    header.extend((1..=kept).map(|order| format!("n{order}")));
    if elided {
        header.push(ELIDED_MARKER.to_string());
    }
    header.push("W_Value".to_string());
    header.push("VP_Label".to_string());

    let rows = table
        .indexed_rows()
        .zip(w_values.as_slice())
        .zip(labels)
        .map(|(((atom_id, row), &w_value), &label)| FullReportRow {
            atom_id,
            counts: row[..kept].to_vec(),
            elided,
            w_value,
            label,
        })
        .collect();

    let summary = distribution.map(|dist| SummaryReport {
        admissible: dist.admissible(),
        entries: dist.into_entries(),
    });

    Ok(AnalysisReport {
        rows: table.len(),
        columns: table.columns(),
        five_fold_column: w_values.column(),
        mean_w_value: w_values.mean(),
        purity: mask.stats(),
        full: FullReport { header, rows },
        summary,
    })
}

fn check_len(what: &'static str, expected: usize, got: usize) -> Result<()> {
    if expected != got {
        return Err(Error::LengthMismatch { what, expected, got });
    }
    Ok(())
}

// ============================================================================
// Views
// ============================================================================

impl FullReportRow {
    /// CSV cells in header order.
    pub fn record(&self) -> Vec<String> {
        let mut cells = Vec::with_capacity(self.counts.len() + 4);
        cells.push(self.atom_id.to_string());
        cells.extend(self.counts.iter().map(u32::to_string));
        if self.elided {
            cells.push(ELIDED_MARKER.to_string());
        }
        cells.push(format!("{:?}", self.w_value));
        cells.push(self.label.to_string());
        cells
    }
}

impl SummaryReport {
    /// The `n` highest-ranked entries.
    pub fn top(&self, n: usize) -> &[FrequencyEntry] {
        &self.entries[..n.min(self.entries.len())]
    }

    /// Bars for the top `n` entries, rank 0 highlighted.
    pub fn chart_series(&self, n: usize) -> Vec<ChartBar> {
        self.top(n)
            .iter()
            .enumerate()
            .map(|(rank, entry)| ChartBar {
                rank,
                label: entry.label.to_string(),
                fraction: entry.fraction,
                highlighted: rank == 0,
            })
            .collect()
    }

    /// Fixed-width ranking table for the log.
    pub fn log_table(&self, n: usize) -> Vec<String> {
        let mut lines = Vec::with_capacity(n + 3);
        lines.push(format!("Top {} Voronoi index", n.min(self.entries.len())));
        lines.push(format!("{:<18} {:<8} {:<8}", "Type", "Count", "Freq(%)"));
        lines.push("-".repeat(40));
        for entry in self.top(n) {
            lines.push(format!(
                "{:<18} {:<8} {:.2}",
                entry.label.to_string(),
                entry.count,
                entry.fraction
            ));
        }
        lines
    }
}

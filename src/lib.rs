//! # voronoi-rs — Voronoi Polyhedra Analysis
//!
//! Classifies per-atom Voronoi face-count vectors `(n1, n2, n3, …)` into
//! `<n3,n4,n5,n6>` structural indices, computes the five-fold fraction
//! ("W value") of every atom, and ranks the indices that survive the purity
//! rule.
//!
//! ## Design Principles
//!
//! 1. **Pure stages**: every analysis stage is a function of already-resident data
//! 2. **Plain DTOs**: `NeighborTable`, `StructuralLabel`, `FrequencyEntry` cross all boundaries
//! 3. **Row order is identity**: `RowIndex` ties every derived vector back to its row
//! 4. **Sinks are outside**: CSV export and chart rendering only consume reports
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use voronoi_rs::{Analyzer, AnalysisConfig};
//!
//! # fn example() -> voronoi_rs::Result<()> {
//! let analyzer = Analyzer::new(AnalysisConfig::default())?;
//! let report = analyzer.run_path("dump.voronoi.txt")?;
//!
//! println!("mean W = {:.5}", report.mean_w_value);
//! if let Some(summary) = &report.summary {
//!     for entry in summary.top(10) {
//!         println!("{} {} {:.2}", entry.label, entry.count, entry.fraction);
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Pipeline
//!
//! | Stage | Module | Output |
//! |-------|--------|--------|
//! | Load | `loader` | `NeighborTable` |
//! | W value | `analysis::w_value` | `WValues` |
//! | Purity | `analysis::purity` | `AdmissibilityMask` |
//! | Label | `analysis::labeler` | `Vec<StructuralLabel>` |
//! | Aggregate | `analysis::frequency` | `FrequencyDistribution` |
//! | Assemble | `report` | `AnalysisReport` |

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod loader;
pub mod analysis;
pub mod report;
pub mod export;
pub mod config;

use std::path::{Path, PathBuf};

// ============================================================================
// Re-exports: Model (the DTOs)
// ============================================================================

pub use model::{
    NeighborTable, RowIndex, IndexScheme, VoronoiIndex, StructuralLabel,
    DISCARDED_LABEL,
};

// ============================================================================
// Re-exports: Analysis
// ============================================================================

pub use loader::TableLoader;
pub use analysis::{
    WValues, AdmissibilityMask, PurityStats, FrequencyDistribution, FrequencyEntry,
};
pub use report::{AnalysisReport, FullReport, FullReportRow, SummaryReport, ChartBar};
pub use config::AnalysisConfig;

// ============================================================================
// Top-level Analyzer handle
// ============================================================================

/// The primary entry point. An `Analyzer` holds a validated configuration
/// and runs the whole pipeline against one table per call.
#[derive(Debug, Clone)]
pub struct Analyzer {
    config: AnalysisConfig,
    scheme: IndexScheme,
}

impl Analyzer {
    /// Create an Analyzer after validating `config`.
    pub fn new(config: AnalysisConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, scheme: IndexScheme::VORONOI })
    }

    /// Load the table at `path`, then run the pipeline on it.
    pub fn run_path(&self, path: impl AsRef<Path>) -> Result<AnalysisReport> {
        let table = TableLoader::load(path)?;
        self.run(&table)
    }

    /// Run every stage against an already-loaded table.
    ///
    /// `EmptyDistribution` is absorbed here: the report is still produced,
    /// with `summary` set to `None`. Every other error aborts the run.
    pub fn run(&self, table: &NeighborTable) -> Result<AnalysisReport> {
        tracing::info!(rows = table.len(), columns = table.columns(),
            "table loaded: {} rows x {} columns", table.len(), table.columns());

        // Phase 1: W values
        let w_values = WValues::compute(table, self.config.five_fold_column)?;
        tracing::info!("mean W value (five-fold column {}): {:.5}",
            self.config.five_fold_column, w_values.mean());

        // Phase 2: Purity
        let mask = AdmissibilityMask::compute(table, &self.scheme);
        let purity = mask.stats();
        tracing::info!(
            admissible = purity.admissible,
            discarded = purity.discarded,
            "purity filter kept {} of {} rows ({:.2}%)",
            purity.admissible, purity.total, purity.purity_percent()
        );

        // Phase 3: Labels
        let labels = analysis::label_rows(table, &mask, &self.scheme)?;

        // Phase 4: Aggregate
        let distribution = match FrequencyDistribution::build(&labels, purity.admissible) {
            Ok(distribution) => Some(distribution),
            Err(Error::EmptyDistribution) => {
                tracing::warn!("no rows satisfy the purity rule; skipping index statistics");
                None
            }
            Err(e) => return Err(e),
        };

        // Phase 5: Assemble
        let report = report::assemble(
            table,
            &w_values,
            &mask,
            &labels,
            distribution,
            &self.config,
        )?;

        if let Some(summary) = &report.summary {
            for line in summary.log_table(self.config.log_top_n) {
                tracing::info!("{line}");
            }
        }

        Ok(report)
    }

    /// Access the configuration this analyzer runs with.
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }
}

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Resource error: cannot read {}: {source}", .path.display())]
    Resource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Index error: five-fold column index {index} is out of range for a table with {columns} columns")]
    Index { index: usize, columns: usize },

    #[error("Empty distribution: no rows satisfy the purity rule")]
    EmptyDistribution,

    #[error("Length mismatch: {what} has {got} entries, table has {expected} rows")]
    LengthMismatch {
        what: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Whether this error aborts an analysis run.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Error::EmptyDistribution)
    }
}

pub type Result<T> = std::result::Result<T, Error>;

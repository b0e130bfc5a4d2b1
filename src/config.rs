//! Analysis configuration.
//!
//! Every field has a default, so a JSON file only needs the keys it changes:
//!
//! ```json
//! { "five_fold_column": 4, "chart_top_n": 20 }
//! ```

use std::path::Path;

use serde::Deserialize;
use crate::{Error, Result};

/// Knobs for one analysis run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Zero-based column used as the numerator of the W value (`n5` → 4).
    pub five_fold_column: usize,
    /// Leading face-count columns copied into the full report; a `...`
    /// marker column is added when the table is wider.
    pub full_report_max_columns: usize,
    /// Entries in the chart series.
    pub chart_top_n: usize,
    /// Entries in the logged ranking table.
    pub log_top_n: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            five_fold_column: 4,
            full_report_max_columns: 10,
            chart_top_n: 15,
            log_top_n: 10,
        }
    }
}

impl AnalysisConfig {
    /// Read a JSON config file. Missing keys take their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| Error::Resource {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Builder-style override of the five-fold column.
    pub fn with_five_fold_column(mut self, column: usize) -> Self {
        self.five_fold_column = column;
        self
    }

    /// Reject settings no run could use. The five-fold column is checked
    /// against the table later, once its width is known.
    pub fn validate(&self) -> Result<()> {
        if self.full_report_max_columns == 0 {
            return Err(Error::Config("full_report_max_columns must be at least 1".into()));
        }
        if self.chart_top_n == 0 {
            return Err(Error::Config("chart_top_n must be at least 1".into()));
        }
        Ok(())
    }
}

//! Purity filter: which rows are clean Voronoi polyhedra.
//!
//! A row is admissible iff every low-order count (`n1`, `n2`) is zero and
//! every high-order count (`n7` onward) is zero. Inadmissible rows are not
//! removed; they keep their place and are labeled `Discarded`.

use crate::model::{IndexScheme, NeighborTable, RowIndex};
use super::map_rows;

/// One admissibility flag per table row, in row order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdmissibilityMask {
    flags: Vec<bool>,
}

/// Counts derived from an [`AdmissibilityMask`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PurityStats {
    pub admissible: usize,
    pub discarded: usize,
    pub total: usize,
}

/// Whether the table has any columns past the label window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HighOrder {
    /// Exactly the minimum column count: nothing to check.
    Absent,
    /// Columns from `start` onward must sum to zero.
    From(usize),
}

impl HighOrder {
    fn of(table: &NeighborTable, scheme: &IndexScheme) -> Self {
        let start = scheme.high_order_start();
        if table.columns() > start {
            HighOrder::From(start)
        } else {
            HighOrder::Absent
        }
    }
}

impl AdmissibilityMask {
    /// Evaluate the purity rule on every row.
    pub fn compute(table: &NeighborTable, scheme: &IndexScheme) -> Self {
        let high = HighOrder::of(table, scheme);
        let low = scheme.low_order();
        let flags = map_rows(table, |_, row| {
            let low_clean = row[low.clone()].iter().all(|&n| n == 0);
            let high_clean = match high {
                HighOrder::Absent => true,
                HighOrder::From(start) => row[start..].iter().all(|&n| n == 0),
            };
            low_clean && high_clean
        });
        Self { flags }
    }

    /// Wrap precomputed flags.
    pub fn from_flags(flags: Vec<bool>) -> Self {
        Self { flags }
    }

    pub fn is_admissible(&self, index: RowIndex) -> bool {
        self.flags[index.0]
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.flags
    }

    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    pub fn admissible_count(&self) -> usize {
        self.flags.iter().filter(|&&ok| ok).count()
    }

    pub fn stats(&self) -> PurityStats {
        let admissible = self.admissible_count();
        PurityStats {
            admissible,
            discarded: self.flags.len() - admissible,
            total: self.flags.len(),
        }
    }
}

impl PurityStats {
    /// Percentage of admissible rows; 0 for an empty table.
    pub fn purity_percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        100.0 * self.admissible as f64 / self.total as f64
    }
}

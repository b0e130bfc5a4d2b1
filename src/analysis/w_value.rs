//! Five-fold fraction ("W value") of each atom's faces.
//!
//! `W = n_k / Σ n` for a designated column `k` (usually `n5`), computed for
//! every row whether or not it passes the purity rule. A row with no faces
//! has `W = 0`.

use crate::model::{NeighborTable, row_total};
use crate::{Error, Result};
use super::map_rows;

/// One W value per table row, in row order.
#[derive(Debug, Clone, PartialEq)]
pub struct WValues {
    column: usize,
    values: Vec<f64>,
}

impl WValues {
    /// Compute W values using `column` as the five-fold column.
    pub fn compute(table: &NeighborTable, column: usize) -> Result<Self> {
        if column >= table.columns() {
            return Err(Error::Index { index: column, columns: table.columns() });
        }

        let values = map_rows(table, |_, row| w_value(row, column));
        tracing::debug!(column, rows = values.len(), "computed W values");
        Ok(Self { column, values })
    }

    /// The five-fold column these values were computed from.
    pub fn column(&self) -> usize {
        self.column
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Arithmetic mean over all rows; 0 for no rows.
    pub fn mean(&self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        self.values.iter().sum::<f64>() / self.values.len() as f64
    }
}

/// W value of one row. `column` must be in bounds.
pub fn w_value(row: &[u32], column: usize) -> f64 {
    let total = row_total(row);
    if total == 0 {
        return 0.0;
    }
    f64::from(row[column]) / total as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_row() {
        let table = NeighborTable::from_rows(vec![vec![0, 0, 2, 10, 3, 1]]).unwrap();
        let w = WValues::compute(&table, 4).unwrap();
        assert_eq!(w.as_slice(), &[0.1875]);
        assert_eq!(w.mean(), 0.1875);
    }

    #[test]
    fn test_zero_total_is_zero() {
        let table = NeighborTable::from_rows(vec![
            vec![0, 0, 0, 0, 0, 0],
            vec![0, 0, 0, 0, 12, 0],
        ]).unwrap();
        let w = WValues::compute(&table, 4).unwrap();
        assert_eq!(w.as_slice(), &[0.0, 1.0]);
        assert_eq!(w.mean(), 0.5);
    }

    #[test]
    fn test_computed_for_discarded_rows() {
        let table = NeighborTable::from_rows(vec![vec![1, 1, 0, 0, 2, 0, 4]]).unwrap();
        let w = WValues::compute(&table, 4).unwrap();
        assert_eq!(w.as_slice(), &[0.25]);
    }

    #[test]
    fn test_column_out_of_range() {
        let table = NeighborTable::from_rows(vec![vec![0, 0, 2, 10, 3, 1]]).unwrap();
        let err = WValues::compute(&table, 6).unwrap_err();
        assert!(matches!(err, Error::Index { index: 6, columns: 6 }));
        assert!(err.to_string().contains("index 6"));
        assert!(err.to_string().contains("6 columns"));
    }

    #[test]
    fn test_last_column_allowed() {
        let table = NeighborTable::from_rows(vec![vec![0, 0, 2, 10, 3, 1]]).unwrap();
        let w = WValues::compute(&table, 5).unwrap();
        assert_eq!(w.as_slice(), &[1.0 / 16.0]);
    }
}

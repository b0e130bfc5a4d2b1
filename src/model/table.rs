//! NeighborTable — the per-atom face-count matrix.

use crate::{Error, Result};
use super::IndexScheme;

/// 0-based position of a row in a [`NeighborTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RowIndex(pub usize);

impl std::fmt::Display for RowIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Rows of non-negative neighbor counts, one column per face order
/// (`n1, n2, n3, …`). Stored row-major in one flat buffer.
///
/// Invariants, checked on construction:
/// - at least one row
/// - every row has the same column count
/// - column count is at least [`IndexScheme::min_columns`] of the Voronoi scheme
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NeighborTable {
    columns: usize,
    cells: Vec<u32>,
}

impl NeighborTable {
    /// Build a table from owned rows.
    pub fn from_rows(rows: Vec<Vec<u32>>) -> Result<Self> {
        let Some(first) = rows.first() else {
            return Err(Error::Parse("table has no data rows".into()));
        };
        let columns = first.len();

        let mut cells = Vec::with_capacity(columns * rows.len());
        for (i, row) in rows.iter().enumerate() {
            if row.len() != columns {
                return Err(Error::Parse(format!(
                    "row {} has {} columns, expected {}",
                    i + 1,
                    row.len(),
                    columns
                )));
            }
            cells.extend_from_slice(row);
        }

        Self::from_flat(columns, cells)
    }

    /// Build a table from a row-major buffer of `columns`-wide rows.
    pub fn from_flat(columns: usize, cells: Vec<u32>) -> Result<Self> {
        let required = IndexScheme::VORONOI.min_columns();
        if columns < required {
            return Err(Error::Parse(format!(
                "table has {columns} columns; at least {required} (n1..n6) are required for index statistics"
            )));
        }
        if cells.is_empty() {
            return Err(Error::Parse("table has no data rows".into()));
        }
        if cells.len() % columns != 0 {
            return Err(Error::Parse(format!(
                "{} cells do not fill whole rows of {columns} columns",
                cells.len()
            )));
        }
        Ok(Self { columns, cells })
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.cells.len() / self.columns
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of columns (face orders) per row.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Borrow one row. Panics if `index` is out of bounds, like slice indexing.
    pub fn row(&self, index: RowIndex) -> &[u32] {
        let start = index.0 * self.columns;
        &self.cells[start..start + self.columns]
    }

    /// Iterate rows in order.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[u32]> + '_ {
        self.cells.chunks_exact(self.columns)
    }

    /// Iterate `(RowIndex, row)` pairs in order.
    pub fn indexed_rows(&self) -> impl ExactSizeIterator<Item = (RowIndex, &[u32])> + '_ {
        self.rows().enumerate().map(|(i, row)| (RowIndex(i), row))
    }
}

/// Total neighbor count of one row. Widened so long rows cannot overflow.
pub fn row_total(row: &[u32]) -> u64 {
    row.iter().map(|&n| u64::from(n)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows_shape() {
        let table = NeighborTable::from_rows(vec![
            vec![0, 0, 2, 10, 3, 1],
            vec![0, 0, 0, 12, 0, 0],
        ]).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.columns(), 6);
        assert_eq!(table.row(RowIndex(1)), &[0, 0, 0, 12, 0, 0]);
    }

    #[test]
    fn test_single_row_is_still_a_table() {
        let table = NeighborTable::from_rows(vec![vec![0, 0, 2, 10, 3, 1]]).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.rows().count(), 1);
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let err = NeighborTable::from_rows(vec![
            vec![0, 0, 2, 10, 3, 1],
            vec![0, 0, 2, 10, 3],
        ]).unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }

    #[test]
    fn test_too_few_columns_rejected() {
        let err = NeighborTable::from_rows(vec![vec![0, 0, 2, 10, 3]]).unwrap_err();
        assert!(err.to_string().contains("5 columns"));
    }

    #[test]
    fn test_empty_rejected() {
        assert!(matches!(NeighborTable::from_rows(vec![]), Err(Error::Parse(_))));
    }

    #[test]
    fn test_row_total() {
        assert_eq!(row_total(&[0, 0, 2, 10, 3, 1]), 16);
        assert_eq!(row_total(&[u32::MAX, u32::MAX]), 2 * u64::from(u32::MAX));
    }
}

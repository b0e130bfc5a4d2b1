//! # Analysis Stages
//!
//! Pure transformations over a resident [`NeighborTable`].
//!
//! | Stage | Module | Depends on |
//! |-------|--------|------------|
//! | W value | `w_value` | table |
//! | Purity | `purity` | table |
//! | Labels | `labeler` | table, mask |
//! | Frequencies | `frequency` | labels, admissible count |
//!
//! The three row-wise stages go through [`map_rows`], which keeps output
//! order equal to input order with or without the `parallel` feature.

pub mod w_value;
pub mod purity;
pub mod labeler;
pub mod frequency;

pub use w_value::WValues;
pub use purity::{AdmissibilityMask, PurityStats};
pub use labeler::label_rows;
pub use frequency::{FrequencyDistribution, FrequencyEntry};

use crate::model::{NeighborTable, RowIndex};

/// Map every row to one output, preserving row order.
///
/// With the `parallel` feature this is rayon's indexed `collect`, which
/// writes each result into its own slot of a pre-sized buffer.
#[cfg(feature = "parallel")]
pub(crate) fn map_rows<T, F>(table: &NeighborTable, f: F) -> Vec<T>
where
    T: Send,
    F: Fn(RowIndex, &[u32]) -> T + Sync + Send,
{
    use rayon::prelude::*;

    (0..table.len())
        .into_par_iter()
        .map(|i| {
            let index = RowIndex(i);
            f(index, table.row(index))
        })
        .collect()
}

/// Map every row to one output, preserving row order.
#[cfg(not(feature = "parallel"))]
pub(crate) fn map_rows<T, F>(table: &NeighborTable, f: F) -> Vec<T>
where
    T: Send,
    F: Fn(RowIndex, &[u32]) -> T + Sync + Send,
{
    table.indexed_rows().map(|(index, row)| f(index, row)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_rows_preserves_order() {
        let rows: Vec<Vec<u32>> = (0..257).map(|i| vec![0, 0, i, 0, 0, 0]).collect();
        let table = NeighborTable::from_rows(rows).unwrap();
        let out = map_rows(&table, |index, row| (index.0, row[2]));
        for (i, (index, n3)) in out.into_iter().enumerate() {
            assert_eq!(index, i);
            assert_eq!(n3 as usize, i);
        }
    }
}

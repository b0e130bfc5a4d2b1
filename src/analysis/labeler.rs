//! Labels rows `<n3,n4,n5,n6>` when clean, `Discarded` otherwise.

use crate::model::{IndexScheme, NeighborTable, StructuralLabel};
use crate::{Error, Result};
use super::{map_rows, AdmissibilityMask};

/// Label every row of `table` according to `mask`.
///
/// The only failure is a mask whose length disagrees with the table.
pub fn label_rows(
    table: &NeighborTable,
    mask: &AdmissibilityMask,
    scheme: &IndexScheme,
) -> Result<Vec<StructuralLabel>> {
    if mask.len() != table.len() {
        return Err(Error::LengthMismatch {
            what: "admissibility mask",
            expected: table.len(),
            got: mask.len(),
        });
    }

    Ok(map_rows(table, |index, row| {
        if mask.is_admissible(index) {
            StructuralLabel::Indexed(scheme.extract(row))
        } else {
            StructuralLabel::Discarded
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::VoronoiIndex;

    #[test]
    fn test_labels_follow_mask() {
        let table = NeighborTable::from_rows(vec![
            vec![0, 0, 2, 10, 3, 1],
            vec![1, 0, 2, 10, 3, 1],
            vec![0, 0, 0, 12, 0, 0],
        ]).unwrap();
        let mask = AdmissibilityMask::compute(&table, &IndexScheme::VORONOI);
        let labels = label_rows(&table, &mask, &IndexScheme::VORONOI).unwrap();
        assert_eq!(labels, vec![
            StructuralLabel::Indexed(VoronoiIndex([2, 10, 3, 1])),
            StructuralLabel::Discarded,
            StructuralLabel::Indexed(VoronoiIndex([0, 12, 0, 0])),
        ]);
    }

    #[test]
    fn test_discarded_regardless_of_window() {
        // Mask says no even though the window holds a valid-looking index.
        let table = NeighborTable::from_rows(vec![vec![0, 0, 0, 2, 8, 2]]).unwrap();
        let mask = AdmissibilityMask::from_flags(vec![false]);
        let labels = label_rows(&table, &mask, &IndexScheme::VORONOI).unwrap();
        assert_eq!(labels, vec![StructuralLabel::Discarded]);
    }

    #[test]
    fn test_mask_length_mismatch() {
        let table = NeighborTable::from_rows(vec![vec![0, 0, 2, 10, 3, 1]]).unwrap();
        let mask = AdmissibilityMask::from_flags(vec![true, true]);
        let err = label_rows(&table, &mask, &IndexScheme::VORONOI).unwrap_err();
        assert!(matches!(err, Error::LengthMismatch { expected: 1, got: 2, .. }));
    }
}

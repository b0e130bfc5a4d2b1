//! Structural labels: the `<n3,n4,n5,n6>` Voronoi index and its sentinel.

use std::fmt;

/// Export text for rows that fail the purity rule.
pub const DISCARDED_LABEL: &str = "Discarded";

/// Number of face orders in a Voronoi index.
pub const INDEX_WIDTH: usize = 4;

/// Which columns form the structural index.
///
/// Columns before the window are the low-order range, columns after it are
/// the high-order range. Both must be all-zero for a row to be labeled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexScheme {
    first: usize,
}

impl IndexScheme {
    /// `<n3,n4,n5,n6>`: columns 2..6, low-order `n1,n2`, high-order `n7+`.
    pub const VORONOI: IndexScheme = IndexScheme { first: 2 };

    /// Columns that must be zero below the window.
    pub fn low_order(&self) -> std::ops::Range<usize> {
        0..self.first
    }

    /// Columns that form the label, in label order.
    pub fn window(&self) -> std::ops::Range<usize> {
        self.first..self.first + INDEX_WIDTH
    }

    /// First column of the high-order range.
    pub fn high_order_start(&self) -> usize {
        self.first + INDEX_WIDTH
    }

    /// Smallest column count the scheme can be evaluated on.
    pub fn min_columns(&self) -> usize {
        self.high_order_start()
    }

    /// Copy the window out of `row`.
    pub fn extract(&self, row: &[u32]) -> VoronoiIndex {
        let mut faces = [0u32; INDEX_WIDTH];
        faces.copy_from_slice(&row[self.window()]);
        VoronoiIndex(faces)
    }
}

/// A Voronoi structural index `<n3,n4,n5,n6>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VoronoiIndex(pub [u32; INDEX_WIDTH]);

impl fmt::Display for VoronoiIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.0;
        write!(f, "<{a},{b},{c},{d}>")
    }
}

/// Per-row classification result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StructuralLabel {
    /// Row passed the purity rule.
    Indexed(VoronoiIndex),
    /// Row failed the purity rule; kept in the full report only.
    Discarded,
}

impl StructuralLabel {
    pub fn index(&self) -> Option<&VoronoiIndex> {
        match self {
            StructuralLabel::Indexed(index) => Some(index),
            StructuralLabel::Discarded => None,
        }
    }

    pub fn is_discarded(&self) -> bool {
        matches!(self, StructuralLabel::Discarded)
    }
}

impl fmt::Display for StructuralLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StructuralLabel::Indexed(index) => fmt::Display::fmt(index, f),
            StructuralLabel::Discarded => f.write_str(DISCARDED_LABEL),
        }
    }
}

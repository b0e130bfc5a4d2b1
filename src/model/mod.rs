//! # Analysis Model
//!
//! Plain DTOs shared by every pipeline stage.
//! These types cross every boundary: loader ↔ analysis ↔ report ↔ export.
//!
//! Design rule: no I/O, no state, no logging here.

pub mod table;
pub mod label;

pub use table::{NeighborTable, RowIndex, row_total};
pub use label::{
    IndexScheme, VoronoiIndex, StructuralLabel,
    DISCARDED_LABEL, INDEX_WIDTH,
};

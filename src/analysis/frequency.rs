//! Frequency aggregation over Voronoi indices.
//!
//! Only `Indexed` labels are counted; `Discarded` rows are excluded from both
//! the counts and the denominator. Entries are ranked by count, descending,
//! with ties kept in the order the index first appeared in the table.

use hashbrown::HashMap;
use crate::model::{StructuralLabel, VoronoiIndex};
use crate::{Error, Result};

/// One ranked row of the distribution.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyEntry {
    pub label: VoronoiIndex,
    pub count: usize,
    /// Percent of admissible rows, `100 × count / admissible`.
    pub fraction: f64,
}

/// Ranked distribution of Voronoi indices among admissible rows.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyDistribution {
    admissible: usize,
    entries: Vec<FrequencyEntry>,
}

impl FrequencyDistribution {
    /// Count `labels` and rank them.
    ///
    /// Returns [`Error::EmptyDistribution`] when `admissible` is zero, and
    /// [`Error::LengthMismatch`] when the number of `Indexed` labels does
    /// not equal `admissible`.
    pub fn build(labels: &[StructuralLabel], admissible: usize) -> Result<Self> {
        if admissible == 0 {
            return Err(Error::EmptyDistribution);
        }

        // index → slot in `tally`, which is in first-appearance order
        let mut slots: HashMap<VoronoiIndex, usize> = HashMap::new();
        let mut tally: Vec<(VoronoiIndex, usize)> = Vec::new();
        for index in labels.iter().filter_map(StructuralLabel::index) {
            let slot = *slots.entry(*index).or_insert_with(|| {
                tally.push((*index, 0));
                tally.len() - 1
            });
            tally[slot].1 += 1;
        }

        let counted: usize = tally.iter().map(|(_, n)| n).sum();
        if counted != admissible {
            return Err(Error::LengthMismatch {
                what: "indexed labels",
                expected: admissible,
                got: counted,
            });
        }

        // Stable: equal counts keep first-appearance order.
        tally.sort_by(|a, b| b.1.cmp(&a.1));

        let entries = tally
            .into_iter()
            .map(|(label, count)| FrequencyEntry {
                label,
                count,
                fraction: 100.0 * count as f64 / admissible as f64,
            })
            .collect();

        Ok(Self { admissible, entries })
    }

    /// Number of admissible rows the fractions are relative to.
    pub fn admissible(&self) -> usize {
        self.admissible
    }

    /// All entries, rank order.
    pub fn entries(&self) -> &[FrequencyEntry] {
        &self.entries
    }

    /// The `n` highest-ranked entries (fewer if there are not that many).
    pub fn top(&self, n: usize) -> &[FrequencyEntry] {
        &self.entries[..n.min(self.entries.len())]
    }

    /// Number of distinct indices.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_entries(self) -> Vec<FrequencyEntry> {
        self.entries
    }
}

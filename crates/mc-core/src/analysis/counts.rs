//! Count tables produced by the analyzer.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::face::Face;

/// Per-roll face tallies: one row per roll, one column per face.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FaceCounts {
    faces: Vec<Face>,
    rows: Vec<Vec<usize>>,
}

impl FaceCounts {
    pub(crate) fn tally<'a>(faces: &[Face], rolls: impl Iterator<Item = &'a [Face]>) -> Self {
        let rows = rolls
            .map(|roll| {
                faces
                    .iter()
                    .map(|face| roll.iter().filter(|f| *f == face).count())
                    .collect()
            })
            .collect();
        Self {
            faces: faces.to_vec(),
            rows,
        }
    }

    /// Column headers, in the first die's face order.
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Number of rolls (rows).
    pub fn rolls(&self) -> usize {
        self.rows.len()
    }

    /// Counts for one roll, aligned with [`faces`](Self::faces).
    pub fn row(&self, roll: usize) -> Option<&[usize]> {
        self.rows.get(roll).map(Vec::as_slice)
    }

    /// Iterate over rolls.
    pub fn rows(&self) -> impl Iterator<Item = &[usize]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// How many times `face` showed on `roll`.
    pub fn count(&self, roll: usize, face: &Face) -> Option<usize> {
        let col = self.faces.iter().position(|f| f == face)?;
        self.rows.get(roll).map(|row| row[col])
    }

    /// How many times `face` showed across all rolls.
    pub fn total(&self, face: &Face) -> Option<usize> {
        let col = self.faces.iter().position(|f| f == face)?;
        Some(self.rows.iter().map(|row| row[col]).sum())
    }
}

/// One distinct outcome tuple and how many rolls produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutcomeCount {
    /// The outcome, one face per die position.
    pub outcome: Vec<Face>,
    /// Number of rolls with this outcome.
    pub count: usize,
}

/// Frequency table of distinct roll outcomes.
///
/// Rows are ordered by descending count, ties by ascending outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutcomeCounts {
    key_names: Vec<String>,
    rows: Vec<OutcomeCount>,
}

impl OutcomeCounts {
    pub(crate) fn tally(dice: usize, outcomes: impl Iterator<Item = Vec<Face>>) -> Self {
        let mut counts: BTreeMap<Vec<Face>, usize> = BTreeMap::new();
        for outcome in outcomes {
            *counts.entry(outcome).or_default() += 1;
        }

        let mut rows: Vec<OutcomeCount> = counts
            .into_iter()
            .map(|(outcome, count)| OutcomeCount { outcome, count })
            .collect();
        // Stable: equal counts keep the map's ascending key order.
        rows.sort_by(|a, b| b.count.cmp(&a.count));

        Self {
            key_names: (1..=dice).map(|i| format!("Die_{i}")).collect(),
            rows,
        }
    }

    /// Key column names: `Die_1`, `Die_2`, ...
    pub fn key_names(&self) -> &[String] {
        &self.key_names
    }

    /// Number of distinct outcomes.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if no outcomes were counted.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterate over rows.
    pub fn iter(&self) -> std::slice::Iter<'_, OutcomeCount> {
        self.rows.iter()
    }

    /// Count for an exact outcome tuple.
    pub fn get(&self, outcome: &[Face]) -> Option<usize> {
        self.rows
            .iter()
            .find(|r| r.outcome == outcome)
            .map(|r| r.count)
    }

    /// Sum of all counts, i.e. the number of rolls.
    pub fn total(&self) -> usize {
        self.rows.iter().map(|r| r.count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn faces(values: &[i64]) -> Vec<Face> {
        values.iter().copied().map(Face::Int).collect()
    }

    #[test]
    fn face_tally() {
        let rolls = [faces(&[1, 1, 3]), faces(&[2, 3, 1])];
        let counts = FaceCounts::tally(&faces(&[1, 2, 3, 4]), rolls.iter().map(Vec::as_slice));
        assert_eq!(counts.rolls(), 2);
        assert_eq!(counts.row(0).unwrap(), &[2, 0, 1, 0]);
        assert_eq!(counts.row(1).unwrap(), &[1, 1, 1, 0]);
        assert_eq!(counts.count(0, &Face::Int(1)), Some(2));
        assert_eq!(counts.count(0, &Face::Int(9)), None);
        assert_eq!(counts.total(&Face::Int(1)), Some(3));
        assert_eq!(counts.total(&Face::Int(4)), Some(0));
    }

    #[test]
    fn outcome_order() {
        let outcomes = vec![
            faces(&[2, 1]),
            faces(&[1, 2]),
            faces(&[2, 1]),
            faces(&[1, 1]),
        ];
        let counts = OutcomeCounts::tally(2, outcomes.into_iter());
        let ordered: Vec<(Vec<Face>, usize)> = counts
            .iter()
            .map(|r| (r.outcome.clone(), r.count))
            .collect();
        assert_eq!(
            ordered,
            vec![
                (faces(&[2, 1]), 2),
                (faces(&[1, 1]), 1),
                (faces(&[1, 2]), 1),
            ]
        );
        assert_eq!(counts.key_names(), &["Die_1", "Die_2"]);
        assert_eq!(counts.total(), 4);
        assert_eq!(counts.get(&faces(&[1, 2])), Some(1));
        assert_eq!(counts.get(&faces(&[3, 3])), None);
    }
}

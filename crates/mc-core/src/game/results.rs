//! Roll result tables and their wide/narrow shapes.

use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::{McError, McResult};
use crate::face::Face;

/// Rolls × dice table of outcomes, stored row-major.
///
/// Row `r` holds the faces every die showed on roll `r`; column `d` holds
/// every outcome of die `d`. Serializes as a list of rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollTable {
    dice: usize,
    cells: Vec<Face>,
}

impl RollTable {
    /// Build a table from one outcome sequence per die.
    ///
    /// All columns must be the same, non-zero length.
    pub fn from_columns(columns: Vec<Vec<Face>>) -> McResult<Self> {
        let dice = columns.len();
        let rolls = columns.first().map_or(0, Vec::len);
        if dice == 0 || rolls == 0 {
            return Err(McError::InvalidResults("table has no outcomes".into()));
        }
        if let Some((i, col)) = columns.iter().enumerate().find(|(_, c)| c.len() != rolls) {
            return Err(McError::InvalidResults(format!(
                "die {i} has {} outcomes, expected {rolls}",
                col.len()
            )));
        }

        let mut cells = Vec::with_capacity(dice * rolls);
        for roll in 0..rolls {
            for column in &columns {
                cells.push(column[roll].clone());
            }
        }
        Ok(Self { dice, cells })
    }

    /// Build a table from one outcome row per roll.
    ///
    /// All rows must be the same, non-zero length.
    pub fn from_rows(rows: Vec<Vec<Face>>) -> McResult<Self> {
        let dice = rows.first().map_or(0, Vec::len);
        if dice == 0 {
            return Err(McError::InvalidResults("table has no outcomes".into()));
        }
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != dice) {
            return Err(McError::InvalidResults(format!(
                "roll {i} has {} outcomes, expected {dice}",
                row.len()
            )));
        }
        Ok(Self {
            dice,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    /// A table where every roll shows `row`, repeated `rolls` times.
    pub fn repeated(row: &[Face], rolls: usize) -> McResult<Self> {
        Self::from_rows(vec![row.to_vec(); rolls])
    }

    /// Number of rolls (rows).
    pub fn rolls(&self) -> usize {
        self.cells.len() / self.dice
    }

    /// Number of dice (columns).
    pub fn dice(&self) -> usize {
        self.dice
    }

    /// `(rolls, dice)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rolls(), self.dice)
    }

    /// Outcome of one die on one roll.
    pub fn get(&self, roll: usize, die: usize) -> Option<&Face> {
        if die >= self.dice {
            return None;
        }
        let index = roll.checked_mul(self.dice)?.checked_add(die)?;
        self.cells.get(index)
    }

    /// All outcomes of one roll, in die order.
    pub fn row(&self, roll: usize) -> Option<&[Face]> {
        let start = roll.checked_mul(self.dice)?;
        let end = start.checked_add(self.dice)?;
        self.cells.get(start..end)
    }

    /// Iterate over rolls.
    pub fn rows(&self) -> std::slice::Chunks<'_, Face> {
        self.cells.chunks(self.dice)
    }

    /// All outcomes of one die, in roll order.
    pub fn column(&self, die: usize) -> Option<Vec<Face>> {
        if die >= self.dice {
            return None;
        }
        Some(self.rows().map(|row| row[die].clone()).collect())
    }

    /// Every cell, row-major.
    pub fn cells(&self) -> &[Face] {
        &self.cells
    }

    /// Reshape to one row per `(roll, die)` pair, roll-major.
    pub fn to_narrow(&self) -> NarrowTable {
        let rows = self
            .rows()
            .enumerate()
            .flat_map(|(roll, faces)| {
                faces.iter().enumerate().map(move |(die, face)| NarrowRow {
                    roll,
                    die,
                    face: face.clone(),
                })
            })
            .collect();
        NarrowTable { rows }
    }
}

impl Serialize for RollTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.rows())
    }
}

/// One `(roll, die, face)` record of a narrow table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NarrowRow {
    /// Roll index, 0-based.
    pub roll: usize,
    /// Die index, 0-based.
    pub die: usize,
    /// The face shown.
    pub face: Face,
}

/// Results with one row per `(roll, die)` pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NarrowTable {
    /// Rows in roll-major order.
    pub rows: Vec<NarrowRow>,
}

impl NarrowTable {
    /// Face shown by `die` on `roll`.
    pub fn get(&self, roll: usize, die: usize) -> Option<&Face> {
        self.rows
            .iter()
            .find(|r| r.roll == roll && r.die == die)
            .map(|r| &r.face)
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if there are no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterate over the rows.
    pub fn iter(&self) -> std::slice::Iter<'_, NarrowRow> {
        self.rows.iter()
    }
}

/// Shape in which [`Game::show_results`](super::Game::show_results) returns
/// results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ResultForm {
    /// Rolls × dice.
    #[default]
    Wide,
    /// One row per `(roll, die)`.
    Narrow,
}

impl FromStr for ResultForm {
    type Err = McError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "wide" => Ok(Self::Wide),
            "narrow" => Ok(Self::Narrow),
            _ => Err(McError::InvalidForm(s.to_string())),
        }
    }
}

impl std::fmt::Display for ResultForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Wide => write!(f, "wide"),
            Self::Narrow => write!(f, "narrow"),
        }
    }
}

/// Results in the requested shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Results {
    /// Rolls × dice.
    Wide(RollTable),
    /// One row per `(roll, die)`.
    Narrow(NarrowTable),
}

impl Results {
    /// The wide table, if this is one.
    pub fn as_wide(&self) -> Option<&RollTable> {
        match self {
            Self::Wide(t) => Some(t),
            Self::Narrow(_) => None,
        }
    }

    /// The narrow table, if this is one.
    pub fn as_narrow(&self) -> Option<&NarrowTable> {
        match self {
            Self::Wide(_) => None,
            Self::Narrow(t) => Some(t),
        }
    }
}

//! Statistics over a game's recorded rolls.
//!
//! An [`Analyzer`] borrows a [`Game`] and reads its results each time a
//! statistic is requested:
//! - **Jackpots**: rolls where every die shows the same face
//! - **Face counts**: how often each face appears within each roll
//! - **Combinations**: distinct outcomes ignoring die order
//! - **Permutations**: distinct outcomes in die order

pub mod counts;

pub use counts::{FaceCounts, OutcomeCount, OutcomeCounts};

use crate::error::{McError, McResult};
use crate::game::{Game, RollTable};

/// Computes statistics over a game's most recent results.
#[derive(Debug, Clone, Copy)]
pub struct Analyzer<'g> {
    game: &'g Game,
}

impl<'g> Analyzer<'g> {
    /// Analyze `game`. Nothing is read until a statistic is requested.
    pub fn new(game: &'g Game) -> Self {
        Self { game }
    }

    /// The game being analyzed.
    pub fn game(&self) -> &'g Game {
        self.game
    }

    fn results(&self) -> McResult<&'g RollTable> {
        self.game.results().ok_or(McError::NotPlayed)
    }

    /// Number of rolls where every die shows the same face.
    pub fn jackpot_count(&self) -> McResult<usize> {
        Ok(self.jackpot_rolls()?.len())
    }

    /// Indices of the jackpot rolls, ascending.
    pub fn jackpot_rolls(&self) -> McResult<Vec<usize>> {
        let table = self.results()?;
        Ok(table
            .rows()
            .enumerate()
            .filter(|(_, row)| row.iter().all(|f| *f == row[0]))
            .map(|(i, _)| i)
            .collect())
    }

    /// How many times each face shows within each roll.
    ///
    /// Columns follow the first die's face order; faces absent from a roll
    /// count zero.
    pub fn face_counts_per_roll(&self) -> McResult<FaceCounts> {
        let table = self.results()?;
        Ok(FaceCounts::tally(self.game.faces(), table.rows()))
    }

    /// Frequency of each distinct combination, ignoring which die showed
    /// which face.
    pub fn combo_count(&self) -> McResult<OutcomeCounts> {
        let table = self.results()?;
        let combos = table.rows().map(|row| {
            let mut sorted = row.to_vec();
            sorted.sort();
            sorted
        });
        Ok(OutcomeCounts::tally(table.dice(), combos))
    }

    /// Frequency of each distinct permutation, in die order.
    pub fn permutation_count(&self) -> McResult<OutcomeCounts> {
        let table = self.results()?;
        Ok(OutcomeCounts::tally(
            table.dice(),
            table.rows().map(<[_]>::to_vec),
        ))
    }
}

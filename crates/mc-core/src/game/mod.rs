//! Games: several dice with the same faces rolled together.

pub mod results;

pub use results::{NarrowRow, NarrowTable, ResultForm, Results, RollTable};

use log::{debug, warn};
use rand::Rng;

use crate::dice::Die;
use crate::error::{McError, McResult};
use crate::face::Face;

/// A set of dice rolled in lockstep.
///
/// Owns its dice and the results table of the most recent [`play`](Self::play).
/// Each play replaces the previous results.
#[derive(Debug, Clone)]
pub struct Game {
    dice: Vec<Die>,
    results: Option<RollTable>,
}

impl Game {
    /// Create a game from one or more dice that share the same faces.
    ///
    /// Face order may differ between dice; the face sets must match.
    pub fn new(dice: Vec<Die>) -> McResult<Self> {
        let first = dice.first().ok_or(McError::NoDice)?;
        if let Some(index) = dice.iter().position(|d| !d.same_faces(first)) {
            return Err(McError::MismatchedFaces { index });
        }
        debug!(
            "new game with {} dice of {} faces",
            dice.len(),
            first.sides()
        );
        Ok(Self {
            dice,
            results: None,
        })
    }

    /// The dice, in column order.
    pub fn dice(&self) -> &[Die] {
        &self.dice
    }

    /// Mutable access to one die, for reweighting between plays.
    pub fn die_mut(&mut self, index: usize) -> Option<&mut Die> {
        self.dice.get_mut(index)
    }

    /// Number of dice.
    pub fn die_count(&self) -> usize {
        self.dice.len()
    }

    /// The shared faces, in the first die's order.
    pub fn faces(&self) -> &[Face] {
        self.dice[0].faces()
    }

    /// Returns true once results exist.
    pub fn is_played(&self) -> bool {
        self.results.is_some()
    }

    /// The wide results of the last play, if any.
    pub fn results(&self) -> Option<&RollTable> {
        self.results.as_ref()
    }

    /// Roll every die `rolls` times and store the outcomes.
    ///
    /// Each die is rolled independently. Column `i` of the stored table is
    /// die `i`'s outcomes; row `j` is roll `j`. Previous results are kept if
    /// any die fails to roll.
    pub fn play<R: Rng + ?Sized>(&mut self, rolls: usize, rng: &mut R) -> McResult<()> {
        if rolls < 1 {
            return Err(McError::InvalidRollCount(rolls));
        }
        let columns = self
            .dice
            .iter()
            .map(|die| die.roll(rolls, rng))
            .collect::<McResult<Vec<_>>>()?;
        self.results = Some(RollTable::from_columns(columns)?);
        debug!("played {rolls} rolls with {} dice", self.dice.len());
        Ok(())
    }

    /// A copy of the last results in the requested form.
    pub fn show_results(&self, form: ResultForm) -> McResult<Results> {
        let table = self.results.as_ref().ok_or(McError::NoResults)?;
        Ok(match form {
            ResultForm::Wide => Results::Wide(table.clone()),
            ResultForm::Narrow => Results::Narrow(table.to_narrow()),
        })
    }

    /// Replace the results with a prepared table.
    ///
    /// The table must have one column per die and only contain faces of this
    /// game.
    pub fn set_results(&mut self, table: RollTable) -> McResult<()> {
        if table.dice() != self.dice.len() {
            return Err(McError::InvalidResults(format!(
                "table has {} columns, game has {} dice",
                table.dice(),
                self.dice.len()
            )));
        }
        let faces = self.faces();
        if let Some(face) = table.cells().iter().find(|f| !faces.contains(f)) {
            return Err(McError::InvalidResults(format!(
                "face {face} is not on these dice"
            )));
        }
        if self.results.is_some() {
            warn!("replacing existing results with a prepared table");
        }
        self.results = Some(table);
        Ok(())
    }
}

//! Game configuration: faces, dice, weights, roll count, and seed.
//!
//! A [`GameConfig`] can be built in code or loaded from JSON:
//!
//! ```json
//! {
//!   "faces": [1, 2, 3, 4, 5, 6],
//!   "dice": 3,
//!   "rolls": 100,
//!   "seed": 7,
//!   "weights": [
//!     { "face": 6, "weight": 5 },
//!     { "die": 0, "face": 1, "weight": "0.5" }
//!   ]
//! }
//! ```

use std::str::FromStr;

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::dice::{Die, WeightInput};
use crate::error::{McError, McResult};
use crate::face::{Face, parse_face};
use crate::game::Game;

/// A weight applied to one face of one die, or of every die.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightOverride {
    /// Die index, or `None` for every die.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub die: Option<usize>,
    /// The face to reweight.
    pub face: Face,
    /// The new weight.
    pub weight: WeightInput,
}

/// Parses `FACE=WEIGHT`, applying to every die.
impl FromStr for WeightOverride {
    type Err = McError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (face, weight) = s
            .split_once('=')
            .ok_or_else(|| McError::InvalidConfig(format!("expected FACE=WEIGHT, got \"{s}\"")))?;
        Ok(Self {
            die: None,
            face: parse_face(face),
            weight: WeightInput::Text(weight.trim().to_string()),
        })
    }
}

/// Configuration for building and playing a game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Faces shared by every die.
    pub faces: Vec<Face>,
    /// Number of dice.
    pub dice: usize,
    /// Rolls per play.
    pub rolls: usize,
    /// RNG seed for reproducible plays.
    pub seed: u64,
    /// Weight changes applied after the dice are created, in order.
    pub weights: Vec<WeightOverride>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            faces: (1..=6).map(Face::Int).collect(),
            dice: 2,
            rolls: 10,
            seed: 42,
            weights: Vec::new(),
        }
    }
}

impl GameConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> McResult<Self> {
        serde_json::from_str(json).map_err(|e| McError::InvalidConfig(e.to_string()))
    }

    /// Render the configuration as pretty-printed JSON.
    pub fn to_json(&self) -> McResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| McError::InvalidConfig(e.to_string()))
    }

    /// Set the faces shared by every die.
    pub fn with_faces(mut self, faces: Vec<Face>) -> Self {
        self.faces = faces;
        self
    }

    /// Set the number of dice.
    pub fn with_dice(mut self, dice: usize) -> Self {
        self.dice = dice;
        self
    }

    /// Set the number of rolls per play.
    pub fn with_rolls(mut self, rolls: usize) -> Self {
        self.rolls = rolls;
        self
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Append a weight override.
    pub fn with_weight(mut self, weight: WeightOverride) -> Self {
        self.weights.push(weight);
        self
    }

    /// A fresh RNG seeded from [`seed`](Self::seed).
    pub fn rng(&self) -> StdRng {
        StdRng::seed_from_u64(self.seed)
    }

    /// Build die `index` with every override that applies to it.
    pub fn build_die(&self, index: usize) -> McResult<Die> {
        let mut die = Die::new(self.faces.iter().cloned())?;
        for w in &self.weights {
            if w.die.is_none_or(|d| d == index) {
                die.set_weight(&w.face, w.weight.clone())?;
            }
        }
        Ok(die)
    }

    /// Build an unplayed game.
    pub fn build_game(&self) -> McResult<Game> {
        if let Some(w) = self.weights.iter().find(|w| w.die.is_some_and(|d| d >= self.dice)) {
            return Err(McError::InvalidConfig(format!(
                "weight for face {} targets die {}, but there are only {} dice",
                w.face,
                w.die.unwrap_or_default(),
                self.dice
            )));
        }
        let dice = (0..self.dice)
            .map(|i| self.build_die(i))
            .collect::<McResult<Vec<_>>>()?;
        Game::new(dice)
    }

    /// Build a game and play it once with the configured rolls and seed.
    pub fn play(&self) -> McResult<Game> {
        let mut game = self.build_game()?;
        game.play(self.rolls, &mut self.rng())?;
        Ok(game)
    }
}

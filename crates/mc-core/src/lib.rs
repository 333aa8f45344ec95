//! Monte Carlo dice engine.
//!
//! Provides weighted dice with arbitrary integer or text faces, games that
//! roll several matching dice in lockstep, and an analyzer that reports
//! jackpots, per-roll face counts, combinations, and permutations.
//!
//! ```
//! use mc_core::{Analyzer, Die, Game};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! # fn main() -> mc_core::McResult<()> {
//! let mut loaded = Die::numbered(6)?;
//! loaded.set_weight(6, 5)?;
//!
//! let mut game = Game::new(vec![loaded, Die::numbered(6)?, Die::numbered(6)?])?;
//! game.play(1000, &mut StdRng::seed_from_u64(42))?;
//!
//! let analyzer = Analyzer::new(&game);
//! println!("{} jackpots", analyzer.jackpot_count()?);
//! # Ok(())
//! # }
//! ```

pub mod analysis;
pub mod config;
pub mod dice;
pub mod error;
pub mod face;
pub mod game;

pub use analysis::{Analyzer, FaceCounts, OutcomeCount, OutcomeCounts};
pub use config::{GameConfig, WeightOverride};
pub use dice::{Die, FaceWeight, WeightInput, WeightTable};
pub use error::{ErrorKind, McError, McResult};
pub use face::{Face, parse_faces};
pub use game::{Game, NarrowRow, NarrowTable, ResultForm, Results, RollTable};

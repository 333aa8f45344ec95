//! Error types for the dice engine.

use crate::face::Face;

/// Broad category of a [`McError`].
///
/// Callers that only care about *what sort* of mistake was made (wrong input
/// type, bad value, missing key, or wrong call order) can match on this
/// instead of the individual variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Input had the wrong type.
    Type,
    /// Input had the right type but an invalid value, or the object is in a
    /// state that cannot satisfy the request.
    Value,
    /// A referenced key does not exist.
    Lookup,
    /// An operation was invoked before its required prior state exists.
    Runtime,
}

/// Errors that can occur while building, rolling, or analyzing dice.
#[derive(Debug, thiserror::Error)]
pub enum McError {
    /// Faces mix integer and text values.
    #[error("faces must all be the same kind, found {first} and {other}")]
    MixedFaces {
        /// Kind of the first face.
        first: &'static str,
        /// The first differing kind.
        other: &'static str,
    },

    /// A die was created without any faces.
    #[error("a die needs at least one face")]
    NoFaces,

    /// A float face is NaN or infinite.
    #[error("faces must be finite numbers, got {0}")]
    NonFiniteFace(f64),

    /// The same face appears more than once on a die.
    #[error("all faces must be distinct, {0} appears more than once")]
    DuplicateFace(Face),

    /// The face is not on the die.
    #[error("face {0} is not on this die")]
    FaceNotFound(Face),

    /// A text weight could not be parsed as a number.
    #[error("weight must be numeric, got \"{0}\"")]
    NonNumericWeight(String),

    /// A weight was negative, NaN, or infinite.
    #[error("weight must be a finite, non-negative number, got {0}")]
    InvalidWeight(f64),

    /// Every weight on the die is zero, so nothing can be drawn.
    #[error("total weight must be positive")]
    ZeroTotalWeight,

    /// The weights are individually valid but their sum overflows.
    #[error("total weight is too large to sample from")]
    WeightOverflow,

    /// The sampling distribution could not be built from the weights.
    #[error("cannot sample from weights: {0}")]
    Distribution(String),

    /// A roll count below one was requested.
    #[error("number of rolls must be at least 1, got {0}")]
    InvalidRollCount(usize),

    /// A game was created without any dice.
    #[error("a game needs at least one die")]
    NoDice,

    /// Dice in a game do not share the same set of faces.
    #[error("all dice must have identical faces (die {index} differs from die 0)")]
    MismatchedFaces {
        /// Position of the first die whose faces differ.
        index: usize,
    },

    /// Results were requested before the game was played.
    #[error("no results yet, play the game first")]
    NoResults,

    /// The results form is neither `wide` nor `narrow`.
    #[error("results form must be either 'wide' or 'narrow', got \"{0}\"")]
    InvalidForm(String),

    /// A forced results table does not fit the game.
    #[error("invalid results table: {0}")]
    InvalidResults(String),

    /// Analysis was requested before the game was played.
    #[error("game has no results, play the game first")]
    NotPlayed,

    /// A configuration value is out of range or malformed.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

impl McError {
    /// The broad category this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MixedFaces { .. } | Self::NonNumericWeight(_) => ErrorKind::Type,
            Self::FaceNotFound(_) => ErrorKind::Lookup,
            Self::NotPlayed => ErrorKind::Runtime,
            Self::NoFaces
            | Self::NonFiniteFace(_)
            | Self::DuplicateFace(_)
            | Self::InvalidWeight(_)
            | Self::ZeroTotalWeight
            | Self::WeightOverflow
            | Self::Distribution(_)
            | Self::InvalidRollCount(_)
            | Self::NoDice
            | Self::MismatchedFaces { .. }
            | Self::NoResults
            | Self::InvalidForm(_)
            | Self::InvalidResults(_)
            | Self::InvalidConfig(_) => ErrorKind::Value,
        }
    }
}

/// Convenience result type for dice operations.
pub type McResult<T> = Result<T, McError>;

//! Weighted dice.
//!
//! A [`Die`] owns a fixed list of distinct faces, each with a mutable,
//! non-negative weight that starts at 1.0. Rolling draws faces with
//! probability proportional to their weight.

pub mod weight;

pub use weight::{FaceWeight, WeightInput, WeightTable};

use std::collections::HashSet;

use log::trace;
use rand::Rng;
use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;

use crate::error::{McError, McResult};
use crate::face::Face;

/// A die with distinct faces and per-face weights.
#[derive(Debug, Clone, PartialEq)]
pub struct Die {
    faces: Vec<Face>,
    weights: Vec<f64>,
}

impl Die {
    /// Create a die from a list of distinct faces, all weighted 1.0.
    ///
    /// Faces must be non-empty, all the same kind (numbers or text), finite,
    /// and pairwise distinct.
    pub fn new(faces: impl IntoIterator<Item = impl Into<Face>>) -> McResult<Self> {
        let faces: Vec<Face> = faces.into_iter().map(Into::into).collect();
        let first = faces.first().ok_or(McError::NoFaces)?;

        if let Some(other) = faces.iter().find(|f| !f.same_kind(first)) {
            return Err(McError::MixedFaces {
                first: first.kind_name(),
                other: other.kind_name(),
            });
        }

        let non_finite = faces.iter().find_map(|f| match f {
            Face::Float(x) if !x.is_finite() => Some(*x),
            _ => None,
        });
        if let Some(x) = non_finite {
            return Err(McError::NonFiniteFace(x));
        }

        let mut seen = HashSet::with_capacity(faces.len());
        for face in &faces {
            if !seen.insert(face) {
                return Err(McError::DuplicateFace(face.clone()));
            }
        }

        let weights = vec![1.0; faces.len()];
        Ok(Self { faces, weights })
    }

    /// Create a die numbered `1..=sides`.
    pub fn numbered(sides: u32) -> McResult<Self> {
        Self::new((1..=i64::from(sides)).map(Face::Int))
    }

    /// The faces in creation order.
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Number of faces.
    pub fn sides(&self) -> usize {
        self.faces.len()
    }

    /// Returns true if the face is on this die.
    pub fn has_face(&self, face: &Face) -> bool {
        self.index_of(face).is_some()
    }

    /// Current weight of a face, or `None` if the face is not on the die.
    pub fn weight(&self, face: &Face) -> Option<f64> {
        self.index_of(face).map(|i| self.weights[i])
    }

    /// Sum of all face weights.
    pub fn total_weight(&self) -> f64 {
        self.weights.iter().sum()
    }

    /// Replace the weight of one face.
    ///
    /// The weight may be a number or numeric text. Nothing changes if the face
    /// is missing or the weight is rejected.
    pub fn set_weight(
        &mut self,
        face: impl Into<Face>,
        weight: impl Into<WeightInput>,
    ) -> McResult<()> {
        let face = face.into();
        let index = self
            .index_of(&face)
            .ok_or_else(|| McError::FaceNotFound(face.clone()))?;
        let weight = weight.into().resolve()?;
        trace!("die face {face} weight {} -> {weight}", self.weights[index]);
        self.weights[index] = weight;
        Ok(())
    }

    /// Roll the die `n` times and return the faces in draw order.
    ///
    /// Draws are independent and with replacement, each face chosen with
    /// probability `weight / total_weight`.
    pub fn roll<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> McResult<Vec<Face>> {
        if n < 1 {
            return Err(McError::InvalidRollCount(n));
        }
        let dist = self.distribution()?;
        let outcomes: Vec<Face> = (0..n)
            .map(|_| self.faces[dist.sample(rng)].clone())
            .collect();
        trace!("rolled {n} faces from a {}-sided die", self.sides());
        Ok(outcomes)
    }

    /// Roll the die once.
    pub fn roll_once<R: Rng + ?Sized>(&self, rng: &mut R) -> McResult<Face> {
        let dist = self.distribution()?;
        Ok(self.faces[dist.sample(rng)].clone())
    }

    /// An owned copy of the face → weight table.
    pub fn snapshot(&self) -> WeightTable {
        WeightTable {
            entries: self
                .faces
                .iter()
                .zip(&self.weights)
                .map(|(face, &weight)| FaceWeight {
                    face: face.clone(),
                    weight,
                })
                .collect(),
        }
    }

    /// The face → probability table implied by the current weights.
    pub fn probabilities(&self) -> McResult<WeightTable> {
        let total = self.checked_total()?;
        let mut table = self.snapshot();
        for entry in &mut table.entries {
            entry.weight /= total;
        }
        Ok(table)
    }

    /// Returns true if both dice carry the same set of faces, ignoring order.
    pub fn same_faces(&self, other: &Die) -> bool {
        self.faces.len() == other.faces.len()
            && self.faces.iter().collect::<HashSet<_>>()
                == other.faces.iter().collect::<HashSet<_>>()
    }

    fn index_of(&self, face: &Face) -> Option<usize> {
        self.faces.iter().position(|f| f == face)
    }

    /// The total weight, if it is positive and finite.
    fn checked_total(&self) -> McResult<f64> {
        let total = self.total_weight();
        if !total.is_finite() {
            return Err(McError::WeightOverflow);
        }
        if total <= 0.0 {
            return Err(McError::ZeroTotalWeight);
        }
        Ok(total)
    }

    fn distribution(&self) -> McResult<WeightedIndex<f64>> {
        self.checked_total()?;
        WeightedIndex::new(&self.weights).map_err(|e| McError::Distribution(e.to_string()))
    }
}

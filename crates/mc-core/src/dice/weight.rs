//! Face weights: the input union accepted from callers and the owned tables
//! handed back to them.

use serde::{Deserialize, Serialize};

use crate::error::{McError, McResult};
use crate::face::Face;

/// A weight as supplied by a caller, before validation.
///
/// Numbers are taken as-is; text must parse to a number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WeightInput {
    /// A numeric weight.
    Number(f64),
    /// A weight written as text, such as `"2"` or `"1.5"`.
    Text(String),
}

impl WeightInput {
    /// Resolve to a validated weight.
    ///
    /// Unparsable text is a type error; negative, NaN, or infinite values are
    /// value errors.
    pub fn resolve(&self) -> McResult<f64> {
        let value = match self {
            Self::Number(n) => *n,
            Self::Text(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| McError::NonNumericWeight(s.clone()))?,
        };
        if !value.is_finite() || value < 0.0 {
            return Err(McError::InvalidWeight(value));
        }
        Ok(value)
    }
}

impl From<f64> for WeightInput {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<f32> for WeightInput {
    fn from(n: f32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<i32> for WeightInput {
    fn from(n: i32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<u32> for WeightInput {
    fn from(n: u32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<&str> for WeightInput {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for WeightInput {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

/// A single face and its weight (or probability).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaceWeight {
    /// The face.
    pub face: Face,
    /// Its weight.
    pub weight: f64,
}

/// An owned face → weight table in face order.
///
/// Returned by [`Die::snapshot`](super::Die::snapshot) and
/// [`Die::probabilities`](super::Die::probabilities); editing it never
/// touches the die it came from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeightTable {
    /// Rows in face order.
    pub entries: Vec<FaceWeight>,
}

impl WeightTable {
    /// Weight of a face, or `None` if the face is absent.
    pub fn get(&self, face: &Face) -> Option<f64> {
        self.entries
            .iter()
            .find(|e| &e.face == face)
            .map(|e| e.weight)
    }

    /// Sum of all weights.
    pub fn total(&self) -> f64 {
        self.entries.iter().map(|e| e.weight).sum()
    }

    /// Faces in table order.
    pub fn faces(&self) -> Vec<Face> {
        self.entries.iter().map(|e| e.face.clone()).collect()
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the rows.
    pub fn iter(&self) -> std::slice::Iter<'_, FaceWeight> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_resolve() {
        assert_eq!(WeightInput::from(1.5).resolve().unwrap(), 1.5);
        assert_eq!(WeightInput::from(2).resolve().unwrap(), 2.0);
        assert_eq!(WeightInput::from(0u32).resolve().unwrap(), 0.0);
    }

    #[test]
    fn text_resolves() {
        assert_eq!(WeightInput::from("2").resolve().unwrap(), 2.0);
        assert_eq!(WeightInput::from(" 1.5 ").resolve().unwrap(), 1.5);
    }

    #[test]
    fn bad_text_is_type_error() {
        let err = WeightInput::from("3..14").resolve().unwrap_err();
        assert!(matches!(err, McError::NonNumericWeight(ref s) if s == "3..14"));
        assert_eq!(err.kind(), crate::ErrorKind::Type);
    }

    #[test]
    fn negative_and_non_finite_rejected() {
        for bad in [-1.0, f64::NAN, f64::INFINITY] {
            let err = WeightInput::from(bad).resolve().unwrap_err();
            assert_eq!(err.kind(), crate::ErrorKind::Value);
        }
        assert!(WeightInput::from("-0.5").resolve().is_err());
    }

    #[test]
    fn table_lookup() {
        let table = WeightTable {
            entries: vec![
                FaceWeight {
                    face: Face::Int(1),
                    weight: 0.4,
                },
                FaceWeight {
                    face: Face::Int(2),
                    weight: 1.0,
                },
            ],
        };
        assert_eq!(table.get(&Face::Int(1)), Some(0.4));
        assert_eq!(table.get(&Face::Int(3)), None);
        assert!((table.total() - 1.4).abs() < 1e-12);
        assert_eq!(table.faces(), vec![Face::Int(1), Face::Int(2)]);
        assert_eq!(table.len(), 2);
    }
}

//! Face values that a die can land on.

use std::cmp::Ordering;
use std::convert::Infallible;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One possible outcome of a die.
///
/// A die's faces are either all numbers (integers and floats may mix) or all
/// text. Numbers sort numerically and text lexically, which is what
/// combination keys rely on. An integer and a float of the same value are
/// distinct faces, with the integer ordered first.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Face {
    /// An integer face such as `1`..`6`.
    Int(i64),
    /// A fractional face such as `1.5`.
    Float(f64),
    /// A text face such as `"heads"` or `"A"`.
    Text(String),
}

impl Face {
    /// Short name of this face's kind, used in error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Int(_) => "integer",
            Self::Float(_) => "float",
            Self::Text(_) => "text",
        }
    }

    /// Returns true if both faces are numbers or both are text.
    pub fn same_kind(&self, other: &Face) -> bool {
        self.is_numeric() == other.is_numeric()
    }

    /// Returns true for integer and float faces.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Int(_) | Self::Float(_))
    }
}

impl Ord for Face {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => a.cmp(b),
            (Self::Float(a), Self::Float(b)) => a.total_cmp(b),
            (Self::Int(a), Self::Float(b)) => (*a as f64).total_cmp(b).then(Ordering::Less),
            (Self::Float(a), Self::Int(b)) => a.total_cmp(&(*b as f64)).then(Ordering::Greater),
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            (Self::Text(_), _) => Ordering::Greater,
            (_, Self::Text(_)) => Ordering::Less,
        }
    }
}

impl PartialOrd for Face {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Face {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Face {}

// Float equality is bitwise (`total_cmp`), so hashing the bits agrees with `eq`.
impl Hash for Face {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Self::Int(n) => (0u8, n).hash(state),
            Self::Float(x) => (1u8, x.to_bits()).hash(state),
            Self::Text(s) => (2u8, s).hash(state),
        }
    }
}

impl std::fmt::Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            // Debug keeps the fraction (`2.0`), so the text parses back to a float.
            Self::Float(x) => write!(f, "{x:?}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}

/// Integer literals become [`Face::Int`], other finite numbers
/// [`Face::Float`], and anything else [`Face::Text`].
impl FromStr for Face {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(parse_face(s))
    }
}

impl From<i64> for Face {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<i32> for Face {
    fn from(n: i32) -> Self {
        Self::Int(i64::from(n))
    }
}

impl From<f64> for Face {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

impl From<&str> for Face {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Face {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&Face> for Face {
    fn from(face: &Face) -> Self {
        face.clone()
    }
}

/// Parse a comma-separated face list such as `"1,2,3"` or `"a, b, c"`.
///
/// Die shorthand like `"d6"` expands to the integer faces `1..=6`. Empty
/// items are skipped.
pub fn parse_faces(list: &str) -> Vec<Face> {
    let trimmed = list.trim().to_lowercase();
    if let Some(sides) = trimmed.strip_prefix('d').and_then(|n| n.parse::<i64>().ok()) {
        return (1..=sides).map(Face::Int).collect();
    }
    list.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(parse_face)
        .collect()
}

pub(crate) fn parse_face(s: &str) -> Face {
    let s = s.trim();
    if let Ok(n) = s.parse::<i64>() {
        return Face::Int(n);
    }
    match s.parse::<f64>() {
        Ok(x) if x.is_finite() => Face::Float(x),
        _ => Face::Text(s.to_string()),
    }
}

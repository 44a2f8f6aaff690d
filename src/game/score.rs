use std::fmt;
use std::ops::Neg;

/// Heuristic value of a position from one player's point of view.
///
/// `Loss` and `Win` behave as true infinities: the derived ordering compares
/// the variant first, so `Loss < Value(i32::MIN)` and `Value(i32::MAX) < Win`
/// without any arithmetic that could overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
pub enum Score {
    Loss,
    Value(i32),
    Win,
}

impl Score {
    pub const NEG_INFINITY: Score = Score::Loss;
    pub const INFINITY: Score = Score::Win;

    pub fn is_finite(self) -> bool {
        matches!(self, Score::Value(_))
    }

    /// Finite value, if any.
    pub fn value(self) -> Option<i32> {
        match self {
            Score::Value(v) => Some(v),
            _ => None,
        }
    }
}

impl Neg for Score {
    type Output = Score;

    fn neg(self) -> Score {
        match self {
            Score::Loss => Score::Win,
            Score::Value(v) => Score::Value(v.saturating_neg()),
            Score::Win => Score::Loss,
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Score::Loss => write!(f, "-inf"),
            Score::Value(v) => write!(f, "{v}"),
            Score::Win => write!(f, "+inf"),
        }
    }
}

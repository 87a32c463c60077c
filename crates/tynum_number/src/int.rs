use crate::IntLit;
use std::ops::Not;

/// Everything the engine computes with.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum Int {
    Finite(IntLit),
    PosInf,
    NegInf,

    // "some integer", the exact magnitude is not known
    Unbounded,
}

impl Int {
    pub fn zero() -> Self {
        Int::Finite(IntLit::zero())
    }

    pub fn is_zero(&self) -> bool {
        matches!(self, Int::Finite(n) if n.is_zero())
    }

    pub fn as_finite(&self) -> Option<&IntLit> {
        match self {
            Int::Finite(n) => Some(n),
            _ => None,
        }
    }

    pub fn negate(&self) -> Int {
        match self {
            Int::Finite(n) => Int::Finite(n.negate()),
            Int::PosInf => Int::NegInf,
            Int::NegInf => Int::PosInf,
            Int::Unbounded => Int::Unbounded,
        }
    }

    pub fn absolute(&self) -> Int {
        match self {
            Int::Finite(n) => Int::Finite(n.absolute()),
            Int::PosInf | Int::NegInf => Int::PosInf,
            Int::Unbounded => Int::Unbounded,
        }
    }
}

impl From<IntLit> for Int {
    fn from(n: IntLit) -> Int {
        Int::Finite(n)
    }
}

impl From<i64> for Int {
    fn from(n: i64) -> Int {
        Int::Finite(IntLit::from(n))
    }
}

/// Result of a comparison. `Unknown` is the plain boolean type: it's
/// returned when an operand is `Int::Unbounded`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Truth {
    True,
    False,
    Unknown,
}

impl Truth {
    pub fn to_bool(&self) -> Option<bool> {
        match self {
            Truth::True => Some(true),
            Truth::False => Some(false),
            Truth::Unknown => None,
        }
    }
}

impl From<bool> for Truth {
    fn from(b: bool) -> Truth {
        if b { Truth::True } else { Truth::False }
    }
}

impl Not for Truth {
    type Output = Truth;

    fn not(self) -> Truth {
        match self {
            Truth::True => Truth::False,
            Truth::False => Truth::True,
            Truth::Unknown => Truth::Unknown,
        }
    }
}

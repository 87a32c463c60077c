use crate::{Int, IntLit};
use std::str::FromStr;
use tynum_error::EngineError;

pub const POS_INF_LITERALS: [&str; 2] = ["Infinity", "+Infinity"];
pub const NEG_INF_LITERALS: [&str; 1] = ["-Infinity"];

// the general integer type is spelled like this
pub const UNBOUNDED_LITERAL: &str = "number";

impl IntLit {
    /// Strict: an optional `-`, then decimal digits without leading zeros.
    /// `-0` is rejected.
    pub fn from_string(s: &str) -> Result<IntLit, EngineError> {
        let (is_neg, digits) = match s.strip_prefix('-') {
            Some(digits) => (true, digits),
            None => (false, s),
        };

        match digits.as_bytes() {
            [] => Err(EngineError::invalid_literal(s)),
            [b'0'] if is_neg => Err(EngineError::invalid_literal(s).with_note("Zero has no sign.")),
            [b'0'] => Ok(IntLit::zero()),
            [b'0', ..] => Err(EngineError::invalid_literal(s).with_note("Leading zeros are not allowed.")),
            bytes if bytes.iter().all(|b| b.is_ascii_digit()) => Ok(IntLit {
                is_neg,
                digits: bytes.to_vec(),
            }),
            _ => Err(EngineError::invalid_literal(s)),
        }
    }
}

impl Int {
    /// `IntLit::from_string`, plus the sentinels and the general integer.
    pub fn from_string(s: &str) -> Result<Int, EngineError> {
        if POS_INF_LITERALS.contains(&s) {
            Ok(Int::PosInf)
        }

        else if NEG_INF_LITERALS.contains(&s) {
            Ok(Int::NegInf)
        }

        else if s == UNBOUNDED_LITERAL {
            Ok(Int::Unbounded)
        }

        else {
            Ok(Int::Finite(IntLit::from_string(s)?))
        }
    }

    /// Same as `from_string`, but finite literals go through `IntLit::from_lenient`.
    pub fn from_lenient(s: &str) -> Result<Int, EngineError> {
        match Int::from_string(s) {
            Ok(n) => Ok(n),
            Err(_) => Ok(Int::Finite(IntLit::from_lenient(s)?)),
        }
    }
}

impl FromStr for IntLit {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<IntLit, EngineError> {
        IntLit::from_string(s)
    }
}

impl FromStr for Int {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Int, EngineError> {
        Int::from_string(s)
    }
}

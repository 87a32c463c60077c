use crate::{Int, IntLit, Truth};
use crate::parse::{NEG_INF_LITERALS, POS_INF_LITERALS, UNBOUNDED_LITERAL};
use std::fmt;

impl fmt::Display for IntLit {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(
            fmt,
            "{}{}",
            if self.is_neg { "-" } else { "" },
            String::from_utf8_lossy(&self.digits),
        )
    }
}

impl fmt::Display for Int {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            Int::Finite(n) => write!(fmt, "{n}"),
            Int::PosInf => write!(fmt, "{}", POS_INF_LITERALS[0]),
            Int::NegInf => write!(fmt, "{}", NEG_INF_LITERALS[0]),
            Int::Unbounded => write!(fmt, "{UNBOUNDED_LITERAL}"),
        }
    }
}

impl fmt::Display for Truth {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(
            fmt,
            "{}",
            match self {
                Truth::True => "true",
                Truth::False => "false",

                // either of them
                Truth::Unknown => "boolean",
            },
        )
    }
}

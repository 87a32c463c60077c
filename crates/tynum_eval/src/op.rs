use crate::IntSet;
use std::fmt;
use tynum_number::{Int, Truth};

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Op {
    Add,
    Sub,
    Gt,
    Geq,
    Lt,
    Leq,
    Neg,
    Abs,
    Range,
    ClosedRange,
}

impl Op {
    pub const ALL: [Op; 10] = [
        Op::Add, Op::Sub,
        Op::Gt, Op::Geq, Op::Lt, Op::Leq,
        Op::Neg, Op::Abs,
        Op::Range, Op::ClosedRange,
    ];

    pub fn from_name(name: &str) -> Option<Op> {
        match name {
            "add" | "sum" => Some(Op::Add),
            "sub" | "subtract" => Some(Op::Sub),
            "gt" => Some(Op::Gt),
            "geq" | "ge" => Some(Op::Geq),
            "lt" => Some(Op::Lt),
            "leq" | "le" => Some(Op::Leq),
            "neg" | "negate" => Some(Op::Neg),
            "abs" | "absolute" => Some(Op::Abs),
            "range" => Some(Op::Range),
            "closed-range" | "closed_range" => Some(Op::ClosedRange),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Op::Add => "add",
            Op::Sub => "sub",
            Op::Gt => "gt",
            Op::Geq => "geq",
            Op::Lt => "lt",
            Op::Leq => "leq",
            Op::Neg => "neg",
            Op::Abs => "abs",
            Op::Range => "range",
            Op::ClosedRange => "closed-range",
        }
    }

    /// (min, max), both inclusive
    pub fn arity(&self) -> (usize, usize) {
        match self {
            Op::Neg | Op::Abs => (1, 1),

            // the step is optional
            Op::Range | Op::ClosedRange => (2, 3),
            _ => (2, 2),
        }
    }

    pub fn help_message(&self) -> &'static str {
        match self {
            Op::Add => "add <A> <B>: A + B",
            Op::Sub => "sub <A> <B>: A - B",
            Op::Gt => "gt <A> <B>: A > B",
            Op::Geq => "geq <A> <B>: A >= B",
            Op::Lt => "lt <A> <B>: A < B",
            Op::Leq => "leq <A> <B>: A <= B",
            Op::Neg => "neg <A>: -A",
            Op::Abs => "abs <A>: |A|",
            Op::Range => "range <START> <END> [STEP]: START, START + STEP, ... (below END)",
            Op::ClosedRange => "closed-range <START> <END> [STEP]: START, START + STEP, ... (up to END)",
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "{}", self.name())
    }
}

/// Result of `Engine::eval`.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Int(Int),
    Truth(Truth),
    Set(IntSet),
}

impl fmt::Display for Value {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Int(n) => write!(fmt, "{n}"),
            Value::Truth(t) => write!(fmt, "{t}"),
            Value::Set(s) => write!(fmt, "{s}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_test() {
        for op in Op::ALL.iter() {
            assert_eq!(Op::from_name(op.name()), Some(*op));
            assert!(op.help_message().starts_with(op.name()));
        }

        assert_eq!(Op::from_name("subtract"), Some(Op::Sub));
        assert_eq!(Op::from_name("mul"), None);
        assert_eq!(Op::from_name("Add"), None);
    }
}

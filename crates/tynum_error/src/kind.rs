// Literals are kept as strings here, so that this crate doesn't depend on `tynum_number`.
#[derive(Clone, Debug, PartialEq)]
pub enum ErrorKind {
    InvalidLiteral(String),

    // unary construction is only allowed below the ceiling
    MagnitudeOutOfBound {
        magnitude: String,
        ceiling: usize,
    },
    NegativeRangeBound(String),

    // infinity or the general integer
    NonFiniteRangeBound(String),
    InvalidStep(String),
    WrongArgCount {
        op: String,

        // both inclusive
        min: usize,
        max: usize,
        got: usize,
    },
    UnknownOperator {
        op: String,
        similar_op: Option<String>,
    },
}

impl ErrorKind {
    pub fn render(&self) -> String {
        match self {
            ErrorKind::InvalidLiteral(s) => format!("`{s}` is not a canonical integer literal."),
            ErrorKind::MagnitudeOutOfBound { magnitude, ceiling } => format!(
                "The magnitude of `{magnitude}` is not below the ceiling ({ceiling}).",
            ),
            ErrorKind::NegativeRangeBound(n) => format!("A bound of a range must not be negative, but is `{n}`."),
            ErrorKind::NonFiniteRangeBound(n) => format!("A bound of a range must be a finite integer, but is `{n}`."),
            ErrorKind::InvalidStep(n) => format!("Invalid step: `{n}`."),
            ErrorKind::WrongArgCount { op, min, max, got } => format!(
                "`{op}` takes {} argument{}, got {got}.",
                if min == max { min.to_string() } else { format!("{min} or {max}") },
                if *max == 1 { "" } else { "s" },
            ),
            ErrorKind::UnknownOperator { op, similar_op } => format!(
                "Unknown operator: `{op}`.{}",
                if let Some(similar_op) = similar_op {
                    format!(" There is a similar operator: `{similar_op}`.")
                } else {
                    String::new()
                },
            ),
        }
    }

    pub fn index(&self) -> u32 {
        match self {
            ErrorKind::InvalidLiteral(_) => 1,
            ErrorKind::MagnitudeOutOfBound { .. } => 2,
            ErrorKind::NegativeRangeBound(_) => 3,
            ErrorKind::NonFiniteRangeBound(_) => 4,
            ErrorKind::InvalidStep(_) => 5,
            ErrorKind::WrongArgCount { .. } => 6,
            ErrorKind::UnknownOperator { .. } => 7,
        }
    }
}

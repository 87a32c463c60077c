use std::cmp::Ordering;
use tynum_number::{Int, Truth, compare_finite};

/// `None` if either side is the general integer.
///
/// The order of the arms matters: the general integer wins over the
/// sentinels, and the sentinels win over the finite literals.
pub fn compare(lhs: &Int, rhs: &Int) -> Option<Ordering> {
    match (lhs, rhs) {
        (Int::Unbounded, _) | (_, Int::Unbounded) => None,
        (Int::PosInf, Int::PosInf) | (Int::NegInf, Int::NegInf) => Some(Ordering::Equal),
        (Int::PosInf, _) | (_, Int::NegInf) => Some(Ordering::Greater),
        (Int::NegInf, _) | (_, Int::PosInf) => Some(Ordering::Less),
        (Int::Finite(m), Int::Finite(n)) => Some(compare_finite(m, n)),
    }
}

pub fn greater_than(lhs: &Int, rhs: &Int) -> Truth {
    match compare(lhs, rhs) {
        Some(ordering) => (ordering == Ordering::Greater).into(),
        None => Truth::Unknown,
    }
}

pub fn greater_than_or_equal(lhs: &Int, rhs: &Int) -> Truth {
    match compare(lhs, rhs) {
        Some(ordering) => (ordering != Ordering::Less).into(),
        None => Truth::Unknown,
    }
}

pub fn less_than(lhs: &Int, rhs: &Int) -> Truth {
    !greater_than_or_equal(lhs, rhs)
}

pub fn less_than_or_equal(lhs: &Int, rhs: &Int) -> Truth {
    !greater_than(lhs, rhs)
}

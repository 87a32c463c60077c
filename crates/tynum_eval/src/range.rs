use crate::add;
use log::debug;
use smallvec::{SmallVec, smallvec};
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;
use tynum_config::EngineOption;
use tynum_error::{EngineError, ErrorKind};
use tynum_number::{Int, IntLit, Unary, compare_finite};

/// An ordered set of finite literals.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct IntSet {
    values: BTreeSet<IntLit>,
}

impl IntSet {
    pub fn new() -> Self {
        IntSet::default()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn contains(&self, n: &IntLit) -> bool {
        self.values.contains(n)
    }

    pub fn iter(&self) -> impl Iterator<Item = &IntLit> {
        self.values.iter()
    }
}

impl FromIterator<IntLit> for IntSet {
    fn from_iter<I: IntoIterator<Item = IntLit>>(iter: I) -> Self {
        IntSet {
            values: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for IntSet {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        if self.is_empty() {
            return write!(fmt, "never");
        }

        write!(
            fmt,
            "{{{}}}",
            self.values.iter().map(
                |n| n.to_string()
            ).collect::<Vec<String>>().join(", "),
        )
    }
}

/// `{start, start + step, start + 2 * step, ...}`, every element below `end`.
///
/// Both bounds are built as unary sequences, so both have to be below the
/// magnitude ceiling. If `start >= end`, it's an empty set.
pub fn int_range(start: &Int, end: &Int, step: &Int, option: &EngineOption) -> Result<IntSet, EngineError> {
    debug!("int_range({start}, {end}, {step})");

    let start = range_bound(start, option)?;
    let end = range_bound(end, option)?;
    let step = range_step(step)?;

    if start.len() >= end.len() {
        debug!("int_range: start is not less than end, the result is empty");
        return Ok(IntSet::new());
    }

    let gap = match end.remove_prefix(&start) {
        Some(gap) => gap.to_int_lit(),
        None => unreachable!(),
    };

    if compare_finite(step, &gap) == Ordering::Greater {
        debug!("int_range: step `{step}` is larger than the gap `{gap}`");
        return Ok(IntSet::from_iter(vec![start.to_int_lit()]));
    }

    // `step <= gap < ceiling`, so it fits in a usize
    let step = match step.try_to_usize() {
        Some(step) => step,
        None => unreachable!(),
    };

    let mut acc = start;
    let mut emitted: SmallVec<[IntLit; 16]> = smallvec![];

    // number of filler units since the last emission
    let mut filler = 0;

    while acc.len() < end.len() {
        if filler == 0 {
            emitted.push(acc.to_int_lit());
        }

        acc.push_unit();
        filler = (filler + 1) % step;
    }

    Ok(emitted.into_iter().collect())
}

/// `int_range(start, end + 1, step)`
pub fn int_closed_range(start: &Int, end: &Int, step: &Int, option: &EngineOption) -> Result<IntSet, EngineError> {
    // `-1 + 1` is a valid bound, so the end has to be checked before the increment
    range_bound(end, option)?;
    let end = add(end, &Int::Finite(IntLit::one()), option)?;

    int_range(start, &end, step, option)
}

fn range_bound(n: &Int, option: &EngineOption) -> Result<Unary, EngineError> {
    match n {
        Int::Finite(n) if n.is_neg() => Err(EngineError::new(
            ErrorKind::NegativeRangeBound(n.to_string()),
        )),
        Int::Finite(n) => Unary::from_magnitude(n, option.magnitude_ceiling),
        _ => Err(EngineError::new(
            ErrorKind::NonFiniteRangeBound(n.to_string()),
        )),
    }
}

fn range_step(n: &Int) -> Result<&IntLit, EngineError> {
    match n {
        Int::Finite(n) if !n.is_neg() && !n.is_zero() => Ok(n),
        _ => Err(EngineError::new(
            ErrorKind::InvalidStep(n.to_string()),
        ).with_note("The step of a range must be at least 1.")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(s: &str) -> Int {
        Int::from_string(s).unwrap()
    }

    fn set(ns: Vec<i64>) -> IntSet {
        ns.into_iter().map(IntLit::from).collect()
    }

    #[test]
    fn range_test() {
        let samples = vec![
            ("0", "10", "1", (0..10).collect::<Vec<i64>>()),
            ("0", "11", "2", vec![0, 2, 4, 6, 8, 10]),
            ("0", "10", "2", vec![0, 2, 4, 6, 8]),
            ("3", "10", "3", vec![3, 6, 9]),
            ("10", "20", "100", vec![10]),
            ("10", "20", "10", vec![10]),
            ("10", "20", "11", vec![10]),
            ("10", "20", "9", vec![10, 19]),
            ("5", "6", "1", vec![5]),
            ("0", "999", "500", vec![0, 500]),

            // the gap is tiny, but the step isn't: no unary sequence is built for the step
            ("0", "3", "123456789012345678901234567890", vec![0]),
            ("0", "0", "1", vec![]),
            ("7", "3", "1", vec![]),
            ("7", "7", "2", vec![]),
        ];

        for (start, end, step, expected) in samples.into_iter() {
            let result = int_range(&int(start), &int(end), &int(step), &EngineOption::default()).unwrap();

            for n in expected.iter() {
                assert!(result.contains(&IntLit::from(*n)), "int_range({start}, {end}, {step})");
            }

            assert!(!result.contains(&IntLit::from(-1)));
            assert_eq!(result, set(expected), "int_range({start}, {end}, {step})");
        }
    }

    #[test]
    fn closed_range_test() {
        let samples = vec![
            ("0", "5", "1"),
            ("0", "10", "5"),
            ("2", "2", "1"),
            ("3", "2", "1"),
            ("0", "998", "7"),
        ];

        for (start, end, step) in samples.into_iter() {
            let end_plus_one = add(&int(end), &int("1"), &EngineOption::default()).unwrap();

            assert_eq!(
                int_closed_range(&int(start), &int(end), &int(step), &EngineOption::default()).unwrap(),
                int_range(&int(start), &end_plus_one, &int(step), &EngineOption::default()).unwrap(),
            );
        }

        assert_eq!(
            int_closed_range(&int("0"), &int("5"), &int("1"), &EngineOption::default()).unwrap(),
            set((0..=5).collect()),
        );
    }

    #[test]
    fn range_error_test() {
        let samples = vec![
            ("-1", "5", "1", 3),
            ("0", "-5", "1", 3),
            ("Infinity", "5", "1", 4),
            ("0", "number", "1", 4),
            ("0", "1000", "1", 2),
            ("1000", "0", "1", 2),
            ("0", "5", "0", 5),
            ("0", "5", "-1", 5),
            ("0", "5", "Infinity", 5),
            ("0", "5", "number", 5),
        ];

        for (start, end, step, index) in samples.into_iter() {
            let e = int_range(&int(start), &int(end), &int(step), &EngineOption::default()).unwrap_err();
            assert_eq!(e.kind.index(), index, "int_range({start}, {end}, {step})");
        }

        // `end + 1` hits the ceiling
        let e = int_closed_range(&int("0"), &int("999"), &int("1"), &EngineOption::default()).unwrap_err();
        assert_eq!(e.kind.index(), 2);

        // `-1 + 1` would be a valid bound
        let e = int_closed_range(&int("0"), &int("-1"), &int("1"), &EngineOption::default()).unwrap_err();
        assert_eq!(e.kind.index(), 3);
    }

    #[test]
    fn display_test() {
        assert_eq!(set(vec![4, 0, 2]).to_string(), "{0, 2, 4}");
        assert_eq!(set(vec![-1, 10, 9]).to_string(), "{-1, 9, 10}");
        assert_eq!(IntSet::new().to_string(), "never");
    }
}

use crate::magnitude::{magnitude_difference, magnitude_sum, sign_crossed};
use log::debug;
use std::cmp::Ordering;
use tynum_config::EngineOption;
use tynum_error::EngineError;
use tynum_number::{Int, IntLit};

/// `lhs + rhs`
///
/// - the general integer is contagious
/// - `Infinity + -Infinity` is the general integer
/// - an infinity absorbs any finite value
/// - both finite magnitudes must be below the ceiling, unless one of them is 0
pub fn add(lhs: &Int, rhs: &Int, option: &EngineOption) -> Result<Int, EngineError> {
    debug!("add({lhs}, {rhs})");

    match (lhs, rhs) {
        (Int::Unbounded, _) | (_, Int::Unbounded) => Ok(Int::Unbounded),
        (Int::PosInf, Int::PosInf) => Ok(Int::PosInf),
        (Int::NegInf, Int::NegInf) => Ok(Int::NegInf),
        (Int::PosInf, Int::NegInf) | (Int::NegInf, Int::PosInf) => Ok(Int::Unbounded),
        (Int::PosInf, Int::Finite(_)) | (Int::Finite(_), Int::PosInf) => Ok(Int::PosInf),
        (Int::NegInf, Int::Finite(_)) | (Int::Finite(_), Int::NegInf) => Ok(Int::NegInf),
        (Int::Finite(m), Int::Finite(n)) => add_finite(m, n, option),
    }
}

fn add_finite(lhs: &IntLit, rhs: &IntLit, option: &EngineOption) -> Result<Int, EngineError> {
    if lhs.is_zero() {
        return Ok(Int::Finite(rhs.clone()));
    }

    if rhs.is_zero() {
        return Ok(Int::Finite(lhs.clone()));
    }

    let (lhs_sign, lhs_magnitude) = lhs.decompose();
    let (rhs_sign, rhs_magnitude) = rhs.decompose();

    match (lhs_sign.is_neg(), rhs_sign.is_neg()) {
        (false, false) => Ok(Int::Finite(magnitude_sum(&lhs_magnitude, &rhs_magnitude, option)?)),

        // -3 + -4 = -(3 + 4)
        (true, true) => Ok(Int::Finite(magnitude_sum(&lhs_magnitude, &rhs_magnitude, option)?.negate())),

        // the operand with the larger magnitude decides the sign
        (lhs_neg, _) => {
            let (ordering, difference) = magnitude_difference(&lhs_magnitude, &rhs_magnitude, option)?;
            debug!("add({lhs}, {rhs}): signs differ, |lhs| is {ordering:?} than |rhs|");

            let result_neg = match ordering {
                Ordering::Greater => lhs_neg,
                Ordering::Less => !lhs_neg,
                Ordering::Equal => false,
            };

            Ok(sign_crossed(
                if result_neg { difference.negate() } else { difference },
                option,
            ))
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tynum_error::ErrorKind;

    fn int(s: &str) -> Int {
        Int::from_string(s).unwrap()
    }

    #[test]
    fn add_test() {
        let samples = vec![
            ("111", "222", "333"),
            ("10", "-2", "8"),
            ("-2", "10", "8"),
            ("2", "-10", "-8"),
            ("-10", "2", "-8"),
            ("-3", "-4", "-7"),
            ("5", "-5", "0"),
            ("999", "999", "1998"),
            ("0", "0", "0"),
            ("0", "-17", "-17"),

            // zero skips the ceiling
            ("0", "123456789012345678901234567890", "123456789012345678901234567890"),
            ("Infinity", "-9999", "Infinity"),
            ("-9999", "Infinity", "Infinity"),
            ("-Infinity", "9999", "-Infinity"),
            ("Infinity", "Infinity", "Infinity"),
            ("-Infinity", "-Infinity", "-Infinity"),
            ("Infinity", "-Infinity", "number"),
            ("-Infinity", "Infinity", "number"),
            ("number", "1", "number"),
            ("Infinity", "number", "number"),
        ];

        for (lhs, rhs, expected) in samples.into_iter() {
            assert_eq!(
                add(&int(lhs), &int(rhs), &EngineOption::default()).unwrap(),
                int(expected),
                "{lhs} + {rhs}",
            );
        }
    }

    #[test]
    fn parity_test() {
        let samples = vec![
            ("10", "-2", "8"),
            ("2", "-10", "number"),
            ("-10", "2", "number"),
            ("5", "-5", "0"),

            // signs don't cross
            ("-3", "-4", "-7"),
        ];

        for (lhs, rhs, expected) in samples.into_iter() {
            assert_eq!(
                add(&int(lhs), &int(rhs), &EngineOption::parity()).unwrap(),
                int(expected),
                "{lhs} + {rhs}",
            );
        }
    }

    #[test]
    fn ceiling_test() {
        let samples = vec![
            ("1000", "1"),
            ("1", "-1000"),
            ("-1000", "-1000"),
            ("123456789012345678901234567890", "1"),
        ];

        for (lhs, rhs) in samples.into_iter() {
            match add(&int(lhs), &int(rhs), &EngineOption::default()) {
                Err(e) => match e.kind {
                    ErrorKind::MagnitudeOutOfBound { ceiling, .. } => {
                        assert_eq!(ceiling, 1000);
                    },
                    kind => panic!("{kind:?}"),
                },
                Ok(n) => panic!("{lhs} + {rhs} = {n}"),
            }
        }

        assert_eq!(
            add(&int("1000"), &int("1"), &EngineOption::with_ceiling(2000)).unwrap(),
            int("1001"),
        );
    }
}

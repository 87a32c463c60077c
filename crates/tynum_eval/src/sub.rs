use crate::magnitude::{magnitude_difference, magnitude_sum, sign_crossed};
use log::debug;
use std::cmp::Ordering;
use tynum_config::EngineOption;
use tynum_error::EngineError;
use tynum_number::{Int, IntLit};

/// `lhs - rhs`
///
/// It agrees with `add(lhs, rhs.negate())` on every input, errors included,
/// but it doesn't go through `add`: the sign split is done once, here. Equal
/// operands are not special: `5000 - 5000` hits the ceiling like `5000 + -5000`.
pub fn subtract(lhs: &Int, rhs: &Int, option: &EngineOption) -> Result<Int, EngineError> {
    debug!("subtract({lhs}, {rhs})");

    match (lhs, rhs) {
        (Int::Unbounded, _) | (_, Int::Unbounded) => Ok(Int::Unbounded),

        // indeterminate
        (Int::PosInf, Int::PosInf) | (Int::NegInf, Int::NegInf) => Ok(Int::Unbounded),
        (Int::NegInf, _) | (_, Int::PosInf) => Ok(Int::NegInf),
        (Int::PosInf, _) | (_, Int::NegInf) => Ok(Int::PosInf),
        (Int::Finite(m), Int::Finite(n)) => subtract_finite(m, n, option),
    }
}

fn subtract_finite(lhs: &IntLit, rhs: &IntLit, option: &EngineOption) -> Result<Int, EngineError> {
    if lhs.is_zero() {
        return Ok(Int::Finite(rhs.negate()));
    }

    if rhs.is_zero() {
        return Ok(Int::Finite(lhs.clone()));
    }

    let (lhs_sign, lhs_magnitude) = lhs.decompose();
    let (rhs_sign, rhs_magnitude) = rhs.decompose();

    match (lhs_sign.is_neg(), rhs_sign.is_neg()) {
        // 5 - 3 = 2, 3 - 5 = -(5 - 3)
        (false, false) => {
            let (ordering, difference) = magnitude_difference(&lhs_magnitude, &rhs_magnitude, option)?;

            if ordering == Ordering::Less {
                Ok(sign_crossed(difference.negate(), option))
            }

            else {
                Ok(Int::Finite(difference))
            }
        },

        // -5 - -3 = -(5 - 3), -3 - -5 = 5 - 3
        (true, true) => {
            let (ordering, difference) = magnitude_difference(&lhs_magnitude, &rhs_magnitude, option)?;

            if ordering == Ordering::Greater {
                Ok(sign_crossed(difference.negate(), option))
            }

            else {
                Ok(Int::Finite(difference))
            }
        },

        // 3 - -5 = 3 + 5, -3 - 5 = -(3 + 5)
        (lhs_neg, _) => {
            let sum = magnitude_sum(&lhs_magnitude, &rhs_magnitude, option)?;

            Ok(Int::Finite(if lhs_neg { sum.negate() } else { sum }))
        },
    }
}

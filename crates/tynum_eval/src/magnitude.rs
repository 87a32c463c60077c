// Helpers shared by `add` and `subtract`. They only see magnitudes (non-negative literals).

use log::debug;
use std::cmp::Ordering;
use tynum_config::{EngineOption, SignCrossing};
use tynum_error::EngineError;
use tynum_number::{Int, IntLit, Unary, compare_finite};

pub fn magnitude_sum(lhs: &IntLit, rhs: &IntLit, option: &EngineOption) -> Result<IntLit, EngineError> {
    let lhs = Unary::from_magnitude(lhs, option.magnitude_ceiling)?;
    let rhs = Unary::from_magnitude(rhs, option.magnitude_ceiling)?;

    Ok(lhs.concat(&rhs).to_int_lit())
}

/// `(lhs.cmp(rhs), |lhs - rhs|)`
///
/// The larger one is always the minuend, so the prefix removal never fails.
pub fn magnitude_difference(lhs: &IntLit, rhs: &IntLit, option: &EngineOption) -> Result<(Ordering, IntLit), EngineError> {
    let ordering = compare_finite(lhs, rhs);
    let lhs = Unary::from_magnitude(lhs, option.magnitude_ceiling)?;
    let rhs = Unary::from_magnitude(rhs, option.magnitude_ceiling)?;

    let (minuend, subtrahend) = match ordering {
        Ordering::Less => (rhs, lhs),
        _ => (lhs, rhs),
    };

    match minuend.remove_prefix(&subtrahend) {
        Some(difference) => Ok((ordering, difference.to_int_lit())),
        None => unreachable!(),
    }
}

// the result of an operation whose operands had opposite signs (after the
// subtrahend is negated, in case of `subtract`)
pub fn sign_crossed(result: IntLit, option: &EngineOption) -> Int {
    if result.is_neg() && option.sign_crossing == SignCrossing::Parity {
        debug!("negative result `{result}` of a sign-crossing operation degrades to the general integer");
        Int::Unbounded
    }

    else {
        Int::Finite(result)
    }
}

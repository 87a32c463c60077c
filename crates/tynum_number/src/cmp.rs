use crate::IntLit;
use std::cmp::Ordering;

/// Total order of finite literals. It never builds a unary sequence:
/// the digits are compared by length first, then lexicographically.
pub fn compare_finite(lhs: &IntLit, rhs: &IntLit) -> Ordering {
    let (lhs_sign, lhs_magnitude) = lhs.decompose();
    let (rhs_sign, rhs_magnitude) = rhs.decompose();

    match (lhs_sign.is_neg(), rhs_sign.is_neg()) {
        (false, true) => Ordering::Greater,
        (true, false) => Ordering::Less,
        (false, false) => compare_magnitude(lhs_magnitude.digits(), rhs_magnitude.digits()),

        // -4 < -3
        (true, true) => compare_magnitude(lhs_magnitude.digits(), rhs_magnitude.digits()).reverse(),
    }
}

// both are canonical digit strings, so a longer one is always larger
pub fn compare_magnitude(lhs: &[u8], rhs: &[u8]) -> Ordering {
    lhs.len().cmp(&rhs.len()).then_with(|| lhs.cmp(rhs))
}

impl Ord for IntLit {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_finite(self, other)
    }
}

impl PartialOrd for IntLit {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compare_test() {
        // always lhs < rhs
        let samples = vec![
            ("-5", "1"),
            ("0", "1"),
            ("-1", "0"),
            ("9", "10"),
            ("-10", "-9"),
            ("199", "200"),
            ("-200", "-199"),
            ("99999999999999999999", "100000000000000000000"),
            ("-100000000000000000000", "-99999999999999999999"),
        ];

        for (lhs, rhs) in samples.into_iter() {
            let lhs = IntLit::from_string(lhs).unwrap();
            let rhs = IntLit::from_string(rhs).unwrap();

            assert_eq!(compare_finite(&lhs, &rhs), Ordering::Less);
            assert_eq!(compare_finite(&rhs, &lhs), Ordering::Greater);
            assert_eq!(compare_finite(&lhs, &lhs), Ordering::Equal);
            assert!(lhs < rhs);
        }
    }
}

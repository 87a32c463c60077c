#![deny(unused_imports)]

mod cmp;
mod convert;
mod fmt;
mod int;
mod parse;
mod unary;

pub use cmp::{compare_finite, compare_magnitude};
pub use int::{Int, Truth};
pub use unary::{Unary, Unit};

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Sign {
    Pos,
    Neg,

    // zero has no sign, but it's treated as non-negative everywhere
    Zero,
}

impl Sign {
    pub fn is_neg(&self) -> bool {
        matches!(self, Sign::Neg)
    }
}

/// An exact integer literal, kept in its canonical decimal form.
/// There's no upper limit on the number of digits: only the unary based
/// operations are bounded.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct IntLit {
    // `0` is never negative
    is_neg: bool,

    // ascii digits, most significant first
    // no leading zeros except for `0` itself
    digits: Vec<u8>,
}

impl IntLit {
    pub fn zero() -> Self {
        IntLit {
            is_neg: false,
            digits: vec![b'0'],
        }
    }

    pub fn one() -> Self {
        IntLit {
            is_neg: false,
            digits: vec![b'1'],
        }
    }

    pub fn is_zero(&self) -> bool {
        self.digits == b"0"
    }

    pub fn is_neg(&self) -> bool {
        self.is_neg
    }

    pub fn sign(&self) -> Sign {
        if self.is_zero() {
            Sign::Zero
        }

        else if self.is_neg {
            Sign::Neg
        }

        else {
            Sign::Pos
        }
    }

    /// Digits of the magnitude, in ascii.
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    /// It strips the minus sign off the literal. The digits are never touched,
    /// so it's exact no matter how long the literal is.
    pub fn decompose(&self) -> (Sign, IntLit) {
        (
            self.sign(),
            IntLit {
                is_neg: false,
                digits: self.digits.clone(),
            },
        )
    }

    pub fn absolute(&self) -> IntLit {
        self.decompose().1
    }

    pub fn negate(&self) -> IntLit {
        IntLit {
            is_neg: !self.is_neg && !self.is_zero(),
            digits: self.digits.clone(),
        }
    }

    /// Inverse of `decompose`.
    pub fn from_sign_and_magnitude(sign: Sign, magnitude: IntLit) -> IntLit {
        debug_assert!(!magnitude.is_neg);

        match sign {
            Sign::Neg => magnitude.negate(),
            Sign::Pos => magnitude,
            Sign::Zero => {
                debug_assert!(magnitude.is_zero());
                IntLit::zero()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit(n: i64) -> IntLit {
        IntLit::from(n)
    }

    #[test]
    fn decompose_test() {
        let samples = vec![
            (0, Sign::Zero, 0),
            (7, Sign::Pos, 7),
            (-7, Sign::Neg, 7),
            (1000, Sign::Pos, 1000),
            (-999, Sign::Neg, 999),
            (i64::MIN, Sign::Neg, -(i64::MIN + 1)),
        ];

        for (n, sign, magnitude) in samples.into_iter() {
            let (sign_, magnitude_) = lit(n).decompose();
            assert_eq!(sign_, sign);

            if n == i64::MIN {
                assert_eq!(magnitude_.to_string(), "9223372036854775808");
            }

            else {
                assert_eq!(magnitude_, lit(magnitude));
            }

            assert_eq!(IntLit::from_sign_and_magnitude(sign_, magnitude_), lit(n));
        }
    }

    #[test]
    fn negate_test() {
        assert_eq!(lit(0).negate(), lit(0));
        assert_eq!(lit(5).negate(), lit(-5));
        assert_eq!(lit(-5).negate(), lit(5));

        for n in [-1000, -3, 0, 1, 12345] {
            assert_eq!(lit(n).negate().negate(), lit(n));
            assert_eq!(lit(n).absolute(), lit(n.abs()));
        }

        // way beyond i64
        let huge = IntLit::from_string("-123456789012345678901234567890").unwrap();
        assert_eq!(huge.negate().to_string(), "123456789012345678901234567890");
        assert_eq!(huge.absolute(), huge.negate());
    }
}

use crate::IntLit;
use hmath::BigInt;
use tynum_error::EngineError;

impl From<i64> for IntLit {
    fn from(n: i64) -> IntLit {
        let s = n.to_string();

        IntLit {
            is_neg: n < 0,
            digits: s.trim_start_matches('-').as_bytes().to_vec(),
        }
    }
}

impl IntLit {
    pub fn from_usize(n: usize) -> IntLit {
        IntLit {
            is_neg: false,
            digits: n.to_string().into_bytes(),
        }
    }

    /// `None` if it's negative or doesn't fit.
    pub fn try_to_usize(&self) -> Option<usize> {
        if self.is_neg {
            return None;
        }

        let mut result: usize = 0;

        for d in self.digits.iter() {
            result = result.checked_mul(10)?.checked_add((*d - b'0') as usize)?;
        }

        Some(result)
    }

    pub fn to_hmath_bi(&self) -> Result<BigInt, EngineError> {
        let s = self.to_string();

        BigInt::from_string(&s).map_err(
            |_| EngineError::invalid_literal(&s)
        )
    }

    pub fn from_hmath_bi(n: &BigInt) -> Result<IntLit, EngineError> {
        IntLit::from_string(&n.to_string())
    }

    /// Accepts whatever hmath accepts (eg. `007`), and normalizes it.
    /// `IntLit::from_string` is the strict one.
    pub fn from_lenient(s: &str) -> Result<IntLit, EngineError> {
        match BigInt::from_string(s) {
            Ok(n) => IntLit::from_hmath_bi(&n),
            Err(_) => Err(EngineError::invalid_literal(s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usize_test() {
        let samples = vec![
            ("0", Some(0)),
            ("999", Some(999)),
            ("123456789", Some(123456789)),
            ("1234567890", Some(1234567890)),
            ("-1", None),
            ("123456789012345678901234567890", None),
        ];

        for (s, n) in samples.into_iter() {
            assert_eq!(IntLit::from_string(s).unwrap().try_to_usize(), n);
        }

        assert_eq!(IntLit::from_usize(42), IntLit::from(42i64));

        let max = IntLit::from_usize(usize::MAX);
        assert_eq!(max.try_to_usize(), Some(usize::MAX));

        let above_max = max.to_hmath_bi().unwrap().add_i32(1);
        assert_eq!(IntLit::from_hmath_bi(&above_max).unwrap().try_to_usize(), None);
    }

    #[test]
    fn hmath_test() {
        for s in ["0", "1", "-1", "333", "-9999", "123456789012345678901234567890"] {
            let n = IntLit::from_string(s).unwrap();
            let bi = n.to_hmath_bi().unwrap();

            assert_eq!(bi.to_string(), s);
            assert_eq!(IntLit::from_hmath_bi(&bi).unwrap(), n);
        }

        assert_eq!(IntLit::from_lenient("007").unwrap(), IntLit::from(7i64));
        assert!(IntLit::from_lenient("seven").is_err());
    }
}

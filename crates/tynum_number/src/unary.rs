use crate::IntLit;
use tynum_error::EngineError;

/// One opaque unit. Only the number of units means anything.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Unit;

/// A non-negative magnitude `n`, spelled as `n` units.
///
/// Concatenating two sequences adds their magnitudes and removing a prefix
/// subtracts one. It's the slow way of doing arithmetic (a sequence of length
/// `n` takes `n` steps to build), hence the magnitude ceiling.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Unary {
    units: Vec<Unit>,
}

impl Unary {
    pub fn empty() -> Self {
        Unary { units: vec![] }
    }

    /// It refuses to build anything at or above `ceiling`. The general integer
    /// never gets here: callers must handle `Int::Unbounded` themselves.
    pub fn from_magnitude(magnitude: &IntLit, ceiling: usize) -> Result<Unary, EngineError> {
        debug_assert!(!magnitude.is_neg());

        let n = match magnitude.try_to_usize() {
            Some(n) if n < ceiling => n,
            _ => {
                return Err(EngineError::magnitude_out_of_bound(magnitude.to_string(), ceiling));
            },
        };

        let mut result = Unary::empty();

        while result.len() < n {
            result.push_unit();
        }

        Ok(result)
    }

    pub fn push_unit(&mut self) {
        self.units.push(Unit);
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn concat(&self, other: &Unary) -> Unary {
        Unary {
            units: vec![
                self.units.clone(),
                other.units.clone(),
            ].concat(),
        }
    }

    /// `None` if `prefix` is longer than `self`.
    pub fn remove_prefix(&self, prefix: &Unary) -> Option<Unary> {
        self.units.get(prefix.len()..).map(
            |rest| Unary { units: rest.to_vec() }
        )
    }

    pub fn to_int_lit(&self) -> IntLit {
        IntLit::from_usize(self.len())
    }
}

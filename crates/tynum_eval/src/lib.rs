#![deny(unused_imports)]
//! Addition, subtraction, comparison and range generation over integer
//! literals, the two infinities and the general integer.
//!
//! Comparisons only look at the digits, so they work on literals of any
//! length. Arithmetic goes through unary sequences (see [`Unary`]) and is
//! bounded by [`EngineOption::magnitude_ceiling`].

mod add;
mod cmp;
mod engine;
mod magnitude;
mod op;
mod range;
mod sub;


pub use add::add;
pub use cmp::{
    compare,
    greater_than,
    greater_than_or_equal,
    less_than,
    less_than_or_equal,
};
pub use engine::Engine;
pub use op::{Op, Value};
pub use range::{IntSet, int_closed_range, int_range};
pub use sub::subtract;

pub use tynum_config::{EngineOption, SignCrossing};
pub use tynum_error::{EngineError, ErrorKind};
pub use tynum_number::{Int, IntLit, Sign, Truth, Unary};

use crate::{
    IntSet,
    Op,
    Value,
    add,
    greater_than,
    greater_than_or_equal,
    int_closed_range,
    int_range,
    less_than,
    less_than_or_equal,
    subtract,
};
use log::debug;
use tynum_config::EngineOption;
use tynum_error::{EngineError, ErrorKind};
use tynum_number::{Int, IntLit, Truth};

/// Holds an `EngineOption` so that callers don't have to pass it around.
#[derive(Clone, Debug, Default)]
pub struct Engine {
    option: EngineOption,
}

impl Engine {
    pub fn new(option: EngineOption) -> Self {
        Engine { option }
    }

    pub fn option(&self) -> &EngineOption {
        &self.option
    }

    pub fn add(&self, lhs: &Int, rhs: &Int) -> Result<Int, EngineError> {
        add(lhs, rhs, &self.option)
    }

    pub fn subtract(&self, lhs: &Int, rhs: &Int) -> Result<Int, EngineError> {
        subtract(lhs, rhs, &self.option)
    }

    pub fn greater_than(&self, lhs: &Int, rhs: &Int) -> Truth {
        greater_than(lhs, rhs)
    }

    pub fn greater_than_or_equal(&self, lhs: &Int, rhs: &Int) -> Truth {
        greater_than_or_equal(lhs, rhs)
    }

    pub fn less_than(&self, lhs: &Int, rhs: &Int) -> Truth {
        less_than(lhs, rhs)
    }

    pub fn less_than_or_equal(&self, lhs: &Int, rhs: &Int) -> Truth {
        less_than_or_equal(lhs, rhs)
    }

    pub fn negate(&self, n: &Int) -> Int {
        n.negate()
    }

    pub fn absolute(&self, n: &Int) -> Int {
        n.absolute()
    }

    /// `step` defaults to 1.
    pub fn range(&self, start: &Int, end: &Int, step: Option<&Int>) -> Result<IntSet, EngineError> {
        int_range(start, end, &step_or_one(step), &self.option)
    }

    /// `step` defaults to 1.
    pub fn closed_range(&self, start: &Int, end: &Int, step: Option<&Int>) -> Result<IntSet, EngineError> {
        int_closed_range(start, end, &step_or_one(step), &self.option)
    }

    pub fn eval(&self, op: Op, args: &[Int]) -> Result<Value, EngineError> {
        let (min, max) = op.arity();

        if args.len() < min || args.len() > max {
            return Err(EngineError::new(ErrorKind::WrongArgCount {
                op: op.name().to_string(),
                min,
                max,
                got: args.len(),
            }));
        }

        debug!("eval: {op} {}", args.iter().map(|arg| arg.to_string()).collect::<Vec<String>>().join(" "));

        let result = match op {
            Op::Add => Value::Int(self.add(&args[0], &args[1])?),
            Op::Sub => Value::Int(self.subtract(&args[0], &args[1])?),
            Op::Gt => Value::Truth(self.greater_than(&args[0], &args[1])),
            Op::Geq => Value::Truth(self.greater_than_or_equal(&args[0], &args[1])),
            Op::Lt => Value::Truth(self.less_than(&args[0], &args[1])),
            Op::Leq => Value::Truth(self.less_than_or_equal(&args[0], &args[1])),
            Op::Neg => Value::Int(self.negate(&args[0])),
            Op::Abs => Value::Int(self.absolute(&args[0])),
            Op::Range => Value::Set(self.range(&args[0], &args[1], args.get(2))?),
            Op::ClosedRange => Value::Set(self.closed_range(&args[0], &args[1], args.get(2))?),
        };

        Ok(result)
    }
}

fn step_or_one(step: Option<&Int>) -> Int {
    match step {
        Some(step) => step.clone(),
        None => Int::Finite(IntLit::one()),
    }
}

use crate::Value;
use std::fmt;

pub const DIVIDE_BY_ZERO: &str = "Cannot divide by zero";

/// The result of a division. It's converted to a sentinel string
/// only when it becomes a `Value`.
#[derive(Clone, Debug, PartialEq)]
pub enum Quotient {
    Value(Value),
    DivideByZero,
}

impl Quotient {
    pub fn is_divide_by_zero(&self) -> bool {
        matches!(self, Quotient::DivideByZero)
    }
}

impl From<Quotient> for Value {
    fn from(q: Quotient) -> Value {
        match q {
            Quotient::Value(v) => v,
            Quotient::DivideByZero => Value::String(DIVIDE_BY_ZERO.to_string()),
        }
    }
}

impl fmt::Display for Quotient {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            Quotient::Value(v) => write!(fmt, "{v}"),
            Quotient::DivideByZero => write!(fmt, "{DIVIDE_BY_ZERO}"),
        }
    }
}

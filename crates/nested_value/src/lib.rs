#![deny(unused_imports)]

use nested_error::EvalError;
use nested_number::Number;
use smallvec::SmallVec;

mod fmt;
mod func;
mod quotient;

pub use func::{Callable, Func, NativeFunc};
pub use quotient::{DIVIDE_BY_ZERO, Quotient};

/// Most functions take at most 2 arguments.
pub type Args = SmallVec<[Value; 2]>;

#[derive(Clone)]
pub enum Value {
    None,
    Number(Number),
    String(String),
    Func(Func),
}

impl Value {
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::None => "None",
            Value::Number(Number::Int(_)) => "Int",
            Value::Number(Number::Ratio(_)) => "Ratio",
            Value::String(_) => "String",
            Value::Func(_) => "Func",
        }
    }

    /// Only numeric zeros are zero. `""` and `None` are not.
    pub fn is_zero(&self) -> bool {
        match self {
            Value::Number(n) => n.is_zero(),
            _ => false,
        }
    }

    pub fn add_value(&self, other: &Value) -> Result<Value, EvalError> {
        match (self, other) {
            (Value::Number(m), Value::Number(n)) => Ok(Value::Number(m.add_num(n))),
            (Value::String(m), Value::String(n)) => Ok(Value::String(format!("{m}{n}"))),
            _ => Err(EvalError::unsupported_operand("+", self.type_name(), other.type_name())),
        }
    }

    pub fn sub_value(&self, other: &Value) -> Result<Value, EvalError> {
        match (self, other) {
            (Value::Number(m), Value::Number(n)) => Ok(Value::Number(m.sub_num(n))),
            _ => Err(EvalError::unsupported_operand("-", self.type_name(), other.type_name())),
        }
    }

    pub fn mul_value(&self, other: &Value) -> Result<Value, EvalError> {
        match (self, other) {
            (Value::Number(m), Value::Number(n)) => Ok(Value::Number(m.mul_num(n))),
            (Value::String(s), Value::Number(n))
            | (Value::Number(n), Value::String(s)) => match repeat_count(s, n) {
                Some(count) => Ok(Value::String(s.repeat(count))),
                None => {
                    let mut e = EvalError::unsupported_operand("*", self.type_name(), other.type_name());

                    if n.is_integer() {
                        e.set_message(format!("cannot repeat a string {n} times"));
                    }

                    Err(e)
                },
            },
            _ => Err(EvalError::unsupported_operand("*", self.type_name(), other.type_name())),
        }
    }

    /// True division. Dividing a number by zero is not an error: it's `Quotient::DivideByZero`.
    pub fn div_value(&self, other: &Value) -> Result<Quotient, EvalError> {
        match (self, other) {
            (Value::Number(m), Value::Number(n)) => match m.checked_div_num(n) {
                Some(q) => Ok(Quotient::Value(Value::Number(q))),
                None => Ok(Quotient::DivideByZero),
            },
            _ => Err(EvalError::unsupported_operand("/", self.type_name(), other.type_name())),
        }
    }
}

/// Repeated strings can't be longer than this.
pub const MAX_STRING_LEN: usize = 1 << 28;

// `None` if `n` is not an integer, or the result is too long
fn repeat_count(s: &str, n: &Number) -> Option<usize> {
    let count = usize::try_from(n.try_into_i64()?.max(0)).ok()?;

    match s.len().checked_mul(count) {
        Some(len) if len <= MAX_STRING_LEN => Some(count),
        _ => None,
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::None, Value::None) => true,
            (Value::Number(m), Value::Number(n)) => m == n,
            (Value::String(m), Value::String(n)) => m == n,
            (Value::Func(f), Value::Func(g)) => f.ptr_eq(g),
            _ => false,
        }
    }
}

impl From<Number> for Value {
    fn from(n: Number) -> Value {
        Value::Number(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Value {
        Value::Number(Number::from(n))
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Value {
        Value::Number(Number::from(n))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Value {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Value {
        Value::String(s)
    }
}

impl From<Func> for Value {
    fn from(f: Func) -> Value {
        Value::Func(f)
    }
}

// `None` is the null marker
impl From<Option<Func>> for Value {
    fn from(f: Option<Func>) -> Value {
        match f {
            Some(f) => Value::Func(f),
            None => Value::None,
        }
    }
}

use nested_error::EvalError;
use nested_value::Value;
use std::fmt;

pub const INVALID_FUNCTION: &str = "Invalid function";

/// What `apply_operation` did. It becomes a sentinel string only when it's converted to a `Value`.
#[derive(Clone, Debug, PartialEq)]
pub enum Applied {
    Returned(Value),
    InvalidFunction,
}

impl From<Applied> for Value {
    fn from(a: Applied) -> Value {
        match a {
            Applied::Returned(v) => v,
            Applied::InvalidFunction => Value::String(INVALID_FUNCTION.to_string()),
        }
    }
}

impl fmt::Display for Applied {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            Applied::Returned(v) => write!(fmt, "{v}"),
            Applied::InvalidFunction => write!(fmt, "{INVALID_FUNCTION}"),
        }
    }
}

pub fn try_apply(func: &Value, args: &[Value]) -> Result<Applied, EvalError> {
    match func {
        Value::Func(f) => Ok(Applied::Returned(f.invoke(args)?)),
        _ => Ok(Applied::InvalidFunction),
    }
}

/// Calls `func` with `args` if `func` is callable. Otherwise, it returns `"Invalid function"`.
/// Errors from `func` (wrong number of arguments, type errors) are not hidden.
pub fn apply_operation(func: &Value, args: &[Value]) -> Result<Value, EvalError> {
    try_apply(func, args).map(Value::from)
}

use crate::Value;
use std::fmt;

impl fmt::Display for Value {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            Value::None => write!(fmt, "None"),
            Value::Number(n) => write!(fmt, "{n}"),
            Value::String(s) => write!(fmt, "{s}"),
            Value::Func(f) => write!(fmt, "<function {}>", f.name()),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            Value::None => write!(fmt, "None"),
            Value::Number(n) => write!(fmt, "{n:?}"),
            Value::String(s) => write!(fmt, "{s:?}"),
            Value::Func(f) => write!(fmt, "Func({}/{})", f.name(), f.arity()),
        }
    }
}

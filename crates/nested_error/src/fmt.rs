use crate::{ErrorContext, EvalError};
use std::fmt;

impl fmt::Display for ErrorContext {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        let s = match self {
            ErrorContext::Unknown => String::new(),
            ErrorContext::CallingFunction(name) => format!("calling `{name}`"),
            ErrorContext::EvaluatingDemo => String::from("running the demonstration"),
        };

        write!(fmt, "{s}")
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(fmt, "{}", self.render_error())
    }
}

impl std::error::Error for EvalError {}

use crate::Value;
use log::trace;
use nested_error::{ErrorContext, EvalError};
use std::sync::Arc;

/// A function value. Closures implement this trait with a struct that owns its captured values.
pub trait Callable {
    fn name(&self) -> &str;

    /// number of arguments it takes
    fn arity(&self) -> usize;

    /// `args.len() == self.arity()` is guaranteed when it's called by `Func::invoke`.
    fn call(&self, args: &[Value]) -> Result<Value, EvalError>;
}

/// A shared handle to a function value. Cloning it doesn't clone the captured values.
#[derive(Clone)]
pub struct Func(Arc<dyn Callable + Send + Sync>);

impl Func {
    pub fn new<C: Callable + Send + Sync + 'static>(f: C) -> Self {
        Func(Arc::new(f))
    }

    pub fn name(&self) -> &str {
        self.0.name()
    }

    pub fn arity(&self) -> usize {
        self.0.arity()
    }

    pub fn invoke(&self, args: &[Value]) -> Result<Value, EvalError> {
        if args.len() != self.arity() {
            return Err(
                EvalError::wrong_number_of_args(self.name(), self.arity(), args.len())
                    .try_set_err_context(ErrorContext::CallingFunction(self.name().to_string()))
            );
        }

        trace!("calling `{}` with {args:?}", self.name());

        self.0.call(args).map_err(
            |e| e.try_set_err_context(ErrorContext::CallingFunction(self.name().to_string()))
        )
    }

    pub fn ptr_eq(&self, other: &Func) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

/// A function that doesn't capture anything.
pub struct NativeFunc {
    name: String,
    arity: usize,
    body: fn(&[Value]) -> Result<Value, EvalError>,
}

impl NativeFunc {
    pub fn new(name: &str, arity: usize, body: fn(&[Value]) -> Result<Value, EvalError>) -> Self {
        NativeFunc {
            name: name.to_string(),
            arity,
            body,
        }
    }

    pub fn into_func(self) -> Func {
        Func::new(self)
    }
}

impl Callable for NativeFunc {
    fn name(&self) -> &str {
        &self.name
    }

    fn arity(&self) -> usize {
        self.arity
    }

    fn call(&self, args: &[Value]) -> Result<Value, EvalError> {
        (self.body)(args)
    }
}

use log::{debug, warn};
use nested_error::EvalError;
use nested_value::{Callable, Func, Quotient, Value};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

pub const OPERATIONS: [Operation; 4] = [
    Operation::Add,
    Operation::Subtract,
    Operation::Multiply,
    Operation::Divide,
];

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
        }
    }

    // exact match only: `"Add"` and `" add"` are not operations
    pub fn try_parse(name: &str) -> Option<Self> {
        OPERATIONS.iter().find(|op| op.name() == name).copied()
    }
}

pub fn add(a: &Value, b: &Value) -> Result<Value, EvalError> {
    a.add_value(b)
}

pub fn subtract(a: &Value, b: &Value) -> Result<Value, EvalError> {
    a.sub_value(b)
}

pub fn multiply(a: &Value, b: &Value) -> Result<Value, EvalError> {
    a.mul_value(b)
}

/// It doesn't fail when `b` is zero, it returns `Quotient::DivideByZero`.
pub fn divide(a: &Value, b: &Value) -> Result<Quotient, EvalError> {
    if b.is_zero() {
        return Ok(Quotient::DivideByZero);
    }

    a.div_value(b)
}

/// A binary function returned by `calculator`.
pub struct BinaryOp {
    op: Operation,
}

impl Callable for BinaryOp {
    fn name(&self) -> &str {
        self.op.name()
    }

    fn arity(&self) -> usize {
        2
    }

    fn call(&self, args: &[Value]) -> Result<Value, EvalError> {
        let (a, b) = (&args[0], &args[1]);

        match self.op {
            Operation::Add => add(a, b),
            Operation::Subtract => subtract(a, b),
            Operation::Multiply => multiply(a, b),

            // the sentinel string is created here
            Operation::Divide => divide(a, b).map(Value::from),
        }
    }
}

/// `None` is the null marker for an unknown operation.
pub fn calculator(operation: &str) -> Option<Func> {
    match Operation::try_parse(operation) {
        Some(op) => {
            debug!("calculator: `{operation}`");
            Some(Func::new(BinaryOp { op }))
        },
        None => {
            warn!("calculator: unknown operation `{operation}`");
            None
        },
    }
}

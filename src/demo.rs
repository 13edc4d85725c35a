use crate::{
    apply_operation,
    calculator,
    complex_function,
    composed_function,
    create_multiplier,
    outer_function,
    recursive_factorial,
};
use nested_error::EvalError;
use nested_value::{Func, NativeFunc, Value};

pub struct DemoStep {
    /// how the call looks like, it's printed with `--show-calls`
    pub expr: &'static str,
    pub eval: fn() -> Result<Value, EvalError>,
}

impl DemoStep {
    pub fn run(&self) -> Result<Value, EvalError> {
        (self.eval)()
    }

    pub fn render(&self, result: &Value, show_calls: bool) -> String {
        if show_calls {
            format!("{} = {result}", self.expr)
        }

        else {
            result.to_string()
        }
    }
}

// calling the null marker is an error
fn unwrap_calculator(operation: &str) -> Result<Func, EvalError> {
    calculator(operation).ok_or_else(|| EvalError::not_callable(Value::None.type_name()))
}

/// The demonstration, in order. The expected outputs are 15, 7, 30, 21, 31, 120 and 25.
pub fn demo_steps() -> Vec<DemoStep> {
    vec![
        DemoStep {
            expr: "outer_function(10)(5)",
            eval: || {
                let inner_add = outer_function(Value::from(10));
                inner_add.invoke(&[Value::from(5)])
            },
        },
        DemoStep {
            expr: "calculator(\"add\")(3, 4)",
            eval: || {
                let add_func = unwrap_calculator("add")?;
                add_func.invoke(&[Value::from(3), Value::from(4)])
            },
        },
        DemoStep {
            expr: "apply_operation(calculator(\"multiply\"), 5, 6)",
            eval: || {
                let multiply_func = Value::from(calculator("multiply"));
                apply_operation(&multiply_func, &[Value::from(5), Value::from(6)])
            },
        },
        DemoStep {
            expr: "create_multiplier(3)(7)",
            eval: || {
                let multiply_by_3 = create_multiplier(Value::from(3));
                multiply_by_3.invoke(&[Value::from(7)])
            },
        },
        DemoStep {
            expr: "complex_function(2, 3)",
            eval: || complex_function(&Value::from(2), &Value::from(3)),
        },
        DemoStep {
            expr: "recursive_factorial(5)",
            eval: || recursive_factorial(&Value::from(5)),
        },
        DemoStep {
            expr: "composed_function(square, add_one)(4)",
            eval: || {
                fn square(args: &[Value]) -> Result<Value, EvalError> {
                    args[0].mul_value(&args[0])
                }

                fn add_one(args: &[Value]) -> Result<Value, EvalError> {
                    args[0].add_value(&Value::from(1))
                }

                let composed_square_add_one = composed_function(
                    NativeFunc::new("square", 1, square).into_func(),
                    NativeFunc::new("add_one", 1, add_one).into_func(),
                );
                composed_square_add_one.invoke(&[Value::from(4)])
            },
        },
    ]
}

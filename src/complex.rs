use nested_error::EvalError;
use nested_value::Value;

/// `a * a + b * b * b`
pub fn complex_function(a: &Value, b: &Value) -> Result<Value, EvalError> {
    fn square(n: &Value) -> Result<Value, EvalError> {
        n.mul_value(n)
    }

    fn cube(n: &Value) -> Result<Value, EvalError> {
        n.mul_value(n)?.mul_value(n)
    }

    fn sum_squares_cubes(x: &Value, y: &Value) -> Result<Value, EvalError> {
        square(x)?.add_value(&cube(y)?)
    }

    sum_squares_cubes(a, b)
}

use nested_error::EvalError;
use nested_value::Value;

/// `n` has to be a non-negative integer.
/// It doesn't check the input: a negative `n` never reaches the base case and overflows the stack.
pub fn recursive_factorial(n: &Value) -> Result<Value, EvalError> {
    if n.is_zero() {
        Ok(Value::from(1))
    }

    else {
        n.mul_value(&recursive_factorial(&n.sub_value(&Value::from(1))?)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nested_number::Number;

    #[test]
    fn factorial_test() {
        let samples = vec![
            (0, "1"),
            (1, "1"),
            (5, "120"),
            (10, "3628800"),
            (25, "15511210043330985984000000"),
        ];

        for (n, result) in samples.into_iter() {
            assert_eq!(recursive_factorial(&Value::from(n)).unwrap().to_string(), result);
        }
    }

    #[test]
    fn recurrence_test() {
        for n in 1..20 {
            let prev = recursive_factorial(&Value::from(n - 1)).unwrap();

            assert_eq!(
                recursive_factorial(&Value::from(n)).unwrap(),
                Value::from(n).mul_value(&prev).unwrap(),
            );
        }
    }

    #[test]
    fn factorial_of_ratio_test() {
        // `3.0` reaches the base case, and the result is a ratio
        let n = Value::Number(Number::from_denom_and_numer(1, 3));
        let result = recursive_factorial(&n).unwrap();

        assert_eq!(result, Value::from(6));
        assert_eq!(result.to_string(), "6.0");
    }

    #[test]
    fn factorial_type_error_test() {
        assert!(recursive_factorial(&Value::from("5")).is_err());
        assert!(recursive_factorial(&Value::None).is_err());
    }
}

use log::debug;
use nested_error::EvalError;
use nested_value::{Callable, Func, Value};

/// `inner_function(y) = x + y`
pub struct InnerFunction {
    x: Value,
}

impl Callable for InnerFunction {
    fn name(&self) -> &str {
        "inner_function"
    }

    fn arity(&self) -> usize {
        1
    }

    fn call(&self, args: &[Value]) -> Result<Value, EvalError> {
        self.x.add_value(&args[0])
    }
}

/// `multiplier(number) = number * factor`
pub struct Multiplier {
    factor: Value,
}

impl Callable for Multiplier {
    fn name(&self) -> &str {
        "multiplier"
    }

    fn arity(&self) -> usize {
        1
    }

    fn call(&self, args: &[Value]) -> Result<Value, EvalError> {
        args[0].mul_value(&self.factor)
    }
}

/// Every call creates a new closure that owns its own copy of `x`.
pub fn outer_function(x: Value) -> Func {
    debug!("outer_function: capturing x = {x:?}");

    Func::new(InnerFunction { x })
}

pub fn create_multiplier(factor: Value) -> Func {
    debug!("create_multiplier: capturing factor = {factor:?}");

    Func::new(Multiplier { factor })
}

#[cfg(test)]
mod tests {
    use super::*;
    use nested_error::{ErrorContext, EvalErrorKind};
    use nested_number::Number;

    #[test]
    fn outer_function_test() {
        let add_10 = outer_function(Value::from(10));

        assert_eq!(add_10.invoke(&[Value::from(5)]).unwrap(), Value::from(15));
        assert_eq!(add_10.invoke(&[Value::from(-10)]).unwrap(), Value::from(0));
        assert_eq!(
            add_10.invoke(&[Value::Number(Number::from_denom_and_numer(2, 1))]).unwrap(),
            Value::Number(Number::from_denom_and_numer(2, 21)),
        );
        assert_eq!(add_10.name(), "inner_function");
        assert_eq!(add_10.arity(), 1);
    }

    #[test]
    fn independent_closures_test() {
        let add_1 = outer_function(Value::from(1));
        let add_2 = outer_function(Value::from(2));

        assert_eq!(add_1.invoke(&[Value::from(0)]).unwrap(), Value::from(1));
        assert_eq!(add_2.invoke(&[Value::from(0)]).unwrap(), Value::from(2));

        // calling one closure doesn't change the other one
        assert_eq!(add_1.invoke(&[Value::from(0)]).unwrap(), Value::from(1));
        assert!(!add_1.ptr_eq(&add_2));
    }

    #[test]
    fn outer_function_type_error_test() {
        let add_10 = outer_function(Value::from(10));
        let e = add_10.invoke(&[Value::from("5")]).unwrap_err();

        assert_eq!(
            e.kind,
            EvalErrorKind::UnsupportedOperand { op: String::from("+"), lhs: String::from("Int"), rhs: String::from("String") },
        );
        assert_eq!(e.context, ErrorContext::CallingFunction(String::from("inner_function")));

        let greet = outer_function(Value::from("Hello, "));
        assert_eq!(greet.invoke(&[Value::from("world")]).unwrap(), Value::from("Hello, world"));
    }

    #[test]
    fn create_multiplier_test() {
        let times_3 = create_multiplier(Value::from(3));

        assert_eq!(times_3.invoke(&[Value::from(7)]).unwrap(), Value::from(21));
        assert_eq!(times_3.invoke(&[Value::from(-2)]).unwrap(), Value::from(-6));
        assert_eq!(times_3.invoke(&[Value::from("ab")]).unwrap(), Value::from("ababab"));
        assert_eq!(times_3.name(), "multiplier");
        assert!(times_3.invoke(&[Value::None]).is_err());
        assert!(times_3.invoke(&[]).is_err());
    }
}

use log::debug;
use nested_error::EvalError;
use nested_value::{Callable, Func, Value};

/// `composed(x) = f(g(x))`
pub struct Composed {
    f: Func,
    g: Func,
}

impl Callable for Composed {
    fn name(&self) -> &str {
        "composed"
    }

    fn arity(&self) -> usize {
        1
    }

    fn call(&self, args: &[Value]) -> Result<Value, EvalError> {
        let inner = self.g.invoke(args)?;

        self.f.invoke(&[inner])
    }
}

pub fn composed_function(f: Func, g: Func) -> Func {
    debug!("composed_function: `{}` after `{}`", f.name(), g.name());

    Func::new(Composed { f, g })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_multiplier, outer_function};
    use nested_error::ErrorContext;
    use nested_value::NativeFunc;

    fn square(args: &[Value]) -> Result<Value, EvalError> {
        args[0].mul_value(&args[0])
    }

    fn to_string(args: &[Value]) -> Result<Value, EvalError> {
        Ok(Value::from(args[0].to_string()))
    }

    #[test]
    fn compose_test() {
        let square = NativeFunc::new("square", 1, square).into_func();
        let add_one = outer_function(Value::from(1));

        let square_after_add_one = composed_function(square.clone(), add_one.clone());
        let add_one_after_square = composed_function(add_one, square);

        assert_eq!(square_after_add_one.invoke(&[Value::from(4)]).unwrap(), Value::from(25));
        assert_eq!(add_one_after_square.invoke(&[Value::from(4)]).unwrap(), Value::from(17));
    }

    #[test]
    fn nested_compose_test() {
        let double = create_multiplier(Value::from(2));
        let add_3 = outer_function(Value::from(3));
        let f = composed_function(composed_function(double.clone(), add_3), double);

        // ((x * 2) + 3) * 2
        assert_eq!(f.invoke(&[Value::from(5)]).unwrap(), Value::from(26));
    }

    #[test]
    fn compose_error_test() {
        let to_string = NativeFunc::new("to_string", 1, to_string).into_func();
        let add_one = outer_function(Value::from(1));
        let f = composed_function(add_one, to_string);

        // `1 + "4"`
        let e = f.invoke(&[Value::from(4)]).unwrap_err();
        assert_eq!(e.context, ErrorContext::CallingFunction(String::from("inner_function")));
        assert!(f.invoke(&[]).is_err());
    }
}

use crate::{
    apply_operation,
    calculator,
    complex_function,
    composed_function,
    create_multiplier,
    outer_function,
    recursive_factorial,
    INVALID_FUNCTION,
};
use nested_error::EvalError;
use nested_number::Number;
use nested_value::{DIVIDE_BY_ZERO, NativeFunc, Value};
use rand::Rng;

const ITERATIONS: usize = 200;

// mostly small integers, sometimes ratios
fn random_number() -> Value {
    let mut rng = rand::thread_rng();

    if rng.gen_range(0..4) == 0 {
        Value::Number(Number::from_denom_and_numer(rng.gen_range(1..16i64), rng.gen_range(-1000..1000i64)))
    }

    else {
        Value::from(rng.gen_range(-1_000_000..1_000_000i64))
    }
}

fn random_non_zero() -> Value {
    loop {
        let n = random_number();

        if !n.is_zero() {
            return n;
        }
    }
}

#[test]
fn outer_function_prop() {
    for _ in 0..ITERATIONS {
        let (x, y) = (random_number(), random_number());

        assert_eq!(
            outer_function(x.clone()).invoke(&[y.clone()]).unwrap(),
            x.add_value(&y).unwrap(),
        );
    }
}

#[test]
fn calculator_prop() {
    for _ in 0..ITERATIONS {
        let (a, b) = (random_number(), random_non_zero());
        let args = [a.clone(), b.clone()];

        assert_eq!(calculator("add").unwrap().invoke(&args).unwrap(), a.add_value(&b).unwrap());
        assert_eq!(calculator("subtract").unwrap().invoke(&args).unwrap(), a.sub_value(&b).unwrap());
        assert_eq!(calculator("multiply").unwrap().invoke(&args).unwrap(), a.mul_value(&b).unwrap());
        assert_eq!(
            calculator("divide").unwrap().invoke(&args).unwrap(),
            Value::from(a.div_value(&b).unwrap()),
        );
        assert_eq!(
            calculator("divide").unwrap().invoke(&[a, Value::from(0)]).unwrap(),
            Value::from(DIVIDE_BY_ZERO),
        );
    }
}

#[test]
fn apply_operation_prop() {
    for _ in 0..ITERATIONS {
        let args = [random_number(), random_number()];

        for op in ["add", "subtract", "multiply"] {
            let f = calculator(op).unwrap();

            assert_eq!(
                apply_operation(&Value::from(f.clone()), &args).unwrap(),
                f.invoke(&args).unwrap(),
            );
        }

        assert_eq!(apply_operation(&args[0], &args).unwrap(), Value::from(INVALID_FUNCTION));
    }
}

#[test]
fn create_multiplier_prop() {
    for _ in 0..ITERATIONS {
        let (factor, number) = (random_number(), random_number());

        assert_eq!(
            create_multiplier(factor.clone()).invoke(&[number.clone()]).unwrap(),
            number.mul_value(&factor).unwrap(),
        );
    }
}

#[test]
fn complex_function_prop() {
    for _ in 0..ITERATIONS {
        let (a, b) = (random_number(), random_number());
        let a_squared = a.mul_value(&a).unwrap();
        let b_cubed = b.mul_value(&b).unwrap().mul_value(&b).unwrap();

        assert_eq!(
            complex_function(&a, &b).unwrap(),
            a_squared.add_value(&b_cubed).unwrap(),
        );
    }
}

#[test]
fn composed_function_prop() {
    fn negate(args: &[Value]) -> Result<Value, EvalError> {
        Value::from(0).sub_value(&args[0])
    }

    for _ in 0..ITERATIONS {
        let f = create_multiplier(random_number());
        let g = outer_function(random_number());
        let h = NativeFunc::new("negate", 1, negate).into_func();
        let x = random_number();

        assert_eq!(
            composed_function(f.clone(), g.clone()).invoke(&[x.clone()]).unwrap(),
            f.invoke(&[g.invoke(&[x.clone()]).unwrap()]).unwrap(),
        );
        assert_eq!(
            composed_function(h.clone(), f.clone()).invoke(&[x.clone()]).unwrap(),
            h.invoke(&[f.invoke(&[x]).unwrap()]).unwrap(),
        );
    }
}

#[test]
fn recursive_factorial_prop() {
    let mut rng = rand::thread_rng();

    for _ in 0..20 {
        let n = rng.gen_range(1..60i64);

        assert_eq!(
            recursive_factorial(&Value::from(n)).unwrap(),
            Value::from(n).mul_value(&recursive_factorial(&Value::from(n - 1)).unwrap()).unwrap(),
        );
    }
}

#![deny(unused_imports)]

use log::info;
use nested_config::{DemoOption, RunMode, SpecialOutput};
use nested_error::ErrorContext;
use nested_number::Number;
use nested_value::{Args, Value};

mod apply;
mod calculator;
mod closure;
mod complex;
mod compose;
pub mod demo;
mod factorial;
pub mod result;


pub use apply::{Applied, INVALID_FUNCTION, apply_operation, try_apply};
pub use calculator::{
    BinaryOp,
    OPERATIONS,
    Operation,
    add,
    calculator,
    divide,
    multiply,
    subtract,
};
pub use closure::{InnerFunction, Multiplier, create_multiplier, outer_function};
pub use complex::complex_function;
pub use compose::{Composed, composed_function};
pub use factorial::recursive_factorial;
use result::DemoOutput;

pub fn run(option: &DemoOption) -> DemoOutput {
    let mut output = DemoOutput::new();

    match &option.do_not_run_and_do_this {
        Some(SpecialOutput::HelpMessage) => {
            output.dump_to_stdout(HELP_MESSAGE.to_string());
            return output;
        },
        Some(SpecialOutput::VersionInfo) => {
            output.dump_to_stdout(format!("nested {MAJOR_VERSION}.{MINOR_VERSION}.{PATCH_VERSION}"));
            return output;
        },
        None => {},
    }

    match &option.mode {
        RunMode::Demo => {
            info!("running the demonstration");

            for step in demo::demo_steps() {
                match step.run() {
                    Ok(result) => {
                        output.dump_to_stdout(step.render(&result, option.show_calls));
                    },
                    Err(e) => {
                        output.push_error(e.try_set_err_context(ErrorContext::EvaluatingDemo));
                        break;
                    },
                }
            }
        },
        RunMode::Calculate { operation, lhs, rhs } => {
            info!("calculator({operation:?})({lhs}, {rhs})");

            let func = Value::from(calculator(operation));
            let args: Args = [lhs, rhs].into_iter().map(|s| parse_operand(s)).collect();

            match apply_operation(&func, &args) {
                Ok(result) => {
                    output.dump_to_stdout(result.to_string());
                },
                Err(e) => {
                    output.push_error(e);
                },
            }
        },
    }

    output
}

/// Anything that doesn't look like a number is a string.
pub fn parse_operand(s: &str) -> Value {
    match Number::from_string(s) {
        Ok(n) => Value::Number(n),
        Err(_) => Value::String(s.to_string()),
    }
}

pub const HELP_MESSAGE: &str =
"Usage: nested [OPTIONS] [OPERATION LHS RHS]

Examples:
    nested
        Runs the demonstration: nested functions, closures,
        higher-order functions and a recursive factorial.

    nested divide 7 0
        Prints `calculator(\"divide\")(7, 0)`, which is `Cannot divide by zero`.
        An unknown OPERATION prints `Invalid function`.

Options:
    -h, --help                      Display this message
    -v, --version
    --show-calls                    Show the call expression of each line of the demonstration
    --verbose [0|1|2]               Log verbosity (default: 0). `RUST_LOG` overrides it.
";

pub const MAJOR_VERSION: u8 = 0;
pub const MINOR_VERSION: u8 = 0;
pub const PATCH_VERSION: u8 = 0;

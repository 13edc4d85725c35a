use crate::concat_commas;

#[derive(Clone, Debug, PartialEq)]
pub enum EvalErrorKind {
    UnsupportedOperand {
        op: String,
        lhs: String,
        rhs: String,
    },
    WrongNumberOfArgs {
        func: String,
        expected: usize,
        got: usize,
    },

    // name of the type
    NotCallable(String),
}

impl EvalErrorKind {
    // main explanation of this error
    // no capital letters, no dot
    pub fn msg(&self) -> String {
        match self {
            EvalErrorKind::UnsupportedOperand { op, lhs, rhs } => format!(
                "unsupported operand types for `{op}`: `{lhs}` and `{rhs}`",
            ),
            EvalErrorKind::WrongNumberOfArgs { func, expected, got } => format!(
                "`{func}` takes {expected} argument{}, but {got} argument{} {} given",
                if *expected == 1 { "" } else { "s" },
                if *got == 1 { "" } else { "s" },
                if *got == 1 { "was" } else { "were" },
            ),
            EvalErrorKind::NotCallable(ty) => format!("a value of type `{ty}` is not callable"),
        }
    }

    // extra sentences that explain the error
    // if the help msg is empty, it's ignored
    pub fn help(&self) -> String {
        match self {
            EvalErrorKind::UnsupportedOperand { op, .. } => match op.as_str() {
                "+" => format!(
                    "`+` works on {}.",
                    concat_commas(&[String::from("two numbers"), String::from("two strings")], "or", "", ""),
                ),
                "*" => String::from("`*` works on two numbers, or on a string and an integer."),
                _ => format!("`{op}` only works on numbers."),
            },
            EvalErrorKind::WrongNumberOfArgs { .. } => String::new(),
            EvalErrorKind::NotCallable(_) => String::from("Only function values can be called."),
        }
    }

    /// identifier of this error kind
    pub fn index(&self) -> u32 {
        match self {
            EvalErrorKind::UnsupportedOperand { .. } => 1,
            EvalErrorKind::WrongNumberOfArgs { .. } => 2,
            EvalErrorKind::NotCallable(_) => 3,
        }
    }
}

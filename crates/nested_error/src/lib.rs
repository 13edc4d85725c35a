#![deny(unused_imports)]

use colored::Colorize;

mod ctxt;
mod fmt;
mod kind;

pub use ctxt::ErrorContext;
pub use kind::EvalErrorKind;

/// Everything that can go wrong while calling a function value.
/// Sentinel values (`"Cannot divide by zero"`, `"Invalid function"`) are not errors.
#[derive(Clone, Debug, PartialEq)]
pub struct EvalError {
    pub kind: EvalErrorKind,
    pub context: ErrorContext,

    // very context-specific message, it's rendered as a note
    pub(crate) msg: String,
}

impl EvalError {
    pub fn unsupported_operand(op: &str, lhs: &str, rhs: &str) -> Self {
        EvalError {
            kind: EvalErrorKind::UnsupportedOperand {
                op: op.to_string(),
                lhs: lhs.to_string(),
                rhs: rhs.to_string(),
            },
            context: ErrorContext::Unknown,
            msg: String::new(),
        }
    }

    pub fn wrong_number_of_args(func: &str, expected: usize, got: usize) -> Self {
        EvalError {
            kind: EvalErrorKind::WrongNumberOfArgs {
                func: func.to_string(),
                expected,
                got,
            },
            context: ErrorContext::Unknown,
            msg: String::new(),
        }
    }

    pub fn not_callable(ty: &str) -> Self {
        EvalError {
            kind: EvalErrorKind::NotCallable(ty.to_string()),
            context: ErrorContext::Unknown,
            msg: String::new(),
        }
    }

    pub fn set_message(&mut self, msg: String) -> &mut Self {
        self.msg = msg;

        self
    }

    // sets the error context only when it's not set previously,
    // so that the innermost context wins
    pub fn try_set_err_context(mut self, context: ErrorContext) -> Self {
        if self.context == ErrorContext::Unknown {
            self.context = context;
        }

        self
    }

    pub fn index(&self) -> u32 {
        self.kind.index()
    }

    pub fn render_error(&self) -> String {
        let title = render_error_title(self.context.to_string());
        let help = match self.kind.help() {
            s if s.is_empty() => String::new(),
            s => format!("\nHelp: {s}"),
        };
        let note = match &self.msg {
            s if s.is_empty() => String::new(),
            s => format!("\nNote: {s}"),
        };

        format!(
            "{title}\nE{:04}: {}{help}{note}",
            self.index(),
            self.kind.msg(),
        )
    }
}

pub fn concat_commas(list: &[String], term: &str, prefix: &str, suffix: &str) -> String {
    match list.len() {
        0 => String::new(),
        1 => format!("{prefix}{}{suffix}", list[0]),
        2 => format!("{prefix}{}{suffix} {term} {prefix}{}{suffix}", list[0], list[1]),
        _ => format!("{prefix}{}{suffix}, {}", list[0], concat_commas(&list[1..], term, prefix, suffix)),
    }
}

pub(crate) fn render_error_title(context: String) -> String {
    let context = if context.is_empty() {
        String::new()
    } else {
        format!(" while {context}")
    };

    format!("[Error{context}]").red().to_string()
}

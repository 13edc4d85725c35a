use crate::ArgCount;
use crate::span::{RenderedSpan, Span, underline_span};
use colored::Colorize;

pub struct Error {
    pub span: Option<RenderedSpan>,
    pub kind: ErrorKind,
}

impl Error {
    pub fn render(&self) -> String {
        format!(
            "{}\n{}{}",
            "[Error while parsing command line arguments]".red(),
            self.kind.render(),
            match &self.span {
                Some(span) => format!("\n\n{}", underline_span(span)),
                None => String::new(),
            },
        )
    }
}

pub(crate) struct RawError {
    pub span: Span,
    pub kind: ErrorKind,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ErrorKind {
    /// see <https://doc.rust-lang.org/stable/std/num/struct.ParseIntError.html>
    ParseIntError(std::num::ParseIntError),

    NumberNotInRange {
        min: Option<String>,
        max: Option<String>,
        n: String,
    },

    /// (prev_flag, curr_flag)
    SameFlagMultipleTimes(String, String),

    /// of an arg_flag
    MissingArgument(String),

    WrongArgCount {
        expected: ArgCount,
        got: usize,
    },
    UnknownFlag {
        flag: String,
        similar_flag: Option<String>,
    },
}

impl ErrorKind {
    pub fn render(&self) -> String {
        match self {
            ErrorKind::ParseIntError(_) => String::from("Cannot parse int."),
            ErrorKind::NumberNotInRange { min, max, n } => match (min, max) {
                (Some(min), Some(max)) => format!("N is supposed to be between {min} and {max}, but is {n}."),
                (Some(min), None) => format!("N is supposed to be at least {min}, but is {n}."),
                (None, Some(max)) => format!("N is supposed to be at most {max}, but is {n}."),
                (None, None) => format!("{n} is out of range."),
            },
            ErrorKind::SameFlagMultipleTimes(prev, next) => if prev == next {
                format!("Flag `{next}` cannot be used multiple times.")
            } else {
                format!("Flag `{prev}` and `{next}` cannot be used together.")
            },
            ErrorKind::MissingArgument(flag) => format!("A value is required for flag `{flag}`, but is missing."),
            ErrorKind::WrongArgCount { expected, got } => format!(
                "Expected {} arguments, got {got} argument{}.",
                match expected {
                    ArgCount::Exact(n) => format!("exactly {n}"),
                    ArgCount::Leq(n) => format!("at most {n}"),
                    ArgCount::OneOf(ns) => ns.iter().map(
                        |n| n.to_string()
                    ).collect::<Vec<_>>().join(" or "),
                    ArgCount::None => String::from("no"),
                },
                if *got == 1 { "" } else { "s" },
            ),
            ErrorKind::UnknownFlag { flag, similar_flag } => format!(
                "Unknown flag: `{flag}`.{}",
                if let Some(flag) = similar_flag {
                    format!(" There is a similar flag: `{flag}`.")
                } else {
                    String::new()
                },
            ),
        }
    }
}

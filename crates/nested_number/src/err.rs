use std::fmt;

#[derive(Clone, Debug, PartialEq)]
pub enum NumberParseError {
    Empty,
    InvalidLiteral(String),
}

impl fmt::Display for NumberParseError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            NumberParseError::Empty => write!(fmt, "empty numeric literal"),
            NumberParseError::InvalidLiteral(s) => write!(fmt, "invalid numeric literal: `{s}`"),
        }
    }
}

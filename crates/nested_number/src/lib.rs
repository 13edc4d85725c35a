#![deny(unused_imports)]

use hmath::{BigInt, Ratio};

mod err;
mod fmt;

pub use err::NumberParseError;

/// Integers never overflow. Anything that is not an integer is an exact ratio.
#[derive(Clone)]
pub enum Number {
    Int(BigInt),
    Ratio(Ratio),
}

impl Number {
    // `s` is a decimal literal. It may contain a sign, `e` or a decimal separator.
    pub fn from_string(s: &str) -> Result<Self, NumberParseError> {
        let s = s.trim();

        if s.is_empty() {
            return Err(NumberParseError::Empty);
        }

        if s.contains(|c: char| c == '.' || c == 'e' || c == 'E') {
            match s.parse::<Ratio>() {
                Ok(n) => Ok(Number::Ratio(n)),
                Err(_) => Err(NumberParseError::InvalidLiteral(s.to_string())),
            }
        }

        else {
            match BigInt::from_string(s) {
                Ok(n) => Ok(Number::Int(n)),
                Err(_) => Err(NumberParseError::InvalidLiteral(s.to_string())),
            }
        }
    }

    pub fn zero() -> Self {
        Number::Int(BigInt::from(0))
    }

    pub fn from_denom_and_numer(denom: i64, numer: i64) -> Self {
        Number::Ratio(Ratio::from_denom_and_numer(BigInt::from(denom), BigInt::from(numer)))
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, Number::Int(_))
    }

    pub fn is_zero(&self) -> bool {
        match self {
            Number::Int(n) => n.eq_bi(&BigInt::from(0)),
            Number::Ratio(n) => n.eq_rat(&Ratio::from_denom_and_numer(BigInt::from(1), BigInt::from(0))),
        }
    }

    pub fn try_into_i64(&self) -> Option<i64> {
        match self {
            Number::Int(n) => i64::try_from(n).ok(),
            Number::Ratio(_) => None,
        }
    }

    pub fn add_num(&self, other: &Number) -> Number {
        match (self, other) {
            (Number::Int(m), Number::Int(n)) => Number::Int(m.add_bi(n)),
            _ => Number::Ratio(self.to_ratio().add_rat(&other.to_ratio())),
        }
    }

    pub fn sub_num(&self, other: &Number) -> Number {
        match (self, other) {
            (Number::Int(m), Number::Int(n)) => Number::Int(m.sub_bi(n)),
            _ => Number::Ratio(self.to_ratio().sub_rat(&other.to_ratio())),
        }
    }

    pub fn mul_num(&self, other: &Number) -> Number {
        match (self, other) {
            (Number::Int(m), Number::Int(n)) => Number::Int(m.mul_bi(n)),
            _ => Number::Ratio(self.to_ratio().mul_rat(&other.to_ratio())),
        }
    }

    /// It's a true division: the result is always a ratio, even if both operands are integers.
    /// It returns `None` if `other` is zero.
    pub fn checked_div_num(&self, other: &Number) -> Option<Number> {
        if other.is_zero() {
            None
        }

        else {
            Some(Number::Ratio(self.to_ratio().div_rat(&other.to_ratio())))
        }
    }

    pub fn to_ratio(&self) -> Ratio {
        match self {
            Number::Int(n) => Ratio::from_denom_and_numer(BigInt::from(1), n.clone()),
            Number::Ratio(n) => n.clone(),
        }
    }

    // ratios like `6/3` are integral, but are still `Number::Ratio`
    pub(crate) fn is_integral_ratio(n: &Ratio) -> bool {
        let truncated = Ratio::from_denom_and_numer(BigInt::from(1), n.truncate_bi());

        truncated.eq_rat(n)
    }
}

// `Int(2)` and `Ratio(2)` are the same number
impl PartialEq for Number {
    fn eq(&self, other: &Number) -> bool {
        match (self, other) {
            (Number::Int(m), Number::Int(n)) => m.eq_bi(n),
            _ => self.to_ratio().eq_rat(&other.to_ratio()),
        }
    }
}

impl From<i64> for Number {
    fn from(n: i64) -> Number {
        Number::Int(BigInt::from(n))
    }
}

impl From<i32> for Number {
    fn from(n: i32) -> Number {
        Number::from(i64::from(n))
    }
}

impl From<BigInt> for Number {
    fn from(n: BigInt) -> Number {
        Number::Int(n)
    }
}

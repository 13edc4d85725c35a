use super::Number;
use std::fmt;

impl fmt::Display for Number {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(
            fmt,
            "{}",
            match self {
                Number::Int(n) => n.to_string(),

                // `6 / 3` is `2.0`, not `2`
                Number::Ratio(n) if Number::is_integral_ratio(n) => format!("{}.0", n.truncate_bi()),
                Number::Ratio(n) => match n.to_ieee754_f64() {
                    Ok(f) => render_f64(f),

                    // too big or too small for `f64`
                    Err(_) => n.to_string(),
                },
            },
        )
    }
}

// the shortest representation that round-trips, `1e-05` and `1e+16` for very small or big numbers
fn render_f64(f: f64) -> String {
    let abs = f.abs();

    if abs != 0.0 && (abs < 1e-4 || abs >= 1e16) {
        let s = format!("{f:e}");

        match s.split_once('e') {
            Some((digits, exp)) => match exp.strip_prefix('-') {
                Some(exp) => format!("{digits}e-{exp:0>2}"),
                None => format!("{digits}e+{exp:0>2}"),
            },
            None => s,
        }
    }

    else {
        format!("{f}")
    }
}

impl fmt::Debug for Number {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            Number::Int(n) => write!(fmt, "Int({n})"),
            Number::Ratio(n) => write!(fmt, "Ratio({}/{})", n.get_numer(), n.get_denom()),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::Number;

    #[test]
    fn number_fmt_test() {
        let samples = vec![
            (Number::from(15), "15"),
            (Number::from(-7), "-7"),
            (Number::zero(), "0"),
            (Number::from_denom_and_numer(3, 6), "2.0"),
            (Number::from_denom_and_numer(1, -4), "-4.0"),
            (Number::from_denom_and_numer(2, 7), "3.5"),
            (Number::from_denom_and_numer(3, 1), "0.3333333333333333"),
            (Number::from_denom_and_numer(3, -2), "-0.6666666666666666"),
            (Number::from_denom_and_numer(10, 1), "0.1"),
            (Number::from_denom_and_numer(100000, 1), "1e-05"),
            (Number::from_denom_and_numer(3, 100000000000000000), "3.3333333333333332e+16"),
        ];

        for (n, s) in samples.into_iter() {
            assert_eq!(n.to_string(), s);
        }
    }
}

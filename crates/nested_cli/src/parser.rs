use crate::dist::get_closest_string;
use crate::error::{Error, ErrorKind, RawError};
use crate::span::Span;
use std::collections::HashMap;

pub struct ArgParser {
    arg_count: ArgCount,
    flags: Vec<Flag>,

    // `--verbose 2`, `--verbose=2`
    arg_flags: HashMap<String, ArgFlag>,

    // '-h' -> '--help'
    short_flags: HashMap<String, String>,
}

impl ArgParser {
    pub fn new() -> Self {
        ArgParser {
            arg_count: ArgCount::None,
            flags: vec![],
            arg_flags: HashMap::new(),
            short_flags: HashMap::new(),
        }
    }

    pub fn args(&mut self, arg_count: ArgCount) -> &mut Self {
        self.arg_count = arg_count;
        self
    }

    /// Flags in the same group cannot be used together.
    pub fn optional_flag(&mut self, flags: &[&str]) -> &mut Self {
        self.flags.push(Flag {
            values: flags.iter().map(|flag| flag.to_string()).collect(),
        });
        self
    }

    pub fn arg_flag_with_default(&mut self, flag: &str, default: &str, arg_type: ArgType) -> &mut Self {
        self.arg_flags.insert(flag.to_string(), ArgFlag { flag: flag.to_string(), default: default.to_string(), arg_type });
        self
    }

    // `--help` -> `-h`
    pub fn short_flag(&mut self, flags: &[&str]) -> &mut Self {
        for flag in flags.iter() {
            let short_flag = match flag.get(1..3) {
                Some(short_flag) => short_flag.to_string(),
                None => panic!("{flag} is too short to have a short name!"),
            };

            if let Some(old) = self.short_flags.get(&short_flag) {
                panic!("{flag} and {old} have the same short name!")
            }

            self.short_flags.insert(short_flag, flag.to_string());
        }

        self
    }

    fn map_short_flag(&self, flag: &str) -> String {
        match self.short_flags.get(flag) {
            Some(f) => f.to_string(),
            None => flag.to_string(),
        }
    }

    /// `raw_args[..skip_first_n]` are not parsed. It's usually `1`: the path of the binary.
    pub fn parse(&self, raw_args: &[String], skip_first_n: usize) -> Result<ParsedArgs, Error> {
        self.parse_worker(raw_args, skip_first_n).map_err(
            |e| Error {
                span: e.span.render(raw_args, skip_first_n),
                kind: e.kind,
            }
        )
    }

    fn parse_worker(&self, raw_args: &[String], skip_first_n: usize) -> Result<ParsedArgs, RawError> {
        let mut args = vec![];
        let mut flags: Vec<Option<String>> = vec![None; self.flags.len()];
        let mut arg_flags = HashMap::new();
        let mut expecting_flag_arg: Option<ArgFlag> = None;
        let mut no_more_flags = false;
        let raw_args = raw_args.get(skip_first_n..).unwrap_or(&[]);

        'raw_arg_loop: for (arg_index, raw_arg) in raw_args.iter().enumerate() {
            let span = Span::Exact(arg_index + skip_first_n);

            if let Some(arg_flag) = expecting_flag_arg {
                expecting_flag_arg = None;
                let flag_arg = arg_flag.arg_type.parse(raw_arg, span)?;

                if let Some(_) = arg_flags.insert(arg_flag.flag.clone(), flag_arg) {
                    return Err(RawError {
                        span,
                        kind: ErrorKind::SameFlagMultipleTimes(arg_flag.flag.clone(), arg_flag.flag.clone()),
                    });
                }

                continue;
            }

            if raw_arg == "--" {
                no_more_flags = true;
                continue;
            }

            // `-3` is a number, not a flag
            if raw_arg.starts_with("-") && !no_more_flags && raw_arg.parse::<f64>().is_err() {
                let mapped_flag = self.map_short_flag(raw_arg);

                for (flag_index, flag) in self.flags.iter().enumerate() {
                    if flag.values.contains(&mapped_flag) {
                        if let Some(prev) = &flags[flag_index] {
                            return Err(RawError {
                                span,
                                kind: ErrorKind::SameFlagMultipleTimes(prev.to_string(), mapped_flag.to_string()),
                            });
                        }

                        flags[flag_index] = Some(mapped_flag.to_string());
                        continue 'raw_arg_loop;
                    }
                }

                if let Some(arg_flag) = self.arg_flags.get(&mapped_flag) {
                    expecting_flag_arg = Some(arg_flag.clone());
                    continue;
                }

                if let Some((flag, flag_arg)) = raw_arg.split_once('=') {
                    let flag = self.map_short_flag(flag);

                    if let Some(arg_flag) = self.arg_flags.get(&flag) {
                        let flag_arg = arg_flag.arg_type.parse(flag_arg, span)?;

                        if let Some(_) = arg_flags.insert(flag.to_string(), flag_arg) {
                            return Err(RawError {
                                span,
                                kind: ErrorKind::SameFlagMultipleTimes(flag.to_string(), flag.to_string()),
                            });
                        }

                        continue;
                    }
                }

                return Err(RawError {
                    span,
                    kind: ErrorKind::UnknownFlag {
                        flag: raw_arg.to_string(),
                        similar_flag: self.get_similar_flag(raw_arg),
                    },
                });
            }

            args.push(raw_arg.to_string());
        }

        if let Some(arg_flag) = expecting_flag_arg {
            return Err(RawError {
                span: Span::End,
                kind: ErrorKind::MissingArgument(arg_flag.flag.to_string()),
            });
        }

        let wrong_count_span = match &self.arg_count {
            ArgCount::None if !args.is_empty() => Some(Span::NthArg(0)),
            ArgCount::Leq(n) | ArgCount::Exact(n) if args.len() > *n => Some(Span::NthArg(*n)),
            ArgCount::Exact(n) if args.len() < *n => Some(Span::End),
            ArgCount::OneOf(ns) if !ns.contains(&args.len()) => Some(Span::End),
            _ => None,
        };

        if let Some(span) = wrong_count_span {
            return Err(RawError {
                span,
                kind: ErrorKind::WrongArgCount {
                    expected: self.arg_count.clone(),
                    got: args.len(),
                },
            });
        }

        for (flag, arg_flag) in self.arg_flags.iter() {
            if !arg_flags.contains_key(flag) {
                arg_flags.insert(flag.to_string(), arg_flag.arg_type.parse(&arg_flag.default, Span::None)?);
            }
        }

        Ok(ParsedArgs {
            args,
            flags,
            arg_flags,
        })
    }

    fn get_similar_flag(&self, flag: &str) -> Option<String> {
        let mut candidates = vec![];

        for flag in self.flags.iter() {
            for flag in flag.values.iter() {
                candidates.push(flag.to_string());
            }
        }

        for flag in self.arg_flags.keys() {
            candidates.push(flag.to_string());
        }

        // `HashMap` doesn't preserve the order
        candidates.sort();
        get_closest_string(&candidates, flag)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ArgCount {
    Leq(usize),
    Exact(usize),
    OneOf(Vec<usize>),
    None,
}

#[derive(Clone, Debug)]
pub enum ArgType {
    /// Any string
    String,

    /// I recommend you use `Self::integer_between()`.
    Integer {
        min: Option<i128>,
        max: Option<i128>,
    },
}

impl ArgType {
    /// Both inclusive
    pub fn integer_between(min: Option<i128>, max: Option<i128>) -> Self {
        ArgType::Integer { min, max }
    }

    pub(crate) fn parse(&self, arg: &str, span: Span) -> Result<String, RawError> {
        match self {
            ArgType::Integer { min, max } => match arg.parse::<i128>() {
                Ok(n) => {
                    let too_small = matches!(min, Some(min) if n < *min);
                    let too_big = matches!(max, Some(max) if n > *max);

                    if too_small || too_big {
                        return Err(RawError {
                            span,
                            kind: ErrorKind::NumberNotInRange {
                                min: min.map(|n| n.to_string()),
                                max: max.map(|n| n.to_string()),
                                n: n.to_string(),
                            },
                        });
                    }

                    Ok(arg.to_string())
                },
                Err(e) => Err(RawError {
                    span,
                    kind: ErrorKind::ParseIntError(e),
                }),
            },
            ArgType::String => Ok(arg.to_string()),
        }
    }
}

#[derive(Clone, Debug)]
struct Flag {
    values: Vec<String>,
}

#[derive(Clone, Debug)]
struct ArgFlag {
    flag: String,
    default: String,
    arg_type: ArgType,
}

pub struct ParsedArgs {
    args: Vec<String>,
    flags: Vec<Option<String>>,
    arg_flags: HashMap<String, String>,
}

impl ParsedArgs {
    pub fn get_args(&self) -> &[String] {
        &self.args
    }

    // if there's an index error, it panics instead of returning None
    // if it returns None, that means Nth flag is not set
    pub fn get_flag(&self, index: usize) -> Option<String> {
        self.flags[index].clone()
    }

    pub fn get_arg_flag(&self, flag: &str) -> Option<&String> {
        self.arg_flags.get(flag)
    }
}

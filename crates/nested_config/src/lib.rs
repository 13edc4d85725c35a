#![deny(unused_imports)]

use log::LevelFilter;
use nested_cli::{ArgCount, ArgParser, ArgType, Error, ParsedArgs};

pub const MIN_VERBOSITY: u8 = 0;
pub const MAX_VERBOSITY: u8 = 2;

#[derive(Clone, Debug, PartialEq)]
pub struct DemoOption {
    pub do_not_run_and_do_this: Option<SpecialOutput>,
    pub mode: RunMode,

    // prefix each line of the demonstration with the call expression
    pub show_calls: bool,
    pub verbosity: u8,
}

impl DemoOption {
    pub fn help_message() -> Self {
        DemoOption::do_this_and_quit(SpecialOutput::HelpMessage)
    }

    pub fn version_info() -> Self {
        DemoOption::do_this_and_quit(SpecialOutput::VersionInfo)
    }

    pub fn do_this_and_quit(s: SpecialOutput) -> Self {
        DemoOption {
            do_not_run_and_do_this: Some(s),
            ..DemoOption::default()
        }
    }

    pub fn calculate(operation: &str, lhs: &str, rhs: &str) -> Self {
        DemoOption {
            mode: RunMode::Calculate {
                operation: operation.to_string(),
                lhs: lhs.to_string(),
                rhs: rhs.to_string(),
            },
            ..DemoOption::default()
        }
    }

    /// It doesn't touch the global logger. The binary does that.
    pub fn log_level(&self) -> LevelFilter {
        match self.verbosity {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            _ => LevelFilter::Debug,
        }
    }

    /// `raw_args[0]` is the path of the binary.
    pub fn from_cli_args(raw_args: &[String]) -> Result<Self, Error> {
        let parsed = arg_parser().parse(raw_args, 1)?;

        Ok(DemoOption::from_parsed_args(&parsed))
    }

    fn from_parsed_args(parsed: &ParsedArgs) -> Self {
        let do_not_run_and_do_this = match parsed.get_flag(0).as_deref() {
            Some("--help") => Some(SpecialOutput::HelpMessage),
            Some("--version") => Some(SpecialOutput::VersionInfo),
            _ => None,
        };

        // `arg_parser` guarantees that it's an integer in range
        let verbosity = parsed.get_arg_flag("--verbose").and_then(
            |v| v.parse::<u8>().ok()
        ).unwrap_or(MIN_VERBOSITY);

        let mode = match parsed.get_args() {
            [operation, lhs, rhs] => RunMode::Calculate {
                operation: operation.to_string(),
                lhs: lhs.to_string(),
                rhs: rhs.to_string(),
            },
            _ => RunMode::Demo,
        };

        DemoOption {
            do_not_run_and_do_this,
            mode,
            show_calls: parsed.get_flag(1).is_some(),
            verbosity,
        }
    }
}

impl Default for DemoOption {
    fn default() -> Self {
        DemoOption {
            do_not_run_and_do_this: None,
            mode: RunMode::Demo,
            show_calls: false,
            verbosity: MIN_VERBOSITY,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum SpecialOutput {
    HelpMessage,
    VersionInfo,
}

#[derive(Clone, Debug, PartialEq)]
pub enum RunMode {
    Demo,

    // `calculator(operation)(lhs, rhs)`, operands are not parsed yet
    Calculate {
        operation: String,
        lhs: String,
        rhs: String,
    },
}

fn arg_parser() -> ArgParser {
    let mut parser = ArgParser::new();
    parser
        .optional_flag(&["--help", "--version"])
        .optional_flag(&["--show-calls"])
        .short_flag(&["--help", "--version"])
        .arg_flag_with_default(
            "--verbose",
            &MIN_VERBOSITY.to_string(),
            ArgType::integer_between(Some(MIN_VERBOSITY as i128), Some(MAX_VERBOSITY as i128)),
        )
        .args(ArgCount::OneOf(vec![0, 3]));

    parser
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(s: &[&str]) -> Vec<String> {
        s.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn default_test() {
        let opt = DemoOption::from_cli_args(&args(&["nested"])).ok().unwrap();

        assert_eq!(opt, DemoOption::default());
        assert_eq!(opt.log_level(), LevelFilter::Warn);
    }

    #[test]
    fn flags_test() {
        let samples = vec![
            (vec!["nested", "--help"], DemoOption::help_message()),
            (vec!["nested", "-v"], DemoOption::version_info()),
            (
                vec!["nested", "--show-calls", "--verbose", "2"],
                DemoOption { show_calls: true, verbosity: 2, ..DemoOption::default() },
            ),
            (vec!["nested", "divide", "7", "0"], DemoOption::calculate("divide", "7", "0")),
            (
                vec!["nested", "--verbose=1", "add", "-1", "2.5"],
                DemoOption { verbosity: 1, ..DemoOption::calculate("add", "-1", "2.5") },
            ),
        ];

        for (raw_args, opt) in samples.into_iter() {
            match DemoOption::from_cli_args(&args(&raw_args)) {
                Ok(parsed) => assert_eq!(parsed, opt),
                Err(e) => panic!("{raw_args:?}: {}", e.render()),
            }
        }
    }

    #[test]
    fn log_level_test() {
        assert_eq!(DemoOption { verbosity: 1, ..DemoOption::default() }.log_level(), LevelFilter::Info);
        assert_eq!(DemoOption { verbosity: 2, ..DemoOption::default() }.log_level(), LevelFilter::Debug);
    }

    #[test]
    fn error_test() {
        for raw_args in [
            vec!["nested", "add"],
            vec!["nested", "--verbose", "3"],
            vec!["nested", "--colour"],
        ] {
            assert!(DemoOption::from_cli_args(&args(&raw_args)).is_err());
        }
    }
}

use crate::dist::get_closest_string;
use crate::error::{Error, ErrorKind, RawError};
use crate::span::Span;
use smallvec::SmallVec;
use std::collections::HashMap;

/// Flags always start with `--`. Anything else is a positional argument,
/// so `-3` and `-Infinity` are read as arguments.
pub struct ArgParser {
    arg_count: ArgCount,
    arg_type: ArgType,

    // `--json`, `--verbose`
    flags: Vec<String>,

    // `--ceiling=20`, `--ceiling 20`
    arg_flags: HashMap<String, ArgType>,
}

impl ArgParser {
    pub fn new() -> Self {
        ArgParser {
            arg_count: ArgCount::Any,
            arg_type: ArgType::String,
            flags: vec![],
            arg_flags: HashMap::new(),
        }
    }

    pub fn args(&mut self, arg_type: ArgType, arg_count: ArgCount) -> &mut Self {
        self.arg_type = arg_type;
        self.arg_count = arg_count;
        self
    }

    pub fn optional_flag(&mut self, flag: &str) -> &mut Self {
        self.flags.push(flag.to_string());
        self
    }

    pub fn optional_arg_flag(&mut self, flag: &str, arg_type: ArgType) -> &mut Self {
        self.arg_flags.insert(flag.to_string(), arg_type);
        self
    }

    /// `raw_args[..skip_first_n]` (the binary name and the subcommand) are not parsed.
    pub fn parse(&self, raw_args: &[String], skip_first_n: usize) -> Result<ParsedArgs, Error> {
        let mut positional = vec![];

        self.parse_worker(raw_args, skip_first_n, &mut positional).map_err(
            |e| Error {
                span: e.span.render(raw_args, skip_first_n, &positional),
                kind: e.kind,
            }
        )
    }

    fn parse_worker(&self, raw_args: &[String], skip_first_n: usize, positional: &mut Vec<usize>) -> Result<ParsedArgs, RawError> {
        let mut args = SmallVec::new();
        let mut flags = vec![false; self.flags.len()];
        let mut arg_flags = HashMap::new();
        let mut expecting_flag_arg: Option<String> = None;
        let mut no_more_flags = false;
        let rest = raw_args.get(skip_first_n..).unwrap_or(&[]);

        if rest.iter().any(|arg| arg == "--help") {
            return Ok(ParsedArgs {
                args,
                flags: HashMap::new(),
                arg_flags,
                show_help: true,
            });
        }

        for (index, raw_arg) in rest.iter().enumerate() {
            let span = Span::Exact(index + skip_first_n);

            if let Some(flag) = expecting_flag_arg.take() {
                self.insert_arg_flag(&mut arg_flags, &flag, raw_arg, span)?;
                continue;
            }

            if raw_arg == "--" && !no_more_flags {
                no_more_flags = true;
                continue;
            }

            if !raw_arg.starts_with("--") || no_more_flags {
                positional.push(index);
                args.push(self.arg_type.parse(raw_arg, span)?);
                continue;
            }

            if let Some(flag_index) = self.flags.iter().position(|flag| flag == raw_arg) {
                if flags[flag_index] {
                    return Err(RawError {
                        span,
                        kind: ErrorKind::SameFlagMultipleTimes(raw_arg.to_string()),
                    });
                }

                flags[flag_index] = true;
                continue;
            }

            if self.arg_flags.contains_key(raw_arg) {
                expecting_flag_arg = Some(raw_arg.to_string());
                continue;
            }

            if let Some((flag, value)) = raw_arg.split_once('=') {
                if self.arg_flags.contains_key(flag) {
                    self.insert_arg_flag(&mut arg_flags, flag, value, span)?;
                    continue;
                }
            }

            let flag = raw_arg.split('=').next().unwrap_or(raw_arg);

            return Err(RawError {
                span,
                kind: ErrorKind::UnknownFlag {
                    flag: flag.to_string(),
                    similar_flag: self.get_similar_flag(flag),
                },
            });
        }

        if let Some(flag) = expecting_flag_arg {
            return Err(RawError {
                span: Span::End,
                kind: ErrorKind::MissingArgument(flag),
            });
        }

        let span = match self.arg_count {
            ArgCount::Exact(n) if args.len() > n => Some(Span::NthArg(n)),
            ArgCount::Between(_, max) if args.len() > max => Some(Span::NthArg(max)),
            ArgCount::Exact(n) | ArgCount::Between(n, _) if args.len() < n => Some(Span::End),
            _ => None,
        };

        if let Some(span) = span {
            return Err(RawError {
                span,
                kind: ErrorKind::WrongArgCount {
                    expected: self.arg_count,
                    got: args.len(),
                },
            });
        }

        Ok(ParsedArgs {
            args,
            flags: self.flags.iter().cloned().zip(flags.into_iter()).collect(),
            arg_flags,
            show_help: false,
        })
    }

    fn insert_arg_flag(&self, arg_flags: &mut HashMap<String, String>, flag: &str, value: &str, span: Span) -> Result<(), RawError> {
        let arg_type = match self.arg_flags.get(flag) {
            Some(arg_type) => arg_type,
            None => unreachable!(),
        };
        let value = arg_type.parse(value, span)?;

        if arg_flags.insert(flag.to_string(), value).is_some() {
            return Err(RawError {
                span,
                kind: ErrorKind::SameFlagMultipleTimes(flag.to_string()),
            });
        }

        Ok(())
    }

    fn get_similar_flag(&self, flag: &str) -> Option<String> {
        let candidates = self.flags.iter().chain(self.arg_flags.keys()).cloned().collect::<Vec<String>>();

        get_closest_string(&candidates, flag)
    }
}

impl Default for ArgParser {
    fn default() -> Self {
        ArgParser::new()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ArgCount {
    Exact(usize),

    /// both inclusive
    Between(usize, usize),
    Any,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ArgType {
    /// Any string
    String,

    /// Both inclusive. It's checked, but the value is handed back as a string.
    Integer {
        min: Option<i128>,
        max: Option<i128>,
    },
}

impl ArgType {
    pub fn integer_between(min: Option<i128>, max: Option<i128>) -> Self {
        ArgType::Integer { min, max }
    }

    fn parse(&self, arg: &str, span: Span) -> Result<String, RawError> {
        match self {
            ArgType::String => Ok(arg.to_string()),
            ArgType::Integer { min, max } => {
                let n = match arg.parse::<i128>() {
                    Ok(n) => n,
                    Err(_) => {
                        return Err(RawError {
                            span,
                            kind: ErrorKind::ParseIntError(arg.to_string()),
                        });
                    },
                };

                if min.map(|min| n < min).unwrap_or(false) || max.map(|max| n > max).unwrap_or(false) {
                    return Err(RawError {
                        span,
                        kind: ErrorKind::NumberNotInRange {
                            min: min.map(|n| n.to_string()),
                            max: max.map(|n| n.to_string()),
                            n: n.to_string(),
                        },
                    });
                }

                Ok(n.to_string())
            },
        }
    }
}

pub struct ParsedArgs {
    args: SmallVec<[String; 4]>,
    flags: HashMap<String, bool>,
    arg_flags: HashMap<String, String>,
    show_help: bool,
}

impl ParsedArgs {
    pub fn get_args(&self) -> &[String] {
        &self.args
    }

    pub fn get_flag(&self, flag: &str) -> bool {
        self.flags.get(flag).copied().unwrap_or(false)
    }

    pub fn get_arg_flag(&self, flag: &str) -> Option<&str> {
        self.arg_flags.get(flag).map(|value| value.as_str())
    }

    pub fn show_help(&self) -> bool {
        self.show_help
    }
}

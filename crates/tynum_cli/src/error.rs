use crate::ArgCount;
use crate::span::{RenderedSpan, Span, underline_span};
use colored::Colorize;

#[derive(Clone, Debug, PartialEq)]
pub struct Error {
    pub span: RenderedSpan,
    pub kind: ErrorKind,
}

impl Error {
    pub fn render(&self, color: bool) -> String {
        let title = if color {
            "[Error]".red().to_string()
        } else {
            String::from("[Error]")
        };

        format!("{title} {}\n{}", self.kind.render(), underline_span(&self.span))
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(fmt, "{}", self.render(false))
    }
}

impl std::error::Error for Error {}

// before the span is rendered
pub(crate) struct RawError {
    pub span: Span,
    pub kind: ErrorKind,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ErrorKind {
    ParseIntError(String),
    NumberNotInRange {
        min: Option<String>,
        max: Option<String>,
        n: String,
    },
    SameFlagMultipleTimes(String),

    /// of an arg flag
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
            ErrorKind::ParseIntError(s) => format!("Cannot parse `{s}` as an integer."),
            ErrorKind::NumberNotInRange { min, max, n } => match (min, max) {
                (Some(min), Some(max)) => format!("N is supposed to be between {min} and {max}, but is {n}."),
                (Some(min), None) => format!("N is supposed to be at least {min}, but is {n}."),
                (None, Some(max)) => format!("N is supposed to be at most {max}, but is {n}."),
                (None, None) => unreachable!(),
            },
            ErrorKind::SameFlagMultipleTimes(flag) => format!("Flag `{flag}` cannot be used multiple times."),
            ErrorKind::MissingArgument(flag) => format!("A value is required for flag `{flag}`, but is missing."),
            ErrorKind::WrongArgCount { expected, got } => format!(
                "Expected {} argument{}, got {got}.",
                match expected {
                    ArgCount::Exact(n) => format!("exactly {n}"),
                    ArgCount::Between(min, max) => format!("{min} to {max}"),
                    ArgCount::Any => unreachable!(),
                },
                match expected {
                    ArgCount::Exact(1) => "",
                    _ => "s",
                },
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

use crate::Error;
use tynum_cli::{
    ArgCount,
    ArgParser,
    ArgType,
    get_closest_string,
};
use tynum_config::{EngineOption, MAX_MAGNITUDE_CEILING, MAX_VERBOSITY, SignCrossing};
use tynum_error::{EngineError, ErrorKind};
use tynum_eval::Op;

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Eval {
        op: Op,

        // not parsed yet
        args: Vec<String>,
        option: EngineOption,
        json: bool,
    },
    Help(String),
}

/// `args[0]` is the path of the binary.
pub fn parse_args(args: &[String]) -> Result<Command, Error> {
    let op = match args.get(1).map(|arg| arg.as_str()) {
        None | Some("help" | "--help") => {
            return Ok(Command::Help(general_help_message()));
        },
        Some(name) => match Op::from_name(name) {
            Some(op) => op,
            None => {
                return Err(EngineError::new(ErrorKind::UnknownOperator {
                    op: name.to_string(),
                    similar_op: get_similar_op(name),
                }).into());
            },
        },
    };

    let (min, max) = op.arity();
    let parsed_args = ArgParser::new()
        .optional_flag("--parity")
        .optional_flag("--json")
        .optional_flag("--verbose")
        .optional_arg_flag("--ceiling", ArgType::integer_between(Some(1), Some(MAX_MAGNITUDE_CEILING as i128)))
        .args(
            ArgType::String,
            if min == max { ArgCount::Exact(min) } else { ArgCount::Between(min, max) },
        )
        .parse(args, 2)?;

    if parsed_args.show_help() {
        return Ok(Command::Help(op_help_message(op)));
    }

    let mut option = EngineOption::default();

    if parsed_args.get_flag("--parity") {
        option.sign_crossing = SignCrossing::Parity;
    }

    if parsed_args.get_flag("--verbose") {
        option.verbosity = MAX_VERBOSITY;
    }

    if let Some(ceiling) = parsed_args.get_arg_flag("--ceiling") {
        // `ArgParser` has already checked the range
        option.magnitude_ceiling = match ceiling.parse::<usize>() {
            Ok(n) => n,
            Err(_) => unreachable!(),
        };
    }

    Ok(Command::Eval {
        op,
        args: parsed_args.get_args().to_vec(),
        option,
        json: parsed_args.get_flag("--json"),
    })
}

fn get_similar_op(name: &str) -> Option<String> {
    let candidates = Op::ALL.iter().map(|op| op.name().to_string()).collect::<Vec<String>>();

    get_closest_string(&candidates, name)
}

fn general_help_message() -> String {
    format!(
        "Usage: tynum <OP> <ARGS> [FLAGS]

Operators:
{}

Flags:
    --ceiling=N    magnitude ceiling of arithmetic and ranges (default: 1000)
    --parity       a negative result of a sign-crossing addition is `number`
    --json         dump the result as json
    --verbose      print debug logs to stderr
    --help         print this message

Literals: canonical integers (`-42`), `Infinity`, `-Infinity` and `number`.",
        Op::ALL.iter().map(
            |op| format!("    {}", op.help_message())
        ).collect::<Vec<String>>().join("\n"),
    )
}

fn op_help_message(op: Op) -> String {
    format!("Usage: tynum {}", op.help_message())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(args: &str) -> Vec<String> {
        args.split(' ').map(|arg| arg.to_string()).collect()
    }

    #[test]
    fn parse_args_test() {
        match parse_args(&raw("tynum sub 3 -5 --parity --ceiling=20")).unwrap() {
            Command::Eval { op, args, option, json } => {
                assert_eq!(op, Op::Sub);
                assert_eq!(args, vec!["3", "-5"]);
                assert_eq!(option.sign_crossing, SignCrossing::Parity);
                assert_eq!(option.magnitude_ceiling, 20);
                assert_eq!(option.verbosity, 1);
                assert!(!json);
            },
            command => panic!("{command:?}"),
        }

        match parse_args(&raw("tynum closed_range 0 5 --json --verbose")).unwrap() {
            Command::Eval { op, option, json, .. } => {
                assert_eq!(op, Op::ClosedRange);
                assert_eq!(option.verbosity, MAX_VERBOSITY);
                assert!(json);
            },
            command => panic!("{command:?}"),
        }

        assert!(matches!(parse_args(&raw("tynum")).unwrap(), Command::Help(_)));
        assert!(matches!(parse_args(&raw("tynum range --help")).unwrap(), Command::Help(_)));
    }

    #[test]
    fn unknown_op_test() {
        match parse_args(&raw("tynum rnage 0 5")) {
            Err(Error::EngineError(e)) => assert_eq!(
                e.kind,
                ErrorKind::UnknownOperator { op: String::from("rnage"), similar_op: Some(String::from("range")) },
            ),
            result => panic!("{result:?}"),
        }
    }
}

//! Integer arithmetic over literals, infinities and `number`.
//!
//! ```
//! use tynum::{Engine, Int};
//!
//! let engine = Engine::default();
//! let sum = engine.add(&Int::from(1i64), &Int::from(2i64)).unwrap();
//!
//! assert_eq!(sum, Int::from(3i64));
//! ```

#![deny(unused_imports)]

use json::JsonValue;
use log::info;

mod cli;
mod dump;
mod error;
mod logger;


pub use cli::{Command, parse_args};
pub use dump::DumpJson;
pub use error::Error;
pub use logger::init_logger;

pub use tynum_eval::*;

/// The text that the binary prints to stdout.
pub fn run_command(command: &Command) -> Result<String, Error> {
    match command {
        Command::Help(message) => Ok(message.to_string()),
        Command::Eval { op, args, option, json } => {
            // the command line is lenient: `007` is `7`
            let args = args.iter().map(
                |arg| Int::from_lenient(arg)
            ).collect::<Result<Vec<Int>, _>>()?;

            info!("{op} {}", args.iter().map(|arg| arg.to_string()).collect::<Vec<String>>().join(" "));

            let result = Engine::new(option.clone()).eval(*op, &args)?;

            if *json {
                let mut output = JsonValue::new_object();
                output["op"] = op.name().into();
                output["args"] = args.dump_json();
                output["result"] = result.dump_json();

                Ok(output.pretty(4))
            }

            else {
                Ok(result.to_string())
            }
        },
    }
}

/// `parse_args` and `run_command`, without installing a logger.
pub fn run(args: &[String]) -> Result<String, Error> {
    run_command(&parse_args(args)?)
}

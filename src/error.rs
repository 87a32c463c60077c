use tynum_cli::Error as CliError;
use tynum_error::EngineError;

/// It decides the exit code of the process.
#[derive(Clone, Debug, PartialEq)]
pub enum Error {
    CliError(CliError),

    // an unknown operator is an engine error, not a cli error
    EngineError(EngineError),
}

impl Error {
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::CliError(_) => 12,
            Error::EngineError(_) => 13,
        }
    }

    pub fn render(&self, color: bool) -> String {
        match self {
            Error::CliError(e) => e.render(color),
            Error::EngineError(e) => e.render(color),
        }
    }
}

impl From<CliError> for Error {
    fn from(e: CliError) -> Error {
        Error::CliError(e)
    }
}

impl From<EngineError> for Error {
    fn from(e: EngineError) -> Error {
        Error::EngineError(e)
    }
}

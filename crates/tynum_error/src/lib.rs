#![deny(unused_imports)]

use colored::Colorize;
use std::fmt;

mod kind;

pub use kind::ErrorKind;

/// Every failure of the engine is one of these. Results that are merely
/// unknown (the general integer, an undecidable comparison) are NOT errors,
/// they are ordinary values.
#[derive(Clone, Debug, PartialEq)]
pub struct EngineError {
    pub kind: ErrorKind,

    // extra sentence, rendered after the message
    pub note: Option<String>,
}

impl EngineError {
    pub fn new(kind: ErrorKind) -> Self {
        EngineError {
            kind,
            note: None,
        }
    }

    pub fn invalid_literal(literal: &str) -> Self {
        EngineError::new(ErrorKind::InvalidLiteral(literal.to_string()))
    }

    pub fn magnitude_out_of_bound(magnitude: String, ceiling: usize) -> Self {
        EngineError::new(ErrorKind::MagnitudeOutOfBound { magnitude, ceiling })
    }

    pub fn set_note(&mut self, note: String) -> &mut Self {
        self.note = Some(note);
        self
    }

    pub fn with_note(mut self, note: &str) -> Self {
        self.set_note(note.to_string());
        self
    }

    pub fn render(&self, color: bool) -> String {
        let title = format!("[Error E{:04}]", self.kind.index());
        let title = if color { title.red().to_string() } else { title };

        let note = match &self.note {
            Some(note) => format!(
                "\n{} {note}",
                if color { "Note:".yellow().to_string() } else { String::from("Note:") },
            ),
            None => String::new(),
        };

        format!("{title} {}{note}", self.kind.render())
    }
}

impl fmt::Display for EngineError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "{}", self.render(false))
    }
}

impl std::error::Error for EngineError {}

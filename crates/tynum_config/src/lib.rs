#![deny(unused_imports)]

use log::LevelFilter;

pub const MIN_VERBOSITY: u8 = 0;
pub const MAX_VERBOSITY: u8 = 2;

// Unary sequences are built one unit at a time, so the engine refuses to build
// one for a magnitude at or above this.
pub const DEFAULT_MAGNITUDE_CEILING: usize = 1000;

// the command line refuses anything above this
pub const MAX_MAGNITUDE_CEILING: usize = 1 << 24;

/// What `add` (and `subtract`) does when the operands have opposite signs.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SignCrossing {
    /// Always returns the concrete literal.
    Resolve,

    /// A negative result degrades to the general integer, like the
    /// type-level engine this library mirrors.
    Parity,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EngineOption {
    pub magnitude_ceiling: usize,
    pub sign_crossing: SignCrossing,

    // MIN_VERBOSITY ..= MAX_VERBOSITY
    pub verbosity: u8,
}

impl EngineOption {
    pub fn parity() -> Self {
        EngineOption {
            sign_crossing: SignCrossing::Parity,
            ..EngineOption::default()
        }
    }

    pub fn with_ceiling(magnitude_ceiling: usize) -> Self {
        EngineOption {
            magnitude_ceiling,
            ..EngineOption::default()
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        match self.verbosity {
            MIN_VERBOSITY => LevelFilter::Off,
            1 => LevelFilter::Warn,
            _ => LevelFilter::Debug,
        }
    }
}

impl Default for EngineOption {
    fn default() -> Self {
        EngineOption {
            magnitude_ceiling: DEFAULT_MAGNITUDE_CEILING,
            sign_crossing: SignCrossing::Resolve,
            verbosity: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_test() {
        let default = EngineOption::default();
        assert_eq!(default.magnitude_ceiling, 1000);
        assert_eq!(default.sign_crossing, SignCrossing::Resolve);
        assert_eq!(default.log_level(), LevelFilter::Warn);

        let verbose = EngineOption { verbosity: MAX_VERBOSITY, ..EngineOption::default() };
        assert_eq!(verbose.log_level(), LevelFilter::Debug);

        let quiet = EngineOption { verbosity: MIN_VERBOSITY, ..EngineOption::default() };
        assert_eq!(quiet.log_level(), LevelFilter::Off);

        let parity = EngineOption::parity();
        assert_eq!(parity.sign_crossing, SignCrossing::Parity);
        assert_eq!(parity.magnitude_ceiling, default.magnitude_ceiling);

        assert_eq!(EngineOption::with_ceiling(20).magnitude_ceiling, 20);
    }
}

use log::{LevelFilter, Log, Metadata, Record};

struct StderrLogger;

static LOGGER: StderrLogger = StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{}] {}: {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

/// It can only be installed once per process. Later calls only change the level.
pub fn init_logger(level: LevelFilter) {
    // `Err` means that a logger is already installed
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(level);
}

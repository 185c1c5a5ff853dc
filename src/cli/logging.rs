use log::LevelFilter;
use simple_logger::SimpleLogger;

/// Pick the log level from the command-line flags
pub fn log_level(debug: bool, quiet: bool) -> LevelFilter {
    if debug {
        LevelFilter::Debug
    } else if quiet {
        LevelFilter::Error
    } else {
        LevelFilter::Info
    }
}

/// Initialize logging with the specified level
pub fn init_logging(level: LevelFilter) {
    // A logger may already be installed (e.g. by a test harness)
    let _ = SimpleLogger::new()
        .with_level(level)
        .init();
}

/// Configure backtrace if trace is enabled
pub fn configure_backtrace(trace: bool) {
    if trace {
        std::env::set_var("RUST_BACKTRACE", "1");
    }
}

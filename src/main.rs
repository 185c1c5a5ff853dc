use std::process::ExitCode;

// Module declarations
mod builder;
mod config;
mod markdown;
mod cli;
mod utils;

fn main() -> ExitCode {
    cli::run()
}

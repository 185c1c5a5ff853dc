pub mod types;
pub mod logging;

use clap::Parser;
use std::process::ExitCode;

use crate::builder;
use crate::config;
use crate::markdown::ComrakConverter;
use crate::utils::error::BoxResult;

/// Run the command-line interface
pub fn run() -> ExitCode {
    let cli = types::Cli::parse();

    logging::init_logging(logging::log_level(cli.debug, cli.quiet));
    logging::configure_backtrace(cli.trace);

    match build(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Build failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn build(cli: &types::Cli) -> BoxResult<()> {
    let config = config::load_config(cli.config.as_deref(), &cli.overrides())?;

    let extensions: Vec<String> = config.extensions.iter().map(|e| e.to_string()).collect();
    log::info!(
        "Converting {} with extensions [{}]",
        config.source.display(),
        extensions.join(", ")
    );

    let converter = ComrakConverter::new(&config);
    builder::build_document(&config, &converter)?;
    Ok(())
}

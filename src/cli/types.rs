use clap::Parser;
use std::path::PathBuf;

use crate::config::ConfigOverrides;

/// Main CLI parser structure
#[derive(Parser, Debug)]
#[command(name = "syntaxdoc")]
#[command(about = "Builds the GridWorld syntax page from Markdown", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Configuration file (.toml, .yml or .yaml)
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Markdown source (defaults to ./syntax.md)
    #[arg(short, long, value_name = "FILE")]
    pub source: Option<PathBuf>,

    /// HTML template (defaults to ./syntax_template.html)
    #[arg(short, long, value_name = "FILE")]
    pub template: Option<PathBuf>,

    /// Output file (defaults to ./syntax.html)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Page title
    #[arg(long, value_name = "TEXT")]
    pub title: Option<String>,

    /// Show the full backtrace when an error occurs
    #[arg(long, default_value_t = false)]
    pub trace: bool,

    /// Enable verbose debugging
    #[arg(short = 'g', long, default_value_t = false)]
    pub debug: bool,

    /// Silence output
    #[arg(short, long, default_value_t = false, conflicts_with = "debug")]
    pub quiet: bool,
}

impl Cli {
    /// Command-line values that override the configuration
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            source: self.source.clone(),
            template: self.template.clone(),
            output: self.output.clone(),
            title: self.title.clone(),
        }
    }
}

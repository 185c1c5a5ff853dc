use std::path::{Path, PathBuf};
use log::debug;

use crate::config::types::BuildConfig;
use crate::config::validation;
use crate::utils::error::{BoxResult, BuildError};
use crate::utils::fs;

/// Values given on the command line; they win over the config file
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub source: Option<PathBuf>,
    pub template: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub title: Option<String>,
}

/// Load the build configuration.
///
/// Starts from the compiled-in defaults, merges `config_file` when given,
/// then applies the command-line overrides and validates the result.
pub fn load_config(
    config_file: Option<&Path>,
    overrides: &ConfigOverrides,
) -> BoxResult<BuildConfig> {
    let mut config = match config_file {
        Some(path) => {
            debug!("Loading configuration from {}", path.display());
            parse_config_file(path)?
        }
        None => {
            debug!("No configuration file given, using defaults");
            BuildConfig::default()
        }
    };

    apply_overrides(&mut config, overrides);

    validation::validate_config(&config)?;

    debug!("Configuration loaded: {:?}", config);
    Ok(config)
}

/// Parse a configuration file based on its extension
fn parse_config_file(path: &Path) -> BoxResult<BuildConfig> {
    let content = fs::read_file(path)?;

    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "toml" => toml::from_str(&content).map_err(|e| {
            BuildError::Config(format!(
                "Failed to parse TOML configuration ({}): {}", path.display(), e
            ))
            .into()
        }),
        "yml" | "yaml" => serde_yaml::from_str(&content).map_err(|e| {
            BuildError::Config(format!(
                "Failed to parse YAML configuration ({}): {}", path.display(), e
            ))
            .into()
        }),
        _ => Err(BuildError::Config(format!(
            "Unsupported configuration file format: {}", path.display()
        ))
        .into()),
    }
}

fn apply_overrides(config: &mut BuildConfig, overrides: &ConfigOverrides) {
    if let Some(source) = &overrides.source {
        config.source = source.clone();
    }
    if let Some(template) = &overrides.template {
        config.template = template.clone();
    }
    if let Some(output) = &overrides.output {
        config.output = output.clone();
    }
    if let Some(title) = &overrides.title {
        config.title = title.clone();
    }
}

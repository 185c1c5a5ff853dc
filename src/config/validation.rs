use log::debug;

use crate::config::BuildConfig;
use crate::utils::error::{BoxResult, BuildError};

/// Validate the configuration
pub fn validate_config(config: &BuildConfig) -> BoxResult<()> {
    validate_toc_levels(config)?;
    validate_toc_marker(config)?;

    debug!(
        "Building {} from {} with template {}",
        config.output.display(),
        config.source.display(),
        config.template.display()
    );
    Ok(())
}

/// Heading levels must lie within h1..h6 and form a non-empty range
fn validate_toc_levels(config: &BuildConfig) -> BoxResult<()> {
    let toc = &config.toc;

    for level in [toc.min_level, toc.max_level] {
        if !(1..=6).contains(&level) {
            return Err(BuildError::Config(format!(
                "TOC heading level must be between 1 and 6, got {}", level
            ))
            .into());
        }
    }

    if toc.min_level > toc.max_level {
        return Err(BuildError::Config(format!(
            "TOC min_level ({}) is greater than max_level ({})", toc.min_level, toc.max_level
        ))
        .into());
    }

    Ok(())
}

fn validate_toc_marker(config: &BuildConfig) -> BoxResult<()> {
    if config.toc.marker.trim().is_empty() {
        return Err(BuildError::Config("TOC marker must not be empty".to_string()).into());
    }
    Ok(())
}

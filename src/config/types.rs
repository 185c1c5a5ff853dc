use std::fmt;
use std::path::PathBuf;
use serde::{Serialize, Deserialize};

use crate::config::defaults;
use crate::markdown::toc::TocOptions;

/// Markdown extensions understood by the converter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Extension {
    /// Fenced code blocks
    FencedCode,
    /// Syntax highlighting of fenced code
    #[serde(rename = "codehilite")]
    CodeHilite,
    /// Heading anchors, heading tree and the `[TOC]` marker
    Toc,
    /// Tables, footnotes and definition lists
    Extra,
}

impl fmt::Display for Extension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Extension::FencedCode => "fenced_code",
            Extension::CodeHilite => "codehilite",
            Extension::Toc => "toc",
            Extension::Extra => "extra",
        };
        f.write_str(name)
    }
}

/// Build configuration, constructed once at startup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Markdown source document
    #[serde(default = "defaults::default_source")]
    pub source: PathBuf,

    /// HTML template carrying the substitution markers
    #[serde(default = "defaults::default_template")]
    pub template: PathBuf,

    /// Generated HTML document
    #[serde(default = "defaults::default_output")]
    pub output: PathBuf,

    /// Page title substituted into the template
    #[serde(default = "defaults::default_title")]
    pub title: String,

    /// Enabled Markdown extensions
    #[serde(default = "defaults::default_extensions")]
    pub extensions: Vec<Extension>,

    /// Table of contents options
    #[serde(default)]
    pub toc: TocOptions,
}

impl BuildConfig {
    /// Whether the given extension is enabled
    pub fn has_extension(&self, extension: Extension) -> bool {
        self.extensions.contains(&extension)
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        BuildConfig {
            source: defaults::default_source(),
            template: defaults::default_template(),
            output: defaults::default_output(),
            title: defaults::default_title(),
            extensions: defaults::default_extensions(),
            toc: TocOptions::default(),
        }
    }
}

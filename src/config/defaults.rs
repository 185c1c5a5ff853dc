use std::path::PathBuf;

use crate::config::types::Extension;

/// Default Markdown source document
pub fn default_source() -> PathBuf {
    PathBuf::from("syntax.md")
}

/// Default HTML template
pub fn default_template() -> PathBuf {
    PathBuf::from("syntax_template.html")
}

/// Default output document
pub fn default_output() -> PathBuf {
    PathBuf::from("syntax.html")
}

/// Default page title
pub fn default_title() -> String {
    "Exomars GridWorld language".to_string()
}

/// Default enabled Markdown extensions
pub fn default_extensions() -> Vec<Extension> {
    vec![
        Extension::FencedCode,
        Extension::CodeHilite,
        Extension::Toc,
        Extension::Extra,
    ]
}

/// Shallowest heading level included in the TOC
pub fn default_toc_min_level() -> u8 {
    1
}

/// Deepest heading level included in the TOC
pub fn default_toc_max_level() -> u8 {
    6
}

/// Paragraph text replaced by an inline table of contents
pub fn default_toc_marker() -> String {
    "[TOC]".to_string()
}

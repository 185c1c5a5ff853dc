mod generator;
mod parser;

use serde::{Serialize, Deserialize};

use crate::config::defaults;

pub use generator::{render_toc, expand_toc_marker};
pub use parser::{nest_headings, FlatHeading};

/// Options for table of contents generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TocOptions {
    /// Minimum level to include (h1 = 1, h2 = 2, etc.)
    #[serde(default = "defaults::default_toc_min_level")]
    pub min_level: u8,
    /// Maximum level to include
    #[serde(default = "defaults::default_toc_max_level")]
    pub max_level: u8,
    /// Paragraph text replaced by the rendered TOC inside the body
    #[serde(default = "defaults::default_toc_marker")]
    pub marker: String,
}

impl Default for TocOptions {
    fn default() -> Self {
        Self {
            min_level: defaults::default_toc_min_level(),
            max_level: defaults::default_toc_max_level(),
            marker: defaults::default_toc_marker(),
        }
    }
}

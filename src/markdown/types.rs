use serde::{Serialize, Deserialize};

use crate::utils::error::BoxResult;

/// A document heading with its nested sub-headings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingEntry {
    /// Heading level (1 for h1 through 6 for h6)
    pub level: u8,
    /// Anchor id, unique within the document
    pub id: String,
    /// Display text, already escaped for HTML text position
    pub name: String,
    pub children: Vec<HeadingEntry>,
}

impl HeadingEntry {
    pub fn new(level: u8, id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            level,
            id: id.into(),
            name: name.into(),
            children: Vec::new(),
        }
    }

    /// Attach sub-headings, builder style
    pub fn with_children(mut self, children: Vec<HeadingEntry>) -> Self {
        self.children = children;
        self
    }
}

/// Output of a Markdown conversion: body HTML plus the heading forest
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Conversion {
    pub html: String,
    pub headings: Vec<HeadingEntry>,
}

/// Converts Markdown text into HTML and a heading forest
pub trait MarkdownConverter {
    fn convert(&self, text: &str) -> BoxResult<Conversion>;
}

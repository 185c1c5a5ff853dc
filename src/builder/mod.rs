mod document;
mod template;

pub use document::build_document;
pub use template::{substitute_placeholders, CONTENT_MARKER, TITLE_MARKER, TOC_MARKER};

/// Replaced by the rendered document body
pub const CONTENT_MARKER: &str = "CONTENTSHERE";
/// Replaced by the page title
pub const TITLE_MARKER: &str = "TITLEHERE";
/// Replaced by the rendered table of contents
pub const TOC_MARKER: &str = "TOCHERE";

/// Fill the template markers with literal string replacement.
///
/// Replacement runs content, then title, then TOC, each over the whole
/// string. A marker missing from the template is silently skipped.
pub fn substitute_placeholders(template: &str, content: &str, title: &str, toc: &str) -> String {
    template
        .replace(CONTENT_MARKER, content)
        .replace(TITLE_MARKER, title)
        .replace(TOC_MARKER, toc)
}

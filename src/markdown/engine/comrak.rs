use comrak::nodes::{AstNode, NodeCode, NodeValue};
use comrak::{Anchorizer, Arena, Options};
use log::{debug, warn};

use crate::config::{BuildConfig, Extension};
use crate::markdown::renderer::SyntaxHighlighter;
use crate::markdown::toc::{expand_toc_marker, nest_headings, FlatHeading, TocOptions};
use crate::markdown::types::{Conversion, MarkdownConverter};
use crate::utils::error::{BoxResult, BuildError};

/// Create comrak options for the enabled extension set
pub fn create_comrak_options<'a>(extensions: &[Extension]) -> Options<'a> {
    let mut options = Options::default();

    // Fenced code is part of CommonMark and always parsed; codehilite runs after rendering
    if extensions.contains(&Extension::Extra) {
        options.extension.table = true;
        options.extension.footnotes = true;
        options.extension.description_lists = true;
    }

    if extensions.contains(&Extension::Toc) {
        options.extension.header_ids = Some(String::new());
    }

    // Render options
    options.render.hardbreaks = false;
    options.render.github_pre_lang = false;
    options.render.unsafe_ = true; // Raw HTML in the source passes through

    options
}

/// Markdown converter backed by comrak
pub struct ComrakConverter<'a> {
    options: Options<'a>,
    highlighter: Option<SyntaxHighlighter>,
    toc: Option<TocOptions>,
}

impl<'a> ComrakConverter<'a> {
    /// Create a converter from the build configuration
    pub fn new(config: &BuildConfig) -> Self {
        let highlighter = config
            .has_extension(Extension::CodeHilite)
            .then(SyntaxHighlighter::new);

        let toc = config
            .has_extension(Extension::Toc)
            .then(|| config.toc.clone());

        ComrakConverter {
            options: create_comrak_options(&config.extensions),
            highlighter,
            toc,
        }
    }
}

impl MarkdownConverter for ComrakConverter<'_> {
    fn convert(&self, text: &str) -> BoxResult<Conversion> {
        let arena = Arena::new();
        let root = comrak::parse_document(&arena, text, &self.options);

        let headings = match &self.toc {
            Some(toc) => nest_headings(collect_headings(root), toc),
            None => Vec::new(),
        };
        debug!("Found {} top-level headings", headings.len());

        let mut html = render_html(root, &self.options)?;

        if let Some(highlighter) = &self.highlighter {
            match highlighter.highlight_html(&html) {
                Ok(highlighted) => html = highlighted,
                Err(e) => warn!("Syntax highlighting failed: {}", e),
            }
        }

        if let Some(toc) = &self.toc {
            html = expand_toc_marker(&html, &toc.marker, &headings);
        }

        Ok(Conversion { html, headings })
    }
}

/// Render the parsed document to an HTML string
fn render_html<'a>(root: &'a AstNode<'a>, options: &Options) -> BoxResult<String> {
    let mut buffer = Vec::new();
    comrak::format_html(root, options, &mut buffer)
        .map_err(|e| BuildError::Conversion(e.to_string()))?;

    String::from_utf8(buffer)
        .map_err(|e| BuildError::Conversion(format!("Rendered HTML is not UTF-8: {}", e)).into())
}

/// Collect every heading in document order with the anchor comrak renders for it
fn collect_headings<'a>(root: &'a AstNode<'a>) -> Vec<FlatHeading> {
    let mut anchorizer = Anchorizer::new();
    let mut headings = Vec::new();

    for node in root.descendants() {
        let level = match node.data.borrow().value {
            NodeValue::Heading(ref heading) => heading.level,
            _ => continue,
        };

        let mut text = String::new();
        collect_text(node, &mut text);

        let id = anchorizer.anchorize(text.clone());
        let name = html_escape::encode_text(text.trim()).to_string();
        headings.push(FlatHeading::new(level, id, name));
    }

    headings
}

/// Plain text of a node, gathered the same way comrak does for header ids
fn collect_text<'a>(node: &'a AstNode<'a>, output: &mut String) {
    match node.data.borrow().value {
        NodeValue::Text(ref literal) | NodeValue::Code(NodeCode { ref literal, .. }) => {
            output.push_str(literal)
        }
        NodeValue::LineBreak | NodeValue::SoftBreak => output.push(' '),
        _ => {
            for child in node.children() {
                collect_text(child, output);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn convert(config: &BuildConfig, markdown: &str) -> Conversion {
        ComrakConverter::new(config).convert(markdown).unwrap()
    }

    #[test]
    fn test_comrak_rendering() {
        let conversion = convert(&BuildConfig::default(), "# Hello, World!\n\nThis is a **bold** statement.");

        assert!(conversion.html.contains("<h1>"));
        assert!(conversion.html.contains("<strong>bold</strong>"));
    }

    #[test]
    fn test_heading_forest_and_anchors() {
        let markdown = "# Overview\n\nText.\n\n# Usage\n\n## Examples\n\nMore.\n";
        let conversion = convert(&BuildConfig::default(), markdown);

        let ids: Vec<&str> = conversion.headings.iter().map(|h| h.id.as_str()).collect();
        assert_eq!(ids, vec!["overview", "usage"]);
        assert_eq!(conversion.headings[1].children.len(), 1);
        assert_eq!(conversion.headings[1].children[0].id, "examples");
        assert_eq!(conversion.headings[1].children[0].name, "Examples");

        for id in ["overview", "usage", "examples"] {
            assert!(conversion.html.contains(&format!("id=\"{}\"", id)));
        }
    }

    #[test]
    fn test_duplicate_headings_match_rendered_anchors() {
        let conversion = convert(&BuildConfig::default(), "## Notes\n\n## Notes\n");

        let ids: Vec<&str> = conversion.headings.iter().map(|h| h.id.as_str()).collect();
        assert_eq!(ids, vec!["notes", "notes-1"]);
        assert!(conversion.html.contains("id=\"notes-1\""));
    }

    #[test]
    fn test_heading_names_are_escaped() {
        let conversion = convert(&BuildConfig::default(), "# Moves & `turns`\n");

        assert_eq!(conversion.headings[0].name, "Moves &amp; turns");
        assert_eq!(conversion.headings[0].id, "moves--turns");
    }

    #[test]
    fn test_toc_marker_is_expanded() {
        let conversion = convert(&BuildConfig::default(), "[TOC]\n\n# Intro\n");

        assert!(conversion
            .html
            .contains("<div class=\"toc\"><ul><li><a href=\"#intro\">Intro</a></li></ul></div>"));
        assert!(!conversion.html.contains("[TOC]"));
    }

    #[test]
    fn test_without_toc_extension() {
        let config = BuildConfig {
            extensions: vec![Extension::FencedCode],
            ..BuildConfig::default()
        };
        let conversion = convert(&config, "[TOC]\n\n# Intro\n");

        assert!(conversion.headings.is_empty());
        assert!(conversion.html.contains("<p>[TOC]</p>"));
        assert!(!conversion.html.contains("id=\"intro\""));
    }

    #[test]
    fn test_extra_extensions() {
        let markdown = "| a | b |\n|---|---|\n| 1 | 2 |\n\nNote[^1]\n\n[^1]: Footnote.\n";
        let conversion = convert(&BuildConfig::default(), markdown);

        assert!(conversion.html.contains("<table>"));
        assert!(conversion.html.contains("footnote"));
    }

    #[test]
    fn test_fenced_code_is_highlighted() {
        let conversion = convert(&BuildConfig::default(), "```rust\nfn main() {}\n```\n");
        assert!(conversion.html.contains("<div class=\"codehilite\">"));

        let config = BuildConfig {
            extensions: vec![Extension::FencedCode],
            ..BuildConfig::default()
        };
        let plain = convert(&config, "```rust\nfn main() {}\n```\n");
        assert!(plain.html.contains("<pre><code class=\"language-rust\">fn main() {}"));
    }

    #[test]
    fn test_toc_levels_limit_forest_not_anchors() {
        let mut config = BuildConfig::default();
        config.toc.max_level = 1;
        let conversion = convert(&config, "# Top\n\n## Sub\n");

        assert_eq!(conversion.headings.len(), 1);
        assert!(conversion.headings[0].children.is_empty());
        assert!(conversion.html.contains("id=\"sub\""));
    }
}

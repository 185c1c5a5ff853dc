use syntect::parsing::SyntaxSet;
use syntect::html::{ClassedHTMLGenerator, ClassStyle};
use syntect::util::LinesWithEndings;
use regex::Regex;
use lazy_static::lazy_static;

use crate::utils::error::BoxResult;

lazy_static! {
    // Code blocks as emitted by comrak, with or without an info string
    static ref CODE_BLOCK_REGEX: Regex = Regex::new(
        r#"<pre><code( class="language-([^"]+)")?>([^<]*)</code></pre>"#
    ).unwrap();
}

/// Highlights fenced code blocks with class-based spans
pub struct SyntaxHighlighter {
    syntax_set: SyntaxSet,
}

impl SyntaxHighlighter {
    /// Create a highlighter over syntect's bundled syntaxes
    pub fn new() -> Self {
        SyntaxHighlighter {
            syntax_set: SyntaxSet::load_defaults_newlines(),
        }
    }

    /// Rewrite every code block in `html` into a `codehilite` block
    pub fn highlight_html(&self, html: &str) -> BoxResult<String> {
        let mut output = String::with_capacity(html.len());
        let mut last = 0;

        for caps in CODE_BLOCK_REGEX.captures_iter(html) {
            let Some(block) = caps.get(0) else { continue };

            let code = html_escape::decode_html_entities(&caps[3]);
            let lang = caps.get(2).map(|m| m.as_str());

            output.push_str(&html[last..block.start()]);
            output.push_str(&self.highlight_code(&code, lang)?);
            last = block.end();
        }

        output.push_str(&html[last..]);
        Ok(output)
    }

    /// Highlight a single block; unknown languages render as plain text
    pub fn highlight_code(&self, code: &str, lang: Option<&str>) -> BoxResult<String> {
        let syntax = lang
            .and_then(|token| self.syntax_set.find_syntax_by_token(token))
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text());

        let mut generator = ClassedHTMLGenerator::new_with_class_style(
            syntax,
            &self.syntax_set,
            ClassStyle::Spaced,
        );

        for line in LinesWithEndings::from(code) {
            generator.parse_html_for_line_which_includes_newline(line)?;
        }

        let class = lang
            .map(|token| format!(" class=\"language-{}\"", token))
            .unwrap_or_default();

        Ok(format!(
            "<div class=\"codehilite\"><pre><code{}>{}</code></pre></div>",
            class,
            generator.finalize()
        ))
    }
}

impl Default for SyntaxHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

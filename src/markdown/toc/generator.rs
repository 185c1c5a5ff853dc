use crate::markdown::types::HeadingEntry;

/// Render a heading forest as nested `<ul>` markup.
///
/// Each entry becomes `<li><a href="#id">name</a>...</li>`, with its children
/// rendered as a full nested list inside the item. Ids and names are
/// inserted verbatim; the converter is responsible for escaping them.
pub fn render_toc(entries: &[HeadingEntry]) -> String {
    let mut html = String::new();
    push_list(&mut html, entries);
    html
}

fn push_list(html: &mut String, entries: &[HeadingEntry]) {
    html.push_str("<ul>");

    for entry in entries {
        html.push_str("<li><a href=\"#");
        html.push_str(&entry.id);
        html.push_str("\">");
        html.push_str(&entry.name);
        html.push_str("</a>");

        if !entry.children.is_empty() {
            push_list(html, &entry.children);
        }

        html.push_str("</li>");
    }

    html.push_str("</ul>");
}

/// Replace every paragraph consisting only of `marker` with the rendered TOC
pub fn expand_toc_marker(html: &str, marker: &str, entries: &[HeadingEntry]) -> String {
    let paragraph = format!("<p>{}</p>", html_escape::encode_text(marker));
    if !html.contains(&paragraph) {
        return html.to_string();
    }

    let toc = format!("<div class=\"toc\">{}</div>", render_toc(entries));
    html.replace(&paragraph, &toc)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(id: &str, name: &str) -> HeadingEntry {
        HeadingEntry::new(1, id, name)
    }

    #[test]
    fn test_empty_forest() {
        assert_eq!(render_toc(&[]), "<ul></ul>");
    }

    #[test]
    fn test_single_leaf() {
        assert_eq!(
            render_toc(&[leaf("a", "Intro")]),
            "<ul><li><a href=\"#a\">Intro</a></li></ul>"
        );
    }

    #[test]
    fn test_children_inside_parent_item() {
        let entries = vec![leaf("a", "A").with_children(vec![HeadingEntry::new(2, "b", "B")])];

        assert_eq!(
            render_toc(&entries),
            "<ul><li><a href=\"#a\">A</a><ul><li><a href=\"#b\">B</a></li></ul></li></ul>"
        );
    }

    #[test]
    fn test_sibling_order_preserved() {
        let toc = render_toc(&[leaf("x", "X"), leaf("y", "Y")]);

        let x_end = toc.find("<a href=\"#x\">X</a></li>").unwrap();
        let y_start = toc.find("<li><a href=\"#y\">").unwrap();
        assert!(x_end < y_start);
        assert_eq!(toc, "<ul><li><a href=\"#x\">X</a></li><li><a href=\"#y\">Y</a></li></ul>");
    }

    #[test]
    fn test_deep_chain_is_balanced() {
        assert_eq!(render_toc(&[]), "<ul></ul>");

        for depth in 1..40usize {
            let mut chain: Vec<HeadingEntry> = Vec::new();
            for n in (0..depth).rev() {
                let id = format!("h{}", n);
                chain = vec![HeadingEntry::new(1, id.clone(), id).with_children(chain)];
            }

            let toc = render_toc(&chain);
            assert!(toc.starts_with("<ul><li><a href=\"#h0\">h0</a><ul><li>") || depth == 1);
            assert!(toc.ends_with(&"</li></ul>".repeat(depth)));
            assert_eq!(toc.matches("<ul>").count(), depth);
            assert_eq!(toc.matches("</ul>").count(), depth);
            assert_eq!(toc.matches("<li>").count(), depth);
            assert_eq!(toc.matches("</li>").count(), depth);
        }
    }

    #[test]
    fn test_overview_usage_scenario() {
        let entries = vec![
            leaf("overview", "Overview"),
            leaf("usage", "Usage").with_children(vec![HeadingEntry::new(2, "usage-examples", "Examples")]),
        ];

        assert_eq!(
            render_toc(&entries),
            "<ul><li><a href=\"#overview\">Overview</a></li><li><a href=\"#usage\">Usage</a><ul><li><a href=\"#usage-examples\">Examples</a></li></ul></li></ul>"
        );
    }

    #[test]
    fn test_expand_marker() {
        let html = "<p>[TOC]</p>\n<h1>Intro</h1>\n";
        let expanded = expand_toc_marker(html, "[TOC]", &[leaf("intro", "Intro")]);

        assert_eq!(
            expanded,
            "<div class=\"toc\"><ul><li><a href=\"#intro\">Intro</a></li></ul></div>\n<h1>Intro</h1>\n"
        );
    }

    #[test]
    fn test_marker_inside_text_is_left_alone() {
        let html = "<p>Write [TOC] on its own line.</p>\n";
        assert_eq!(expand_toc_marker(html, "[TOC]", &[]), html);
    }
}

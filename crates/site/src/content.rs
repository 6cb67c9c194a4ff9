//! Markdown rendering for tutorial bodies.

use comrak::{Options, markdown_to_html};

/// Render markdown to HTML.
#[must_use]
pub fn render_markdown(content: &str) -> String {
    let mut options = Options::default();

    // Enable GFM extensions
    options.extension.strikethrough = true;
    options.extension.table = true;
    options.extension.autolink = true;
    options.extension.tasklist = true;
    options.extension.superscript = true;
    options.extension.header_ids = Some(String::new());
    options.extension.footnotes = true;

    // Tutorial bodies are fixture content, not user input
    options.render.r#unsafe = true;

    markdown_to_html(content, &options)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_headings_with_ids() {
        let html = render_markdown("## Getting Started");
        assert!(html.contains("<h2"));
        assert!(html.contains("getting-started"));
    }

    #[test]
    fn test_renders_gfm_tables() {
        let html = render_markdown("| A | B |\n| --- | --- |\n| 1 | 2 |");
        assert!(html.contains("<table>"));
        assert!(html.contains("<td>1</td>"));
    }

    #[test]
    fn test_renders_lists_and_emphasis() {
        let html = render_markdown("- **bold** item\n- plain item");
        assert!(html.contains("<ul>"));
        assert!(html.contains("<strong>bold</strong>"));
    }
}

//! Markdown rendering for the preview pane.
//!
//! Conversion is delegated to pulldown-cmark and the result sanitized with
//! ammonia; code-block colorization happens in the page with highlight.js.

use pulldown_cmark::Parser;

pub fn render_markdown(content: &str) -> String {
    let parser = Parser::new(content);
    let mut html_output = String::new();
    pulldown_cmark::html::push_html(&mut html_output, parser);
    // Sanitize HTML to prevent XSS from raw HTML in markdown
    ammonia::clean(&html_output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_basic_markdown() {
        let html = render_markdown("# Title\n\nSome *emphasis* here.");
        assert!(html.contains("<h1>Title</h1>"));
        assert!(html.contains("<em>emphasis</em>"));
    }

    #[test]
    fn test_renders_fenced_code_blocks() {
        let html = render_markdown("```\nlet x = 1;\n```");
        assert!(html.contains("<pre>"));
        assert!(html.contains("let x = 1;"));
    }

    #[test]
    fn test_strips_raw_script_tags() {
        let html = render_markdown("hello <script>alert('xss')</script> world");
        assert!(!html.contains("<script>"));
        assert!(html.contains("hello"));
    }

    #[test]
    fn test_empty_content_renders_empty() {
        assert!(render_markdown("").trim().is_empty());
    }
}

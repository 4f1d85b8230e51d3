//! Markdown to HTML rendering pipeline.

use anyhow::{Context, Result};
use std::path::Path;
use tracing::debug;

use super::blocks;
use super::code::CodeStash;

/// Renders the supported markdown subset to an HTML fragment.
///
/// Processing order is fixed because later rules are plain text
/// substitutions:
///
/// 0. Line endings normalized to `\n`
/// 1. Fenced code blocks and inline code are replaced by placeholders
/// 2. Headers, emphasis, lists, links, blockquotes
/// 3. Paragraph wrapping on blank lines
/// 4. Code placeholders restored as `<code>` / `<pre><code>`
///
/// Rendering never fails. Text that matches no rule passes through
/// literally, and no HTML escaping is performed.
#[derive(Debug, Default, Clone, Copy)]
pub struct MarkdownRenderer;

impl MarkdownRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Renders markdown content to HTML string.
    ///
    /// # Arguments
    ///
    /// * `content`: Markdown content to render
    ///
    /// # Returns
    ///
    /// HTML fragment, empty when `content` is empty
    pub fn render(&self, content: &str) -> String {
        if content.is_empty() {
            return String::new();
        }

        let content = content.replace("\r\n", "\n").replace('\r', "\n");
        let (text, stash) = CodeStash::extract(&content);
        debug!(
            fenced = stash.fenced_count(),
            inline = stash.inline_count(),
            "Extracted code spans"
        );

        let text = blocks::headers(&text);
        let text = blocks::emphasis(&text);
        let text = blocks::lists(&text);
        let text = blocks::links(&text);
        let text = blocks::blockquotes(&text);
        let text = blocks::paragraphs(&text);

        stash.restore(&text)
    }

    /// Renders markdown file at given path.
    ///
    /// # Errors
    ///
    /// Returns error if file cannot be read
    pub fn render_file(&self, path: impl AsRef<Path>) -> Result<String> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read markdown file: {}", path.display()))?;
        Ok(self.render(&content))
    }
}

/// Renders `markdown` with a default [`MarkdownRenderer`].
pub fn render_markdown(markdown: &str) -> String {
    MarkdownRenderer::new().render(markdown)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_empty_markdown() {
        assert_eq!(render_markdown(""), "");
    }

    #[test]
    fn test_render_bold_and_italic() {
        // Act
        let html = render_markdown("**bold** and *italic*");

        // Assert
        assert_eq!(html, "<p><strong>bold</strong> and <em>italic</em></p>");
    }

    #[test]
    fn test_render_inline_code() {
        assert_eq!(render_markdown("`x = 1`"), "<p><code>x = 1</code></p>");
    }

    #[test]
    fn test_render_inline_code_protects_emphasis() {
        // Act
        let html = render_markdown("Use `*a*` literally");

        // Assert
        assert_eq!(html, "<p>Use <code>*a*</code> literally</p>");
    }

    #[test]
    fn test_render_fenced_code_block() {
        // Arrange
        let markdown = "Intro\n\n```rust\nfn main() {\n    // # not a header\n    let s = \"**x**\";\n}\n```";

        // Act
        let html = render_markdown(markdown);

        // Assert
        assert_eq!(
            html,
            "<p>Intro</p>\n<p><pre><code class=\"language-rust\">\nfn main() {\n    // # not a header\n    let s = \"**x**\";\n}\n</code></pre></p>"
        );
    }

    #[test]
    fn test_render_fenced_code_keeps_blank_lines() {
        // Act
        let html = render_markdown("```\na\n\nb\n```");

        // Assert
        assert_eq!(html, "<p><pre><code>\na\n\nb\n</code></pre></p>");
    }

    #[test]
    fn test_render_fenced_block_wrapped_like_any_paragraph() {
        assert_eq!(
            render_markdown("```\ncode\n```"),
            "<p><pre><code>\ncode\n</code></pre></p>"
        );
    }

    #[test]
    fn test_render_crlf_line_endings() {
        // Act
        let html = render_markdown("# Title\r\n- a\r\n- b\r\n\r\n> quoted\r\n\r\nplain");

        // Assert
        assert_eq!(
            html,
            "<h1>Title</h1>\n<ul><li>a</li>\n<li>b</li></ul>\n<blockquote>quoted</blockquote>\n<p>plain</p>"
        );
        assert!(!html.contains('\r'));
    }

    #[test]
    fn test_render_headers_and_paragraphs() {
        // Act
        let html = render_markdown("# Title\n\nBody text.\n\n## Part\n\nMore.");

        // Assert
        assert_eq!(
            html,
            "<h1>Title</h1>\n<p>Body text.</p>\n<h2>Part</h2>\n<p>More.</p>"
        );
    }

    #[test]
    fn test_render_header_with_emphasis() {
        assert_eq!(render_markdown("### A *quiet* start"), "<h3>A <em>quiet</em> start</h3>");
    }

    #[test]
    fn test_render_unordered_list() {
        // Act
        let html = render_markdown("Cast:\n\n- **Mira**\n- Oren");

        // Assert
        assert_eq!(
            html,
            "<p>Cast:</p>\n<ul><li><strong>Mira</strong></li>\n<li>Oren</li></ul>"
        );
    }

    #[test]
    fn test_render_ordered_list() {
        // Act
        let html = render_markdown("1. Wake\n2. Run");

        // Assert
        assert_eq!(html, "<ol><li>Wake</li>\n<li>Run</li></ol>");
    }

    #[test]
    fn test_render_mixed_list_kinds_adjacent() {
        // Act
        let html = render_markdown("- loose\n1. ranked");

        // Assert
        assert_eq!(html, "<ul><li>loose</li></ul>\n<ol><li>ranked</li></ol>");
    }

    #[test]
    fn test_render_links() {
        // Act
        let html = render_markdown("See [notes](https://example.com/notes).");

        // Assert
        assert_eq!(
            html,
            "<p>See <a href=\"https://example.com/notes\">notes</a>.</p>"
        );
    }

    #[test]
    fn test_render_blockquote() {
        assert_eq!(
            render_markdown("> Never look back."),
            "<blockquote>Never look back.</blockquote>"
        );
    }

    #[test]
    fn test_render_html_passthrough() {
        // Act
        let html = render_markdown("<script>alert('x')</script>");

        // Assert
        assert_eq!(
            html, "<script>alert('x')</script>",
            "Renderer does not sanitize; the display surface does"
        );
    }

    #[test]
    fn test_render_unclosed_markers_pass_through() {
        // Act
        let html = render_markdown("a *lonely star and ``` fence and [link](");

        // Assert
        assert_eq!(html, "<p>a *lonely star and ``` fence and [link](</p>");
    }

    #[test]
    fn test_render_error_text_like_any_response() {
        // Act
        let html = render_markdown("Error: API key missing");

        // Assert
        assert_eq!(html, "<p>Error: API key missing</p>");
    }

    #[test]
    fn test_default_constructor() {
        // Arrange
        let renderer = MarkdownRenderer::default();

        // Act
        let html = renderer.render("# Test");

        // Assert
        assert_eq!(html, "<h1>Test</h1>");
    }

    #[test]
    fn test_render_file_missing() {
        // Act
        let result = MarkdownRenderer::new().render_file("/nonexistent/chapter.md");

        // Assert
        assert!(result.is_err(), "Missing file should be an error");
    }
}

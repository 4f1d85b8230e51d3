//! Code span extraction and restoration.
//!
//! Fenced blocks and inline spans are swapped for opaque placeholders before
//! the text rules run, then swapped back as the very last step. Placeholders
//! are wrapped in private use code points so no markdown rule can match them.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

const OPEN: char = '\u{E000}';
const CLOSE: char = '\u{E001}';
const FENCED_TAG: char = 'F';
const INLINE_TAG: char = 'I';

static FENCED_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)```(.*?)```").expect("valid fenced code pattern"));
static INLINE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"`([^`]+)`").expect("valid inline code pattern"));
static LANGUAGE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_]+").expect("valid language pattern"));
static PLACEHOLDER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new("\u{E000}([FI])([0-9]+)\u{E001}").expect("valid placeholder pattern")
});

/// Fenced code block lifted out of the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FencedBlock {
    /// Word immediately following the opening fence, if any.
    pub language: Option<String>,
    /// Everything between the language tag and the closing fence, verbatim.
    pub body: String,
}

impl FencedBlock {
    fn parse(inner: &str) -> Self {
        match LANGUAGE_RE.find(inner) {
            Some(lang) => Self {
                language: Some(lang.as_str().to_string()),
                body: inner[lang.end()..].to_string(),
            },
            None => Self {
                language: None,
                body: inner.to_string(),
            },
        }
    }

    fn to_html(&self) -> String {
        match &self.language {
            Some(lang) => format!(
                "<pre><code class=\"language-{}\">{}</code></pre>",
                lang, self.body
            ),
            None => format!("<pre><code>{}</code></pre>", self.body),
        }
    }
}

/// Code spans removed from a document, indexed by occurrence order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct CodeStash {
    fenced: Vec<FencedBlock>,
    inline: Vec<String>,
}

impl CodeStash {
    /// Replaces fenced blocks, then inline spans, with placeholders.
    ///
    /// Placeholder delimiters already present in the input are dropped
    /// first, so only placeholders minted here are ever restored.
    ///
    /// # Returns
    ///
    /// Text with placeholders and the stash needed to restore it
    pub fn extract(markdown: &str) -> (String, Self) {
        let mut stash = Self::default();
        let markdown: String = markdown
            .chars()
            .filter(|&c| c != OPEN && c != CLOSE)
            .collect();

        let without_fenced = FENCED_RE
            .replace_all(&markdown, |caps: &Captures<'_>| {
                stash.fenced.push(FencedBlock::parse(&caps[1]));
                placeholder(FENCED_TAG, stash.fenced.len() - 1)
            })
            .into_owned();

        let text = INLINE_RE
            .replace_all(&without_fenced, |caps: &Captures<'_>| {
                stash.inline.push(caps[1].to_string());
                placeholder(INLINE_TAG, stash.inline.len() - 1)
            })
            .into_owned();

        (text, stash)
    }

    /// Substitutes every placeholder with its HTML.
    ///
    /// Inline spans become `<code>` and fenced blocks become
    /// `<pre><code>`. Restored code is never scanned again, so a body that
    /// happens to contain placeholder-like text is emitted untouched.
    pub fn restore(&self, html: &str) -> String {
        PLACEHOLDER_RE
            .replace_all(html, |caps: &Captures<'_>| {
                let index: Option<usize> = caps[2].parse().ok();
                let restored = match &caps[1] {
                    "I" => index
                        .and_then(|i| self.inline.get(i))
                        .map(|code| format!("<code>{}</code>", code)),
                    _ => index.and_then(|i| self.fenced.get(i)).map(FencedBlock::to_html),
                };
                restored.unwrap_or_else(|| caps[0].to_string())
            })
            .into_owned()
    }

    pub fn fenced_count(&self) -> usize {
        self.fenced.len()
    }

    pub fn inline_count(&self) -> usize {
        self.inline.len()
    }
}

fn placeholder(tag: char, index: usize) -> String {
    format!("{}{}{}{}", OPEN, tag, index, CLOSE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_fenced_with_language() {
        // Act
        let (text, stash) = CodeStash::extract("before\n```rust\nlet x = 1;\n```\nafter");

        // Assert
        assert_eq!(stash.fenced_count(), 1);
        assert_eq!(
            stash.fenced[0],
            FencedBlock {
                language: Some("rust".to_string()),
                body: "\nlet x = 1;\n".to_string(),
            }
        );
        assert!(!text.contains("```"), "Fence should be replaced: {:?}", text);
        assert!(text.starts_with("before\n"));
        assert!(text.ends_with("\nafter"));
    }

    #[test]
    fn test_extract_fenced_without_language() {
        // Act
        let (_, stash) = CodeStash::extract("```\n*not emphasis*\n```");

        // Assert
        assert_eq!(stash.fenced[0].language, None);
        assert_eq!(stash.fenced[0].body, "\n*not emphasis*\n");
    }

    #[test]
    fn test_extract_fenced_is_non_greedy() {
        // Act
        let (_, stash) = CodeStash::extract("```\na\n``` text ```\nb\n```");

        // Assert
        assert_eq!(stash.fenced_count(), 2);
        assert_eq!(stash.fenced[1].body, "\nb\n");
    }

    #[test]
    fn test_extract_inline_after_fenced() {
        // Act
        let (text, stash) = CodeStash::extract("use `a` and `b`\n```\n`c`\n```");

        // Assert
        assert_eq!(stash.inline, vec!["a".to_string(), "b".to_string()]);
        assert_eq!(
            stash.fenced[0].body, "\n`c`\n",
            "Backticks inside fenced code are not inline spans"
        );
        assert!(!text.contains('`'));
    }

    #[test]
    fn test_extract_ignores_empty_inline() {
        // Act
        let (text, stash) = CodeStash::extract("a `` b");

        // Assert
        assert_eq!(stash.inline_count(), 0);
        assert_eq!(text, "a `` b");
    }

    #[test]
    fn test_restore_round_trip() {
        // Arrange
        let (text, stash) = CodeStash::extract("`x` and ```py\nprint()\n```");

        // Act
        let html = stash.restore(&text);

        // Assert
        assert_eq!(
            html,
            "<code>x</code> and <pre><code class=\"language-py\">\nprint()\n</code></pre>"
        );
    }

    #[test]
    fn test_restore_leaves_unknown_placeholder() {
        // Arrange
        let stash = CodeStash::default();
        let text = placeholder(INLINE_TAG, 3);

        // Act
        let html = stash.restore(&text);

        // Assert
        assert_eq!(html, text);
    }

    #[test]
    fn test_extract_drops_stray_delimiters() {
        // Arrange
        let markdown = "```\nx\n```\n\nliteral \u{E000}F0\u{E001}";

        // Act
        let (text, stash) = CodeStash::extract(markdown);
        let html = stash.restore(&text);

        // Assert
        assert_eq!(stash.fenced_count(), 1);
        assert_eq!(html.matches("<pre><code>").count(), 1, "{}", html);
        assert!(html.ends_with("literal F0"), "{}", html);
    }
}

//! Sigil token scanning and prompt rewriting.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Matches `@word` and `#digits` markers in a single left to right pass.
///
/// Word characters are ASCII only; `@` or `#` without a following token
/// character is not a marker and stays literal.
static MARKER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"@([A-Za-z0-9_]+)|#([0-9]+)").expect("valid marker pattern"));

/// Marker found in prompt text, in order of occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker<'p> {
    /// `@token`: character or location name fragment (sigil stripped).
    Entity(&'p str),
    /// `#digits`: chapter number as typed (sigil stripped).
    Chapter(&'p str),
}

impl<'p> Marker<'p> {
    /// Token text without its sigil.
    pub fn token(&self) -> &'p str {
        match self {
            Marker::Entity(token) | Marker::Chapter(token) => token,
        }
    }

    fn from_captures(caps: &Captures<'p>) -> Option<Self> {
        if let Some(token) = caps.get(1) {
            return Some(Marker::Entity(token.as_str()));
        }
        caps.get(2).map(|digits| Marker::Chapter(digits.as_str()))
    }
}

/// Returns every marker in `prompt`, left to right.
pub fn scan_markers(prompt: &str) -> Vec<Marker<'_>> {
    MARKER_RE
        .captures_iter(prompt)
        .filter_map(|caps| Marker::from_captures(&caps))
        .collect()
}

/// Rewrites markers into plain prose.
///
/// `@token` becomes `token` and `#digits` becomes `Chapter digits`. The
/// rewrite looks only at the text, so unresolved tokens and out of range
/// chapter numbers are rewritten all the same.
pub fn clean_prompt(prompt: &str) -> String {
    MARKER_RE
        .replace_all(prompt, |caps: &Captures<'_>| {
            match Marker::from_captures(caps) {
                Some(Marker::Entity(token)) => token.to_string(),
                Some(Marker::Chapter(digits)) => format!("Chapter {}", digits),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_mixed_markers_in_order() {
        // Act
        let markers = scan_markers("Have @mira meet #3 near @Salt_Marsh.");

        // Assert
        assert_eq!(
            markers,
            vec![
                Marker::Entity("mira"),
                Marker::Chapter("3"),
                Marker::Entity("Salt_Marsh"),
            ]
        );
    }

    #[test]
    fn test_scan_ignores_bare_sigils() {
        // Act
        let markers = scan_markers("email me @ home, # of days, @-sign, #x");

        // Assert
        assert!(markers.is_empty(), "Bare sigils are not markers: {:?}", markers);
    }

    #[test]
    fn test_scan_ignores_word_boundaries() {
        // Act
        let markers = scan_markers("mira@example.com and page#12");

        // Assert
        assert_eq!(
            markers,
            vec![Marker::Entity("example"), Marker::Chapter("12")],
            "Markers are recognized regardless of surrounding text"
        );
    }

    #[test]
    fn test_scan_non_ascii_ends_token() {
        // Act
        let markers = scan_markers("@Zoë arrives");

        // Assert
        assert_eq!(markers, vec![Marker::Entity("Zo")]);
    }

    #[test]
    fn test_clean_prompt_rewrites_all_markers() {
        // Act
        let cleaned = clean_prompt("Ask @Nobody about #0 and #99.");

        // Assert
        assert_eq!(cleaned, "Ask Nobody about Chapter 0 and Chapter 99.");
    }

    #[test]
    fn test_clean_prompt_leaves_bare_sigils() {
        // Act
        let cleaned = clean_prompt("a @ b # c");

        // Assert
        assert_eq!(cleaned, "a @ b # c");
    }

    #[test]
    fn test_clean_prompt_adjacent_markers() {
        // Act
        let cleaned = clean_prompt("@a#1@b");

        // Assert
        assert_eq!(cleaned, "aChapter 1b");
    }

    #[test]
    fn test_clean_prompt_empty() {
        assert_eq!(clean_prompt(""), "");
    }

    #[test]
    fn test_marker_token() {
        assert_eq!(Marker::Entity("mira").token(), "mira");
        assert_eq!(Marker::Chapter("7").token(), "7");
    }
}

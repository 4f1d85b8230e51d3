//! Utility functions for storyloom

use std::time::{SystemTime, UNIX_EPOCH};

const CHAPTER_PREVIEW_CHARS: usize = 50;

/// Current wall clock time in Unix milliseconds.
///
/// Clocks set before the epoch report 0.
pub fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Shortens `text` to `max` characters, appending `...` when cut.
///
/// Counts characters rather than bytes so multi-byte text is never split
/// inside a code point.
pub fn truncate_chars(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let head: String = text.chars().take(max).collect();
        format!("{}...", head)
    } else {
        text.to_string()
    }
}

/// Short preview of chapter content for chapter lists.
///
/// Prefers the first non-blank line that is not a heading. When every line
/// is a heading, uses the first one with its `#` marks removed. The `...`
/// suffix is decided by the length of the untrimmed line.
///
/// # Returns
///
/// Preview text, or "Empty chapter" when content has no visible lines
pub fn chapter_preview(content: &str) -> String {
    let lines: Vec<&str> = content
        .split('\n')
        .filter(|line| !line.trim().is_empty())
        .collect();

    let Some(first) = lines.first() else {
        return "Empty chapter".to_string();
    };

    if let Some(line) = lines.iter().find(|line| !line.trim().starts_with('#')) {
        return preview_line(line.trim(), line);
    }

    let heading = first.trim_start().trim_start_matches('#').trim();
    preview_line(heading, first)
}

fn preview_line(text: &str, untrimmed: &str) -> String {
    let head: String = text.chars().take(CHAPTER_PREVIEW_CHARS).collect();
    if untrimmed.chars().count() > CHAPTER_PREVIEW_CHARS {
        format!("{}...", head)
    } else {
        head
    }
}

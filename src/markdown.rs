//! Lightweight markdown rendering for assistant responses and chapter previews.
//!
//! Supports a deliberately small subset: headers, emphasis, inline and fenced
//! code, lists, links, blockquotes and paragraphs. Code is lifted out before
//! any other rule runs so its contents are never reinterpreted. Output is not
//! sanitized; the surface displaying it owns that policy.

mod blocks;
mod code;
mod renderer;

pub use renderer::{MarkdownRenderer, render_markdown};

//! Inline reference resolution for assistant prompts.
//!
//! Authors point the assistant at story context with sigils typed straight
//! into the prompt: `@Name` for a character or location and `#N` for the
//! N-th chapter. This module finds those markers, resolves them against a
//! read-only snapshot of the story, and produces the cleaned prompt that is
//! forwarded to generation.

mod resolver;
mod scanner;

pub use resolver::{
    ChapterRef, Reference, ReferenceKind, ReferenceResolver, Referenced, ResolvedPrompt,
    resolve_references,
};
pub use scanner::{Marker, clean_prompt, scan_markers};

//! Reference resolution, markdown rendering and assistant history for a
//! story-writing workspace.

mod assets;
mod assistant;
pub mod components;
pub mod config;
mod context;
mod export;
mod history;
mod markdown;
pub mod pages;
mod references;
mod story;
mod util;

pub use assets::{STORY_CSS, story_css, write_css_assets};
pub use assistant::{Assistant, Exchange};
pub use config::{Command, Config};
pub use context::{Generation, GenerationContext, Generator};
pub use export::{ExportSummary, export_site};
pub use history::{ConversationHistory, ConversationItem};
pub use markdown::{MarkdownRenderer, render_markdown};
pub use references::{
    ChapterRef, Marker, Reference, ReferenceKind, ReferenceResolver, Referenced, ResolvedPrompt,
    clean_prompt, resolve_references, scan_markers,
};
pub use story::{
    Asset, Chapter, Character, Connection, Location, LocationType, Mentions, Relationship, Story,
    find_mentioned_entities,
};
pub use util::{chapter_preview, truncate_chars};

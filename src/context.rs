//! Context bundle handed to the generation service.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::references::{ChapterRef, ResolvedPrompt};
use crate::story::{Character, Location, Story};

/// Story context sent alongside a cleaned prompt.
///
/// Borrows from the story snapshot taken when the prompt was submitted.
/// Serializes to the camelCase shape generation backends expect.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationContext<'a> {
    pub current_chapter: Option<&'a str>,
    pub characters: &'a [Character],
    pub locations: &'a [Location],
    pub referenced_characters: Vec<&'a Character>,
    pub referenced_locations: Vec<&'a Location>,
    pub referenced_chapters: Vec<ChapterRef<'a>>,
}

impl<'a> GenerationContext<'a> {
    /// Builds the bundle for a resolved prompt.
    ///
    /// # Arguments
    ///
    /// * `story`: Story snapshot the prompt was resolved against
    /// * `resolved`: Resolution result for the prompt
    /// * `current_chapter`: 1-based number of the chapter open in the editor
    pub fn new(
        story: &'a Story,
        resolved: &ResolvedPrompt<'a>,
        current_chapter: Option<usize>,
    ) -> Self {
        Self {
            current_chapter: current_chapter
                .and_then(|n| story.chapter_number(n))
                .map(|c| c.content.as_str()),
            characters: &story.characters,
            locations: &story.locations,
            referenced_characters: resolved.characters(),
            referenced_locations: resolved.locations(),
            referenced_chapters: resolved.chapters(),
        }
    }
}

/// Text returned by a generation backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Generation {
    pub content: String,
}

/// Generation backend.
///
/// Implementations talk to an AI provider; failures are reported as errors
/// and surfaced to the author as response text by the caller.
pub trait Generator {
    /// Generates a response for `prompt` with the attached story context.
    ///
    /// # Errors
    ///
    /// Returns error if the backend cannot produce a response
    fn generate(&self, prompt: &str, context: &GenerationContext<'_>) -> Result<Generation>;
}

//! Entity matching for prompt markers.

use serde::Serialize;
use tracing::debug;

use super::scanner::{Marker, clean_prompt, scan_markers};
use crate::story::{Chapter, Character, Location, Story};

/// Kind of story entity a marker resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ReferenceKind {
    Character,
    Location,
    Chapter,
}

/// Chapter resolved from `#N`, tagged with its 0-based position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChapterRef<'a> {
    #[serde(flatten)]
    pub chapter: &'a Chapter,
    pub index: usize,
}

impl ChapterRef<'_> {
    /// Chapter number as the author types it.
    pub fn number(&self) -> usize {
        self.index + 1
    }
}

/// Story entity a marker resolved to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Referenced<'a> {
    Character(&'a Character),
    Location(&'a Location),
    Chapter(ChapterRef<'a>),
}

/// Resolved marker: the entity plus the token that first named it.
#[derive(Debug, Clone, PartialEq)]
pub struct Reference<'a> {
    pub entity: Referenced<'a>,
    pub matched_token: String,
}

impl Referenced<'_> {
    pub fn kind(&self) -> ReferenceKind {
        match self {
            Referenced::Character(_) => ReferenceKind::Character,
            Referenced::Location(_) => ReferenceKind::Location,
            Referenced::Chapter(_) => ReferenceKind::Chapter,
        }
    }

    fn same_entity(&self, other: &Referenced<'_>) -> bool {
        match (self, other) {
            (Referenced::Character(a), Referenced::Character(b)) => a.id == b.id,
            (Referenced::Location(a), Referenced::Location(b)) => a.id == b.id,
            (Referenced::Chapter(a), Referenced::Chapter(b)) => a.index == b.index,
            _ => false,
        }
    }
}

impl Reference<'_> {
    pub fn kind(&self) -> ReferenceKind {
        self.entity.kind()
    }
}

/// Result of resolving a prompt.
///
/// `references` holds each distinct entity once, in order of the first
/// marker that named it.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPrompt<'a> {
    pub cleaned_prompt: String,
    pub references: Vec<Reference<'a>>,
}

impl<'a> ResolvedPrompt<'a> {
    pub fn characters(&self) -> Vec<&'a Character> {
        self.references
            .iter()
            .filter_map(|r| match r.entity {
                Referenced::Character(c) => Some(c),
                _ => None,
            })
            .collect()
    }

    pub fn locations(&self) -> Vec<&'a Location> {
        self.references
            .iter()
            .filter_map(|r| match r.entity {
                Referenced::Location(l) => Some(l),
                _ => None,
            })
            .collect()
    }

    pub fn chapters(&self) -> Vec<ChapterRef<'a>> {
        self.references
            .iter()
            .filter_map(|r| match r.entity {
                Referenced::Chapter(c) => Some(c),
                _ => None,
            })
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.references.is_empty()
    }

    /// Human readable summary of the attached context, one line per kind.
    ///
    /// Kinds without references produce no line.
    pub fn notice(&self) -> Vec<String> {
        let mut lines = Vec::new();

        let characters = self.characters();
        if !characters.is_empty() {
            let names: Vec<&str> = characters.iter().map(|c| c.name.as_str()).collect();
            lines.push(format!(
                "Including context for characters: {}",
                names.join(", ")
            ));
        }

        let locations = self.locations();
        if !locations.is_empty() {
            let names: Vec<&str> = locations.iter().map(|l| l.name.as_str()).collect();
            lines.push(format!(
                "Including context for locations: {}",
                names.join(", ")
            ));
        }

        let chapters = self.chapters();
        if !chapters.is_empty() {
            let numbers: Vec<String> = chapters
                .iter()
                .map(|c| format!("#{}", c.number()))
                .collect();
            lines.push(format!(
                "Including context for chapters: {}",
                numbers.join(", ")
            ));
        }

        lines
    }
}

/// Resolves prompt markers against a read-only story snapshot.
///
/// Name matching is case-insensitive: an entity matches when its name equals
/// the token or contains it. The first matching entity in collection order
/// wins, characters before locations. Short tokens therefore match loosely
/// (`@a` picks the first character with an "a" anywhere in the name).
pub struct ReferenceResolver<'a> {
    characters: Vec<(&'a Character, String)>,
    locations: Vec<(&'a Location, String)>,
    chapters: &'a [Chapter],
}

impl<'a> ReferenceResolver<'a> {
    /// Creates resolver over the given collections.
    ///
    /// # Arguments
    ///
    /// * `characters`: Characters in display order
    /// * `locations`: Locations in display order
    /// * `chapters`: Chapters in manuscript order
    pub fn new(
        characters: &'a [Character],
        locations: &'a [Location],
        chapters: &'a [Chapter],
    ) -> Self {
        Self {
            characters: characters
                .iter()
                .map(|c| (c, c.name.to_lowercase()))
                .collect(),
            locations: locations
                .iter()
                .map(|l| (l, l.name.to_lowercase()))
                .collect(),
            chapters,
        }
    }

    pub fn from_story(story: &'a Story) -> Self {
        Self::new(&story.characters, &story.locations, &story.chapters)
    }

    /// Resolves all markers in `prompt` and rewrites it.
    ///
    /// Never fails: unknown names, chapter numbers out of range and prompts
    /// without markers simply produce no reference.
    pub fn resolve(&self, prompt: &str) -> ResolvedPrompt<'a> {
        let mut references: Vec<Reference<'a>> = Vec::new();

        for marker in scan_markers(prompt) {
            let Some(entity) = self.lookup(marker) else {
                debug!(token = marker.token(), "Marker did not resolve");
                continue;
            };

            if references.iter().any(|r| r.entity.same_entity(&entity)) {
                continue;
            }

            debug!(token = marker.token(), kind = ?entity.kind(), "Marker resolved");
            references.push(Reference {
                entity,
                matched_token: marker.token().to_string(),
            });
        }

        ResolvedPrompt {
            cleaned_prompt: clean_prompt(prompt),
            references,
        }
    }

    fn lookup(&self, marker: Marker<'_>) -> Option<Referenced<'a>> {
        match marker {
            Marker::Entity(token) => {
                let token = token.to_lowercase();
                if let Some((character, _)) = self
                    .characters
                    .iter()
                    .find(|(_, name)| name_matches(name, &token))
                {
                    return Some(Referenced::Character(*character));
                }
                self.locations
                    .iter()
                    .find(|(_, name)| name_matches(name, &token))
                    .map(|(location, _)| Referenced::Location(*location))
            }
            Marker::Chapter(digits) => {
                // Overflowing numbers cannot be in range either
                let number: usize = digits.parse().ok()?;
                let index = number.checked_sub(1)?;
                self.chapters.get(index).map(|chapter| {
                    Referenced::Chapter(ChapterRef { chapter, index })
                })
            }
        }
    }
}

fn name_matches(name: &str, token: &str) -> bool {
    name == token || name.contains(token)
}

/// Resolves `prompt` against the given collections.
///
/// Convenience wrapper around [`ReferenceResolver`] for one-off calls.
pub fn resolve_references<'a>(
    prompt: &str,
    characters: &'a [Character],
    locations: &'a [Location],
    chapters: &'a [Chapter],
) -> ResolvedPrompt<'a> {
    ReferenceResolver::new(characters, locations, chapters).resolve(prompt)
}

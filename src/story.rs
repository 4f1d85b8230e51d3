//! Story document model.
//!
//! Mirrors the `.story` JSON document written by the editor: chapters plus
//! the character, location and asset collections. The crate only ever reads
//! these documents; ownership of the on-disk format stays with the editor.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::Path;

fn default_version() -> u32 {
    1
}

fn default_title() -> String {
    "Untitled".to_string()
}

/// Complete story document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Story {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default)]
    pub chapters: Vec<Chapter>,
    #[serde(default)]
    pub characters: Vec<Character>,
    #[serde(default)]
    pub locations: Vec<Location>,
    #[serde(default)]
    pub assets: Vec<Asset>,
}

/// Chapter of the manuscript. Referenced by 1-based position, not by `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub traits: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goals: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backstory: Option<String>,
    #[serde(default)]
    pub relationships: Vec<Relationship>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin_location_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_location_id: Option<i64>,
    /// Keys the editor stores that this model does not know about.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Relationship {
    pub character_id: i64,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geography: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub climate: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub culture: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_type: Option<LocationType>,
    #[serde(default)]
    pub connections: Vec<Connection>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationType {
    City,
    Wilderness,
    Landmark,
    Building,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection {
    pub location_id: i64,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: i64,
    pub name: String,
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_name: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Character {
    /// Creates a character with only identity fields populated.
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            traits: Vec::new(),
            goals: None,
            backstory: None,
            relationships: Vec::new(),
            origin_location_id: None,
            current_location_id: None,
            extra: Map::new(),
        }
    }
}

impl Location {
    /// Creates a location with only identity fields populated.
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            geography: None,
            climate: None,
            culture: None,
            notes: None,
            location_type: None,
            connections: Vec::new(),
            extra: Map::new(),
        }
    }
}

impl Chapter {
    pub fn new(id: i64, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
        }
    }
}

impl Story {
    /// Decodes a story document from JSON text.
    ///
    /// # Errors
    ///
    /// Returns error if the text is not a valid story document.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse story document")
    }

    /// Reads and decodes a story document from disk.
    ///
    /// # Arguments
    ///
    /// * `path`: Path to a `.story` file
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or is not a valid story document.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read story file: {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("Invalid story file: {}", path.display()))
    }

    pub fn character(&self, id: i64) -> Option<&Character> {
        self.characters.iter().find(|c| c.id == id)
    }

    pub fn location(&self, id: i64) -> Option<&Location> {
        self.locations.iter().find(|l| l.id == id)
    }

    /// Returns the chapter at 1-based `number`, as typed by the author.
    pub fn chapter_number(&self, number: usize) -> Option<&Chapter> {
        number.checked_sub(1).and_then(|i| self.chapters.get(i))
    }

    /// Characters currently placed at the given location.
    pub fn characters_at(&self, location_id: i64) -> Vec<&Character> {
        self.characters
            .iter()
            .filter(|c| c.current_location_id == Some(location_id))
            .collect()
    }
}

impl Default for Story {
    fn default() -> Self {
        Self {
            version: default_version(),
            title: default_title(),
            chapters: Vec::new(),
            characters: Vec::new(),
            locations: Vec::new(),
            assets: Vec::new(),
        }
    }
}

/// Characters and locations named in a piece of text.
#[derive(Debug, Default, PartialEq)]
pub struct Mentions<'a> {
    pub characters: Vec<&'a Character>,
    pub locations: Vec<&'a Location>,
}

/// Finds every character and location whose full name appears in `content`.
///
/// Matching is a case-insensitive substring test, returned in collection
/// order. Unlike prompt references, all matches are reported.
pub fn find_mentioned_entities<'a>(
    content: &str,
    characters: &'a [Character],
    locations: &'a [Location],
) -> Mentions<'a> {
    let text = content.to_lowercase();
    let mentioned = |name: &str| !name.is_empty() && text.contains(&name.to_lowercase());

    Mentions {
        characters: characters.iter().filter(|c| mentioned(&c.name)).collect(),
        locations: locations.iter().filter(|l| mentioned(&l.name)).collect(),
    }
}

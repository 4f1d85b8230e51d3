//! Shared test utilities for integration tests.
//!
//! Provides a sample story document and helpers for writing it into a
//! temporary directory the way the editor saves `.story` files.

#![allow(dead_code)]

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Sample story document covering characters, locations and chapters.
pub const SAMPLE_STORY: &str = r##"{
  "version": 1,
  "title": "The Salt Road",
  "chapters": [
    {
      "id": 1,
      "title": "Harbor",
      "content": "# Harbor\n\nMira waited at the *Greyfen* docks.\n\n- rope\n- lantern"
    },
    {
      "id": 2,
      "title": "Crossing",
      "content": "Oren steered through the fog.\n\n```\nlog: day 2\n```"
    },
    {
      "id": 3,
      "title": "Landfall",
      "content": ""
    }
  ],
  "characters": [
    {
      "id": 10,
      "name": "Mira",
      "description": "A cartographer",
      "traits": ["stubborn"],
      "goals": "Map the salt flats",
      "backstory": "",
      "relationships": [{ "characterId": 11, "type": "sibling", "description": "Older brother" }],
      "currentLocationId": 20
    },
    {
      "id": 11,
      "name": "Oren",
      "description": "A ferryman",
      "traits": [],
      "goals": "",
      "backstory": "",
      "relationships": []
    }
  ],
  "locations": [
    {
      "id": 20,
      "name": "Greyfen",
      "description": "A fog-bound port",
      "geography": "",
      "climate": "Damp",
      "culture": "",
      "notes": "",
      "locationType": "city",
      "connections": [{ "locationId": 21, "type": "road" }]
    },
    {
      "id": 21,
      "name": "Saltmarsh",
      "description": "",
      "geography": "",
      "climate": "",
      "culture": "",
      "notes": "",
      "connections": []
    }
  ],
  "assets": []
}"##;

/// Writes the sample story into a fresh temporary directory.
///
/// # Returns
///
/// Temporary directory (kept alive by the caller) and the story file path
///
/// # Errors
///
/// Returns error if the directory or file cannot be created
pub fn write_sample_story() -> Result<(TempDir, PathBuf)> {
    let dir = TempDir::new()?;
    let path = write_story(dir.path(), "salt-road.story", SAMPLE_STORY)?;
    Ok((dir, path))
}

/// Writes `contents` as a story file named `name` inside `dir`.
///
/// # Errors
///
/// Returns error if the file cannot be written
pub fn write_story(dir: &Path, name: &str, contents: &str) -> Result<PathBuf> {
    let path = dir.join(name);
    fs::write(&path, contents)?;
    Ok(path)
}

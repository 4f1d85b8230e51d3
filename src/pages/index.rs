//! Story index page generation

use maud::{Markup, html};

use crate::components::layout::page_wrapper;
use crate::story::{LocationType, Story};
use crate::util::chapter_preview;

fn location_type_label(kind: LocationType) -> &'static str {
    match kind {
        LocationType::City => "City",
        LocationType::Wilderness => "Wilderness",
        LocationType::Landmark => "Landmark",
        LocationType::Building => "Building",
    }
}

/// Generates the story landing page
///
/// Lists chapters in manuscript order with a short preview and links to
/// their pages, followed by the character and location rosters.
///
/// # Arguments
///
/// * `story`: Story to summarize
///
/// # Returns
///
/// Complete HTML page as Markup
pub fn generate(story: &Story) -> Markup {
    page_wrapper(
        &story.title,
        &["assets/story.css"],
        html! {
            header class="story-header" {
                h1 class="story-title" { (story.title) }
                p class="story-stats" {
                    (story.chapters.len()) " chapters · "
                    (story.characters.len()) " characters · "
                    (story.locations.len()) " locations"
                }
            }

            section id="chapters" class="story-card" {
                h2 { "Chapters" }
                @if story.chapters.is_empty() {
                    p class="empty-state" { "No chapters yet" }
                } @else {
                    ol class="chapter-list" {
                        @for (i, chapter) in story.chapters.iter().enumerate() {
                            li class="chapter-item" {
                                a href=(format!("chapters/{}.html", i + 1)) class="chapter-title" {
                                    (chapter.title)
                                }
                                div class="chapter-preview" { (chapter_preview(&chapter.content)) }
                            }
                        }
                    }
                }
            }

            section id="characters" class="story-card" {
                h2 { "Characters" }
                @if story.characters.is_empty() {
                    p class="empty-state" { "No characters yet" }
                } @else {
                    ul class="entity-list" {
                        @for character in &story.characters {
                            li class="entity-item" {
                                span class="entity-name" { (character.name) }
                                @if !character.description.is_empty() {
                                    span class="entity-description" { (character.description) }
                                }
                            }
                        }
                    }
                }
            }

            section id="locations" class="story-card" {
                h2 { "Locations" }
                @if story.locations.is_empty() {
                    p class="empty-state" { "No locations yet" }
                } @else {
                    ul class="entity-list" {
                        @for location in &story.locations {
                            @let present = story.characters_at(location.id);
                            li class="entity-item" {
                                span class="entity-name" { (location.name) }
                                @if let Some(kind) = location.location_type {
                                    span class="entity-badge" { (location_type_label(kind)) }
                                }
                                @if !location.description.is_empty() {
                                    span class="entity-description" { (location.description) }
                                }
                                @if !present.is_empty() {
                                    span class="entity-present" {
                                        "Here: "
                                        @for (i, character) in present.iter().enumerate() {
                                            @if i > 0 { ", " }
                                            (character.name)
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::story::{Chapter, Character, Location};

    #[test]
    fn test_index_lists_chapters_with_previews() {
        // Arrange
        let story = Story {
            title: "Salt Road".to_string(),
            chapters: vec![
                Chapter::new(1, "Dawn", "# Dawn\n\nThe tide came in."),
                Chapter::new(2, "Dusk", ""),
            ],
            ..Story::default()
        };

        // Act
        let html = generate(&story).into_string();

        // Assert
        assert!(html.contains("Salt Road"), "Should contain story title");
        assert!(html.contains("href=\"chapters/1.html\""));
        assert!(html.contains("href=\"chapters/2.html\""));
        assert!(html.contains("The tide came in."), "Should show preview");
        assert!(html.contains("Empty chapter"), "Empty chapter preview");
    }

    #[test]
    fn test_index_shows_roster() {
        // Arrange
        let mut mira = Character::new(1, "Mira");
        mira.current_location_id = Some(7);
        let mut harbor = Location::new(7, "Harbor");
        harbor.location_type = Some(LocationType::City);
        let story = Story {
            characters: vec![mira],
            locations: vec![harbor],
            ..Story::default()
        };

        // Act
        let html = generate(&story).into_string();

        // Assert
        assert!(html.contains("<span class=\"entity-name\">Mira</span>"));
        assert!(html.contains("<span class=\"entity-badge\">City</span>"));
        assert!(html.contains("Here: Mira"));
        assert!(html.contains("No chapters yet"));
    }

    #[test]
    fn test_index_escapes_names() {
        // Arrange
        let story = Story {
            characters: vec![Character::new(1, "<b>Bold</b>")],
            ..Story::default()
        };

        // Act
        let html = generate(&story).into_string();

        // Assert
        assert!(html.contains("&lt;b&gt;Bold&lt;/b&gt;"));
    }
}

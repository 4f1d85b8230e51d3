//! Chapter page generation

use maud::{Markup, PreEscaped, html};

use crate::components::layout::page_wrapper;
use crate::components::nav::{breadcrumb, chapter_pager};
use crate::markdown::MarkdownRenderer;
use crate::story::Chapter;

/// Generates the page for one chapter
///
/// Chapter pages live at `chapters/<n>.html`, one level below the index.
///
/// # Arguments
///
/// * `story_title`: Story title for page title and breadcrumb
/// * `chapter`: Chapter to render
/// * `number`: 1-based chapter number
/// * `total`: Number of chapters in the story
/// * `renderer`: Markdown renderer for chapter content
///
/// # Returns
///
/// Complete HTML page as Markup
pub fn generate(
    story_title: &str,
    chapter: &Chapter,
    number: usize,
    total: usize,
    renderer: &MarkdownRenderer,
) -> Markup {
    let body = renderer.render(&chapter.content);
    let trail_label = format!("Chapter {}", number);

    page_wrapper(
        &format!("{}: {}", story_title, chapter.title),
        &["../assets/story.css"],
        html! {
            (breadcrumb(story_title, "../index.html", &[(trail_label.as_str(), None)]))

            main class="story-card" {
                h1 class="chapter-heading" { (chapter.title) }
                article class="markdown-body" {
                    (PreEscaped(body))
                }
            }

            (chapter_pager(number, total))
        },
    )
}

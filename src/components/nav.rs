//! Navigation components

use maud::{Markup, html};

/// Renders breadcrumb navigation
///
/// Story title is the root link back to the index; the remaining
/// components form the trail. A component without a link is the current
/// page.
///
/// # Arguments
///
/// * `story_title`: Story title for the root breadcrumb link
/// * `index_path`: Relative path back to index.html
/// * `components`: Trail components with optional link targets
pub fn breadcrumb(
    story_title: &str,
    index_path: &str,
    components: &[(&str, Option<String>)],
) -> Markup {
    html! {
        header {
            div class="breadcrumb" {
                a href=(index_path) class="breadcrumb-link" { (story_title) }
                @for (component, href) in components {
                    span class="breadcrumb-separator" { "/" }
                    @if let Some(link) = href {
                        a href=(link) class="breadcrumb-link" { (*component) }
                    } @else {
                        span class="breadcrumb-current" { (*component) }
                    }
                }
            }
        }
    }
}

/// Previous / next links between chapter pages.
///
/// # Arguments
///
/// * `number`: 1-based number of the current chapter
/// * `total`: Number of chapters in the story
pub fn chapter_pager(number: usize, total: usize) -> Markup {
    html! {
        nav class="chapter-pager" {
            @if number > 1 {
                a href=(format!("{}.html", number - 1)) class="pager-prev" { "Previous chapter" }
            }
            @if number < total {
                a href=(format!("{}.html", number + 1)) class="pager-next" { "Next chapter" }
            }
        }
    }
}

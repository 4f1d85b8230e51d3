//! Standalone preview page for rendered markdown

use maud::{Markup, PreEscaped, html};

use crate::components::layout::page_wrapper;

/// Wraps an already rendered HTML fragment in a complete document.
///
/// The stylesheet is inlined so the page works without an assets directory.
pub fn generate(title: &str, fragment: &str) -> Markup {
    page_wrapper(
        title,
        &[],
        html! {
            style { (PreEscaped(crate::assets::story_css())) }
            main class="story-card" {
                article class="markdown-body" {
                    (PreEscaped(fragment))
                }
            }
        },
    )
}

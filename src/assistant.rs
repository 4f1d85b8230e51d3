//! Writing assistant flow.
//!
//! Ties the pieces together the way the editor's assistant panel uses them:
//! resolve prompt references, hand the cleaned prompt and context to a
//! generator, render whatever comes back, and record the exchange.

use tracing::{debug, warn};

use crate::context::{GenerationContext, Generator};
use crate::history::ConversationHistory;
use crate::markdown::MarkdownRenderer;
use crate::references::ReferenceResolver;
use crate::story::Story;

/// Outcome of one submitted prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exchange {
    pub history_id: u64,
    pub cleaned_prompt: String,
    /// Reference summary lines, empty when nothing was referenced.
    pub notice: Vec<String>,
    pub raw_response: String,
    pub rendered_response: String,
    /// Whether the generator failed and the response is its error text.
    pub failed: bool,
}

/// Assistant bound to a story snapshot and a session history.
pub struct Assistant<'s, 'h> {
    story: &'s Story,
    resolver: ReferenceResolver<'s>,
    renderer: MarkdownRenderer,
    history: &'h mut ConversationHistory,
}

impl<'s, 'h> Assistant<'s, 'h> {
    pub fn new(story: &'s Story, history: &'h mut ConversationHistory) -> Self {
        Self::with_renderer(story, history, MarkdownRenderer::new())
    }

    pub fn with_renderer(
        story: &'s Story,
        history: &'h mut ConversationHistory,
        renderer: MarkdownRenderer,
    ) -> Self {
        Self {
            story,
            resolver: ReferenceResolver::from_story(story),
            renderer,
            history,
        }
    }

    /// Submits a prompt and records the exchange.
    ///
    /// Generator failures do not abort the flow: the error message becomes
    /// the response text and goes through the same rendering path.
    ///
    /// # Arguments
    ///
    /// * `prompt`: Prompt as typed, markers included
    /// * `current_chapter`: 1-based number of the chapter open in the editor
    /// * `generator`: Backend producing the response
    pub fn submit(
        &mut self,
        prompt: &str,
        current_chapter: Option<usize>,
        generator: &dyn Generator,
    ) -> Exchange {
        let resolved = self.resolver.resolve(prompt);
        let notice = resolved.notice();
        for line in &notice {
            debug!("{}", line);
        }

        let context = GenerationContext::new(self.story, &resolved, current_chapter);

        let (raw_response, failed) = match generator.generate(&resolved.cleaned_prompt, &context) {
            Ok(generation) => (generation.content, false),
            Err(e) => {
                warn!("Generation failed: {:#}", e);
                (format!("Error: {:#}", e), true)
            }
        };

        let rendered_response = self.renderer.render(&raw_response);
        let history_id = self
            .history
            .push(prompt, raw_response.clone(), rendered_response.clone());

        Exchange {
            history_id,
            cleaned_prompt: resolved.cleaned_prompt,
            notice,
            raw_response,
            rendered_response,
            failed,
        }
    }

    pub fn history(&self) -> &ConversationHistory {
        self.history
    }
}

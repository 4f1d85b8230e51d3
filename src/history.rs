//! Assistant conversation history.
//!
//! History belongs to the session that owns it and is passed by reference
//! to whatever needs to append or read. Items are kept newest first.

use serde::Serialize;
use std::collections::VecDeque;

use crate::util::{now_millis, truncate_chars};

const PROMPT_PREVIEW_CHARS: usize = 40;

/// One prompt / response exchange.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationItem {
    pub id: u64,
    pub prompt: String,
    pub raw_response: String,
    pub rendered_response: String,
    pub timestamp_millis: u64,
}

impl ConversationItem {
    /// Prompt shortened for list display.
    pub fn prompt_preview(&self) -> String {
        truncate_chars(&self.prompt, PROMPT_PREVIEW_CHARS)
    }
}

/// Append-only list of exchanges, newest first.
#[derive(Debug, Default, Clone)]
pub struct ConversationHistory {
    items: VecDeque<ConversationItem>,
    next_id: u64,
}

impl ConversationHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an exchange as the newest item.
    ///
    /// # Returns
    ///
    /// Id of the new item, unique within this history
    pub fn push(
        &mut self,
        prompt: impl Into<String>,
        raw_response: impl Into<String>,
        rendered_response: impl Into<String>,
    ) -> u64 {
        self.next_id += 1;
        let id = self.next_id;

        self.items.push_front(ConversationItem {
            id,
            prompt: prompt.into(),
            raw_response: raw_response.into(),
            rendered_response: rendered_response.into(),
            timestamp_millis: now_millis(),
        });

        id
    }

    pub fn get(&self, id: u64) -> Option<&ConversationItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn latest(&self) -> Option<&ConversationItem> {
        self.items.front()
    }

    /// Iterates newest first.
    pub fn iter(&self) -> impl Iterator<Item = &ConversationItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Removes all items. Ids keep increasing afterwards.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

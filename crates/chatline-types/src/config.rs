//! Configuration types for Chatline.
//!
//! `ChatConfig` represents the optional `chatline.toml` that tunes the
//! store's identifier allocation and placeholder text.

use serde::{Deserialize, Serialize};

use crate::chat::{ChatId, DEFAULT_EMPTY_CHAT_PLACEHOLDER};

/// Top-level configuration for a chat store.
///
/// All fields have sensible defaults, so an empty file is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatConfig {
    /// First identifier handed out by the chat id allocator.
    #[serde(default = "default_first_chat_id")]
    pub first_chat_id: ChatId,

    /// Text reported by last-message queries for chats without messages.
    #[serde(default = "default_empty_chat_placeholder")]
    pub empty_chat_placeholder: String,
}

fn default_first_chat_id() -> ChatId {
    1
}

fn default_empty_chat_placeholder() -> String {
    DEFAULT_EMPTY_CHAT_PLACEHOLDER.to_string()
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            first_chat_id: default_first_chat_id(),
            empty_chat_placeholder: default_empty_chat_placeholder(),
        }
    }
}

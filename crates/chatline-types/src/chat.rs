//! Chat and message types for Chatline.
//!
//! A chat is a fixed set of participants plus an append-only (but
//! individually deletable) sequence of messages. Insertion order is
//! chronological order.

use serde::{Deserialize, Serialize};

/// Identifier of a user taking part in chats.
pub type UserId = i64;

/// Identifier of a chat, unique within a store.
pub type ChatId = i64;

/// Identifier of a message, unique within its owning chat.
pub type MessageId = i64;

/// Text reported for a chat that holds no messages.
pub const DEFAULT_EMPTY_CHAT_PLACEHOLDER: &str = "no messages";

/// A single message within a chat.
///
/// `read` is the only field that changes after creation, and only from
/// unread to read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    /// Sender.
    pub from_id: UserId,
    /// Recipient; unread counts and read marking key off this field.
    pub peer_id: UserId,
    pub text: String,
    pub read: bool,
}

impl Message {
    /// Create an unread message.
    pub fn new(id: MessageId, from_id: UserId, peer_id: UserId, text: impl Into<String>) -> Self {
        Self {
            id,
            from_id,
            peer_id,
            text: text.into(),
            read: false,
        }
    }

    /// True when the message is addressed to `user_id` and has not been read.
    pub fn is_unread_for(&self, user_id: UserId) -> bool {
        self.peer_id == user_id && !self.read
    }
}

/// A conversation between a fixed list of participants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chat {
    pub id: ChatId,
    /// Participants, fixed at creation.
    pub users: Vec<UserId>,
    #[serde(default)]
    pub messages: Vec<Message>,
}

impl Chat {
    /// Create a chat with no messages.
    pub fn new(id: ChatId, users: Vec<UserId>) -> Self {
        Self {
            id,
            users,
            messages: Vec::new(),
        }
    }

    pub fn has_participant(&self, user_id: UserId) -> bool {
        self.users.contains(&user_id)
    }

    /// The most recently appended message, if any.
    pub fn last_message(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// Identifier for the next appended message: current max + 1, or 1 when empty.
    ///
    /// Uses the maximum rather than the length so ids stay unique after deletions.
    /// Returns `None` once the chat holds a message with id `MessageId::MAX`.
    pub fn next_message_id(&self) -> Option<MessageId> {
        match self.messages.iter().map(|m| m.id).max() {
            Some(max) => max.checked_add(1),
            None => Some(1),
        }
    }

    /// True when at least one message addressed to `user_id` is unread.
    pub fn has_unread_for(&self, user_id: UserId) -> bool {
        self.messages.iter().any(|m| m.is_unread_for(user_id))
    }
}

//! Chat service exposing chat and message operations.
//!
//! ChatService is the single owner of chat state: it creates and deletes
//! chats, appends and deletes messages, answers per-user queries, and
//! tracks read state. Every operation either fully succeeds or leaves the
//! store untouched.

use chatline_types::chat::{Chat, ChatId, Message, MessageId, UserId};
use chatline_types::config::ChatConfig;
use chatline_types::error::ChatError;
use tracing::{debug, warn};

use crate::chat::repository::ChatRepository;
use crate::chat::store::ChatStore;

/// Orchestrates chat and message operations over a [`ChatRepository`].
///
/// Generic over the repository so callers can supply their own storage;
/// defaults to the in-memory [`ChatStore`].
#[derive(Debug, Clone)]
pub struct ChatService<R: ChatRepository = ChatStore> {
    repo: R,
    empty_chat_placeholder: String,
}

impl ChatService<ChatStore> {
    /// Create a service over an empty in-memory store with default config.
    pub fn new() -> Self {
        Self::with_config(&ChatConfig::default())
    }

    /// Create a service over an empty in-memory store.
    pub fn with_config(config: &ChatConfig) -> Self {
        Self::with_repository(ChatStore::with_first_id(config.first_chat_id), config)
    }
}

impl Default for ChatService<ChatStore> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: ChatRepository> ChatService<R> {
    /// Create a service over an existing repository.
    pub fn with_repository(repo: R, config: &ChatConfig) -> Self {
        Self {
            repo,
            empty_chat_placeholder: config.empty_chat_placeholder.clone(),
        }
    }

    /// Access the underlying repository.
    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Look up a chat by id.
    pub fn chat(&self, chat_id: ChatId) -> Option<&Chat> {
        self.repo.get(chat_id)
    }

    /// All chats in store order.
    pub fn chats(&self) -> impl Iterator<Item = &Chat> {
        self.repo.iter()
    }

    // --- Chat lifecycle ---

    /// Create a chat with `user_id` as its only participant.
    ///
    /// Returns the freshly allocated chat id. Negative user ids are rejected,
    /// and `Exhausted` is returned once the allocator has no ids left.
    pub fn create_chat(&mut self, user_id: UserId) -> Result<ChatId, ChatError> {
        if user_id < 0 {
            warn!(user_id, "Rejected chat creation for negative user id");
            return Err(ChatError::InvalidArgument(format!(
                "user id {user_id} must not be negative"
            )));
        }

        let Some(chat_id) = self.repo.allocate_chat_id() else {
            warn!(user_id, "Chat id space exhausted");
            return Err(ChatError::Exhausted("no chat ids left".to_string()));
        };
        self.repo.insert(Chat::new(chat_id, vec![user_id]));
        debug!(chat_id, user_id, "Chat created");
        Ok(chat_id)
    }

    /// Delete a chat together with all of its messages.
    pub fn delete_chat(&mut self, chat_id: ChatId) -> Result<(), ChatError> {
        match self.repo.remove(chat_id) {
            Some(chat) => {
                debug!(chat_id, messages = chat.messages.len(), "Chat deleted");
                Ok(())
            }
            None => Err(chat_not_found(chat_id)),
        }
    }

    // --- Per-user queries ---

    /// All chats `user_id` participates in, in store order.
    ///
    /// An empty result is reported as `InvalidArgument`, not as an empty list.
    pub fn get_chats(&self, user_id: UserId) -> Result<Vec<&Chat>, ChatError> {
        let chats: Vec<&Chat> = self
            .repo
            .iter()
            .filter(|c| c.has_participant(user_id))
            .collect();

        if chats.is_empty() {
            return Err(ChatError::InvalidArgument(format!(
                "no chats found for user {user_id}"
            )));
        }
        Ok(chats)
    }

    /// Number of the user's chats holding at least one unread message
    /// addressed to them. Each chat counts once.
    pub fn get_unread_chats_count(&self, user_id: UserId) -> usize {
        self.repo
            .iter()
            .filter(|c| c.has_participant(user_id) && c.has_unread_for(user_id))
            .count()
    }

    /// Text of the last message of each of the user's chats, in
    /// [`get_chats`](Self::get_chats) order. Empty chats yield the configured
    /// placeholder.
    pub fn get_last_messages(&self, user_id: UserId) -> Result<Vec<String>, ChatError> {
        let chats = self.get_chats(user_id)?;
        Ok(chats
            .into_iter()
            .map(|c| match c.last_message() {
                Some(message) => message.text.clone(),
                None => self.empty_chat_placeholder.clone(),
            })
            .collect())
    }

    // --- Messages ---

    /// Page through a chat: at most `count` messages with id >= `last_message_id`.
    ///
    /// Every returned message addressed to `user_id` is marked read. A missing
    /// chat is reported as `InvalidArgument`.
    pub fn get_chat_messages(
        &mut self,
        user_id: UserId,
        chat_id: ChatId,
        last_message_id: MessageId,
        count: usize,
    ) -> Result<Vec<Message>, ChatError> {
        let Some(chat) = self.repo.get_mut(chat_id) else {
            return Err(ChatError::InvalidArgument(format!("chat {chat_id} not found")));
        };

        let mut page = Vec::with_capacity(count.min(chat.messages.len()));
        for message in chat
            .messages
            .iter_mut()
            .filter(|m| m.id >= last_message_id)
            .take(count)
        {
            if message.peer_id == user_id {
                message.read = true;
            }
            page.push(message.clone());
        }

        debug!(
            chat_id,
            user_id,
            last_message_id,
            returned = page.len(),
            "Chat messages paged"
        );
        Ok(page)
    }

    /// Append a message to a chat, creating the chat if it does not exist.
    ///
    /// An auto-created chat takes `chat_id` as given (not from the allocator)
    /// with participants `[from_id, peer_id]`. The id is reserved so later
    /// allocations skip it. Returns the new message id, or `Exhausted` when
    /// the chat already holds a message with id `MessageId::MAX`.
    pub fn create_message(
        &mut self,
        chat_id: ChatId,
        from_id: UserId,
        peer_id: UserId,
        text: impl Into<String>,
    ) -> Result<MessageId, ChatError> {
        let text = text.into();

        if let Some(chat) = self.repo.get_mut(chat_id) {
            let Some(message_id) = chat.next_message_id() else {
                warn!(chat_id, "Message id space exhausted");
                return Err(ChatError::Exhausted(format!(
                    "no message ids left in chat {chat_id}"
                )));
            };
            chat.messages.push(Message::new(message_id, from_id, peer_id, text));
            debug!(chat_id, message_id, from_id, peer_id, "Message created");
            return Ok(message_id);
        }

        self.repo.reserve_chat_id(chat_id);
        let mut chat = Chat::new(chat_id, vec![from_id, peer_id]);
        chat.messages.push(Message::new(1, from_id, peer_id, text));
        self.repo.insert(chat);
        debug!(chat_id, from_id, peer_id, "Chat auto-created for first message");
        Ok(1)
    }

    /// Remove every message with `message_id` from the chat.
    ///
    /// A missing message is a no-op; only a missing chat fails.
    pub fn delete_message(
        &mut self,
        chat_id: ChatId,
        message_id: MessageId,
    ) -> Result<(), ChatError> {
        let chat = self
            .repo
            .get_mut(chat_id)
            .ok_or_else(|| chat_not_found(chat_id))?;

        let before = chat.messages.len();
        chat.messages.retain(|m| m.id != message_id);
        debug!(
            chat_id,
            message_id,
            removed = before - chat.messages.len(),
            "Message deleted"
        );
        Ok(())
    }

    /// Mark every message in the chat addressed to `user_id` as read.
    pub fn mark_messages_as_read(
        &mut self,
        user_id: UserId,
        chat_id: ChatId,
    ) -> Result<(), ChatError> {
        let chat = self
            .repo
            .get_mut(chat_id)
            .ok_or_else(|| chat_not_found(chat_id))?;

        for message in chat.messages.iter_mut().filter(|m| m.peer_id == user_id) {
            message.read = true;
        }
        debug!(chat_id, user_id, "Messages marked as read");
        Ok(())
    }
}

fn chat_not_found(chat_id: ChatId) -> ChatError {
    warn!(chat_id, "Chat not found");
    ChatError::NotFound(format!("chat {chat_id}"))
}

//! In-memory chat store.

use chatline_types::chat::{Chat, ChatId};

use crate::chat::repository::ChatRepository;

/// In-memory [`ChatRepository`]: chats in insertion order plus a monotonic
/// chat identifier counter scoped to the store's lifetime.
#[derive(Debug, Clone)]
pub struct ChatStore {
    chats: Vec<Chat>,
    /// `None` once `ChatId::MAX` has been handed out or reserved.
    next_chat_id: Option<ChatId>,
}

impl ChatStore {
    /// Create an empty store whose first allocated chat id is 1.
    pub fn new() -> Self {
        Self::with_first_id(1)
    }

    /// Create an empty store whose allocator starts at `first_chat_id`.
    pub fn with_first_id(first_chat_id: ChatId) -> Self {
        Self {
            chats: Vec::new(),
            next_chat_id: Some(first_chat_id),
        }
    }

    /// Seed a store with pre-built chats, kept in the given order.
    ///
    /// The allocator resumes after the largest seeded id.
    pub fn from_chats(chats: Vec<Chat>) -> Self {
        let mut store = Self::new();
        for chat in chats {
            store.reserve_chat_id(chat.id);
            store.chats.push(chat);
        }
        store
    }

    /// The identifier the next `allocate_chat_id` call will return.
    pub fn peek_next_chat_id(&self) -> Option<ChatId> {
        self.next_chat_id
    }

    fn position(&self, chat_id: ChatId) -> Option<usize> {
        self.chats.iter().position(|c| c.id == chat_id)
    }
}

impl Default for ChatStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatRepository for ChatStore {
    fn allocate_chat_id(&mut self) -> Option<ChatId> {
        let id = self.next_chat_id?;
        self.next_chat_id = id.checked_add(1);
        Some(id)
    }

    fn reserve_chat_id(&mut self, chat_id: ChatId) {
        if let Some(next) = self.next_chat_id {
            if chat_id >= next {
                self.next_chat_id = chat_id.checked_add(1);
            }
        }
    }

    fn insert(&mut self, chat: Chat) {
        self.chats.push(chat);
    }

    fn remove(&mut self, chat_id: ChatId) -> Option<Chat> {
        let idx = self.position(chat_id)?;
        Some(self.chats.remove(idx))
    }

    fn get(&self, chat_id: ChatId) -> Option<&Chat> {
        self.chats.iter().find(|c| c.id == chat_id)
    }

    fn get_mut(&mut self, chat_id: ChatId) -> Option<&mut Chat> {
        self.chats.iter_mut().find(|c| c.id == chat_id)
    }

    fn iter(&self) -> impl Iterator<Item = &Chat> {
        self.chats.iter()
    }

    fn iter_mut(&mut self) -> impl Iterator<Item = &mut Chat> {
        self.chats.iter_mut()
    }

    fn len(&self) -> usize {
        self.chats.len()
    }
}

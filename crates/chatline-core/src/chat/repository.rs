//! ChatRepository trait definition.
//!
//! Owns chats in insertion order and the chat identifier allocator.
//! Everything is synchronous: the store has a single owner, and mutation
//! goes through `&mut self`.

use chatline_types::chat::{Chat, ChatId};

/// Storage port for chats and their messages.
///
/// `ChatStore` is the in-memory implementation. Callers needing shared
/// access across threads wrap the owning service in their own lock.
pub trait ChatRepository {
    /// Hand out the next chat identifier (post-increment).
    ///
    /// Returns `None` once the identifier space is used up; an identifier is
    /// never handed out twice.
    fn allocate_chat_id(&mut self) -> Option<ChatId>;

    /// Mark `chat_id` as taken so the allocator never returns it later.
    ///
    /// Used when a chat is created with a caller-supplied identifier.
    fn reserve_chat_id(&mut self, chat_id: ChatId);

    /// Append a chat at the end of the store order.
    fn insert(&mut self, chat: Chat);

    /// Remove a chat (and with it, all of its messages).
    fn remove(&mut self, chat_id: ChatId) -> Option<Chat>;

    fn get(&self, chat_id: ChatId) -> Option<&Chat>;

    fn get_mut(&mut self, chat_id: ChatId) -> Option<&mut Chat>;

    /// All chats in store order.
    fn iter(&self) -> impl Iterator<Item = &Chat>;

    /// All chats in store order, mutably.
    fn iter_mut(&mut self) -> impl Iterator<Item = &mut Chat>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

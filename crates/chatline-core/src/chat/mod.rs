//! Chat and message management for Chatline.
//!
//! `ChatRepository` is the storage port, `ChatStore` the in-memory
//! implementation, and `ChatService` the operations callers use.

pub mod repository;
pub mod service;
pub mod store;

pub use repository::ChatRepository;
pub use service::ChatService;
pub use store::ChatStore;

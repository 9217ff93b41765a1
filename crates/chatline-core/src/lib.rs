//! Business logic and the repository trait for Chatline.
//!
//! This crate defines the `ChatRepository` port, the in-memory `ChatStore`
//! that implements it, and the `ChatService` exposing every chat and message
//! operation. It depends only on `chatline-types` -- there is no transport
//! or persistence layer here.

pub mod chat;
pub mod config;

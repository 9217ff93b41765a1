//! Shared domain types for Chatline.
//!
//! This crate contains the core domain types used across the Chatline
//! workspace: Chat, Message, the chat configuration, and the error type
//! every store operation reports.
//!
//! Zero infrastructure dependencies -- only serde and thiserror.

pub mod chat;
pub mod config;
pub mod error;

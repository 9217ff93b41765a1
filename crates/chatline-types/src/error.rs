use thiserror::Error;

use std::fmt;

/// Errors reported by chat store operations.
///
/// `InvalidArgument` covers malformed input and the lookup-by-user / paging
/// misses; `NotFound` covers operations that target a chat which must exist
/// (delete, message delete, mark-as-read). `Exhausted` is only reported once
/// an identifier space has reached `i64::MAX`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChatError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("identifiers exhausted: {0}")]
    Exhausted(String),
}

/// Discriminant of a [`ChatError`], for callers mapping failures to their
/// own representation (HTTP status, RPC code) without matching on text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChatErrorKind {
    InvalidArgument,
    NotFound,
    Exhausted,
}

impl ChatError {
    pub fn kind(&self) -> ChatErrorKind {
        match self {
            ChatError::InvalidArgument(_) => ChatErrorKind::InvalidArgument,
            ChatError::NotFound(_) => ChatErrorKind::NotFound,
            ChatError::Exhausted(_) => ChatErrorKind::Exhausted,
        }
    }
}

impl fmt::Display for ChatErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChatErrorKind::InvalidArgument => write!(f, "invalid_argument"),
            ChatErrorKind::NotFound => write!(f, "not_found"),
            ChatErrorKind::Exhausted => write!(f, "exhausted"),
        }
    }
}

//! Ring Buffer Error Types

use thiserror::Error;

/// Outcome of a push or pop that could not be carried out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BufferError {
    /// Every usable slot holds an unread entry
    #[error("ring buffer is full")]
    Full,

    /// No unread entries
    #[error("ring buffer is empty")]
    Empty,
}

//! The syntax error raised when a parse aborts.
//!
//! There is exactly one error kind. Every production that rejects its input
//! reports through it, and the message text is the only thing telling two
//! failures apart.

use crate::SourcePosition;
use serde::Serialize;
use thiserror::Error;

/// Maximum number of characters kept in a diagnostic message.
pub const MAX_MESSAGE_LEN: usize = 99;

/// A syntax error with its diagnostic message and approximate position.
///
/// The message is capped at [`MAX_MESSAGE_LEN`] characters on construction.
///
/// # Examples
///
/// ```
/// use core_types::{SourcePosition, SyntaxError};
///
/// let error = SyntaxError::new("[foo(1,2);]: expected '='", SourcePosition::start());
/// assert_eq!(
///     error.to_string(),
///     "SyntaxError at line 1, column 1: [foo(1,2);]: expected '='"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("SyntaxError at {position}: {message}")]
pub struct SyntaxError {
    /// Human-readable diagnostic, at most [`MAX_MESSAGE_LEN`] characters
    pub message: String,
    /// Where the cursor stood when the error was raised
    pub position: SourcePosition,
}

impl SyntaxError {
    /// Create a syntax error, truncating the message to [`MAX_MESSAGE_LEN`]
    /// characters.
    pub fn new(message: impl Into<String>, position: SourcePosition) -> Self {
        let mut message = message.into();
        if let Some((cut, _)) = message.char_indices().nth(MAX_MESSAGE_LEN) {
            message.truncate(cut);
        }
        Self { message, position }
    }
}

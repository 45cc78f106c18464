//! Parser error helpers

use core_types::{SourcePosition, SyntaxError};

/// Number of source bytes quoted in a diagnostic.
pub const CONTEXT_LEN: usize = 10;

/// Create a syntax error quoting the source at the failure point.
///
/// The message reads `[<context>]: <description>`, where context is up to
/// [`CONTEXT_LEN`] bytes starting at the failure point. Non-ASCII bytes are
/// rendered lossily.
pub fn syntax_error(context: &[u8], description: &str, position: SourcePosition) -> SyntaxError {
    let context = &context[..context.len().min(CONTEXT_LEN)];
    SyntaxError::new(
        format!("[{}]: {}", String::from_utf8_lossy(context), description),
        position,
    )
}

/// Description for a required byte that was not found.
pub fn expected_byte(byte: u8) -> String {
    format!("expected '{}'", char::from(byte))
}

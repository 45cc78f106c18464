//! Cursor over the source text.
//!
//! The scanner never produces a token stream. Productions inspect the
//! current byte, consume what they recognize and call [`Scanner::skip_trivia`]
//! to step over whitespace and `//` comments before the next decision.
//!
//! The text ends at the first NUL byte or at the end of the slice. Past the
//! end, [`Scanner::current`] reports NUL, which no production accepts.

use crate::classify::is_space;
use crate::error::{expected_byte, syntax_error};
use core_types::{SourcePosition, SyntaxError};

/// Byte reported at and past the end of input.
pub const NUL: u8 = 0;

/// Location of the most recent identifier or number.
///
/// Only offsets are kept; the text is recovered from the source it was
/// scanned from with [`TokenSpan::text`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenSpan {
    /// Byte offset of the first byte
    pub offset: usize,
    /// Length in bytes
    pub len: usize,
    /// Line the token was found on
    pub line: u32,
}

impl TokenSpan {
    /// The token's text within `source`.
    ///
    /// Returns an empty string if the span does not lie within `source`.
    pub fn text<'s>(&self, source: &'s str) -> &'s str {
        source.get(self.offset..self.offset + self.len).unwrap_or("")
    }
}

/// Cursor and line counter over one source text.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    source: &'a [u8],
    position: usize,
    line: u32,
}

impl<'a> Scanner<'a> {
    /// Create a scanner at the start of `source`, on line 1.
    pub fn new(source: &'a [u8]) -> Self {
        let end = source
            .iter()
            .position(|&b| b == NUL)
            .unwrap_or(source.len());
        Self {
            source: &source[..end],
            position: 0,
            line: 1,
        }
    }

    /// The byte under the cursor, or [`NUL`] at end of input.
    #[inline]
    pub fn current(&self) -> u8 {
        self.peek(0)
    }

    /// The byte `ahead` positions past the cursor, or [`NUL`].
    #[inline]
    pub fn peek(&self, ahead: usize) -> u8 {
        self.source
            .get(self.position + ahead)
            .copied()
            .unwrap_or(NUL)
    }

    /// Returns true once the cursor reached the end of input.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Byte offset of the cursor.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Current line, starting at 1.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Unconsumed input.
    pub fn remaining(&self) -> &'a [u8] {
        &self.source[self.position..]
    }

    /// Move past the current byte. Does nothing at end of input.
    #[inline]
    pub fn advance(&mut self) {
        if !self.is_at_end() {
            self.position += 1;
        }
    }

    /// Skip whitespace and line comments.
    ///
    /// Each consumed line feed bumps the line counter. A comment runs up to,
    /// not including, its line feed, which the next round consumes.
    pub fn skip_trivia(&mut self) {
        loop {
            while is_space(self.current()) {
                if self.current() == b'\n' {
                    self.line += 1;
                }
                self.position += 1;
            }

            if self.current() != b'/' || self.peek(1) != b'/' {
                break;
            }
            self.position += 2;
            while !self.is_at_end() && self.current() != b'\n' {
                self.position += 1;
            }
        }
    }

    /// Consume `expected` and the trivia after it.
    pub fn match_byte(&mut self, expected: u8) -> Result<(), SyntaxError> {
        if self.is_at_end() || self.current() != expected {
            return Err(self.error(&expected_byte(expected)));
        }
        self.position += 1;
        self.skip_trivia();
        Ok(())
    }

    /// Consume `literal` and the trivia after it if the input starts with it.
    ///
    /// Leaves the cursor untouched and returns false otherwise.
    pub fn test_and_skip(&mut self, literal: &[u8]) -> bool {
        if literal.is_empty() || !self.remaining().starts_with(literal) {
            return false;
        }
        self.position += literal.len();
        self.skip_trivia();
        true
    }

    /// Span from `start` to the cursor, recorded on `line`.
    pub fn span_from(&self, start: usize, line: u32) -> TokenSpan {
        TokenSpan {
            offset: start,
            len: self.position - start,
            line,
        }
    }

    /// Bytes covered by `span`.
    pub fn slice(&self, span: TokenSpan) -> &'a [u8] {
        self.source
            .get(span.offset..span.offset + span.len)
            .unwrap_or(&[])
    }

    /// Line, column and offset of the cursor.
    pub fn source_position(&self) -> SourcePosition {
        self.position_at(self.position)
    }

    /// Syntax error at the cursor.
    pub fn error(&self, description: &str) -> SyntaxError {
        self.error_at(self.position, description)
    }

    /// Syntax error at `offset`, which must not lie past the cursor.
    pub fn error_at(&self, offset: usize, description: &str) -> SyntaxError {
        let context = self.source.get(offset..).unwrap_or(&[]);
        syntax_error(context, description, self.position_at(offset))
    }

    fn position_at(&self, offset: usize) -> SourcePosition {
        let offset = offset.min(self.source.len());
        let line_start = self.source[..offset]
            .iter()
            .rposition(|&b| b == b'\n')
            .map_or(0, |i| i + 1);
        SourcePosition {
            line: self.line,
            column: (offset - line_start + 1) as u32,
            offset,
        }
    }
}

//! Recursive descent parser for the script grammar
//!
//! ```text
//! code        = { statement }
//! statement   = ( declaration | assignment | expression ) ";"
//! declaration = "var" assignment { "," assignment }
//! assignment  = identifier "=" expression
//! expression  = term { ("+" | "-") term }
//! term        = factor { ("*" | "/") factor }
//! factor      = number | "(" expression ")" | identifier [ call ]
//! call        = "(" { expression [ "," ] } ")"
//! identifier  = (letter | "_") { letter | digit | "_" }
//! number      = digit { digit }
//! ```
//!
//! Productions validate only; nothing is built. The first mismatch returns a
//! [`SyntaxError`] that `?` carries straight out of [`Parser::parse`].
//!
//! Statements are dispatched on one byte of lookahead. The `var` prefix
//! selects a declaration; it is matched byte for byte, so `varx = 1;`
//! declares `x` and `var1 = 2;` is rejected. A statement that starts with a
//! letter always takes the assignment path, so a bare call such as `foo(1);`
//! is rejected when `=` is missing. `_` is not a letter: `_f(1);` is an
//! expression statement and `_x = 1;` is rejected.
//!
//! Expressions nest at most [`MAX_NESTING`] levels deep. Deeper input is
//! grammatical but rejected, since every level costs native stack.

use crate::classify::{is_alpha, is_digit, is_ident_continue, is_ident_start};
use crate::scanner::{Scanner, TokenSpan};
use core_types::SyntaxError;

/// Result of a production.
pub type ParseResult<T> = Result<T, SyntaxError>;

/// Deepest expression nesting accepted, counting parentheses and call
/// arguments.
pub const MAX_NESTING: usize = 256;

/// Script parser over one source text
pub struct Parser<'a> {
    scanner: Scanner<'a>,
    /// Most recent identifier or number
    last_token: Option<TokenSpan>,
    /// Statements accepted so far
    statements: usize,
    /// Current expression nesting
    depth: usize,
    /// Echo accepted statements to stderr
    trace: bool,
}

impl<'a> Parser<'a> {
    /// Create a new parser for the given source text
    pub fn new(source: &'a [u8]) -> Self {
        Self {
            scanner: Scanner::new(source),
            last_token: None,
            statements: 0,
            depth: 0,
            trace: false,
        }
    }

    /// Echo each accepted statement to stderr
    pub fn with_trace(mut self, enabled: bool) -> Self {
        self.trace = enabled;
        self
    }

    /// Parse the whole source, stopping at the first error
    pub fn parse(&mut self) -> ParseResult<()> {
        self.scanner.skip_trivia();

        while !self.scanner.is_at_end() {
            let start = self.scanner.position();
            let line = self.scanner.line();
            self.parse_statement()?;
            self.statements += 1;

            if self.trace {
                let text = self.scanner.slice(self.scanner.span_from(start, line));
                eprintln!(
                    "{:<12} line {}: {}",
                    "statement",
                    line,
                    String::from_utf8_lossy(text).trim_end()
                );
            }
        }

        Ok(())
    }

    /// Scanner state, for inspection after a parse
    pub fn scanner(&self) -> &Scanner<'a> {
        &self.scanner
    }

    /// Most recent identifier or number
    pub fn last_token(&self) -> Option<TokenSpan> {
        self.last_token
    }

    /// Number of statements accepted
    pub fn statements(&self) -> usize {
        self.statements
    }

    fn ensure(&self, condition: bool, description: &str) -> ParseResult<()> {
        if condition {
            Ok(())
        } else {
            Err(self.scanner.error(description))
        }
    }

    fn parse_statement(&mut self) -> ParseResult<()> {
        if self.scanner.test_and_skip(b"var") {
            self.parse_declaration()?;
        } else if is_alpha(self.scanner.current()) {
            self.parse_assignment()?;
        } else {
            self.parse_expression()?;
        }
        self.scanner.match_byte(b';')
    }

    fn parse_declaration(&mut self) -> ParseResult<()> {
        loop {
            self.parse_assignment()?;
            if !self.scanner.test_and_skip(b",") {
                return Ok(());
            }
        }
    }

    fn parse_assignment(&mut self) -> ParseResult<()> {
        self.parse_identifier()?;
        self.scanner.match_byte(b'=')?;
        self.parse_expression()
    }

    fn parse_expression(&mut self) -> ParseResult<()> {
        self.depth += 1;
        self.ensure(self.depth <= MAX_NESTING, "expression nested too deeply")?;

        self.parse_term()?;
        while matches!(self.scanner.current(), b'+' | b'-') {
            self.scanner.match_byte(self.scanner.current())?;
            self.parse_term()?;
        }

        self.depth -= 1;
        Ok(())
    }

    fn parse_term(&mut self) -> ParseResult<()> {
        self.parse_factor()?;
        while matches!(self.scanner.current(), b'*' | b'/') {
            self.scanner.match_byte(self.scanner.current())?;
            self.parse_factor()?;
        }
        Ok(())
    }

    fn parse_factor(&mut self) -> ParseResult<()> {
        let current = self.scanner.current();
        if current == b'(' {
            self.scanner.match_byte(b'(')?;
            self.parse_expression()?;
            self.scanner.match_byte(b')')
        } else if is_ident_start(current) {
            self.parse_identifier()?;
            if self.scanner.current() == b'(' {
                self.parse_call_arguments()?;
            }
            Ok(())
        } else {
            self.parse_number().map(|_| ())
        }
    }

    // Arity is not checked; separators between arguments are optional.
    fn parse_call_arguments(&mut self) -> ParseResult<()> {
        self.scanner.match_byte(b'(')?;
        while self.scanner.current() != b')' {
            self.parse_expression()?;
            if self.scanner.current() == b',' {
                self.scanner.match_byte(b',')?;
            }
        }
        self.scanner.match_byte(b')')
    }

    fn parse_identifier(&mut self) -> ParseResult<TokenSpan> {
        self.ensure(is_ident_start(self.scanner.current()), "expected identifier")?;

        let start = self.scanner.position();
        let line = self.scanner.line();
        self.scanner.advance();
        while is_ident_continue(self.scanner.current()) {
            self.scanner.advance();
        }

        let span = self.scanner.span_from(start, line);
        self.last_token = Some(span);
        self.scanner.skip_trivia();
        Ok(span)
    }

    /// Unsigned decimal literal. Values past `i64::MAX` are rejected.
    fn parse_number(&mut self) -> ParseResult<i64> {
        self.ensure(is_digit(self.scanner.current()), "expected digit")?;

        let start = self.scanner.position();
        let line = self.scanner.line();
        let mut value: i64 = 0;
        while is_digit(self.scanner.current()) {
            let digit = i64::from(self.scanner.current() - b'0');
            value = value
                .checked_mul(10)
                .and_then(|v| v.checked_add(digit))
                .ok_or_else(|| self.scanner.error_at(start, "integer literal overflow"))?;
            self.scanner.advance();
        }

        self.last_token = Some(self.scanner.span_from(start, line));
        self.scanner.skip_trivia();
        Ok(value)
    }
}

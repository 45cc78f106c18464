//! Parser instance and driver
//!
//! An [`Engine`] is the long-lived handle a host creates once and feeds
//! source texts to. Each call to [`Engine::exec`] resets the cursor, line
//! counter and error, parses every statement and keeps only the outcome:
//! success, or the diagnostic of the first syntax error.
//!
//! `exec` borrows the engine mutably for the whole parse, so a second parse
//! cannot start on the same engine until the first one returns.

use crate::parser::Parser;
use crate::scanner::TokenSpan;
use core_types::{SymbolTable, SyntaxError};

/// Outcome of a successful parse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecSummary {
    /// Statements accepted
    pub statements: usize,
    /// Line counter when the parse finished
    pub lines: u32,
}

/// Parser state reused across parses
///
/// # Example
///
/// ```
/// use parser::Engine;
///
/// let mut engine = Engine::new();
/// assert!(engine.exec("var x = 1, y = x + 2 * (3 - 1);"));
/// assert!(!engine.exec("foo(1,2);"));
/// assert_eq!(engine.error_message(), "[(1,2);]: expected '='");
/// ```
#[derive(Debug)]
pub struct Engine {
    /// Declared variables, for an evaluator built on top of the parser
    symbols: SymbolTable,
    /// Cursor offset when the last parse stopped
    cursor: usize,
    /// Line counter when the last parse stopped
    line: u32,
    /// Most recent identifier or number of the last parse
    last_token: Option<TokenSpan>,
    /// Statements accepted by the last parse
    statements: usize,
    /// Error raised by the last parse
    error: Option<SyntaxError>,
    /// Echo statements and errors to stderr
    trace: bool,
}

impl Engine {
    /// Create an engine with an empty symbol table
    pub fn new() -> Self {
        Self {
            symbols: SymbolTable::new(),
            cursor: 0,
            line: 1,
            last_token: None,
            statements: 0,
            error: None,
            trace: false,
        }
    }

    /// Enable stderr tracing of accepted statements and errors
    pub fn with_trace(mut self, enabled: bool) -> Self {
        self.trace = enabled;
        self
    }

    /// Parse `source`, returning true if it conforms to the grammar.
    ///
    /// On failure the diagnostic is available from
    /// [`Engine::error_message`] until the next call.
    pub fn exec(&mut self, source: &str) -> bool {
        self.run(source).is_ok()
    }

    /// Byte-oriented form of [`Engine::exec`].
    ///
    /// The text ends at the first NUL byte, if any.
    pub fn exec_bytes(&mut self, source: &[u8]) -> bool {
        self.run_bytes(source).is_ok()
    }

    /// Parse `source`, returning a summary or the first syntax error.
    pub fn run(&mut self, source: &str) -> Result<ExecSummary, SyntaxError> {
        self.run_bytes(source.as_bytes())
    }

    /// Byte-oriented form of [`Engine::run`].
    pub fn run_bytes(&mut self, source: &[u8]) -> Result<ExecSummary, SyntaxError> {
        self.reset();

        let mut parser = Parser::new(source).with_trace(self.trace);
        let result = parser.parse();

        self.cursor = parser.scanner().position();
        self.line = parser.scanner().line();
        self.last_token = parser.last_token();
        self.statements = parser.statements();

        match result {
            Ok(()) => Ok(ExecSummary {
                statements: self.statements,
                lines: self.line,
            }),
            Err(err) => {
                if self.trace {
                    eprintln!("{:<12} {}", "error", err);
                }
                self.error = Some(err.clone());
                Err(err)
            }
        }
    }

    /// Diagnostic of the last failed parse, or an empty string
    pub fn error_message(&self) -> &str {
        self.error.as_ref().map_or("", |err| err.message.as_str())
    }

    /// Error of the last failed parse
    pub fn last_error(&self) -> Option<&SyntaxError> {
        self.error.as_ref()
    }

    /// Line counter when the last parse stopped, starting at 1
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Cursor offset when the last parse stopped
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Most recent identifier or number seen by the last parse
    pub fn last_token(&self) -> Option<TokenSpan> {
        self.last_token
    }

    /// Statements accepted by the last parse
    pub fn statements(&self) -> usize {
        self.statements
    }

    /// Whether stderr tracing is enabled
    pub fn is_trace_enabled(&self) -> bool {
        self.trace
    }

    /// Declared variables
    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    /// Declared variables, mutably
    pub fn symbols_mut(&mut self) -> &mut SymbolTable {
        &mut self.symbols
    }

    fn reset(&mut self) {
        self.cursor = 0;
        self.line = 1;
        self.last_token = None;
        self.statements = 0;
        self.error = None;
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

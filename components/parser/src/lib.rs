//! Script Parser Component
//!
//! Single-pass recursive descent front end for a small C-like scripting
//! language: declarations, assignments, arithmetic and function calls.
//! Source bytes are classified and recognized on demand; no token stream is
//! materialized and no syntax tree is built. A parse either accepts the
//! whole text or stops at the first syntax error.
//!
//! # Overview
//!
//! - [`classify`] - Byte to lexical class lookup
//! - [`Scanner`] - Cursor with trivia skipping and literal matching
//! - [`Parser`] - Grammar productions
//! - [`Engine`] - Reusable instance that drives parses and keeps the outcome
//!
//! # Example
//!
//! ```
//! use parser::Engine;
//!
//! let mut engine = Engine::new();
//! assert!(engine.exec("var x = 1;\nx = foo(x, 2) * 3;"));
//! assert!(!engine.exec("var = 1;"));
//! println!("{}", engine.error_message());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod classify;
pub mod engine;
pub mod error;
pub mod parser;
pub mod scanner;

pub use classify::{classify, is_alnum, is_alpha, is_digit, is_space, CharClass};
pub use engine::{Engine, ExecSummary};
pub use parser::{ParseResult, Parser, MAX_NESTING};
pub use scanner::{Scanner, TokenSpan};

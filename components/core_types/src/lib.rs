//! Shared types for the ejs script front end.
//!
//! This crate holds the vocabulary the parser and its hosts agree on:
//! source positions, the single syntax error kind, the variable record a
//! future evaluator will store, and the ordered symbol table that holds them.
//!
//! # Overview
//!
//! - [`SourcePosition`] - Location in the source text
//! - [`SyntaxError`] - The one error a parse can produce
//! - [`Variable`] - Declared variable with a typed value
//! - [`VarType`] / [`VarValue`] - Type tag and value union
//! - [`SymbolTable`] - Declaration-ordered collection of variables
//!
//! # Examples
//!
//! ```
//! use core_types::{SourcePosition, SyntaxError, SymbolTable, Variable, VarValue};
//!
//! let mut table = SymbolTable::new();
//! let id = table.push_back(Variable::new("x", VarValue::Integer(1)));
//! assert_eq!(table.get(id).map(|v| v.name.as_str()), Some("x"));
//!
//! let error = SyntaxError::new("[= 1;]: expected identifier", SourcePosition::start());
//! assert_eq!(error.position.line, 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod error;
mod source;
mod symbol_table;
mod value;

pub use error::{SyntaxError, MAX_MESSAGE_LEN};
pub use source::SourcePosition;
pub use symbol_table::{Iter, SymbolTable, VarId};
pub use value::{VarType, VarValue, Variable};

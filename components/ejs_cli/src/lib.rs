//! ejs Script Checker CLI Library
//!
//! Provides the Runtime struct and supporting modules for the `ejs` binary,
//! which embeds the parser engine as a host.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cli;
pub mod error;
pub mod repl;
pub mod runtime;

pub use cli::Cli;
pub use error::{CliError, CliResult};
pub use runtime::{ExecReport, Runtime};

//! Runtime orchestration for script checking
//!
//! The Runtime owns one parser [`Engine`] for its whole life, the way an
//! embedding host would, and feeds it files, inline code or REPL input.

use crate::error::{CliError, CliResult};
use core_types::SyntaxError;
use parser::{Engine, ExecSummary};
use serde::Serialize;

/// Machine-readable outcome of one check
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExecReport {
    /// Whether the source conforms to the grammar
    pub ok: bool,
    /// Statements accepted before the parse stopped
    pub statements: usize,
    /// Line counter when the parse stopped
    pub lines: u32,
    /// The syntax error, if the source was rejected
    pub error: Option<SyntaxError>,
}

impl ExecReport {
    /// Render the report as a single JSON line
    pub fn to_json(&self) -> CliResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Host that runs sources through a persistent parser engine
pub struct Runtime {
    engine: Engine,
}

impl Runtime {
    /// Create a new runtime instance
    ///
    /// # Arguments
    /// * `trace` - Whether to echo accepted statements to stderr
    ///
    /// # Example
    /// ```
    /// use ejs_cli::Runtime;
    ///
    /// let runtime = Runtime::new(false);
    /// assert!(!runtime.is_trace_enabled());
    /// ```
    pub fn new(trace: bool) -> Self {
        Self {
            engine: Engine::new().with_trace(trace),
        }
    }

    /// Check a script file
    ///
    /// # Errors
    /// Returns `CliError::Io` if the file cannot be read and
    /// `CliError::Syntax` if the script is rejected
    ///
    /// # Example
    /// ```no_run
    /// use ejs_cli::Runtime;
    ///
    /// let mut runtime = Runtime::new(false);
    /// let summary = runtime.execute_file("example.ejs").unwrap();
    /// println!("{} statements", summary.statements);
    /// ```
    pub fn execute_file(&mut self, path: &str) -> CliResult<ExecSummary> {
        let source = std::fs::read(path)?;
        Ok(self.engine.run_bytes(&source)?)
    }

    /// Check a source string
    ///
    /// # Errors
    /// Returns `CliError::Syntax` if the source is rejected
    ///
    /// # Example
    /// ```
    /// use ejs_cli::Runtime;
    ///
    /// let mut runtime = Runtime::new(false);
    /// let summary = runtime.execute_string("var x = 42;").unwrap();
    /// assert_eq!(summary.statements, 1);
    /// ```
    pub fn execute_string(&mut self, source: &str) -> CliResult<ExecSummary> {
        self.engine.run(source).map_err(CliError::from)
    }

    /// Check a source string and report the outcome without failing
    pub fn check_string(&mut self, source: &str) -> ExecReport {
        self.check_bytes(source.as_bytes())
    }

    /// Check a script file and report the outcome
    ///
    /// # Errors
    /// Returns `CliError::Io` if the file cannot be read
    pub fn check_file(&mut self, path: &str) -> CliResult<ExecReport> {
        let source = std::fs::read(path)?;
        Ok(self.check_bytes(&source))
    }

    fn check_bytes(&mut self, source: &[u8]) -> ExecReport {
        let error = self.engine.run_bytes(source).err();
        ExecReport {
            ok: error.is_none(),
            statements: self.engine.statements(),
            lines: self.engine.line(),
            error,
        }
    }

    /// Start the REPL
    pub fn repl(&mut self) -> CliResult<()> {
        crate::repl::run_repl(self)
    }

    /// The engine behind this runtime
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Whether statement tracing is enabled
    pub fn is_trace_enabled(&self) -> bool {
        self.engine.is_trace_enabled()
    }
}

impl Default for Runtime {
    fn default() -> Self {
        Self::new(false)
    }
}

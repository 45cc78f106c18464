//! Command-line arguments

use clap::Parser;

/// Syntax checker for ejs scripts
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "ejs", version, about = "Syntax checker for ejs scripts")]
pub struct Cli {
    /// Script file to check
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<String>,

    /// Inline source to check
    #[arg(short, long, value_name = "CODE", conflicts_with = "file")]
    pub eval: Option<String>,

    /// Start interactive REPL
    #[arg(short, long)]
    pub repl: bool,

    /// Echo accepted statements and errors to stderr
    #[arg(long)]
    pub trace: bool,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

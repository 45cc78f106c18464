//! ejs Script Checker CLI
//!
//! Entry point for the checker. Parses CLI arguments and delegates to the
//! Runtime for execution.

use clap::Parser as ClapParser;
use ejs_cli::{Cli, CliError, CliResult, ExecReport, Runtime};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut runtime = Runtime::new(cli.trace);

    if cli.json {
        let report = if let Some(file) = &cli.file {
            runtime.check_file(file)
        } else if let Some(code) = &cli.eval {
            Ok(runtime.check_string(code))
        } else {
            eprintln!("Error: --json needs --file or --eval");
            std::process::exit(2);
        };
        match report.and_then(|r| print_report(&r).map(|_| r.ok)) {
            Ok(true) => {}
            Ok(false) => std::process::exit(1),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    } else if let Some(file) = cli.file {
        match runtime.execute_file(&file) {
            Ok(summary) => {
                println!("ok ({} statements, {} lines)", summary.statements, summary.lines);
            }
            Err(CliError::Io(e)) => {
                eprintln!("Error: Could not read file '{}': {}", file, e);
                std::process::exit(1);
            }
            Err(CliError::Syntax(e)) => {
                eprintln!("{}: {}", file, e);
                std::process::exit(1);
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    } else if let Some(code) = cli.eval {
        match runtime.execute_string(&code) {
            Ok(summary) => {
                println!("ok ({} statements, {} lines)", summary.statements, summary.lines);
            }
            Err(e) => {
                eprintln!("{}", e);
                std::process::exit(1);
            }
        }
    } else if cli.repl {
        runtime.repl()?;
    } else {
        // Default: show usage
        println!("ejs script checker v{}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Usage:");
        println!("  ejs --file <FILE>     Check a script file");
        println!("  ejs --eval <CODE>     Check inline code");
        println!("  ejs --repl            Start interactive REPL");
        println!();
        println!("Run 'ejs --help' for more options.");
    }

    Ok(())
}

fn print_report(report: &ExecReport) -> CliResult<()> {
    println!("{}", report.to_json()?);
    Ok(())
}

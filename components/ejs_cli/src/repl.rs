//! REPL (Read-Eval-Print Loop) implementation

use crate::error::{CliError, CliResult};
use crate::runtime::Runtime;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

/// Run the interactive REPL
///
/// Each complete entry is checked on its own; the engine keeps no parse
/// state between entries.
///
/// # Arguments
/// * `runtime` - The Runtime instance to use for checking
///
/// # Returns
/// `Ok(())` when REPL exits normally
pub fn run_repl(runtime: &mut Runtime) -> CliResult<()> {
    let mut editor = DefaultEditor::new()
        .map_err(|e| CliError::Repl(format!("Failed to initialize editor: {}", e)))?;

    println!("ejs script checker v{}", env!("CARGO_PKG_VERSION"));
    println!("Type statements or 'exit' to quit.");
    println!();

    let mut line_buffer = String::new();
    let mut in_multiline = false;

    loop {
        let prompt = if in_multiline { "... " } else { "> " };

        match editor.readline(prompt) {
            Ok(line) => {
                let trimmed = line.trim();

                if !in_multiline && (trimmed == "exit" || trimmed == ".exit" || trimmed == "quit") {
                    println!("Goodbye!");
                    break;
                }

                if !in_multiline && trimmed.starts_with('.') {
                    handle_repl_command(trimmed);
                    continue;
                }

                if in_multiline {
                    line_buffer.push('\n');
                }
                line_buffer.push_str(&line);

                if !is_input_complete(&line_buffer) {
                    in_multiline = true;
                    continue;
                }

                match runtime.execute_string(&line_buffer) {
                    Ok(summary) => {
                        in_multiline = false;
                        let _ = editor.add_history_entry(&line_buffer);
                        println!("ok ({} statements)", summary.statements);
                    }
                    Err(CliError::Syntax(e)) if e.position.offset >= line_buffer.len() => {
                        // Ran out of input mid-statement; keep reading.
                        in_multiline = true;
                        continue;
                    }
                    Err(e) => {
                        in_multiline = false;
                        let _ = editor.add_history_entry(&line_buffer);
                        eprintln!("Error: {}", e);
                    }
                }

                line_buffer.clear();
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl-C
                if in_multiline {
                    println!("^C");
                    line_buffer.clear();
                    in_multiline = false;
                } else {
                    println!("Press Ctrl-D or type 'exit' to quit");
                }
            }
            Err(ReadlineError::Eof) => {
                // Ctrl-D
                println!("\nGoodbye!");
                break;
            }
            Err(err) => {
                return Err(CliError::Repl(format!("Readline error: {}", err)));
            }
        }
    }

    Ok(())
}

const HELP_TEXT: &str = "\
REPL Commands:
  .help     - Show this help message
  .clear    - Clear the screen
  .exit     - Exit the REPL
  exit      - Exit the REPL
  quit      - Exit the REPL";

/// Handle special REPL commands
fn handle_repl_command(command: &str) {
    match command {
        ".help" => println!("{}", HELP_TEXT),
        ".clear" => {
            print!("\x1B[2J\x1B[1;1H");
        }
        _ => {
            println!("Unknown command: {}", command);
            println!("Type .help for available commands");
        }
    }
}

/// Check if the input appears to be complete
///
/// Parentheses outside `//` comments must balance.
fn is_input_complete(input: &str) -> bool {
    let mut paren_count = 0i32;

    for line in input.lines() {
        let code = line.find("//").map_or(line, |idx| &line[..idx]);
        for c in code.chars() {
            match c {
                '(' => paren_count += 1,
                ')' => paren_count -= 1,
                _ => {}
            }
        }
    }

    paren_count <= 0
}

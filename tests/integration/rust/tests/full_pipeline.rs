//! Full Pipeline Integration Tests
//!
//! Tests the complete flow: host Runtime -> Engine -> Parser -> Scanner ->
//! classifier, and the way errors come back out.

use core_types::{SymbolTable, VarValue, Variable, MAX_MESSAGE_LEN};
use ejs_cli::Runtime;
use parser::Engine;

/// Helper function to check a script and return the diagnostic on failure
fn check(source: &str) -> Result<usize, String> {
    let mut engine = Engine::new();
    engine
        .run(source)
        .map(|summary| summary.statements)
        .map_err(|e| e.message)
}

/// Test: a realistic script passes end to end
#[test]
fn test_full_pipeline_script() {
    let source = "\
// compute a weighted score
var base = 10, weight = 3;
var bonus = clamp(base * weight, 0, 100);
score = (base + bonus) / 2 - penalty(1);
";
    assert_eq!(check(source), Ok(3));
}

/// Test: the first error wins, later errors are never reached
#[test]
fn test_full_pipeline_first_error_wins() {
    let err = check("a = 1;\nb = ;\nc = ;\n").unwrap_err();
    assert_eq!(err, "[;\nc = ;\n]: expected digit");
}

/// Test: an engine can be reused for many independent sources
#[test]
fn test_full_pipeline_engine_reuse() {
    let mut engine = Engine::new();
    for round in 0..3 {
        assert!(engine.exec("var x = 1;"), "round {}", round);
        assert!(!engine.exec("var x 1;"), "round {}", round);
        assert_eq!(engine.error_message(), "[1;]: expected '='");
    }
}

/// Test: the symbol table on the engine is host-owned data
#[test]
fn test_full_pipeline_symbols_not_touched_by_parse() {
    let mut engine = Engine::new();
    let id = engine
        .symbols_mut()
        .push_back(Variable::new("limit", VarValue::Integer(5)));

    assert!(engine.exec("var limit = 6;"));
    assert_eq!(
        engine.symbols().get(id).map(|v| v.value.clone()),
        Some(VarValue::Integer(5))
    );
}

/// Test: diagnostics stay within the message cap whatever the input
#[test]
fn test_full_pipeline_diagnostic_cap() {
    let name = "x".repeat(300);
    let mut runtime = Runtime::new(false);
    let report = runtime.check_string(&format!("var {} {};", name, name));

    let error = report.error.expect("source must be rejected");
    assert!(error.message.chars().count() <= MAX_MESSAGE_LEN);
    assert_eq!(error.message, format!("[{}]: expected '='", "x".repeat(10)));
}

/// Test: runtime and bare engine agree
#[test]
fn test_full_pipeline_runtime_matches_engine() {
    let sources = ["x = 1;", "foo(1,2);", "", "var a = (1;", "q = f(1)(2);"];
    let mut runtime = Runtime::new(false);
    for source in sources {
        let mut engine = Engine::new();
        let engine_ok = engine.exec(source);
        let report = runtime.check_string(source);
        assert_eq!(report.ok, engine_ok, "{:?}", source);
        assert_eq!(
            report.error.map(|e| e.message).unwrap_or_default(),
            engine.error_message(),
            "{:?}",
            source
        );
    }
}

/// Test: a standalone symbol table behaves like the one on the engine
#[test]
fn test_full_pipeline_symbol_table_order() {
    let mut table = SymbolTable::new();
    table.push_back(Variable::new("b", VarValue::Integer(2)));
    table.push_front(Variable::new("a", VarValue::Integer(1)));
    let names: Vec<_> = table.iter().map(|v| v.name.as_str()).collect();
    assert_eq!(names, ["a", "b"]);
}

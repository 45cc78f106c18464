//! Unit tests for SymbolTable

use core_types::{SymbolTable, VarValue, Variable};

fn names(table: &SymbolTable) -> Vec<&str> {
    table.iter().map(|v| v.name.as_str()).collect()
}

#[test]
fn test_push_back_keeps_declaration_order() {
    let mut table = SymbolTable::new();
    for name in ["a", "b", "c"] {
        table.push_back(Variable::new(name, VarValue::Integer(0)));
    }
    assert_eq!(names(&table), ["a", "b", "c"]);
    assert_eq!(table.len(), 3);
    assert_eq!(table.iter().len(), 3);
}

#[test]
fn test_push_front_prepends() {
    let mut table = SymbolTable::new();
    table.push_front(Variable::new("b", VarValue::Integer(0)));
    table.push_front(Variable::new("a", VarValue::Integer(0)));
    assert_eq!(names(&table), ["a", "b"]);
}

#[test]
fn test_duplicate_names_are_accepted() {
    let mut table = SymbolTable::new();
    table.push_back(Variable::new("x", VarValue::Integer(1)));
    table.push_back(Variable::new("x", VarValue::Integer(2)));
    let values: Vec<_> = table.iter().map(|v| v.value.clone()).collect();
    assert_eq!(values, [VarValue::Integer(1), VarValue::Integer(2)]);
}

#[test]
fn test_remove_middle() {
    let mut table = SymbolTable::new();
    table.push_back(Variable::new("a", VarValue::Integer(0)));
    let b = table.push_back(Variable::new("b", VarValue::Integer(0)));
    table.push_back(Variable::new("c", VarValue::Integer(0)));

    let removed = table.remove(b).unwrap();
    assert_eq!(removed.name, "b");
    assert_eq!(names(&table), ["a", "c"]);
    assert!(table.remove(b).is_none());
}

#[test]
fn test_get_mut_updates_in_place() {
    let mut table = SymbolTable::new();
    let id = table.push_back(Variable::new("n", VarValue::Integer(1)));
    if let Some(var) = table.get_mut(id) {
        var.value = VarValue::Integer(42);
    }
    assert_eq!(table.get(id).unwrap().value, VarValue::Integer(42));
}

#[test]
fn test_lookup_by_name_walks_the_table() {
    let mut table = SymbolTable::new();
    table.push_back(Variable::new("first", VarValue::Integer(1)));
    table.push_back(Variable::new("second", VarValue::Function));
    let found = (&table).into_iter().find(|v| v.name == "second");
    assert_eq!(found.map(|v| v.value.clone()), Some(VarValue::Function));
}

//! Contract compliance tests for core_types
//!
//! These tests pin down the public shape other components depend on.

use core_types::{SourcePosition, SymbolTable, SyntaxError, VarId, VarType, VarValue, Variable};

#[cfg(test)]
mod contract_tests {
    use super::*;

    /// Contract: one variant per variable type tag
    #[test]
    fn test_var_value_covers_every_type_tag() {
        let tags: Vec<VarType> = [
            VarValue::Object,
            VarValue::Integer(0),
            VarValue::Double(0.0),
            VarValue::String(String::new()),
            VarValue::Function,
        ]
        .iter()
        .map(VarValue::var_type)
        .collect();
        assert_eq!(
            tags,
            [
                VarType::Object,
                VarType::Integer,
                VarType::Double,
                VarType::String,
                VarType::Function
            ]
        );
    }

    /// Contract: SyntaxError exposes message and position fields
    #[test]
    fn test_syntax_error_fields() {
        let err = SyntaxError::new("msg", SourcePosition::start());
        let _: &String = &err.message;
        let _: &SourcePosition = &err.position;
    }

    /// Contract: handles are plain copyable values
    #[test]
    fn test_var_id_is_copy() {
        let mut table = SymbolTable::new();
        let id: VarId = table.push_back(Variable::new("x", VarValue::Object));
        let copy = id;
        assert_eq!(table.get(id), table.get(copy));
    }
}

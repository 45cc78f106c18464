//! Unit tests for Variable, VarType and VarValue

use core_types::{VarType, VarValue, Variable};

#[cfg(test)]
mod variable_tests {
    use super::*;

    #[test]
    fn test_default_value_is_integer_zero() {
        assert_eq!(VarValue::default(), VarValue::Integer(0));
    }

    #[test]
    fn test_string_variable() {
        let var = Variable::new("greeting", VarValue::String("hello".to_string()));
        assert_eq!(var.var_type(), VarType::String);
        assert_eq!(var.value.to_string(), "hello");
    }

    #[test]
    fn test_value_can_change_type() {
        let mut var = Variable::new("x", VarValue::Integer(1));
        var.value = VarValue::Double(2.5);
        assert_eq!(var.var_type(), VarType::Double);
    }

    #[test]
    fn test_type_names() {
        let names: Vec<_> = [
            VarType::Object,
            VarType::Integer,
            VarType::Double,
            VarType::String,
            VarType::Function,
        ]
        .iter()
        .map(|t| t.name())
        .collect();
        assert_eq!(names, ["object", "integer", "double", "string", "function"]);
    }
}

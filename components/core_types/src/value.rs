//! Variable records for the symbol table.
//!
//! A variable pairs an owned name with a tagged value. The grammar does not
//! construct these yet; they exist so an evaluator can be layered on top of
//! the parser without changing the data model.

use std::fmt;

/// Type tag of a variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VarType {
    /// Object reference
    Object,
    /// Signed integer
    Integer,
    /// Double-precision float
    Double,
    /// Owned string
    String,
    /// Function reference
    Function,
}

impl VarType {
    /// Lowercase type name, as used in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            VarType::Object => "object",
            VarType::Integer => "integer",
            VarType::Double => "double",
            VarType::String => "string",
            VarType::Function => "function",
        }
    }
}

impl fmt::Display for VarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Value held by a variable. The variant always matches the [`VarType`]
/// reported by [`VarValue::var_type`].
///
/// Object and function values carry no payload yet; there is no heap or
/// function definition grammar to point into.
///
/// # Examples
///
/// ```
/// use core_types::{VarType, VarValue};
///
/// assert_eq!(VarValue::Integer(42).var_type(), VarType::Integer);
/// assert_eq!(VarValue::String("hi".into()).to_string(), "hi");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum VarValue {
    /// Object value
    Object,
    /// Integer value
    Integer(i64),
    /// Floating point value
    Double(f64),
    /// String value
    String(String),
    /// Function value
    Function,
}

impl VarValue {
    /// The type tag for this value.
    pub fn var_type(&self) -> VarType {
        match self {
            VarValue::Object => VarType::Object,
            VarValue::Integer(_) => VarType::Integer,
            VarValue::Double(_) => VarType::Double,
            VarValue::String(_) => VarType::String,
            VarValue::Function => VarType::Function,
        }
    }
}

impl Default for VarValue {
    fn default() -> Self {
        VarValue::Integer(0)
    }
}

impl fmt::Display for VarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VarValue::Object => write!(f, "[object]"),
            VarValue::Integer(n) => write!(f, "{}", n),
            VarValue::Double(n) => write!(f, "{}", n),
            VarValue::String(s) => write!(f, "{}", s),
            VarValue::Function => write!(f, "[function]"),
        }
    }
}

/// A declared variable.
#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    /// Variable name
    pub name: String,
    /// Current value
    pub value: VarValue,
}

impl Variable {
    /// Create a variable with the given name and value.
    pub fn new(name: impl Into<String>, value: VarValue) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    /// Type tag of the current value.
    pub fn var_type(&self) -> VarType {
        self.value.var_type()
    }
}

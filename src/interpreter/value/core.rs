use std::{collections::HashMap, rc::Rc};

use crate::{
    ast::Block,
    interpreter::{environment::Environment, evaluator::builtin::BuiltinDef,
                  value::hash_key::HashKey},
};

/// Represents a runtime value in the interpreter.
///
/// This enum models every type a Monkey expression can produce. Booleans
/// and nil are plain variants, so each of them has exactly one value shape;
/// comparing them structurally is the canonical-singleton identity the
/// equality fallback relies on. Arrays, hashes, and functions carry their
/// payload behind `Rc`, which makes cloning cheap and gives them pointer
/// identity.
#[derive(Debug, Clone)]
pub enum Value {
    /// The absence of a value, `nil`.
    Nil,
    /// A 64-bit signed integer.
    Integer(i64),
    /// A boolean, `true` or `false`.
    Boolean(bool),
    /// An immutable string.
    Str(String),
    /// An array of values.
    Array(Rc<Vec<Self>>),
    /// A hash from hashable keys to values.
    Hash(Rc<HashMap<HashKey, Self>>),
    /// A user-defined function together with its captured environment.
    Function(Rc<FunctionValue>),
    /// An entry of the builtin function table.
    Builtin(&'static BuiltinDef),
    /// Wrapper produced by `return` statements.
    ///
    /// Blocks stop evaluating when they see one and re-return it still
    /// wrapped; the top-level program and function application unwrap it
    /// exactly once. It never escapes into user-visible storage.
    ReturnValue(Box<Self>),
}

/// A function value: a closure over the environment it was created in.
#[derive(Debug, Clone)]
pub struct FunctionValue {
    /// Parameter names in declaration order.
    pub parameters: Vec<String>,
    /// The shared function body.
    pub body:       Rc<Block>,
    /// The defining environment. Shared, not copied: bindings added to the
    /// defining frame after the closure was created remain visible to it.
    pub env:        Environment,
}

impl Value {
    /// Returns the stable type tag used in error messages.
    ///
    /// # Example
    /// ```
    /// use monkey::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Integer(1).type_name(), "INTEGER");
    /// assert_eq!(Value::Nil.type_name(), "NIL");
    /// ```
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Nil => "NIL",
            Self::Integer(_) => "INTEGER",
            Self::Boolean(_) => "BOOLEAN",
            Self::Str(_) => "STRING",
            Self::Array(_) => "ARRAY",
            Self::Hash(_) => "HASH",
            Self::Function(_) => "FUNCTION_OBJ",
            Self::Builtin(_) => "BUILTIN",
            Self::ReturnValue(_) => "RETURN_VALUE",
        }
    }

    /// Returns `true` for every value except `nil` and `false`.
    ///
    /// Zero and the empty string are truthy.
    #[must_use]
    pub const fn is_truthy(&self) -> bool {
        !matches!(self, Self::Nil | Self::Boolean(false))
    }

    /// Compares two values the way the `==`/`!=` fallback does.
    ///
    /// Booleans and nil compare by their canonical shape; arrays, hashes,
    /// and functions compare by pointer identity, so two separately
    /// constructed arrays are never identical even when they hold equal
    /// elements. Integers and strings never reach this fallback in the
    /// evaluator, but compare structurally here for completeness.
    #[must_use]
    pub fn same_identity(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Nil, Self::Nil) => true,
            (Self::Boolean(a), Self::Boolean(b)) => a == b,
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::Array(a), Self::Array(b)) => Rc::ptr_eq(a, b),
            (Self::Hash(a), Self::Hash(b)) => Rc::ptr_eq(a, b),
            (Self::Function(a), Self::Function(b)) => Rc::ptr_eq(a, b),
            (Self::Builtin(a), Self::Builtin(b)) => std::ptr::eq(*a, *b),
            _ => false,
        }
    }

    /// Returns `true` if the value is [`Nil`](Self::Nil).
    #[must_use]
    pub const fn is_nil(&self) -> bool {
        matches!(self, Self::Nil)
    }
}

/// Structural equality, used by tests and by hash-key construction.
///
/// Functions and builtins are compared by identity since their bodies have
/// no meaningful structural form.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Nil, Self::Nil) => true,
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Boolean(a), Self::Boolean(b)) => a == b,
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::Array(a), Self::Array(b)) => a == b,
            (Self::Hash(a), Self::Hash(b)) => a == b,
            (Self::Function(a), Self::Function(b)) => Rc::ptr_eq(a, b),
            (Self::Builtin(a), Self::Builtin(b)) => std::ptr::eq(*a, *b),
            (Self::ReturnValue(a), Self::ReturnValue(b)) => a == b,
            _ => false,
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<Vec<Self>> for Value {
    fn from(elements: Vec<Self>) -> Self {
        Self::Array(Rc::new(elements))
    }
}

impl std::fmt::Display for Value {
    /// Writes the `inspect` form: what the REPL and the `print` builtin
    /// show.
    ///
    /// Strings are wrapped in double quotes; hash pairs are sorted by key
    /// so the rendering is deterministic.
    ///
    /// # Example
    /// ```
    /// use monkey::interpreter::value::core::Value;
    ///
    /// let array = Value::from(vec![Value::from(1), Value::from("two")]);
    ///
    /// assert_eq!(array.to_string(), "[1, \"two\"]");
    /// assert_eq!(Value::Nil.to_string(), "nil");
    /// ```
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Nil => write!(f, "nil"),
            Self::Integer(value) => write!(f, "{value}"),
            Self::Boolean(value) => write!(f, "{value}"),
            Self::Str(value) => write!(f, "\"{value}\""),
            Self::Array(elements) => {
                write!(f, "[")?;
                for (index, element) in elements.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{element}")?;
                }
                write!(f, "]")
            },
            Self::Hash(pairs) => {
                let mut entries: Vec<_> = pairs.iter().collect();
                entries.sort_by(|(a, _), (b, _)| a.cmp(b));

                write!(f, "{{")?;
                for (index, (key, value)) in entries.into_iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                write!(f, "}}")
            },
            Self::Function(function) => {
                write!(f, "fn(")?;
                for (index, parameter) in function.parameters.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{parameter}")?;
                }
                write!(f, ") {{ {} }}", function.body)
            },
            Self::Builtin(builtin) => write!(f, "<builtin {}>", builtin.name),
            Self::ReturnValue(value) => write!(f, "{value}"),
        }
    }
}

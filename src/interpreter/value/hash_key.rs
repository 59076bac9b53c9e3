use crate::{error::RuntimeError, interpreter::value::core::Value};

/// A hashable summary of a value.
///
/// Only integers, booleans, and strings may be used as hash keys; the
/// variant tag plus the payload is the `(type, fingerprint)` pair, and the
/// derived equality matches the structural equality of the source values.
/// The derived ordering exists so hash contents can be rendered
/// deterministically.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HashKey {
    /// A boolean key.
    Boolean(bool),
    /// An integer key.
    Integer(i64),
    /// A string key.
    Str(String),
}

impl TryFrom<&Value> for HashKey {
    type Error = RuntimeError;

    /// Summarizes a value into its hash key.
    ///
    /// # Errors
    /// Any kind other than integer, boolean, or string is rejected with
    /// `unusable as hash key: <type>`.
    ///
    /// # Example
    /// ```
    /// use monkey::interpreter::value::{core::Value, hash_key::HashKey};
    ///
    /// assert_eq!(HashKey::try_from(&Value::from(2)), Ok(HashKey::Integer(2)));
    /// assert!(HashKey::try_from(&Value::Nil).is_err());
    /// ```
    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Integer(n) => Ok(Self::Integer(*n)),
            Value::Boolean(b) => Ok(Self::Boolean(*b)),
            Value::Str(s) => Ok(Self::Str(s.clone())),
            other => Err(RuntimeError::UnusableHashKey { key: other.type_name() }),
        }
    }
}

impl std::fmt::Display for HashKey {
    /// Renders the key the way the source value inspects, so hash output
    /// reads like the literal that built it.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Boolean(value) => write!(f, "{value}"),
            Self::Integer(value) => write!(f, "{value}"),
            Self::Str(value) => write!(f, "\"{value}\""),
        }
    }
}

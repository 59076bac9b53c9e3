use crate::ast::{InfixOperator, PrefixOperator};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can be raised during evaluation.
///
/// A runtime error aborts the evaluation that produced it: every composite
/// form re-returns the first error of its sub-evaluations unchanged, and
/// there is no construct in the language that can catch one. The `Display`
/// form of each variant is the canonical diagnostic text; the REPL prints
/// it behind an `ERROR: ` prefix.
pub enum RuntimeError {
    /// A binary operator was applied to operands of different types.
    TypeMismatch {
        /// Type tag of the left operand.
        left:     &'static str,
        /// The operator.
        operator: InfixOperator,
        /// Type tag of the right operand.
        right:    &'static str,
    },
    /// A prefix operator was applied to an operand it does not support.
    UnknownPrefixOperator {
        /// The operator.
        operator: PrefixOperator,
        /// Type tag of the operand.
        right:    &'static str,
    },
    /// A binary operator was applied to same-typed operands it does not
    /// support.
    UnknownInfixOperator {
        /// Type tag of the left operand.
        left:     &'static str,
        /// The operator.
        operator: InfixOperator,
        /// Type tag of the right operand.
        right:    &'static str,
    },
    /// A name resolved neither in the environment chain nor in the builtin
    /// table.
    IdentifierNotFound {
        /// The unresolved name.
        name: String,
    },
    /// The index operator was applied to a value that is not indexable.
    IndexNotSupported {
        /// Type tag of the value being indexed.
        target: &'static str,
    },
    /// A value that is not hashable was used as a hash key.
    UnusableHashKey {
        /// Type tag of the offending key.
        key: &'static str,
    },
    /// A call was made on a value that is neither a function nor a builtin.
    NotAFunction {
        /// Type tag of the called value.
        callee: &'static str,
    },
    /// A function was called with the wrong number of arguments.
    ArgumentMismatch {
        /// How many arguments were supplied.
        got:  usize,
        /// How many parameters the function declares.
        want: usize,
    },
    /// A builtin was called with the wrong number of arguments.
    WrongNumberOfArguments {
        /// How many arguments the builtin accepts.
        want: usize,
        /// How many arguments were supplied.
        got:  usize,
    },
    /// A builtin was given an argument of a type it does not support.
    UnsupportedArgument {
        /// The builtin's name.
        builtin:  &'static str,
        /// Type tag of the offending argument.
        argument: &'static str,
    },
    /// Integer division or remainder with a zero divisor.
    DivisionByZero,
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TypeMismatch { left,
                                 operator,
                                 right, } => {
                write!(f, "type mismatch: {left} {operator} {right}")
            },
            Self::UnknownPrefixOperator { operator, right } => {
                write!(f, "unknown operator: {operator}{right}")
            },
            Self::UnknownInfixOperator { left,
                                         operator,
                                         right, } => {
                write!(f, "unknown operator: {left} {operator} {right}")
            },
            Self::IdentifierNotFound { name } => write!(f, "identifier not found: {name}"),
            Self::IndexNotSupported { target } => {
                write!(f, "index operator not supported: {target}")
            },
            Self::UnusableHashKey { key } => write!(f, "unusable as hash key: {key}"),
            Self::NotAFunction { callee } => write!(f, "not a function: {callee}"),
            Self::ArgumentMismatch { got, want } => {
                write!(f, "argument mismatch: got {got}, want {want}")
            },
            Self::WrongNumberOfArguments { want, got } => {
                write!(f, "wrong number of arguments. want {want}, got {got}")
            },
            Self::UnsupportedArgument { builtin, argument } => {
                write!(f, "argument to '{builtin}' not supported, got {argument}")
            },
            Self::DivisionByZero => write!(f, "division by zero"),
        }
    }
}

impl std::error::Error for RuntimeError {}

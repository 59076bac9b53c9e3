use std::fmt;

/// Parsing errors.
///
/// Defines all error types that can occur while turning a token stream into
/// an abstract syntax tree. Parse errors are accumulated on the parser and
/// must be inspected before a program is evaluated.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation, such as
/// type mismatches, unknown operators, unresolved identifiers, and division
/// by zero.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Failure of a full lex-parse-evaluate run.
///
/// This is the error type of the [`interpret`](crate::interpret) entry
/// point. Parse errors arrive as the parser's full accumulated list;
/// runtime errors are single values, since evaluation stops at the first
/// one.
#[derive(Debug, Clone, PartialEq)]
pub enum InterpretError {
    /// The parser rejected the source. All collected messages are included.
    Parse(Vec<ParseError>),
    /// Evaluation produced a runtime error.
    Runtime(RuntimeError),
}

impl fmt::Display for InterpretError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(errors) => {
                for (index, error) in errors.iter().enumerate() {
                    if index > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{error}")?;
                }
                Ok(())
            },
            Self::Runtime(error) => write!(f, "{error}"),
        }
    }
}

impl std::error::Error for InterpretError {}

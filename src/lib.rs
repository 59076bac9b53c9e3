//! # monkey
//!
//! monkey is a tree-walking interpreter for the Monkey programming
//! language: a small dynamically-typed, expression-oriented language with
//! first-class functions and lexical closures. A source string is lexed
//! into tokens, parsed into a syntax tree, and evaluated against a chained
//! lexical environment to produce a value or a runtime error.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::InterpretError,
    interpreter::{
        environment::Environment,
        evaluator::core::eval_program,
        lexer::tokenize,
        parser::core::Parser,
        value::core::Value,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the statement and expression types that represent
/// the syntactic structure of source code as a tree. The AST is built by
/// the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines statement and expression types for all language constructs.
/// - Defines the operator vocabulary shared by parser and evaluator.
/// - Pretty-prints every node back to parseable source.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while lexing, parsing,
/// or evaluating code. It standardizes error reporting: the `Display` form
/// of every variant is the canonical diagnostic text that tests and the
/// REPL rely on.
///
/// # Responsibilities
/// - Defines error enums for parse-time and run-time failure modes.
/// - Carries the offending names, operators, and type tags.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representation, and scoping to provide a complete runtime for Monkey
/// source. It exposes the building blocks behind [`interpret`].
///
/// # Responsibilities
/// - Coordinates the core components: lexer, parser, and evaluator.
/// - Declares the runtime value universe and the environment chain.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// The interactive read-eval-print loop.
///
/// This module implements line-at-a-time interaction with a persistent
/// environment, plus the single-shot runner used for script files.
pub mod repl;

/// Evaluates a source string under the given environment.
///
/// This is the embedding entry point: it runs the full pipeline and
/// returns the final value. Parse errors are reported as the parser's
/// complete accumulated list; evaluation is not attempted when any exist.
///
/// # Errors
/// [`InterpretError::Parse`] when the source does not parse,
/// [`InterpretError::Runtime`] when evaluation raises.
///
/// # Examples
/// ```
/// use monkey::{interpret, interpreter::{environment::Environment, value::core::Value}};
///
/// let env = Environment::new();
///
/// let result = interpret("let double = fn(x) { x * 2 }; double(21);", &env);
/// assert_eq!(result, Ok(Value::from(42)));
///
/// // The environment persists between runs.
/// let again = interpret("double(5);", &env);
/// assert_eq!(again, Ok(Value::from(10)));
/// ```
pub fn interpret(source: &str, env: &Environment) -> Result<Value, InterpretError> {
    let mut parser = Parser::new(tokenize(source));
    let program = parser.parse_program();

    if !parser.errors().is_empty() {
        return Err(InterpretError::Parse(parser.errors().to_vec()));
    }

    eval_program(&program, env).map_err(InterpretError::Runtime)
}

/// Core evaluation logic.
///
/// Contains the recursive dispatch over the syntax tree, the program,
/// block, and statement evaluators, and the propagation rules for errors
/// and `return` values.
pub mod core;

/// Prefix operator evaluation.
///
/// Handles the two unary operators, logical `!` and arithmetic `-`.
pub mod unary;

/// Infix operator evaluation.
///
/// Implements the binary operators: integer arithmetic and comparison,
/// string concatenation, the short-circuiting logical operators, and the
/// equality fallback.
pub mod binary;

/// Collection evaluation.
///
/// Evaluates array and hash literals and the index operator.
pub mod collection;

/// Function application.
///
/// Evaluates call expressions and applies closures and builtins to their
/// arguments.
pub mod function;

/// Builtin functions.
///
/// Declares the fixed builtin table and the implementations behind it.
pub mod builtin;

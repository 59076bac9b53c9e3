/// Turns source text into tokens.
///
/// This module declares the token type and the `tokenize` entry point. The
/// lexer is infallible: unrecognized input surfaces as `Illegal` tokens for
/// the parser to reject.
///
/// # Responsibilities
/// - Defines the token alphabet: literals, operators, delimiters, and
///   keywords.
/// - Skips whitespace and matches two-character operators greedily.
/// - Trims leading zeros from integer lexemes and strips string quotes.
pub mod lexer;

/// Turns tokens into a syntax tree.
///
/// This module implements Pratt precedence climbing over the token stream.
/// The parser accumulates human-readable errors instead of failing fast,
/// so a single run reports every statement-level problem it can find.
///
/// # Responsibilities
/// - Maintains the cursor with one-token lookahead.
/// - Defines the precedence ladder and the prefix/infix dispatch.
/// - Recovers at statement boundaries after an error.
pub mod parser;

/// Executes a syntax tree.
///
/// This module walks the tree recursively, producing a value or the first
/// runtime error. `return` travels as a wrapped value that blocks pass
/// through and function frames unwrap.
///
/// # Responsibilities
/// - Dispatches on every statement and expression form.
/// - Implements operator semantics, collections, closures, and calls.
/// - Hosts the builtin function table.
pub mod evaluator;

/// Name resolution scopes.
///
/// This module declares the environment: chained frames shared between the
/// evaluator and the closures it creates.
pub mod environment;

/// Runtime values.
///
/// This module declares the value universe of the language and the
/// hashable key summary used by hash values.
pub mod value;

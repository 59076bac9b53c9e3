/// Core parsing machinery.
///
/// Declares the parser type with its token cursor, the operator precedence
/// ladder, and the Pratt climbing loop shared by every expression
/// production.
pub mod core;

/// Statement productions.
///
/// Parses `let` statements, `return` statements, expression statements,
/// and brace-delimited blocks.
pub mod statement;

/// Prefix parselets.
///
/// Parses everything that can begin an expression: literals, identifiers,
/// prefix operators, grouped expressions, conditionals, function literals,
/// and array and hash literals.
pub mod prefix;

/// Infix parselets.
///
/// Parses binary operator applications and the two postfix forms, calls
/// and index accesses.
pub mod infix;

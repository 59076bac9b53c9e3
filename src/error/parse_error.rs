#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while parsing a token stream.
///
/// The parser is best-effort: a failed production records one of these and
/// parsing resumes at the next statement boundary, so a single run can
/// collect several errors. The `Display` form of each variant is the
/// canonical diagnostic text.
pub enum ParseError {
    /// A specific token was required next, but something else was found.
    UnexpectedToken {
        /// The diagnostic tag of the token that was required.
        expected: &'static str,
        /// The diagnostic tag of the token actually found.
        found:    String,
    },
    /// A token that cannot begin an expression appeared in prefix position.
    NoPrefixParseFn {
        /// The diagnostic tag of the offending token.
        found: String,
    },
    /// An integer literal does not fit into an `i64`.
    IntegerOutOfRange {
        /// The offending lexeme.
        literal: String,
    },
    /// A grouped expression was not closed with `)`.
    MissingClosingParen,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { expected, found } => {
                write!(f, "expected next token to be {expected}, got {found}")
            },
            Self::NoPrefixParseFn { found } => {
                write!(f, "no prefix parse function found for {found}")
            },
            Self::IntegerOutOfRange { literal } => {
                write!(f, "couldn't parse \"{literal}\" as integer")
            },
            Self::MissingClosingParen => write!(f, "expected closing parenthesis"),
        }
    }
}

impl std::error::Error for ParseError {}

use logos::Logos;

/// Represents a lexical token in the source input.
///
/// A token is the minimal meaningful unit of text produced by the lexer.
/// Literal-carrying variants store their lexeme: identifiers and strings
/// keep the matched text (strings without their quotes), and integers keep
/// the digit run with leading zeros trimmed, so that conversion to `i64`,
/// and with it overflow reporting, stays in the parser.
#[derive(Logos, Debug, Clone, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n]+")]
pub enum Token {
    /// `fn`
    #[token("fn")]
    Function,
    /// `let`
    #[token("let")]
    Let,
    /// `true`
    #[token("true")]
    True,
    /// `false`
    #[token("false")]
    False,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `return`
    #[token("return")]
    Return,

    /// Identifier tokens: names such as `x` or `counter`. Letters and
    /// underscores only; digits end an identifier.
    #[regex(r"[a-zA-Z_]+", |lex| lex.slice().to_owned())]
    Identifier(String),
    /// Integer literal tokens, such as `42`. The stored lexeme has leading
    /// zeros trimmed (`005` becomes `5`).
    #[regex(r"[0-9]+", trim_leading_zeros)]
    Integer(String),
    /// String literal tokens. No escape sequences are recognized.
    #[regex(r#""[^"]*""#, strip_quotes)]
    Str(String),

    /// `=`
    #[token("=")]
    Assign,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `!`
    #[token("!")]
    Bang,
    /// `==`
    #[token("==")]
    Equal,
    /// `!=`
    #[token("!=")]
    NotEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `&&`
    #[token("&&")]
    And,
    /// `||`
    #[token("||")]
    Or,

    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `:`
    #[token(":")]
    Colon,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,

    /// Input the lexer does not recognize, carrying the offending slice.
    /// The lexer itself never fails; the parser rejects these.
    Illegal(String),
    /// End of input. Produced by the parser's cursor once the token vector
    /// is exhausted, never by the lexer itself.
    Eof,
}

/// Converts a source string into its token sequence.
///
/// This is infallible by design: bytes that match no rule surface as
/// [`Token::Illegal`] and are left for the parser to reject. The sequence
/// does not include a trailing [`Token::Eof`]; the parser supplies one.
///
/// # Parameters
/// - `source`: The full source text.
///
/// # Returns
/// All tokens in source order.
///
/// # Example
/// ```
/// use monkey::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("let five = 005;");
///
/// assert_eq!(tokens,
///            vec![Token::Let,
///                 Token::Identifier("five".to_owned()),
///                 Token::Assign,
///                 Token::Integer("5".to_owned()),
///                 Token::Semicolon]);
/// ```
#[must_use]
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        match token {
            Ok(token) => tokens.push(token),
            Err(()) => tokens.push(Token::Illegal(lexer.slice().to_owned())),
        }
    }

    tokens
}

impl Token {
    /// Returns `true` for tokens that may start a statement boundary, used
    /// by the parser's error recovery.
    #[must_use]
    pub const fn starts_statement(&self) -> bool {
        matches!(self, Self::Let | Self::Return)
    }
}

impl std::fmt::Display for Token {
    /// Writes the diagnostic tag used in parser error messages: literal
    /// kinds as `IDENT`/`INT`/`STRING`, keywords as their uppercase names,
    /// and operators and delimiters as their lexeme.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tag = match self {
            Self::Function => "FUNCTION",
            Self::Let => "LET",
            Self::True => "TRUE",
            Self::False => "FALSE",
            Self::If => "IF",
            Self::Else => "ELSE",
            Self::Return => "RETURN",
            Self::Identifier(_) => "IDENT",
            Self::Integer(_) => "INT",
            Self::Str(_) => "STRING",
            Self::Assign => "=",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Percent => "%",
            Self::Bang => "!",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::Less => "<",
            Self::Greater => ">",
            Self::And => "&&",
            Self::Or => "||",
            Self::Comma => ",",
            Self::Semicolon => ";",
            Self::Colon => ":",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::LBracket => "[",
            Self::RBracket => "]",
            Self::Illegal(_) => "ILLEGAL",
            Self::Eof => "EOF",
        };
        write!(f, "{tag}")
    }
}

/// Returns the matched digit run with leading zeros removed.
///
/// An all-zero run collapses to a single `0` so the lexeme always remains a
/// valid integer literal.
fn trim_leading_zeros(lex: &logos::Lexer<Token>) -> String {
    let trimmed = lex.slice().trim_start_matches('0');
    if trimmed.is_empty() {
        "0".to_owned()
    } else {
        trimmed.to_owned()
    }
}

/// Returns the matched string literal without its surrounding quotes.
fn strip_quotes(lex: &logos::Lexer<Token>) -> String {
    let slice = lex.slice();
    slice[1..slice.len() - 1].to_owned()
}

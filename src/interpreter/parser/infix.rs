use crate::{
    ast::{Expression, InfixOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser, Precedence, precedence_of},
    },
};

impl Parser {
    /// Extends `left` with the infix form waiting at the cursor.
    ///
    /// The match is the infix dispatch table: `(` and `[` are the postfix
    /// parselets for calls and index accesses, every operator token maps to
    /// a binary parselet. The climbing loop only calls this for tokens with
    /// an infix binding strength.
    pub(crate) fn parse_infix(&mut self, left: Expression) -> ParseResult<Expression> {
        let token = self.advance();
        match token {
            Token::LParen => self.parse_call_expression(left),
            Token::LBracket => self.parse_index_expression(left),
            other => self.parse_infix_operator(left, &other),
        }
    }

    /// Parses the right-hand side of a binary operator.
    ///
    /// The right operand is parsed at the operator's own precedence, which
    /// is what makes every binary operator left-associative.
    fn parse_infix_operator(&mut self,
                            left: Expression,
                            token: &Token)
                            -> ParseResult<Expression> {
        let Some(operator) = infix_operator(token) else {
            return Err(ParseError::UnexpectedToken { expected: "an infix operator",
                                                     found:    token.to_string(), });
        };

        let right = self.parse_expression(precedence_of(token))?;

        Ok(Expression::Infix { left: Box::new(left),
                               operator,
                               right: Box::new(right) })
    }

    /// Parses the argument list of `callee(a, b, ...)`. The `(` is already
    /// consumed.
    fn parse_call_expression(&mut self, callee: Expression) -> ParseResult<Expression> {
        let arguments = self.parse_expression_list(|token| matches!(token, Token::RParen), ")")?;

        Ok(Expression::Call { callee: Box::new(callee),
                              arguments })
    }

    /// Parses `target[<expr>]`. The `[` is already consumed.
    fn parse_index_expression(&mut self, target: Expression) -> ParseResult<Expression> {
        let index = self.parse_expression(Precedence::Lowest)?;
        self.expect(|token| matches!(token, Token::RBracket), "]")?;

        Ok(Expression::Index { target: Box::new(target),
                               index:  Box::new(index), })
    }

    /// Parses a comma-separated expression list up to a closing delimiter.
    ///
    /// The empty list is legal; a trailing comma is not (the element parse
    /// after the comma fails in prefix position).
    pub(crate) fn parse_expression_list(&mut self,
                                        is_end: impl Fn(&Token) -> bool,
                                        end_tag: &'static str)
                                        -> ParseResult<Vec<Expression>> {
        let mut list = Vec::new();

        if self.check(&is_end) {
            self.advance();
            return Ok(list);
        }

        loop {
            list.push(self.parse_expression(Precedence::Lowest)?);

            if self.check(|token| matches!(token, Token::Comma)) {
                self.advance();
                continue;
            }

            self.expect(&is_end, end_tag)?;
            break;
        }

        Ok(list)
    }
}

/// Maps a token to its binary operator, or `None` when the token is not
/// one.
///
/// # Example
/// ```
/// use monkey::{
///     ast::InfixOperator,
///     interpreter::{lexer::Token, parser::infix::infix_operator},
/// };
///
/// assert_eq!(infix_operator(&Token::Plus), Some(InfixOperator::Add));
/// assert_eq!(infix_operator(&Token::Comma), None);
/// ```
#[must_use]
pub const fn infix_operator(token: &Token) -> Option<InfixOperator> {
    match token {
        Token::Plus => Some(InfixOperator::Add),
        Token::Minus => Some(InfixOperator::Sub),
        Token::Star => Some(InfixOperator::Mul),
        Token::Slash => Some(InfixOperator::Div),
        Token::Percent => Some(InfixOperator::Mod),
        Token::Less => Some(InfixOperator::Less),
        Token::Greater => Some(InfixOperator::Greater),
        Token::Equal => Some(InfixOperator::Equal),
        Token::NotEqual => Some(InfixOperator::NotEqual),
        Token::And => Some(InfixOperator::And),
        Token::Or => Some(InfixOperator::Or),
        _ => None,
    }
}

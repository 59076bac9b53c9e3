use std::rc::Rc;

use crate::{
    ast::{Expression, PrefixOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser, Precedence},
    },
};

impl Parser {
    /// Parses the prefix position of an expression.
    ///
    /// The match below is the prefix dispatch table: each arm is the
    /// parselet for one token kind that may begin an expression. Any other
    /// token is rejected with a `no prefix parse function` error.
    pub(crate) fn parse_prefix(&mut self) -> ParseResult<Expression> {
        let token = self.advance();
        match token {
            Token::Identifier(name) => Ok(Expression::Identifier(name)),
            Token::Integer(literal) => parse_integer_literal(&literal),
            Token::True => Ok(Expression::Boolean(true)),
            Token::False => Ok(Expression::Boolean(false)),
            Token::Str(value) => Ok(Expression::Str(value)),
            Token::Bang => self.parse_prefix_operator(PrefixOperator::Not),
            Token::Minus => self.parse_prefix_operator(PrefixOperator::Negate),
            Token::LParen => self.parse_grouped_expression(),
            Token::LBracket => self.parse_array_literal(),
            Token::LBrace => self.parse_hash_literal(),
            Token::If => self.parse_if_expression(),
            Token::Function => self.parse_function_literal(),
            other => Err(ParseError::NoPrefixParseFn { found: other.to_string() }),
        }
    }

    /// Parses the operand of `!` or `-` at prefix strength.
    fn parse_prefix_operator(&mut self, operator: PrefixOperator) -> ParseResult<Expression> {
        let right = self.parse_expression(Precedence::Prefix)?;
        Ok(Expression::Prefix { operator,
                                right: Box::new(right) })
    }

    /// Parses `( <expr> )`. Grouping produces no node of its own.
    fn parse_grouped_expression(&mut self) -> ParseResult<Expression> {
        let expression = self.parse_expression(Precedence::Lowest)?;

        if self.check(|token| matches!(token, Token::RParen)) {
            self.advance();
            Ok(expression)
        } else {
            Err(ParseError::MissingClosingParen)
        }
    }

    /// Parses `[a, b, ...]`.
    fn parse_array_literal(&mut self) -> ParseResult<Expression> {
        let elements = self.parse_expression_list(|token| matches!(token, Token::RBracket), "]")?;
        Ok(Expression::Array(elements))
    }

    /// Parses `{k1: v1, k2: v2, ...}`.
    ///
    /// Keys and values are arbitrary expressions; pairs keep their source
    /// order. The empty hash is legal; a trailing comma is not.
    fn parse_hash_literal(&mut self) -> ParseResult<Expression> {
        let mut pairs = Vec::new();

        if self.check(|token| matches!(token, Token::RBrace)) {
            self.advance();
            return Ok(Expression::Hash(pairs));
        }

        loop {
            let key = self.parse_expression(Precedence::Lowest)?;
            self.expect(|token| matches!(token, Token::Colon), ":")?;
            let value = self.parse_expression(Precedence::Lowest)?;
            pairs.push((key, value));

            if self.check(|token| matches!(token, Token::Comma)) {
                self.advance();
                continue;
            }

            self.expect(|token| matches!(token, Token::RBrace), "}")?;
            break;
        }

        Ok(Expression::Hash(pairs))
    }

    /// Parses `if (<cond>) { ... } [else { ... }]`.
    ///
    /// The parentheses around the condition are mandatory; the `else`
    /// branch is optional.
    fn parse_if_expression(&mut self) -> ParseResult<Expression> {
        self.expect(|token| matches!(token, Token::LParen), "(")?;
        let condition = self.parse_expression(Precedence::Lowest)?;
        self.expect(|token| matches!(token, Token::RParen), ")")?;

        self.expect(|token| matches!(token, Token::LBrace), "{")?;
        let consequence = self.parse_block()?;

        let alternative = if self.check(|token| matches!(token, Token::Else)) {
            self.advance();
            self.expect(|token| matches!(token, Token::LBrace), "{")?;
            Some(self.parse_block()?)
        } else {
            None
        };

        Ok(Expression::If { condition: Box::new(condition),
                            consequence,
                            alternative })
    }

    /// Parses `fn (p1, p2, ...) { ... }`.
    ///
    /// Parameters are identifiers; listing stops at the first token that
    /// is not one, after which `)` is required. Commas between parameters
    /// are consumed when present.
    fn parse_function_literal(&mut self) -> ParseResult<Expression> {
        self.expect(|token| matches!(token, Token::LParen), "(")?;

        let mut parameters = Vec::new();
        while let Token::Identifier(name) = self.current() {
            parameters.push(name.clone());
            self.advance();

            if self.check(|token| matches!(token, Token::Comma)) {
                self.advance();
            }
        }

        self.expect(|token| matches!(token, Token::RParen), ")")?;
        self.expect(|token| matches!(token, Token::LBrace), "{")?;
        let body = self.parse_block()?;

        Ok(Expression::Function { parameters,
                                  body: Rc::new(body) })
    }
}

/// Converts an integer lexeme into its value.
///
/// The lexer already trimmed leading zeros, so the only failure left is a
/// literal outside the `i64` range.
fn parse_integer_literal(literal: &str) -> ParseResult<Expression> {
    literal.parse()
           .map(Expression::Integer)
           .map_err(|_| ParseError::IntegerOutOfRange { literal: literal.to_owned() })
}

use crate::{
    ast::{Block, Statement},
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser, Precedence},
    },
};

impl Parser {
    /// Parses a single statement.
    ///
    /// Dispatch is on the current token: `let` and `return` have dedicated
    /// productions, anything else is an expression statement. Every form
    /// accepts an optional trailing `;`.
    pub(crate) fn parse_statement(&mut self) -> ParseResult<Statement> {
        match self.current() {
            Token::Let => self.parse_let_statement(),
            Token::Return => self.parse_return_statement(),
            _ => self.parse_expression_statement(),
        }
    }

    /// Parses `let IDENT = <expr> [;]`.
    fn parse_let_statement(&mut self) -> ParseResult<Statement> {
        self.advance();

        let name = match self.expect(|token| matches!(token, Token::Identifier(_)), "IDENT")? {
            Token::Identifier(name) => name,
            _ => unreachable!("expect() only passes identifiers through"),
        };

        self.expect(|token| matches!(token, Token::Assign), "=")?;

        let value = self.parse_expression(Precedence::Lowest)?;
        self.consume_semicolon();

        Ok(Statement::Let { name, value })
    }

    /// Parses `return [<expr>] [;]`.
    ///
    /// A bare return (next token `;`, `}` or end of input) carries no
    /// expression and evaluates to `nil`.
    fn parse_return_statement(&mut self) -> ParseResult<Statement> {
        self.advance();

        if self.check(|token| matches!(token, Token::Semicolon)) {
            self.advance();
            return Ok(Statement::Return(None));
        }

        if self.check(|token| matches!(token, Token::RBrace)) || self.at_end() {
            return Ok(Statement::Return(None));
        }

        let value = self.parse_expression(Precedence::Lowest)?;
        self.consume_semicolon();

        Ok(Statement::Return(Some(value)))
    }

    /// Parses an expression in statement position.
    fn parse_expression_statement(&mut self) -> ParseResult<Statement> {
        let expression = self.parse_expression(Precedence::Lowest)?;
        self.consume_semicolon();

        Ok(Statement::Expression(expression))
    }

    /// Parses the statements of a block whose `{` has already been
    /// consumed.
    ///
    /// The block ends at `}` or at end of input; the closing brace is
    /// consumed when present.
    pub(crate) fn parse_block(&mut self) -> ParseResult<Block> {
        let mut statements = Vec::new();

        while !self.check(|token| matches!(token, Token::RBrace)) && !self.at_end() {
            statements.push(self.parse_statement()?);
        }

        if self.check(|token| matches!(token, Token::RBrace)) {
            self.advance();
        }

        Ok(Block { statements })
    }
}

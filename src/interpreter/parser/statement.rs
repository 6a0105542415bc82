use crate::{
    ast::{BlockStatement, Statement},
    interpreter::{
        lexer::TokenKind,
        parser::core::{Parser, Precedence},
    },
};

impl Parser<'_> {
    /// Parses a single statement.
    ///
    /// A statement is either a `let` binding, a `return`, or an expression
    /// evaluated for its value. Returns `None` when the statement could not
    /// be parsed; the error has already been recorded in that case.
    pub(in crate::interpreter::parser) fn parse_statement(&mut self) -> Option<Statement> {
        match self.current_token().kind {
            TokenKind::Let => self.parse_let_statement(),
            TokenKind::Return => self.parse_return_statement(),
            _ => self.parse_expression_statement(),
        }
    }

    /// Parses `let <name> = <expression>` with an optional trailing `;`.
    fn parse_let_statement(&mut self) -> Option<Statement> {
        if !self.expect_peek(TokenKind::Identifier) {
            return None;
        }

        let name = self.current_token().literal.clone();

        if !self.expect_peek(TokenKind::Assign) {
            return None;
        }

        self.next_token();
        let value = self.parse_expression(Precedence::Lowest)?;

        if self.peek_is(TokenKind::Semicolon) {
            self.next_token();
        }

        Some(Statement::Let { name, value })
    }

    /// Parses `return <expression>` with an optional trailing `;`.
    fn parse_return_statement(&mut self) -> Option<Statement> {
        self.next_token();

        let value = self.parse_expression(Precedence::Lowest)?;

        if self.peek_is(TokenKind::Semicolon) {
            self.next_token();
        }

        Some(Statement::Return { value })
    }

    /// Parses an expression in statement position.
    fn parse_expression_statement(&mut self) -> Option<Statement> {
        let expr = self.parse_expression(Precedence::Lowest)?;

        if self.peek_is(TokenKind::Semicolon) {
            self.next_token();
        }

        Some(Statement::Expression { expr })
    }

    /// Parses a brace-delimited block.
    ///
    /// Collects statements until the closing `}` or the end of input. A
    /// missing closing brace is not an error of its own; whatever was
    /// collected is returned.
    pub(in crate::interpreter::parser) fn parse_block_statement(&mut self) -> BlockStatement {
        let mut statements = Vec::new();

        self.next_token();

        while !self.current_is(TokenKind::RBrace) && !self.current_is(TokenKind::Eof) {
            if let Some(statement) = self.parse_statement() {
                statements.push(statement);
            }
            self.next_token();
        }

        BlockStatement { statements }
    }
}

use crate::{
    ast::{Expression, PrefixOperator},
    interpreter::{
        lexer::TokenKind,
        parser::core::{Parser, Precedence},
    },
};

impl Parser<'_> {
    /// Parses an integer literal into an `i64`.
    ///
    /// A literal outside the `i64` range records an error and drops the
    /// expression.
    pub(in crate::interpreter::parser) fn parse_integer_literal(&mut self) -> Option<Expression> {
        let literal = &self.current_token().literal;

        match literal.parse::<i64>() {
            Ok(value) => Some(Expression::IntegerLiteral(value)),
            Err(_) => {
                let message = format!("could not parse {literal:?} as integer");
                self.record_error(message);
                None
            },
        }
    }

    /// Parses a prefix operator application: `!<operand>` or `-<operand>`.
    ///
    /// The operand is parsed at `Prefix` precedence, so `-a * b` parses as
    /// `((-a) * b)`.
    pub(in crate::interpreter::parser) fn parse_prefix_expression(&mut self) -> Option<Expression> {
        let operator = match self.current_token().kind {
            TokenKind::Bang => PrefixOperator::Bang,
            _ => PrefixOperator::Minus,
        };

        self.next_token();
        let right = self.parse_expression(Precedence::Prefix)?;

        Some(Expression::Prefix { operator,
                                  right: Box::new(right) })
    }

    /// Parses a parenthesized expression.
    ///
    /// The parentheses only reset precedence; they leave no node of their
    /// own in the tree.
    pub(in crate::interpreter::parser) fn parse_grouped_expression(&mut self) -> Option<Expression> {
        self.next_token();

        let expression = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }

        Some(expression)
    }

    /// Parses `if (<condition>) { ... }` with an optional `else { ... }`.
    pub(in crate::interpreter::parser) fn parse_if_expression(&mut self) -> Option<Expression> {
        if !self.expect_peek(TokenKind::LParen) {
            return None;
        }

        self.next_token();
        let condition = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }
        if !self.expect_peek(TokenKind::LBrace) {
            return None;
        }

        let consequence = self.parse_block_statement();

        let alternative = if self.peek_is(TokenKind::Else) {
            self.next_token();

            if !self.expect_peek(TokenKind::LBrace) {
                return None;
            }

            Some(self.parse_block_statement())
        } else {
            None
        };

        Some(Expression::If { condition: Box::new(condition),
                              consequence,
                              alternative })
    }

    /// Parses a function literal: `fn(<parameters>) { ... }`.
    pub(in crate::interpreter::parser) fn parse_function_literal(&mut self) -> Option<Expression> {
        if !self.expect_peek(TokenKind::LParen) {
            return None;
        }

        let parameters = self.parse_function_parameters()?;

        if !self.expect_peek(TokenKind::LBrace) {
            return None;
        }

        let body = self.parse_block_statement();

        Some(Expression::FunctionLiteral { parameters, body })
    }

    /// Parses the comma-separated parameter list of a function literal,
    /// including the closing `)`.
    fn parse_function_parameters(&mut self) -> Option<Vec<String>> {
        let mut parameters = Vec::new();

        if self.peek_is(TokenKind::RParen) {
            self.next_token();
            return Some(parameters);
        }

        self.next_token();
        parameters.push(self.current_token().literal.clone());

        while self.peek_is(TokenKind::Comma) {
            self.next_token();
            self.next_token();
            parameters.push(self.current_token().literal.clone());
        }

        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }

        Some(parameters)
    }

    /// Parses an array literal: `[<expression>, ...]`.
    pub(in crate::interpreter::parser) fn parse_array_literal(&mut self) -> Option<Expression> {
        let elements = self.parse_expression_list(TokenKind::RBracket)?;

        Some(Expression::ArrayLiteral { elements })
    }

    /// Parses a hash literal: `{<key>: <value>, ...}`.
    ///
    /// Pairs are kept in source order, which is observable when the literal
    /// is reserialized.
    pub(in crate::interpreter::parser) fn parse_hash_literal(&mut self) -> Option<Expression> {
        let mut pairs = Vec::new();

        while !self.peek_is(TokenKind::RBrace) {
            self.next_token();
            let key = self.parse_expression(Precedence::Lowest)?;

            if !self.expect_peek(TokenKind::Colon) {
                return None;
            }

            self.next_token();
            let value = self.parse_expression(Precedence::Lowest)?;

            pairs.push((key, value));

            if !self.peek_is(TokenKind::RBrace) && !self.expect_peek(TokenKind::Comma) {
                return None;
            }
        }

        if !self.expect_peek(TokenKind::RBrace) {
            return None;
        }

        Some(Expression::HashLiteral { pairs })
    }
}

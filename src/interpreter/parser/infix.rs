use crate::{
    ast::{Expression, InfixOperator},
    interpreter::{
        lexer::TokenKind,
        parser::core::{Parser, Precedence, precedence_of},
    },
};

/// Maps a token to its corresponding infix operator.
///
/// Returns `None` for tokens that are not binary operators.
#[must_use]
pub const fn token_to_infix_operator(kind: TokenKind) -> Option<InfixOperator> {
    match kind {
        TokenKind::Plus => Some(InfixOperator::Plus),
        TokenKind::Minus => Some(InfixOperator::Minus),
        TokenKind::Asterisk => Some(InfixOperator::Asterisk),
        TokenKind::Slash => Some(InfixOperator::Slash),
        TokenKind::Lt => Some(InfixOperator::Lt),
        TokenKind::Gt => Some(InfixOperator::Gt),
        TokenKind::Eq => Some(InfixOperator::Eq),
        TokenKind::NotEq => Some(InfixOperator::NotEq),
        _ => None,
    }
}

impl Parser<'_> {
    /// Parses a binary operator application with `left` already parsed.
    ///
    /// The right operand is parsed at the operator's own precedence, which
    /// makes every binary operator left-associative.
    pub(in crate::interpreter::parser) fn parse_infix_expression(&mut self,
                                                                 left: Expression)
                                                                 -> Option<Expression> {
        let operator = token_to_infix_operator(self.current_token().kind)?;
        let precedence = precedence_of(self.current_token().kind);

        self.next_token();
        let right = self.parse_expression(precedence)?;

        Some(Expression::Infix { left: Box::new(left),
                                 operator,
                                 right: Box::new(right) })
    }

    /// Parses a call expression with the callee already parsed.
    pub(in crate::interpreter::parser) fn parse_call_expression(&mut self,
                                                                function: Expression)
                                                                -> Option<Expression> {
        let arguments = self.parse_expression_list(TokenKind::RParen)?;

        Some(Expression::Call { function: Box::new(function),
                                arguments })
    }

    /// Parses an index expression with the indexed value already parsed.
    pub(in crate::interpreter::parser) fn parse_index_expression(&mut self,
                                                                 left: Expression)
                                                                 -> Option<Expression> {
        self.next_token();
        let index = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(TokenKind::RBracket) {
            return None;
        }

        Some(Expression::Index { left:  Box::new(left),
                                 index: Box::new(index), })
    }

    /// Parses a comma-separated expression list up to and including `end`.
    ///
    /// Shared by call arguments and array literals. An immediately
    /// encountered `end` token produces an empty list.
    pub(in crate::interpreter::parser) fn parse_expression_list(&mut self,
                                                                end: TokenKind)
                                                                -> Option<Vec<Expression>> {
        let mut list = Vec::new();

        if self.peek_is(end) {
            self.next_token();
            return Some(list);
        }

        self.next_token();
        list.push(self.parse_expression(Precedence::Lowest)?);

        while self.peek_is(TokenKind::Comma) {
            self.next_token();
            self.next_token();
            list.push(self.parse_expression(Precedence::Lowest)?);
        }

        if !self.expect_peek(end) {
            return None;
        }

        Some(list)
    }
}

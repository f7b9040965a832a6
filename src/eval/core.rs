//! Recursive-descent evaluator.
//!
//! Implements the expression grammar directly over the token stream, one
//! method per rule, computing the value during the descent:
//!
//! ```text
//! exp    := term { ('+' | '-') term }
//! term   := factor { ('*' | '/') factor }
//! factor := '(' exp ')' | NUMBER
//! ```
//!
//! There is no AST and no backtracking. Every alternative is chosen by
//! inspecting the single current token, which each rule leaves advanced
//! past its own consumption.

use crate::error::EvalError;
use crate::lexer::{Punctuator, Scanner, Token, TokenKind};

pub type EvalResult<T> = Result<T, EvalError>;

/// The evaluator for one expression.
///
/// Owns its scanner for the duration of the parse and holds exactly one
/// current token, replaced on every successful match.
pub struct Evaluator<'a> {
    scanner: Scanner<'a>,
    current: Token,
}

impl<'a> Evaluator<'a> {
    /// Construct an evaluator over `source`, fetching the first token.
    pub fn new(source: &'a str) -> EvalResult<Self> {
        let mut scanner = Scanner::new(source);
        let current = scanner.next_token()?;
        Ok(Self { scanner, current })
    }

    /// Evaluate the whole expression and require end of input after it.
    pub fn evaluate(mut self) -> EvalResult<i64> {
        let value = self.expression()?;

        if !self.current.is_eof() {
            return Err(EvalError::trailing_input(
                self.current.kind.to_string(),
                self.current.span,
            ));
        }

        Ok(value)
    }

    // exp := term { ('+' | '-') term }
    fn expression(&mut self) -> EvalResult<i64> {
        let mut value = self.term()?;

        loop {
            match self.current.kind {
                TokenKind::Punctuator(Punctuator::Plus) => {
                    self.advance()?;
                    value += self.term()?;
                }
                TokenKind::Punctuator(Punctuator::Minus) => {
                    self.advance()?;
                    value -= self.term()?;
                }
                _ => break,
            }
        }

        Ok(value)
    }

    // term := factor { ('*' | '/') factor }
    fn term(&mut self) -> EvalResult<i64> {
        let mut value = self.factor()?;

        loop {
            match self.current.kind {
                TokenKind::Punctuator(Punctuator::Star) => {
                    self.advance()?;
                    value *= self.factor()?;
                }
                TokenKind::Punctuator(Punctuator::Slash) => {
                    let operator_span = self.current.span;
                    self.advance()?;
                    let divisor = self.factor()?;
                    if divisor == 0 {
                        return Err(EvalError::division_by_zero(operator_span));
                    }
                    // i64 division truncates toward zero.
                    value /= divisor;
                }
                _ => break,
            }
        }

        Ok(value)
    }

    // factor := '(' exp ')' | NUMBER
    fn factor(&mut self) -> EvalResult<i64> {
        match self.current.kind {
            TokenKind::Numeric(n) => {
                self.advance()?;
                Ok(n)
            }
            TokenKind::Punctuator(Punctuator::LeftParen) => {
                self.advance()?;
                let value = self.expression()?;
                self.expect(Punctuator::RightParen)?;
                Ok(value)
            }
            _ => Err(EvalError::unexpected_token(
                "number or '('",
                self.current.kind.to_string(),
                self.current.span,
            )),
        }
    }

    /// Replace the current token with the next one from the scanner.
    fn advance(&mut self) -> EvalResult<()> {
        self.current = self.scanner.next_token()?;
        Ok(())
    }

    /// Consume the current token if it is the expected punctuator, fail
    /// otherwise.
    fn expect(&mut self, expected: Punctuator) -> EvalResult<()> {
        if self.current.kind == TokenKind::Punctuator(expected) {
            self.advance()
        } else {
            Err(EvalError::unexpected_token(
                format!("'{}'", expected),
                self.current.kind.to_string(),
                self.current.span,
            ))
        }
    }
}

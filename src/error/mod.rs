//! Error types for both evaluation phases.

use crate::span::Span;
use thiserror::Error;

/// Scanner errors.
#[derive(Debug, Error)]
pub enum LexerError {
    #[error("Unrecognized character '{0}' at {1}")]
    UnrecognizedCharacter(char, Span),

    #[error("Unterminated string literal at {0}")]
    UnterminatedStringLiteral(Span),

    #[error("Invalid number '{0}' at {1}")]
    InvalidNumber(String, Span),
}

impl LexerError {
    pub fn unrecognized_character(c: char, span: Span) -> Self {
        Self::UnrecognizedCharacter(c, span)
    }

    pub fn unterminated_string_literal(span: Span) -> Self {
        Self::UnterminatedStringLiteral(span)
    }

    pub fn invalid_number(s: String, span: Span) -> Self {
        Self::InvalidNumber(s, span)
    }

    pub fn span(&self) -> Span {
        match self {
            Self::UnrecognizedCharacter(_, span) => *span,
            Self::UnterminatedStringLiteral(span) => *span,
            Self::InvalidNumber(_, span) => *span,
        }
    }
}

/// Evaluator errors. Scanner failures propagate through the `Lexer` variant.
#[derive(Debug, Error)]
pub enum EvalError {
    #[error("Unexpected token '{found}', expected {expected} at {span}")]
    UnexpectedToken {
        expected: String,
        found: String,
        span: Span,
    },

    #[error("Trailing input '{found}' at {span}")]
    TrailingInput { found: String, span: Span },

    #[error("Division by zero at {0}")]
    DivisionByZero(Span),

    #[error("Lexer error: {0}")]
    Lexer(#[from] LexerError),
}

impl EvalError {
    pub fn unexpected_token(
        expected: impl Into<String>,
        found: impl Into<String>,
        span: Span,
    ) -> Self {
        Self::UnexpectedToken {
            expected: expected.into(),
            found: found.into(),
            span,
        }
    }

    pub fn trailing_input(found: impl Into<String>, span: Span) -> Self {
        Self::TrailingInput {
            found: found.into(),
            span,
        }
    }

    pub fn division_by_zero(span: Span) -> Self {
        Self::DivisionByZero(span)
    }

    pub fn span(&self) -> Span {
        match self {
            Self::UnexpectedToken { span, .. } => *span,
            Self::TrailingInput { span, .. } => *span,
            Self::DivisionByZero(span) => *span,
            Self::Lexer(err) => err.span(),
        }
    }
}

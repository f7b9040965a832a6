//! Token definitions for the Calclang scanner.

use std::fmt;

use crate::span::Span;

/// All token types produced by the scanner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// Decimal integer literal, parsed at scan time.
    Numeric(i64),
    /// A fixed symbol from the punctuator set.
    Punctuator(Punctuator),
    /// Contents of a quoted literal. The scanner recognizes quoted syntax
    /// but the expression grammar never consumes it.
    StringLiteral(String),
    /// End of input. Exactly one terminates every token sequence.
    Eof,
}

/// The fixed punctuator symbols, including the two-character `&&` and `||`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Punctuator {
    Plus,
    Minus,
    Star,
    Slash,
    Amp,
    AmpAmp,
    Pipe,
    PipePipe,
    LeftParen,
    RightParen,
}

impl fmt::Display for Punctuator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Punctuator::Plus => "+",
            Punctuator::Minus => "-",
            Punctuator::Star => "*",
            Punctuator::Slash => "/",
            Punctuator::Amp => "&",
            Punctuator::AmpAmp => "&&",
            Punctuator::Pipe => "|",
            Punctuator::PipePipe => "||",
            Punctuator::LeftParen => "(",
            Punctuator::RightParen => ")",
        };
        write!(f, "{}", text)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Numeric(n) => write!(f, "{}", n),
            TokenKind::Punctuator(p) => write!(f, "{}", p),
            TokenKind::StringLiteral(s) => write!(f, "\"{}\"", s),
            TokenKind::Eof => write!(f, "EOF"),
        }
    }
}

/// A token with its kind and source location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    pub fn eof(position: usize) -> Self {
        Self {
            kind: TokenKind::Eof,
            span: Span::new(position, position),
        }
    }

    pub fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }
}

//! Scanner for Calclang expression source.
//!
//! Tokens are produced on demand: the evaluator pulls one token at a time
//! via [`Scanner::next_token`], and the scanner never looks further ahead
//! than the single character needed to close the current token.

use crate::error::LexerError;
use crate::lexer::token::{Punctuator, Token, TokenKind};
use crate::span::Span;

/// The scanner transforms one line of expression source into tokens.
pub struct Scanner<'a> {
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    current_pos: usize,
    start_pos: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            chars: source.char_indices().peekable(),
            current_pos: 0,
            start_pos: 0,
        }
    }

    /// Drain the scanner into a vector ending with the single `Eof` token.
    pub fn scan_tokens(mut self) -> Result<Vec<Token>, LexerError> {
        let mut tokens = Vec::new();

        loop {
            let token = self.next_token()?;
            let is_eof = token.is_eof();
            tokens.push(token);
            if is_eof {
                break;
            }
        }

        Ok(tokens)
    }

    /// Scan the next token.
    ///
    /// Consumes exactly the characters of the returned token plus any
    /// leading spaces, leaving the cursor on the first unconsumed character.
    /// Once input is exhausted, every further call returns `Eof`.
    pub fn next_token(&mut self) -> Result<Token, LexerError> {
        self.skip_whitespace();
        self.mark_start();

        let Some(c) = self.advance() else {
            return Ok(Token::eof(self.current_pos));
        };

        match c {
            '(' => Ok(self.make_punctuator(Punctuator::LeftParen)),
            ')' => Ok(self.make_punctuator(Punctuator::RightParen)),
            '+' => Ok(self.make_punctuator(Punctuator::Plus)),
            '-' => Ok(self.make_punctuator(Punctuator::Minus)),
            '*' => Ok(self.make_punctuator(Punctuator::Star)),
            '/' => Ok(self.make_punctuator(Punctuator::Slash)),

            // Only `&&` and `||` pair up; any other neighbor is left for
            // the next call.
            '&' => {
                if self.match_char('&') {
                    Ok(self.make_punctuator(Punctuator::AmpAmp))
                } else {
                    Ok(self.make_punctuator(Punctuator::Amp))
                }
            }
            '|' => {
                if self.match_char('|') {
                    Ok(self.make_punctuator(Punctuator::PipePipe))
                } else {
                    Ok(self.make_punctuator(Punctuator::Pipe))
                }
            }

            '"' | '\'' => self.scan_string(c),

            c if c.is_ascii_digit() => self.scan_number(c),

            _ => Err(LexerError::unrecognized_character(c, self.current_span())),
        }
    }

    // An explicit loop: recursing per space would grow the stack on long
    // runs of whitespace.
    fn skip_whitespace(&mut self) {
        while self.peek() == Some(' ') {
            self.advance();
        }
    }

    fn scan_string(&mut self, quote: char) -> Result<Token, LexerError> {
        let mut value = String::new();

        loop {
            match self.advance() {
                None => {
                    return Err(LexerError::unterminated_string_literal(self.current_span()));
                }
                Some(c) if c == quote => break,
                Some(c) => value.push(c),
            }
        }

        Ok(self.make_token(TokenKind::StringLiteral(value)))
    }

    fn scan_number(&mut self, first: char) -> Result<Token, LexerError> {
        let mut value = String::from(first);

        while let Some(c) = self.peek() {
            if c.is_ascii_digit() {
                value.push(c);
                self.advance();
            } else {
                break;
            }
        }

        let n: i64 = value
            .parse()
            .map_err(|_| LexerError::invalid_number(value.clone(), self.current_span()))?;
        Ok(self.make_token(TokenKind::Numeric(n)))
    }

    fn advance(&mut self) -> Option<char> {
        if let Some((pos, c)) = self.chars.next() {
            self.current_pos = pos + c.len_utf8();
            Some(c)
        } else {
            None
        }
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn mark_start(&mut self) {
        self.start_pos = self.current_pos;
    }

    fn current_span(&self) -> Span {
        Span::new(self.start_pos, self.current_pos)
    }

    fn make_token(&self, kind: TokenKind) -> Token {
        Token::new(kind, self.current_span())
    }

    fn make_punctuator(&self, punctuator: Punctuator) -> Token {
        self.make_token(TokenKind::Punctuator(punctuator))
    }
}

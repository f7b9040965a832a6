//! Lexer module for Calclang.

pub mod scanner;
pub mod token;

pub use scanner::Scanner;
pub use token::{Punctuator, Token, TokenKind};

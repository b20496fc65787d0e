//!
//! The process of lexing involves converting [char]s
//! from ESON source into positioned lexemes, ready for a parser.
//!
//! ```
//! use eson::lexing::{LexOptions, Lexer, Token};
//!
//! let lexer = Lexer::new("{a = 1}", LexOptions::default()).unwrap();
//! let tokens: Vec<_> = lexer.lexemes().iter().map(|l| l.token()).collect();
//!
//! assert_eq!(
//!     tokens,
//!     [Token::MapBegin, Token::String, Token::Mapping, Token::String, Token::MapEnd]
//! );
//! ```
//!

pub mod cursor;
pub mod lexer;
pub mod options;
pub mod tokens;
pub mod utils;

pub use self::{
    cursor::Lexemes,
    lexer::Lexer,
    options::{LexOptions, OnError},
    tokens::{Lexeme, Token},
    utils::{Context, Diagnostic, ErrorKind, LexError},
};

//!
//! ## Punctuators
//!
//! Pieces of punctuation: `{}[]=,`.
//!

use eson_macros::Positioned;

use crate::common::Position;

use super::Token;

///
/// `,`
///
#[derive(Debug, Clone, PartialEq, Eq, Positioned)]
pub struct Comma {
    position: Position,
}

impl Comma {
    pub fn new(position: Position) -> Self {
        Self { position }
    }
}

///
/// `=`, between a key and its value.
///
#[derive(Debug, Clone, PartialEq, Eq, Positioned)]
pub struct Mapping {
    position: Position,
}

impl Mapping {
    pub fn new(position: Position) -> Self {
        Self { position }
    }
}

///
/// `{ } [ ]`
///
#[derive(Debug, Clone, PartialEq, Eq, Positioned)]
pub struct Delimiter {
    position: Position,
    token: Token,
}

impl Delimiter {
    ///
    /// `token` must be one of the four delimiter tokens.
    ///
    pub fn new(position: Position, token: Token) -> Self {
        debug_assert!(token.character().is_some(), "{token} is not a delimiter");
        Self { position, token }
    }

    pub fn token(&self) -> Token {
        self.token
    }

    pub fn character(&self) -> char {
        self.token.character().unwrap_or_default()
    }
}

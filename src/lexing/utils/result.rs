//!
//! Errors that can occur during lexing.
//!

use thiserror::Error;

use crate::common::{Position, Positioned};

///
/// The kinds of lexical error, without a position.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorKind {
    UnclosedString,
    UnclosedArray,
    UnclosedMap,
    RbracketOutsideArray,
    RbraceOutsideMap,
    NoSeparator,
}

impl ErrorKind {
    ///
    /// Attach a position, making a full [LexError].
    ///
    pub fn at(self, position: Position) -> LexError {
        match self {
            Self::UnclosedString => LexError::UnclosedString { position },
            Self::UnclosedArray => LexError::UnclosedArray { position },
            Self::UnclosedMap => LexError::UnclosedMap { position },
            Self::RbracketOutsideArray => LexError::RbracketOutsideArray { position },
            Self::RbraceOutsideMap => LexError::RbraceOutsideMap { position },
            Self::NoSeparator => LexError::NoSeparator { position },
        }
    }
}

///
/// A lexical error at a position.
///
/// Returned as-is when lexing aborts on the first error;
/// wrapped in a [Diagnostic] when errors are collected.
///
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq, Hash)]
pub enum LexError {
    ///
    /// End of input before a fence of the opening length.
    ///
    #[error("{position}: unclosed string")]
    UnclosedString { position: Position },

    ///
    /// End of input before the `]` of an open `[`.
    ///
    #[error("{position}: unclosed array")]
    UnclosedArray { position: Position },

    ///
    /// End of input before the `}` of an open `{`.
    ///
    #[error("{position}: unclosed map")]
    UnclosedMap { position: Position },

    #[error("{position}: ] outside of an array")]
    RbracketOutsideArray { position: Position },

    #[error("{position}: }} outside of a map")]
    RbraceOutsideMap { position: Position },

    ///
    /// Two tokens with nothing between them to tell them apart.
    ///
    #[error("{position}: no separator between adjacent tokens")]
    NoSeparator { position: Position },
}

impl LexError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UnclosedString { .. } => ErrorKind::UnclosedString,
            Self::UnclosedArray { .. } => ErrorKind::UnclosedArray,
            Self::UnclosedMap { .. } => ErrorKind::UnclosedMap,
            Self::RbracketOutsideArray { .. } => ErrorKind::RbracketOutsideArray,
            Self::RbraceOutsideMap { .. } => ErrorKind::RbraceOutsideMap,
            Self::NoSeparator { .. } => ErrorKind::NoSeparator,
        }
    }
}

impl Positioned for LexError {
    fn position(&self) -> Position {
        match *self {
            Self::UnclosedString { position }
            | Self::UnclosedArray { position }
            | Self::UnclosedMap { position }
            | Self::RbracketOutsideArray { position }
            | Self::RbraceOutsideMap { position }
            | Self::NoSeparator { position } => position,
        }
    }
}

///
/// An error collected without stopping the lexer,
/// anchored to the code lexeme emitted just before it.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Diagnostic {
    ///
    /// Index of the anchor in the lexeme sequence.
    ///
    pub lexeme: usize,
    pub error: LexError,
}

impl Diagnostic {
    pub fn message(&self) -> String {
        self.error.to_string()
    }
}

//!
//! Lexical tokens.
//!

pub mod comment;
pub mod punctuator;
pub mod string;
pub mod whitespace;

use std::{collections::HashMap, fmt::Display};

use eson_macros::Positioned;
use lazy_static::lazy_static;

use super::utils::Context;

pub use self::{
    comment::{Comment, CommentKind},
    punctuator::{Comma, Delimiter, Mapping},
    string::LString,
    whitespace::{is_whitespace, Newline, Whitespace},
};

///
/// Every kind of lexeme.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    Newline,
    Whitespace,
    Comma,
    Mapping,
    ArrayBegin,
    ArrayEnd,
    MapBegin,
    MapEnd,
    LineComment,
    BlockComment,
    String,
}

lazy_static! {
    ///
    /// Structural characters and the delimiter they open or close.
    ///
    static ref DELIMITERS: HashMap<char, Token> = HashMap::from([
        ('[', Token::ArrayBegin),
        (']', Token::ArrayEnd),
        ('{', Token::MapBegin),
        ('}', Token::MapEnd),
    ]);
}

impl Token {
    ///
    /// The delimiter written as `ch`, if any.
    ///
    pub fn delimiter(ch: char) -> Option<Token> {
        DELIMITERS.get(&ch).copied()
    }

    ///
    /// The character a delimiter is written as.
    ///
    pub fn character(self) -> Option<char> {
        match self {
            Self::ArrayBegin => Some('['),
            Self::ArrayEnd => Some(']'),
            Self::MapBegin => Some('{'),
            Self::MapEnd => Some('}'),
            _ => None,
        }
    }

    pub fn is_comment(self) -> bool {
        matches!(self, Self::LineComment | Self::BlockComment)
    }

    ///
    /// Only matters when reproducing the source:
    /// whitespace, newlines and comments.
    ///
    pub fn is_source_only(self) -> bool {
        matches!(self, Self::Newline | Self::Whitespace) || self.is_comment()
    }

    pub fn is_opening(self) -> bool {
        matches!(self, Self::ArrayBegin | Self::MapBegin)
    }

    pub fn is_closing(self) -> bool {
        matches!(self, Self::ArrayEnd | Self::MapEnd)
    }

    ///
    /// The container a delimiter opens or closes.
    ///
    pub fn context(self) -> Context {
        match self {
            Self::ArrayBegin | Self::ArrayEnd => Context::Array,
            Self::MapBegin | Self::MapEnd => Context::Map,
            _ => Context::None,
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Newline => "NEWLINE",
            Self::Whitespace => "WHITESPACE",
            Self::Comma => "COMMA",
            Self::Mapping => "MAPPING",
            Self::ArrayBegin => "ARRAY_BEGIN",
            Self::ArrayEnd => "ARRAY_END",
            Self::MapBegin => "MAP_BEGIN",
            Self::MapEnd => "MAP_END",
            Self::LineComment => "LINE_COMMENT",
            Self::BlockComment => "BLOCK_COMMENT",
            Self::String => "STRING",
        };

        f.write_str(name)
    }
}

///
/// A positioned token, as produced by the [crate::lexing::Lexer].
///
#[derive(Debug, Clone, PartialEq, Eq, Positioned)]
pub enum Lexeme {
    Newline(Newline),
    Whitespace(Whitespace),
    Comma(Comma),
    Mapping(Mapping),
    Delimiter(Delimiter),
    Comment(Comment),
    String(LString),
}

impl Lexeme {
    pub fn token(&self) -> Token {
        match self {
            Self::Newline(_) => Token::Newline,
            Self::Whitespace(_) => Token::Whitespace,
            Self::Comma(_) => Token::Comma,
            Self::Mapping(_) => Token::Mapping,
            Self::Delimiter(delimiter) => delimiter.token(),
            Self::Comment(comment) => comment.kind().token(),
            Self::String(_) => Token::String,
        }
    }

    ///
    /// Does this lexeme matter to a parser?
    ///
    /// Only these can carry a diagnostic.
    ///
    pub fn is_code(&self) -> bool {
        !self.token().is_source_only()
    }

    pub fn as_string(&self) -> Option<&LString> {
        match self {
            Self::String(string) => Some(string),
            _ => None,
        }
    }

    ///
    /// The exact source text this lexeme was scanned from.
    ///
    /// Concatenating this over a sequence lexed with every
    /// retention option on reproduces the input.
    ///
    pub fn source(&self) -> String {
        match self {
            Self::Newline(_) => "\n".to_string(),
            Self::Whitespace(whitespace) => whitespace.text().to_string(),
            Self::Comma(_) => ",".to_string(),
            Self::Mapping(_) => "=".to_string(),
            Self::Delimiter(delimiter) => delimiter.character().to_string(),
            Self::Comment(comment) => comment.source(),
            Self::String(string) => string.source(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        common::{Position, Positioned},
        lexing::utils::Context,
    };

    use super::{Comma, LString, Lexeme, Token};

    #[test]
    fn delimiter_lookup() {
        assert_eq!(Token::delimiter('['), Some(Token::ArrayBegin));
        assert_eq!(Token::delimiter('}'), Some(Token::MapEnd));
        assert_eq!(Token::delimiter('('), None);

        for ch in "[]{}".chars() {
            assert_eq!(Token::delimiter(ch).and_then(Token::character), Some(ch));
        }
    }

    #[test]
    fn flags() {
        assert!(Token::LineComment.is_comment());
        assert!(Token::BlockComment.is_source_only());
        assert!(Token::Newline.is_source_only());
        assert!(Token::Whitespace.is_source_only());
        assert!(!Token::Whitespace.is_comment());

        for code in [
            Token::Comma,
            Token::Mapping,
            Token::ArrayBegin,
            Token::ArrayEnd,
            Token::MapBegin,
            Token::MapEnd,
            Token::String,
        ] {
            assert!(!code.is_source_only());
            assert!(!code.is_comment());
        }
    }

    #[test]
    fn delimiter_context() {
        assert_eq!(Token::ArrayEnd.context(), Context::Array);
        assert_eq!(Token::MapBegin.context(), Context::Map);
        assert_eq!(Token::Comma.context(), Context::None);
        assert!(Token::MapBegin.is_opening());
        assert!(Token::ArrayEnd.is_closing());
    }

    #[test]
    fn derived_position() {
        let lexeme = Lexeme::Comma(Comma::new(Position::new(4, 2)));
        assert_eq!(lexeme.position(), Position::new(4, 2));
        assert_eq!(lexeme.token(), Token::Comma);
        assert!(lexeme.is_code());

        let string = LString::bare(Position::new(7, 3), "a");
        assert_eq!(string.position(), Position::new(7, 3));
        assert_eq!(Lexeme::String(string).position(), Position::new(7, 3));
    }
}

//!
//! ## ESON
//!
//! A lexer for ESON, a JSON-like configuration format with
//! bare strings, fenced quoting and nestable comments.
//!
//! The whole input is lexed eagerly into a sequence of
//! [Lexeme]s, which a parser then reads through [Lexemes].
//!

pub mod common;
pub mod lexing;

pub use common::{Position, Positioned, SourceFile};
pub use lexing::{
    Diagnostic, ErrorKind, LexError, LexOptions, Lexeme, Lexemes, Lexer, OnError, Token,
};

///
/// Lex `text` with the given options.
///
pub fn lex(text: &str, options: LexOptions) -> Result<Lexemes, LexError> {
    Lexer::new(text, options).map(Lexer::into_lexemes)
}

#[cfg(test)]
mod tests {
    use crate::{lex, ErrorKind, LexOptions, Token};

    #[test]
    fn lex_text() {
        let lexemes = lex("a = [1]", LexOptions::default()).expect("Valid lex");
        assert_eq!(lexemes.len(), 5);
        assert_eq!(
            lexemes.as_slice().last().map(|l| l.token()),
            Some(Token::ArrayEnd)
        );

        let error = lex("a = [1", LexOptions::default()).expect_err("Unclosed array");
        assert_eq!(error.kind(), ErrorKind::UnclosedArray);
    }
}

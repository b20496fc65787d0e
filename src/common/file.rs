//!
//! A source file.
//!

use std::path::Path;

use crate::lexing::{LexError, LexOptions, Lexemes, Lexer};

///
/// A real source file.
///
/// Lexing one gives back [Lexemes]; errors are reported
/// against [SourceFile::path].
///
#[derive(Debug, Clone)]
pub struct SourceFile {
    path: String,
    contents: String,
}

impl SourceFile {
    ///
    /// TESTING ONLY
    /// ***
    /// Create a dumy file with a fake path.
    ///
    #[cfg(test)]
    pub fn dummy_file(contents: &'static str) -> Self {
        Self {
            path: "DUMMY.ESON".to_string(),
            contents: contents.to_string(),
        }
    }

    ///
    /// Attempts to read source code from a given file path.
    ///
    pub fn read_from_file<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;

        Ok(Self {
            path: path.to_string_lossy().into_owned(),
            contents,
        })
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn contents(&self) -> &str {
        &self.contents
    }

    ///
    /// Lex the whole file in one pass.
    ///
    pub fn lex(&self, options: LexOptions) -> Result<Lexemes, LexError> {
        Lexer::new(&self.contents, options).map(Lexer::into_lexemes)
    }
}

//!
//! Lexer configuration.
//!

///
/// What the lexer does when it meets an error.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OnError {
    ///
    /// Stop at the first error and return it.
    ///
    #[default]
    Abort,

    ///
    /// Keep going, recording every error as a
    /// [crate::lexing::Diagnostic] next to the lexemes.
    ///
    Collect,
}

///
/// Which lexemes are kept, and how errors are reported.
///
/// The default keeps only what a parser needs and aborts on
/// the first error.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LexOptions {
    ///
    /// Keep newline and whitespace lexemes.
    ///
    pub retain_source: bool,

    ///
    /// Keep comment lexemes.
    ///
    pub retain_comments: bool,

    pub on_error: OnError,
}

impl LexOptions {
    ///
    /// Keep everything and never abort: enough to reproduce the
    /// input exactly, as formatters and editors need.
    ///
    pub fn full_fidelity() -> Self {
        Self {
            retain_source: true,
            retain_comments: true,
            on_error: OnError::Collect,
        }
    }

    pub fn with_source(self, retain_source: bool) -> Self {
        Self {
            retain_source,
            ..self
        }
    }

    pub fn with_comments(self, retain_comments: bool) -> Self {
        Self {
            retain_comments,
            ..self
        }
    }

    pub fn collecting(self) -> Self {
        Self {
            on_error: OnError::Collect,
            ..self
        }
    }

    pub fn aborts(&self) -> bool {
        self.on_error == OnError::Abort
    }
}

#[cfg(test)]
mod tests {
    use super::{LexOptions, OnError};

    #[test]
    fn builders() {
        let options = LexOptions::default();
        assert!(!options.retain_source);
        assert!(!options.retain_comments);
        assert!(options.aborts());

        let options = options.with_comments(true).collecting();
        assert!(options.retain_comments);
        assert_eq!(options.on_error, OnError::Collect);

        assert_eq!(
            LexOptions::default()
                .with_source(true)
                .with_comments(true)
                .collecting(),
            LexOptions::full_fidelity()
        );
    }
}

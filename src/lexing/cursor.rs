//!
//! Sequential access to finished lexemes, for parsers.
//!

use super::{tokens::Lexeme, utils::Diagnostic};

///
/// The complete output of a [super::Lexer], read front to back.
///
/// Nothing is validated here: every decision was made while lexing.
///
#[derive(Debug, Clone, Default)]
pub struct Lexemes {
    inner: Vec<Lexeme>,
    diagnostics: Vec<Diagnostic>,
    index: usize,
}

impl Lexemes {
    pub(crate) fn new(inner: Vec<Lexeme>, diagnostics: Vec<Diagnostic>) -> Self {
        Self {
            inner,
            diagnostics,
            index: 0,
        }
    }

    ///
    /// Total number of lexemes, consumed or not.
    ///
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    ///
    /// Index of the next lexeme to be read.
    ///
    pub fn cursor(&self) -> usize {
        self.index
    }

    pub fn upcoming(&self) -> Option<&Lexeme> {
        self.inner.get(self.index)
    }

    ///
    /// Checks if the next lexeme satisfies `pred`.
    ///
    pub fn peek(&self, pred: impl FnOnce(&Lexeme) -> bool) -> bool {
        self.upcoming().map(pred).unwrap_or(false)
    }

    ///
    /// A copy of this cursor to read ahead with; see [Lexemes::advance_to].
    ///
    pub fn fork(&self) -> Self {
        self.clone()
    }

    ///
    /// Catch up with a fork.
    ///
    /// The cursor never moves past the end of this sequence.
    ///
    pub fn advance_to(&mut self, other: &Self) {
        self.index = other.index.min(self.inner.len());
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    ///
    /// The diagnostic attached to the lexeme at `index`, if any.
    ///
    pub fn diagnostic(&self, index: usize) -> Option<&Diagnostic> {
        self.diagnostics
            .binary_search_by_key(&index, |d| d.lexeme)
            .ok()
            .map(|i| &self.diagnostics[i])
    }

    pub fn as_slice(&self) -> &[Lexeme] {
        &self.inner
    }

    pub fn into_parts(self) -> (Vec<Lexeme>, Vec<Diagnostic>) {
        (self.inner, self.diagnostics)
    }
}

impl Iterator for Lexemes {
    type Item = Lexeme;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.inner.get(self.index).cloned();
        if item.is_some() {
            self.index += 1;
        }

        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.inner.len().saturating_sub(self.index);
        (left, Some(left))
    }
}

impl ExactSizeIterator for Lexemes {}

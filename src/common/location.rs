//!
//! Things that help trace errors and lexemes: [Position] and [Positioned].
//!

use std::fmt::{Display, Formatter};

///
/// The location of a character in source code.
///
/// Both the line and the column are 1-based, and the
/// column counts characters, not bytes.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

///
/// Formats as `line:column`, the form used in every error message.
///
impl Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

///
/// Returns the position attached to this
/// object.
///
pub trait Positioned {
    ///
    /// Returns the position at which this object
    /// starts in the source.
    ///
    fn position(&self) -> Position;
}

impl Positioned for Position {
    fn position(&self) -> Position {
        *self
    }
}

#[cfg(test)]
mod tests {
    use super::Position;

    #[test]
    fn ordering() {
        assert!(Position::new(1, 9) < Position::new(2, 1));
        assert!(Position::new(3, 2) < Position::new(3, 10));
        assert_eq!(Position::default(), Position::new(1, 1));
    }

    #[test]
    fn display() {
        assert_eq!(Position::new(12, 4).to_string(), "12:4");
    }
}

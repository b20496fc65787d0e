//!
//! ## Whitespace
//! Empty space that doesn't contribute syntactically.
//!

use eson_macros::Positioned;
use finl_unicode::categories::{CharacterCategories, MinorCategory};

use crate::common::Position;

///
/// Is this character whitespace?
///
/// ASCII `TAB` to `CR` and the `FS` to `US` separators, plus the Unicode
/// space, line and paragraph separators other than the non-breaking ones.
///
pub fn is_whitespace(ch: &char) -> bool {
    use MinorCategory::{Zl, Zp, Zs};

    match ch {
        '\u{0009}'..='\u{000D}' | '\u{001C}'..='\u{001F}' => true,
        '\u{00A0}' | '\u{2007}' | '\u{202F}' => false,
        c => matches!(c.get_minor_category(), Zs | Zl | Zp),
    }
}

///
/// A single `\n`.
///
#[derive(Debug, Clone, PartialEq, Eq, Positioned)]
pub struct Newline {
    position: Position,
}

impl Newline {
    pub fn new(position: Position) -> Self {
        Self { position }
    }
}

///
/// A run of whitespace on one line.
///
#[derive(Debug, Clone, PartialEq, Eq, Positioned)]
pub struct Whitespace {
    position: Position,
    text: String,
}

impl Whitespace {
    pub fn new(position: Position, text: impl Into<String>) -> Self {
        Self {
            position,
            text: text.into(),
        }
    }

    ///
    /// The whitespace exactly as written.
    ///
    pub fn text(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::is_whitespace;

    #[test]
    fn classify() {
        for ch in [' ', '\t', '\n', '\r', '\u{000B}', '\u{000C}', '\u{001F}'] {
            assert!(is_whitespace(&ch), "{ch:?}");
        }

        for ch in ['\u{2003}', '\u{2028}', '\u{2029}', '\u{3000}'] {
            assert!(is_whitespace(&ch), "{ch:?}");
        }

        for ch in ['a', '_', '\u{00A0}', '\u{2007}', '\u{202F}', '\u{FEFF}'] {
            assert!(!is_whitespace(&ch), "{ch:?}");
        }
    }
}

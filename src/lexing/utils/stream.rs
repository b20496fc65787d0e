use crate::common::Position;

///
/// Things that [SourceStream] can
/// check are under the cursor.
///
pub trait Lookahead {
    fn upcoming(self, input: &SourceStream) -> bool;
}

///
/// A fixed literal, starting at the current character.
///
impl<'a> Lookahead for &'a str {
    fn upcoming(self, input: &SourceStream) -> bool {
        let Some(start) = input.index() else {
            return false;
        };

        let mut chars = input.chars[start..].iter();
        self.chars().all(|expected| chars.next() == Some(&expected))
    }
}

///
/// A predicate on the current character.
///
impl<F: Fn(&char) -> bool> Lookahead for F {
    fn upcoming(self, input: &SourceStream) -> bool {
        input.current().as_ref().map(self).unwrap_or(false)
    }
}

///
/// Finds the starting character index of all
/// lines, using `\n` to delimit lines.
///
fn line_starts(st: &[char]) -> Vec<usize> {
    std::iter::once(0)
        .chain(
            st.iter()
                .enumerate()
                .filter(|(_, ch)| **ch == '\n')
                .map(|(i, _)| i + 1),
        )
        .collect()
}

///
/// Single-pass character cursor over a complete source text.
///
/// The cursor always sits *on* a character: [SourceStream::advance]
/// moves onto the next one and [SourceStream::previous] moves back,
/// so one character of lookahead can be undone.
///
#[derive(Debug, Clone)]
pub struct SourceStream {
    chars: Vec<char>,
    line_starts: Vec<usize>,

    ///
    /// Index of the next character to be consumed;
    /// the current one is just before it.
    ///
    next: usize,
}

impl SourceStream {
    ///
    /// Create a new stream from source text.
    ///
    pub fn new(text: &str) -> Self {
        let chars = text.chars().collect::<Vec<_>>();
        let line_starts = line_starts(&chars);

        Self {
            chars,
            line_starts,
            next: 0,
        }
    }

    ///
    /// Move onto the next character, returning it,
    /// or [None] at the end of input.
    ///
    pub fn advance(&mut self) -> Option<char> {
        let ch = self.chars.get(self.next).copied()?;
        self.next += 1;
        Some(ch)
    }

    ///
    /// Step back exactly one character.
    ///
    pub fn previous(&mut self) {
        self.next = self.next.saturating_sub(1);
    }

    ///
    /// Consume `n` characters, stopping early at the end of input.
    ///
    pub fn skip(&mut self, n: usize) {
        self.next = (self.next + n).min(self.chars.len());
    }

    ///
    /// The character under the cursor.
    ///
    pub fn current(&self) -> Option<char> {
        self.index().map(|i| self.chars[i])
    }

    ///
    /// Index of the character under the cursor.
    ///
    pub fn index(&self) -> Option<usize> {
        self.next.checked_sub(1)
    }

    ///
    /// Checks if a lookahead pattern starts at the current character,
    /// without consuming anything.
    ///
    pub fn peek<L: Lookahead>(&self, lookahead: L) -> bool {
        lookahead.upcoming(self)
    }

    ///
    /// Take the characters following the current one whilst they
    /// satisfy some predicate, leaving the cursor on the last one taken.
    ///
    pub fn take_while(&mut self, pred: impl Fn(&char) -> bool) -> String {
        let mut taken = String::new();

        while let Some(ch) = self.advance() {
            if !pred(&ch) {
                self.previous();
                break;
            }

            taken.push(ch);
        }

        taken
    }

    ///
    /// The source text between two character indexes.
    ///
    pub fn slice(&self, start: usize, end: usize) -> String {
        self.chars[start..end.min(self.chars.len())].iter().collect()
    }

    ///
    /// Position of the character under the cursor.
    ///
    pub fn position(&self) -> Position {
        self.position_of(self.index().unwrap_or(0))
    }

    ///
    /// Position of the character at `index`.
    ///
    pub fn position_of(&self, index: usize) -> Position {
        // line_starts always begins with 0, so line >= 1.
        let line = self.line_starts.partition_point(|&start| start <= index);
        let column = index - self.line_starts[line - 1] + 1;

        Position::new(line, column)
    }
}

#[cfg(test)]
mod tests {
    use crate::common::Position;

    use super::{line_starts, SourceStream};

    #[test]
    fn lines() {
        assert_eq!(
            line_starts(&"ba\nb\nc".chars().collect::<Vec<_>>()),
            [0, 3, 5]
        );
        assert_eq!(line_starts(&[]), [0]);
    }

    #[test]
    fn forwards_and_backwards() {
        let mut input = SourceStream::new("ab\ncd");

        assert_eq!(input.advance(), Some('a'));
        assert_eq!(input.position(), Position::new(1, 1));
        assert_eq!(input.advance(), Some('b'));
        assert_eq!(input.advance(), Some('\n'));
        assert_eq!(input.position(), Position::new(1, 3));
        assert_eq!(input.advance(), Some('c'));
        assert_eq!(input.position(), Position::new(2, 1));

        input.previous();
        assert_eq!(input.current(), Some('\n'));
        assert_eq!(input.position(), Position::new(1, 3));

        input.previous();
        assert_eq!(input.position(), Position::new(1, 2));

        assert_eq!(input.advance(), Some('\n'));
        assert_eq!(input.advance(), Some('c'));
        assert_eq!(input.advance(), Some('d'));
        assert_eq!(input.position(), Position::new(2, 2));
        assert_eq!(input.advance(), None);
        assert_eq!(input.position(), Position::new(2, 2));
    }

    #[test]
    fn peek_literal() {
        let mut input = SourceStream::new("a/*");
        assert!(!input.peek("/*"));

        input.advance();
        input.advance();
        assert!(input.peek("/*"));
        assert!(!input.peek("/**"));
        assert!(input.peek(|ch: &char| *ch == '/'));
        assert_eq!(input.current(), Some('/'));
    }

    #[test]
    fn take_while() {
        let mut input = SourceStream::new(" \t x");
        input.advance();

        assert_eq!(input.take_while(|ch| ch.is_whitespace()), "\t ");
        assert_eq!(input.advance(), Some('x'));
    }

    #[test]
    fn multibyte_columns() {
        let mut input = SourceStream::new("ä=ö");
        input.skip(3);
        assert_eq!(input.current(), Some('ö'));
        assert_eq!(input.position(), Position::new(1, 3));
    }
}

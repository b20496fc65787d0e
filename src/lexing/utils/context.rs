//!
//! Tracking of the enclosing container.
//!

use crate::common::Position;

///
/// The nearest enclosing container.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Context {
    #[default]
    None,
    Array,
    Map,
}

#[derive(Debug, Clone, Copy)]
struct Frame {
    context: Context,
    opened: Position,
}

///
/// Stack of open containers, one frame per opening delimiter.
///
/// Closing the innermost container restores the context
/// that was active before it was opened.
///
#[derive(Debug, Clone, Default)]
pub struct ContextStack {
    frames: Vec<Frame>,
}

impl ContextStack {
    pub fn new() -> Self {
        Self::default()
    }

    ///
    /// The innermost open container, or [Context::None] at the top level.
    ///
    pub fn current(&self) -> Context {
        self.frames
            .last()
            .map(|frame| frame.context)
            .unwrap_or(Context::None)
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    ///
    /// Enter a container whose opening delimiter is at `opened`.
    ///
    pub fn open(&mut self, context: Context, opened: Position) {
        self.frames.push(Frame { context, opened });
    }

    ///
    /// Leave the innermost container if it is a `context`.
    ///
    /// Returns `false`, leaving the stack untouched, on a mismatch.
    ///
    pub fn close(&mut self, context: Context) -> bool {
        if context == Context::None || self.current() != context {
            return false;
        }

        self.frames.pop();
        true
    }

    ///
    /// Removes every container still open, innermost first,
    /// with the position of its opening delimiter.
    ///
    pub fn unclosed(&mut self) -> impl Iterator<Item = (Context, Position)> + '_ {
        self.frames
            .drain(..)
            .rev()
            .map(|Frame { context, opened }| (context, opened))
    }
}

#[cfg(test)]
mod tests {
    use crate::common::Position;

    use super::{Context, ContextStack};

    #[test]
    fn restores_enclosing_context() {
        let mut stack = ContextStack::new();
        assert_eq!(stack.current(), Context::None);

        stack.open(Context::Map, Position::new(1, 1));
        stack.open(Context::Array, Position::new(1, 5));
        assert_eq!(stack.current(), Context::Array);

        assert!(stack.close(Context::Array));
        assert_eq!(stack.current(), Context::Map);

        assert!(stack.close(Context::Map));
        assert_eq!(stack.current(), Context::None);
    }

    #[test]
    fn mismatched_close_keeps_stack() {
        let mut stack = ContextStack::new();
        assert!(!stack.close(Context::Array));

        stack.open(Context::Array, Position::new(1, 1));
        assert!(!stack.close(Context::Map));
        assert_eq!(stack.current(), Context::Array);
        assert_eq!(stack.depth(), 1);
    }

    #[test]
    fn unclosed_innermost_first() {
        let mut stack = ContextStack::new();
        stack.open(Context::Array, Position::new(1, 1));
        stack.open(Context::Map, Position::new(2, 3));

        let unclosed = stack.unclosed().collect::<Vec<_>>();
        assert_eq!(
            unclosed,
            [
                (Context::Map, Position::new(2, 3)),
                (Context::Array, Position::new(1, 1))
            ]
        );
        assert_eq!(stack.depth(), 0);
    }
}

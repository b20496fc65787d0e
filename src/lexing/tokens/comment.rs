//!
//! Comments.
//!

use eson_macros::Positioned;

use crate::common::Position;

use super::Token;

pub const LINE_COMMENT: &str = "##";
pub const BLOCK_COMMENT: &str = "/*";
pub const BLOCK_COMMENT_END: &str = "*/";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommentKind {
    ///
    /// ```text
    /// ## Up to the end of the line.
    /// ```
    ///
    Line,

    ///
    /// ```text
    /// /* Anywhere, /* nesting */ allowed. */
    /// ```
    ///
    Block,
}

impl CommentKind {
    pub fn token(self) -> Token {
        match self {
            Self::Line => Token::LineComment,
            Self::Block => Token::BlockComment,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Positioned)]
pub struct Comment {
    position: Position,
    kind: CommentKind,

    ///
    /// Contents of this comment, without the outermost delimiters.
    ///
    inner: String,

    ///
    /// Whether a block comment was closed before the end of input.
    ///
    terminated: bool,
}

impl Comment {
    pub fn line(position: Position, inner: impl Into<String>) -> Self {
        Self {
            position,
            kind: CommentKind::Line,
            inner: inner.into(),
            terminated: true,
        }
    }

    pub fn block(position: Position, inner: impl Into<String>, terminated: bool) -> Self {
        Self {
            position,
            kind: CommentKind::Block,
            inner: inner.into(),
            terminated,
        }
    }

    pub fn kind(&self) -> CommentKind {
        self.kind
    }

    pub fn inner(&self) -> &str {
        &self.inner
    }

    pub fn is_terminated(&self) -> bool {
        self.terminated
    }

    pub fn source(&self) -> String {
        match self.kind {
            CommentKind::Line => format!("{LINE_COMMENT}{}", self.inner),
            CommentKind::Block if self.terminated => {
                format!("{BLOCK_COMMENT}{}{BLOCK_COMMENT_END}", self.inner)
            }
            CommentKind::Block => format!("{BLOCK_COMMENT}{}", self.inner),
        }
    }
}

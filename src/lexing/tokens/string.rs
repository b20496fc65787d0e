//!
//! String literals, quoted or bare.
//!

use eson_macros::Positioned;

use crate::common::Position;

///
/// Characters that can make up a quote fence.
///
pub const QUOTES: [char; 3] = ['"', '\'', '`'];

///
/// A string.
///
/// Quoted strings remember the fence they were opened with;
/// bare (raw) strings have none.
///
#[derive(Debug, Clone, PartialEq, Eq, Positioned)]
pub struct LString {
    position: Position,
    fence: Option<String>,
    content: String,
    terminated: bool,
}

impl LString {
    ///
    /// A string opened (and closed) by `fence`.
    ///
    pub fn quoted(position: Position, fence: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            position,
            fence: Some(fence.into()),
            content: content.into(),
            terminated: true,
        }
    }

    ///
    /// A quoted string that reached the end of input.
    ///
    pub(crate) fn unterminated(
        position: Position,
        fence: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            terminated: false,
            ..Self::quoted(position, fence, content)
        }
    }

    pub fn bare(position: Position, content: impl Into<String>) -> Self {
        Self {
            position,
            fence: None,
            content: content.into(),
            terminated: true,
        }
    }

    pub fn fence(&self) -> Option<&str> {
        self.fence.as_deref()
    }

    pub fn is_bare(&self) -> bool {
        self.fence.is_none()
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn is_terminated(&self) -> bool {
        self.terminated
    }

    pub fn source(&self) -> String {
        match (&self.fence, self.terminated) {
            (Some(fence), true) => format!("{fence}{}{fence}", self.content),
            (Some(fence), false) => format!("{fence}{}", self.content),
            (None, _) => self.content.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::common::Position;

    use super::LString;

    #[test]
    fn source() {
        let at = Position::default();

        assert_eq!(LString::quoted(at, "'''", "a'b").source(), "'''a'b'''");
        assert_eq!(LString::quoted(at, "\"", "").source(), "\"\"");
        assert_eq!(LString::unterminated(at, "`", "abc").source(), "`abc");
        assert_eq!(LString::bare(at, "key").source(), "key");
        assert!(LString::bare(at, "key").is_bare());
    }
}

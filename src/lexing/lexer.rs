//!
//! The scanning engine.
//!

use log::{debug, trace};

use crate::common::{Position, Positioned};

use super::{
    cursor::Lexemes,
    options::LexOptions,
    tokens::{
        comment::{BLOCK_COMMENT, BLOCK_COMMENT_END, LINE_COMMENT},
        is_whitespace,
        string::QUOTES,
        Comma, Comment, Delimiter, LString, Lexeme, Mapping, Newline, Token, Whitespace,
    },
    utils::{Context, ContextStack, Diagnostic, ErrorKind, LexError, SourceStream},
};

///
/// Characters that end an expression. They are never
/// consumed as part of one.
///
const TERMINATORS: &str = "\n,={}[]";

///
/// Turns ESON text into [Lexeme]s in a single pass.
///
/// All of the work happens in [Lexer::new]: by the time it returns,
/// every lexeme (and, when collecting, every [Diagnostic]) exists.
///
#[derive(Debug)]
pub struct Lexer {
    input: SourceStream,
    options: LexOptions,
    contexts: ContextStack,
    lexemes: Vec<Lexeme>,
    diagnostics: Vec<Diagnostic>,

    ///
    /// Index of the most recent lexeme that is not source-only.
    ///
    last_code: Option<usize>,
}

impl Lexer {
    ///
    /// Lex all of `text`.
    ///
    /// Fails with the first error when [LexOptions::on_error] is
    /// [super::OnError::Abort]; otherwise never fails.
    ///
    pub fn new(text: &str, options: LexOptions) -> Result<Self, LexError> {
        let mut lexer = Self {
            input: SourceStream::new(text),
            options,
            contexts: ContextStack::new(),
            lexemes: vec![],
            diagnostics: vec![],
            last_code: None,
        };

        while lexer.input.advance().is_some() {
            lexer.process()?;
        }

        lexer.finish()?;

        debug!(
            "lexed {} lexemes with {} diagnostics",
            lexer.lexemes.len(),
            lexer.diagnostics.len()
        );

        Ok(lexer)
    }

    pub fn lexemes(&self) -> &[Lexeme] {
        &self.lexemes
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_lexemes(self) -> Lexemes {
        Lexemes::new(self.lexemes, self.diagnostics)
    }

    ///
    /// Dispatch on the character under the cursor.
    ///
    fn process(&mut self) -> Result<(), LexError> {
        let Some(ch) = self.input.current() else {
            return Ok(());
        };
        let position = self.input.position();

        if ch == '\n' {
            self.add(Lexeme::Newline(Newline::new(position)));
        } else if is_whitespace(&ch) {
            self.whitespace();
        } else if self.input.peek(BLOCK_COMMENT) {
            self.block_comment(position);
        } else if self.input.peek(LINE_COMMENT) {
            self.line_comment(position);
        } else if ch == ',' {
            self.add(Lexeme::Comma(Comma::new(position)));
        } else if ch == '=' {
            self.add(Lexeme::Mapping(Mapping::new(position)));
        } else {
            self.expression(ch, position)?;
        }

        Ok(())
    }

    ///
    /// A delimiter or a string, followed by the rest of its line
    /// up to the next terminator.
    ///
    fn expression(&mut self, ch: char, position: Position) -> Result<(), LexError> {
        match Token::delimiter(ch) {
            Some(token) if token.is_opening() => {
                self.add(Lexeme::Delimiter(Delimiter::new(position, token)));
                self.contexts.open(token.context(), position);

                // The container's contents follow directly.
                return Ok(());
            }
            Some(token) if token.is_closing() => {
                self.add(Lexeme::Delimiter(Delimiter::new(position, token)));

                if !self.contexts.close(token.context()) {
                    let kind = match token {
                        Token::ArrayEnd => ErrorKind::RbracketOutsideArray,
                        _ => ErrorKind::RbraceOutsideMap,
                    };

                    self.error(kind.at(position))?;
                }
            }
            _ if QUOTES.contains(&ch) => self.string(ch, position)?,
            _ => self.bare_string(ch, position),
        }

        self.separator(position)
    }

    ///
    /// After an expression only whitespace may come before a terminator,
    /// which is left for the next dispatch.
    ///
    /// Anything else is reported against the expression at `position`,
    /// then kept as a bare string running up to that terminator.
    ///
    fn separator(&mut self, position: Position) -> Result<(), LexError> {
        while let Some(ch) = self.input.advance() {
            if self.terminates() {
                self.input.previous();
                return Ok(());
            }

            if is_whitespace(&ch) {
                self.whitespace();
            } else {
                self.error(ErrorKind::NoSeparator.at(position))?;

                let rejected = self.input.position();
                self.bare_string(ch, rejected);
            }
        }

        Ok(())
    }

    ///
    /// Does the current character end an expression?
    ///
    fn terminates(&self) -> bool {
        self.input.peek(|ch: &char| TERMINATORS.contains(*ch))
            || self.input.peek(LINE_COMMENT)
            || self.input.peek(BLOCK_COMMENT)
    }

    ///
    /// Whitespace from the current character up to (excluding) the next
    /// newline or non-whitespace character.
    ///
    fn whitespace(&mut self) {
        let position = self.input.position();
        let mut text = String::new();

        if let Some(ch) = self.input.current() {
            text.push(ch);
        }

        text.push_str(&self.input.take_while(|ch| *ch != '\n' && is_whitespace(ch)));
        self.add(Lexeme::Whitespace(Whitespace::new(position, text)));
    }

    fn line_comment(&mut self, position: Position) {
        // Past the second `#`.
        self.input.skip(LINE_COMMENT.len() - 1);

        let mut inner = String::new();
        while let Some(ch) = self.input.advance() {
            if ch == '\n' {
                self.input.previous();
                break;
            }

            inner.push(ch);
        }

        self.add(Lexeme::Comment(Comment::line(position, inner)));
    }

    fn block_comment(&mut self, position: Position) {
        // Past the `*`.
        self.input.skip(BLOCK_COMMENT.len() - 1);

        let mut inner = String::new();
        let mut depth = 1usize;
        let mut terminated = false;

        while let Some(ch) = self.input.advance() {
            if self.input.peek(BLOCK_COMMENT) {
                self.input.skip(BLOCK_COMMENT.len() - 1);
                depth += 1;
                inner.push_str(BLOCK_COMMENT);
            } else if self.input.peek(BLOCK_COMMENT_END) {
                self.input.skip(BLOCK_COMMENT_END.len() - 1);
                depth -= 1;

                if depth == 0 {
                    terminated = true;
                    break;
                }

                inner.push_str(BLOCK_COMMENT_END);
            } else {
                inner.push(ch);
            }
        }

        if !terminated {
            debug!("{position}: block comment left open at end of input");
        }

        self.add(Lexeme::Comment(Comment::block(position, inner, terminated)));
    }

    ///
    /// Length of the run of `quote` starting at the current character,
    /// leaving the cursor on its last character.
    ///
    fn fence_length(&mut self, quote: char) -> usize {
        1 + self.input.take_while(|ch| *ch == quote).chars().count()
    }

    ///
    /// A string fenced by a run of N `quote`s, closed by the next run of exactly N.
    ///
    fn string(&mut self, quote: char, position: Position) -> Result<(), LexError> {
        let length = self.fence_length(quote);

        // Opening and closing fence are the same two characters.
        if length == 2 {
            self.add(Lexeme::String(LString::quoted(position, quote, "")));
            return Ok(());
        }

        let fence = quote.to_string().repeat(length);
        let mut content = String::new();

        while let Some(ch) = self.input.advance() {
            if ch != quote {
                content.push(ch);
                continue;
            }

            let run = self.fence_length(quote);
            if run == length {
                self.add(Lexeme::String(LString::quoted(position, fence, content)));
                return Ok(());
            }

            content.extend(std::iter::repeat(quote).take(run));
        }

        // Reported before the string is emitted, so it anchors on whatever precedes it.
        self.error(ErrorKind::UnclosedString.at(position))?;
        self.add(Lexeme::String(LString::unterminated(position, fence, content)));

        Ok(())
    }

    ///
    /// An unquoted string, running up to the next terminator.
    ///
    /// Whitespace inside it is kept; whitespace just before the
    /// terminator becomes a lexeme of its own.
    ///
    fn bare_string(&mut self, first: char, position: Position) {
        let mut content = String::from(first);
        let mut trailing: Option<usize> = None;

        while let Some(ch) = self.input.advance() {
            if self.terminates() {
                self.input.previous();
                break;
            }

            let Some(index) = self.input.index() else {
                break;
            };

            if is_whitespace(&ch) {
                trailing.get_or_insert(index);
            } else {
                if let Some(start) = trailing.take() {
                    content.push_str(&self.input.slice(start, index));
                }

                content.push(ch);
            }
        }

        self.add(Lexeme::String(LString::bare(position, content)));

        if let Some(start) = trailing {
            let end = self.input.index().map_or(start, |i| i + 1);
            self.add(Lexeme::Whitespace(Whitespace::new(
                self.input.position_of(start),
                self.input.slice(start, end),
            )));
        }
    }

    ///
    /// Every container still open at the end of input is unclosed.
    ///
    fn finish(&mut self) -> Result<(), LexError> {
        if self.contexts.depth() > 0 {
            debug!("{} containers left open at end of input", self.contexts.depth());
        }

        let unclosed = self.contexts.unclosed().collect::<Vec<_>>();

        for (context, opened) in unclosed {
            let kind = match context {
                Context::Map => ErrorKind::UnclosedMap,
                _ => ErrorKind::UnclosedArray,
            };

            self.error(kind.at(opened))?;
        }

        Ok(())
    }

    ///
    /// The retention gate: everything passes except source-only
    /// lexemes the options do not ask for.
    ///
    fn add(&mut self, lexeme: Lexeme) {
        let token = lexeme.token();
        let retain = if token.is_comment() {
            self.options.retain_comments
        } else if token.is_source_only() {
            self.options.retain_source
        } else {
            true
        };

        if !retain {
            return;
        }

        trace!("{} {token}", lexeme.position());

        if !token.is_source_only() {
            self.last_code = Some(self.lexemes.len());
        }

        self.lexemes.push(lexeme);
    }

    ///
    /// Abort with `error`, or attach it to the last code lexeme.
    ///
    fn error(&mut self, error: LexError) -> Result<(), LexError> {
        if self.options.aborts() {
            return Err(error);
        }

        let Some(lexeme) = self.last_code else {
            debug!("dropping `{error}`: no lexeme to attach it to");
            return Ok(());
        };

        if self.diagnostics.last().map(|d| d.lexeme) == Some(lexeme) {
            debug!("dropping `{error}`: lexeme {lexeme} already has a diagnostic");
            return Ok(());
        }

        self.diagnostics.push(Diagnostic { lexeme, error });
        Ok(())
    }
}

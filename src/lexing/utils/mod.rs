//!
//! Utilities for lexing.
//!

pub mod context;
pub mod result;
pub mod stream;

pub use self::{
    context::{Context, ContextStack},
    result::{Diagnostic, ErrorKind, LexError},
    stream::{Lookahead, SourceStream},
};

//!
//! Common utilities: positions and source files.
//!

pub mod file;
pub mod location;

pub use file::*;
pub use location::*;

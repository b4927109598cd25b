//! Filesystem layout and atomic I/O for command-kit
//!
//! Knows where commands, skills, and variants live on disk and provides
//! atomic write primitives so an interrupted install never leaves a
//! half-written file behind.

pub mod constants;
pub mod error;
pub mod io;
pub mod layout;

pub use error::{Error, Result};
pub use io::{list_markdown_files, read_text, write_atomic, write_text};
pub use layout::{Scope, resolve_destination};

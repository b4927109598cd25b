//! Directive expansion, frontmatter processing, and diffing for command-kit
//!
//! Provides the single-pass text transformations the installer is built
//! on: expanding `cmdkit:include` directives with feature-flag gating,
//! parsing and cleaning frontmatter header blocks, and comparing file
//! contents for conflict previews.

pub mod diff;
pub mod directive;
pub mod error;
pub mod expand;
pub mod frontmatter;

pub use diff::{TextComparison, compare, unified_diff};
pub use directive::{Directive, Segment, tokenize};
pub use error::{Error, Result};
pub use expand::{ExpandOptions, expand};
pub use frontmatter::{FieldValue, Frontmatter};

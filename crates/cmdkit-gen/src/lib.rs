//! File generation, template injection, and conflict detection for
//! command-kit
//!
//! The generator copies a variant's pre-built files into a destination,
//! applying optional filename prefixing, tool-permission injection, and
//! project customization injection. The conflict detector runs the same
//! pipeline without writing and compares against what already exists.

pub mod conflict;
pub mod error;
pub mod generate;
pub mod render;
pub mod request;
pub mod template;
pub mod tools;

pub use conflict::{ComparisonEntry, check};
pub use error::{Error, Result};
pub use generate::generate;
pub use render::{RenderOutcome, RenderedFile};
pub use request::{GenerateRequest, GenerationResult};
pub use template::{InstructionBlock, extract_blocks, find_template_file};

//! Project customization blocks
//!
//! A project may carry per-command instructions in a recognized file at
//! the repository root. Instruction blocks use paired HTML-comment
//! markers; each block optionally names the commands it applies to:
//!
//! ```text
//! <!-- cmdkit:instructions commands="commit,review" -->
//! Always reference the ticket number.
//! <!-- /cmdkit:instructions -->
//! ```
//!
//! An absent `commands` attribute means the block applies to every
//! generated command. Unlike corpus directives, these files are authored
//! by end users, so malformed blocks are skipped rather than fatal.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

use cmdkit_fs::constants::TEMPLATE_FILENAMES;

/// Pattern to match instruction block open markers and capture the
/// optional commands attribute
static INSTRUCTIONS_OPEN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<!--\s*cmdkit:instructions(?:\s+commands="([^"]*)")?\s*-->"#).unwrap()
});

const INSTRUCTIONS_CLOSE: &str = "<!-- /cmdkit:instructions -->";

/// One extracted instruction block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstructionBlock {
    /// Command names (without extension) this block applies to;
    /// `None` means all
    pub commands: Option<Vec<String>>,
    /// The block's interior text
    pub content: String,
}

impl InstructionBlock {
    /// Does this block apply to the given command name (file stem)?
    pub fn applies_to(&self, command: &str) -> bool {
        match &self.commands {
            None => true,
            Some(names) => names.iter().any(|n| n == command),
        }
    }
}

/// Find the project customization file in `cwd`, if any.
///
/// The recognized filenames are tried in fixed priority order; the first
/// one found wins.
pub fn find_template_file(cwd: &Path) -> Option<PathBuf> {
    TEMPLATE_FILENAMES
        .iter()
        .map(|name| cwd.join(name))
        .find(|path| path.is_file())
}

/// Extract all instruction blocks from a customization file's content,
/// in source order. Blocks without a close marker are skipped.
pub fn extract_blocks(source: &str) -> Vec<InstructionBlock> {
    let mut blocks = Vec::new();
    let mut cursor = 0;

    while let Some(cap) = INSTRUCTIONS_OPEN_PATTERN.captures(&source[cursor..]) {
        let open = cap.get(0).unwrap();
        let content_start = cursor + open.end();

        let commands = cap.get(1).map(|m| {
            m.as_str()
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect()
        });

        let Some(close_pos) = source[content_start..].find(INSTRUCTIONS_CLOSE) else {
            tracing::warn!("skipping unterminated instructions block");
            break;
        };
        let content_end = content_start + close_pos;

        blocks.push(InstructionBlock {
            commands,
            content: source[content_start..content_end].trim().to_string(),
        });

        cursor = content_end + INSTRUCTIONS_CLOSE.len();
    }

    blocks
}

/// Append every applicable block to a generated command's content, in
/// source order, separated by blank lines. Returns whether anything was
/// appended.
pub fn append_applicable(content: &mut String, blocks: &[InstructionBlock], command: &str) -> bool {
    let mut appended = false;
    for block in blocks {
        if !block.applies_to(command) || block.content.is_empty() {
            continue;
        }
        while !content.ends_with("\n\n") {
            content.push('\n');
        }
        content.push_str(&block.content);
        content.push('\n');
        appended = true;
    }
    appended
}

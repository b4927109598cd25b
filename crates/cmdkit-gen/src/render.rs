//! The shared rendering pipeline
//!
//! Selection, prefixing, tool injection, and template injection all
//! happen here, producing the exact bytes an install would write. The
//! generator writes them; the conflict detector compares them against
//! what already exists. Sharing one pipeline makes re-running with
//! unchanged inputs report identical files by construction.

use std::path::Path;

use cmdkit_fs::Scope;
use cmdkit_fs::constants::{SKILLS_DIR, SKILL_MANIFEST};

use crate::error::Result;
use crate::request::GenerateRequest;
use crate::template;
use crate::tools;

/// One prospective output file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    /// Path relative to the destination directory
    pub output_name: String,
    /// Exact content an install would write
    pub content: String,
}

/// Everything one render pass produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOutcome {
    pub files: Vec<RenderedFile>,
    /// Whether any customization block was actually appended
    pub template_injected: bool,
}

/// Does a requested subset entry select this filename? Accepts both
/// `commit` and `commit.md` spellings.
fn selects(subset: &[String], filename: &str) -> bool {
    subset
        .iter()
        .any(|c| c == filename || format!("{c}.md") == filename)
}

/// Run the full pipeline without writing anything.
pub fn render(request: &GenerateRequest<'_>, destination: &Path) -> Result<RenderOutcome> {
    let mut files = Vec::new();
    let mut template_injected = false;

    // Project customization never leaks into a user-global install.
    let inject_templates =
        !request.skip_template_injection && request.scope != Some(Scope::User);
    let blocks = if inject_templates {
        template::find_template_file(&request.cwd)
            .map(|path| cmdkit_fs::read_text(&path))
            .transpose()?
            .map(|source| template::extract_blocks(&source))
            .unwrap_or_default()
    } else {
        Vec::new()
    };

    // Metadata is only needed for tool-permission injection.
    let metadata = match &request.allowed_tools {
        Some(_) => Some(request.variant.metadata()?),
        None => None,
    };

    for filename in request.variant.command_files()? {
        if let Some(subset) = &request.commands {
            if !selects(subset, &filename) {
                continue;
            }
        }

        let output_name = format!("{}{}", request.prefix, filename);
        if request.skip.contains(&output_name) {
            continue;
        }
        if request.update_existing && !destination.join(&output_name).is_file() {
            continue;
        }

        let mut content = request.variant.read_command(&filename)?;

        if let (Some(allowed), Some(metadata)) = (&request.allowed_tools, &metadata) {
            if let Some(requested) = metadata
                .get(&filename)
                .and_then(|meta| meta.requested_tools.as_deref())
            {
                let (updated, _) = tools::inject_allowed_tools(&content, requested, allowed);
                content = updated;
            }
        }

        if !blocks.is_empty() {
            // Blocks are scoped by source command name, before prefixing.
            let stem = filename.strip_suffix(".md").unwrap_or(&filename);
            if template::append_applicable(&mut content, &blocks, stem) {
                template_injected = true;
            }
        }

        files.push(RenderedFile {
            output_name,
            content,
        });
    }

    for skill in request.variant.skills()? {
        if let Some(subset) = &request.skills {
            if !subset.contains(&skill) {
                continue;
            }
        }

        let output_name = format!("{SKILLS_DIR}/{skill}/{SKILL_MANIFEST}");
        if request.skip.contains(&output_name) {
            continue;
        }
        if request.update_existing && !destination.join(&output_name).is_file() {
            continue;
        }

        files.push(RenderedFile {
            output_name,
            content: request.variant.read_skill_manifest(&skill)?,
        });
    }

    Ok(RenderOutcome {
        files,
        template_injected,
    })
}

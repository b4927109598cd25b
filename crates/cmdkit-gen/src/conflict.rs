//! Conflict detection against pre-existing destination files
//!
//! Prospective content is computed through the exact pipeline the
//! generator writes with, so a re-run with unchanged inputs always
//! reports identical matches, and any change in flags, prefix, tool
//! list, or template content surfaces as a difference.

use cmdkit_fs::resolve_destination;
use cmdkit_content::diff;

use crate::error::Result;
use crate::render;
use crate::request::GenerateRequest;

/// One existing-file comparison, produced transiently for a single
/// conflict-check pass.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonEntry {
    /// Output path relative to the destination
    pub filename: String,
    /// Content currently on disk
    pub existing: String,
    /// Content an install would write
    pub proposed: String,
    /// Byte-for-byte equality
    pub identical: bool,
    /// Line-level similarity ratio, 1.0 when identical
    pub similarity: f64,
}

impl ComparisonEntry {
    /// Human-readable unified diff for review.
    pub fn diff(&self) -> String {
        diff::unified_diff(&self.existing, &self.proposed, &self.filename)
    }
}

/// Compare prospective outputs against files already present at the
/// destination. Files not yet present are unambiguously new and are not
/// reported. Performs no writes.
pub fn check(request: &GenerateRequest<'_>) -> Result<Vec<ComparisonEntry>> {
    let destination =
        resolve_destination(request.destination.as_deref(), request.scope, &request.cwd)?;
    let outcome = render::render(request, &destination)?;

    let mut entries = Vec::new();
    for file in outcome.files {
        let path = destination.join(&file.output_name);
        if !path.is_file() {
            continue;
        }

        let existing = cmdkit_fs::read_text(&path)?;
        let comparison = diff::compare(&existing, &file.content);
        entries.push(ComparisonEntry {
            filename: file.output_name,
            existing,
            proposed: file.content,
            identical: comparison.identical,
            similarity: comparison.similarity,
        });
    }

    Ok(entries)
}

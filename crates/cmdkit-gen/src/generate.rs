//! The generator: write rendered outputs to the destination

use cmdkit_fs::resolve_destination;

use crate::error::Result;
use crate::render;
use crate::request::{GenerateRequest, GenerationResult};

/// Install a variant's selected files into the resolved destination.
///
/// Files are written atomically, in order, creating directories as
/// needed. Each file is independent; a failure aborts the run with the
/// failing path attached.
pub fn generate(request: &GenerateRequest<'_>) -> Result<GenerationResult> {
    let destination =
        resolve_destination(request.destination.as_deref(), request.scope, &request.cwd)?;
    let outcome = render::render(request, &destination)?;

    for file in &outcome.files {
        let path = destination.join(&file.output_name);
        cmdkit_fs::write_text(&path, &file.content)?;
        tracing::debug!(file = %path.display(), "wrote");
    }

    tracing::info!(
        variant = request.variant.name(),
        files = outcome.files.len(),
        destination = %destination.display(),
        "generation complete"
    );

    Ok(GenerationResult {
        success: true,
        files_written: outcome.files.len(),
        variant: request.variant.name().to_string(),
        template_injected: outcome.template_injected,
    })
}

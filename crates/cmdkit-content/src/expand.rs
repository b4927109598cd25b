//! Fragment expansion with feature-flag gating
//!
//! Expands every `cmdkit:include` directive in a document into the
//! referenced fragment's contents. Each directive is resolved
//! independently, left to right. The function is pure apart from
//! fragment reads and never writes.
//!
//! Fragments must not themselves contain directives; expansion is a
//! single pass, enforced by the corpus, not re-checked here.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::directive::{Directive, Segment, tokenize};
use crate::error::{Error, Result};

/// The one supported transform name
const INCLUDE_TRANSFORM: &str = "include";

/// Inputs for one expansion pass, immutable for its duration.
#[derive(Debug)]
pub struct ExpandOptions<'a> {
    /// Enabled feature flags
    pub flags: &'a HashSet<String>,
    /// Base directory for resolving relative fragment paths
    pub base_dir: &'a Path,
}

/// Expand all transform directives in `document`.
///
/// A document with no directives is returned unchanged.
pub fn expand(document: &str, options: &ExpandOptions<'_>) -> Result<String> {
    let segments = tokenize(document)?;

    let mut output = String::with_capacity(document.len());
    for segment in segments {
        match segment {
            Segment::Literal(text) => output.push_str(text),
            Segment::Directive(directive) => {
                output.push_str(&resolve_directive(&directive, options)?);
            }
        }
    }

    Ok(output)
}

/// Resolve one directive to its substitution text.
fn resolve_directive(directive: &Directive, options: &ExpandOptions<'_>) -> Result<String> {
    if directive.name != INCLUDE_TRANSFORM {
        return Err(Error::UnknownTransform(directive.name.clone()));
    }

    // Flag gating: a missing feature flag short-circuits to the
    // alternate fragment (or nothing). Later attributes are not consulted.
    if let Some(flag) = directive.attr("featureFlag") {
        if !options.flags.contains(flag) {
            return match directive.attr("elsePath") {
                Some(else_path) => {
                    let full = options.base_dir.join(else_path);
                    fs::read_to_string(&full).map_err(|e| Error::ElseReadFailed {
                        path: full,
                        source: e,
                    })
                }
                None => Ok(String::new()),
            };
        }
    }

    // Exclusion gating: any listed flag being active suppresses inclusion.
    if let Some(unless) = directive.attr("unlessFlags") {
        let suppressed = unless
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .any(|name| options.flags.contains(name));
        if suppressed {
            return Ok(String::new());
        }
    }

    let path = directive
        .attr("path")
        .ok_or_else(|| Error::MissingPathAttribute {
            transform: directive.name.clone(),
        })?;
    let full = options.base_dir.join(path);
    fs::read_to_string(&full).map_err(|e| Error::ReadFailed {
        path: full,
        source: e,
    })
}

//! Variant builder
//!
//! Expands every command source through the fragment expander once per
//! built-in variant, strips internal frontmatter fields, copies skill
//! manifests, and writes the metadata sidecar. The catalog's
//! category-integrity check runs here and fails the build on a corpus
//! defect.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use colored::Colorize;

use cmdkit_content::{ExpandOptions, expand, frontmatter};
use cmdkit_fs::constants::{SKILLS_DIR, SKILL_MANIFEST};
use cmdkit_meta::BUILTIN_VARIANTS;

use crate::error::Result;

pub fn run_build(source: &Path, out: &Path) -> Result<()> {
    // Fails fast on an unknown category before anything is written.
    let catalog = cmdkit_meta::scan(source)?;
    let files = cmdkit_fs::list_markdown_files(source)?;
    let skills = list_source_skills(source)?;

    for spec in BUILTIN_VARIANTS {
        let flags: HashSet<String> = spec.flags.iter().map(|s| s.to_string()).collect();
        let options = ExpandOptions {
            flags: &flags,
            base_dir: source,
        };
        let variant_dir = out.join(spec.name);

        for filename in &files {
            let raw = cmdkit_fs::read_text(&source.join(filename))?;
            let expanded = expand(&raw, &options)?;
            let published = frontmatter::clean(&expanded);
            cmdkit_fs::write_text(&variant_dir.join(filename), &published)?;
        }

        for skill in &skills {
            let manifest_path = source.join(SKILLS_DIR).join(skill).join(SKILL_MANIFEST);
            let raw = cmdkit_fs::read_text(&manifest_path)?;
            let expanded = expand(&raw, &options)?;
            let published = frontmatter::clean(&expanded);
            cmdkit_fs::write_text(
                &variant_dir.join(SKILLS_DIR).join(skill).join(SKILL_MANIFEST),
                &published,
            )?;
        }

        cmdkit_meta::write_sidecar(&variant_dir, &catalog)?;

        println!(
            "{} Built variant {} ({} command(s), {} skill(s)).",
            "OK".green().bold(),
            spec.name.cyan(),
            files.len(),
            skills.len()
        );
    }

    Ok(())
}

/// Skill names under the source tree: subdirectories of `skills/` with a
/// manifest file.
fn list_source_skills(source: &Path) -> Result<Vec<String>> {
    let skills_dir = source.join(SKILLS_DIR);
    let mut names = Vec::new();

    if !skills_dir.is_dir() {
        return Ok(names);
    }

    let entries = fs::read_dir(&skills_dir).map_err(|e| cmdkit_fs::Error::io(&skills_dir, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| cmdkit_fs::Error::io(&skills_dir, e))?;
        let path = entry.path();
        if path.is_dir() && path.join(SKILL_MANIFEST).is_file() {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
    }

    names.sort();
    Ok(names)
}

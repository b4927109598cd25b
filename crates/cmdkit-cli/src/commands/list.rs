//! Catalog listing

use std::path::Path;

use colored::Colorize;

use cmdkit_meta::Variant;

use crate::error::Result;

/// Print a variant's commands grouped by category, in the catalog's
/// deterministic presentation order.
pub fn run_list(variants_root: &Path, name: &str) -> Result<()> {
    let variant = Variant::open(variants_root, name)?;
    let metadata = variant.metadata()?;
    let groups = cmdkit_meta::group(&metadata);

    println!(
        "{} Commands in variant {}:",
        "=>".blue().bold(),
        name.cyan()
    );

    for group in &groups {
        println!();
        println!("  {}", group.category.label().bold());
        for (filename, meta) in &group.entries {
            let marker = if meta.default_selected { "*" } else { " " };
            println!(
                "   {} {} {}",
                marker,
                filename.cyan(),
                format!("- {}", meta.description).dimmed()
            );
        }
    }

    let skills = variant.skills()?;
    if !skills.is_empty() {
        println!();
        println!("  {}", "Skills".bold());
        for skill in &skills {
            println!("     {}", skill.cyan());
        }
    }

    println!();
    println!(
        "{} {} command(s), {} skill(s). Preselected entries are marked with *.",
        "OK".green().bold(),
        metadata.len(),
        skills.len()
    );

    Ok(())
}

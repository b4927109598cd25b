//! Interactive prompts for the install flow
//!
//! Uses dialoguer for terminal-based selection. Every prompt goes
//! through `interact_opt`, so backing out (Esc) surfaces as a clean
//! cancellation before anything is written.

use colored::Colorize;
use dialoguer::{Confirm, Input, MultiSelect, Select};

use cmdkit_fs::Scope;
use cmdkit_gen::ComparisonEntry;
use cmdkit_meta::{BUILTIN_VARIANTS, CatalogGroup};

use crate::error::{CliError, Result};

/// Outcome of one per-file conflict prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictChoice {
    Overwrite,
    Skip,
}

/// Prompt for the variant to install from.
pub fn select_variant() -> Result<String> {
    let names: Vec<&str> = BUILTIN_VARIANTS.iter().map(|v| v.name).collect();
    let idx = Select::new()
        .with_prompt("Variant")
        .items(&names)
        .default(0)
        .interact_opt()?
        .ok_or(CliError::Cancelled)?;
    Ok(names[idx].to_string())
}

/// Prompt for the install scope.
pub fn select_scope() -> Result<Scope> {
    let items = &["project (./.agents/commands)", "user (~/.agents/commands)"];
    let idx = Select::new()
        .with_prompt("Install scope")
        .items(items)
        .default(0)
        .interact_opt()?
        .ok_or(CliError::Cancelled)?;
    Ok(if idx == 0 { Scope::Project } else { Scope::User })
}

/// Prompt for the filename prefix; empty means none.
pub fn input_prefix() -> Result<String> {
    let prefix: String = Input::new()
        .with_prompt("Filename prefix (empty for none)")
        .allow_empty(true)
        .interact_text()?;
    Ok(prefix)
}

/// Prompt for the commands to install, grouped by category with
/// default-selected entries prechecked. Returns the chosen filenames.
pub fn select_commands(groups: &[CatalogGroup]) -> Result<Vec<String>> {
    let mut items = Vec::new();
    let mut names = Vec::new();
    let mut defaults = Vec::new();

    for group in groups {
        for (name, meta) in &group.entries {
            items.push(format!(
                "[{}] {} - {}",
                group.category.label(),
                name,
                meta.description
            ));
            names.push(name.clone());
            defaults.push(meta.default_selected);
        }
    }

    if items.is_empty() {
        return Ok(Vec::new());
    }

    let indices = MultiSelect::new()
        .with_prompt("Select commands (space to toggle, enter to confirm)")
        .items(&items)
        .defaults(&defaults)
        .interact_opt()?
        .ok_or(CliError::Cancelled)?;

    Ok(indices.into_iter().map(|i| names[i].clone()).collect())
}

/// Prompt for the skills to install.
pub fn select_skills(available: &[String]) -> Result<Vec<String>> {
    if available.is_empty() {
        return Ok(Vec::new());
    }

    let defaults = vec![true; available.len()];
    let indices = MultiSelect::new()
        .with_prompt("Select skills (space to toggle, enter to confirm)")
        .items(available)
        .defaults(&defaults)
        .interact_opt()?
        .ok_or(CliError::Cancelled)?;

    Ok(indices.into_iter().map(|i| available[i].clone()).collect())
}

/// Prompt to resolve one differing file, with an inline diff preview
/// option. Declining is a normal skip outcome, not an error.
pub fn resolve_conflict(entry: &ComparisonEntry) -> Result<ConflictChoice> {
    println!(
        "{} {} differs from the proposed content ({:.0}% similar).",
        "WARN".yellow().bold(),
        entry.filename.cyan(),
        entry.similarity * 100.0
    );

    loop {
        let idx = Select::new()
            .with_prompt(format!("How to handle {}?", entry.filename))
            .items(&["Overwrite", "Skip", "Show diff"])
            .default(1)
            .interact_opt()?
            .ok_or(CliError::Cancelled)?;

        match idx {
            0 => return Ok(ConflictChoice::Overwrite),
            1 => return Ok(ConflictChoice::Skip),
            _ => {
                println!();
                println!("{}", entry.diff());
            }
        }
    }
}

/// Show the install summary and ask for final confirmation.
pub fn confirm_install(
    variant: &str,
    scope_label: &str,
    prefix: &str,
    command_count: usize,
    skill_count: usize,
) -> Result<()> {
    println!();
    println!("{}", "Summary:".bold());
    println!("  {}: {}", "Variant".dimmed(), variant.cyan());
    println!("  {}: {}", "Scope".dimmed(), scope_label.cyan());
    if prefix.is_empty() {
        println!("  {}: {}", "Prefix".dimmed(), "(none)".dimmed());
    } else {
        println!("  {}: {}", "Prefix".dimmed(), prefix.cyan());
    }
    println!("  {}: {}", "Commands".dimmed(), command_count.to_string().cyan());
    println!("  {}: {}", "Skills".dimmed(), skill_count.to_string().cyan());
    println!();

    let proceed = Confirm::new()
        .with_prompt("Proceed?")
        .default(true)
        .interact_opt()?
        .ok_or(CliError::Cancelled)?;

    if !proceed {
        return Err(CliError::Cancelled);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_variants_available_for_selection() {
        let names: Vec<&str> = BUILTIN_VARIANTS.iter().map(|v| v.name).collect();
        assert!(names.contains(&"with-beads"));
        assert!(names.contains(&"without-beads"));
    }

    #[test]
    fn test_conflict_choice_values() {
        assert_ne!(ConflictChoice::Overwrite, ConflictChoice::Skip);
    }
}

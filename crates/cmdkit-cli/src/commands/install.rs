//! The install driver
//!
//! Resolves every input either from CLI flags or from interactive
//! prompts, runs the conflict check, gathers per-file resolutions into
//! the skip-list, and hands the generator one fully explicit request.
//! All prompting happens before the first write, so cancellation at any
//! point leaves the filesystem untouched.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use colored::Colorize;

use cmdkit_fs::Scope;
use cmdkit_gen::{GenerateRequest, check, generate};
use cmdkit_meta::Variant;

use crate::cli::InstallArgs;
use crate::error::{CliError, Result};
use crate::interactive::{self, ConflictChoice};

pub fn run_install(cwd: &Path, args: &InstallArgs) -> Result<()> {
    // Non-interactive mode activates only when variant, scope, and
    // prefix are all explicitly supplied. An explicit destination
    // stands in for scope.
    let variant_explicit = args.variant.is_some() || args.flags.is_some();
    let scope_satisfied = args.scope.is_some() || args.destination.is_some();
    let non_interactive = variant_explicit && scope_satisfied && args.prefix.is_some();

    let variant_name = resolve_variant_name(args)?;
    let variants_root = absolutize(&args.variants_dir, cwd);
    let variant = Variant::open(&variants_root, &variant_name)?;

    let scope = match &args.scope {
        Some(s) => Some(Scope::parse(s).ok_or_else(|| {
            CliError::user(format!("Unknown scope '{s}' (expected project or user)"))
        })?),
        None if args.destination.is_some() => None,
        None => Some(interactive::select_scope()?),
    };

    let prefix = match &args.prefix {
        Some(p) => p.clone(),
        None => interactive::input_prefix()?,
    };

    let commands = match &args.commands {
        Some(c) => Some(c.clone()),
        None if non_interactive => None,
        None => {
            let metadata = variant.metadata()?;
            let groups = cmdkit_meta::group(&metadata);
            Some(interactive::select_commands(&groups)?)
        }
    };

    let skills = match &args.skills {
        Some(s) => Some(s.clone()),
        None if non_interactive => None,
        None => Some(interactive::select_skills(&variant.skills()?)?),
    };

    if !non_interactive {
        let command_count = match &commands {
            Some(c) => c.len(),
            None => variant.command_files()?.len(),
        };
        let skill_count = match &skills {
            Some(s) => s.len(),
            None => variant.skills()?.len(),
        };
        let scope_label = scope.map(|s| s.as_str()).unwrap_or("explicit path");
        interactive::confirm_install(
            &variant_name,
            scope_label,
            &prefix,
            command_count,
            skill_count,
        )?;
    }

    let mut request = GenerateRequest::new(&variant, cwd.to_path_buf());
    request.destination = args.destination.as_ref().map(|d| absolutize(d, cwd));
    request.scope = scope;
    request.prefix = prefix;
    request.commands = commands;
    request.skills = skills;
    request.update_existing = args.update_existing;
    request.allowed_tools = args.allowed_tools.clone();
    request.skip_template_injection = args.skip_template_injection;

    request.skip = resolve_conflicts(&request, args, non_interactive)?;

    let result = generate(&request)?;

    println!(
        "{} Installed {} file(s) from variant {}.",
        "OK".green().bold(),
        result.files_written,
        result.variant.cyan()
    );
    if result.template_injected {
        println!(
            "{} Project customization blocks were appended.",
            "=>".blue().bold()
        );
    }

    Ok(())
}

/// Pick the variant name from --variant, or from --flags by exact
/// flag-set match, or by prompting.
fn resolve_variant_name(args: &InstallArgs) -> Result<String> {
    if let Some(name) = &args.variant {
        return Ok(name.clone());
    }
    if let Some(flags) = &args.flags {
        let set: HashSet<String> = flags.iter().cloned().collect();
        let spec = cmdkit_meta::variant_for_flags(&set).ok_or_else(|| {
            CliError::user(format!(
                "No variant matches flags: {}",
                flags.join(", ")
            ))
        })?;
        return Ok(spec.name.to_string());
    }
    interactive::select_variant()
}

/// Run the conflict check and turn the outcome into the skip-list.
///
/// Identical files are skipped silently (rewriting them would be a
/// no-op). Differing files follow --overwrite / --skip-on-conflict, a
/// per-file prompt when interactive, or fail the run listing the
/// conflicts.
fn resolve_conflicts(
    request: &GenerateRequest<'_>,
    args: &InstallArgs,
    non_interactive: bool,
) -> Result<Vec<String>> {
    let entries = check(request)?;

    let mut skip = Vec::new();
    let mut conflicts = Vec::new();
    for entry in entries {
        if entry.identical {
            tracing::debug!(file = %entry.filename, "already up to date");
            skip.push(entry.filename);
        } else {
            conflicts.push(entry);
        }
    }

    if conflicts.is_empty() || args.overwrite {
        return Ok(skip);
    }

    if args.skip_on_conflict {
        skip.extend(conflicts.into_iter().map(|e| e.filename));
        return Ok(skip);
    }

    if non_interactive {
        let names: Vec<String> = conflicts.into_iter().map(|e| e.filename).collect();
        return Err(CliError::user(format!(
            "{} file(s) differ at the destination: {}. \
             Pass --overwrite or --skip-on-conflict.",
            names.len(),
            names.join(", ")
        )));
    }

    for entry in conflicts {
        match interactive::resolve_conflict(&entry)? {
            ConflictChoice::Overwrite => {}
            ConflictChoice::Skip => skip.push(entry.filename),
        }
    }

    Ok(skip)
}

fn absolutize(path: &Path, cwd: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}

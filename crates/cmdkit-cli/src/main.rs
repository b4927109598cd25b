//! command-kit CLI
//!
//! Installs curated Markdown command files (and derived skills) into a
//! project-local or user-global directory, with conflict detection
//! against anything already there.

mod cli;
mod commands;
mod error;
mod interactive;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use error::{CliError, Result};

fn main() {
    match run() {
        Ok(()) => {}
        // Backing out of a prompt is a clean exit, not a failure.
        Err(CliError::Cancelled) => {
            println!("Cancelled. Nothing was written.");
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            std::process::exit(1);
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    let cwd = std::env::current_dir()?;

    match cli.command {
        Some(Commands::Build { source, out }) => commands::run_build(&source, &out),
        Some(Commands::List {
            variant,
            variants_dir,
        }) => {
            let root = if variants_dir.is_absolute() {
                variants_dir
            } else {
                cwd.join(variants_dir)
            };
            commands::run_list(&root, &variant)
        }
        None => commands::run_install(&cwd, &cli.install),
    }
}

//! CLI argument parsing using clap derive
//!
//! Installation is flag-driven on the top-level command; `build` and
//! `list` are subcommands. Non-interactive installation activates only
//! when `--variant`, `--scope`, and `--prefix` are all explicitly
//! supplied; anything missing is prompted for.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// command-kit - Install curated command files with templating and
/// conflict detection
#[derive(Parser, Debug)]
#[command(name = "cmdkit")]
#[command(author, version, about, long_about = None)]
#[command(disable_version_flag = true)]
pub struct Cli {
    /// Print version information
    #[arg(short = 'v', long = "version", action = clap::ArgAction::Version)]
    version: Option<bool>,

    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// The subcommand to run; without one, install
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub install: InstallArgs,
}

/// Installation flags (the default, subcommand-less invocation)
#[derive(Args, Debug, Clone)]
pub struct InstallArgs {
    /// Pre-built variant to install from (with-beads or without-beads)
    #[arg(long)]
    pub variant: Option<String>,

    /// Install scope (project or user)
    #[arg(long)]
    pub scope: Option<String>,

    /// Filename prefix prepended to installed command files
    #[arg(long)]
    pub prefix: Option<String>,

    /// Explicit destination directory; wins over --scope
    #[arg(long)]
    pub destination: Option<PathBuf>,

    /// Commands to install (comma-separated; default all)
    #[arg(long, value_delimiter = ',')]
    pub commands: Option<Vec<String>>,

    /// Skills to install (comma-separated; default all)
    #[arg(long, value_delimiter = ',')]
    pub skills: Option<Vec<String>>,

    /// Tools the user permits; enables tool-permission injection
    #[arg(long = "allowed-tools", value_delimiter = ',')]
    pub allowed_tools: Option<Vec<String>>,

    /// Feature flags; selects the matching variant when --variant is absent
    #[arg(long, value_delimiter = ',')]
    pub flags: Option<Vec<String>>,

    /// Do not append project customization blocks
    #[arg(long)]
    pub skip_template_injection: bool,

    /// Only refresh files already present at the destination
    #[arg(long)]
    pub update_existing: bool,

    /// Overwrite differing files without asking
    #[arg(long)]
    pub overwrite: bool,

    /// Skip differing files without asking
    #[arg(long)]
    pub skip_on_conflict: bool,

    /// Root directory holding the pre-built variants
    #[arg(long, default_value = cmdkit_fs::constants::DEFAULT_VARIANTS_DIR)]
    pub variants_dir: PathBuf,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Build the pre-expanded variant sets from command sources
    ///
    /// Expands every source through the fragment expander once per
    /// built-in variant, strips internal frontmatter fields, and writes
    /// the metadata sidecar.
    Build {
        /// Directory of command sources (frontmatter + directives)
        #[arg(long)]
        source: PathBuf,

        /// Output directory; one subdirectory per variant
        #[arg(long)]
        out: PathBuf,
    },

    /// List a variant's commands grouped by category
    List {
        /// Variant to list
        #[arg(long, default_value = "without-beads")]
        variant: String,

        /// Root directory holding the pre-built variants
        #[arg(long, default_value = cmdkit_fs::constants::DEFAULT_VARIANTS_DIR)]
        variants_dir: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parses() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_install_flags() {
        let cli = Cli::parse_from([
            "cmdkit",
            "--variant=with-beads",
            "--scope=project",
            "--prefix=my-",
            "--commands=commit,red",
            "--overwrite",
        ]);
        assert_eq!(cli.install.variant.as_deref(), Some("with-beads"));
        assert_eq!(cli.install.scope.as_deref(), Some("project"));
        assert_eq!(cli.install.prefix.as_deref(), Some("my-"));
        assert_eq!(
            cli.install.commands,
            Some(vec!["commit".to_string(), "red".to_string()])
        );
        assert!(cli.install.overwrite);
        assert!(!cli.install.skip_on_conflict);
    }

    #[test]
    fn test_empty_prefix_is_explicit() {
        let cli = Cli::parse_from(["cmdkit", "--prefix="]);
        assert_eq!(cli.install.prefix.as_deref(), Some(""));
    }

    #[test]
    fn test_build_subcommand() {
        let cli = Cli::parse_from(["cmdkit", "build", "--source=src", "--out=variants"]);
        assert!(matches!(cli.command, Some(Commands::Build { .. })));
    }
}

//! Fixed names for the on-disk layout
//!
//! Every directory and file name the tool reads or writes lives here so
//! the layout has a single home.

/// Install destination relative to the scope root (cwd or home).
pub const COMMANDS_DIR: &str = ".agents/commands";

/// Skills subdirectory inside an install destination or a variant.
pub const SKILLS_DIR: &str = "skills";

/// Fixed manifest filename inside each skill directory.
pub const SKILL_MANIFEST: &str = "SKILL.md";

/// JSON metadata sidecar inside each pre-built variant.
pub const METADATA_SIDECAR: &str = "metadata.json";

/// Project customization files searched in the current directory,
/// in priority order. The first one found wins.
pub const TEMPLATE_FILENAMES: &[&str] = &["AGENTS.md", "INSTRUCTIONS.md"];

/// Default variants root relative to the current directory.
pub const DEFAULT_VARIANTS_DIR: &str = "variants";

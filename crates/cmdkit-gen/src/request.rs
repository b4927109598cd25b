//! Generation request and result types
//!
//! Everything the generator and the conflict detector consume is carried
//! explicitly in the request; there is no process-wide state, so both
//! stay referentially transparent and independently testable.

use std::path::PathBuf;

use cmdkit_fs::Scope;
use cmdkit_meta::Variant;

/// One generator (or conflict-check) invocation's inputs.
#[derive(Debug)]
pub struct GenerateRequest<'a> {
    /// The pre-built output set to install from
    pub variant: &'a Variant,

    /// Explicit destination directory; wins over `scope`
    pub destination: Option<PathBuf>,

    /// Install scope when no explicit destination is given
    pub scope: Option<Scope>,

    /// Current working directory, passed explicitly for testability.
    /// Used for project-scope resolution and template discovery.
    pub cwd: PathBuf,

    /// Filename prefix prepended to each installed command file;
    /// empty means none
    pub prefix: String,

    /// Narrow installation to these command files; `None` installs all
    pub commands: Option<Vec<String>>,

    /// Narrow installation to these skills; `None` installs all
    pub skills: Option<Vec<String>>,

    /// Output filenames to skip, honoring conflict-resolution choices
    pub skip: Vec<String>,

    /// Only write files that already exist at the destination
    pub update_existing: bool,

    /// Tool names the user permits; enables tool-permission injection
    pub allowed_tools: Option<Vec<String>>,

    /// Suppress project customization injection
    pub skip_template_injection: bool,
}

impl<'a> GenerateRequest<'a> {
    /// A request with defaults for everything but the variant and cwd.
    pub fn new(variant: &'a Variant, cwd: PathBuf) -> Self {
        Self {
            variant,
            destination: None,
            scope: None,
            cwd,
            prefix: String::new(),
            commands: None,
            skills: None,
            skip: Vec::new(),
            update_existing: false,
            allowed_tools: None,
            skip_template_injection: false,
        }
    }
}

/// Outcome of one generator invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationResult {
    pub success: bool,
    /// Count of files written
    pub files_written: usize,
    /// Which variant was used
    pub variant: String,
    /// Whether customization injection actually appended content.
    /// "No template file", "no applicable blocks", and "skipped by
    /// scope/flag" all surface as `false`.
    pub template_injected: bool,
}

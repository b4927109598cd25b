//! Install scope and destination resolution

use std::path::{Path, PathBuf};

use crate::constants::COMMANDS_DIR;
use crate::{Error, Result};

/// Installation target: project-local vs. user-global.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Install under the current working directory
    Project,
    /// Install under the user's home directory
    User,
}

impl Scope {
    /// Parse a scope name as given on the command line.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "project" => Some(Self::Project),
            "user" => Some(Self::User),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Project => "project",
            Self::User => "user",
        }
    }
}

impl std::fmt::Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Resolve the effective install destination.
///
/// An explicit path always wins. Otherwise the scope picks the root:
/// project scope resolves under `cwd`, user scope under the home
/// directory. With neither an explicit path nor a scope this is a
/// configuration error.
pub fn resolve_destination(
    explicit: Option<&Path>,
    scope: Option<Scope>,
    cwd: &Path,
) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }

    match scope {
        Some(Scope::Project) => Ok(cwd.join(COMMANDS_DIR)),
        Some(Scope::User) => {
            let home = dirs::home_dir().ok_or(Error::NoHomeDirectory)?;
            Ok(home.join(COMMANDS_DIR))
        }
        None => Err(Error::MissingDestination),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_parse() {
        assert_eq!(Scope::parse("project"), Some(Scope::Project));
        assert_eq!(Scope::parse("user"), Some(Scope::User));
        assert_eq!(Scope::parse("global"), None);
    }

    #[test]
    fn test_explicit_path_wins() {
        let dest = resolve_destination(
            Some(Path::new("/tmp/explicit")),
            Some(Scope::Project),
            Path::new("/work"),
        )
        .unwrap();
        assert_eq!(dest, PathBuf::from("/tmp/explicit"));
    }

    #[test]
    fn test_project_scope_under_cwd() {
        let dest = resolve_destination(None, Some(Scope::Project), Path::new("/work")).unwrap();
        assert_eq!(dest, Path::new("/work").join(COMMANDS_DIR));
    }

    #[test]
    fn test_user_scope_under_home() {
        let dest = resolve_destination(None, Some(Scope::User), Path::new("/work")).unwrap();
        let home = dirs::home_dir().unwrap();
        assert_eq!(dest, home.join(COMMANDS_DIR));
    }

    #[test]
    fn test_missing_destination_is_config_error() {
        let err = resolve_destination(None, None, Path::new("/work")).unwrap_err();
        assert!(matches!(err, Error::MissingDestination));
    }
}

//! Pre-built variants
//!
//! A variant is a named, pre-generated output set for one fixed feature
//! flag combination. Variants are built ahead of time by `cmdkit build`;
//! the installer reads from them rather than re-expanding at install
//! time. A `Variant` is an explicitly passed, read-only input everywhere
//! below the CLI.

use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

use cmdkit_fs::constants::{METADATA_SIDECAR, SKILLS_DIR, SKILL_MANIFEST};

use crate::catalog;
use crate::error::{Error, Result};
use crate::schema::CommandMeta;

/// A built-in variant definition: name plus its fixed flag set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantSpec {
    pub name: &'static str,
    pub flags: &'static [&'static str],
}

/// The variants this tool ships.
pub const BUILTIN_VARIANTS: &[VariantSpec] = &[
    VariantSpec {
        name: "with-beads",
        flags: &["beads"],
    },
    VariantSpec {
        name: "without-beads",
        flags: &[],
    },
];

/// Look up a built-in variant by name.
pub fn builtin_variant(name: &str) -> Option<&'static VariantSpec> {
    BUILTIN_VARIANTS.iter().find(|v| v.name == name)
}

/// Find the built-in variant whose flag set equals `flags`.
pub fn variant_for_flags(flags: &HashSet<String>) -> Option<&'static VariantSpec> {
    BUILTIN_VARIANTS.iter().find(|v| {
        v.flags.len() == flags.len() && v.flags.iter().all(|f| flags.contains(*f))
    })
}

/// One pre-built variant rooted at a directory on disk.
#[derive(Debug, Clone)]
pub struct Variant {
    name: String,
    root: PathBuf,
}

impl Variant {
    /// Open a variant under the given variants root.
    pub fn open(variants_root: &Path, name: &str) -> Result<Self> {
        let root = variants_root.join(name);
        if !root.is_dir() {
            return Err(Error::VariantNotFound {
                name: name.to_string(),
                root: variants_root.to_path_buf(),
            });
        }
        Ok(Self {
            name: name.to_string(),
            root,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// List this variant's command files, sorted by name.
    pub fn command_files(&self) -> Result<Vec<String>> {
        Ok(cmdkit_fs::list_markdown_files(&self.root)?)
    }

    /// Read one command file's full content.
    pub fn read_command(&self, filename: &str) -> Result<String> {
        Ok(cmdkit_fs::read_text(&self.root.join(filename))?)
    }

    /// Load per-file metadata, preferring the JSON sidecar and falling
    /// back to a fresh frontmatter scan when no sidecar exists.
    pub fn metadata(&self) -> Result<BTreeMap<String, CommandMeta>> {
        let sidecar = self.root.join(METADATA_SIDECAR);
        if sidecar.is_file() {
            let raw = cmdkit_fs::read_text(&sidecar)?;
            return serde_json::from_str(&raw).map_err(|e| Error::SidecarParse {
                path: sidecar,
                source: e,
            });
        }

        tracing::debug!(variant = %self.name, "no metadata sidecar, scanning frontmatter");
        catalog::scan(&self.root)
    }

    /// List this variant's skill names: subdirectories of `skills/` that
    /// contain the fixed-name manifest.
    pub fn skills(&self) -> Result<Vec<String>> {
        let skills_dir = self.root.join(SKILLS_DIR);
        let mut names = Vec::new();

        if !skills_dir.is_dir() {
            return Ok(names);
        }

        let entries =
            fs::read_dir(&skills_dir).map_err(|e| cmdkit_fs::Error::io(&skills_dir, e))?;
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

    /// Read a skill's manifest content.
    pub fn read_skill_manifest(&self, skill: &str) -> Result<String> {
        let path = self.root.join(SKILLS_DIR).join(skill).join(SKILL_MANIFEST);
        Ok(cmdkit_fs::read_text(&path)?)
    }
}

/// Write a variant's metadata sidecar.
pub fn write_sidecar(variant_root: &Path, catalog: &BTreeMap<String, CommandMeta>) -> Result<()> {
    let path = variant_root.join(METADATA_SIDECAR);
    let json = serde_json::to_string_pretty(catalog).map_err(|e| Error::SidecarParse {
        path: path.clone(),
        source: e,
    })?;
    cmdkit_fs::write_text(&path, &json)?;
    Ok(())
}

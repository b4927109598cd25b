//! Atomic I/O operations with file locking

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

use fs2::FileExt;

use crate::{Error, Result};

/// Per-process sequence so concurrent callers never share a temp path.
static TEMP_SEQ: AtomicU64 = AtomicU64::new(0);

/// Write content atomically to a file with locking.
///
/// Uses write-to-temp-then-rename strategy to prevent partial writes;
/// the temp name is unique per call, so the rename always installs a
/// complete payload even under concurrent writers. An advisory lock on
/// the destination serializes cooperating writers of the same path.
pub fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    let guard = OpenOptions::new()
        .write(true)
        .create(true)
        .open(path)
        .map_err(|e| Error::io(path, e))?;
    guard.lock_exclusive().map_err(|_| Error::LockFailed {
        path: path.to_path_buf(),
    })?;

    // Temp file in the same directory (ensures same filesystem)
    let temp_name = format!(
        ".{}.{}.{}.tmp",
        path.file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default(),
        std::process::id(),
        TEMP_SEQ.fetch_add(1, Ordering::Relaxed)
    );
    let temp_path = path.with_file_name(&temp_name);

    let mut temp_file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&temp_path)
        .map_err(|e| Error::io(&temp_path, e))?;

    temp_file
        .write_all(content)
        .map_err(|e| Error::io(&temp_path, e))?;

    temp_file
        .sync_all()
        .map_err(|e| Error::io(&temp_path, e))?;

    fs::rename(&temp_path, path).map_err(|e| Error::io(path, e))?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "atomic write");

    guard.unlock().map_err(|_| Error::LockFailed {
        path: path.to_path_buf(),
    })?;

    Ok(())
}

/// Read text content from a file, attaching the path to any failure.
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::io(path, e))
}

/// Write text content to a file atomically.
pub fn write_text(path: &Path, content: &str) -> Result<()> {
    write_atomic(path, content.as_bytes())
}

/// List the Markdown files directly inside a directory, sorted by name.
///
/// Subdirectories and non-`.md` entries are ignored. A missing directory
/// yields an empty list rather than an error.
pub fn list_markdown_files(dir: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();

    if !dir.is_dir() {
        return Ok(names);
    }

    let entries = fs::read_dir(dir).map_err(|e| Error::io(dir, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| Error::io(dir, e))?;
        let path = entry.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "md") {
            if let Some(name) = path.file_name() {
                names.push(name.to_string_lossy().into_owned());
            }
        }
    }

    // Deterministic output independent of readdir order
    names.sort();
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_atomic_creates_parents() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a/b/c.md");
        write_atomic(&path, b"hello").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "hello");
    }

    #[test]
    fn test_write_atomic_overwrites() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("f.md");
        write_atomic(&path, b"one").unwrap();
        write_atomic(&path, b"two").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "two");
    }

    #[test]
    fn test_write_atomic_leaves_no_temp_files() {
        let temp = TempDir::new().unwrap();
        write_atomic(&temp.path().join("f.md"), b"x").unwrap();
        let leftovers: Vec<_> = fs::read_dir(temp.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
            .collect();
        assert!(leftovers.is_empty());
    }

    #[test]
    fn test_read_text_missing_file_names_path() {
        let err = read_text(std::path::Path::new("/nonexistent/file.md")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/file.md"));
    }

    #[test]
    fn test_list_markdown_files_sorted() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("zeta.md"), "z").unwrap();
        fs::write(temp.path().join("alpha.md"), "a").unwrap();
        fs::write(temp.path().join("notes.txt"), "skip").unwrap();
        fs::create_dir(temp.path().join("sub.md")).unwrap();

        let names = list_markdown_files(temp.path()).unwrap();
        assert_eq!(names, vec!["alpha.md", "zeta.md"]);
    }

    #[test]
    fn test_list_markdown_files_missing_dir() {
        let names = list_markdown_files(std::path::Path::new("/nonexistent/dir")).unwrap();
        assert!(names.is_empty());
    }
}

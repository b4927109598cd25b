//! Text comparison for conflict previews

use similar::TextDiff;

/// Result of comparing an existing file against its proposed replacement
#[derive(Debug, Clone, PartialEq)]
pub struct TextComparison {
    /// Byte-for-byte equality
    pub identical: bool,
    /// Similarity ratio (0.0 to 1.0)
    pub similarity: f64,
}

/// Compare two text contents.
pub fn compare(existing: &str, proposed: &str) -> TextComparison {
    if existing == proposed {
        return TextComparison {
            identical: true,
            similarity: 1.0,
        };
    }

    let diff = TextDiff::from_lines(existing, proposed);
    TextComparison {
        identical: false,
        similarity: diff.ratio() as f64,
    }
}

/// Render a human-readable unified diff between existing and proposed
/// content, labeled with the file name.
pub fn unified_diff(existing: &str, proposed: &str, name: &str) -> String {
    TextDiff::from_lines(existing, proposed)
        .unified_diff()
        .context_radius(3)
        .header(&format!("existing/{name}"), &format!("proposed/{name}"))
        .to_string()
}

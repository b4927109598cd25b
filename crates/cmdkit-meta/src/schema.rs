//! Command metadata schema
//!
//! `CommandMeta` is derived per source file from frontmatter and also
//! serialized as the JSON sidecar (`metadata.json`) inside each pre-built
//! variant for fast lookup. The sidecar is a cache; the frontmatter stays
//! the source of truth.

use serde::{Deserialize, Serialize};

/// Order value for entries with no `_order` field; sorts last.
pub const ORDER_SENTINEL: u32 = 9999;

/// Closed set of command categories.
///
/// Declaring anything else in `_category` is a build-time corpus defect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Workflow,
    Git,
    Testing,
    Analysis,
    Docs,
    #[default]
    Utilities,
}

impl Category {
    /// All categories in presentation order.
    pub const ALL: &[Category] = &[
        Category::Workflow,
        Category::Git,
        Category::Testing,
        Category::Analysis,
        Category::Docs,
        Category::Utilities,
    ];

    /// Parse a category label; `None` for anything outside the known set.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "workflow" => Some(Self::Workflow),
            "git" => Some(Self::Git),
            "testing" => Some(Self::Testing),
            "analysis" => Some(Self::Analysis),
            "docs" => Some(Self::Docs),
            "utilities" => Some(Self::Utilities),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Workflow => "workflow",
            Self::Git => "git",
            Self::Testing => "testing",
            Self::Analysis => "analysis",
            Self::Docs => "docs",
            Self::Utilities => "utilities",
        }
    }

    /// Human-readable group heading.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Workflow => "Workflow",
            Self::Git => "Git",
            Self::Testing => "Testing",
            Self::Analysis => "Analysis",
            Self::Docs => "Documentation",
            Self::Utilities => "Utilities",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Per-command metadata derived from frontmatter
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CommandMeta {
    /// One-line description shown during selection
    #[serde(default)]
    pub description: String,

    /// Presentation category
    #[serde(default)]
    pub category: Category,

    /// Ordering hint within the category
    #[serde(default = "default_order")]
    pub order: u32,

    /// Preselected in the interactive picker
    #[serde(default = "default_true", rename = "defaultSelected")]
    pub default_selected: bool,

    /// Tool names this command asks permission for, if any
    #[serde(
        default,
        rename = "requestedTools",
        skip_serializing_if = "Option::is_none"
    )]
    pub requested_tools: Option<Vec<String>>,
}

impl Default for CommandMeta {
    fn default() -> Self {
        Self {
            description: String::new(),
            category: Category::default(),
            order: ORDER_SENTINEL,
            default_selected: true,
            requested_tools: None,
        }
    }
}

fn default_order() -> u32 {
    ORDER_SENTINEL
}

fn default_true() -> bool {
    true
}

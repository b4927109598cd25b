//! Directory-wide command metadata catalog
//!
//! Scans a directory of command sources, parses each file's frontmatter,
//! and derives the filename -> metadata index. Recomputed fresh on every
//! build; never persisted as the source of truth.

use std::collections::BTreeMap;
use std::path::Path;

use cmdkit_content::frontmatter;

use crate::error::{Error, Result};
use crate::schema::{Category, CommandMeta};

/// Frontmatter keys the catalog reads. All but `description` are
/// internal fields stripped before publishing.
const KEY_DESCRIPTION: &str = "description";
const KEY_CATEGORY: &str = "_category";
const KEY_ORDER: &str = "_order";
const KEY_DEFAULT: &str = "_default";
const KEY_REQUESTED_TOOLS: &str = "_requested-tools";

/// Scan a directory of command sources into a filename -> metadata map.
///
/// Fails fast on the first unknown category; that is a corpus defect,
/// not a recoverable runtime condition.
pub fn scan(dir: &Path) -> Result<BTreeMap<String, CommandMeta>> {
    let mut catalog = BTreeMap::new();

    for filename in cmdkit_fs::list_markdown_files(dir)? {
        let content = cmdkit_fs::read_text(&dir.join(&filename))?;
        let meta = from_document(&filename, &content)?;
        catalog.insert(filename, meta);
    }

    tracing::debug!(entries = catalog.len(), dir = %dir.display(), "catalog scan complete");
    Ok(catalog)
}

/// Derive one file's metadata from its frontmatter.
pub fn from_document(filename: &str, content: &str) -> Result<CommandMeta> {
    let fm = frontmatter::parse(content);

    let category = match fm.get(KEY_CATEGORY) {
        Some(label) => Category::parse(label).ok_or_else(|| Error::UnknownCategory {
            file: filename.to_string(),
            category: label.to_string(),
        })?,
        None => Category::default(),
    };

    let mut meta = CommandMeta {
        description: fm.get(KEY_DESCRIPTION).unwrap_or_default().to_string(),
        category,
        ..CommandMeta::default()
    };
    if let Some(order) = fm.get_number(KEY_ORDER) {
        meta.order = order;
    }
    if let Some(value) = fm.get(KEY_DEFAULT) {
        meta.default_selected = value != "false";
    }
    if let Some(tools) = fm.get_list(KEY_REQUESTED_TOOLS) {
        if !tools.is_empty() {
            meta.requested_tools = Some(tools.to_vec());
        }
    }

    Ok(meta)
}

/// One presentation group: a category and its entries in display order.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogGroup {
    pub category: Category,
    pub entries: Vec<(String, CommandMeta)>,
}

/// Group a catalog by category for presentation.
///
/// Categories appear in their fixed presentation order; entries within a
/// group sort by (order ascending, then name), so output is deterministic
/// regardless of input enumeration order.
pub fn group(catalog: &BTreeMap<String, CommandMeta>) -> Vec<CatalogGroup> {
    let mut groups = Vec::new();

    for &category in Category::ALL {
        let mut entries: Vec<(String, CommandMeta)> = catalog
            .iter()
            .filter(|(_, meta)| meta.category == category)
            .map(|(name, meta)| (name.clone(), meta.clone()))
            .collect();
        if entries.is_empty() {
            continue;
        }
        entries.sort_by(|(a_name, a), (b_name, b)| {
            a.order.cmp(&b.order).then_with(|| a_name.cmp(b_name))
        });
        groups.push(CatalogGroup { category, entries });
    }

    groups
}

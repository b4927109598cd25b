//! Frontmatter parsing and cleaning
//!
//! Command sources carry a small YAML-like header block between `---`
//! delimiter lines at the very start of the document: scalar `key: value`
//! pairs plus string lists written as a bare key followed by indented
//! `- item` lines. This is deliberately a minimal hand parser, not a YAML
//! implementation; the corpus only ever uses these two shapes.
//!
//! Fields whose keys start with `_` are internal build inputs and are
//! stripped before publishing (`clean`).

/// A parsed frontmatter field value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Scalar(String),
    List(Vec<String>),
}

/// Parsed frontmatter: fields in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frontmatter {
    fields: Vec<(String, FieldValue)>,
}

impl Frontmatter {
    /// Get a scalar field value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.iter().find_map(|(k, v)| match v {
            FieldValue::Scalar(s) if k == key => Some(s.as_str()),
            _ => None,
        })
    }

    /// Get a list field value.
    pub fn get_list(&self, key: &str) -> Option<&[String]> {
        self.fields.iter().find_map(|(k, v)| match v {
            FieldValue::List(items) if k == key => Some(items.as_slice()),
            _ => None,
        })
    }

    /// Get a scalar field coerced to a number, if it looks numeric.
    pub fn get_number(&self, key: &str) -> Option<u32> {
        self.get(key).and_then(|s| s.parse().ok())
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate fields in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// The frontmatter block's interior, the byte offset where the closing
/// delimiter line starts, and the offset just past it.
struct Block<'a> {
    inner: &'a str,
    closing_start: usize,
    end: usize,
}

fn locate_block(document: &str) -> Option<Block<'_>> {
    let first_line_end = document.find('\n')?;
    if document[..first_line_end].trim_end() != "---" {
        return None;
    }

    let inner_start = first_line_end + 1;
    let mut pos = inner_start;
    while pos <= document.len() {
        let line_end = document[pos..]
            .find('\n')
            .map(|i| pos + i)
            .unwrap_or(document.len());
        let line = &document[pos..line_end];
        if line.trim_end() == "---" {
            let end = if line_end < document.len() {
                line_end + 1
            } else {
                line_end
            };
            return Some(Block {
                inner: &document[inner_start..pos],
                closing_start: pos,
                end,
            });
        }
        if line_end >= document.len() {
            break;
        }
        pos = line_end + 1;
    }
    None
}

fn is_list_item(line: &str) -> bool {
    (line.starts_with(' ') || line.starts_with('\t')) && line.trim_start().starts_with("- ")
}

/// Parse the frontmatter block at the start of a document.
///
/// A document without a frontmatter block yields an empty mapping, not an
/// error.
pub fn parse(document: &str) -> Frontmatter {
    let Some(block) = locate_block(document) else {
        return Frontmatter::default();
    };

    let mut fields: Vec<(String, FieldValue)> = Vec::new();
    for line in block.inner.lines() {
        if line.trim().is_empty() {
            continue;
        }

        if is_list_item(line) {
            if let Some((_, FieldValue::List(items))) = fields.last_mut() {
                let item = line.trim_start()[2..].trim();
                items.push(item.to_string());
            }
            continue;
        }

        if let Some((key, value)) = line.trim().split_once(':') {
            let key = key.trim().to_string();
            let value = value.trim();
            if value.is_empty() {
                // Bare key: the following indented items form a list
                fields.push((key, FieldValue::List(Vec::new())));
            } else {
                fields.push((key, FieldValue::Scalar(value.to_string())));
            }
        }
    }

    Frontmatter { fields }
}

/// Remove internal (underscore-prefixed) fields from a document's
/// frontmatter, collapsing any blank lines so the block stays
/// well-formed. Body content is untouched.
pub fn clean(document: &str) -> String {
    let Some(block) = locate_block(document) else {
        return document.to_string();
    };

    let mut kept: Vec<&str> = Vec::new();
    let mut skipping_list = false;
    for line in block.inner.lines() {
        if is_list_item(line) {
            if !skipping_list {
                kept.push(line);
            }
            continue;
        }

        // A blank line does not end a list; parse still attaches the
        // items that follow it to the preceding key.
        if line.trim().is_empty() {
            continue;
        }
        skipping_list = false;

        let internal = line
            .trim()
            .split_once(':')
            .is_some_and(|(key, _)| key.trim().starts_with('_'));
        if internal {
            skipping_list = true;
        } else {
            kept.push(line);
        }
    }

    let closing_has_newline = document[..block.end].ends_with('\n');
    let body = &document[block.end..];

    let mut output = String::with_capacity(document.len());
    output.push_str("---\n");
    for line in kept {
        output.push_str(line);
        output.push('\n');
    }
    output.push_str("---");
    if closing_has_newline {
        output.push('\n');
    }
    output.push_str(body);
    output
}

/// Insert a scalar field at the end of a document's frontmatter block.
///
/// A document without a block gets one created at the top.
pub fn insert_field(document: &str, key: &str, value: &str) -> String {
    match locate_block(document) {
        Some(block) => {
            // Splice the new field in just before the closing delimiter.
            let mut output = String::with_capacity(document.len() + key.len() + value.len() + 3);
            output.push_str(&document[..block.closing_start]);
            output.push_str(key);
            output.push_str(": ");
            output.push_str(value);
            output.push('\n');
            output.push_str(&document[block.closing_start..]);
            output
        }
        None => format!("---\n{key}: {value}\n---\n{document}"),
    }
}

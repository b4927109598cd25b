//! Tokenizer for inline transform directives
//!
//! A directive is a paired HTML-comment marker enclosing arbitrary interior
//! text. The interior is discarded; only the open marker's attributes carry
//! meaning:
//!
//! ```text
//! <!-- cmdkit:include path="fragments/setup.md" featureFlag="beads" -->
//! (placeholder text, ignored)
//! <!-- /cmdkit:include -->
//! ```
//!
//! The tokenizer walks the document once with a cursor and produces a
//! sequence of literal-or-directive segments. Markers inside a directive's
//! interior are never re-matched, which keeps nested or stray markers
//! unambiguous.

use std::collections::BTreeMap;
use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};

/// Pattern to match directive open markers and capture name + raw attributes
static DIRECTIVE_OPEN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<!--\s*cmdkit:([A-Za-z][A-Za-z0-9-]*)((?:\s+[A-Za-z][A-Za-z0-9-]*="[^"]*")*)\s*-->"#)
        .unwrap()
});

/// Pattern to match a single `key="value"` attribute
static ATTR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"([A-Za-z][A-Za-z0-9-]*)="([^"]*)""#).unwrap());

/// One parsed transform directive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    /// Transform name, e.g. `include`
    pub name: String,
    /// Attribute map from the open marker
    pub attrs: BTreeMap<String, String>,
    /// Byte span of the whole block (open marker through close marker)
    pub span: Range<usize>,
}

impl Directive {
    /// Get an attribute value by name.
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).map(String::as_str)
    }
}

/// One segment of a tokenized document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Text outside any directive, passed through verbatim
    Literal(&'a str),
    /// A directive block to be substituted
    Directive(Directive),
}

/// Tokenize a document into literal and directive segments.
///
/// An open marker without a matching close marker is a parse error; a
/// typo'd close marker would otherwise leak raw directive text into the
/// output.
pub fn tokenize(source: &str) -> Result<Vec<Segment<'_>>> {
    let mut segments = Vec::new();
    let mut cursor = 0;

    while let Some(cap) = DIRECTIVE_OPEN_PATTERN.captures(&source[cursor..]) {
        let open = cap.get(0).unwrap();
        let block_start = cursor + open.start();
        let content_start = cursor + open.end();

        let name = cap.get(1).map(|m| m.as_str().to_string()).unwrap_or_default();
        let attrs = parse_attrs(cap.get(2).map(|m| m.as_str()).unwrap_or(""));

        let close_marker = format!("<!-- /cmdkit:{name} -->");
        let Some(close_pos) = source[content_start..].find(&close_marker) else {
            return Err(Error::UnterminatedDirective {
                transform: name,
                position: block_start,
            });
        };
        let block_end = content_start + close_pos + close_marker.len();

        if block_start > cursor {
            segments.push(Segment::Literal(&source[cursor..block_start]));
        }
        segments.push(Segment::Directive(Directive {
            name,
            attrs,
            span: block_start..block_end,
        }));

        cursor = block_end;
    }

    if cursor < source.len() {
        segments.push(Segment::Literal(&source[cursor..]));
    }

    Ok(segments)
}

fn parse_attrs(raw: &str) -> BTreeMap<String, String> {
    ATTR_PATTERN
        .captures_iter(raw)
        .map(|cap| (cap[1].to_string(), cap[2].to_string()))
        .collect()
}

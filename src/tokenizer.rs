use std::ops::Range;

use crate::attributes::{extend_attributes, Attributes};
use crate::diagnostics::Diagnostics;

/// One lexical unit of basic HTML, in document order.
///
/// Spans are byte ranges into the line-ending-normalized source returned by
/// [`normalize_line_endings`]. A tag span runs from `<` through `>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Literal text, unchanged
    Text { text: String, span: Range<usize> },
    /// Open tag; name is lower case, attribute keys are lower case
    Open {
        name: String,
        attributes: Attributes,
        span: Range<usize>,
    },
    /// Close tag; name is the lower-cased remainder after `</`
    Close { name: String, span: Range<usize> },
}

impl Segment {
    /// Literal text for text segments, the tag name for tags
    pub fn content(&self) -> &str {
        match self {
            Segment::Text { text, .. } => text,
            Segment::Open { name, .. } | Segment::Close { name, .. } => name,
        }
    }

    /// Attribute map, present only for open tags
    pub fn attributes(&self) -> Option<&Attributes> {
        match self {
            Segment::Open { attributes, .. } => Some(attributes),
            _ => None,
        }
    }

    pub fn span(&self) -> Range<usize> {
        match self {
            Segment::Text { span, .. }
            | Segment::Open { span, .. }
            | Segment::Close { span, .. } => span.clone(),
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Segment::Text { .. })
    }
}

/// Replace line feeds with a space and drop carriage returns.
pub fn normalize_line_endings(html: &str) -> String {
    html.replace('\n', " ").replace('\r', "")
}

/// Split a basic HTML string into text, open-tag and close-tag segments.
///
/// Never fails. A `<` with no `>` after it is literal text, so `"<b"` comes
/// back as a single text segment.
pub fn tokenize(html: &str) -> Vec<Segment> {
    tokenize_with_diagnostics(html, &mut Diagnostics::new())
}

/// Same as [`tokenize`], counting skipped attribute tokens into `diagnostics`.
pub fn tokenize_with_diagnostics(html: &str, diagnostics: &mut Diagnostics) -> Vec<Segment> {
    let source = normalize_line_endings(html);
    let bytes = source.as_bytes();
    let len = bytes.len();

    let mut segments = Vec::with_capacity(16);
    let mut pos = 0;

    // '<' and '>' are ASCII, so every index found below is a char boundary
    while let Some(open) = find_byte(bytes, b'<', pos) {
        let Some(close) = find_byte(bytes, b'>', open + 1) else {
            break;
        };

        if pos < open {
            segments.push(Segment::Text {
                text: source[pos..open].to_string(),
                span: pos..open,
            });
        }

        let body = &source[open + 1..close];
        let span = open..close + 1;
        let segment = match body.strip_prefix('/') {
            Some(name) => Segment::Close {
                name: name.to_lowercase(),
                span,
            },
            None => {
                let mut parts = body.split(' ');
                let name = parts.next().unwrap_or_default().to_lowercase();
                let mut attributes = Attributes::new();
                diagnostics.skipped_attributes += extend_attributes(&mut attributes, parts);
                Segment::Open {
                    name,
                    attributes,
                    span,
                }
            }
        };
        log::trace!("segment {:?}", segment);
        segments.push(segment);

        pos = close + 1;
    }

    if segments.is_empty() {
        return vec![Segment::Text {
            text: source,
            span: 0..len,
        }];
    }

    if pos < len {
        segments.push(Segment::Text {
            text: source[pos..].to_string(),
            span: pos..len,
        });
    }

    segments
}

fn find_byte(bytes: &[u8], needle: u8, from: usize) -> Option<usize> {
    bytes
        .get(from..)?
        .iter()
        .position(|&b| b == needle)
        .map(|i| from + i)
}

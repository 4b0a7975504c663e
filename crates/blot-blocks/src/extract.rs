//! Block extraction from annotated text
//!
//! The grammar is line-oriented. A block opens with a marker at the start
//! of a line — `//`, optional horizontal whitespace, `TEST`, a braced
//! label, then nothing but whitespace before the line break — and runs to
//! the next line-leading `// END`. Markers never nest: the scan is a
//! single left-to-right pass, and a `// TEST` line inside an open block is
//! part of that block's body.

use regex::Regex;
use std::sync::LazyLock;

use crate::block::{Block, Extraction};

/// Pattern for a start marker and its braced label. The mandatory line
/// break after the marker is part of the match, so a block's body begins
/// exactly at the match end.
static START_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^//[ \t]*TEST[ \t]*\{([^}]+)\}[ \t\r]*\n").unwrap());

/// Pattern for a line-leading end marker. Matches by prefix: any text may
/// trail `END` on the same line without unseating the marker.
static END_MARKER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^//[ \t]*END").unwrap());

/// Extract all test blocks from `text`, in encounter order.
///
/// A start marker with no end marker anywhere after it, or with the end
/// marker directly on the next line (empty body), produces no block; the
/// scan counts it in [`Extraction::skipped`] and resumes immediately after
/// the failed marker. Text with no start markers yields an empty
/// extraction — not an error. Extraction itself never fails.
pub fn extract_blocks(text: &str) -> Extraction {
    let mut blocks = Vec::new();
    let mut skipped = 0usize;
    let mut cursor = 0usize;

    while let Some(caps) = START_MARKER.captures_at(text, cursor) {
        let marker = caps.get(0).unwrap();
        let body_start = marker.end();

        let Some(end) = END_MARKER.find_at(text, body_start) else {
            skipped += 1;
            cursor = body_start;
            continue;
        };

        if end.start() == body_start {
            // Empty body: the end marker sits where the body should be.
            skipped += 1;
            cursor = body_start;
            continue;
        }

        let label = caps.get(1).unwrap().as_str().trim().to_string();
        blocks.push(Block {
            label,
            raw: text[marker.start()..end.end()].to_string(),
            body: text[body_start..end.start()].to_string(),
            span: marker.start()..end.end(),
        });

        // Non-overlapping: the next start-marker search begins only after
        // the matched end marker.
        cursor = end.end();
    }

    Extraction { blocks, skipped }
}

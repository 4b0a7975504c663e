//! Block and update types

use std::ops::Range;

/// A labeled block extracted from annotated text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// Identifier from the start marker's braces, trimmed of surrounding
    /// whitespace. Labels are not guaranteed unique within a file;
    /// lookups take the first match.
    pub label: String,
    /// Full matched text including both delimiters, used for
    /// byte-identical replacement in the target buffer.
    pub raw: String,
    /// Text strictly between the opening delimiter's line break and the
    /// closing delimiter. Never empty.
    pub body: String,
    /// Byte range of `raw` in the text it was extracted from.
    pub span: Range<usize>,
}

impl Block {
    /// Start offset of the block in the originating text.
    pub fn position(&self) -> usize {
        self.span.start
    }
}

/// Result of one extraction pass over a text buffer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    /// Blocks in encounter order.
    pub blocks: Vec<Block>,
    /// Malformed or unterminated blocks dropped during the scan.
    pub skipped: usize,
}

impl Extraction {
    /// True when the scan produced no blocks at all.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

/// One planned change to the target text, derived from a source block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Update {
    /// Label shared by the source block and, if matched, its target block.
    pub label: String,
    /// Replacement text: the source block's `raw`.
    pub new_text: String,
    /// The matched target block's `raw`. `None` means the target has no
    /// block with this label and the update appends.
    pub original: Option<String>,
}

impl Update {
    /// True when this update introduces a block the target does not have.
    pub fn is_new(&self) -> bool {
        self.original.is_none()
    }
}

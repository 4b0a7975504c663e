//! Merge reconciliation between source blocks and a spec file
//!
//! Reconciliation is a pure text transform in two steps. [`reconcile`]
//! matches extracted source blocks against the blocks already present in
//! the spec text, by label, and emits one [`Update`] per source block.
//! [`apply`] then rewrites the spec text: matched blocks are replaced in
//! place, everything else is appended. Content the spec file carries
//! outside of recognized blocks is never touched.

use crate::block::{Block, Update};

/// Counters describing what [`apply_counted`] did with each update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ApplyStats {
    /// Updates whose original text was found and replaced in place.
    pub replaced: usize,
    /// Updates with no prior spec block, appended at the end.
    pub appended_new: usize,
    /// Updates that matched a spec block by label but whose recorded text
    /// was no longer present, appended at the end instead.
    pub fallback_appends: usize,
}

/// Match each source block against the spec blocks by label.
///
/// Returns one update per source block, in source order. A source block
/// whose label appears among `target_blocks` carries that spec block's
/// raw text as [`Update::original`]; an unmatched block carries `None`
/// and will be appended by [`apply`]. When several spec blocks share a
/// label, the first one wins.
pub fn reconcile(source_blocks: &[Block], target_blocks: &[Block]) -> Vec<Update> {
    source_blocks
        .iter()
        .map(|source| Update {
            label: source.label.clone(),
            new_text: source.raw.clone(),
            original: target_blocks
                .iter()
                .find(|target| target.label == source.label)
                .map(|target| target.raw.clone()),
        })
        .collect()
}

/// Apply `updates` to the spec text, producing the new spec contents.
///
/// When `target` is `None` the spec file does not exist yet and the text
/// is seeded from `scaffold` instead. See [`apply_counted`] for the exact
/// per-update behavior.
pub fn apply(updates: &[Update], target: Option<&str>, scaffold: &str) -> String {
    apply_counted(updates, target, scaffold).0
}

/// [`apply`] with counters for reporting.
///
/// Each update is handled independently, in order:
/// - an update with an original whose text still occurs in the working
///   text replaces its first occurrence;
/// - an update with no original is appended at the end, separated from
///   prior content by a blank line;
/// - an update whose original has vanished from the working text falls
///   back to appending, so the new block is never silently dropped.
///
/// Replacement targets the first occurrence only, and later updates see
/// the text produced by earlier ones. When two source blocks share a
/// label the first consumes the spec block; the second finds its recorded
/// original gone and falls back to an append.
pub fn apply_counted(
    updates: &[Update],
    target: Option<&str>,
    scaffold: &str,
) -> (String, ApplyStats) {
    let mut text = target.unwrap_or(scaffold).to_string();
    let mut stats = ApplyStats::default();

    for update in updates {
        let found = update
            .original
            .as_deref()
            .and_then(|original| text.find(original).map(|at| (at, original.len())));

        match found {
            Some((at, len)) => {
                text.replace_range(at..at + len, &update.new_text);
                stats.replaced += 1;
            }
            None => {
                append_block(&mut text, &update.new_text);
                if update.is_new() {
                    stats.appended_new += 1;
                } else {
                    stats.fallback_appends += 1;
                }
            }
        }
    }

    (text, stats)
}

/// Append a block to `text`, separated from prior content by one blank
/// line and followed by a trailing newline.
fn append_block(text: &mut String, raw: &str) {
    if !text.is_empty() {
        if !text.ends_with('\n') {
            text.push('\n');
        }
        text.push('\n');
    }
    text.push_str(raw);
    text.push('\n');
}

/// Remove the given spans from `source`, in one pass.
///
/// Spans are taken from extracted blocks and are expected to be ascending
/// and non-overlapping; a span that is inverted, steps backwards, or runs
/// past the end of the text is ignored rather than corrupting the copy.
/// The text between and around the removed spans is preserved byte for
/// byte.
pub fn strip_blocks(source: &str, spans: &[std::ops::Range<usize>]) -> String {
    let mut out = String::with_capacity(source.len());
    let mut cursor = 0usize;

    for span in spans {
        if span.start < cursor || span.end < span.start || span.end > source.len() {
            continue;
        }
        out.push_str(&source[cursor..span.start]);
        cursor = span.end;
    }
    out.push_str(&source[cursor..]);
    out
}

//! Block segmentation and classification.
//!
//! A block is one unit of Markdown between blank-line separators, trimmed
//! of surrounding whitespace. Blocks are opaque strings: the kind is
//! computed from content and paired with the block for a single pass,
//! never stored.

use memchr::memmem;

/// Kind of a top-level Markdown block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// `# ` through `###### ` heading with its level (1-6).
    Heading(u8),
    /// Triple-backtick fenced code block.
    Code,
    /// Block where every line starts with `>`.
    Quote,
    /// Block where every line starts with `* ` or `- `.
    UnorderedList,
    /// Block of `1. `, `2. `, ... lines in strict sequence from 1.
    OrderedList,
    /// Anything else.
    Paragraph,
}

/// Split raw Markdown into trimmed, non-empty blocks.
///
/// The separator is two consecutive line breaks. Order is preserved from
/// source; pieces that trim to nothing are discarded.
pub fn segment_blocks(markdown: &str) -> Vec<&str> {
    let mut blocks = Vec::with_capacity(16);
    let mut start = 0;

    for sep in memmem::find_iter(markdown.as_bytes(), b"\n\n") {
        push_trimmed(&mut blocks, &markdown[start..sep]);
        start = sep + 2;
    }
    push_trimmed(&mut blocks, &markdown[start..]);

    blocks
}

#[inline]
fn push_trimmed<'a>(blocks: &mut Vec<&'a str>, piece: &'a str) {
    let trimmed = piece.trim();
    if !trimmed.is_empty() {
        blocks.push(trimmed);
    }
}

/// Classify a block, first match wins.
///
/// Precedence: heading, code fence, quote, unordered list, ordered list,
/// paragraph. A single non-conforming line disqualifies the line-oriented
/// kinds and the block falls through to paragraph.
pub fn classify_block(block: &str) -> BlockKind {
    let bytes = block.as_bytes();

    let level = bytes.iter().take_while(|&&b| b == b'#').count();
    if (1..=6).contains(&level) && bytes.get(level) == Some(&b' ') {
        return BlockKind::Heading(level as u8);
    }

    if block.starts_with("```") && block.ends_with("```") {
        return BlockKind::Code;
    }

    if block.lines().all(|line| line.starts_with('>')) {
        return BlockKind::Quote;
    }

    if block
        .lines()
        .all(|line| line.starts_with("* ") || line.starts_with("- "))
    {
        return BlockKind::UnorderedList;
    }

    if is_ordered_list(block) {
        return BlockKind::OrderedList;
    }

    BlockKind::Paragraph
}

/// Check for `1. `, `2. `, ... markers in strict sequence starting at 1.
fn is_ordered_list(block: &str) -> bool {
    let mut expected: u64 = 1;

    for line in block.lines() {
        let marker = expected.to_string();
        let rest = match line.strip_prefix(marker.as_str()) {
            Some(rest) => rest,
            None => return false,
        };
        if !rest.starts_with(". ") {
            return false;
        }
        expected += 1;
    }

    true
}

//! Block-to-tree compilation.
//!
//! Dispatches each classified block to a renderer producing one node
//! subtree; all subtrees become children of a single `<div>` root in
//! block order.

use crate::block::{classify_block, segment_blocks, BlockKind};
use crate::error::ConvertError;
use crate::html::HtmlNode;
use crate::inline::text_to_spans;
use crate::text::TextSpan;

/// Convert a full Markdown document into an HTML node tree.
///
/// The root is a `<div>` parent whose children are the compiled block
/// subtrees in source order.
pub fn markdown_to_html_node(markdown: &str) -> Result<HtmlNode, ConvertError> {
    let mut children = Vec::with_capacity(16);

    for block in segment_blocks(markdown) {
        children.push(block_to_node(block, classify_block(block))?);
    }

    Ok(HtmlNode::parent("div", children))
}

/// Convert a Markdown document straight to its HTML string.
pub fn markdown_to_html(markdown: &str) -> Result<String, ConvertError> {
    markdown_to_html_node(markdown)?.to_html()
}

/// Extract the page title from the document's first block.
///
/// The first line of the first block must be a level-1 heading; the title
/// is the text after the `# ` marker.
pub fn extract_title(markdown: &str) -> Result<&str, ConvertError> {
    let blocks = segment_blocks(markdown);
    let first = blocks.first().ok_or_else(ConvertError::missing_title)?;
    let line = first.lines().next().unwrap_or("");

    line.strip_prefix("# ").ok_or_else(ConvertError::missing_title)
}

fn block_to_node(block: &str, kind: BlockKind) -> Result<HtmlNode, ConvertError> {
    match kind {
        BlockKind::Heading(level) => heading_node(block, level),
        BlockKind::Code => code_node(block),
        BlockKind::Quote => quote_node(block),
        BlockKind::UnorderedList => list_node(block, "ul", unordered_item),
        BlockKind::OrderedList => list_node(block, "ol", ordered_item),
        BlockKind::Paragraph => Ok(HtmlNode::parent("p", inline_children(block)?)),
    }
}

/// Tokenize text and convert every span to a leaf node.
fn inline_children(text: &str) -> Result<Vec<HtmlNode>, ConvertError> {
    Ok(text_to_spans(text)?.iter().map(TextSpan::to_leaf).collect())
}

fn heading_node(block: &str, level: u8) -> Result<HtmlNode, ConvertError> {
    // Classification guarantees `level` hashes followed by a space.
    let rest = &block[level as usize..];
    let content = rest.strip_prefix(' ').unwrap_or(rest);

    Ok(HtmlNode::parent(
        format!("h{}", level),
        inline_children(content)?,
    ))
}

fn code_node(block: &str) -> Result<HtmlNode, ConvertError> {
    let inner = block.strip_prefix("```").unwrap_or(block);
    let inner = inner.strip_suffix("```").unwrap_or(inner);

    let code = HtmlNode::parent("code", inline_children(inner)?);
    Ok(HtmlNode::parent("pre", vec![code]))
}

fn quote_node(block: &str) -> Result<HtmlNode, ConvertError> {
    let content = block
        .lines()
        .map(|line| line.strip_prefix('>').unwrap_or(line))
        .collect::<Vec<_>>()
        .join("\n");

    Ok(HtmlNode::parent("blockquote", inline_children(&content)?))
}

fn list_node(
    block: &str,
    tag: &str,
    strip_marker: fn(&str) -> &str,
) -> Result<HtmlNode, ConvertError> {
    let mut items = Vec::with_capacity(8);

    for line in block.lines() {
        items.push(HtmlNode::parent(
            "li",
            inline_children(strip_marker(line))?,
        ));
    }

    Ok(HtmlNode::parent(tag, items))
}

fn unordered_item(line: &str) -> &str {
    line.strip_prefix("* ")
        .or_else(|| line.strip_prefix("- "))
        .unwrap_or(line)
}

/// Strip an ordered-list marker of any digit count (`1. `, `12. `, ...).
fn ordered_item(line: &str) -> &str {
    match line.find(". ") {
        Some(pos) => &line[pos + 2..],
        None => line,
    }
}

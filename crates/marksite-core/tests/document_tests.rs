//! Integration tests for block segmentation, classification, and
//! document compilation

use marksite_core::{
    classify_block, extract_title, markdown_to_html, segment_blocks, BlockKind, ConvertErrorKind,
    HtmlNode,
};

// ============================================================================
// Block Segmentation Tests
// ============================================================================

#[test]
fn test_segment_blocks_basic() {
    let input = "# Heading\n\nFirst paragraph.\n\nSecond paragraph.";
    let blocks = segment_blocks(input);

    assert_eq!(
        blocks,
        vec!["# Heading", "First paragraph.", "Second paragraph."]
    );
}

#[test]
fn test_segment_blocks_trims_surrounding_whitespace() {
    let input = "\n\n  # Heading  \n\n\n\nbody\n\n";
    let blocks = segment_blocks(input);

    assert_eq!(blocks, vec!["# Heading", "body"]);
}

#[test]
fn test_segment_blocks_whitespace_only_input() {
    assert!(segment_blocks("").is_empty());
    assert!(segment_blocks("\n\n\n\n").is_empty());
    assert!(segment_blocks("   \n\n \t \n\n  ").is_empty());
}

#[test]
fn test_segment_blocks_keeps_intra_block_newlines() {
    let input = "line one\nline two\n\nnext";
    let blocks = segment_blocks(input);

    assert_eq!(blocks, vec!["line one\nline two", "next"]);
}

// ============================================================================
// Block Classification Tests
// ============================================================================

#[test]
fn test_classify_heading_levels() {
    assert_eq!(classify_block("# h1"), BlockKind::Heading(1));
    assert_eq!(classify_block("### h3"), BlockKind::Heading(3));
    assert_eq!(classify_block("###### h6"), BlockKind::Heading(6));
}

#[test]
fn test_classify_heading_requires_space() {
    assert_eq!(classify_block("#nospace"), BlockKind::Paragraph);
}

#[test]
fn test_classify_heading_level_too_high() {
    assert_eq!(classify_block("####### seven"), BlockKind::Paragraph);
}

#[test]
fn test_classify_code_fence() {
    assert_eq!(classify_block("```x```"), BlockKind::Code);
    assert_eq!(classify_block("```\nlet x = 1;\n```"), BlockKind::Code);
}

#[test]
fn test_classify_unterminated_fence_is_paragraph() {
    assert_eq!(classify_block("```\nno closing fence"), BlockKind::Paragraph);
}

#[test]
fn test_classify_quote() {
    assert_eq!(classify_block(">one\n>two"), BlockKind::Quote);
}

#[test]
fn test_classify_broken_quote_is_paragraph() {
    // Second line breaks the pattern, so the whole block falls through.
    assert_eq!(classify_block(">one\nplain"), BlockKind::Paragraph);
}

#[test]
fn test_classify_unordered_list() {
    assert_eq!(classify_block("* a\n* b"), BlockKind::UnorderedList);
    assert_eq!(classify_block("- a\n* b"), BlockKind::UnorderedList);
}

#[test]
fn test_classify_broken_unordered_list_is_paragraph() {
    assert_eq!(classify_block("* a\nb"), BlockKind::Paragraph);
    assert_eq!(classify_block("*tight"), BlockKind::Paragraph);
}

#[test]
fn test_classify_ordered_list() {
    assert_eq!(classify_block("1. a\n2. b\n3. c"), BlockKind::OrderedList);
}

#[test]
fn test_classify_ordered_list_strict_sequence() {
    assert_eq!(classify_block("1. a\n3. b"), BlockKind::Paragraph);
    assert_eq!(classify_block("2. a\n3. b"), BlockKind::Paragraph);
}

#[test]
fn test_classify_ordered_list_double_digit_markers() {
    let block = (1..=12)
        .map(|n| format!("{}. item", n))
        .collect::<Vec<_>>()
        .join("\n");

    assert_eq!(classify_block(&block), BlockKind::OrderedList);
}

// ============================================================================
// End-to-End Compilation Tests
// ============================================================================

#[test]
fn test_title_and_document_html() {
    let input = "# Title\n\nHello **world**!";

    assert_eq!(extract_title(input).unwrap(), "Title");
    assert_eq!(
        markdown_to_html(input).unwrap(),
        "<div><h1>Title</h1><p>Hello <b>world</b>!</p></div>"
    );
}

#[test]
fn test_image_renders_as_void_element() {
    assert_eq!(
        markdown_to_html("![cat](cat.png)").unwrap(),
        "<div><p><img src=\"cat.png\" alt=\"cat\"></p></div>"
    );
}

#[test]
fn test_unordered_list_html() {
    assert_eq!(
        markdown_to_html("* a\n* b").unwrap(),
        "<div><ul><li>a</li><li>b</li></ul></div>"
    );
}

#[test]
fn test_ordered_list_html() {
    assert_eq!(
        markdown_to_html("1. first\n2. second").unwrap(),
        "<div><ol><li>first</li><li>second</li></ol></div>"
    );
}

#[test]
fn test_ordered_list_double_digit_items_keep_text() {
    let input = (1..=11)
        .map(|n| format!("{}. item {}", n, n))
        .collect::<Vec<_>>()
        .join("\n");
    let html = markdown_to_html(&input).unwrap();

    assert!(html.starts_with("<div><ol><li>item 1</li>"));
    assert!(html.contains("<li>item 10</li>"));
    assert!(html.contains("<li>item 11</li>"));
}

#[test]
fn test_quote_html() {
    assert_eq!(
        markdown_to_html(">to be\n>or not to be").unwrap(),
        "<div><blockquote>to be\nor not to be</blockquote></div>"
    );
}

#[test]
fn test_code_block_html() {
    assert_eq!(
        markdown_to_html("```\nlet x = 1;\n```").unwrap(),
        "<div><pre><code>\nlet x = 1;\n</code></pre></div>"
    );
}

#[test]
fn test_heading_with_inline_markup() {
    assert_eq!(
        markdown_to_html("## A *styled* heading").unwrap(),
        "<div><h2>A <i>styled</i> heading</h2></div>"
    );
}

#[test]
fn test_link_in_paragraph() {
    assert_eq!(
        markdown_to_html("visit [the site](https://example.com) now").unwrap(),
        "<div><p>visit <a href=\"https://example.com\">the site</a> now</p></div>"
    );
}

#[test]
fn test_rendering_is_idempotent() {
    let input = "# Doc\n\n* one\n* two\n\n>quoted\n\nthe **end**";

    let first = markdown_to_html(input).unwrap();
    let second = markdown_to_html(input).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_unclosed_delimiter_propagates() {
    let err = markdown_to_html("# T\n\nbad **bold").unwrap_err();
    assert_eq!(err.kind, ConvertErrorKind::UnterminatedDelimiter);
}

// ============================================================================
// Title Extraction Tests
// ============================================================================

#[test]
fn test_extract_title_first_line_only() {
    let input = "# The Title\nsecond line\n\nbody";
    assert_eq!(extract_title(input).unwrap(), "The Title");
}

#[test]
fn test_extract_title_rejects_deeper_heading() {
    let err = extract_title("## Not a title\n\nbody").unwrap_err();
    assert_eq!(err.kind, ConvertErrorKind::MissingTitle);
}

#[test]
fn test_extract_title_rejects_paragraph_start() {
    let err = extract_title("no heading here").unwrap_err();
    assert_eq!(err.kind, ConvertErrorKind::MissingTitle);
}

#[test]
fn test_extract_title_empty_document() {
    let err = extract_title("\n\n  \n\n").unwrap_err();
    assert_eq!(err.kind, ConvertErrorKind::MissingTitle);
}

// ============================================================================
// Node Tree Rendering Tests
// ============================================================================

#[test]
fn test_leaf_without_tag_renders_bare_value() {
    let node = HtmlNode::text("raw text");
    assert_eq!(node.to_html().unwrap(), "raw text");
}

#[test]
fn test_leaf_attrs_preserve_insertion_order() {
    let node = HtmlNode::leaf_with_attrs(
        "a",
        "Click me!",
        vec![("href", "https://example.com"), ("target", "_blank")],
    );

    assert_eq!(
        node.to_html().unwrap(),
        "<a href=\"https://example.com\" target=\"_blank\">Click me!</a>"
    );
}

#[test]
fn test_empty_leaf_value_fails() {
    let err = HtmlNode::leaf("p", "").to_html().unwrap_err();
    assert_eq!(err.kind, ConvertErrorKind::EmptyValue);

    let err = HtmlNode::text("").to_html().unwrap_err();
    assert_eq!(err.kind, ConvertErrorKind::EmptyValue);
}

#[test]
fn test_empty_img_value_is_allowed() {
    let node = HtmlNode::leaf_with_attrs("img", "", vec![("src", "cat.png"), ("alt", "cat")]);
    assert_eq!(node.to_html().unwrap(), "<img src=\"cat.png\" alt=\"cat\">");
}

#[test]
fn test_parent_without_children_fails() {
    let err = HtmlNode::parent("div", vec![]).to_html().unwrap_err();
    assert_eq!(err.kind, ConvertErrorKind::EmptyChildren);
}

#[test]
fn test_parent_without_tag_fails() {
    let err = HtmlNode::parent("", vec![HtmlNode::text("x")])
        .to_html()
        .unwrap_err();
    assert_eq!(err.kind, ConvertErrorKind::MissingTag);
}

#[test]
fn test_nested_parents_concatenate_children() {
    let node = HtmlNode::parent(
        "pre",
        vec![HtmlNode::parent(
            "code",
            vec![HtmlNode::text("a"), HtmlNode::leaf("b", "c")],
        )],
    );

    assert_eq!(node.to_html().unwrap(), "<pre><code>a<b>c</b></code></pre>");
}

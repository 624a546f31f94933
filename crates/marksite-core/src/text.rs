//! Typed inline text spans.
//!
//! A span is a contiguous run of inline text tagged with one semantic kind.
//! Spans are produced by the inline tokenizer, borrow directly from the
//! block text, and are consumed when converted to leaf nodes.

use crate::html::HtmlNode;

/// Semantic kind of an inline span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextKind {
    /// Unformatted text.
    Plain,
    /// `**bold**` text.
    Bold,
    /// `*italic*` text.
    Italic,
    /// `` `code` `` text.
    Code,
    /// `[label](url)` hyperlink.
    Link,
    /// `![alt](url)` image.
    Image,
}

/// A run of inline text with one semantic kind - zero-copy.
///
/// `url` is `Some` exactly for `Link` and `Image` spans; the constructors
/// maintain that invariant. Equality is structural over all three fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextSpan<'a> {
    /// The span text (link label or image alt text for those kinds).
    pub text: &'a str,
    /// Semantic kind.
    pub kind: TextKind,
    /// Destination URL for links and images.
    pub url: Option<&'a str>,
}

impl<'a> TextSpan<'a> {
    /// Create a span of the given non-link kind.
    #[inline]
    pub fn new(text: &'a str, kind: TextKind) -> Self {
        Self {
            text,
            kind,
            url: None,
        }
    }

    /// Create a plain text span.
    #[inline]
    pub fn plain(text: &'a str) -> Self {
        Self::new(text, TextKind::Plain)
    }

    /// Create a link span.
    #[inline]
    pub fn link(text: &'a str, url: &'a str) -> Self {
        Self {
            text,
            kind: TextKind::Link,
            url: Some(url),
        }
    }

    /// Create an image span with alt text.
    #[inline]
    pub fn image(alt: &'a str, url: &'a str) -> Self {
        Self {
            text: alt,
            kind: TextKind::Image,
            url: Some(url),
        }
    }

    /// Convert this span to a leaf node.
    ///
    /// Images become empty-valued `img` leaves carrying `src` and `alt`
    /// attributes; everything else carries its text as the leaf value.
    pub fn to_leaf(&self) -> HtmlNode {
        match self.kind {
            TextKind::Plain => HtmlNode::text(self.text),
            TextKind::Bold => HtmlNode::leaf("b", self.text),
            TextKind::Italic => HtmlNode::leaf("i", self.text),
            TextKind::Code => HtmlNode::leaf("code", self.text),
            TextKind::Link => HtmlNode::leaf_with_attrs(
                "a",
                self.text,
                vec![("href", self.url.unwrap_or_default())],
            ),
            TextKind::Image => HtmlNode::leaf_with_attrs(
                "img",
                "",
                vec![("src", self.url.unwrap_or_default()), ("alt", self.text)],
            ),
        }
    }
}

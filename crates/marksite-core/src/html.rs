//! Renderable HTML node tree.
//!
//! The tree has exactly two node shapes: leaves holding literal text and
//! parents holding an ordered list of child nodes. Block compilation builds
//! the tree bottom-up; `to_html` serializes it in a single pass.
//!
//! No escaping is performed anywhere: Markdown source text and attribute
//! values pass through verbatim.

use crate::error::ConvertError;

/// Insertion-ordered attribute list.
///
/// Serialization order must be deterministic, so attributes are a sequence
/// of pairs rather than a map.
pub type Attrs = Vec<(String, String)>;

/// A node in the renderable HTML tree.
///
/// Represented as a closed sum type with a pattern-matched `to_html`
/// instead of virtual dispatch over a base class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    /// A childless node holding literal text.
    ///
    /// Renders as the bare value when `tag` is `None`, otherwise as
    /// `<tag attrs>value</tag>`.
    Leaf {
        /// Wrapping tag, or `None` for raw text.
        tag: Option<String>,
        /// Literal text content.
        value: String,
        /// Attributes in insertion order.
        attrs: Attrs,
    },
    /// A tagged node wrapping an ordered sequence of children.
    Parent {
        /// Wrapping tag (must be non-empty).
        tag: String,
        /// Child nodes in document order (must be non-empty).
        children: Vec<HtmlNode>,
        /// Attributes in insertion order.
        attrs: Attrs,
    },
}

impl HtmlNode {
    /// Create an untagged leaf holding raw text.
    #[inline]
    pub fn text(value: impl Into<String>) -> Self {
        HtmlNode::Leaf {
            tag: None,
            value: value.into(),
            attrs: Vec::new(),
        }
    }

    /// Create a tagged leaf with no attributes.
    #[inline]
    pub fn leaf(tag: impl Into<String>, value: impl Into<String>) -> Self {
        HtmlNode::Leaf {
            tag: Some(tag.into()),
            value: value.into(),
            attrs: Vec::new(),
        }
    }

    /// Create a tagged leaf with attributes.
    pub fn leaf_with_attrs(
        tag: impl Into<String>,
        value: impl Into<String>,
        attrs: Vec<(&str, &str)>,
    ) -> Self {
        HtmlNode::Leaf {
            tag: Some(tag.into()),
            value: value.into(),
            attrs: attrs
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    /// Create a parent node with no attributes.
    #[inline]
    pub fn parent(tag: impl Into<String>, children: Vec<HtmlNode>) -> Self {
        HtmlNode::Parent {
            tag: tag.into(),
            children,
            attrs: Vec::new(),
        }
    }

    /// Serialize this node and all descendants to an HTML string.
    ///
    /// Fails with `EmptyValue` for a valueless leaf, `MissingTag` for an
    /// untagged parent, and `EmptyChildren` for a childless parent. The
    /// `img` tag is the one sanctioned empty-value leaf: it renders as a
    /// void element with no closing tag.
    pub fn to_html(&self) -> Result<String, ConvertError> {
        match self {
            HtmlNode::Leaf { tag, value, attrs } => match tag.as_deref() {
                Some("img") => Ok(format!("<img{}>", attrs_to_html(attrs))),
                Some(tag) => {
                    if value.is_empty() {
                        return Err(ConvertError::empty_value());
                    }
                    Ok(format!("<{}{}>{}</{}>", tag, attrs_to_html(attrs), value, tag))
                }
                None => {
                    if value.is_empty() {
                        return Err(ConvertError::empty_value());
                    }
                    Ok(value.clone())
                }
            },
            HtmlNode::Parent {
                tag,
                children,
                attrs,
            } => {
                if tag.is_empty() {
                    return Err(ConvertError::missing_tag());
                }
                if children.is_empty() {
                    return Err(ConvertError::empty_children(tag));
                }
                let mut html = format!("<{}{}>", tag, attrs_to_html(attrs));
                for child in children {
                    html.push_str(&child.to_html()?);
                }
                html.push_str("</");
                html.push_str(tag);
                html.push('>');
                Ok(html)
            }
        }
    }
}

/// Serialize attributes as ` key="value"` pairs in insertion order.
///
/// An empty list yields an empty string. Values are emitted verbatim.
pub fn attrs_to_html(attrs: &Attrs) -> String {
    let mut html = String::new();
    for (key, value) in attrs {
        html.push(' ');
        html.push_str(key);
        html.push_str("=\"");
        html.push_str(value);
        html.push('"');
    }
    html
}

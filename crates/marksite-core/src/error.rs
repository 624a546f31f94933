use std::fmt;

/// Error kinds for categorizing conversion failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConvertErrorKind {
    /// A leaf node was rendered with an empty value
    EmptyValue,
    /// A parent node was rendered without a tag
    MissingTag,
    /// A parent node was rendered without children
    EmptyChildren,
    /// An inline delimiter (`**`, `*`, `` ` ``) was opened but never closed
    UnterminatedDelimiter,
    /// The document does not start with a level-1 heading
    MissingTitle,
}

/// A conversion error with a human-readable message.
///
/// All errors are contract violations in the input Markdown or in a
/// hand-built node tree. None are recoverable: conversion produces no
/// partial output on failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertError {
    /// Human-readable error message
    pub message: String,
    /// Error categorization
    pub kind: ConvertErrorKind,
}

impl ConvertError {
    /// Create a new conversion error.
    pub fn new(message: impl Into<String>, kind: ConvertErrorKind) -> Self {
        Self {
            message: message.into(),
            kind,
        }
    }

    /// Create an error for a leaf node with no value.
    pub fn empty_value() -> Self {
        Self::new("leaf node must have a value", ConvertErrorKind::EmptyValue)
    }

    /// Create an error for a parent node with no tag.
    pub fn missing_tag() -> Self {
        Self::new("parent node must have a tag", ConvertErrorKind::MissingTag)
    }

    /// Create an error for a parent node with no children.
    pub fn empty_children(tag: &str) -> Self {
        Self::new(
            format!("parent node <{}> must have at least one child", tag),
            ConvertErrorKind::EmptyChildren,
        )
    }

    /// Create an error for an unclosed inline delimiter.
    pub fn unterminated_delimiter(delimiter: &str, text: &str) -> Self {
        Self::new(
            format!("unclosed {:?} delimiter in {:?}", delimiter, text),
            ConvertErrorKind::UnterminatedDelimiter,
        )
    }

    /// Create an error for a document without a title heading.
    pub fn missing_title() -> Self {
        Self::new(
            "document does not start with a level-1 heading",
            ConvertErrorKind::MissingTitle,
        )
    }
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ConvertError {}

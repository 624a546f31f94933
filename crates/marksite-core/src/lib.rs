//! # Marksite Core
//!
//! A small, deterministic Markdown-to-HTML converter for static site
//! generation.
//!
//! Marksite supports a constrained Markdown dialect (headings, fenced
//! code, quotes, flat lists, paragraphs; bold/italic/code/link/image
//! inlines) and converts each document to a single HTML string via an
//! explicit node tree.
//!
//! ## Quick Start
//!
//! ```rust
//! use marksite_core::{extract_title, markdown_to_html_node};
//!
//! let input = "# Title\n\nHello **world**!";
//!
//! assert_eq!(extract_title(input).unwrap(), "Title");
//!
//! let tree = markdown_to_html_node(input).unwrap();
//! assert_eq!(
//!     tree.to_html().unwrap(),
//!     "<div><h1>Title</h1><p>Hello <b>world</b>!</p></div>"
//! );
//! ```
//!
//! ## Pipeline
//!
//! Raw Markdown is split into blank-line-separated blocks, each block is
//! classified and compiled into a node subtree (running the inline
//! tokenizer over its text), and all subtrees are gathered under one
//! `<div>` root. Serialization is escaping-free: source text passes
//! through verbatim.
//!
//! ## Errors
//!
//! Malformed input (an unclosed `**`, a document without a title heading)
//! or a malformed hand-built tree surfaces as a [`ConvertError`]; no
//! partial output is produced.

pub mod block;
pub mod document;
pub mod error;
pub mod html;
pub mod inline;
pub mod text;

pub use block::{classify_block, segment_blocks, BlockKind};
pub use document::{extract_title, markdown_to_html, markdown_to_html_node};
pub use error::{ConvertError, ConvertErrorKind};
pub use html::HtmlNode;
pub use inline::text_to_spans;
pub use text::{TextKind, TextSpan};

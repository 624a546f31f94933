//! Zero-allocation inline tokenizer.
//!
//! Turns the text of one block into an ordered sequence of [`TextSpan`]s.
//! The pipeline is strictly ordered and each stage rewrites only `Plain`
//! spans, passing every other kind through untouched:
//!
//! 1. `**` delimiter split (bold)
//! 2. `*` delimiter split (italic)
//! 3. `` ` `` delimiter split (code)
//! 4. image extraction (`![alt](url)`)
//! 5. link extraction (`[label](url)`)
//!
//! Uses SIMD-accelerated scanning via `memchr` and borrows directly from
//! the block text.

use memchr::memchr;

use crate::error::ConvertError;
use crate::text::{TextKind, TextSpan};

/// A single `![alt](url)` or `[label](url)` occurrence in a plain span.
///
/// `start..end` is the byte range of the exact literal markup, including
/// the `!` prefix for images.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InlineMatch<'a> {
    /// Link label or image alt text.
    pub label: &'a str,
    /// Destination URL.
    pub url: &'a str,
    /// Byte offset of the first markup character.
    pub start: usize,
    /// Byte offset one past the closing parenthesis.
    pub end: usize,
}

/// Tokenize block text into inline spans.
///
/// This is the sole entry point used by block compilation. The input is
/// treated as one plain span and run through the full pipeline.
pub fn text_to_spans(text: &str) -> Result<Vec<TextSpan<'_>>, ConvertError> {
    let spans = vec![TextSpan::plain(text)];
    let spans = split_delimiter(spans, "**", TextKind::Bold)?;
    let spans = split_delimiter(spans, "*", TextKind::Italic)?;
    let spans = split_delimiter(spans, "`", TextKind::Code)?;
    let spans = split_images(spans);
    Ok(split_links(spans))
}

/// Split every plain span on a paired delimiter.
///
/// Splitting on the delimiter must yield an odd number of parts (an even
/// delimiter count); otherwise an opening delimiter is unmatched and the
/// whole tokenization fails. Even-indexed parts stay plain, odd-indexed
/// parts become `kind`. Empty parts are dropped.
pub fn split_delimiter<'a>(
    spans: Vec<TextSpan<'a>>,
    delimiter: &str,
    kind: TextKind,
) -> Result<Vec<TextSpan<'a>>, ConvertError> {
    let mut out = Vec::with_capacity(spans.len());

    for span in spans {
        if span.kind != TextKind::Plain {
            out.push(span);
            continue;
        }

        let parts: Vec<&str> = span.text.split(delimiter).collect();
        if parts.len() % 2 == 0 {
            return Err(ConvertError::unterminated_delimiter(delimiter, span.text));
        }

        for (i, part) in parts.into_iter().enumerate() {
            if part.is_empty() {
                continue;
            }
            if i % 2 == 1 {
                out.push(TextSpan::new(part, kind));
            } else {
                out.push(TextSpan::plain(part));
            }
        }
    }

    Ok(out)
}

/// Extract every `![alt](url)` occurrence, leftmost first.
#[inline]
pub fn extract_images(text: &str) -> Vec<InlineMatch<'_>> {
    scan_bracket_pairs(text, true)
}

/// Extract every `[label](url)` occurrence, leftmost first.
///
/// Image syntax is excluded: a bracket immediately preceded by `!` never
/// matches.
#[inline]
pub fn extract_links(text: &str) -> Vec<InlineMatch<'_>> {
    scan_bracket_pairs(text, false)
}

/// Scan for non-overlapping `[label](url)` pairs.
///
/// Both bracket groups are matched non-greedily: the label ends at the
/// first `]` and the url at the first `)`. Neither may span a line break.
/// `image` selects whether brackets with or without a `!` prefix match.
fn scan_bracket_pairs(text: &str, image: bool) -> Vec<InlineMatch<'_>> {
    let bytes = text.as_bytes();
    let mut matches = Vec::new();
    let mut pos = 0;

    while let Some(offset) = memchr(b'[', &bytes[pos..]) {
        let open = pos + offset;
        pos = open + 1;

        let has_bang = open > 0 && bytes[open - 1] == b'!';
        if has_bang != image {
            continue;
        }

        let close = match memchr(b']', &bytes[open + 1..]) {
            Some(offset) => open + 1 + offset,
            None => break,
        };
        if memchr(b'\n', &bytes[open + 1..close]).is_some() {
            continue;
        }
        if bytes.get(close + 1) != Some(&b'(') {
            continue;
        }

        let paren = match memchr(b')', &bytes[close + 2..]) {
            Some(offset) => close + 2 + offset,
            None => break,
        };
        if memchr(b'\n', &bytes[close + 2..paren]).is_some() {
            continue;
        }

        matches.push(InlineMatch {
            label: &text[open + 1..close],
            url: &text[close + 2..paren],
            start: if image { open - 1 } else { open },
            end: paren + 1,
        });
        pos = paren + 1;
    }

    matches
}

/// Split every plain span at its image occurrences.
pub fn split_images<'a>(spans: Vec<TextSpan<'a>>) -> Vec<TextSpan<'a>> {
    split_matches(spans, extract_images, TextSpan::image)
}

/// Split every plain span at its link occurrences.
pub fn split_links<'a>(spans: Vec<TextSpan<'a>>) -> Vec<TextSpan<'a>> {
    split_matches(spans, extract_links, TextSpan::link)
}

/// Cut plain spans at extracted occurrences, in source order.
///
/// The cursor walks the span text from match to match: any non-empty text
/// before a match becomes a plain span, the match itself becomes a span
/// via `make`, and a non-empty remainder after the last match becomes a
/// trailing plain span. A span with no matches passes through unchanged,
/// exactly once.
fn split_matches<'a>(
    spans: Vec<TextSpan<'a>>,
    extract: for<'t> fn(&'t str) -> Vec<InlineMatch<'t>>,
    make: fn(&'a str, &'a str) -> TextSpan<'a>,
) -> Vec<TextSpan<'a>> {
    let mut out = Vec::with_capacity(spans.len());

    for span in spans {
        if span.kind != TextKind::Plain {
            out.push(span);
            continue;
        }

        let text = span.text;
        let matches = extract(text);
        if matches.is_empty() {
            out.push(span);
            continue;
        }

        let mut cursor = 0;
        for m in matches {
            if m.start > cursor {
                out.push(TextSpan::plain(&text[cursor..m.start]));
            }
            out.push(make(m.label, m.url));
            cursor = m.end;
        }
        if cursor < text.len() {
            out.push(TextSpan::plain(&text[cursor..]));
        }
    }

    out
}

// crates/logix-export/src/text/blocks.rs

//! Locates `KEYWORD ... END_KEYWORD` spans in the plaintext grammar.
//!
//! The scanner is a cursor with an explicit depth counter. Same-keyword
//! blocks may nest to any depth; only the outermost span is returned and
//! scanning resumes after it. An opening keyword with no matching end marker
//! produces no span. Keywords inside double-quoted strings are not markers.

use alloc::vec::Vec;
use log::trace;

/// A block span, markers included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block<'a> {
    /// Byte offset of the opening keyword in the scanned text.
    pub start: usize,
    /// Byte offset just past the closing `END_KEYWORD` marker.
    pub end: usize,
    /// `&text[start..end]`.
    pub text: &'a str,
}

impl<'a> Block<'a> {
    /// True if `other` lies entirely within this block.
    pub fn contains(&self, other: &Block<'_>) -> bool {
        other.start >= self.start && other.end <= self.end
    }

    /// The text between `offset` (relative to the block start) and the
    /// closing `END_KEYWORD` marker.
    pub fn body_from(&self, offset: usize, keyword: &str) -> &'a str {
        let body_end = self.text.len().saturating_sub(END_PREFIX.len() + keyword.len());
        if offset >= body_end {
            return "";
        }
        &self.text[offset..body_end]
    }
}

const END_PREFIX: &str = "END_";

/// Returns every outermost `keyword ... END_keyword` span in `text`, in order.
pub fn extract_blocks<'a>(text: &'a str, keyword: &str) -> Vec<Block<'a>> {
    let mut blocks = Vec::new();
    let quoted = quoted_spans(text);
    let mut cursor = 0;

    while let Some(open) = find_open(text, keyword, cursor, &quoted) {
        match find_close(text, keyword, open, &quoted) {
            Some(end) => {
                blocks.push(Block {
                    start: open,
                    end,
                    text: &text[open..end],
                });
                cursor = end;
            }
            None => {
                trace!(
                    "Unterminated {} block at offset {}; skipping",
                    keyword, open
                );
                cursor = open + keyword.len();
            }
        }
    }

    blocks
}

/// Walks forward from an opening keyword at `open`, returning the offset just
/// past the `END_` marker that brings the depth back to zero.
fn find_close(text: &str, keyword: &str, open: usize, quoted: &[(usize, usize)]) -> Option<usize> {
    let mut depth = 1usize;
    let mut cursor = open + keyword.len();

    loop {
        let next_end = find_end_marker(text, keyword, cursor, quoted)?;
        match find_open(text, keyword, cursor, quoted) {
            Some(nested) if nested < next_end => {
                depth += 1;
                cursor = nested + keyword.len();
            }
            _ => {
                depth -= 1;
                cursor = next_end + END_PREFIX.len() + keyword.len();
                if depth == 0 {
                    return Some(cursor);
                }
            }
        }
    }
}

/// Next word-bounded `keyword` at or after `from` that is not part of an
/// `END_keyword` marker or a quoted string.
fn find_open(text: &str, keyword: &str, from: usize, quoted: &[(usize, usize)]) -> Option<usize> {
    let mut cursor = from;
    while let Some(pos) = find_word(text, keyword, cursor) {
        if !text[..pos].ends_with(END_PREFIX) && !is_quoted(quoted, pos) {
            return Some(pos);
        }
        cursor = pos + keyword.len();
    }
    None
}

/// Next word-bounded `END_keyword` at or after `from`, outside quotes.
fn find_end_marker(
    text: &str,
    keyword: &str,
    from: usize,
    quoted: &[(usize, usize)],
) -> Option<usize> {
    let bytes = text.as_bytes();
    let mut cursor = from;

    while let Some(rel) = text.get(cursor..)?.find(END_PREFIX) {
        let pos = cursor + rel;
        let keyword_start = pos + END_PREFIX.len();
        let before_ok = pos == 0 || !is_word_byte(bytes[pos - 1]);
        if before_ok
            && text[keyword_start..].starts_with(keyword)
            && !is_word_byte_at(bytes, keyword_start + keyword.len())
            && !is_quoted(quoted, pos)
        {
            return Some(pos);
        }
        cursor = keyword_start;
    }
    None
}

/// Finds `word` at or after `from` with non-word characters (or the text
/// edges) on both sides.
fn find_word(text: &str, word: &str, from: usize) -> Option<usize> {
    let bytes = text.as_bytes();
    let mut cursor = from;

    while cursor <= text.len() {
        let rel = text.get(cursor..)?.find(word)?;
        let pos = cursor + rel;
        let before_ok = pos == 0 || !is_word_byte(bytes[pos - 1]);
        let after_ok = !is_word_byte_at(bytes, pos + word.len());
        if before_ok && after_ok {
            return Some(pos);
        }
        cursor = pos + word.len();
    }
    None
}

/// Byte ranges of the double-quoted strings in `text`, quotes included.
///
/// Both `""` and `\"` are escapes. An unclosed string runs to the end.
fn quoted_spans(text: &str) -> Vec<(usize, usize)> {
    let bytes = text.as_bytes();
    let mut spans = Vec::new();
    let mut idx = 0;

    while idx < bytes.len() {
        if bytes[idx] != b'"' {
            idx += 1;
            continue;
        }
        let start = idx;
        idx += 1;
        while idx < bytes.len() {
            match (bytes[idx], bytes.get(idx + 1)) {
                (b'\\', Some(b'"')) | (b'"', Some(b'"')) => idx += 2,
                (b'"', _) => {
                    idx += 1;
                    break;
                }
                _ => idx += 1,
            }
        }
        spans.push((start, idx));
    }
    spans
}

fn is_quoted(quoted: &[(usize, usize)], pos: usize) -> bool {
    let after = quoted.partition_point(|&(start, _)| start <= pos);
    after > 0 && pos < quoted[after - 1].1
}

fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

fn is_word_byte_at(bytes: &[u8], idx: usize) -> bool {
    bytes.get(idx).is_some_and(|b| is_word_byte(*b))
}

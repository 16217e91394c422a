// crates/logix-export/src/text/header.rs

//! Splits a block's opening line into its name and raw attribute group.

use super::find_matching;

/// The opening of a `KEYWORD Name (attributes)` block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockHeader<'a> {
    /// First whitespace-delimited token after the keyword. Empty if absent.
    pub name: &'a str,
    /// Interior of the attribute group following the name, or `""`.
    pub attributes: &'a str,
    /// Offset (relative to the block start) where the block body begins.
    pub body_start: usize,
}

/// Parses the header of a block span that starts with `keyword`.
///
/// The attribute group is closed by its *matching* parenthesis, so quoted
/// strings and nested groups inside it are carried through intact.
pub fn parse_block_header<'a>(block: &'a str, keyword: &str) -> BlockHeader<'a> {
    let after_keyword = block.strip_prefix(keyword).unwrap_or(block);
    let offset = block.len() - after_keyword.len();

    let trimmed = after_keyword.trim_start();
    let name_start = offset + (after_keyword.len() - trimmed.len());
    let name_len = trimmed
        .find(|c: char| c.is_whitespace() || c == '(' || c == ';')
        .unwrap_or(trimmed.len());
    let name = &block[name_start..name_start + name_len];
    let name_end = name_start + name_len;

    let rest = &block[name_end..];
    let rest_trimmed = rest.trim_start();
    let group_start = name_end + (rest.len() - rest_trimmed.len());

    if rest_trimmed.starts_with('(') {
        if let Some(close) = find_matching(rest_trimmed, '(', ')') {
            return BlockHeader {
                name,
                attributes: &rest_trimmed[1..close],
                body_start: group_start + close + 1,
            };
        }
    }

    BlockHeader {
        name,
        attributes: "",
        body_start: name_end,
    }
}

// crates/logix-export/src/text/attributes.rs

//! Parser for the interior of a `(Key := Value, ...)` attribute group.

use alloc::collections::BTreeMap;
use alloc::string::String;

/// Attribute key → raw value. Values are always strings; callers coerce.
pub type AttributeMap = BTreeMap<String, String>;

/// Parses `Key := Value, Key := "quoted", ...` into a map.
///
/// Quoted values support both doubled (`""`) and backslash (`\"`) quote
/// escapes. Unquoted values run to the next top-level comma and may contain
/// balanced parentheses or brackets. Parsing stops quietly at the first entry
/// without a `:=`.
pub fn parse_attribute_list(input: &str) -> AttributeMap {
    let mut map = AttributeMap::new();
    let mut rest = input;

    loop {
        rest = rest.trim_start_matches(|c: char| c.is_whitespace() || c == ',');
        if rest.is_empty() {
            break;
        }

        let Some(assign) = find_top_level(rest, ":=") else {
            break;
        };
        let key = rest[..assign].trim();
        rest = rest[assign + 2..].trim_start();

        let (value, consumed) = if rest.starts_with('"') {
            let (value, quoted_len) = read_quoted(rest);
            // Anything between the closing quote and the comma is dropped.
            let tail = &rest[quoted_len..];
            let skip = find_top_level(tail, ",").unwrap_or(tail.len());
            (value, quoted_len + skip)
        } else {
            let end = find_top_level(rest, ",").unwrap_or(rest.len());
            (String::from(rest[..end].trim()), end)
        };

        if !key.is_empty() {
            map.insert(String::from(key), value);
        }
        rest = &rest[consumed..];
    }

    map
}

/// Case-insensitive attribute lookup (`RADIX` and `Radix` are the same key).
pub fn attr<'m>(map: &'m AttributeMap, key: &str) -> Option<&'m str> {
    map.iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(key))
        .map(|(_, v)| v.as_str())
}

/// Like [`attr`], returning an owned value and mapping empty strings to `None`.
pub fn attr_string(map: &AttributeMap, key: &str) -> Option<String> {
    attr(map, key).filter(|v| !v.is_empty()).map(String::from)
}

/// Coerces a `Yes`/`No`/`true`/`false`/`1`/`0` attribute.
pub fn attr_flag(map: &AttributeMap, key: &str) -> Option<bool> {
    attr(map, key).and_then(parse_flag)
}

/// Parses the boolean spellings used by both export formats.
pub fn parse_flag(value: &str) -> Option<bool> {
    let v = value.trim();
    if v.eq_ignore_ascii_case("yes") || v.eq_ignore_ascii_case("true") || v == "1" {
        Some(true)
    } else if v.eq_ignore_ascii_case("no") || v.eq_ignore_ascii_case("false") || v == "0" {
        Some(false)
    } else {
        None
    }
}

/// Reads a double-quoted string at the start of `input`.
///
/// Returns the unescaped contents and the number of bytes consumed,
/// including both quotes. An unterminated string consumes the whole input.
fn read_quoted(input: &str) -> (String, usize) {
    let mut value = String::new();
    let mut chars = input.char_indices().skip(1).peekable();

    while let Some((idx, c)) = chars.next() {
        match c {
            '\\' if matches!(chars.peek(), Some((_, '"'))) => {
                value.push('"');
                chars.next();
            }
            '"' if matches!(chars.peek(), Some((_, '"'))) => {
                value.push('"');
                chars.next();
            }
            '"' => return (value, idx + 1),
            _ => value.push(c),
        }
    }

    (value, input.len())
}

/// Byte offset of the first `needle` outside quotes and outside any
/// parenthesized or bracketed group.
pub(crate) fn find_top_level(input: &str, needle: &str) -> Option<usize> {
    let bytes = input.as_bytes();
    let mut depth = 0usize;
    let mut in_quote = false;
    let mut idx = 0;

    while idx < bytes.len() {
        let b = bytes[idx];
        if in_quote {
            if b == b'\\' && bytes.get(idx + 1) == Some(&b'"') {
                idx += 2;
                continue;
            }
            if b == b'"' {
                in_quote = false;
            }
            idx += 1;
            continue;
        }

        match b {
            b'"' => in_quote = true,
            b'(' | b'[' => depth += 1,
            b')' | b']' => depth = depth.saturating_sub(1),
            _ if depth == 0 && bytes[idx..].starts_with(needle.as_bytes()) => return Some(idx),
            _ => {}
        }
        idx += 1;
    }
    None
}

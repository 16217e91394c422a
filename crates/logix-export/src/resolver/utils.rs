// crates/logix-export/src/resolver/utils.rs

//! Utility functions for the resolver.

use crate::model::common::{FormattedData, TextBlock};
use crate::text::attributes::parse_flag;
use alloc::string::String;

/// Language preferred among localized descriptions and comments.
const DEFAULT_LANG: &str = "en-US";

/// Trimmed, non-empty text of a string slice.
pub(super) fn non_empty(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// An optional attribute as an owned string, empty values treated as absent.
pub(super) fn attribute(value: &Option<String>) -> Option<String> {
    value.as_deref().and_then(non_empty).map(String::from)
}

/// An optional `true`/`false` attribute; absent or unrecognised is `false`.
pub(super) fn flag(value: &Option<String>) -> bool {
    value.as_deref().and_then(parse_flag).unwrap_or(false)
}

/// Text of a description or comment element.
///
/// The direct text node wins. Otherwise the non-empty `en-US` localized
/// child is preferred, then the first non-empty one in any language.
pub(super) fn text_of(block: Option<&TextBlock>) -> Option<String> {
    let block = block?;
    let localized = |lang: Option<&str>| {
        block
            .localized
            .iter()
            .filter(|l| lang.is_none() || l.lang.as_deref() == lang)
            .find_map(|l| l.text.as_deref().and_then(non_empty))
    };
    block
        .text
        .as_deref()
        .and_then(non_empty)
        .or_else(|| localized(Some(DEFAULT_LANG)))
        .or_else(|| localized(None))
        .map(String::from)
}

/// An array dimension attribute; `0` means scalar.
pub(super) fn dimension(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .and_then(non_empty)
        .filter(|d| *d != "0")
        .map(String::from)
}

/// The text of the `Format="L5K"` entry of a `Data`/`DefaultData` list.
pub(super) fn l5k_data(data: &[FormattedData]) -> Option<String> {
    data.iter()
        .find(|d| {
            d.format
                .as_deref()
                .is_some_and(|f| f.eq_ignore_ascii_case("L5K"))
        })
        .and_then(|d| d.text.as_deref())
        .and_then(non_empty)
        .map(String::from)
}

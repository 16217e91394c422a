// crates/logix-export/src/model/common.rs

//! Text-bearing elements shared by several sections.

use alloc::string::String;
use alloc::vec::Vec;
use serde::Deserialize;

/// A `<Description>` or `<Comment>` element.
///
/// Single-language projects put the text directly in the element (usually
/// as CDATA). Multi-language projects wrap it in `LocalizedDescription` or
/// `LocalizedComment` children, one per language.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct TextBlock {
    #[serde(rename = "$text", default)]
    pub text: Option<String>,

    #[serde(rename = "LocalizedDescription", alias = "LocalizedComment", default)]
    pub localized: Vec<LocalizedText>,
}

/// `<LocalizedDescription Lang="en-US">...</LocalizedDescription>`
#[derive(Debug, Deserialize, Default, Clone)]
pub struct LocalizedText {
    #[serde(rename = "@Lang", default)]
    pub lang: Option<String>,

    #[serde(rename = "$text", default)]
    pub text: Option<String>,
}

/// A `<Data>` or `<DefaultData>` element; only the `Format="L5K"` variant
/// carries plain text.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct FormattedData {
    #[serde(rename = "@Format", default)]
    pub format: Option<String>,

    #[serde(rename = "$text", default)]
    pub text: Option<String>,
}

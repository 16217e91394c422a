// crates/logix-export/src/model/tags.rs

//! `<Tags>` sections (controller and program scope).

use super::common::{FormattedData, TextBlock};
use alloc::string::String;
use alloc::vec::Vec;
use serde::Deserialize;

#[derive(Debug, Deserialize, Default)]
pub struct Tags {
    #[serde(rename = "Tag", default)]
    pub tag: Vec<Tag>,
}

#[derive(Debug, Deserialize, Default)]
pub struct Tag {
    #[serde(rename = "@Name")]
    pub name: String,

    /// `Base`, `Alias`, `Produced` or `Consumed`.
    #[serde(rename = "@TagType", default)]
    pub tag_type: Option<String>,

    #[serde(rename = "@DataType", default)]
    pub data_type: Option<String>,

    #[serde(rename = "@Dimensions", default)]
    pub dimensions: Option<String>,

    #[serde(rename = "@Radix", default)]
    pub radix: Option<String>,

    #[serde(rename = "@AliasFor", default)]
    pub alias_for: Option<String>,

    #[serde(rename = "@Usage", default)]
    pub usage: Option<String>,

    #[serde(rename = "@Constant", default)]
    pub constant: Option<String>,

    #[serde(rename = "@ExternalAccess", default)]
    pub external_access: Option<String>,

    #[serde(rename = "Description", default)]
    pub description: Option<TextBlock>,

    #[serde(rename = "Data", default)]
    pub data: Vec<FormattedData>,
}

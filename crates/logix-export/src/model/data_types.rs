// crates/logix-export/src/model/data_types.rs

//! `<DataTypes>` section.

use super::common::TextBlock;
use alloc::string::String;
use alloc::vec::Vec;
use serde::Deserialize;

#[derive(Debug, Deserialize, Default)]
pub struct DataTypes {
    #[serde(rename = "DataType", default)]
    pub data_type: Vec<DataType>,
}

#[derive(Debug, Deserialize, Default)]
pub struct DataType {
    #[serde(rename = "@Name")]
    pub name: String,

    #[serde(rename = "@Family", default)]
    pub family: Option<String>,

    #[serde(rename = "Description", default)]
    pub description: Option<TextBlock>,

    #[serde(rename = "Members", default)]
    pub members: Option<Members>,
}

#[derive(Debug, Deserialize, Default)]
pub struct Members {
    #[serde(rename = "Member", default)]
    pub member: Vec<Member>,
}

/// `<Member>`. Bit members carry `Target`/`BitNumber`, which are not
/// reported.
#[derive(Debug, Deserialize, Default)]
pub struct Member {
    #[serde(rename = "@Name")]
    pub name: String,

    #[serde(rename = "@DataType", default)]
    pub data_type: String,

    #[serde(rename = "@Dimension", default)]
    pub dimension: Option<String>,

    #[serde(rename = "@Radix", default)]
    pub radix: Option<String>,

    #[serde(rename = "@Hidden", default)]
    pub hidden: Option<String>,

    #[serde(rename = "@ExternalAccess", default)]
    pub external_access: Option<String>,

    #[serde(rename = "Description", default)]
    pub description: Option<TextBlock>,
}

// crates/logix-export/src/model/aoi.rs

//! `<AddOnInstructionDefinitions>` section.

use super::common::{FormattedData, TextBlock};
use super::programs::Routines;
use alloc::string::String;
use alloc::vec::Vec;
use serde::Deserialize;

#[derive(Debug, Deserialize, Default)]
pub struct AddOnInstructionDefinitions {
    #[serde(rename = "AddOnInstructionDefinition", default)]
    pub definition: Vec<AddOnInstructionDefinition>,
}

#[derive(Debug, Deserialize, Default)]
pub struct AddOnInstructionDefinition {
    #[serde(rename = "@Name")]
    pub name: String,

    #[serde(rename = "@Revision", default)]
    pub revision: Option<String>,

    #[serde(rename = "@Vendor", default)]
    pub vendor: Option<String>,

    #[serde(rename = "@ExecutePrescan", default)]
    pub execute_prescan: Option<String>,

    #[serde(rename = "@ExecutePostscan", default)]
    pub execute_postscan: Option<String>,

    #[serde(rename = "@ExecuteEnableInFalse", default)]
    pub execute_enable_in_false: Option<String>,

    #[serde(rename = "@CreatedDate", default)]
    pub created_date: Option<String>,

    #[serde(rename = "@CreatedBy", default)]
    pub created_by: Option<String>,

    #[serde(rename = "@EditedDate", default)]
    pub edited_date: Option<String>,

    #[serde(rename = "@EditedBy", default)]
    pub edited_by: Option<String>,

    #[serde(rename = "Description", default)]
    pub description: Option<TextBlock>,

    #[serde(rename = "Parameters", default)]
    pub parameters: Option<Parameters>,

    #[serde(rename = "LocalTags", default)]
    pub local_tags: Option<LocalTags>,

    #[serde(rename = "Routines", default)]
    pub routines: Option<Routines>,
}

#[derive(Debug, Deserialize, Default)]
pub struct Parameters {
    #[serde(rename = "Parameter", default)]
    pub parameter: Vec<Parameter>,
}

#[derive(Debug, Deserialize, Default)]
pub struct Parameter {
    #[serde(rename = "@Name")]
    pub name: String,

    #[serde(rename = "@DataType", default)]
    pub data_type: String,

    #[serde(rename = "@Usage", default)]
    pub usage: Option<String>,

    #[serde(rename = "@Dimensions", default)]
    pub dimensions: Option<String>,

    #[serde(rename = "@Radix", default)]
    pub radix: Option<String>,

    #[serde(rename = "@Required", default)]
    pub required: Option<String>,

    #[serde(rename = "@Visible", default)]
    pub visible: Option<String>,

    #[serde(rename = "@ExternalAccess", default)]
    pub external_access: Option<String>,

    #[serde(rename = "Description", default)]
    pub description: Option<TextBlock>,

    #[serde(rename = "DefaultData", default)]
    pub default_data: Vec<FormattedData>,
}

#[derive(Debug, Deserialize, Default)]
pub struct LocalTags {
    #[serde(rename = "LocalTag", default)]
    pub local_tag: Vec<LocalTag>,
}

#[derive(Debug, Deserialize, Default)]
pub struct LocalTag {
    #[serde(rename = "@Name")]
    pub name: String,

    #[serde(rename = "@DataType", default)]
    pub data_type: String,

    #[serde(rename = "@Dimensions", default)]
    pub dimensions: Option<String>,

    #[serde(rename = "@Radix", default)]
    pub radix: Option<String>,

    #[serde(rename = "@ExternalAccess", default)]
    pub external_access: Option<String>,

    #[serde(rename = "Description", default)]
    pub description: Option<TextBlock>,

    #[serde(rename = "DefaultData", default)]
    pub default_data: Vec<FormattedData>,
}

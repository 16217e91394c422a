// crates/logix-export/src/model/programs.rs

//! `<Programs>` section and the routine structure shared with AOIs.

use super::common::TextBlock;
use super::tags::Tags;
use alloc::string::String;
use alloc::vec::Vec;
use serde::Deserialize;

#[derive(Debug, Deserialize, Default)]
pub struct Programs {
    #[serde(rename = "Program", default)]
    pub program: Vec<Program>,
}

#[derive(Debug, Deserialize, Default)]
pub struct Program {
    #[serde(rename = "@Name")]
    pub name: String,

    #[serde(rename = "@MainRoutineName", default)]
    pub main_routine_name: Option<String>,

    #[serde(rename = "@Disabled", default)]
    pub disabled: Option<String>,

    #[serde(rename = "Description", default)]
    pub description: Option<TextBlock>,

    #[serde(rename = "Tags", default)]
    pub tags: Option<Tags>,

    #[serde(rename = "Routines", default)]
    pub routines: Option<Routines>,
}

#[derive(Debug, Deserialize, Default)]
pub struct Routines {
    #[serde(rename = "Routine", default)]
    pub routine: Vec<Routine>,
}

/// `<Routine Type="RLL">`. Only ladder content is modelled; `STContent`,
/// `FBDContent` and `SFCContent` are skipped.
#[derive(Debug, Deserialize, Default)]
pub struct Routine {
    #[serde(rename = "@Name")]
    pub name: String,

    #[serde(rename = "@Type", default)]
    pub routine_type: Option<String>,

    #[serde(rename = "Description", default)]
    pub description: Option<TextBlock>,

    #[serde(rename = "RLLContent", default)]
    pub rll_content: Option<RllContent>,
}

#[derive(Debug, Deserialize, Default)]
pub struct RllContent {
    #[serde(rename = "Rung", default)]
    pub rung: Vec<Rung>,
}

#[derive(Debug, Deserialize, Default)]
pub struct Rung {
    #[serde(rename = "@Number", default)]
    pub number: Option<String>,

    #[serde(rename = "Comment", default)]
    pub comment: Option<TextBlock>,

    #[serde(rename = "Text", default)]
    pub text: Option<String>,
}

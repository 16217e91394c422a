// crates/logix-export/src/model/mod.rs

//! Internal `serde` data structures that map directly to the L5X document.
//!
//! Only the elements the resolver consumes are modelled; everything else
//! (tasks, trends, module configuration blobs) is skipped by the
//! deserializer. Repeated elements are always `Vec<T>` with `default`, so a
//! single child and a list of children deserialize the same way. These
//! structs are not intended for direct public use.

#![allow(clippy::pedantic)] // L5X naming conventions differ from Rust

use alloc::string::String;
use serde::Deserialize;

pub mod aoi;
pub mod common;
pub mod data_types;
pub mod modules;
pub mod programs;
pub mod tags;

pub use aoi::AddOnInstructionDefinitions;
pub use data_types::DataTypes;
pub use modules::Modules;
pub use programs::Programs;
pub use tags::Tags;

/// Name of the document root element.
pub const ROOT_ELEMENT: &str = "RSLogix5000Content";

/// The root element, `<RSLogix5000Content>`.
#[derive(Debug, Deserialize, Default)]
#[serde(rename = "RSLogix5000Content")]
pub struct RsLogixContent {
    #[serde(rename = "@SoftwareRevision", default)]
    pub software_revision: Option<String>,

    #[serde(rename = "@TargetName", default)]
    pub target_name: Option<String>,

    #[serde(rename = "@TargetType", default)]
    pub target_type: Option<String>,

    #[serde(rename = "@ExportDate", default)]
    pub export_date: Option<String>,

    #[serde(rename = "Controller", default)]
    pub controller: Option<Controller>,
}

/// `<Controller>`: the container of every project section.
#[derive(Debug, Deserialize, Default)]
pub struct Controller {
    #[serde(rename = "@Name", default)]
    pub name: Option<String>,

    #[serde(rename = "@ProcessorType", default)]
    pub processor_type: Option<String>,

    #[serde(rename = "@MajorRev", default)]
    pub major_rev: Option<String>,

    #[serde(rename = "@MinorRev", default)]
    pub minor_rev: Option<String>,

    #[serde(rename = "DataTypes", default)]
    pub data_types: Option<DataTypes>,

    #[serde(rename = "Modules", default)]
    pub modules: Option<Modules>,

    #[serde(rename = "AddOnInstructionDefinitions", default)]
    pub add_on_instructions: Option<AddOnInstructionDefinitions>,

    #[serde(rename = "Tags", default)]
    pub tags: Option<Tags>,

    #[serde(rename = "Programs", default)]
    pub programs: Option<Programs>,
}

// crates/logix-export/src/model/modules.rs

//! `<Modules>` section.

use alloc::string::String;
use alloc::vec::Vec;
use serde::Deserialize;

#[derive(Debug, Deserialize, Default)]
pub struct Modules {
    #[serde(rename = "Module", default)]
    pub module: Vec<Module>,
}

#[derive(Debug, Deserialize, Default)]
pub struct Module {
    #[serde(rename = "@Name", default)]
    pub name: String,

    #[serde(rename = "@CatalogNumber", default)]
    pub catalog_number: Option<String>,

    #[serde(rename = "@Vendor", default)]
    pub vendor: Option<String>,

    #[serde(rename = "@ParentModule", default)]
    pub parent_module: Option<String>,

    #[serde(rename = "@Inhibited", default)]
    pub inhibited: Option<String>,

    #[serde(rename = "Ports", default)]
    pub ports: Option<Ports>,
}

#[derive(Debug, Deserialize, Default)]
pub struct Ports {
    #[serde(rename = "Port", default)]
    pub port: Vec<Port>,
}

/// `<Port>`: a backplane port's address is a slot number, a network port's
/// address is an IP address or node number.
#[derive(Debug, Deserialize, Default)]
pub struct Port {
    #[serde(rename = "@Address", default)]
    pub address: Option<String>,

    #[serde(rename = "@Upstream", default)]
    pub upstream: Option<String>,
}

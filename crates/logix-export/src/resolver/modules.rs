// crates/logix-export/src/resolver/modules.rs

use super::utils::{attribute, flag, non_empty};
use crate::model;
use crate::model::modules::Port;
use crate::types::IoModule;
use alloc::string::String;
use alloc::vec::Vec;

pub(super) fn resolve_modules(modules: Option<&model::Modules>) -> Vec<IoModule> {
    let Some(modules) = modules else {
        return Vec::new();
    };

    modules
        .module
        .iter()
        .map(|module| {
            let ports = module
                .ports
                .as_ref()
                .map(|p| p.port.as_slice())
                .unwrap_or_default();
            IoModule {
                name: module.name.clone(),
                catalog_number: attribute(&module.catalog_number),
                parent_module: attribute(&module.parent_module),
                slot: slot(ports),
                connection_info: network_address(ports),
                vendor: attribute(&module.vendor),
                inhibited: flag(&module.inhibited),
            }
        })
        .collect()
}

/// The numeric address of the upstream port, or of the first port with a
/// numeric address when no port is marked upstream.
fn slot(ports: &[Port]) -> Option<u32> {
    let numeric = |port: &Port| -> Option<u32> { port.address.as_deref()?.trim().parse().ok() };

    ports
        .iter()
        .filter(|p| flag(&p.upstream))
        .find_map(numeric)
        .or_else(|| ports.iter().find_map(numeric))
}

/// The first port address that is not a plain number, e.g. an IP address.
fn network_address(ports: &[Port]) -> Option<String> {
    ports
        .iter()
        .filter_map(|p| p.address.as_deref().and_then(non_empty))
        .find(|address| !address.bytes().all(|b| b.is_ascii_digit()))
        .map(String::from)
}

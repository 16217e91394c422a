// crates/logix-export/src/l5k/modules.rs

//! `MODULE ... END_MODULE` blocks.

use crate::text::attributes::{attr, attr_flag, attr_string, parse_attribute_list};
use crate::text::blocks::extract_blocks;
use crate::text::header::parse_block_header;
use crate::types::IoModule;
use alloc::string::String;
use alloc::vec::Vec;

const MODULE: &str = "MODULE";

/// Parses every I/O module in `text`.
pub(super) fn parse_modules(text: &str) -> Vec<IoModule> {
    extract_blocks(text, MODULE)
        .iter()
        .filter_map(|block| {
            let header = parse_block_header(block.text, MODULE);
            if header.name.is_empty() {
                return None;
            }
            let attributes = parse_attribute_list(header.attributes);

            Some(IoModule {
                name: String::from(header.name),
                catalog_number: attr_string(&attributes, "CatalogNumber"),
                parent_module: attr_string(&attributes, "Parent"),
                slot: attr(&attributes, "Slot").and_then(|s| s.trim().parse().ok()),
                connection_info: attr(&attributes, "NodeAddress")
                    .map(str::trim)
                    .filter(|a| !a.is_empty() && *a != "-1")
                    .map(String::from),
                vendor: attr_string(&attributes, "Vendor"),
                inhibited: attr_flag(&attributes, "Inhibited").unwrap_or(false),
            })
        })
        .collect()
}

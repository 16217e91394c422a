// crates/logix-export/src/l5k/data_types.rs

//! `DATATYPE ... END_DATATYPE` blocks.

use crate::text::attributes::{attr_string, parse_attribute_list};
use crate::text::blocks::extract_blocks;
use crate::text::declaration::{collect_declarations, parse_member_declaration};
use crate::text::header::parse_block_header;
use crate::types::{Udt, UdtMember};
use alloc::string::String;
use alloc::vec::Vec;
use log::trace;

const DATATYPE: &str = "DATATYPE";

/// Parses every user-defined type in `text`.
///
/// Hidden members (the backing `SINT`s of `BIT` members) are not reported,
/// and a type left with no members is omitted.
pub(super) fn parse_data_types(text: &str) -> Vec<Udt> {
    let mut udts = Vec::new();

    for block in extract_blocks(text, DATATYPE) {
        let header = parse_block_header(block.text, DATATYPE);
        if header.name.is_empty() {
            trace!("DATATYPE block at offset {} has no name", block.start);
            continue;
        }
        let attributes = parse_attribute_list(header.attributes);

        let members: Vec<UdtMember> = collect_declarations(block.body_from(header.body_start, DATATYPE))
            .iter()
            .filter_map(|line| parse_member_declaration(line))
            .filter(|member| !member.flag("Hidden").unwrap_or(false))
            .map(|member| UdtMember {
                radix: member.attr("Radix"),
                external_access: member.attr("ExternalAccess"),
                description: member.attr("Description"),
                name: member.name,
                data_type: member.data_type,
                dimension: member.dimensions,
            })
            .collect();

        if members.is_empty() {
            trace!("DATATYPE {} has no visible members; omitted", header.name);
            continue;
        }

        udts.push(Udt {
            name: String::from(header.name),
            description: attr_string(&attributes, "Description"),
            family_type: attr_string(&attributes, "FamilyType"),
            members,
        });
    }
    udts
}

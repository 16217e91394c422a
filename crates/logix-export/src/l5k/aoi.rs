// crates/logix-export/src/l5k/aoi.rs

//! `ADD_ON_INSTRUCTION_DEFINITION` blocks.

use super::routines::parse_routines;
use crate::text::attributes::{AttributeMap, attr_flag, attr_string, parse_attribute_list};
use crate::text::blocks::extract_blocks;
use crate::text::declaration::{TagDeclaration, collect_declarations, parse_tag_declaration};
use crate::text::header::parse_block_header;
use crate::types::{Aoi, AoiLocalTag, AoiParameter, ParameterUsage};
use alloc::string::String;
use alloc::vec::Vec;
use log::{debug, trace};

const AOI_DEFINITION: &str = "ADD_ON_INSTRUCTION_DEFINITION";
const PARAMETERS: &str = "PARAMETERS";
const LOCAL_TAGS: &str = "LOCAL_TAGS";

/// Parses every Add-On Instruction definition in `text`.
pub(super) fn parse_aois(text: &str) -> Vec<Aoi> {
    let mut aois = Vec::new();

    for block in extract_blocks(text, AOI_DEFINITION) {
        let header = parse_block_header(block.text, AOI_DEFINITION);
        if header.name.is_empty() {
            trace!("{} block at offset {} has no name", AOI_DEFINITION, block.start);
            continue;
        }
        let attributes = parse_attribute_list(header.attributes);
        let body = block.body_from(header.body_start, AOI_DEFINITION);

        let parameters: Vec<AoiParameter> = section_declarations(body, PARAMETERS)
            .into_iter()
            .map(parameter_from_declaration)
            .collect();
        let local_tags: Vec<AoiLocalTag> = section_declarations(body, LOCAL_TAGS)
            .into_iter()
            .map(local_tag_from_declaration)
            .collect();
        let logic = parse_routines(body, header.name);

        debug!(
            "AOI {}: {} parameters, {} local tags, {} routines",
            header.name,
            parameters.len(),
            local_tags.len(),
            logic.routines.len()
        );

        let mut aoi = definition_attributes(header.name, &attributes);
        aoi.parameters = parameters;
        aoi.local_tags = local_tags;
        aoi.routines = logic.routines;
        aoi.rungs = logic.rungs;
        aois.push(aoi);
    }
    aois
}

fn definition_attributes(name: &str, attributes: &AttributeMap) -> Aoi {
    Aoi {
        name: String::from(name),
        description: attr_string(attributes, "Description"),
        revision: attr_string(attributes, "Revision"),
        vendor: attr_string(attributes, "Vendor"),
        execute_prescan: attr_flag(attributes, "ExecutePrescan").unwrap_or(false),
        execute_postscan: attr_flag(attributes, "ExecutePostscan").unwrap_or(false),
        execute_enable_in_false: attr_flag(attributes, "ExecuteEnableInFalse").unwrap_or(false),
        created_date: attr_string(attributes, "CreatedDate"),
        created_by: attr_string(attributes, "CreatedBy"),
        edited_date: attr_string(attributes, "EditedDate"),
        edited_by: attr_string(attributes, "EditedBy"),
        ..Default::default()
    }
}

/// Declarations of every `keyword ... END_keyword` section in `body`.
fn section_declarations(body: &str, keyword: &str) -> Vec<TagDeclaration> {
    extract_blocks(body, keyword)
        .iter()
        .flat_map(|section| collect_declarations(section.body_from(keyword.len(), keyword)))
        .filter_map(|line| parse_tag_declaration(&line))
        .collect()
}

fn parameter_from_declaration(decl: TagDeclaration) -> AoiParameter {
    AoiParameter {
        usage: decl
            .attr("Usage")
            .and_then(|u| ParameterUsage::parse(&u))
            .unwrap_or_default(),
        description: decl.attr("Description"),
        radix: decl.attr("Radix"),
        external_access: decl.attr("ExternalAccess"),
        required: decl.flag("Required").unwrap_or(false),
        visible: decl.flag("Visible").unwrap_or(false),
        name: decl.name,
        data_type: decl.data_type,
        dimensions: decl.dimensions,
        default_value: decl.value,
    }
}

fn local_tag_from_declaration(decl: TagDeclaration) -> AoiLocalTag {
    AoiLocalTag {
        description: decl.attr("Description"),
        radix: decl.attr("Radix"),
        external_access: decl.attr("ExternalAccess"),
        name: decl.name,
        data_type: decl.data_type,
        dimensions: decl.dimensions,
        default_value: decl.value,
    }
}

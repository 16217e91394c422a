// crates/logix-export/src/l5k/mod.rs

//! Structural parser for the L5K plaintext export.
//!
//! The orchestrator locates the `CONTROLLER` block and hands each section
//! to a sub-module. Only a missing controller block is fatal; every other
//! irregularity is resolved by omission.

use crate::error::ExportError;
use crate::text::attributes::parse_attribute_list;
use crate::text::blocks::extract_blocks;
use crate::text::header::parse_block_header;
use crate::types::ParseResult;
use log::debug;

mod aoi;
mod controller;
mod data_types;
mod modules;
mod programs;
mod routines;
mod tags;

const CONTROLLER: &str = "CONTROLLER";
const PROGRAM: &str = "PROGRAM";

/// Parses a complete L5K export.
pub(crate) fn parse_l5k(content: &str) -> Result<ParseResult, ExportError> {
    // 1. The controller block is the root of everything else.
    let controller = extract_blocks(content, CONTROLLER)
        .into_iter()
        .next()
        .ok_or(ExportError::MissingRootBlock {
            keyword: CONTROLLER,
        })?;

    let header = parse_block_header(controller.text, CONTROLLER);
    let attributes = parse_attribute_list(header.attributes);
    let banner = &content[..controller.start];
    let metadata = controller::resolve_metadata(header.name, &attributes, banner);

    // 2. Program spans decide which TAG blocks are controller-scoped.
    let text = controller.text;
    let program_blocks = extract_blocks(text, PROGRAM);

    let mut tags = tags::controller_tags(text, &program_blocks);
    let udts = data_types::parse_data_types(text);
    let aois = aoi::parse_aois(text);
    let modules = modules::parse_modules(text);
    let section = programs::parse_programs(&program_blocks);

    debug!(
        "L5K controller '{}': {} controller tags, {} programs, {} routines, {} rungs, {} UDTs, {} AOIs, {} modules",
        header.name,
        tags.len(),
        section.programs.len(),
        section.routines.len(),
        section.rungs.len(),
        udts.len(),
        aois.len(),
        modules.len()
    );

    tags.extend(section.tags);

    Ok(ParseResult {
        metadata,
        tags,
        modules,
        programs: section.programs,
        routines: section.routines,
        rungs: section.rungs,
        udts,
        aois,
    })
}

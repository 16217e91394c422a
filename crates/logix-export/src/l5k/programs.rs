// crates/logix-export/src/l5k/programs.rs

//! `PROGRAM ... END_PROGRAM` blocks: program-scoped tags, routines and rungs.

use super::routines::parse_routines;
use super::tags::program_tags;
use crate::text::attributes::{attr_flag, attr_string, parse_attribute_list};
use crate::text::blocks::Block;
use crate::text::header::parse_block_header;
use crate::types::{Program, Routine, Rung, Tag};
use alloc::string::String;
use alloc::vec::Vec;
use log::{debug, trace};

const PROGRAM: &str = "PROGRAM";

/// Everything contributed by the program blocks of a controller.
#[derive(Debug, Default)]
pub(super) struct ProgramSection {
    pub programs: Vec<Program>,
    pub tags: Vec<Tag>,
    pub routines: Vec<Routine>,
    pub rungs: Vec<Rung>,
}

pub(super) fn parse_programs(blocks: &[Block<'_>]) -> ProgramSection {
    let mut section = ProgramSection::default();

    for block in blocks {
        let header = parse_block_header(block.text, PROGRAM);
        if header.name.is_empty() {
            trace!("PROGRAM block at offset {} has no name", block.start);
            continue;
        }
        let attributes = parse_attribute_list(header.attributes);
        let name = header.name;

        let tags = program_tags(block, name);
        let logic = parse_routines(block.text, name);
        debug!(
            "Program {}: {} tags, {} routines, {} rungs",
            name,
            tags.len(),
            logic.routines.len(),
            logic.rungs.len()
        );

        section.programs.push(Program {
            name: String::from(name),
            description: attr_string(&attributes, "Description"),
            main_routine: attr_string(&attributes, "MAIN"),
            disabled: attr_flag(&attributes, "Disabled")
                .or_else(|| attr_flag(&attributes, "DisableFlag"))
                .unwrap_or(false),
        });
        section.tags.extend(tags);
        section.routines.extend(logic.routines);
        section.rungs.extend(logic.rungs);
    }
    section
}

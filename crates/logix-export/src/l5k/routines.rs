// crates/logix-export/src/l5k/routines.rs

//! Routine blocks of a program or an Add-On Instruction.

use crate::logic::build_rung;
use crate::text::attributes::{attr_string, parse_attribute_list};
use crate::text::blocks::extract_blocks;
use crate::text::header::parse_block_header;
use crate::text::rungs::split_rungs;
use crate::types::{Routine, Rung};
use alloc::string::String;
use alloc::vec::Vec;

/// Block keyword and the routine type it declares.
const ROUTINE_KINDS: &[(&str, &str)] = &[
    ("ROUTINE", "RLL"),
    ("ST_ROUTINE", "ST"),
    ("FBD_ROUTINE", "FBD"),
    ("SFC_ROUTINE", "SFC"),
];

/// Routines and ladder rungs found in `text`.
#[derive(Debug, Default)]
pub(super) struct RoutineSection {
    pub routines: Vec<Routine>,
    pub rungs: Vec<Rung>,
}

/// Parses every routine block in `text`, in source order.
///
/// `owner` becomes the `program_name` of each routine and rung. Only
/// ladder (`ROUTINE`) blocks are split into rungs; the other kinds are
/// listed without a rung count.
pub(super) fn parse_routines(text: &str, owner: &str) -> RoutineSection {
    let mut found: Vec<(usize, Routine, Vec<Rung>)> = Vec::new();

    for &(keyword, routine_type) in ROUTINE_KINDS {
        for block in extract_blocks(text, keyword) {
            let header = parse_block_header(block.text, keyword);
            if header.name.is_empty() {
                continue;
            }
            let attributes = parse_attribute_list(header.attributes);
            let mut routine = Routine {
                name: String::from(header.name),
                program_name: String::from(owner),
                routine_type: String::from(routine_type),
                description: attr_string(&attributes, "Description"),
                rung_count: None,
            };

            let mut rungs = Vec::new();
            if routine_type == "RLL" {
                rungs = split_rungs(block.body_from(header.body_start, keyword))
                    .into_iter()
                    .map(|rung| {
                        build_rung(rung.number, header.name, owner, rung.content, rung.comment)
                    })
                    .collect();
                routine.rung_count = Some(rungs.len());
            }
            found.push((block.start, routine, rungs));
        }
    }

    found.sort_by_key(|(start, _, _)| *start);

    let mut section = RoutineSection::default();
    for (_, routine, rungs) in found {
        section.routines.push(routine);
        section.rungs.extend(rungs);
    }
    section
}

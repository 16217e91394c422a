// crates/logix-export/src/resolver/routines.rs

use super::utils::{attribute, text_of};
use crate::logic::build_rung;
use crate::model::programs::{Routines, Rung as RungElement};
use crate::text::rungs::normalize_rung_text;
use crate::types::{Routine, Rung};
use alloc::string::String;
use alloc::vec::Vec;
use log::trace;

const LADDER: &str = "RLL";

/// Maps a `<Routines>` section; `owner` is the program or AOI name.
pub(super) fn resolve_routines(routines: Option<&Routines>, owner: &str) -> (Vec<Routine>, Vec<Rung>) {
    let mut resolved = Vec::new();
    let mut rungs = Vec::new();

    for routine in routines.iter().flat_map(|r| r.routine.iter()) {
        let routine_type = attribute(&routine.routine_type).unwrap_or_else(|| String::from(LADDER));
        let is_ladder = routine_type.eq_ignore_ascii_case(LADDER);

        let mut rung_count = None;
        if is_ladder {
            let elements = routine
                .rll_content
                .as_ref()
                .map(|c| c.rung.as_slice())
                .unwrap_or_default();
            rung_count = Some(elements.len());
            rungs.extend(
                elements
                    .iter()
                    .enumerate()
                    .map(|(position, element)| resolve_rung(element, position, &routine.name, owner)),
            );
        }

        resolved.push(Routine {
            name: routine.name.clone(),
            program_name: String::from(owner),
            routine_type,
            description: text_of(routine.description.as_ref()),
            rung_count,
        });
    }
    (resolved, rungs)
}

/// The rung number is the declared `Number` attribute; the position in the
/// list is used only when that attribute is missing or malformed.
fn resolve_rung(element: &RungElement, position: usize, routine_name: &str, owner: &str) -> Rung {
    let number = match element.number.as_deref().map(|n| n.trim().parse::<u32>()) {
        Some(Ok(number)) => number,
        _ => {
            trace!(
                "Rung {} of {}/{} has no usable Number; using its position",
                position, owner, routine_name
            );
            position as u32
        }
    };

    let content = normalize_rung_text(element.text.as_deref().unwrap_or(""));

    build_rung(
        number,
        routine_name,
        owner,
        content,
        text_of(element.comment.as_ref()),
    )
}

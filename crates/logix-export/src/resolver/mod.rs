// crates/logix-export/src/resolver/mod.rs

//! Maps the deserialized L5X document onto the public project model.
//!
//! This module contains the `resolve_content` orchestrator and one
//! sub-module per controller section.

use crate::error::ExportError;
use crate::model::RsLogixContent;
use crate::types::{ParseResult, TagScope};
use log::debug;

// --- Sub-modules ---

mod aoi;
mod controller;
mod data_types;
mod modules;
mod programs;
mod routines;
mod tags;
mod utils;

/// Resolves the public [`ParseResult`] from the raw deserialized document.
pub(crate) fn resolve_content(content: RsLogixContent) -> Result<ParseResult, ExportError> {
    let controller = content
        .controller
        .as_ref()
        .ok_or(ExportError::MissingElement {
            element: "Controller",
        })?;

    let metadata = controller::resolve_metadata(&content, controller);
    let mut tags = tags::resolve_tags(controller.tags.as_ref(), &TagScope::Controller);
    let udts = data_types::resolve_data_types(controller.data_types.as_ref());
    let modules = modules::resolve_modules(controller.modules.as_ref());
    let aois = aoi::resolve_aois(controller.add_on_instructions.as_ref());
    let resolved = programs::resolve_programs(controller.programs.as_ref());

    debug!(
        "L5X controller {:?}: {} controller tags, {} programs, {} routines, {} rungs, {} UDTs, {} AOIs, {} modules",
        metadata.project_name,
        tags.len(),
        resolved.programs.len(),
        resolved.routines.len(),
        resolved.rungs.len(),
        udts.len(),
        aois.len(),
        modules.len()
    );

    tags.extend(resolved.tags);

    Ok(ParseResult {
        metadata,
        tags,
        modules,
        programs: resolved.programs,
        routines: resolved.routines,
        rungs: resolved.rungs,
        udts,
        aois,
    })
}

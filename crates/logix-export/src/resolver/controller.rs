// crates/logix-export/src/resolver/controller.rs

use super::utils::attribute;
use crate::model::{Controller, RsLogixContent};
use crate::types::ProjectMetadata;
use alloc::format;

/// Builds the project metadata from the root attributes and the controller.
pub(super) fn resolve_metadata(root: &RsLogixContent, controller: &Controller) -> ProjectMetadata {
    let software_revision = attribute(&root.software_revision).or_else(|| {
        let major = attribute(&controller.major_rev)?;
        Some(match attribute(&controller.minor_rev) {
            Some(minor) => format!("{}.{}", major, minor),
            None => major,
        })
    });

    ProjectMetadata {
        project_name: attribute(&controller.name).or_else(|| attribute(&root.target_name)),
        processor_type: attribute(&controller.processor_type),
        software_revision,
        target_type: attribute(&root.target_type),
        target_name: attribute(&root.target_name),
        export_date: attribute(&root.export_date),
    }
}

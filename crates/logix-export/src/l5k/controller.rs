// crates/logix-export/src/l5k/controller.rs

//! Project metadata from the `CONTROLLER` header and the export banner.

use crate::text::attributes::{AttributeMap, attr, attr_string};
use crate::types::ProjectMetadata;
use alloc::format;
use alloc::string::String;

/// Builds the project metadata.
///
/// `banner` is the text preceding the controller block, which normally
/// holds the `(* ... *)` export banner with `Version :=` and `Exported :=`
/// lines.
pub(super) fn resolve_metadata(
    controller_name: &str,
    attributes: &AttributeMap,
    banner: &str,
) -> ProjectMetadata {
    let name = (!controller_name.is_empty()).then(|| String::from(controller_name));

    ProjectMetadata {
        project_name: name.clone(),
        processor_type: attr_string(attributes, "ProcessorType"),
        software_revision: software_revision(attributes)
            .or_else(|| banner_value(banner, "Version").and_then(version_from_banner)),
        target_type: Some(String::from("Controller")),
        target_name: name,
        export_date: banner_value(banner, "Exported").map(String::from),
    }
}

/// `major.minor` from the `Major`/`Minor` (or `MajorRev`/`MinorRev`) attributes.
fn software_revision(attributes: &AttributeMap) -> Option<String> {
    let major = attr(attributes, "Major")
        .or_else(|| attr(attributes, "MajorRev"))
        .filter(|v| !v.is_empty())?;
    let minor = attr(attributes, "Minor")
        .or_else(|| attr(attributes, "MinorRev"))
        .filter(|v| !v.is_empty());

    Some(match minor {
        Some(minor) => format!("{}.{}", major, minor),
        None => String::from(major),
    })
}

/// Finds `Key := value` on a banner line.
fn banner_value<'a>(banner: &'a str, key: &str) -> Option<&'a str> {
    banner.lines().find_map(|line| {
        let line = line.trim();
        let rest = line.strip_prefix(key)?;
        let value = rest.trim_start().strip_prefix(":=")?.trim();
        (!value.is_empty()).then_some(value)
    })
}

/// `RSLogix 5000 v32.00` → `32.00`.
fn version_from_banner(version: &str) -> Option<String> {
    version
        .split_whitespace()
        .rev()
        .find_map(|token| token.strip_prefix('v').or_else(|| token.strip_prefix('V')))
        .filter(|v| v.starts_with(|c: char| c.is_ascii_digit()))
        .map(String::from)
}

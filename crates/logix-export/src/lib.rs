// crates/logix-export/src/lib.rs

#![no_std]
#![doc = "Parses Logix 5000 project exports into a format-agnostic project model."]
#![doc = ""]
#![doc = "This `no_std + alloc` library reads both interchange formats:"]
#![doc = "- `load_l5k_from_str`: the plaintext `.L5K` block grammar."]
#![doc = "- `load_l5x_from_str`: the `.L5X` XML document."]
#![doc = "- `load_project_from_str`: either, selected by `SourceFormat`."]
#![doc = ""]
#![doc = "Both produce the same `ParseResult`: tags, I/O modules, programs,"]
#![doc = "routines, ladder rungs with classified tag references, user-defined"]
#![doc = "types, Add-On Instructions and project metadata."]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

// --- Crate Modules ---

mod error;
mod l5k;
mod model;
mod parser;
mod resolver;
mod types;

pub mod logic;
pub mod text;

// --- Public API Re-exports ---

pub use error::ExportError;
pub use logic::{
    INSTRUCTION_MNEMONICS, READ_PATTERNS, WRITE_PATTERNS, analyze_rung, classify_usage,
    extract_tag_references,
};
pub use parser::{load_l5k_from_str, load_l5x_from_str, load_project_from_str};
pub use text::attributes::parse_attribute_list;
pub use text::blocks::extract_blocks;
pub use text::declaration::parse_tag_declaration;
pub use text::header::parse_block_header;
pub use text::rungs::split_rungs;
pub use types::{
    Aoi, AoiLocalTag, AoiParameter, IoModule, ParameterUsage, ParseResult, Program,
    ProjectMetadata, Routine, Rung, SourceFormat, Tag, TagReference, TagScope, Udt, UdtMember,
    UsageType,
};

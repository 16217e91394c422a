// crates/logix-export/src/types.rs

//! Public, format-agnostic data structures for a parsed controller project.
//!
//! Both the L5K and the L5X parsers populate the same [`ParseResult`]. The
//! structures are plain values: they hold no references into the input and
//! are `Serialize` so a persistence layer can take them as-is.

use alloc::string::String;
use alloc::vec::Vec;
use serde::Serialize;

// --- Source Format ---

/// The interchange format of an export buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SourceFormat {
    /// The nested plaintext block grammar (`.L5K`).
    L5k,
    /// The XML document (`.L5X`).
    L5x,
}

impl SourceFormat {
    /// Guesses the format from the buffer contents.
    ///
    /// An XML document starts with `<` (a declaration or the root element)
    /// once leading whitespace and a byte-order mark are skipped; anything else
    /// is treated as the plaintext grammar.
    pub fn detect(content: &str) -> Self {
        let trimmed = content.trim_start_matches('\u{feff}').trim_start();
        if trimmed.starts_with('<') {
            SourceFormat::L5x
        } else {
            SourceFormat::L5k
        }
    }

    /// Maps a file extension (without the dot, any case) to a format.
    pub fn from_extension(ext: &str) -> Option<Self> {
        if ext.eq_ignore_ascii_case("l5k") {
            Some(SourceFormat::L5k)
        } else if ext.eq_ignore_ascii_case("l5x") {
            Some(SourceFormat::L5x)
        } else {
            None
        }
    }
}

// --- Root Result ---

/// The unified result of parsing one export.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseResult {
    pub metadata: ProjectMetadata,
    /// Controller-scoped tags followed by program-scoped tags, in source order.
    pub tags: Vec<Tag>,
    pub modules: Vec<IoModule>,
    pub programs: Vec<Program>,
    pub routines: Vec<Routine>,
    /// Rungs of every program routine. AOI rungs live on their [`Aoi`].
    pub rungs: Vec<Rung>,
    pub udts: Vec<Udt>,
    pub aois: Vec<Aoi>,
}

impl ParseResult {
    /// Iterates every tag reference of every program rung.
    pub fn tag_references(&self) -> impl Iterator<Item = &TagReference> {
        self.rungs.iter().flat_map(|r| r.tag_references.iter())
    }

    /// Returns all rungs belonging to the given program routine, in order.
    pub fn rungs_of<'a>(
        &'a self,
        program_name: &'a str,
        routine_name: &'a str,
    ) -> impl Iterator<Item = &'a Rung> {
        self.rungs
            .iter()
            .filter(move |r| r.program_name == program_name && r.routine_name == routine_name)
    }
}

// --- Project Metadata ---

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectMetadata {
    pub project_name: Option<String>,
    pub processor_type: Option<String>,
    pub software_revision: Option<String>,
    pub target_type: Option<String>,
    pub target_name: Option<String>,
    pub export_date: Option<String>,
}

// --- Tags ---

/// Visibility level of a tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum TagScope {
    Controller,
    Program(String),
}

impl Default for TagScope {
    fn default() -> Self {
        Self::Controller
    }
}

impl TagScope {
    /// The program name for program-scoped tags.
    pub fn program(&self) -> Option<&str> {
        match self {
            TagScope::Controller => None,
            TagScope::Program(name) => Some(name.as_str()),
        }
    }
}

/// A named data point. Duplicate names within a scope are kept as-is.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub name: String,
    /// Empty for alias tags.
    pub data_type: String,
    pub scope: TagScope,
    pub description: Option<String>,
    pub value: Option<String>,
    pub alias_for: Option<String>,
    pub usage: Option<String>,
    pub radix: Option<String>,
    pub external_access: Option<String>,
    pub dimensions: Option<String>,
    pub constant: bool,
}

// --- I/O Modules ---

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IoModule {
    pub name: String,
    pub catalog_number: Option<String>,
    pub parent_module: Option<String>,
    pub slot: Option<u32>,
    /// Network address of the module, when it has one.
    pub connection_info: Option<String>,
    pub vendor: Option<String>,
    pub inhibited: bool,
}

// --- Programs & Routines ---

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Program {
    pub name: String,
    pub description: Option<String>,
    pub main_routine: Option<String>,
    pub disabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Routine {
    pub name: String,
    /// Owning program, or the AOI name for routines nested in an AOI.
    pub program_name: String,
    /// Logic language: `RLL`, `ST`, `FBD` or `SFC`.
    #[serde(rename = "type")]
    pub routine_type: String,
    pub description: Option<String>,
    /// `None` unless the body is ladder logic.
    pub rung_count: Option<usize>,
}

/// One ladder statement.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Rung {
    pub number: u32,
    pub routine_name: String,
    pub program_name: String,
    /// Ladder text with the comment stripped and no trailing `;`.
    pub content: String,
    pub comment: Option<String>,
    pub tag_references: Vec<TagReference>,
}

/// How a rung touches a tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UsageType {
    Read,
    Write,
    Both,
}

/// A candidate tag name found in a rung. Not checked against the tag list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TagReference {
    pub tag_name: String,
    pub routine_name: String,
    pub program_name: String,
    pub rung_number: u32,
    pub usage_type: UsageType,
}

// --- User-Defined Types ---

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Udt {
    pub name: String,
    pub description: Option<String>,
    pub family_type: Option<String>,
    /// Never empty; zero-member types are not reported.
    pub members: Vec<UdtMember>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UdtMember {
    pub name: String,
    pub data_type: String,
    pub dimension: Option<String>,
    pub radix: Option<String>,
    pub external_access: Option<String>,
    pub description: Option<String>,
}

// --- Add-On Instructions ---

/// Direction of an AOI parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ParameterUsage {
    Input,
    Output,
    InOut,
}

impl Default for ParameterUsage {
    fn default() -> Self {
        Self::Input
    }
}

impl ParameterUsage {
    /// Parses the `Usage` attribute value. Unknown values yield `None`.
    pub fn parse(value: &str) -> Option<Self> {
        if value.eq_ignore_ascii_case("Input") {
            Some(Self::Input)
        } else if value.eq_ignore_ascii_case("Output") {
            Some(Self::Output)
        } else if value.eq_ignore_ascii_case("InOut") {
            Some(Self::InOut)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AoiParameter {
    pub name: String,
    pub data_type: String,
    pub usage: ParameterUsage,
    pub description: Option<String>,
    pub radix: Option<String>,
    pub external_access: Option<String>,
    pub dimensions: Option<String>,
    pub default_value: Option<String>,
    pub required: bool,
    pub visible: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AoiLocalTag {
    pub name: String,
    pub data_type: String,
    pub description: Option<String>,
    pub radix: Option<String>,
    pub external_access: Option<String>,
    pub dimensions: Option<String>,
    pub default_value: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Aoi {
    pub name: String,
    pub description: Option<String>,
    pub revision: Option<String>,
    pub vendor: Option<String>,
    pub execute_prescan: bool,
    pub execute_postscan: bool,
    pub execute_enable_in_false: bool,
    pub created_date: Option<String>,
    pub created_by: Option<String>,
    pub edited_date: Option<String>,
    pub edited_by: Option<String>,
    pub parameters: Vec<AoiParameter>,
    pub local_tags: Vec<AoiLocalTag>,
    /// Routines of the AOI; `program_name` is the AOI name.
    pub routines: Vec<Routine>,
    /// Rungs of the ladder routines above.
    pub rungs: Vec<Rung>,
}

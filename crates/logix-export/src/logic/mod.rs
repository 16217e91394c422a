// crates/logix-export/src/logic/mod.rs

//! Ladder text analysis shared by both export formats: tag reference
//! extraction and read/write classification.

pub mod mnemonics;
pub mod references;
pub mod usage;

use crate::types::{Rung, TagReference};
use alloc::string::String;
use alloc::vec::Vec;

pub use mnemonics::{INSTRUCTION_MNEMONICS, READ_PATTERNS, WRITE_PATTERNS};
pub use references::extract_tag_references;
pub use usage::classify_usage;

/// Extracts and classifies every tag reference of one rung.
///
/// Each (rung, tag) pair is classified on its own; nothing accumulates
/// across rungs.
pub fn analyze_rung(
    content: &str,
    routine_name: &str,
    program_name: &str,
    rung_number: u32,
) -> Vec<TagReference> {
    extract_tag_references(content)
        .into_iter()
        .map(|tag_name| {
            let usage_type = classify_usage(content, &tag_name);
            TagReference {
                tag_name,
                routine_name: String::from(routine_name),
                program_name: String::from(program_name),
                rung_number,
                usage_type,
            }
        })
        .collect()
}

/// Builds a [`Rung`] with its tag references filled in.
pub(crate) fn build_rung(
    number: u32,
    routine_name: &str,
    program_name: &str,
    content: String,
    comment: Option<String>,
) -> Rung {
    let tag_references = analyze_rung(&content, routine_name, program_name, number);
    Rung {
        number,
        routine_name: String::from(routine_name),
        program_name: String::from(program_name),
        content,
        comment,
        tag_references,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::UsageType;

    #[test]
    fn test_analyze_rung() {
        let refs = analyze_rung("XIC(B)XIC(C)OTE(D)", "MainRoutine", "MainProgram", 1);
        assert_eq!(refs.len(), 3);
        assert_eq!(refs[0].tag_name, "B");
        assert_eq!(refs[0].usage_type, UsageType::Read);
        assert_eq!(refs[2].tag_name, "D");
        assert_eq!(refs[2].usage_type, UsageType::Write);
        assert!(refs.iter().all(|r| r.rung_number == 1
            && r.routine_name == "MainRoutine"
            && r.program_name == "MainProgram"));
    }

    #[test]
    fn test_build_rung_empty_content() {
        let rung = build_rung(0, "R", "P", String::new(), None);
        assert!(rung.tag_references.is_empty());
        assert_eq!(rung.content, "");
    }
}

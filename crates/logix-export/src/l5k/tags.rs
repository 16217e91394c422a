// crates/logix-export/src/l5k/tags.rs

//! `TAG ... END_TAG` blocks.

use crate::text::blocks::{Block, extract_blocks};
use crate::text::declaration::{TagDeclaration, collect_declarations, parse_tag_declaration};
use crate::types::{Tag, TagScope};
use alloc::vec::Vec;
use log::trace;

const TAG: &str = "TAG";

/// Tags of every `TAG` block in `text` that is not inside a program block.
///
/// `TAG` and `PROGRAM` are different keywords, so ownership is decided by
/// span containment.
pub(super) fn controller_tags(text: &str, program_blocks: &[Block<'_>]) -> Vec<Tag> {
    let blocks = extract_blocks(text, TAG)
        .into_iter()
        .filter(|tag_block| !program_blocks.iter().any(|p| p.contains(tag_block)));
    tags_from_blocks(blocks, &TagScope::Controller)
}

/// Tags of every `TAG` block in a program block.
pub(super) fn program_tags(program: &Block<'_>, program_name: &str) -> Vec<Tag> {
    let scope = TagScope::Program(program_name.into());
    tags_from_blocks(extract_blocks(program.text, TAG), &scope)
}

fn tags_from_blocks<'a>(blocks: impl IntoIterator<Item = Block<'a>>, scope: &TagScope) -> Vec<Tag> {
    let mut tags = Vec::new();
    for block in blocks {
        for declaration in collect_declarations(block.body_from(TAG.len(), TAG)) {
            match parse_tag_declaration(&declaration) {
                Some(decl) => tags.push(tag_from_declaration(decl, scope)),
                None => trace!("Skipping unparseable tag declaration: {}", declaration),
            }
        }
    }
    tags
}

pub(super) fn tag_from_declaration(decl: TagDeclaration, scope: &TagScope) -> Tag {
    Tag {
        description: decl.attr("Description"),
        usage: decl.attr("Usage"),
        radix: decl.attr("Radix"),
        external_access: decl.attr("ExternalAccess"),
        constant: decl.flag("Constant").unwrap_or(false),
        name: decl.name,
        data_type: decl.data_type,
        scope: scope.clone(),
        value: decl.value,
        alias_for: decl.alias_for,
        dimensions: decl.dimensions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::String;

    #[test]
    fn test_program_tag_blocks_are_excluded() {
        let text = "\
TAG
    Top : DINT;
END_TAG
PROGRAM P ()
    TAG
        Inner : DINT;
    END_TAG
END_PROGRAM
TAG
    Later : BOOL;
END_TAG";
        let programs = extract_blocks(text, "PROGRAM");
        let tags = controller_tags(text, &programs);
        let names: Vec<&str> = tags.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["Top", "Later"]);

        let inner = program_tags(&programs[0], "P");
        assert_eq!(inner.len(), 1);
        assert_eq!(inner[0].name, "Inner");
        assert_eq!(inner[0].scope, TagScope::Program(String::from("P")));
    }

    #[test]
    fn test_tag_fields() {
        let text = "\
TAG
    Speed : REAL (Description := \"Line speed\",
                  RADIX := Float,
                  ExternalAccess := Read/Write,
                  Constant := No) := 1.5;
    Buffer : INT[8];
    StartPB OF Local:1:I.Data.0 (RADIX := Decimal);
    Speed : REAL;
    garbage line;
END_TAG";
        let tags = controller_tags(text, &[]);
        assert_eq!(tags.len(), 4, "duplicates are kept and garbage skipped");

        let speed = &tags[0];
        assert_eq!(speed.data_type, "REAL");
        assert_eq!(speed.description.as_deref(), Some("Line speed"));
        assert_eq!(speed.radix.as_deref(), Some("Float"));
        assert_eq!(speed.external_access.as_deref(), Some("Read/Write"));
        assert_eq!(speed.value.as_deref(), Some("1.5"));
        assert!(!speed.constant);

        assert_eq!(tags[1].dimensions.as_deref(), Some("8"));
        assert_eq!(tags[2].alias_for.as_deref(), Some("Local:1:I.Data.0"));
        assert_eq!(tags[2].data_type, "");
        assert_eq!(tags[3].name, "Speed");
    }

    #[test]
    fn test_keywords_in_descriptions_do_not_split_blocks() {
        let text = "\
PROGRAM MainProgram (Description := \"Filler PROGRAM for line 2\", MAIN := \"Main\")
    TAG
        Local1 : DINT;
    END_TAG
END_PROGRAM
TAG
    A : BOOL (Description := \"copied from old TAG list\");
    B : BOOL;
END_TAG";
        let programs = extract_blocks(text, "PROGRAM");
        assert_eq!(programs.len(), 1);

        let local = program_tags(&programs[0], "MainProgram");
        assert_eq!(local.len(), 1);
        assert_eq!(local[0].name, "Local1");

        let tags = controller_tags(text, &programs);
        let names: Vec<&str> = tags.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["A", "B"]);
        assert_eq!(tags[0].description.as_deref(), Some("copied from old TAG list"));
        assert!(tags.iter().all(|t| t.scope == TagScope::Controller));
    }
}

// crates/logix-export/src/resolver/programs.rs

use super::routines::resolve_routines;
use super::tags::resolve_tags;
use super::utils::{attribute, flag, text_of};
use crate::model;
use crate::types::{Program, Routine, Rung, Tag, TagScope};
use alloc::vec::Vec;
use log::debug;

/// Everything contributed by `<Programs>`.
#[derive(Debug, Default)]
pub(super) struct ResolvedPrograms {
    pub programs: Vec<Program>,
    pub tags: Vec<Tag>,
    pub routines: Vec<Routine>,
    pub rungs: Vec<Rung>,
}

pub(super) fn resolve_programs(programs: Option<&model::Programs>) -> ResolvedPrograms {
    let mut resolved = ResolvedPrograms::default();

    for program in programs.iter().flat_map(|p| p.program.iter()) {
        let scope = TagScope::Program(program.name.clone());
        let tags = resolve_tags(program.tags.as_ref(), &scope);
        let (routines, rungs) = resolve_routines(program.routines.as_ref(), &program.name);

        debug!(
            "Program {}: {} tags, {} routines, {} rungs",
            program.name,
            tags.len(),
            routines.len(),
            rungs.len()
        );

        resolved.programs.push(Program {
            name: program.name.clone(),
            description: text_of(program.description.as_ref()),
            main_routine: attribute(&program.main_routine_name),
            disabled: flag(&program.disabled),
        });
        resolved.tags.extend(tags);
        resolved.routines.extend(routines);
        resolved.rungs.extend(rungs);
    }
    resolved
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::programs::{Program as ProgramElement, Programs};
    use alloc::string::String;
    use alloc::vec;

    #[test]
    fn test_program_attributes() {
        let programs = Programs {
            program: vec![
                ProgramElement {
                    name: String::from("Filling"),
                    main_routine_name: Some(String::from("Main")),
                    disabled: Some(String::from("false")),
                    ..Default::default()
                },
                ProgramElement {
                    name: String::from("Spare"),
                    disabled: Some(String::from("true")),
                    ..Default::default()
                },
            ],
        };

        let resolved = resolve_programs(Some(&programs));
        assert_eq!(resolved.programs.len(), 2);
        assert_eq!(resolved.programs[0].main_routine.as_deref(), Some("Main"));
        assert!(!resolved.programs[0].disabled);
        assert!(resolved.programs[1].disabled);
        assert!(resolved.tags.is_empty());
        assert!(resolved.routines.is_empty());
    }
}

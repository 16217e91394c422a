// crates/logix-export/src/resolver/aoi.rs

use super::routines::resolve_routines;
use super::utils::{attribute, dimension, flag, l5k_data, text_of};
use crate::model;
use crate::model::aoi::{LocalTag, Parameter};
use crate::types::{Aoi, AoiLocalTag, AoiParameter, ParameterUsage};
use alloc::vec::Vec;

pub(super) fn resolve_aois(definitions: Option<&model::AddOnInstructionDefinitions>) -> Vec<Aoi> {
    definitions
        .iter()
        .flat_map(|d| d.definition.iter())
        .map(|aoi| {
            let (routines, rungs) = resolve_routines(aoi.routines.as_ref(), &aoi.name);
            Aoi {
                name: aoi.name.clone(),
                description: text_of(aoi.description.as_ref()),
                revision: attribute(&aoi.revision),
                vendor: attribute(&aoi.vendor),
                execute_prescan: flag(&aoi.execute_prescan),
                execute_postscan: flag(&aoi.execute_postscan),
                execute_enable_in_false: flag(&aoi.execute_enable_in_false),
                created_date: attribute(&aoi.created_date),
                created_by: attribute(&aoi.created_by),
                edited_date: attribute(&aoi.edited_date),
                edited_by: attribute(&aoi.edited_by),
                parameters: aoi
                    .parameters
                    .iter()
                    .flat_map(|p| p.parameter.iter())
                    .map(resolve_parameter)
                    .collect(),
                local_tags: aoi
                    .local_tags
                    .iter()
                    .flat_map(|l| l.local_tag.iter())
                    .map(resolve_local_tag)
                    .collect(),
                routines,
                rungs,
            }
        })
        .collect()
}

fn resolve_parameter(parameter: &Parameter) -> AoiParameter {
    AoiParameter {
        name: parameter.name.clone(),
        data_type: parameter.data_type.clone(),
        usage: parameter
            .usage
            .as_deref()
            .and_then(|u| ParameterUsage::parse(u.trim()))
            .unwrap_or_default(),
        description: text_of(parameter.description.as_ref()),
        radix: attribute(&parameter.radix),
        external_access: attribute(&parameter.external_access),
        dimensions: dimension(&parameter.dimensions),
        default_value: l5k_data(&parameter.default_data),
        required: flag(&parameter.required),
        visible: flag(&parameter.visible),
    }
}

fn resolve_local_tag(local: &LocalTag) -> AoiLocalTag {
    AoiLocalTag {
        name: local.name.clone(),
        data_type: local.data_type.clone(),
        description: text_of(local.description.as_ref()),
        radix: attribute(&local.radix),
        external_access: attribute(&local.external_access),
        dimensions: dimension(&local.dimensions),
        default_value: l5k_data(&local.default_data),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::aoi::{AddOnInstructionDefinition, AddOnInstructionDefinitions, Parameters};
    use crate::model::common::FormattedData;
    use alloc::string::String;
    use alloc::vec;

    #[test]
    fn test_resolve_aoi() {
        let definitions = AddOnInstructionDefinitions {
            definition: vec![AddOnInstructionDefinition {
                name: String::from("Valve_Ctrl"),
                revision: Some(String::from("1.2")),
                execute_prescan: Some(String::from("true")),
                execute_postscan: Some(String::from("false")),
                parameters: Some(Parameters {
                    parameter: vec![
                        Parameter {
                            name: String::from("Cmd"),
                            data_type: String::from("BOOL"),
                            usage: Some(String::from("Input")),
                            required: Some(String::from("true")),
                            visible: Some(String::from("true")),
                            default_data: vec![FormattedData {
                                format: Some(String::from("L5K")),
                                text: Some(String::from("0")),
                            }],
                            ..Default::default()
                        },
                        Parameter {
                            name: String::from("Cfg"),
                            data_type: String::from("ValveCfg"),
                            usage: Some(String::from("InOut")),
                            ..Default::default()
                        },
                        Parameter {
                            name: String::from("Mystery"),
                            usage: Some(String::from("Sideways")),
                            ..Default::default()
                        },
                    ],
                }),
                ..Default::default()
            }],
        };

        let aois = resolve_aois(Some(&definitions));
        assert_eq!(aois.len(), 1);
        let aoi = &aois[0];
        assert_eq!(aoi.revision.as_deref(), Some("1.2"));
        assert!(aoi.execute_prescan);
        assert!(!aoi.execute_postscan);
        assert!(!aoi.execute_enable_in_false);

        assert_eq!(aoi.parameters.len(), 3);
        assert_eq!(aoi.parameters[0].default_value.as_deref(), Some("0"));
        assert!(aoi.parameters[0].required);
        assert_eq!(aoi.parameters[1].usage, ParameterUsage::InOut);
        assert_eq!(aoi.parameters[2].usage, ParameterUsage::Input);
        assert!(aoi.local_tags.is_empty());
        assert!(aoi.routines.is_empty());
    }
}

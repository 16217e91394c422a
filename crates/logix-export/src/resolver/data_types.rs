// crates/logix-export/src/resolver/data_types.rs

use super::utils::{attribute, dimension, flag, text_of};
use crate::model;
use crate::types::{Udt, UdtMember};
use alloc::vec::Vec;
use log::trace;

/// Maps `<DataTypes>` into public UDTs, skipping hidden members and
/// memberless types.
pub(super) fn resolve_data_types(data_types: Option<&model::DataTypes>) -> Vec<Udt> {
    let Some(data_types) = data_types else {
        return Vec::new();
    };

    data_types
        .data_type
        .iter()
        .filter_map(|data_type| {
            let members: Vec<UdtMember> = data_type
                .members
                .iter()
                .flat_map(|m| m.member.iter())
                .filter(|member| !flag(&member.hidden))
                .map(|member| UdtMember {
                    name: member.name.clone(),
                    data_type: member.data_type.clone(),
                    dimension: dimension(&member.dimension),
                    radix: attribute(&member.radix),
                    external_access: attribute(&member.external_access),
                    description: text_of(member.description.as_ref()),
                })
                .collect();

            if members.is_empty() {
                trace!("DataType {} has no visible members; omitted", data_type.name);
                return None;
            }

            Some(Udt {
                name: data_type.name.clone(),
                description: text_of(data_type.description.as_ref()),
                family_type: attribute(&data_type.family),
                members,
            })
        })
        .collect()
}

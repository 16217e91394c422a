// crates/logix-export/src/resolver/tags.rs

use super::utils::{attribute, dimension, flag, l5k_data, text_of};
use crate::model;
use crate::types::{Tag, TagScope};
use alloc::string::String;
use alloc::vec::Vec;

/// Maps a `<Tags>` section into public tags of the given scope.
pub(super) fn resolve_tags(tags: Option<&model::Tags>, scope: &TagScope) -> Vec<Tag> {
    let Some(tags) = tags else {
        return Vec::new();
    };
    tags.tag.iter().map(|tag| resolve_tag(tag, scope)).collect()
}

fn resolve_tag(tag: &model::tags::Tag, scope: &TagScope) -> Tag {
    let is_alias = tag
        .tag_type
        .as_deref()
        .is_some_and(|t| t.eq_ignore_ascii_case("Alias"));

    Tag {
        name: tag.name.clone(),
        data_type: if is_alias {
            String::new()
        } else {
            attribute(&tag.data_type).unwrap_or_default()
        },
        scope: scope.clone(),
        description: text_of(tag.description.as_ref()),
        value: l5k_data(&tag.data),
        alias_for: attribute(&tag.alias_for),
        usage: attribute(&tag.usage),
        radix: attribute(&tag.radix),
        external_access: attribute(&tag.external_access),
        dimensions: dimension(&tag.dimensions),
        constant: flag(&tag.constant),
    }
}

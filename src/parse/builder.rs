// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Entity and field assembly.
//!
//! Consumes the adapter's raw records and produces the typed model in one
//! pass. Selection policy lives here: ignored fields are dropped before
//! they enter the field list, records without a Table/View marker come out
//! ignored (with a warning — that is a normal outcome), and `is_enum` is
//! taken from the adapter's canonical-type introspection rather than from
//! any annotation.

use crate::{
    model::{Entity, EntityType, Field},
    parse::{
        adapter::{RawDecl, RawKind, RawMember},
        annotation::{Annotation, classify_entity, classify_field}
    }
};

/// Build the entity list from raw declaration records.
///
/// Input order is preserved (records first, then enums, as the adapter
/// emits them).
#[must_use]
pub fn build_entities(decls: &[RawDecl]) -> Vec<Entity> {
    decls
        .iter()
        .map(|decl| match decl.kind {
            RawKind::Enum => build_enum(decl),
            RawKind::Struct | RawKind::Class => build_record(decl)
        })
        .collect()
}

fn build_record(decl: &RawDecl) -> Entity {
    let tags = classify_entity(&decl.annotations);

    let (entity_type, target) = match tags.marker {
        Some(Annotation::Table(name)) => (EntityType::Table, Some(name)),
        Some(Annotation::View(name)) => (EntityType::View, Some(name)),
        _ => (EntityType::Table, None)
    };

    let mut ignored = tags.ignored;
    if target.is_none() {
        if !ignored {
            log::warn!(
                "declaration '{}' has no TABLE or VIEW marker and will not be generated",
                decl.name
            );
        }
        ignored = true;
    }

    let fields = decl.fields.iter().filter_map(build_field).collect();

    Entity {
        name: decl.name.clone(),
        entity_type,
        target,
        fields,
        ignored,
        namespace: None
    }
}

/// Build one field, or drop it when an ignore marker is present.
fn build_field(member: &RawMember) -> Option<Field> {
    let tags = classify_field(&member.annotations);
    if tags.contains(&Annotation::Ignore) {
        log::debug!("field '{}' is marked IGNORE, dropping", member.name);
        return None;
    }

    let mut field = Field::new(&member.name, &member.type_spelling);
    field.is_enum = member.is_enum_type;

    for tag in tags {
        match tag {
            Annotation::PrimaryKey => field.is_primary_key = true,
            Annotation::ForeignKey => field.is_foreign_key = true,
            Annotation::AutoIncrement => field.is_auto_increment = true,
            Annotation::ReadOnly => field.is_readonly = true,
            Annotation::Width(n) => field.width = n,
            // table/view markers mean nothing on a field
            Annotation::Table(_) | Annotation::View(_) | Annotation::Ignore => {}
        }
    }

    Some(field)
}

fn build_enum(decl: &RawDecl) -> Entity {
    Entity {
        name: decl.name.clone(),
        entity_type: EntityType::Enum,
        target: None,
        fields: decl.constants.iter().map(Field::enum_constant).collect(),
        ignored: false,
        namespace: None
    }
}

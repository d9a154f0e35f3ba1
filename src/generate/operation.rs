// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! CRUD operation selection.

use crate::model::{Entity, EntityType};

/// One generated CRUD operation.
///
/// # Applicability
///
/// | Operation | Table | View | Requires PK |
/// |-----------|-------|------|-------------|
/// | `SelectAll` | yes | yes | no |
/// | `SelectById` | yes | yes | yes |
/// | `Insert` | yes | no | yes |
/// | `Update` | yes | no | yes |
/// | `Delete` | yes | no | yes |
///
/// Views never receive mutating operations; enums and ignored entities
/// receive nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    SelectAll,
    SelectById,
    Insert,
    Update,
    Delete
}

impl Operation {
    /// Every operation, in rendering order.
    pub const ALL: [Self; 5] = [
        Self::SelectAll,
        Self::SelectById,
        Self::Insert,
        Self::Update,
        Self::Delete
    ];

    /// Template file implementing this operation.
    #[must_use]
    pub fn template(&self) -> &'static str {
        match self {
            Self::SelectAll => "select-all.jinja",
            Self::SelectById => "select.jinja",
            Self::Insert => "insert.jinja",
            Self::Update => "update.jinja",
            Self::Delete => "delete.jinja"
        }
    }

    /// Label used in run summaries.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::SelectAll => "SELECT_ALL",
            Self::SelectById => "SELECT_BY_ID",
            Self::Insert => "INSERT",
            Self::Update => "UPDATE",
            Self::Delete => "DELETE"
        }
    }

    /// Whether this operation is generated for `entity`.
    #[must_use]
    pub fn applies_to(&self, entity: &Entity) -> bool {
        if entity.ignored || entity.entity_type == EntityType::Enum {
            return false;
        }
        match self {
            Self::SelectAll => true,
            Self::SelectById => entity.has_primary_keys(),
            Self::Insert | Self::Update | Self::Delete => {
                entity.entity_type == EntityType::Table && entity.has_primary_keys()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Field;

    fn entity(entity_type: EntityType, with_pk: bool, ignored: bool) -> Entity {
        let mut id = Field::new("id", "int");
        id.is_primary_key = with_pk;
        Entity {
            name: "X".into(),
            entity_type,
            target: Some("x".into()),
            fields: vec![id],
            ignored,
            namespace: None
        }
    }

    fn applicable(e: &Entity) -> Vec<&'static str> {
        Operation::ALL
            .iter()
            .filter(|op| op.applies_to(e))
            .map(Operation::label)
            .collect()
    }

    #[test]
    fn table_with_pk_gets_full_set() {
        let e = entity(EntityType::Table, true, false);
        assert_eq!(
            applicable(&e),
            vec!["SELECT_ALL", "SELECT_BY_ID", "INSERT", "UPDATE", "DELETE"]
        );
    }

    #[test]
    fn table_without_pk_only_selects_all() {
        let e = entity(EntityType::Table, false, false);
        assert_eq!(applicable(&e), vec!["SELECT_ALL"]);
    }

    #[test]
    fn view_never_mutates_even_with_pk() {
        let e = entity(EntityType::View, true, false);
        assert_eq!(applicable(&e), vec!["SELECT_ALL", "SELECT_BY_ID"]);
    }

    #[test]
    fn view_without_pk_only_selects_all() {
        let e = entity(EntityType::View, false, false);
        assert_eq!(applicable(&e), vec!["SELECT_ALL"]);
    }

    #[test]
    fn ignored_and_enum_entities_get_nothing() {
        assert!(applicable(&entity(EntityType::Table, true, true)).is_empty());
        assert!(applicable(&entity(EntityType::Enum, false, false)).is_empty());
    }
}

// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Entity record and its derived views.

use serde::Serialize;

use super::field::Field;

/// What an entity maps to in storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    /// Mutable table; receives the full CRUD set.
    Table,
    /// Read-only view; SELECT operations only.
    View,
    /// Enumeration; surfaces as helper output, never as SQL.
    Enum
}

impl EntityType {
    /// Upper-case label used in run summaries.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Table => "TABLE",
            Self::View => "VIEW",
            Self::Enum => "ENUM"
        }
    }
}

/// One declaration unit: a table, a view, or an enum.
///
/// Fields keep declaration order; every derived view below preserves it.
/// An entity without a recognized Table/View marker (and not an enum) is
/// `ignored` with no `target` and contributes no generated code.
#[derive(Debug, Clone, Serialize)]
pub struct Entity {
    /// Type name in source, e.g. `User`.
    pub name: String,

    /// Table, view, or enum.
    pub entity_type: EntityType,

    /// Storage object name from `TABLE(..)`/`VIEW(..)`; `None` for
    /// unresolved and enum entities.
    pub target: Option<String>,

    /// Member fields, declaration order, ignored fields already dropped.
    pub fields: Vec<Field>,

    /// No marker, or an `IGNORE` marker.
    pub ignored: bool,

    /// Namespace attribution is not resolved by this system; the generated
    /// code's namespace comes from configuration instead.
    pub namespace: Option<String>
}

impl Entity {
    /// Field names in declaration order.
    #[must_use]
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }

    /// `"type name"` pairs for all fields, declaration order.
    ///
    /// Feeds the typed row-callback parameter lists in generated code.
    #[must_use]
    pub fn typed_names(&self) -> Vec<String> {
        self.fields
            .iter()
            .map(|f| format!("{} {}", f.original_type, f.name))
            .collect()
    }

    /// One `?` token per field, comma-joined.
    #[must_use]
    pub fn placeholders(&self) -> String {
        Self::placeholder_list(self.fields.len())
    }

    /// Fields marked as primary keys, declaration order.
    #[must_use]
    pub fn primary_keys(&self) -> Vec<&Field> {
        self.fields.iter().filter(|f| f.is_primary_key).collect()
    }

    /// Primary key names, declaration order.
    #[must_use]
    pub fn primary_key_names(&self) -> Vec<&str> {
        self.fields
            .iter()
            .filter(|f| f.is_primary_key)
            .map(|f| f.name.as_str())
            .collect()
    }

    /// Whether any field is a primary key.
    ///
    /// Gates SELECT_BY_ID, UPDATE, and DELETE generation.
    #[must_use]
    pub fn has_primary_keys(&self) -> bool {
        self.fields.iter().any(|f| f.is_primary_key)
    }

    /// Fields that participate in INSERT: everything except auto-increment
    /// and readonly columns, declaration order.
    #[must_use]
    pub fn insert_fields(&self) -> Vec<&Field> {
        self.fields
            .iter()
            .filter(|f| !f.is_auto_increment && !f.is_readonly)
            .collect()
    }

    /// Names of [`Self::insert_fields`].
    #[must_use]
    pub fn insert_field_names(&self) -> Vec<&str> {
        self.insert_fields().iter().map(|f| f.name.as_str()).collect()
    }

    /// Exactly one `?` token per insert field.
    #[must_use]
    pub fn insert_placeholders(&self) -> String {
        Self::placeholder_list(self.insert_fields().len())
    }

    /// Look up a field by name.
    #[must_use]
    pub fn field_by_name(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// `"original_type name"` per primary key, for operation signatures.
    ///
    /// # Panics
    ///
    /// Primary keys are always a subset of the built field list, so a
    /// lookup miss is an internal invariant violation and panics rather
    /// than silently producing a partial list.
    #[must_use]
    pub fn pk_params(&self) -> Vec<String> {
        self.primary_key_names()
            .iter()
            .map(|name| {
                let field = self
                    .field_by_name(name)
                    .unwrap_or_else(|| panic!("primary key '{name}' missing from built field list"));
                format!("{} {}", field.original_type, field.name)
            })
            .collect()
    }

    fn placeholder_list(count: usize) -> String {
        vec!["?"; count].join(", ")
    }
}

// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Field record.

use serde::Serialize;

/// Column width when no `WIDTH(n)` marker is present.
pub const DEFAULT_WIDTH: u32 = 20;

/// One declared member or enum constant.
///
/// # Marker Flags
///
/// | Field | Marker | Effect |
/// |-------|--------|--------|
/// | `is_primary_key` | `PK` | key column, enables by-id operations |
/// | `is_foreign_key` | `FK` | reference column |
/// | `is_auto_increment` | `AUTOINC` | excluded from INSERT |
/// | `is_readonly` | `READONLY` | excluded from INSERT |
/// | `is_ignored` | `IGNORE` | dropped during assembly |
/// | `is_enum` | — | set from type introspection, not a marker |
///
/// A field with `is_ignored` never enters an entity's field list; the flag
/// exists so the record type mirrors the full marker set, but every built
/// entity carries it as `false`.
#[derive(Debug, Clone, Serialize)]
pub struct Field {
    /// Member name (SQL column name).
    pub name: String,

    /// Declared type text, e.g. `std::string`.
    pub original_type: String,

    /// Display width from `WIDTH(n)`, defaulting to [`DEFAULT_WIDTH`].
    pub width: u32,

    /// Marked `PK`.
    pub is_primary_key: bool,

    /// Marked `FK`.
    pub is_foreign_key: bool,

    /// Marked `AUTOINC`.
    pub is_auto_increment: bool,

    /// Marked `READONLY`.
    pub is_readonly: bool,

    /// Marked `IGNORE`.
    pub is_ignored: bool,

    /// Canonical type resolves to an enumeration, or the field is an enum
    /// constant.
    pub is_enum: bool
}

impl Field {
    /// Plain field with every flag unset and the default width.
    #[must_use]
    pub fn new(name: impl Into<String>, original_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            original_type: original_type.into(),
            width: DEFAULT_WIDTH,
            is_primary_key: false,
            is_foreign_key: false,
            is_auto_increment: false,
            is_readonly: false,
            is_ignored: false,
            is_enum: false
        }
    }

    /// Field standing for one enum constant.
    ///
    /// Constants always read as `int` and carry no marker flags.
    #[must_use]
    pub fn enum_constant(name: impl Into<String>) -> Self {
        let mut field = Self::new(name, "int");
        field.is_enum = true;
        field
    }
}

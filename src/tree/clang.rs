// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! libclang declaration-tree backend.
//!
//! Wraps the `clang` crate (runtime loading, so no libclang is needed at
//! build time; `LIBCLANG_PATH` steers the loader). The translation unit is
//! parsed with a detailed preprocessing record and converted wholesale into
//! the owned [`DeclNode`] model; no parser state outlives the call.

use std::path::Path;

use clang::{Clang, Entity, EntityKind, Index, TypeKind};

use crate::{
    error::Error,
    tree::{DeclKind, DeclNode, TreeProvider}
};

/// Declaration-tree provider backed by libclang.
#[derive(Debug, Default)]
pub struct ClangProvider;

impl ClangProvider {
    /// New provider. The library itself is loaded lazily inside
    /// [`TreeProvider::parse`].
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl TreeProvider for ClangProvider {
    fn parse(&self, source: &Path, arguments: &[String]) -> Result<DeclNode, Error> {
        let clang = Clang::new().map_err(Error::ParserUnavailable)?;
        let index = Index::new(&clang, false, false);
        let unit = index
            .parser(source)
            .arguments(arguments)
            .detailed_preprocessing_record(true)
            .parse()
            .map_err(|e| Error::Parse {
                file: source.to_path_buf(),
                message: e.to_string()
            })?;
        Ok(convert(&unit.get_entity()))
    }
}

fn map_kind(kind: EntityKind) -> DeclKind {
    match kind {
        EntityKind::TranslationUnit => DeclKind::Root,
        EntityKind::StructDecl => DeclKind::Struct,
        EntityKind::ClassDecl => DeclKind::Class,
        EntityKind::EnumDecl => DeclKind::Enum,
        EntityKind::FieldDecl => DeclKind::Field,
        EntityKind::EnumConstantDecl => DeclKind::EnumConstant,
        EntityKind::Namespace => DeclKind::Namespace,
        EntityKind::AnnotateAttr => DeclKind::Annotation,
        _ => DeclKind::Other
    }
}

/// Convert one cursor (and its subtree) into the owned model.
fn convert(entity: &Entity<'_>) -> DeclNode {
    let kind = map_kind(entity.get_kind());

    // Annotation cursors carry their payload in the display name.
    let name = if kind == DeclKind::Annotation {
        entity.get_display_name().unwrap_or_default()
    } else {
        entity.get_name().unwrap_or_default()
    };

    let file = entity
        .get_location()
        .and_then(|location| location.get_file_location().file)
        .map(|file| file.get_path());

    let (type_spelling, type_is_enum) = if kind == DeclKind::Field {
        match entity.get_type() {
            Some(ty) => (
                Some(ty.get_display_name()),
                ty.get_canonical_type().get_kind() == TypeKind::Enum
            ),
            None => (None, false)
        }
    } else {
        (None, false)
    };

    DeclNode {
        kind,
        name,
        file,
        type_spelling,
        type_is_enum,
        is_definition: entity.is_definition(),
        children: entity.get_children().iter().map(convert).collect()
    }
}

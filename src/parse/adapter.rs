// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Declaration-tree walk and filtering.
//!
//! A preorder walk over the provider's tree that keeps only declarations
//! actually written in the file being generated. Anything pulled in
//! indirectly — system headers, the injected marker block's own expansion
//! sites, other includes — drops out here, as do forward declarations and
//! anonymous records (uniformly for structs, classes, and enums).
//!
//! The output is a flat list of raw records: records first, then enums,
//! declaration order within each group.

use std::path::Path;

use crate::tree::{DeclKind, DeclNode};

/// Kind of an accepted declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawKind {
    /// `struct` definition.
    Struct,
    /// `class` definition.
    Class,
    /// `enum` definition.
    Enum
}

/// One member field of a record declaration.
#[derive(Debug, Clone)]
pub struct RawMember {
    /// Member name.
    pub name: String,
    /// Declared type text.
    pub type_spelling: String,
    /// Canonical type resolves to an enumeration.
    pub is_enum_type: bool,
    /// Display strings of the member's annotation attributes.
    pub annotations: Vec<String>
}

/// One accepted declaration with its annotation payload.
#[derive(Debug, Clone)]
pub struct RawDecl {
    /// Struct, class, or enum.
    pub kind: RawKind,
    /// Declared name.
    pub name: String,
    /// Display strings of the declaration's annotation attributes.
    pub annotations: Vec<String>,
    /// Direct field children (records only).
    pub fields: Vec<RawMember>,
    /// Direct enum-constant names (enums only).
    pub constants: Vec<String>
}

/// Walk the tree and collect the declarations of `target`.
#[must_use]
pub fn collect(root: &DeclNode, target: &Path) -> Vec<RawDecl> {
    let mut records = Vec::new();
    let mut enums = Vec::new();
    walk(root, target, &mut records, &mut enums);
    records.extend(enums);
    records
}

fn walk(node: &DeclNode, target: &Path, records: &mut Vec<RawDecl>, enums: &mut Vec<RawDecl>) {
    match node.kind {
        DeclKind::Struct | DeclKind::Class if accepted(node, target) => {
            records.push(record_from(node));
        }
        DeclKind::Enum if accepted(node, target) => {
            enums.push(enum_from(node));
        }
        _ => {}
    }
    for child in &node.children {
        walk(child, target, records, enums);
    }
}

/// Candidate filter: declared in the target file, a definition, and named.
fn accepted(node: &DeclNode, target: &Path) -> bool {
    node.file.as_deref() == Some(target) && node.is_definition && !node.name.is_empty()
}

fn record_from(node: &DeclNode) -> RawDecl {
    let kind = if node.kind == DeclKind::Class {
        RawKind::Class
    } else {
        RawKind::Struct
    };
    let fields = node
        .children
        .iter()
        .filter(|c| c.kind == DeclKind::Field)
        .map(|c| RawMember {
            name: c.name.clone(),
            type_spelling: c.type_spelling.clone().unwrap_or_default(),
            is_enum_type: c.type_is_enum,
            annotations: c.annotations()
        })
        .collect();

    RawDecl {
        kind,
        name: node.name.clone(),
        annotations: node.annotations(),
        fields,
        constants: Vec::new()
    }
}

fn enum_from(node: &DeclNode) -> RawDecl {
    let constants = node
        .children
        .iter()
        .filter(|c| c.kind == DeclKind::EnumConstant)
        .map(|c| c.name.clone())
        .collect();

    RawDecl {
        kind: RawKind::Enum,
        name: node.name.clone(),
        annotations: node.annotations(),
        fields: Vec::new(),
        constants
    }
}

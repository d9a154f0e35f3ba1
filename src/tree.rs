// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Declaration-tree capability interface.
//!
//! The native C++ parser sits behind [`TreeProvider`], a narrow seam that
//! yields an owned [`DeclNode`] tree. Everything downstream (the walk, the
//! classifier, the builder) consumes only this model, so the pipeline can
//! be exercised against a hand-built tree with no parsing backend present.
//!
//! The shipped backend wraps libclang and lives in [`clang`](crate::tree::clang)
//! behind the `clang` cargo feature.

use std::path::{Path, PathBuf};

use crate::error::Error;

#[cfg(feature = "clang")]
pub mod clang;

/// Compiler arguments for generation-mode parsing.
///
/// `__CODE_GENERATOR__` switches the injected marker block into its
/// annotating form.
pub const COMPILER_ARGS: &[&str] = &["-x", "c++", "-std=c++14", "-D__CODE_GENERATOR__"];

/// Kind of a declaration-tree node.
///
/// Only the kinds the pipeline inspects are distinguished; everything else
/// collapses into [`DeclKind::Other`] and is merely walked through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclKind {
    /// Translation-unit root.
    Root,
    /// `struct` declaration.
    Struct,
    /// `class` declaration.
    Class,
    /// `enum` declaration.
    Enum,
    /// Member field of a record.
    Field,
    /// Constant of an enum.
    EnumConstant,
    /// `namespace` block.
    Namespace,
    /// Attribute annotation attached to a declaration.
    Annotation,
    /// Any node kind the pipeline does not inspect.
    Other
}

/// One owned node of the declaration tree.
///
/// | Field | Meaning |
/// |-------|---------|
/// | `kind` | node kind, see [`DeclKind`] |
/// | `name` | spelling; empty for anonymous declarations |
/// | `file` | source file of the node's location, if any |
/// | `type_spelling` | declared type text for field-like nodes |
/// | `type_is_enum` | canonical type resolves to an enumeration |
/// | `is_definition` | declaration is a definition, not a forward decl |
/// | `children` | child nodes in source order |
#[derive(Debug, Clone)]
pub struct DeclNode {
    pub kind: DeclKind,
    pub name: String,
    pub file: Option<PathBuf>,
    pub type_spelling: Option<String>,
    pub type_is_enum: bool,
    pub is_definition: bool,
    pub children: Vec<DeclNode>
}

impl DeclNode {
    /// Bare node of the given kind and name.
    #[must_use]
    pub fn new(kind: DeclKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            file: None,
            type_spelling: None,
            type_is_enum: false,
            is_definition: true,
            children: Vec::new()
        }
    }

    /// Annotation-attribute node with the given display string.
    #[must_use]
    pub fn annotation(display: impl Into<String>) -> Self {
        Self::new(DeclKind::Annotation, display)
    }

    /// Field node with a declared type spelling.
    #[must_use]
    pub fn field(name: impl Into<String>, type_spelling: impl Into<String>) -> Self {
        let mut node = Self::new(DeclKind::Field, name);
        node.type_spelling = Some(type_spelling.into());
        node
    }

    /// Set the node's source file.
    #[must_use]
    pub fn in_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.file = Some(file.into());
        self
    }

    /// Mark the node's canonical type as an enumeration.
    #[must_use]
    pub fn enum_typed(mut self) -> Self {
        self.type_is_enum = true;
        self
    }

    /// Mark the node as a forward declaration.
    #[must_use]
    pub fn forward(mut self) -> Self {
        self.is_definition = false;
        self
    }

    /// Append a child node.
    #[must_use]
    pub fn child(mut self, node: DeclNode) -> Self {
        self.children.push(node);
        self
    }

    /// Display strings of the node's immediate annotation children.
    #[must_use]
    pub fn annotations(&self) -> Vec<String> {
        self.children
            .iter()
            .filter(|c| c.kind == DeclKind::Annotation)
            .map(|c| c.name.clone())
            .collect()
    }
}

/// Capability to parse a source file into a declaration tree.
///
/// One blocking call per invocation; there is no cancellation path. The
/// returned tree is fully owned so the provider holds no borrowed parser
/// state afterwards.
pub trait TreeProvider {
    /// Parse `source` with the given compiler arguments.
    ///
    /// # Errors
    ///
    /// [`Error::ParserUnavailable`] when the backend cannot be loaded and
    /// [`Error::Parse`] when it fails to produce a tree.
    fn parse(&self, source: &Path, arguments: &[String]) -> Result<DeclNode, Error>;
}

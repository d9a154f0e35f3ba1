// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Error taxonomy for the generation pipeline.
//!
//! Everything here is fatal: the tool is a deterministic single-shot
//! transformation, so nothing is retried and no partial output is written.
//! Non-fatal conditions (unannotated declarations, a missing formatter)
//! are reported through [`log`] instead and never surface as an [`Error`].

use std::{io, path::PathBuf};

use thiserror::Error;

/// Fatal failures of a generation run.
///
/// | Variant | Source | Effect |
/// |---------|--------|--------|
/// | `InputNotFound` | missing input file | exit non-zero |
/// | `ParserUnavailable` | libclang could not be loaded | exit non-zero |
/// | `Parse` | provider produced no tree | exit non-zero |
/// | `Template` | template file missing | run aborted, nothing written |
/// | `Render` | template expansion failed | run aborted, nothing written |
/// | `Io` | filesystem failure | exit non-zero |
#[derive(Debug, Error)]
pub enum Error {
    /// The input source file does not exist.
    #[error("input file not found: {path}")]
    InputNotFound {
        /// Path that was requested.
        path: PathBuf
    },

    /// The declaration-tree backend could not be loaded.
    ///
    /// With the `clang` feature this means libclang was not found at run
    /// time; `LIBCLANG_PATH` can point the loader at a specific library.
    #[error("declaration parser unavailable: {0}")]
    ParserUnavailable(String),

    /// The external parser failed to produce a declaration tree.
    #[error("failed to parse {file}: {message}")]
    Parse {
        /// Working copy that was handed to the parser.
        file: PathBuf,
        /// Backend diagnostic text.
        message: String
    },

    /// An operation or master template file is missing.
    #[error("template {template} not found in {dir}")]
    Template {
        /// Template file name (e.g. `insert.jinja`).
        template: String,
        /// Directory that was searched.
        dir: PathBuf
    },

    /// Template expansion failed.
    ///
    /// Carries the offending entity name and the template identity so the
    /// failure can be traced to one declaration.
    #[error("failed to render {template} for entity {entity}: {source}")]
    Render {
        /// Entity whose fragment (or document) was being rendered.
        entity: String,
        /// Template file name.
        template: String,
        /// Underlying engine error.
        source: minijinja::Error
    },

    /// Filesystem failure outside the categories above.
    #[error(transparent)]
    Io(#[from] io::Error)
}

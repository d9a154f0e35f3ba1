//! # entity-gen
//!
//! Generates SQLite CRUD boilerplate from annotated C++ struct
//! definitions.
//!
//! ## Quick Start
//!
//! ```cpp,ignore
//! #include "orm.h"
//!
//! struct TABLE(users) User {
//!     PK AUTOINC int id;
//!     std::string username;
//!     READONLY long created_at;
//! };
//!
//! struct VIEW(user_summary) UserSummary {
//!     READONLY int user_id;
//!     READONLY int order_count;
//! };
//! ```
//!
//! ```bash,ignore
//! entity-gen entities.h -o crud.hpp -n data
//! ```
//!
//! Generates: `insert`, `selectAll`, `selectById`, `update`, and `remove`
//! overloads per table, SELECT operations per view, and `to_string`
//! helpers per enum, assembled into one header.
//!
//! ## Pipeline
//!
//! source text → [`inject`] → working copy → [`tree`] (external parser) →
//! [`parse`] (walk, classify, build) → [`generate`] (operations,
//! templates) → [`format`] (optional) → output file.
//!
//! One input file produces one output file per invocation; the run is
//! single-threaded, single-pass, and keeps no state behind.

pub mod error;
pub mod format;
pub mod generate;
pub mod inject;
pub mod model;
pub mod parse;
pub mod tree;

use std::path::PathBuf;

pub use error::Error;
pub use generate::{Generator, Operation};
pub use model::{Entity, EntityType, Field};
pub use tree::{DeclNode, TreeProvider};

/// Configuration of one generation run.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Input C++ header with annotated declarations.
    pub input: PathBuf,
    /// Output file, fully overwritten.
    pub output: PathBuf,
    /// Directory holding the operation and master templates.
    pub template_dir: PathBuf,
    /// Namespace for generated code.
    pub namespace: String,
    /// clang-format style, or `file` for the project's `.clang-format`.
    pub style: String
}

impl GenerateOptions {
    /// Options with the standard defaults for `input`.
    #[must_use]
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: PathBuf::from("output.hpp"),
            template_dir: PathBuf::from("templates"),
            namespace: "data".to_owned(),
            style: "file".to_owned()
        }
    }
}

/// Outcome of a successful run.
#[derive(Debug)]
pub struct GenerateReport {
    /// Every entity built from the input, ignored ones included.
    pub entities: Vec<Entity>,
    /// Path the document was written to.
    pub output: PathBuf
}

/// Run the full pipeline with an explicit declaration-tree provider.
///
/// # Errors
///
/// Any [`Error`] from the pipeline stages; the working copy is removed on
/// every path, and the output file is only written after the whole
/// document rendered.
pub fn generate_with(
    provider: &dyn TreeProvider,
    options: &GenerateOptions
) -> Result<GenerateReport, Error> {
    if !options.input.is_file() {
        return Err(Error::InputNotFound {
            path: options.input.clone()
        });
    }

    let source = fs_err::read_to_string(&options.input)?;
    let injected = inject::inject(&source);
    let copy = inject::working_copy(&injected)?;
    log::debug!("working copy at {}", copy.path().display());

    let arguments: Vec<String> = tree::COMPILER_ARGS.iter().map(|s| (*s).to_owned()).collect();
    let root = provider.parse(copy.path(), &arguments)?;

    let decls = parse::collect(&root, copy.path());
    log::debug!("accepted {} declarations from the input file", decls.len());
    let entities = parse::build_entities(&decls);

    let source_name = options
        .input
        .file_name()
        .map_or_else(|| options.input.display().to_string(), |n| n.to_string_lossy().into_owned());
    let generator = Generator::new(&options.template_dir, &options.namespace);
    let document = generator.render_document(&entities, &source_name)?;

    let formatted = format::format(&document, &options.style);
    fs_err::write(&options.output, formatted)?;
    log::info!("generated {}", options.output.display());

    Ok(GenerateReport {
        entities,
        output: options.output.clone()
    })
}

/// Run the full pipeline with the libclang backend.
///
/// # Errors
///
/// See [`generate_with`].
#[cfg(feature = "clang")]
pub fn generate(options: &GenerateOptions) -> Result<GenerateReport, Error> {
    generate_with(&tree::clang::ClangProvider::new(), options)
}

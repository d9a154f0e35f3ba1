// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Generation-mode macro injection.
//!
//! The annotation markers (`TABLE`, `PK`, ...) are plain macros that expand
//! to nothing in a normal build. During a generation pass the parser runs
//! with `__CODE_GENERATOR__` defined, and the block injected here redefines
//! every marker as `__attribute__((annotate(...)))` so the markers survive
//! into the declaration tree as attribute annotations.
//!
//! The injection point is the line after the last top-level `#include`,
//! scanning from the top and stopping at the first non-blank,
//! non-preprocessor line. If the file has no includes the block lands at
//! the top. No other line is altered.
//!
//! The injected text is never written back to the input file; it goes into
//! a disposable working copy whose RAII guard removes it on every exit
//! path, including parse failures.

use std::io::Write;

use tempfile::NamedTempFile;

use crate::error::Error;

/// Marker definitions injected ahead of parsing.
///
/// Mirrors the project's `orm.h`: outside generation mode every marker is a
/// no-op, inside it each one expands to an `annotate` attribute whose
/// display string the classifier recognizes.
pub const MACRO_BLOCK: &str = r#"
#ifdef __CODE_GENERATOR__
#define TABLE(name) __attribute__((annotate("table:" #name)))
#define VIEW(name) __attribute__((annotate("view:" #name)))
#define IGNORE __attribute__((annotate("ignore")))
#define PK __attribute__((annotate("pk")))
#define FK __attribute__((annotate("fk")))
#define AUTOINC __attribute__((annotate("autoinc")))
#define READONLY __attribute__((annotate("readonly")))
#define WIDTH(w) __attribute__((annotate("width:" #w)))
#else
#define TABLE(name)
#define VIEW(name)
#define IGNORE
#define PK
#define FK
#define AUTOINC
#define READONLY
#define WIDTH(w)
#endif
"#;

/// Insert [`MACRO_BLOCK`] at the injection point of `source`.
///
/// Scans from the top: every `#include` moves the injection point past
/// itself; blank lines and other preprocessor lines are skipped; the first
/// line of actual code stops the scan. The block is inserted exactly once,
/// before that line.
#[must_use]
pub fn inject(source: &str) -> String {
    let lines: Vec<&str> = source.split('\n').collect();
    let mut point = 0;

    for (i, line) in lines.iter().enumerate() {
        let trimmed = line.trim();
        if trimmed.starts_with("#include") {
            point = i + 1;
        } else if !trimmed.is_empty() && !trimmed.starts_with('#') {
            break;
        }
    }

    let mut out = String::with_capacity(source.len() + MACRO_BLOCK.len() + 64);
    for (i, line) in lines.iter().enumerate() {
        if i == point {
            out.push_str("// Injected ORM marker definitions\n");
            out.push_str(MACRO_BLOCK);
            out.push('\n');
        }
        out.push_str(line);
        if i + 1 < lines.len() {
            out.push('\n');
        }
    }
    // Injection point past the last line (include-only file).
    if point == lines.len() {
        out.push_str("\n// Injected ORM marker definitions\n");
        out.push_str(MACRO_BLOCK);
        out.push('\n');
    }
    out
}

/// Write the injected text to a disposable working copy.
///
/// The returned guard deletes the file when dropped, so failed runs never
/// leak temporaries.
///
/// # Errors
///
/// Propagates the underlying IO error if the temp file cannot be created
/// or written.
pub fn working_copy(injected: &str) -> Result<NamedTempFile, Error> {
    let mut file = tempfile::Builder::new()
        .prefix("entity-gen-")
        .suffix(".cpp")
        .tempfile()?;
    file.write_all(injected.as_bytes())?;
    file.flush()?;
    Ok(file)
}

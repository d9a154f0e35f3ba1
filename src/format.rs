// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Optional clang-format pass.
//!
//! The generated document is piped through `clang-format` when available.
//! A missing binary, a failing exit status, or undecodable output all
//! degrade to the unformatted text with a warning; formatting is never
//! fatal.

use std::{
    io::{self, Write},
    process::{Command, Stdio}
};

/// Format `text` with `clang-format -style=<style>`, falling back to the
/// input on any failure.
#[must_use]
pub fn format(text: &str, style: &str) -> String {
    match run_clang_format(text, style) {
        Ok(formatted) => formatted,
        Err(err) => {
            log::warn!("clang-format unavailable ({err}); writing unformatted output");
            text.to_owned()
        }
    }
}

fn run_clang_format(text: &str, style: &str) -> io::Result<String> {
    let mut child = Command::new("clang-format")
        .arg(format!("-style={style}"))
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(text.as_bytes())?;
    }

    let output = child.wait_with_output()?;
    if !output.status.success() {
        return Err(io::Error::other(format!(
            "clang-format exited with {}",
            output.status
        )));
    }
    String::from_utf8(output.stdout)
        .map_err(|_| io::Error::other("clang-format produced non-UTF-8 output"))
}

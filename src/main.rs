// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Command-line front end.

use std::{path::PathBuf, process};

use clap::Parser;
use entity_gen::{EntityType, GenerateOptions, GenerateReport, Operation};

/// Generate SQLite CRUD boilerplate from annotated C++ struct definitions.
#[derive(Debug, Parser)]
#[command(name = "entity-gen", version, about)]
struct Cli {
    /// Input C++ header file with annotated declarations.
    input: PathBuf,

    /// Output header file.
    #[arg(short, long, default_value = "output.hpp")]
    output: PathBuf,

    /// Directory holding the operation and master templates.
    #[arg(short, long, default_value = "templates")]
    templates: PathBuf,

    /// Namespace for generated code.
    #[arg(short, long, default_value = "data")]
    namespace: String,

    /// clang-format style (LLVM, Google, Chromium, Mozilla, WebKit, or
    /// "file" to use .clang-format).
    #[arg(short, long, default_value = "file")]
    style: String,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool
}

fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();

    let options = GenerateOptions {
        input: cli.input,
        output: cli.output,
        template_dir: cli.templates,
        namespace: cli.namespace,
        style: cli.style
    };

    match entity_gen::generate(&options) {
        Ok(report) => print_summary(&report),
        Err(err) => {
            log::error!("{err}");
            process::exit(1);
        }
    }
}

/// Per-entity operation summary, printed after a successful run.
fn print_summary(report: &GenerateReport) {
    let active: Vec<_> = report
        .entities
        .iter()
        .filter(|e| !e.ignored && e.entity_type != EntityType::Enum)
        .collect();
    let tables = active
        .iter()
        .filter(|e| e.entity_type == EntityType::Table)
        .count();
    let views = active.len() - tables;

    println!("Successfully generated: {}", report.output.display());
    println!("Tables processed: {tables}");
    println!("Views processed: {views}");

    println!("\nGenerated operations:");
    for entity in active {
        let ops: Vec<&str> = Operation::ALL
            .iter()
            .filter(|op| op.applies_to(entity))
            .map(Operation::label)
            .collect();
        println!(
            "  {:5} {}: {}",
            entity.entity_type.label(),
            entity.name,
            ops.join(", ")
        );
    }
}

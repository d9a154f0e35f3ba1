// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Annotation string classification.
//!
//! Raw annotation strings (the display names of attribute-annotation
//! nodes, e.g. `"table:users"` or `"pk"`) become values of the closed
//! [`Annotation`] type. One static rule table drives the whole pass;
//! adding a marker means adding one row.

/// Typed generation marker.
///
/// | Source string | Variant |
/// |---------------|---------|
/// | `table:<name>` | `Table(name)` |
/// | `view:<name>` | `View(name)` |
/// | `ignore` | `Ignore` |
/// | `pk` | `PrimaryKey` |
/// | `fk` | `ForeignKey` |
/// | `autoinc` | `AutoIncrement` |
/// | `readonly` | `ReadOnly` |
/// | `width:<n>` | `Width(n)` |
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Annotation {
    /// Entity maps to the named table.
    Table(String),
    /// Entity maps to the named view.
    View(String),
    /// Declaration or field is excluded from generation.
    Ignore,
    /// Field is part of the primary key.
    PrimaryKey,
    /// Field references another table.
    ForeignKey,
    /// Field is assigned by the database; excluded from INSERT.
    AutoIncrement,
    /// Field is never written; excluded from INSERT.
    ReadOnly,
    /// Display width override.
    Width(u32)
}

/// One classification rule: a pattern anchored at the start of the string
/// and a constructor applied to the remainder.
struct Rule {
    prefix: &'static str,
    build: fn(&str) -> Option<Annotation>
}

/// The rule table, evaluated in order.
///
/// Bare markers discard the remainder, which keeps the matching anchored
/// the same way for every row.
const RULES: &[Rule] = &[
    Rule {
        prefix: "table:",
        build: |rest| Some(Annotation::Table(rest.to_owned()))
    },
    Rule {
        prefix: "view:",
        build: |rest| Some(Annotation::View(rest.to_owned()))
    },
    Rule {
        prefix: "ignore",
        build: |_| Some(Annotation::Ignore)
    },
    Rule {
        prefix: "pk",
        build: |_| Some(Annotation::PrimaryKey)
    },
    Rule {
        prefix: "fk",
        build: |_| Some(Annotation::ForeignKey)
    },
    Rule {
        prefix: "autoinc",
        build: |_| Some(Annotation::AutoIncrement)
    },
    Rule {
        prefix: "readonly",
        build: |_| Some(Annotation::ReadOnly)
    },
    Rule {
        prefix: "width:",
        build: |rest| rest.trim().parse().ok().map(Annotation::Width)
    },
];

/// Classify one raw annotation string.
///
/// Returns `None` for strings no rule matches and for malformed widths;
/// unknown markers are ignored for forward compatibility.
#[must_use]
pub fn classify(raw: &str) -> Option<Annotation> {
    RULES
        .iter()
        .find_map(|rule| raw.strip_prefix(rule.prefix).and_then(rule.build))
}

/// Entity-level classification result.
#[derive(Debug, Default)]
pub struct EntityTags {
    /// First `Table`/`View` tag found, if any. Later markers are not
    /// consulted; a node is never both.
    pub marker: Option<Annotation>,
    /// An `ignore` tag appeared anywhere in the list.
    pub ignored: bool
}

/// Classify the annotation list of one record declaration.
#[must_use]
pub fn classify_entity(raws: &[String]) -> EntityTags {
    let mut tags = EntityTags::default();
    for raw in raws {
        match classify(raw) {
            Some(tag @ (Annotation::Table(_) | Annotation::View(_))) => {
                if tags.marker.is_none() {
                    tags.marker = Some(tag);
                }
            }
            Some(Annotation::Ignore) => tags.ignored = true,
            _ => {}
        }
    }
    tags
}

/// Classify the annotation list of one field declaration.
///
/// Cumulative: every recognized tag is kept, in source order.
#[must_use]
pub fn classify_field(raws: &[String]) -> Vec<Annotation> {
    raws.iter().filter_map(|raw| classify(raw)).collect()
}

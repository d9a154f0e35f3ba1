//! Annotation extraction for the generation pipeline.
//!
//! This module turns the raw declaration tree into the typed metadata
//! model. It has three stages:
//!
//! - [`adapter`] — walks the tree, filters nodes to those declared in the
//!   file being generated, and yields raw declaration records.
//! - [`annotation`] — classifies raw annotation strings into the closed
//!   [`Annotation`] variant through a static rule table.
//! - [`builder`] — assembles [`Entity`](crate::model::Entity) and
//!   [`Field`](crate::model::Field) records, applying the ignore/selection
//!   policy and leaving derived views to the model.
//!
//! # Classification Policy
//!
//! Entity level: the first `table:`/`view:` tag wins and a node is never
//! both; an `ignore` tag anywhere marks the entity ignored. A record with
//! neither marker is excluded with a warning — a normal outcome, not an
//! error. Field level is cumulative: one field may carry several
//! non-exclusive tags at once (`pk` plus `fk` is legal).

pub mod adapter;
pub mod annotation;
pub mod builder;

pub use adapter::{RawDecl, RawKind, RawMember, collect};
pub use annotation::Annotation;
pub use builder::build_entities;

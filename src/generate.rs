// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Generation driver.
//!
//! Decides which CRUD operations apply to each entity, renders one
//! fragment per applicable operation, and hands the fragment maps plus the
//! entity collections to the master template for final assembly. Every
//! render is a pure function of (template text, serialized model); the
//! model is never mutated.
//!
//! Any missing template or render failure aborts the whole run before the
//! output file is touched, and the error names the entity and the
//! template. Output is deterministic: the document carries no timestamps,
//! so unchanged input and templates reproduce identical text.

use std::collections::BTreeMap;
use std::path::PathBuf;

use minijinja::{Environment, context};
use serde::Serialize;

use crate::{
    error::Error,
    model::{Entity, EntityType, Field}
};

mod operation;

pub use operation::Operation;

/// Serialized per-entity view handed to templates.
///
/// Carries the record itself plus every derived list the operation
/// templates consume, so templates stay free of policy.
#[derive(Serialize)]
struct EntityModel<'a> {
    name: &'a str,
    entity_type: EntityType,
    target: &'a str,
    fields: &'a [Field],
    field_names: Vec<&'a str>,
    typed_names: Vec<String>,
    placeholders: String,
    insert_fields: Vec<&'a str>,
    insert_placeholders: String,
    primary_keys: Vec<&'a str>,
    pk_params: Vec<String>,
    has_primary_keys: bool
}

impl<'a> From<&'a Entity> for EntityModel<'a> {
    fn from(entity: &'a Entity) -> Self {
        Self {
            name: &entity.name,
            entity_type: entity.entity_type,
            target: entity.target.as_deref().unwrap_or_default(),
            fields: &entity.fields,
            field_names: entity.field_names(),
            typed_names: entity.typed_names(),
            placeholders: entity.placeholders(),
            insert_fields: entity.insert_field_names(),
            insert_placeholders: entity.insert_placeholders(),
            primary_keys: entity.primary_key_names(),
            pk_params: entity.pk_params(),
            has_primary_keys: entity.has_primary_keys()
        }
    }
}

/// Fragment maps keyed by entity name, one per operation.
#[derive(Default)]
struct Fragments {
    insert: BTreeMap<String, String>,
    select_all: BTreeMap<String, String>,
    select_by_id: BTreeMap<String, String>,
    update: BTreeMap<String, String>,
    delete: BTreeMap<String, String>
}

impl Fragments {
    fn map_for(&mut self, op: Operation) -> &mut BTreeMap<String, String> {
        match op {
            Operation::Insert => &mut self.insert,
            Operation::SelectAll => &mut self.select_all,
            Operation::SelectById => &mut self.select_by_id,
            Operation::Update => &mut self.update,
            Operation::Delete => &mut self.delete
        }
    }
}

/// Renders fragments and the final document from a template directory.
pub struct Generator {
    template_dir: PathBuf,
    namespace: String
}

impl Generator {
    /// New generator reading templates from `template_dir`.
    #[must_use]
    pub fn new(template_dir: impl Into<PathBuf>, namespace: impl Into<String>) -> Self {
        Self {
            template_dir: template_dir.into(),
            namespace: namespace.into()
        }
    }

    /// Render the complete output document.
    ///
    /// # Errors
    ///
    /// [`Error::Template`] when a template file is missing and
    /// [`Error::Render`] when expansion fails; both abort before anything
    /// is written.
    pub fn render_document(&self, entities: &[Entity], source_file: &str) -> Result<String, Error> {
        let tables: Vec<&Entity> = active(entities, EntityType::Table);
        let views: Vec<&Entity> = active(entities, EntityType::View);
        let enums: Vec<&Entity> = active(entities, EntityType::Enum);

        let mut fragments = Fragments::default();
        for entity in tables.iter().chain(views.iter()) {
            for op in Operation::ALL {
                if op.applies_to(entity) {
                    let fragment = self.render_fragment(op, entity)?;
                    fragments.map_for(op).insert(entity.name.clone(), fragment);
                }
            }
        }

        let master = self.load("master.jinja")?;
        let table_models: Vec<EntityModel<'_>> = tables.iter().copied().map(Into::into).collect();
        let view_models: Vec<EntityModel<'_>> = views.iter().copied().map(Into::into).collect();
        let enum_models: Vec<EntityModel<'_>> = enums.iter().copied().map(Into::into).collect();
        let entity_models: Vec<EntityModel<'_>> = tables
            .iter()
            .chain(views.iter())
            .copied()
            .map(Into::into)
            .collect();

        let env = Environment::new();
        env.render_named_str(
            "master.jinja",
            &master,
            context! {
                namespace => self.namespace,
                source_file => source_file,
                entities => entity_models,
                tables => table_models,
                views => view_models,
                enums => enum_models,
                insert_functions => fragments.insert,
                select_all_functions => fragments.select_all,
                select_by_id_functions => fragments.select_by_id,
                update_functions => fragments.update,
                delete_functions => fragments.delete,
            }
        )
        .map_err(|source| Error::Render {
            entity: source_file.to_owned(),
            template: "master.jinja".to_owned(),
            source
        })
    }

    /// Render one operation fragment for one entity.
    fn render_fragment(&self, op: Operation, entity: &Entity) -> Result<String, Error> {
        let template = self.load(op.template())?;
        let model = EntityModel::from(entity);
        let env = Environment::new();
        env.render_named_str(op.template(), &template, context! { entity => model })
            .map_err(|source| Error::Render {
                entity: entity.name.clone(),
                template: op.template().to_owned(),
                source
            })
    }

    /// Read one template file, mapping a missing file to a typed error.
    fn load(&self, template: &str) -> Result<String, Error> {
        let path = self.template_dir.join(template);
        if !path.is_file() {
            return Err(Error::Template {
                template: template.to_owned(),
                dir: self.template_dir.clone()
            });
        }
        Ok(fs_err::read_to_string(&path)?)
    }
}

fn active<'a>(entities: &'a [Entity], entity_type: EntityType) -> Vec<&'a Entity> {
    entities
        .iter()
        .filter(|e| !e.ignored && e.entity_type == entity_type)
        .collect()
}

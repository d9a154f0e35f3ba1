// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! End-to-end pipeline tests against a hand-built declaration tree.
//!
//! The fake provider stands in for the native parser, so these tests
//! exercise the walk, the classifier, the builder, and the shipped
//! templates with no libclang present.

use std::path::{Path, PathBuf};

use entity_gen::{
    DeclNode, Entity, EntityType, Error, GenerateOptions, Generator, TreeProvider, generate_with,
    parse::{build_entities, collect},
    tree::DeclKind
};

/// Tree mirroring the project's sample `entities.h`: two tables, one
/// unannotated struct, one view with a primary key, one explicitly
/// ignored struct, one enum, plus noise that must be filtered out.
fn sample_tree(file: &Path) -> DeclNode {
    let user = DeclNode::new(DeclKind::Struct, "User")
        .in_file(file)
        .child(DeclNode::annotation("table:users"))
        .child(
            DeclNode::field("id", "int")
                .child(DeclNode::annotation("pk"))
                .child(DeclNode::annotation("autoinc"))
        )
        .child(DeclNode::field("username", "std::string"))
        .child(DeclNode::field("email", "std::string").child(DeclNode::annotation("readonly")))
        .child(DeclNode::field("age", "int"))
        .child(DeclNode::field("created_at", "long"));

    // Marker written after the struct name never attaches; the declaration
    // comes through unannotated.
    let product = DeclNode::new(DeclKind::Struct, "Product")
        .in_file(file)
        .child(DeclNode::field("product_id", "int").child(DeclNode::annotation("pk")))
        .child(DeclNode::field("name", "std::string"));

    let order = DeclNode::new(DeclKind::Struct, "Order")
        .in_file(file)
        .child(DeclNode::annotation("table:orders"))
        .child(
            DeclNode::field("order_id", "int")
                .child(DeclNode::annotation("pk"))
                .child(DeclNode::annotation("autoinc"))
        )
        .child(DeclNode::field("user_id", "int").child(DeclNode::annotation("fk")))
        .child(DeclNode::field("total_amount", "double"))
        .child(DeclNode::field("status", "std::string"));

    let summary = DeclNode::new(DeclKind::Struct, "UserSummary")
        .in_file(file)
        .child(DeclNode::annotation("view:user_summary"))
        .child(
            DeclNode::field("user_id", "int")
                .child(DeclNode::annotation("pk"))
                .child(DeclNode::annotation("readonly"))
        )
        .child(DeclNode::field("username", "std::string").child(DeclNode::annotation("readonly")))
        .child(DeclNode::field("order_count", "int").child(DeclNode::annotation("readonly")))
        .child(DeclNode::field("total_spent", "double").child(DeclNode::annotation("readonly")));

    let internal = DeclNode::new(DeclKind::Struct, "InternalConfig")
        .in_file(file)
        .child(DeclNode::annotation("ignore"))
        .child(DeclNode::field("config_key", "std::string"))
        .child(DeclNode::field("config_value", "std::string"));

    let status = DeclNode::new(DeclKind::Enum, "Status")
        .in_file(file)
        .child(DeclNode::new(DeclKind::EnumConstant, "Pending"))
        .child(DeclNode::new(DeclKind::EnumConstant, "Shipped"))
        .child(DeclNode::new(DeclKind::EnumConstant, "Delivered"));

    let namespace = DeclNode::new(DeclKind::Namespace, "data")
        .in_file(file)
        .child(user)
        .child(product)
        .child(order)
        .child(summary)
        .child(internal)
        .child(status);

    let mut root = DeclNode::new(DeclKind::Root, "entities.h");
    root.children = vec![
        // pulled in through an include: must never become an entity
        DeclNode::new(DeclKind::Struct, "Foreign")
            .in_file("/usr/include/vendor.h")
            .child(DeclNode::annotation("table:foreign")),
        // forward declaration in the target file: excluded as well
        DeclNode::new(DeclKind::Struct, "Later").in_file(file).forward(),
        namespace,
    ];
    root
}

struct FakeProvider;

impl TreeProvider for FakeProvider {
    fn parse(&self, source: &Path, _arguments: &[String]) -> Result<DeclNode, Error> {
        Ok(sample_tree(source))
    }
}

fn sample_entities() -> Vec<Entity> {
    let file = PathBuf::from("/virtual/entities.h");
    build_entities(&collect(&sample_tree(&file), &file))
}

fn shipped_templates() -> PathBuf {
    PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/templates"))
}

fn render_sample() -> String {
    Generator::new(shipped_templates(), "data")
        .render_document(&sample_entities(), "entities.h")
        .unwrap()
}

#[test]
fn unannotated_struct_is_ignored_with_no_target() {
    let entities = sample_entities();
    let product = entities.iter().find(|e| e.name == "Product").unwrap();
    assert!(product.ignored);
    assert!(product.target.is_none());
}

#[test]
fn filtered_noise_never_becomes_an_entity() {
    let entities = sample_entities();
    assert!(entities.iter().all(|e| e.name != "Foreign"));
    assert!(entities.iter().all(|e| e.name != "Later"));
}

#[test]
fn insert_list_drops_autoinc_and_readonly_fields() {
    let entities = sample_entities();
    let user = entities.iter().find(|e| e.name == "User").unwrap();
    assert_eq!(user.insert_field_names(), vec!["username", "age", "created_at"]);
    assert_eq!(user.insert_placeholders(), "?, ?, ?");
    assert_eq!(user.primary_key_names(), vec!["id"]);
}

#[test]
fn enum_entity_holds_ordered_constants() {
    let entities = sample_entities();
    let status = entities.iter().find(|e| e.name == "Status").unwrap();
    assert_eq!(status.entity_type, EntityType::Enum);
    assert!(status.target.is_none());
    let names: Vec<_> = status.fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["Pending", "Shipped", "Delivered"]);
    for field in &status.fields {
        assert_eq!(field.original_type, "int");
        assert!(field.is_enum);
        assert!(
            !field.is_primary_key
                && !field.is_foreign_key
                && !field.is_auto_increment
                && !field.is_readonly
                && !field.is_ignored
        );
    }
}

#[test]
fn table_fragments_cover_the_full_crud_set() {
    let doc = render_sample();
    assert!(doc.contains("INSERT INTO users (username, age, created_at) VALUES (?, ?, ?);"));
    assert!(doc.contains("SELECT order_id, user_id, total_amount, status FROM orders;"));
    assert!(doc.contains("inline Order selectById(sqlite::database &db, int order_id)"));
    assert!(doc.contains("DELETE FROM orders WHERE order_id = ?;"));
    assert!(doc.contains("UPDATE orders SET order_id = ?, user_id = ?, total_amount = ?, status = ? WHERE order_id = ?;"));
}

#[test]
fn view_with_primary_key_never_mutates() {
    let doc = render_sample();
    assert!(doc.contains("FROM user_summary;"));
    assert!(doc.contains("inline UserSummary selectById"));
    assert!(!doc.contains("INSERT INTO user_summary"));
    assert!(!doc.contains("UPDATE user_summary"));
    assert!(!doc.contains("DELETE FROM user_summary"));
}

#[test]
fn excluded_declarations_render_nowhere() {
    let doc = render_sample();
    assert!(!doc.contains("Product"));
    assert!(!doc.contains("InternalConfig"));
}

#[test]
fn master_document_carries_rosters_and_namespace() {
    let doc = render_sample();
    assert!(doc.contains("// Tables: User, Order"));
    assert!(doc.contains("// Views: UserSummary"));
    assert!(doc.contains("namespace data {"));
    assert!(doc.contains("} // namespace data"));
}

#[test]
fn enum_helpers_are_rendered() {
    let doc = render_sample();
    assert!(doc.contains("inline const char *to_string(Status value)"));
    let pending = doc.find("case Status::Pending:").unwrap();
    let shipped = doc.find("case Status::Shipped:").unwrap();
    let delivered = doc.find("case Status::Delivered:").unwrap();
    assert!(pending < shipped && shipped < delivered);
}

#[test]
fn rendering_twice_is_identical() {
    assert_eq!(render_sample(), render_sample());
}

#[test]
fn end_to_end_run_writes_the_document() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("entities.h");
    fs_err::write(&input, "#include <string>\nstruct User {};\n").unwrap();

    let mut options = GenerateOptions::new(&input);
    options.output = dir.path().join("output.hpp");
    options.template_dir = shipped_templates();

    let report = generate_with(&FakeProvider, &options).unwrap();
    assert!(options.output.is_file());

    let active: Vec<_> = report.entities.iter().filter(|e| !e.ignored).collect();
    assert_eq!(
        active
            .iter()
            .filter(|e| e.entity_type == EntityType::Table)
            .count(),
        2
    );
    assert_eq!(
        active
            .iter()
            .filter(|e| e.entity_type == EntityType::View)
            .count(),
        1
    );

    let first = fs_err::read_to_string(&options.output).unwrap();
    generate_with(&FakeProvider, &options).unwrap();
    let second = fs_err::read_to_string(&options.output).unwrap();
    assert_eq!(first, second);
}

#[test]
fn missing_input_is_a_typed_error() {
    let options = GenerateOptions::new("/nonexistent/entities.h");
    let err = generate_with(&FakeProvider, &options).unwrap_err();
    assert!(matches!(err, Error::InputNotFound { .. }));
}

#[test]
fn missing_template_aborts_before_writing() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("entities.h");
    fs_err::write(&input, "struct User {};\n").unwrap();

    let mut options = GenerateOptions::new(&input);
    options.output = dir.path().join("output.hpp");
    options.template_dir = dir.path().join("empty-templates");
    fs_err::create_dir(&options.template_dir).unwrap();

    let err = generate_with(&FakeProvider, &options).unwrap_err();
    assert!(matches!(err, Error::Template { .. }));
    assert!(!options.output.exists());
}

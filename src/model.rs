//! Typed metadata model.
//!
//! Concrete [`Field`] and [`Entity`] records replace the loosely-typed
//! dictionaries a generator pipeline tends to accumulate: every attribute
//! is an explicit field with an explicit default, so nothing downstream
//! can hit a missing key mid-render.
//!
//! # Data Structures
//!
//! ```text
//! Entity
//! ├── name: String              (type name in source, e.g. "User")
//! ├── entity_type: EntityType   (Table | View | Enum)
//! ├── target: Option<String>    (storage object name, e.g. "users")
//! ├── ignored: bool             (no marker, or IGNORE)
//! ├── namespace: Option<String> (never resolved, see DESIGN.md)
//! └── fields: Vec<Field>        (declaration order)
//!     └── Field
//!         ├── name: String
//!         ├── original_type: String
//!         ├── width: u32              (default 20)
//!         ├── is_primary_key: bool    (PK)
//!         ├── is_foreign_key: bool    (FK)
//!         ├── is_auto_increment: bool (AUTOINC)
//!         ├── is_readonly: bool       (READONLY)
//!         ├── is_ignored: bool        (IGNORE; such fields are dropped)
//!         └── is_enum: bool           (canonical type is an enumeration)
//! ```
//!
//! Records are created fresh per invocation, populated in one pass by the
//! builder, and read-only afterward.

mod entity;
mod field;

pub use entity::{Entity, EntityType};
pub use field::Field;

//! Core contracts for expgrid.
//!
//! This crate defines record shape descriptors, the dynamic field value type,
//! the [`Experiment`] trait that generated records implement, and shape
//! validation shared by the generation crate.

pub mod error;
pub mod record;
pub mod schema;
pub mod types;
pub mod validation;
pub mod value;

pub use error::{Error, Result};
pub use record::{Experiment, unknown_field};
pub use schema::{FieldRole, FieldSpec, Shape, ShapeBuilder};
pub use types::{FieldKind, IntWidth, UintWidth};
pub use validation::validate_shape;
pub use value::Value;

/// JSON Schema describing serialized [`Shape`] declarations.
pub fn shape_json_schema() -> schemars::schema::RootSchema {
    schemars::schema_for!(Shape)
}

//! Experiment grid generation for expgrid.
//!
//! This crate parses per-field value domains from a record [`Shape`],
//! expands a template record into every combination of those values, and
//! exports the resulting records as CSV.
//!
//! [`Shape`]: expgrid_core::Shape

pub mod domain;
pub mod errors;
pub mod expand;
pub mod logging;
pub mod options;
pub mod output;

pub use domain::{FieldDomain, parse_domain, parse_shape_domains};
pub use errors::{GenerationError, Result};
pub use expand::{template, template_default};
pub use options::ExportOptions;
pub use output::csv::{export_csv, export_csv_to_dir, to_csv_string, write_csv, write_csv_path};

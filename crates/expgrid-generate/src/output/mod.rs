//! Tabular export of generated records.

pub mod csv;

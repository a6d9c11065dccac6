use std::collections::BTreeSet;

use crate::error::{Error, Result};
use crate::schema::Shape;

/// Validate a record shape before its domains are parsed.
///
/// This checks:
/// - the shape and every field are named
/// - field names are unique
/// - domain fields use a kind that can carry a value domain
pub fn validate_shape(shape: &Shape) -> Result<()> {
    if shape.name.trim().is_empty() {
        return Err(Error::InvalidShape("shape name is empty".to_string()));
    }

    let mut seen = BTreeSet::new();
    for (idx, field) in shape.fields.iter().enumerate() {
        if field.name.trim().is_empty() {
            return Err(Error::InvalidShape(format!(
                "{}: field #{idx} has an empty name",
                shape.name
            )));
        }

        if !seen.insert(field.name.as_str()) {
            return Err(Error::InvalidShape(format!(
                "{}: duplicate field name: {}",
                shape.name, field.name
            )));
        }

        if field.is_domain() && !field.kind.supports_domain() {
            return Err(Error::InvalidShape(format!(
                "{}.{}: only numeric, string and boolean fields can be generated, given {}",
                shape.name, field.name, field.kind
            )));
        }
    }

    Ok(())
}

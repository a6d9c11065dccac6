use crate::error::{Error, Result};
use crate::schema::Shape;
use crate::value::Value;

/// A record type that can be templated into an experiment grid.
///
/// Implementors declare their fields once through [`Experiment::shape`] and
/// dispatch reads and writes by field name. Generated records are cloned per
/// branch, so `Clone` must produce an independent copy.
///
/// ```
/// use expgrid_core::{Experiment, FieldKind, IntWidth, Result, Shape, Value, unknown_field};
///
/// #[derive(Debug, Clone, Default)]
/// struct Bench {
///     workers: i32,
///     elapsed_ms: Option<f64>,
/// }
///
/// impl Experiment for Bench {
///     fn shape() -> Shape {
///         Shape::builder("Bench")
///             .domain("workers", FieldKind::Int(IntWidth::I32), "1, 2, 4")
///             .opaque("elapsed_ms", FieldKind::Float64)
///             .build()
///     }
///
///     fn get(&self, field: &str) -> Option<Value> {
///         match field {
///             "workers" => Some(self.workers.into()),
///             "elapsed_ms" => Some(self.elapsed_ms.into()),
///             _ => None,
///         }
///     }
///
///     fn set(&mut self, field: &str, value: Value) -> Result<()> {
///         match field {
///             "workers" => self.workers = value.try_into()?,
///             other => return Err(unknown_field(other)),
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait Experiment: Clone {
    /// Field declarations in declaration order.
    fn shape() -> Shape;

    /// Current value of `field`, or `None` when the record has no such field.
    fn get(&self, field: &str) -> Option<Value>;

    /// Apply a domain value to `field`.
    fn set(&mut self, field: &str, value: Value) -> Result<()>;
}

/// Error for a field name the record does not recognize.
pub fn unknown_field(field: &str) -> Error {
    Error::UnknownField {
        field: field.to_string(),
    }
}

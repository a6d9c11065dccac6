use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Bit width of a signed integer field.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum IntWidth {
    I8,
    I16,
    I32,
    I64,
}

impl IntWidth {
    /// Inclusive bounds representable at this width.
    pub fn bounds(self) -> (i64, i64) {
        match self {
            IntWidth::I8 => (i8::MIN as i64, i8::MAX as i64),
            IntWidth::I16 => (i16::MIN as i64, i16::MAX as i64),
            IntWidth::I32 => (i32::MIN as i64, i32::MAX as i64),
            IntWidth::I64 => (i64::MIN, i64::MAX),
        }
    }
}

/// Bit width of an unsigned integer field.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum UintWidth {
    U8,
    U16,
    U32,
    U64,
}

impl UintWidth {
    /// Largest value representable at this width.
    pub fn max(self) -> u64 {
        match self {
            UintWidth::U8 => u8::MAX as u64,
            UintWidth::U16 => u16::MAX as u64,
            UintWidth::U32 => u32::MAX as u64,
            UintWidth::U64 => u64::MAX,
        }
    }
}

/// Declared type of a record field.
///
/// Only `Bool`, `Int`, `Uint`, `Float32` and `String` may carry a value
/// domain. The remaining kinds exist for opaque result fields.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[serde(tag = "type", content = "width", rename_all = "snake_case")]
pub enum FieldKind {
    Bool,
    Int(IntWidth),
    Uint(UintWidth),
    Float32,
    Float64,
    String,
    List,
    Any,
}

impl FieldKind {
    /// Whether a field of this kind can be expanded over a value domain.
    pub fn supports_domain(self) -> bool {
        matches!(
            self,
            FieldKind::Bool
                | FieldKind::Int(_)
                | FieldKind::Uint(_)
                | FieldKind::Float32
                | FieldKind::String
        )
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldKind::Bool => "bool",
            FieldKind::Int(IntWidth::I8) => "i8",
            FieldKind::Int(IntWidth::I16) => "i16",
            FieldKind::Int(IntWidth::I32) => "i32",
            FieldKind::Int(IntWidth::I64) => "i64",
            FieldKind::Uint(UintWidth::U8) => "u8",
            FieldKind::Uint(UintWidth::U16) => "u16",
            FieldKind::Uint(UintWidth::U32) => "u32",
            FieldKind::Uint(UintWidth::U64) => "u64",
            FieldKind::Float32 => "f32",
            FieldKind::Float64 => "f64",
            FieldKind::String => "string",
            FieldKind::List => "list",
            FieldKind::Any => "any",
        };
        f.write_str(name)
    }
}

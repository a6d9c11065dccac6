use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::types::FieldKind;

/// Whether a field is expanded over a value domain or left for results.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum FieldRole {
    /// Field varied across generated records. The annotation is the raw
    /// domain declaration, e.g. `"1, 5"` or `"GET, POST"`.
    Domain { annotation: Option<String> },
    /// Field excluded from expansion; must hold its zero value in the
    /// template record.
    Opaque,
}

/// Declaration of a single record field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
pub struct FieldSpec {
    pub name: String,
    pub kind: FieldKind,
    pub role: FieldRole,
}

impl FieldSpec {
    pub fn domain(name: impl Into<String>, kind: FieldKind, annotation: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            role: FieldRole::Domain {
                annotation: Some(annotation.into()),
            },
        }
    }

    /// Domain field without an annotation. Only booleans have a default
    /// domain; any other kind fails when its domain is parsed.
    pub fn unannotated(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            role: FieldRole::Domain { annotation: None },
        }
    }

    pub fn opaque(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            role: FieldRole::Opaque,
        }
    }

    pub fn is_domain(&self) -> bool {
        matches!(self.role, FieldRole::Domain { .. })
    }

    pub fn is_opaque(&self) -> bool {
        matches!(self.role, FieldRole::Opaque)
    }

    pub fn annotation(&self) -> Option<&str> {
        match &self.role {
            FieldRole::Domain { annotation } => annotation.as_deref(),
            FieldRole::Opaque => None,
        }
    }
}

/// Ordered field declarations for one experiment record type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
pub struct Shape {
    /// Record type name; also names the default CSV export file.
    pub name: String,
    pub fields: Vec<FieldSpec>,
}

impl Shape {
    pub fn builder(name: impl Into<String>) -> ShapeBuilder {
        ShapeBuilder {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    pub fn domain_fields(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter().filter(|field| field.is_domain())
    }

    pub fn opaque_fields(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter().filter(|field| field.is_opaque())
    }

    /// Field names in declaration order, as written to the CSV header.
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|field| field.name.as_str()).collect()
    }
}

/// Incremental builder for [`Shape`], keeping declaration order.
#[derive(Debug, Clone)]
pub struct ShapeBuilder {
    name: String,
    fields: Vec<FieldSpec>,
}

impl ShapeBuilder {
    pub fn domain(
        mut self,
        name: impl Into<String>,
        kind: FieldKind,
        annotation: impl Into<String>,
    ) -> Self {
        self.fields.push(FieldSpec::domain(name, kind, annotation));
        self
    }

    /// Boolean domain field with the default `[true, false]` domain.
    pub fn flag(mut self, name: impl Into<String>) -> Self {
        self.fields.push(FieldSpec::unannotated(name, FieldKind::Bool));
        self
    }

    pub fn unannotated(mut self, name: impl Into<String>, kind: FieldKind) -> Self {
        self.fields.push(FieldSpec::unannotated(name, kind));
        self
    }

    pub fn opaque(mut self, name: impl Into<String>, kind: FieldKind) -> Self {
        self.fields.push(FieldSpec::opaque(name, kind));
        self
    }

    pub fn build(self) -> Shape {
        Shape {
            name: self.name,
            fields: self.fields,
        }
    }
}

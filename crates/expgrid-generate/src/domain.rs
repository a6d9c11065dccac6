use tracing::debug;

use expgrid_core::{
    Experiment, FieldKind, FieldSpec, Shape, Value, unknown_field, validate_shape,
};

use crate::errors::{GenerationError, Result};

const RANGE_PREFIX: &str = "range";

/// Candidate values for one domain field, in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDomain {
    pub name: String,
    pub kind: FieldKind,
    pub values: Vec<Value>,
}

impl FieldDomain {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Parse the domain annotation of a single field into typed candidates.
pub fn parse_domain(field: &FieldSpec) -> Result<Vec<Value>> {
    if field.is_opaque() {
        return Err(GenerationError::Usage(format!(
            "field '{}' is opaque and has no value domain",
            field.name
        )));
    }

    match field.kind {
        FieldKind::Bool => Ok(parse_bool_domain(field.annotation())),
        FieldKind::String => {
            let annotation = required_annotation(field)?;
            Ok(annotation
                .split(',')
                .map(|token| Value::Text(token.trim().to_string()))
                .collect())
        }
        FieldKind::Int(_) | FieldKind::Uint(_) | FieldKind::Float32 => {
            let annotation = required_annotation(field)?;
            parse_numeric_domain(field, annotation)
        }
        other => Err(GenerationError::Usage(format!(
            "field '{}': only numeric, string and boolean fields can be generated, given {other}",
            field.name
        ))),
    }
}

/// Reject a template whose opaque field already carries a value.
pub fn check_opaque_zero(shape: &Shape, field: &FieldSpec, value: &Value) -> Result<()> {
    if value.is_zero() {
        return Ok(());
    }
    Err(GenerationError::Usage(format!(
        "{}.{}: opaque field holds non-default value '{value}'; \
         opaque fields may only store experiment results",
        shape.name, field.name
    )))
}

/// Validate `shape`, check the opaque fields of `base`, and parse every
/// domain field in declaration order.
pub fn parse_shape_domains<E: Experiment>(shape: &Shape, base: &E) -> Result<Vec<FieldDomain>> {
    validate_shape(shape)?;

    let mut domains = Vec::new();
    for field in &shape.fields {
        if field.is_opaque() {
            let current = base
                .get(&field.name)
                .ok_or_else(|| unknown_field(&field.name))?;
            check_opaque_zero(shape, field, &current)?;
            continue;
        }

        let values = parse_domain(field)?;
        debug!(
            shape = %shape.name,
            field = %field.name,
            kind = %field.kind,
            values = values.len(),
            "parsed field domain"
        );
        domains.push(FieldDomain {
            name: field.name.clone(),
            kind: field.kind,
            values,
        });
    }

    Ok(domains)
}

fn required_annotation(field: &FieldSpec) -> Result<&str> {
    field.annotation().ok_or_else(|| {
        GenerationError::Usage(format!(
            "missing domain annotation on field '{}'; non-boolean fields must list their values, \
             e.g. \"1, 3, 5\"",
            field.name
        ))
    })
}

fn parse_bool_domain(annotation: Option<&str>) -> Vec<Value> {
    let Some(annotation) = annotation else {
        return vec![Value::Bool(true), Value::Bool(false)];
    };
    let compact = strip_whitespace(annotation);
    let has_true = compact.contains("true");
    let has_false = compact.contains("false");
    if has_true && has_false {
        vec![Value::Bool(true), Value::Bool(false)]
    } else {
        vec![Value::Bool(has_true)]
    }
}

fn parse_numeric_domain(field: &FieldSpec, annotation: &str) -> Result<Vec<Value>> {
    let compact = strip_whitespace(annotation);
    if compact.starts_with(RANGE_PREFIX) {
        return Err(GenerationError::Unsupported(format!(
            "range domain on field '{}'; list the values explicitly",
            field.name
        )));
    }
    compact
        .split(',')
        .map(|token| parse_number(field, token))
        .collect()
}

fn parse_number(field: &FieldSpec, token: &str) -> Result<Value> {
    let parsed = match field.kind {
        FieldKind::Int(width) => {
            let (min, max) = width.bounds();
            parse_signed(token)
                .filter(|value| (min..=max).contains(value))
                .map(Value::Int)
        }
        FieldKind::Uint(width) => parse_unsigned(token)
            .filter(|value| *value <= width.max())
            .map(Value::Uint),
        FieldKind::Float32 => token
            .parse::<f64>()
            .ok()
            .map(|value| Value::Float32(value as f32)),
        other => {
            return Err(GenerationError::Usage(format!(
                "field '{}': kind {other} is not numeric",
                field.name
            )));
        }
    };

    parsed.ok_or_else(|| GenerationError::Parse {
        field: field.name.clone(),
        token: token.to_string(),
        kind: field.kind.to_string(),
    })
}

fn parse_signed(token: &str) -> Option<i64> {
    match token.strip_prefix('-') {
        Some(digits) => {
            let magnitude = parse_magnitude(digits)?;
            if magnitude == i64::MIN.unsigned_abs() {
                Some(i64::MIN)
            } else {
                i64::try_from(magnitude).ok().map(|value| -value)
            }
        }
        None => {
            let digits = token.strip_prefix('+').unwrap_or(token);
            i64::try_from(parse_magnitude(digits)?).ok()
        }
    }
}

fn parse_unsigned(token: &str) -> Option<u64> {
    parse_magnitude(token.strip_prefix('+').unwrap_or(token))
}

/// Unsigned digits with an optional `0x`/`0o`/`0b` prefix and `_` separators.
fn parse_magnitude(digits: &str) -> Option<u64> {
    let (radix, body) = radix_prefix(digits);
    if body.is_empty()
        || body.starts_with(['_', '+', '-'])
        || body.ends_with('_')
        || body.contains("__")
    {
        return None;
    }
    let cleaned: String = body.chars().filter(|ch| *ch != '_').collect();
    u64::from_str_radix(&cleaned, radix).ok()
}

fn radix_prefix(digits: &str) -> (u32, &str) {
    let prefixes = [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)];
    for (prefix, radix) in prefixes {
        if let Some(body) = digits.strip_prefix(prefix) {
            return (radix, body);
        }
    }
    (10, digits)
}

fn strip_whitespace(value: &str) -> String {
    value.chars().filter(|ch| !ch.is_whitespace()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use expgrid_core::{IntWidth, UintWidth};

    fn int_field(annotation: &str) -> FieldSpec {
        FieldSpec::domain("n", FieldKind::Int(IntWidth::I64), annotation)
    }

    #[test]
    fn bool_defaults_to_both_values() {
        let field = FieldSpec::unannotated("warm", FieldKind::Bool);
        assert_eq!(
            parse_domain(&field).expect("bool domain"),
            vec![Value::Bool(true), Value::Bool(false)]
        );
    }

    #[test]
    fn bool_annotation_restricts_domain() {
        let only_true = FieldSpec::domain("warm", FieldKind::Bool, " true ");
        assert_eq!(parse_domain(&only_true).expect("domain"), vec![Value::Bool(true)]);

        let only_false = FieldSpec::domain("warm", FieldKind::Bool, "false");
        assert_eq!(parse_domain(&only_false).expect("domain"), vec![Value::Bool(false)]);

        let both = FieldSpec::domain("warm", FieldKind::Bool, "fal se,\ttrue");
        assert_eq!(
            parse_domain(&both).expect("domain"),
            vec![Value::Bool(true), Value::Bool(false)]
        );
    }

    #[test]
    fn string_tokens_keep_inner_whitespace() {
        let field = FieldSpec::domain("req", FieldKind::String, " GET me,\t POST, PUT");
        assert_eq!(
            parse_domain(&field).expect("string domain"),
            vec![
                Value::Text("GET me".to_string()),
                Value::Text("POST".to_string()),
                Value::Text("PUT".to_string()),
            ]
        );
    }

    #[test]
    fn string_requires_annotation() {
        let field = FieldSpec::unannotated("req", FieldKind::String);
        assert!(matches!(parse_domain(&field), Err(GenerationError::Usage(_))));
    }

    #[test]
    fn numeric_strips_all_whitespace() {
        let field = int_field("\t30\t00, 1");
        assert_eq!(
            parse_domain(&field).expect("int domain"),
            vec![Value::Int(3000), Value::Int(1)]
        );
    }

    #[test]
    fn integers_accept_radix_prefixes() {
        let field = int_field("0x10, 0o17, 0b101, -1_000");
        assert_eq!(
            parse_domain(&field).expect("int domain"),
            vec![
                Value::Int(16),
                Value::Int(15),
                Value::Int(5),
                Value::Int(-1000)
            ]
        );
    }

    #[test]
    fn leading_zero_stays_decimal() {
        let field = int_field("010, 007");
        assert_eq!(
            parse_domain(&field).expect("int domain"),
            vec![Value::Int(10), Value::Int(7)]
        );
    }

    #[test]
    fn integers_respect_declared_width() {
        let field = FieldSpec::domain("n", FieldKind::Int(IntWidth::I8), "-128, 127");
        assert_eq!(
            parse_domain(&field).expect("i8 domain"),
            vec![Value::Int(-128), Value::Int(127)]
        );

        let field = FieldSpec::domain("n", FieldKind::Int(IntWidth::I8), "300");
        assert!(matches!(
            parse_domain(&field),
            Err(GenerationError::Parse { token, .. }) if token == "300"
        ));

        let field = FieldSpec::domain("n", FieldKind::Uint(UintWidth::U64), "-1");
        assert!(matches!(parse_domain(&field), Err(GenerationError::Parse { .. })));
    }

    #[test]
    fn float32_narrows_from_f64() {
        let field = FieldSpec::domain("ratio", FieldKind::Float32, " 0, 4.3");
        assert_eq!(
            parse_domain(&field).expect("f32 domain"),
            vec![Value::Float32(0.0), Value::Float32(4.3)]
        );
    }

    #[test]
    fn bad_numeric_token_fails() {
        for annotation in ["1,two", "1,,2", "0x", "1__0"] {
            assert!(
                matches!(parse_domain(&int_field(annotation)), Err(GenerationError::Parse { .. })),
                "annotation {annotation:?} should not parse"
            );
        }
    }

    #[test]
    fn range_syntax_is_rejected() {
        let field = int_field("range(40000, 100000, 25000)");
        assert!(matches!(parse_domain(&field), Err(GenerationError::Unsupported(_))));

        let field = int_field(" range (1,2,1)");
        assert!(matches!(parse_domain(&field), Err(GenerationError::Unsupported(_))));
    }

    #[test]
    fn unsupported_kind_is_usage_error() {
        let field = FieldSpec::domain("ratio", FieldKind::Float64, "1.5");
        assert!(matches!(parse_domain(&field), Err(GenerationError::Usage(_))));
    }

    #[test]
    fn opaque_field_has_no_domain() {
        let field = FieldSpec::opaque("result", FieldKind::Any);
        assert!(matches!(parse_domain(&field), Err(GenerationError::Usage(_))));
    }
}

use tracing::{debug, info};

use expgrid_core::Experiment;

use crate::domain::{FieldDomain, parse_shape_domains};
use crate::errors::{GenerationError, Result};

/// Expand `base` into one record per combination of its domain values.
///
/// Records come out in odometer order: the last declared domain field varies
/// fastest. Opaque fields keep the zero value they had in `base`. A shape
/// without domain fields yields no records.
pub fn template<E: Experiment>(base: E) -> Result<Vec<E>> {
    let shape = E::shape();
    let domains = parse_shape_domains(&shape, &base)?;
    let expected = expected_len(&domains)?;

    info!(
        shape = %shape.name,
        domain_fields = domains.len(),
        expected,
        "template expansion started"
    );

    let records = expand_domains(&domains, base)?;
    check_count(expected, records.len())?;

    info!(shape = %shape.name, records = records.len(), "template expansion finished");
    Ok(records)
}

/// Expand a record type starting from its `Default` instance.
pub fn template_default<E: Experiment + Default>() -> Result<Vec<E>> {
    template(E::default())
}

/// Number of records the domains expand to: the product of their sizes, or
/// zero when there are no domain fields.
pub fn expected_len(domains: &[FieldDomain]) -> Result<usize> {
    if domains.is_empty() {
        return Ok(0);
    }
    domains.iter().try_fold(1_usize, |acc, domain| {
        acc.checked_mul(domain.len()).ok_or_else(|| {
            GenerationError::Usage(format!(
                "domain product overflows at field '{}'",
                domain.name
            ))
        })
    })
}

/// Cross-check the generated record count against the domain product.
pub(crate) fn check_count(expected: usize, actual: usize) -> Result<()> {
    if expected == actual {
        return Ok(());
    }
    Err(GenerationError::Invariant { expected, actual })
}

/// Odometer expansion over already parsed domains.
pub fn expand_domains<E: Experiment>(domains: &[FieldDomain], base: E) -> Result<Vec<E>> {
    let mut outputs = Vec::new();
    if domains.is_empty() {
        debug!("no domain fields to expand");
        return Ok(outputs);
    }
    expand_from(domains, 0, &base, &mut outputs)?;
    Ok(outputs)
}

fn expand_from<E: Experiment>(
    domains: &[FieldDomain],
    idx: usize,
    current: &E,
    outputs: &mut Vec<E>,
) -> Result<()> {
    let domain = &domains[idx];
    let last = idx + 1 == domains.len();
    for value in &domain.values {
        // Each branch owns its copy so sibling subtrees never share writes.
        let mut next = current.clone();
        next.set(&domain.name, value.clone())?;
        if last {
            outputs.push(next);
        } else {
            expand_from(domains, idx + 1, &next, outputs)?;
        }
    }
    Ok(())
}

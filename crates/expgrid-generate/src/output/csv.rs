use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use expgrid_core::{Experiment, Value, unknown_field};

use crate::errors::Result;
use crate::options::ExportOptions;

/// Write records as CSV: a header of every field name in declaration order,
/// then one row per record. Returns the number of bytes written.
pub fn write_csv<W: Write, E: Experiment>(
    writer: W,
    records: &[E],
    options: &ExportOptions,
) -> Result<u64> {
    let shape = E::shape();
    let tally = Tally(writer, 0);
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .quote_style(csv::QuoteStyle::Necessary)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(tally);

    writer.write_record(shape.field_names())?;

    for record in records {
        let row = shape
            .fields
            .iter()
            .map(|field| {
                let value = record
                    .get(&field.name)
                    .ok_or_else(|| unknown_field(&field.name))?;
                Ok(format_cell(&value, options))
            })
            .collect::<Result<Vec<String>>>()?;
        writer.write_record(&row)?;
    }

    writer.flush()?;
    let Tally(_, bytes) = writer.into_inner().map_err(|err| err.into_error())?;
    debug!(shape = %shape.name, rows = records.len(), bytes, "csv written");
    Ok(bytes)
}

/// Write records as CSV to a new file at `path`.
pub fn write_csv_path<E: Experiment>(
    path: &Path,
    records: &[E],
    options: &ExportOptions,
) -> Result<u64> {
    let file = BufWriter::new(File::create(path)?);
    write_csv(file, records, options)
}

/// Write records to `path` and return the file's contents.
pub fn export_csv<E: Experiment>(
    path: &Path,
    records: &[E],
    options: &ExportOptions,
) -> Result<String> {
    let bytes = write_csv_path(path, records, options)?;
    let content = std::fs::read_to_string(path)?;
    info!(path = %path.display(), rows = records.len(), bytes, "experiment results exported");
    Ok(content)
}

/// Export to `<out_dir>/<shape name>.csv`, returning the path and contents.
pub fn export_csv_to_dir<E: Experiment>(
    records: &[E],
    options: &ExportOptions,
) -> Result<(PathBuf, String)> {
    std::fs::create_dir_all(&options.out_dir)?;
    let path = options.out_dir.join(format!("{}.csv", E::shape().name));
    let content = export_csv(&path, records, options)?;
    debug!(path = %path.display(), content = %content, "experiment results");
    Ok((path, content))
}

/// Render records as an in-memory CSV document.
pub fn to_csv_string<E: Experiment>(records: &[E], options: &ExportOptions) -> Result<String> {
    let mut buffer = Vec::new();
    write_csv(&mut buffer, records, options)?;
    let content = String::from_utf8(buffer)
        .map_err(|err| std::io::Error::new(std::io::ErrorKind::InvalidData, err))?;
    Ok(content)
}

/// Cell text for a value. Lists are flattened to their elements joined by
/// the configured separator; an empty list is an empty cell.
pub fn format_cell(value: &Value, options: &ExportOptions) -> String {
    match value {
        Value::Null => options.null_marker.clone(),
        Value::List(values) => values
            .iter()
            .map(|value| format_cell(value, options))
            .collect::<Vec<_>>()
            .join(&options.list_separator),
        other => other.to_string(),
    }
}

/// Byte tally over the sink, so callers learn the exported size without
/// re-reading it.
struct Tally<W>(W, u64);

impl<W: Write> Write for Tally<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let written = self.0.write(buf)?;
        self.1 += written as u64;
        Ok(written)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.0.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_flatten_without_brackets() {
        let options = ExportOptions::default();
        assert_eq!(format_cell(&Value::List(Vec::new()), &options), "");
        assert_eq!(format_cell(&Value::from(vec!["0"]), &options), "0");
        assert_eq!(format_cell(&Value::from(vec![1_i64, 2, 3]), &options), "1,2,3");
    }

    #[test]
    fn null_uses_configured_marker() {
        let options = ExportOptions {
            null_marker: "<nil>".to_string(),
            ..ExportOptions::default()
        };
        assert_eq!(format_cell(&Value::Null, &options), "<nil>");
        assert_eq!(
            format_cell(&Value::List(vec![Value::Null, Value::Int(1)]), &options),
            "<nil>,1"
        );
    }
}

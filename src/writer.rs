use std::io::Write;
use std::path::Path;

use log::info;

use crate::error::ExportError;
use crate::model::ExportRecord;

/// Write export records as CSV with the fixed column order:
/// Product Name, Type of Product, Main Ingredient, Brand, Sale Location,
/// On-line Reference, Date Visited. Headers come from the record's serde
/// renames.
pub fn write_csv<W: Write>(out: W, records: &[ExportRecord]) -> Result<(), ExportError> {
    let mut writer = csv::Writer::from_writer(out);
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Write export records to a CSV file at `path`.
pub fn write_csv_file(path: &Path, records: &[ExportRecord]) -> Result<(), ExportError> {
    let mut writer = csv::Writer::from_path(path)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush().map_err(csv::Error::from)?;
    info!("Wrote {} rows to {}", records.len(), path.display());
    Ok(())
}

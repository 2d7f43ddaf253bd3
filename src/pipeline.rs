use log::{info, warn};

use crate::config::{ExportConfig, MissingNamePolicy};
use crate::error::ExportError;
use crate::mapper::RecordMapper;
use crate::model::{ExportRecord, RawProduct};
use crate::translate::TranslationTable;

/// Map every raw record to an export record, preserving input order.
///
/// By default the run fails on the first record without a name; with
/// `MissingNamePolicy::Skip` such records are logged and dropped instead.
/// All other mapping is infallible, so apart from skipped records the
/// output is one row per input record.
pub fn run(
    records: &[RawProduct],
    table: &TranslationTable,
    config: &ExportConfig,
) -> Result<Vec<ExportRecord>, ExportError> {
    let mapper = RecordMapper::new(table, config);

    let mut exported = Vec::with_capacity(records.len());
    for raw in records {
        match mapper.map_record(raw) {
            Ok(record) => exported.push(record),
            Err(err @ ExportError::MissingName { .. })
                if config.on_missing_name == MissingNamePolicy::Skip =>
            {
                warn!("Skipping record: {}", err);
            }
            Err(err) => return Err(err),
        }
    }

    info!("Mapped {} of {} records", exported.len(), records.len());
    Ok(exported)
}

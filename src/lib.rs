pub mod classify;
pub mod config;
pub mod error;
pub mod ingredients;
pub mod loader;
pub mod mapper;
pub mod model;
pub mod pipeline;
pub mod translate;
pub mod writer;

use std::path::Path;

pub use crate::classify::{classify, ProductType};
pub use crate::config::{ExportConfig, MissingNamePolicy};
pub use crate::error::ExportError;
pub use crate::ingredients::IngredientExtractor;
pub use crate::mapper::RecordMapper;
pub use crate::model::{ExportRecord, NavCategory, RawProduct, SuperCategory};
pub use crate::translate::TranslationTable;

/// Run the whole export: load the catalog, map every record and write
/// the CSV.
pub fn export_catalog(
    input: &Path,
    output: &Path,
    config: &ExportConfig,
) -> Result<Vec<ExportRecord>, ExportError> {
    let records = loader::load_catalog(input)?;
    let table = TranslationTable::swedish_english();
    let exported = pipeline::run(&records, &table, config)?;
    writer::write_csv_file(output, &exported)?;
    Ok(exported)
}

use thiserror::Error;

/// Errors that can occur during catalog export operations
#[derive(Error, Debug)]
pub enum ExportError {
    /// The catalog document did not have a recognizable shape
    #[error("Unexpected catalog shape: {0}")]
    InputShape(String),

    /// A record is missing its required product name
    #[error("Product record has no name (ean: {ean})")]
    MissingName { ean: String },

    /// Failed to read the catalog file
    #[error("Failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse the catalog JSON
    #[error("Failed to parse catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Failed to write the export spreadsheet
    #[error("Failed to write export: {0}")]
    Csv(#[from] csv::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

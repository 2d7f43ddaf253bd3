use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// What to do with a catalog record that has no product name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingNamePolicy {
    /// Fail the whole run (the original behavior).
    #[default]
    Abort,
    /// Log a warning and drop the record.
    Skip,
}

/// Export configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    /// Base path for generated product reference URLs
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Constant sale-location column value
    #[serde(default = "default_sale_location")]
    pub sale_location: String,
    /// Whether a record without a name aborts the run or is skipped
    #[serde(default)]
    pub on_missing_name: MissingNamePolicy,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            sale_location: default_sale_location(),
            on_missing_name: MissingNamePolicy::default(),
        }
    }
}

fn default_base_url() -> String {
    "https://www.coop.se/handla/varor".to_string()
}

fn default_sale_location() -> String {
    "Sweden".to_string()
}

impl ExportConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with VEGO__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: VEGO__BASE_URL
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Optional config file (can be missing)
            .add_source(File::with_name("config").required(false))
            .add_source(
                Environment::with_prefix("VEGO")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

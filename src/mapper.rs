use chrono::{SecondsFormat, Utc};
use log::debug;

use crate::classify::classify;
use crate::config::ExportConfig;
use crate::error::ExportError;
use crate::ingredients::IngredientExtractor;
use crate::model::{ExportRecord, RawProduct};
use crate::translate::TranslationTable;

/// Placeholder categories for products without navigation data, matching
/// the store's generic vegetarian section.
const DEFAULT_CATEGORY: &str = "vegetariskt";
const DEFAULT_SUBCATEGORY: &str = "ovrig-vegetariskt";

/// Turns one raw catalog record into one export row.
pub struct RecordMapper<'t> {
    table: &'t TranslationTable,
    base_url: String,
    sale_location: String,
}

impl<'t> RecordMapper<'t> {
    pub fn new(table: &'t TranslationTable, config: &ExportConfig) -> Self {
        Self {
            table,
            base_url: config.base_url.clone(),
            sale_location: config.sale_location.clone(),
        }
    }

    /// Map a raw product to its export record.
    ///
    /// A record without a name cannot produce a slug or product name and
    /// is a fatal error; every other absent field degrades to an empty
    /// string or a placeholder category.
    pub fn map_record(&self, raw: &RawProduct) -> Result<ExportRecord, ExportError> {
        let name = raw.name.as_deref().ok_or_else(|| ExportError::MissingName {
            ean: raw.ean.clone().unwrap_or_else(|| "unknown".to_string()),
        })?;

        let extractor = IngredientExtractor::new(self.table);

        // First super-category of the first nav category, then the nav
        // category itself, falling back to the generic section
        let main_category = raw
            .nav_categories
            .first()
            .and_then(|cat| cat.super_categories.first())
            .map(|sup| sup.name.as_str())
            .unwrap_or(DEFAULT_CATEGORY);
        let sub_category = raw
            .nav_categories
            .first()
            .map(|cat| cat.name.as_str())
            .unwrap_or(DEFAULT_SUBCATEGORY);

        let slug = slugify(name);
        let ean = raw.ean.as_deref().unwrap_or_default();
        let online_reference = format!(
            "{}/{}/{}/{}-{}",
            self.base_url,
            main_category.to_lowercase(),
            sub_category.to_lowercase(),
            slug,
            ean
        );

        let record = ExportRecord {
            product_name: name.to_string(),
            product_type: classify(raw.description.as_deref().unwrap_or_default()).to_string(),
            main_ingredient: extractor.main_ingredient(raw.list_of_ingredients.as_deref()),
            brand: self
                .table
                .translate(raw.manufacturer_name.as_deref().unwrap_or_default()),
            sale_location: self.sale_location.clone(),
            online_reference,
            date_visited: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        };
        debug!("Mapped {:?} -> {:?}", name, record.product_type);
        Ok(record)
    }
}

/// URL-safe form of a product name: lower-cased, with every run of
/// characters outside `a-z0-9` collapsed to a single hyphen.
fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut in_run = false;
    for c in name.to_lowercase().chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c);
            in_run = false;
        } else if !in_run {
            slug.push('-');
            in_run = true;
        }
    }
    slug
}

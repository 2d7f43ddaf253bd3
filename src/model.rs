use serde::{Deserialize, Serialize};

/// One entry of the raw product catalog, as it appears in the store's JSON.
///
/// Only the fields the export needs are modeled; everything else in the
/// document is ignored. All fields except `name` are optional and degrade
/// to defaults during mapping.
#[derive(Debug, Clone, Deserialize)]
pub struct RawProduct {
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "listOfIngredients")]
    pub list_of_ingredients: Option<String>,
    #[serde(rename = "manufacturerName")]
    pub manufacturer_name: Option<String>,
    pub ean: Option<String>,
    #[serde(rename = "navCategories", default)]
    pub nav_categories: Vec<NavCategory>,
}

/// A store navigation category attached to a product.
#[derive(Debug, Clone, Deserialize)]
pub struct NavCategory {
    pub name: String,
    #[serde(rename = "superCategories", default)]
    pub super_categories: Vec<SuperCategory>,
}

/// A parent category in the store's navigation tree.
#[derive(Debug, Clone, Deserialize)]
pub struct SuperCategory {
    pub name: String,
}

/// One row of the export spreadsheet.
///
/// The serde renames double as the spreadsheet column headers, so the
/// CSV writer produces the fixed column order by serializing this struct
/// field by field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportRecord {
    #[serde(rename = "Product Name")]
    pub product_name: String,
    #[serde(rename = "Type of Product")]
    pub product_type: String,
    #[serde(rename = "Main Ingredient")]
    pub main_ingredient: String,
    #[serde(rename = "Brand")]
    pub brand: String,
    #[serde(rename = "Sale Location")]
    pub sale_location: String,
    #[serde(rename = "On-line Reference")]
    pub online_reference: String,
    #[serde(rename = "Date Visited")]
    pub date_visited: String,
}

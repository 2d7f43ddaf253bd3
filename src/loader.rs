use std::fs;
use std::path::Path;

use log::debug;
use serde_json::Value;

use crate::error::ExportError;
use crate::model::RawProduct;

/// Read and parse a catalog file into raw product records.
pub fn load_catalog(path: &Path) -> Result<Vec<RawProduct>, ExportError> {
    let content = fs::read_to_string(path)?;
    parse_catalog(&content)
}

/// Parse a catalog JSON document into raw product records.
///
/// The store exports two shapes: `{"results": {"items": [...]}}` and the
/// older `{"results": [...]}`. Anything else is rejected with a
/// descriptive error rather than coerced.
pub fn parse_catalog(content: &str) -> Result<Vec<RawProduct>, ExportError> {
    let document: Value = serde_json::from_str(content)?;

    let items = document
        .get("results")
        .map(|results| results.get("items").unwrap_or(results))
        .ok_or_else(|| {
            ExportError::InputShape("document has no \"results\" field".to_string())
        })?;

    let items = items.as_array().ok_or_else(|| {
        ExportError::InputShape(
            "expected \"results.items\" or \"results\" to be an array".to_string(),
        )
    })?;

    debug!("Catalog contains {} items", items.len());

    items
        .iter()
        .map(|item| serde_json::from_value(item.clone()).map_err(ExportError::from))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_items_shape() {
        let json = r#"
        {
            "results": {
                "items": [
                    {"name": "Mungburgare", "ean": "123"},
                    {"name": "Vegokorv", "ean": "456"}
                ]
            }
        }
        "#;

        let records = parse_catalog(json).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name.as_deref(), Some("Mungburgare"));
        assert_eq!(records[1].ean.as_deref(), Some("456"));
    }

    #[test]
    fn test_parse_results_array_fallback() {
        let json = r#"{"results": [{"name": "Mungburgare", "ean": "123"}]}"#;

        let records = parse_catalog(json).unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_parse_ignores_unknown_fields() {
        let json = r#"
        {
            "results": [
                {
                    "name": "Mungburgare",
                    "ean": "123",
                    "price": 39.5,
                    "navCategories": [
                        {"name": "Vegoburgare", "superCategories": [{"name": "Vegetariskt"}]}
                    ]
                }
            ]
        }
        "#;

        let records = parse_catalog(json).unwrap();
        assert_eq!(records[0].nav_categories[0].name, "Vegoburgare");
    }

    #[test]
    fn test_missing_results_is_rejected() {
        let err = parse_catalog(r#"{"items": []}"#).unwrap_err();
        assert!(matches!(err, ExportError::InputShape(_)));
    }

    #[test]
    fn test_non_array_results_is_rejected() {
        let err = parse_catalog(r#"{"results": {"items": 42}}"#).unwrap_err();
        assert!(matches!(err, ExportError::InputShape(_)));
    }

    #[test]
    fn test_invalid_json_is_rejected() {
        let err = parse_catalog("not json").unwrap_err();
        assert!(matches!(err, ExportError::Json(_)));
    }
}

use vego_export::{loader, pipeline, ExportConfig, ExportError, MissingNamePolicy, TranslationTable};

#[test]
fn test_results_items_shape() {
    let json = r#"{"results": {"items": [{"name": "Vegobullar", "ean": "1"}]}}"#;
    let records = loader::parse_catalog(json).unwrap();
    assert_eq!(records.len(), 1);
}

#[test]
fn test_results_array_shape() {
    let json = r#"{"results": [{"name": "Vegobullar", "ean": "1"}]}"#;
    let records = loader::parse_catalog(json).unwrap();
    assert_eq!(records.len(), 1);
}

#[test]
fn test_unrecognized_shape_fails_before_any_mapping() {
    let json = r#"{"products": [{"name": "Vegobullar"}]}"#;
    let err = loader::parse_catalog(json).unwrap_err();
    assert!(matches!(err, ExportError::InputShape(_)));
}

#[test]
fn test_nameless_record_aborts_run() {
    let json = r#"
    {
        "results": [
            {"name": "Vegobullar", "ean": "1"},
            {"ean": "2", "description": "namnlös produkt"}
        ]
    }
    "#;
    let records = loader::parse_catalog(json).unwrap();
    let table = TranslationTable::swedish_english();

    let err = pipeline::run(&records, &table, &ExportConfig::default()).unwrap_err();
    assert!(matches!(err, ExportError::MissingName { ean } if ean == "2"));
}

#[test]
fn test_nameless_record_skipped_under_skip_policy() {
    let json = r#"
    {
        "results": [
            {"name": "Vegobullar", "ean": "1"},
            {"ean": "2"},
            {"name": "Vegofärs", "ean": "3"}
        ]
    }
    "#;
    let records = loader::parse_catalog(json).unwrap();
    let table = TranslationTable::swedish_english();
    let config = ExportConfig {
        on_missing_name: MissingNamePolicy::Skip,
        ..ExportConfig::default()
    };

    let exported = pipeline::run(&records, &table, &config).unwrap();
    let names: Vec<_> = exported.iter().map(|r| r.product_name.as_str()).collect();
    assert_eq!(names, ["Vegobullar", "Vegofärs"]);
}

//! Catalog loading tests against temp files.

mod common;

use catalogue_analyse::loader::{parse_catalog, CatalogLoader};
use catalogue_analyse::CatalogueError;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_json(contents: &str) -> NamedTempFile {
    let mut tmp = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    tmp.write_all(contents.as_bytes()).unwrap();
    tmp.flush().unwrap();
    tmp
}

#[test]
fn loads_plain_json_catalog() {
    let tmp = write_json(&common::sample_json().to_string());
    let loader = CatalogLoader::new(Some(tmp.path().to_path_buf()));

    let records = loader.load().unwrap();
    assert_eq!(records.len(), 6);
    assert_eq!(records[0].model, "RB-100");
    assert_eq!(records[0].purchase_ils, Some(108.0));
    assert_eq!(records[0].category.as_deref(), Some("Robes"));
}

#[test]
fn loads_gzip_catalog() {
    let mut tmp = tempfile::Builder::new().suffix(".json.gz").tempfile().unwrap();
    {
        let mut encoder = GzEncoder::new(tmp.as_file_mut(), Compression::default());
        encoder
            .write_all(common::sample_json().to_string().as_bytes())
            .unwrap();
        encoder.finish().unwrap();
    }

    let records = CatalogLoader::new(Some(tmp.path().to_path_buf()))
        .load()
        .unwrap();
    assert_eq!(records.len(), 6);
}

#[test]
fn size_map_keeps_catalog_order() {
    let records = parse_catalog(&common::sample_json().to_string()).unwrap();
    let labels: Vec<&str> = records[1].sizes.keys().map(|k| k.as_str()).collect();
    assert_eq!(labels, vec!["M", "L", "XL"]);

    let available: Vec<&str> = records[0].available_sizes().collect();
    assert_eq!(available, vec!["S", "L"]);
}

#[test]
fn optional_fields_default_to_absent() {
    let records = parse_catalog(r#"[{"modele": "MIN"}]"#).unwrap();
    assert_eq!(records.len(), 1);
    assert!(records[0].description.is_none());
    assert!(records[0].wholesale_price.is_none());
    assert!(records[0].sizes.is_empty());
}

#[test]
fn null_size_map_reads_as_empty() {
    let records =
        parse_catalog(r#"[{"modele": "A", "prix_achat_ils": 108, "tailles": null}]"#).unwrap();
    assert_eq!(records.len(), 1);
    assert!(records[0].sizes.is_empty());
    assert_eq!(records[0].available_sizes().count(), 0);
}

#[test]
fn integer_prices_are_accepted() {
    let records = parse_catalog(r#"[{"modele": "INT", "prix_achat_ils": 108, "extra": true}]"#).unwrap();
    assert_eq!(records[0].purchase_ils, Some(108.0));
}

#[test]
fn empty_array_is_an_empty_catalog() {
    assert!(parse_catalog("[]").unwrap().is_empty());
}

#[test]
fn non_array_document_is_rejected() {
    let err = parse_catalog(r#"{"modele": "X"}"#).unwrap_err();
    assert!(matches!(err, CatalogueError::InvalidCatalog(_)));
    assert!(err.to_string().contains("an object"));
}

#[test]
fn record_without_model_code_is_rejected() {
    let err = parse_catalog(r#"[{"modele": "OK"}, {"description": "sans code"}]"#).unwrap_err();
    assert!(matches!(err, CatalogueError::InvalidCatalog(_)));
    assert!(err.to_string().contains("#1"));
}

#[test]
fn malformed_json_is_a_json_error() {
    let err = parse_catalog("[{").unwrap_err();
    assert!(matches!(err, CatalogueError::Json(_)));
}

#[test]
fn missing_file_is_not_found() {
    let tmp = tempfile::tempdir().unwrap();
    let loader = CatalogLoader::new(Some(tmp.path().join("absent.json")));

    let err = loader.load().unwrap_err();
    assert!(matches!(err, CatalogueError::NotFound(_)));
}

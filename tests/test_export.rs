//! CSV export tests.

mod common;

use catalogue_analyse::export::{serialize, write_csv, HEADERS};
use catalogue_analyse::models::CatalogRecord;
use catalogue_analyse::normalize::normalize;

#[test]
fn header_row_lists_columns_in_order() {
    let text = serialize(&[]).unwrap();
    assert_eq!(text, HEADERS.join(","));
    assert!(text.starts_with("Modèle,Description,Couleur,Sexe,Catégorie,Prix NET USD"));
}

#[test]
fn one_row_per_record_without_trailing_newline() {
    let records = common::sample_normalized();
    let text = serialize(&records).unwrap();

    assert_eq!(text.lines().count(), records.len() + 1);
    assert!(!text.ends_with('\n'));
}

#[test]
fn row_fields_follow_header_order() {
    let records = common::sample_normalized();
    let text = serialize(&records[..1]).unwrap();
    let row = text.lines().nth(1).unwrap();

    assert_eq!(
        row,
        "RB-100,Robe longue fleurie,Rouge,Femme,Robes,33,100,2.64,8,35.64,108,\
         150,42,28,180,72,40,250,142,56.8"
    );
}

#[test]
fn absent_values_are_empty_cells() {
    let records = common::sample_normalized();
    let unpriced = records.iter().find(|r| r.model() == "ZZ-999").unwrap();
    let text = serialize(std::slice::from_ref(unpriced)).unwrap();
    let row = text.lines().nth(1).unwrap();

    assert_eq!(row, "ZZ-999,Échantillon,,Homme,,,,,,,,,,,,,,,,");
    assert_eq!(row.split(',').count(), HEADERS.len());
}

#[test]
fn fields_with_commas_and_quotes_are_quoted() {
    let mut r = CatalogRecord::new("Q-1");
    r.description = Some("Robe \"été\", col V".to_string());
    let text = serialize(&normalize(&[r])).unwrap();
    let row = text.lines().nth(1).unwrap();

    assert!(row.starts_with("Q-1,\"Robe \"\"été\"\", col V\","));
}

#[test]
fn quoted_output_parses_back_to_the_same_fields() {
    let mut r = CatalogRecord::new("NL-1");
    r.description = Some("ligne 1\nligne 2".to_string());
    r.color = Some("Rouge, Blanc".to_string());
    let text = serialize(&normalize(&[r])).unwrap();

    let mut reader = csv::ReaderBuilder::new().from_reader(text.as_bytes());
    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 1);
    assert_eq!(&rows[0][1], "ligne 1\nligne 2");
    assert_eq!(&rows[0][2], "Rouge, Blanc");
}

#[test]
fn write_csv_creates_the_file() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("out").join("catalogue_analyse_complete.csv");
    let records = common::sample_normalized();

    write_csv(&records, &path).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, serialize(&records).unwrap());
}

//! Shared test fixtures for the catalogue integration tests.
//!
//! Provides a small sample catalog as JSON (the on-disk shape) and helpers to
//! build records, normalized records and a ready `Catalogue` from it.

#![allow(dead_code)]

use catalogue_analyse::models::{CatalogRecord, NormalizedRecord};
use catalogue_analyse::normalize::normalize;
use catalogue_analyse::Catalogue;

/// Six products covering two genders, an unspecified gender, three
/// sub-categories, a missing category and a product without prices.
pub fn sample_json() -> serde_json::Value {
    serde_json::json!([
        {
            "modele": "RB-100",
            "description": "Robe longue fleurie",
            "couleur": "Rouge",
            "sexe": "Femme",
            "sous_categorie": "Robes",
            "prix_achat_usd": 35.64,
            "prix_achat_ils": 108.0,
            "prix_grossiste": 150.0,
            "prix_club": 180.0,
            "prix_detail": 250.0,
            "marge_grossiste_ils": 42.0,
            "marge_grossiste_pct": 28.0,
            "marge_club_ils": 72.0,
            "marge_club_pct": 40.0,
            "marge_detail_ils": 142.0,
            "marge_detail_pct": 56.8,
            "tailles": { "S": true, "M": false, "L": true }
        },
        {
            "modele": "CH-200",
            "description": "Chemise lin",
            "couleur": "Blanc",
            "sexe": "Homme",
            "sous_categorie": "Chemises",
            "prix_achat_usd": 71.28,
            "prix_achat_ils": 216.0,
            "prix_grossiste": 300.0,
            "prix_club": 350.0,
            "prix_detail": 420.0,
            "marge_grossiste_ils": 84.0,
            "marge_grossiste_pct": 28.0,
            "marge_club_ils": 134.0,
            "marge_club_pct": 38.3,
            "marge_detail_ils": 204.0,
            "marge_detail_pct": 48.6,
            "tailles": { "M": true, "L": true, "XL": false }
        },
        {
            "modele": "RB-101",
            "description": "Robe courte, col V",
            "couleur": "Bleu",
            "sexe": "Femme",
            "sous_categorie": "Robes",
            "prix_achat_usd": 17.82,
            "prix_achat_ils": 54.0,
            "prix_grossiste": 90.0,
            "prix_club": 110.0,
            "prix_detail": 250.0,
            "marge_grossiste_ils": 36.0,
            "marge_grossiste_pct": 40.0,
            "marge_club_ils": 56.0,
            "marge_club_pct": 50.9,
            "marge_detail_ils": 196.0,
            "marge_detail_pct": 78.4
        },
        {
            "modele": "JP-300",
            "description": "Jupe plissée",
            "couleur": "Noir",
            "sexe": "Femme",
            "sous_categorie": "Jupes",
            "prix_achat_usd": 26.73,
            "prix_achat_ils": 81.0,
            "prix_grossiste": 120.0,
            "prix_club": 140.0,
            "prix_detail": 190.0,
            "marge_grossiste_pct": 32.5,
            "marge_club_pct": 42.1,
            "marge_detail_pct": 57.4
        },
        {
            "modele": "AC-400",
            "description": "Foulard soie",
            "couleur": "Rouge",
            "prix_achat_usd": 8.91,
            "prix_achat_ils": 27.0,
            "prix_grossiste": 45.0,
            "prix_detail": 80.0,
            "marge_grossiste_pct": 40.0
        },
        {
            "modele": "ZZ-999",
            "description": "Échantillon",
            "sexe": "Homme"
        }
    ])
}

pub fn sample_records() -> Vec<CatalogRecord> {
    serde_json::from_value(sample_json()).unwrap()
}

pub fn sample_normalized() -> Vec<NormalizedRecord> {
    normalize(&sample_records())
}

pub fn sample_catalogue() -> Catalogue {
    Catalogue::builder()
        .records(sample_records())
        .build()
        .unwrap()
}

/// A priced record with only the fields the pipeline looks at.
pub fn priced(model: &str, purchase_ils: f64, wholesale: f64) -> CatalogRecord {
    let mut r = CatalogRecord::new(model);
    r.purchase_ils = Some(purchase_ils);
    r.wholesale_price = Some(wholesale);
    r
}

/// Records A and B from the reference two-product scenario.
pub fn two_records() -> Vec<CatalogRecord> {
    vec![priced("A", 108.0, 50.0), priced("B", 216.0, 100.0)]
}

pub fn models(records: &[NormalizedRecord]) -> Vec<&str> {
    records.iter().map(|r| r.model()).collect()
}

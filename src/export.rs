//! CSV export of a filtered record set.
//!
//! Fields containing a comma, quote or line break are quoted; missing values
//! become empty cells.

use std::fs;
use std::path::Path;

use crate::error::{CatalogueError, Result};
use crate::models::{NormalizedRecord, Tier};

pub const HEADERS: [&str; 20] = [
    "Modèle",
    "Description",
    "Couleur",
    "Sexe",
    "Catégorie",
    "Prix NET USD",
    "Prix NET ILS",
    "Transport USD",
    "Transport ILS",
    "Total USD",
    "Total ILS",
    "Prix Grossiste",
    "Marge Grossiste ₪",
    "Marge Grossiste %",
    "Prix Club",
    "Marge Club ₪",
    "Marge Club %",
    "Prix Détail",
    "Marge Détail ₪",
    "Marge Détail %",
];

/// Render the records as CSV text: header, then one row per record.
///
/// Rows are separated by `\n`, with no trailing newline.
pub fn serialize(records: &[NormalizedRecord]) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(HEADERS)?;
    for r in records {
        writer.write_record(row(r))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| CatalogueError::Io(e.into_error()))?;
    let mut text = String::from_utf8(bytes)
        .map_err(|e| CatalogueError::InvalidArgument(format!("Export is not UTF-8: {}", e)))?;
    if text.ends_with('\n') {
        text.pop();
    }
    Ok(text)
}

/// Serialize the records and write them to `path`.
pub fn write_csv(records: &[NormalizedRecord], path: &Path) -> Result<()> {
    let text = serialize(records)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, text)?;
    tracing::info!(path = %path.display(), rows = records.len(), "catalog export written");
    Ok(())
}

fn row(r: &NormalizedRecord) -> Vec<String> {
    let c = &r.record;
    let mut fields = vec![
        c.model.clone(),
        text(&c.description),
        text(&c.color),
        text(&c.gender),
        text(&c.category),
        number(r.net_usd),
        number(r.net_ils),
        number(r.transport_usd),
        number(r.transport_ils),
        number(c.purchase_usd),
        number(c.purchase_ils),
    ];
    for tier in Tier::ALL {
        fields.push(number(c.price(tier)));
        fields.push(number(c.margin_ils(tier)));
        fields.push(number(c.margin_pct(tier)));
    }
    fields
}

fn text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

fn number(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

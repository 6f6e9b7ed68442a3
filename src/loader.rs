//! Catalog file loader.
//!
//! Reads the static catalog document (a JSON array of product objects) from
//! disk. Files ending in `.gz` are decompressed transparently.

use crate::config;
use crate::error::{CatalogueError, Result};
use crate::models::CatalogRecord;
use flate2::read::GzDecoder;
use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

/// Loads catalog records from a JSON file.
pub struct CatalogLoader {
    /// Location of the catalog document.
    pub path: PathBuf,
}

impl CatalogLoader {
    /// Create a loader for `path`.
    ///
    /// If `path` is `None`, uses [`config::default_catalog_path`].
    pub fn new(path: Option<PathBuf>) -> Self {
        Self {
            path: path.unwrap_or_else(config::default_catalog_path),
        }
    }

    /// Read the raw document text (handles `.gz` transparently).
    fn read_text(&self) -> Result<String> {
        if !self.path.exists() {
            return Err(CatalogueError::NotFound(format!(
                "Catalog file {} does not exist",
                self.path.display()
            )));
        }

        let mut contents = String::new();
        if is_gzip(&self.path) {
            let file = fs::File::open(&self.path)?;
            let decoder = GzDecoder::new(BufReader::new(file));
            BufReader::new(decoder).read_to_string(&mut contents)?;
        } else {
            contents = fs::read_to_string(&self.path)?;
        }
        Ok(contents)
    }

    /// Load and parse every record in the catalog.
    ///
    /// The document must be a JSON array; any other shape is reported as
    /// [`CatalogueError::InvalidCatalog`].
    pub fn load(&self) -> Result<Vec<CatalogRecord>> {
        let contents = self.read_text()?;
        let records = parse_catalog(&contents)?;
        tracing::info!(
            path = %self.path.display(),
            records = records.len(),
            "catalog loaded"
        );
        Ok(records)
    }
}

/// Parse a catalog document already held in memory.
pub fn parse_catalog(contents: &str) -> Result<Vec<CatalogRecord>> {
    let value: serde_json::Value = serde_json::from_str(contents)?;
    let items = match value {
        serde_json::Value::Array(items) => items,
        other => {
            return Err(CatalogueError::InvalidCatalog(format!(
                "expected a JSON array of products, found {}",
                json_kind(&other)
            )))
        }
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value(item).map_err(|e| {
                CatalogueError::InvalidCatalog(format!("product #{}: {}", index, e))
            })
        })
        .collect()
}

fn is_gzip(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some("gz")
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

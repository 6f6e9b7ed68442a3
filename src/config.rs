use std::path::PathBuf;

/// Display-only exchange rate: 1 USD in ILS.
pub const USD_TO_ILS: f64 = 3.03;
/// Purchase prices include an 8% transport surcharge.
pub const NET_DIVISOR: f64 = 1.08;
/// Multiplier applied to ILS amounts to express them in USD.
pub const USD_FACTOR: f64 = 0.33;

pub const PAGE_SIZE: usize = 50;
pub const TOP_CATEGORY_LIMIT: usize = 8;

pub const UNSPECIFIED_GENDER: &str = "Non défini";
pub const OTHER_CATEGORY: &str = "Autre";

pub const EXPORT_FILENAME: &str = "catalogue_analyse_complete.csv";
pub const EXPORT_MIME: &str = "text/csv";

/// Environment variable overriding the default catalog location.
pub const CATALOGUE_DATA_ENV: &str = "CATALOGUE_DATA";
pub const CATALOG_FILENAME: &str = "catalogData.json";

/// Currency constants used when deriving net and transport prices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricingConfig {
    pub usd_to_ils: f64,
    pub net_divisor: f64,
    pub usd_factor: f64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            usd_to_ils: USD_TO_ILS,
            net_divisor: NET_DIVISOR,
            usd_factor: USD_FACTOR,
        }
    }
}

pub fn default_catalog_path() -> PathBuf {
    if let Some(path) = std::env::var_os(CATALOGUE_DATA_ENV) {
        return PathBuf::from(path);
    }
    if let Some(data) = dirs::data_dir() {
        data.join("catalogue-analyse").join(CATALOG_FILENAME)
    } else {
        PathBuf::from(CATALOG_FILENAME)
    }
}

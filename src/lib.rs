//! Pricing analysis over a static product catalogue.
//!
//! Loads a catalog of products, splits each purchase price into its net and
//! transport parts, computes catalog-wide averages and breakdowns, and serves
//! filtered, sorted and paginated views that can be exported as CSV.
//!
//! # Quick start
//!
//! ```no_run
//! use catalogue_analyse::Catalogue;
//! use catalogue_analyse::models::{QueryState, SortMode, Tier};
//!
//! let catalogue = Catalogue::builder().path("catalogData.json").build().unwrap();
//!
//! // Catalog-wide averages
//! let stats = catalogue.stats().summary();
//!
//! // First page of dresses, most expensive retail price first
//! let state = QueryState::new()
//!     .with_search("robe")
//!     .with_sort(SortMode::ByPrice(Tier::Retail));
//! let page = catalogue.records().page(&state);
//! ```

pub mod config;
pub mod error;
pub mod export;
pub mod filter;
pub mod loader;
pub mod models;
pub mod normalize;
pub mod pagination;
pub mod queries;
pub mod stats;

pub use config::PricingConfig;
pub use error::{CatalogueError, Result};
pub use filter::RecordFilter;
pub use loader::CatalogLoader;

use std::cell::RefCell;
use std::fmt;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use models::{AggregateStats, CatalogRecord, NormalizedRecord, QueryState};

// ---------------------------------------------------------------------------
// CatalogueBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`Catalogue`].
///
/// Use [`Catalogue::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](CatalogueBuilder::build).
pub struct CatalogueBuilder {
    path: Option<PathBuf>,
    records: Option<Vec<CatalogRecord>>,
    pricing: PricingConfig,
    page_size: usize,
}

impl Default for CatalogueBuilder {
    fn default() -> Self {
        Self {
            path: None,
            records: None,
            pricing: PricingConfig::default(),
            page_size: config::PAGE_SIZE,
        }
    }
}

impl CatalogueBuilder {
    /// Load the catalog from this file.
    ///
    /// If neither a path nor records are given, the default location is used
    /// (see [`config::default_catalog_path`]).
    pub fn path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Use these records instead of reading a file.
    ///
    /// Cannot be combined with [`path`](Self::path); `build` rejects both.
    pub fn records(mut self, records: Vec<CatalogRecord>) -> Self {
        self.records = Some(records);
        self
    }

    /// Override the currency constants. Defaults to [`PricingConfig::default`].
    pub fn pricing(mut self, pricing: PricingConfig) -> Self {
        self.pricing = pricing;
        self
    }

    /// Records per page. Defaults to 50.
    pub fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Build the catalogue: load, normalize and compute statistics once.
    pub fn build(self) -> Result<Catalogue> {
        if self.page_size == 0 {
            return Err(CatalogueError::InvalidArgument(
                "page size must be at least 1".to_string(),
            ));
        }
        for (name, value) in [
            ("net divisor", self.pricing.net_divisor),
            ("USD factor", self.pricing.usd_factor),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(CatalogueError::InvalidArgument(format!(
                    "{} must be a positive number, got {}",
                    name, value
                )));
            }
        }

        let raw = match (self.records, self.path) {
            (Some(_), Some(path)) => {
                return Err(CatalogueError::InvalidArgument(format!(
                    "both records and a catalog path ({}) were given",
                    path.display()
                )));
            }
            (Some(records), None) => records,
            (None, path) => CatalogLoader::new(path).load()?,
        };

        let records = normalize::normalize_with(&raw, &self.pricing);
        let stats = stats::compute_stats(&records);
        tracing::info!(
            records = records.len(),
            page_size = self.page_size,
            "catalogue ready"
        );

        Ok(Catalogue {
            records,
            stats,
            pricing: self.pricing,
            page_size: self.page_size,
            view_cache: RefCell::new(None),
        })
    }
}

// ---------------------------------------------------------------------------
// Catalogue
// ---------------------------------------------------------------------------

/// The main entry point: an immutable, normalized product catalogue.
///
/// Statistics are computed once at build time. Query accessors return
/// lightweight borrowing wrappers.
pub struct Catalogue {
    pub(crate) records: Vec<NormalizedRecord>,
    pub(crate) stats: AggregateStats,
    pub(crate) pricing: PricingConfig,
    pub(crate) page_size: usize,
    /// Last filtered view, keyed on its query state at page 1.
    pub(crate) view_cache: RefCell<Option<(QueryState, Rc<[NormalizedRecord]>)>>,
}

impl Catalogue {
    /// Create a new builder for configuring the catalogue.
    pub fn builder() -> CatalogueBuilder {
        CatalogueBuilder::default()
    }

    // -- Query accessors ---------------------------------------------------

    /// Access record lookups, filtered views and pages.
    pub fn records(&self) -> queries::RecordQuery<'_> {
        queries::RecordQuery::new(self)
    }

    /// Access catalog-wide statistics and breakdowns.
    pub fn stats(&self) -> queries::StatsQuery<'_> {
        queries::StatsQuery::new(self)
    }

    // -- Export ------------------------------------------------------------

    /// Render the view selected by `state` as CSV (all pages).
    pub fn export(&self, state: &QueryState) -> Result<String> {
        let view = self.records().filtered(state);
        export::serialize(&view)
    }

    /// Write the view selected by `state` to a CSV file.
    pub fn export_to(&self, state: &QueryState, path: &Path) -> Result<()> {
        let view = self.records().filtered(state);
        export::write_csv(&view, path)
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn pricing(&self) -> &PricingConfig {
        &self.pricing
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for Catalogue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Catalogue(records={}, page_size={}, 1 USD = {} ILS)",
            self.records.len(),
            self.page_size,
            self.pricing.usd_to_ils
        )
    }
}

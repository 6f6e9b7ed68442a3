//! Record filter builder with search, categorical filters and tier sorting.
//!
//! Conditions combine with AND. Builder methods return `&mut Self` for chaining.
//!
//! # Example
//!
//! ```rust
//! use catalogue_analyse::filter::RecordFilter;
//! use catalogue_analyse::models::{NormalizedRecord, SortMode, Tier};
//!
//! let records: Vec<NormalizedRecord> = Vec::new();
//! let hits = RecordFilter::new()
//!     .search("rouge")
//!     .gender("Femme")
//!     .sort(SortMode::ByPrice(Tier::Retail))
//!     .apply(&records);
//! assert!(hits.is_empty());
//! ```

use crate::models::{FilterOptions, NormalizedRecord, QueryState, SortMode};

/// Builds a filtered, sorted view over normalized records.
///
/// Methods return `&mut Self` for chaining; [`apply`](Self::apply) never
/// mutates its input.
#[derive(Debug, Clone, Default)]
pub struct RecordFilter {
    search: Option<String>,
    gender: Option<String>,
    category: Option<String>,
    sort: SortMode,
}

impl RecordFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the filter described by a query state (page is ignored).
    pub fn from_state(state: &QueryState) -> Self {
        let mut filter = Self::new();
        filter.search(&state.search).sort(state.sort);
        if let Some(ref g) = state.gender {
            filter.gender(g);
        }
        if let Some(ref c) = state.category {
            filter.category(c);
        }
        filter
    }

    /// Case-insensitive substring match on model code, description and color.
    ///
    /// An empty needle matches every record.
    pub fn search(&mut self, needle: &str) -> &mut Self {
        self.search = if needle.is_empty() {
            None
        } else {
            Some(needle.to_lowercase())
        };
        self
    }

    /// Exact match on gender.
    pub fn gender(&mut self, gender: &str) -> &mut Self {
        self.gender = Some(gender.to_string());
        self
    }

    /// Exact match on sub-category.
    pub fn category(&mut self, category: &str) -> &mut Self {
        self.category = Some(category.to_string());
        self
    }

    pub fn sort(&mut self, sort: SortMode) -> &mut Self {
        self.sort = sort;
        self
    }

    /// Whether a single record passes every condition.
    pub fn matches(&self, record: &NormalizedRecord) -> bool {
        let r = &record.record;

        if let Some(ref needle) = self.search {
            let hit = [Some(r.model.as_str()), r.description.as_deref(), r.color.as_deref()]
                .into_iter()
                .flatten()
                .any(|field| field.to_lowercase().contains(needle.as_str()));
            if !hit {
                return false;
            }
        }

        if let Some(ref gender) = self.gender {
            if r.gender.as_deref() != Some(gender.as_str()) {
                return false;
            }
        }

        if let Some(ref category) = self.category {
            if r.category.as_deref() != Some(category.as_str()) {
                return false;
            }
        }

        true
    }

    /// Filter then sort, returning fresh copies of the matching records.
    pub fn apply(&self, records: &[NormalizedRecord]) -> Vec<NormalizedRecord> {
        let mut out: Vec<NormalizedRecord> = records
            .iter()
            .filter(|r| self.matches(r))
            .cloned()
            .collect();

        if let Some(tier) = self.sort.tier() {
            // sort_by is stable; missing prices sort as 0
            out.sort_by(|a, b| {
                let pa = a.record.price(tier).unwrap_or(0.0);
                let pb = b.record.price(tier).unwrap_or(0.0);
                pb.total_cmp(&pa)
            });
        }

        out
    }
}

/// Apply a query state to the records.
pub fn query(records: &[NormalizedRecord], state: &QueryState) -> Vec<NormalizedRecord> {
    RecordFilter::from_state(state).apply(records)
}

/// Distinct genders (first-appearance order) and categories (sorted).
pub fn filter_options(records: &[NormalizedRecord]) -> FilterOptions {
    let mut genders: Vec<String> = Vec::new();
    let mut categories: Vec<String> = Vec::new();

    for r in records {
        if let Some(g) = r.record.gender.as_deref().filter(|g| !g.is_empty()) {
            if !genders.iter().any(|known| known == g) {
                genders.push(g.to_string());
            }
        }
        if let Some(c) = r.record.category.as_deref().filter(|c| !c.is_empty()) {
            if !categories.iter().any(|known| known == c) {
                categories.push(c.to_string());
            }
        }
    }

    categories.sort();
    FilterOptions { genders, categories }
}

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::record::Tier;
use crate::error::CatalogueError;

/// Selector value meaning "no restriction" for the gender and category filters.
pub const ALL: &str = "all";

// ---------------------------------------------------------------------------
// SortMode
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortMode {
    /// Keep catalog order.
    #[default]
    Catalog,
    /// Descending by the given tier's sale price.
    ByPrice(Tier),
}

impl SortMode {
    pub fn tier(self) -> Option<Tier> {
        match self {
            SortMode::Catalog => None,
            SortMode::ByPrice(tier) => Some(tier),
        }
    }
}

impl FromStr for SortMode {
    type Err = CatalogueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" | "catalog" | "" => Ok(SortMode::Catalog),
            "grossiste" | "wholesale" => Ok(SortMode::ByPrice(Tier::Wholesale)),
            "club" => Ok(SortMode::ByPrice(Tier::Club)),
            "detail" | "détail" | "retail" => Ok(SortMode::ByPrice(Tier::Retail)),
            other => Err(CatalogueError::InvalidArgument(format!(
                "Unknown sort mode: {}",
                other
            ))),
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SortMode::Catalog => "all",
            SortMode::ByPrice(Tier::Wholesale) => "grossiste",
            SortMode::ByPrice(Tier::Club) => "club",
            SortMode::ByPrice(Tier::Retail) => "detail",
        };
        f.write_str(s)
    }
}

// ---------------------------------------------------------------------------
// QueryState - Search, filters, sort and page selected by the user
// ---------------------------------------------------------------------------

/// The current view request.
///
/// Every `with_*` method except [`with_page`](Self::with_page) returns a state
/// on page 1, so narrowing the result set can never leave the page out of range.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct QueryState {
    pub search: String,
    /// `None` means all genders.
    pub gender: Option<String>,
    /// `None` means all categories.
    pub category: Option<String>,
    pub sort: SortMode,
    /// 1-based page number.
    pub page: usize,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            search: String::new(),
            gender: None,
            category: None,
            sort: SortMode::Catalog,
            page: 1,
        }
    }
}

impl QueryState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(&self, search: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            page: 1,
            ..self.clone()
        }
    }

    /// Restrict to one gender; `"all"` lifts the restriction.
    pub fn with_gender(&self, gender: &str) -> Self {
        Self {
            gender: selection(gender),
            page: 1,
            ..self.clone()
        }
    }

    /// Restrict to one sub-category; `"all"` lifts the restriction.
    pub fn with_category(&self, category: &str) -> Self {
        Self {
            category: selection(category),
            page: 1,
            ..self.clone()
        }
    }

    pub fn with_sort(&self, sort: SortMode) -> Self {
        Self {
            sort,
            page: 1,
            ..self.clone()
        }
    }

    pub fn with_page(&self, page: usize) -> Self {
        Self {
            page,
            ..self.clone()
        }
    }

    /// True when both states select the same records in the same order.
    pub fn same_view(&self, other: &QueryState) -> bool {
        self.search == other.search
            && self.gender == other.gender
            && self.category == other.category
            && self.sort == other.sort
    }
}

fn selection(value: &str) -> Option<String> {
    if value == ALL {
        None
    } else {
        Some(value.to_string())
    }
}

// ---------------------------------------------------------------------------
// ExpansionState - Which row, if any, shows its detail panel
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpansionState {
    expanded: Option<String>,
}

impl ExpansionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Expand `model`, or collapse it if it is already the expanded row.
    pub fn toggle(&self, model: &str) -> Self {
        if self.is_expanded(model) {
            Self { expanded: None }
        } else {
            Self {
                expanded: Some(model.to_string()),
            }
        }
    }

    pub fn is_expanded(&self, model: &str) -> bool {
        self.expanded.as_deref() == Some(model)
    }

    pub fn expanded(&self) -> Option<&str> {
        self.expanded.as_deref()
    }
}

// ---------------------------------------------------------------------------
// FilterOptions / PageView - Outputs handed to the presentation layer
// ---------------------------------------------------------------------------

/// Values offered by the gender and category selectors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct FilterOptions {
    /// In order of first appearance.
    pub genders: Vec<String>,
    /// Sorted.
    pub categories: Vec<String>,
}

/// One page of a filtered view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct PageView<T> {
    pub items: Vec<T>,
    /// The page actually served, after clamping.
    pub page: usize,
    pub page_count: usize,
    /// Number of records in the whole filtered view.
    pub total: usize,
}
